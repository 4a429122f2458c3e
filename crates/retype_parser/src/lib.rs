//! retype_parser: Recursive descent parser for a typed superset of ECMAScript.
//!
//! Parses the token stream from `retype_scanner` into an arena-allocated
//! AST built through a shared [`retype_ast::NodeFactory`]. Parsing stops at
//! the first syntax error, which is returned as a
//! [`retype_diagnostics::SyntaxError`].

mod expressions;
mod functions;
mod modules;
pub mod options;
mod parser;
mod precedence;
mod statements;
pub mod token_stream;
mod types;
mod utilities;

pub use options::{ParseEntry, ParseOptions};
pub use parser::{Parsed, Parser};
pub use token_stream::{Checkpoint, TokenStream};
