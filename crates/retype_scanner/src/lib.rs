//! retype_scanner: Lexer for the typed JavaScript dialect.
//!
//! Produces a vector of tokens from source text, with support for:
//! - Unicode identifiers and `\u` escapes in identifier names
//! - Binary, octal, hexadecimal and decimal numeric literals
//! - String and template literals with cooked values
//! - Regular expression literals, told apart from division by the
//!   previous token

mod char_codes;
pub mod cursor;
mod scanner;
mod token;

pub use scanner::{tokenize, Scanner};
pub use token::{Token, TokenValue};
