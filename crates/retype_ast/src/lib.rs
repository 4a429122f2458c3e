//! retype_ast: token codes, keyword tables and the abstract syntax tree.
//!
//! Nodes are immutable and arena-allocated; [`NodeFactory`] builds them and
//! interns identifiers so that equal names share one node.

pub mod factory;
pub mod flags;
pub mod keywords;
pub mod node;
pub mod token_code;
pub mod visitor;

// Re-export key types
pub use factory::NodeFactory;
pub use flags::ModifierFlags;
pub use keywords::{IdentifierPosition, KeywordCategory};
pub use node::*;
pub use token_code::TokenCode;
