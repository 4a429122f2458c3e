//! retype_core: Core utilities for the retype translator.
//!
//! Provides text spans, line/column positions, source locations and the
//! string interner shared by the lexer, the AST factory and the parser.

pub mod intern;
pub mod text;

// Re-export commonly used types
pub use intern::{StringInterner, Symbol};
pub use text::{LineAndColumn, SourceLocation, TextSpan};
