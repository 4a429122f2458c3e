//! Tokens produced by the scanner.

use retype_ast::TokenCode;
use retype_core::text::SourceLocation;

/// The decoded payload of a token.
#[derive(Debug, Clone, PartialEq)]
pub enum TokenValue {
    Boolean(bool),
    Number(f64),
    /// A decoded string literal or cooked template piece.
    String(String),
    /// The decoded name of an identifier or keyword.
    Identifier(String),
    /// Source text, for punctuation, regular expressions and end of input.
    Raw(String),
}

/// A scanned token. Two tokens are equal when code, text, value and
/// location all are.
#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    pub code: TokenCode,
    /// The exact source text, escapes included.
    pub text: String,
    pub value: TokenValue,
    pub location: SourceLocation,
}

impl Token {
    pub fn new(code: TokenCode, text: String, value: TokenValue, location: SourceLocation) -> Self {
        Self {
            code,
            text,
            value,
            location,
        }
    }

    /// The decoded name of an identifier or keyword token.
    pub fn identifier_name(&self) -> Option<&str> {
        match &self.value {
            TokenValue::Identifier(name) => Some(name),
            // true and false carry a Boolean value but are still words
            TokenValue::Boolean(true) => Some("true"),
            TokenValue::Boolean(false) => Some("false"),
            _ => None,
        }
    }

    pub fn string_value(&self) -> Option<&str> {
        match &self.value {
            TokenValue::String(s) => Some(s),
            _ => None,
        }
    }

    pub fn number_value(&self) -> Option<f64> {
        match self.value {
            TokenValue::Number(n) => Some(n),
            _ => None,
        }
    }

    #[inline]
    pub fn is(&self, code: TokenCode) -> bool {
        self.code == code
    }

    /// The byte offset just past this token.
    #[inline]
    pub fn end(&self) -> u32 {
        self.location.span.end()
    }
}
