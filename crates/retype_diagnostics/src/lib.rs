//! retype_diagnostics: Fatal syntax errors and their message templates.
//!
//! Lexing and parsing stop at the first violation. The error that escapes
//! carries a human-readable message, the offending text and the source
//! location, and renders through [`miette`] with a label on the span.

// Spurious warnings from miette derive macro expansion
#![allow(unused_assignments)]

use miette::{Diagnostic, SourceSpan};
use retype_core::text::SourceLocation;
use std::fmt;
use thiserror::Error;

/// Which stage rejected the input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// A malformed token: bad identifier start, bad or overflowing numeric
    /// literal, malformed escape, unterminated literal or comment.
    Lexical,
    /// An unexpected token for the grammar position, or a violated
    /// structural rule such as a required parameter after an optional one.
    Parse,
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ErrorKind::Lexical => write!(f, "lexical error"),
            ErrorKind::Parse => write!(f, "parse error"),
        }
    }
}

/// A message template. `{0}`, `{1}`, ... are replaced by arguments.
#[derive(Debug, Clone)]
pub struct DiagnosticMessage {
    pub kind: ErrorKind,
    pub message: &'static str,
}

/// A fatal lexical or parse error.
#[derive(Debug, Clone, PartialEq, Eq, Error, Diagnostic)]
#[error("{kind} at {location}: {message}")]
#[diagnostic()]
pub struct SyntaxError {
    pub kind: ErrorKind,
    /// The resolved message text.
    pub message: String,
    /// The source text the error points at (empty at end of input).
    pub text: String,
    pub location: SourceLocation,
    #[label("here")]
    pub span: SourceSpan,
}

impl SyntaxError {
    pub fn new(
        message: &DiagnosticMessage,
        args: &[&str],
        text: impl Into<String>,
        location: SourceLocation,
    ) -> Self {
        Self {
            kind: message.kind,
            message: format_message(message.message, args),
            text: text.into(),
            location,
            span: SourceSpan::new(
                (location.span.start as usize).into(),
                location.span.length as usize,
            ),
        }
    }

    pub fn is_lexical(&self) -> bool {
        self.kind == ErrorKind::Lexical
    }

    pub fn is_parse(&self) -> bool {
        self.kind == ErrorKind::Parse
    }
}

/// Format a message template by replacing `{0}`, `{1}`, etc. with arguments.
pub fn format_message(template: &str, args: &[&str]) -> String {
    let mut result = template.to_string();
    for (i, arg) in args.iter().enumerate() {
        result = result.replace(&format!("{{{}}}", i), arg);
    }
    result
}

/// Convenience alias for fallible lexing and parsing.
pub type Result<T> = std::result::Result<T, SyntaxError>;

// ============================================================================
// Messages
// ============================================================================

pub mod messages {
    use super::*;

    macro_rules! diag {
        (Lexical, $msg:expr) => {
            DiagnosticMessage { kind: ErrorKind::Lexical, message: $msg }
        };
        (Parse, $msg:expr) => {
            DiagnosticMessage { kind: ErrorKind::Parse, message: $msg }
        };
    }

    // ========================================================================
    // Lexer
    // ========================================================================
    pub const INVALID_CHARACTER: DiagnosticMessage = diag!(Lexical, "Invalid character '{0}'.");
    pub const UNTERMINATED_STRING_LITERAL: DiagnosticMessage = diag!(Lexical, "Unterminated string literal.");
    pub const UNTERMINATED_TEMPLATE_LITERAL: DiagnosticMessage = diag!(Lexical, "Unterminated template literal.");
    pub const UNTERMINATED_REGULAR_EXPRESSION: DiagnosticMessage = diag!(Lexical, "Unterminated regular expression literal.");
    pub const ASTERISK_SLASH_EXPECTED: DiagnosticMessage = diag!(Lexical, "'*/' expected.");
    pub const INVALID_ESCAPE_SEQUENCE: DiagnosticMessage = diag!(Lexical, "Invalid escape sequence '{0}'.");
    pub const INVALID_IDENTIFIER_CHARACTER: DiagnosticMessage = diag!(Lexical, "Invalid character in identifier '{0}'.");
    pub const DIGIT_EXPECTED: DiagnosticMessage = diag!(Lexical, "Digit expected.");
    pub const BINARY_DIGIT_EXPECTED: DiagnosticMessage = diag!(Lexical, "Binary digit expected.");
    pub const OCTAL_DIGIT_EXPECTED: DiagnosticMessage = diag!(Lexical, "Octal digit expected.");
    pub const HEXADECIMAL_DIGIT_EXPECTED: DiagnosticMessage = diag!(Lexical, "Hexadecimal digit expected.");
    pub const NUMERIC_LITERAL_TOO_LARGE: DiagnosticMessage = diag!(Lexical, "Numeric literal '{0}' is too large.");
    pub const INVALID_NUMERIC_LITERAL: DiagnosticMessage = diag!(Lexical, "Invalid numeric literal '{0}'.");
    pub const IDENTIFIER_AFTER_NUMERIC_LITERAL: DiagnosticMessage = diag!(Lexical, "An identifier or keyword cannot immediately follow a numeric literal.");

    // ========================================================================
    // Parser
    // ========================================================================
    pub const UNEXPECTED_TOKEN: DiagnosticMessage = diag!(Parse, "Unexpected token '{0}'.");
    pub const UNEXPECTED_END_OF_INPUT: DiagnosticMessage = diag!(Parse, "Unexpected end of input.");
    pub const _0_EXPECTED: DiagnosticMessage = diag!(Parse, "'{0}' expected.");
    pub const IDENTIFIER_EXPECTED: DiagnosticMessage = diag!(Parse, "Identifier expected.");
    pub const _0_IS_A_RESERVED_WORD: DiagnosticMessage = diag!(Parse, "Identifier expected. '{0}' is a reserved word.");
    pub const _0_IS_A_RESERVED_WORD_IN_STRICT_MODE: DiagnosticMessage = diag!(Parse, "Identifier expected. '{0}' is a reserved word in strict mode.");
    pub const TYPE_NAME_CANNOT_BE_0: DiagnosticMessage = diag!(Parse, "Type name cannot be '{0}'.");
    pub const EXPRESSION_EXPECTED: DiagnosticMessage = diag!(Parse, "Expression expected.");
    pub const TYPE_EXPECTED: DiagnosticMessage = diag!(Parse, "Type expected.");
    pub const STATEMENT_EXPECTED: DiagnosticMessage = diag!(Parse, "Statement expected.");
    pub const DECLARATION_EXPECTED: DiagnosticMessage = diag!(Parse, "Declaration expected.");
    pub const PROPERTY_ASSIGNMENT_EXPECTED: DiagnosticMessage = diag!(Parse, "Property assignment expected.");
    pub const PROPERTY_NAME_EXPECTED: DiagnosticMessage = diag!(Parse, "Property name expected.");
    pub const A_REQUIRED_PARAMETER_CANNOT_FOLLOW_AN_OPTIONAL_PARAMETER: DiagnosticMessage = diag!(Parse, "A required parameter cannot follow an optional parameter.");
    pub const A_REST_PARAMETER_MUST_BE_LAST: DiagnosticMessage = diag!(Parse, "A rest parameter must be last in a parameter list.");
    pub const PARAMETER_CANNOT_HAVE_QUESTION_MARK_AND_INITIALIZER: DiagnosticMessage = diag!(Parse, "Parameter cannot have question mark and initializer.");
    pub const STRING_LITERAL_PARAMETER_REQUIRES_IDENTIFIER: DiagnosticMessage = diag!(Parse, "A parameter with a string literal type must be a simple identifier.");
    pub const DESTRUCTURING_DECLARATION_MUST_HAVE_INITIALIZER: DiagnosticMessage = diag!(Parse, "A destructuring declaration must have an initializer.");
    pub const LINE_BREAK_NOT_PERMITTED_HERE: DiagnosticMessage = diag!(Parse, "Line break not permitted here.");
    pub const ONLY_ONE_VARIABLE_DECLARATION_ALLOWED_IN_FOR_IN_OR_OF: DiagnosticMessage = diag!(Parse, "Only a single variable declaration is allowed in a '{0}' statement.");
    pub const INITIALIZER_NOT_ALLOWED_IN_FOR_IN_OR_OF: DiagnosticMessage = diag!(Parse, "The variable declaration of a '{0}' statement cannot have an initializer.");
    pub const TYPE_ANNOTATION_NOT_ALLOWED_IN_FOR_IN_OR_OF: DiagnosticMessage = diag!(Parse, "The left-hand side of a '{0}' statement cannot use a type annotation.");
    pub const ACCESSOR_PARAMETER_COUNT: DiagnosticMessage = diag!(Parse, "A '{0}' accessor must have {1}.");
    pub const OCTAL_LITERALS_NOT_ALLOWED_IN_STRICT_MODE: DiagnosticMessage = diag!(Parse, "Octal literals are not allowed in strict mode.");
}

#[cfg(test)]
mod tests {
    use super::*;
    use retype_core::text::{LineAndColumn, TextSpan};

    fn location() -> SourceLocation {
        SourceLocation::new(
            TextSpan::new(10, 3),
            LineAndColumn::new(1, 4),
            LineAndColumn::new(1, 7),
        )
    }

    #[test]
    fn test_format_message() {
        let msg = format_message("'{0}' expected, found '{1}'.", &[")", "x"]);
        assert_eq!(msg, "')' expected, found 'x'.");
    }

    #[test]
    fn test_format_message_no_args() {
        assert_eq!(format_message("Type expected.", &[]), "Type expected.");
    }

    #[test]
    fn test_syntax_error_carries_location() {
        let err = SyntaxError::new(&messages::UNEXPECTED_TOKEN, &["foo"], "foo", location());
        assert!(err.is_parse());
        assert_eq!(err.text, "foo");
        assert_eq!(err.message, "Unexpected token 'foo'.");
        assert_eq!(err.span, SourceSpan::new(10usize.into(), 3));
        assert_eq!(err.to_string(), "parse error at 2:5: Unexpected token 'foo'.");
    }

    #[test]
    fn test_lexical_kind() {
        let err = SyntaxError::new(&messages::BINARY_DIGIT_EXPECTED, &[], "0b", location());
        assert!(err.is_lexical());
        assert!(!err.is_parse());
    }
}
