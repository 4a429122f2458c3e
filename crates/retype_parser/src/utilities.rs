//! Parser utility functions.

use retype_ast::{Accessibility, PredefinedType, TokenCode};
use retype_scanner::Token;

/// Check if a token code can start an expression. `yield` takes an argument
/// only when one of these follows.
pub fn can_start_expression(code: TokenCode) -> bool {
    matches!(
        code,
        TokenCode::Identifier
            | TokenCode::NumericLiteral
            | TokenCode::StringLiteral
            | TokenCode::RegularExpressionLiteral
            | TokenCode::NoSubstitutionTemplateLiteral
            | TokenCode::TemplateHead
            | TokenCode::OpenParenToken
            | TokenCode::OpenBracketToken
            | TokenCode::OpenBraceToken
            | TokenCode::PlusToken
            | TokenCode::MinusToken
            | TokenCode::TildeToken
            | TokenCode::ExclamationToken
            | TokenCode::PlusPlusToken
            | TokenCode::MinusMinusToken
            | TokenCode::LessThanToken
            | TokenCode::FunctionKeyword
            | TokenCode::ClassKeyword
            | TokenCode::NewKeyword
            | TokenCode::DeleteKeyword
            | TokenCode::TypeOfKeyword
            | TokenCode::VoidKeyword
            | TokenCode::ThisKeyword
            | TokenCode::SuperKeyword
            | TokenCode::TrueKeyword
            | TokenCode::FalseKeyword
            | TokenCode::NullKeyword
            | TokenCode::YieldKeyword
    ) || retype_ast::keywords::category(code).is_some_and(|category| {
        category != retype_ast::KeywordCategory::ReservedAlways
    })
}

pub fn accessibility(code: TokenCode) -> Option<Accessibility> {
    match code {
        TokenCode::PublicKeyword => Some(Accessibility::Public),
        TokenCode::PrivateKeyword => Some(Accessibility::Private),
        TokenCode::ProtectedKeyword => Some(Accessibility::Protected),
        _ => None,
    }
}

pub fn predefined_type(code: TokenCode) -> Option<PredefinedType> {
    match code {
        TokenCode::AnyKeyword => Some(PredefinedType::Any),
        TokenCode::NumberKeyword => Some(PredefinedType::Number),
        TokenCode::BooleanKeyword => Some(PredefinedType::Boolean),
        TokenCode::StringKeyword => Some(PredefinedType::String),
        TokenCode::SymbolKeyword => Some(PredefinedType::Symbol),
        TokenCode::VoidKeyword => Some(PredefinedType::Void),
        _ => None,
    }
}

/// Whether a class member modifier keyword is followed by something that
/// makes it a modifier rather than the member's own name.
pub fn can_follow_modifier(code: TokenCode) -> bool {
    !matches!(
        code,
        TokenCode::OpenParenToken
            | TokenCode::LessThanToken
            | TokenCode::EqualsToken
            | TokenCode::ColonToken
            | TokenCode::QuestionToken
            | TokenCode::SemicolonToken
            | TokenCode::CommaToken
            | TokenCode::CloseBraceToken
            | TokenCode::EndOfFileToken
    )
}

/// Whether a token can begin a property name.
pub fn is_property_name_start(code: TokenCode) -> bool {
    code.is_identifier_name()
        || matches!(
            code,
            TokenCode::StringLiteral | TokenCode::NumericLiteral | TokenCode::OpenBracketToken
        )
}

/// A `"use strict"` directive, written without escapes.
pub fn is_use_strict_directive(token: &Token) -> bool {
    token.code == TokenCode::StringLiteral
        && (token.text == "\"use strict\"" || token.text == "'use strict'")
}

/// A numeric literal written with a leading zero, such as `017` or `08`.
pub fn is_legacy_octal_literal(text: &str) -> bool {
    let mut chars = text.chars();
    chars.next() == Some('0') && chars.next().is_some_and(|c| c.is_ascii_digit())
}

/// Split the raw text of a regular expression literal into body and flags.
pub fn split_regular_expression(text: &str) -> (&str, &str) {
    match text.rfind('/') {
        Some(end) if end > 0 => (&text[1..end], &text[end + 1..]),
        _ => (text, ""),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_regular_expression() {
        assert_eq!(split_regular_expression("/ab+c/gi"), ("ab+c", "gi"));
        assert_eq!(split_regular_expression(r"/a\/b/"), (r"a\/b", ""));
        assert_eq!(split_regular_expression("/[/]/m"), ("[/]", "m"));
    }

    #[test]
    fn test_is_legacy_octal_literal() {
        assert!(is_legacy_octal_literal("017"));
        assert!(is_legacy_octal_literal("08"));
        assert!(!is_legacy_octal_literal("0"));
        assert!(!is_legacy_octal_literal("0.5"));
        assert!(!is_legacy_octal_literal("0o17"));
        assert!(!is_legacy_octal_literal("17"));
    }

    #[test]
    fn test_can_start_expression() {
        assert!(can_start_expression(TokenCode::Identifier));
        assert!(can_start_expression(TokenCode::OfKeyword));
        assert!(!can_start_expression(TokenCode::CloseParenToken));
        assert!(!can_start_expression(TokenCode::SemicolonToken));
        assert!(!can_start_expression(TokenCode::InKeyword));
    }
}
