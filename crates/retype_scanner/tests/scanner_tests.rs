//! Scanner integration tests.
//!
//! Verifies that the scanner tokenizes literals, templates, regular
//! expressions and identifiers, and rejects malformed input.

use proptest::prelude::*;
use retype_ast::TokenCode;
use retype_core::text::LineAndColumn;
use retype_scanner::{tokenize, Token, TokenValue};

/// Helper: scan all tokens, dropping the end-of-file token.
fn scan_all(source: &str) -> Vec<Token> {
    let mut tokens = tokenize(source).unwrap();
    let eof = tokens.pop().unwrap();
    assert_eq!(eof.code, TokenCode::EndOfFileToken);
    tokens
}

/// Helper: scan all token codes.
fn scan_codes(source: &str) -> Vec<TokenCode> {
    scan_all(source).into_iter().map(|t| t.code).collect()
}

fn lexical_error(source: &str) -> String {
    let err = tokenize(source).unwrap_err();
    assert!(err.is_lexical(), "{source}: {err}");
    err.message
}

#[test]
fn test_empty_source() {
    let tokens = tokenize("").unwrap();
    assert_eq!(tokens.len(), 1);
    assert_eq!(tokens[0].code, TokenCode::EndOfFileToken);
    assert_eq!(tokens[0].text, "");
}

#[test]
fn test_trivia_only() {
    assert!(scan_all("   \n\t  // comment\n /* block\n comment */ ").is_empty());
}

#[test]
fn test_numeric_literal_values() {
    let values: Vec<f64> = scan_all("0b101 0o17 0x1F 3.14 2e10 42")
        .iter()
        .map(|t| t.number_value().unwrap())
        .collect();
    assert_eq!(values, vec![5.0, 15.0, 31.0, 3.14, 2e10, 42.0]);
}

#[test]
fn test_numeric_literal_keeps_text() {
    let tokens = scan_all("0x1F");
    assert_eq!(tokens[0].code, TokenCode::NumericLiteral);
    assert_eq!(tokens[0].text, "0x1F");
}

#[test]
fn test_malformed_numbers() {
    assert_eq!(lexical_error("0b"), "Binary digit expected.");
    assert_eq!(lexical_error("0o9"), "Octal digit expected.");
    assert_eq!(lexical_error("0x"), "Hexadecimal digit expected.");
    assert_eq!(lexical_error("1e+"), "Digit expected.");
    assert_eq!(
        lexical_error("3px"),
        "An identifier or keyword cannot immediately follow a numeric literal."
    );
}

#[test]
fn test_string_literals() {
    let tokens = scan_all(r#""hello" 'world'"#);
    assert_eq!(tokens[0].code, TokenCode::StringLiteral);
    assert_eq!(tokens[0].string_value(), Some("hello"));
    assert_eq!(tokens[0].text, "\"hello\"");
    assert_eq!(tokens[1].string_value(), Some("world"));
}

#[test]
fn test_string_escapes() {
    let tokens = scan_all(r"'a\x41B\u{43}\n\'\q'");
    assert_eq!(tokens[0].string_value(), Some("aABC\n'q"));

    let tokens = scan_all("'one\\\ntwo'");
    assert_eq!(tokens[0].string_value(), Some("onetwo"));
}

#[test]
fn test_unterminated_strings() {
    assert_eq!(lexical_error("'abc"), "Unterminated string literal.");
    assert_eq!(lexical_error("\"ab\ncd\""), "Unterminated string literal.");
    assert_eq!(lexical_error(r"'\x4'"), r"Invalid escape sequence '\x4'.");
}

#[test]
fn test_no_substitution_template() {
    let tokens = scan_all("`hello`");
    assert_eq!(tokens.len(), 1);
    assert_eq!(tokens[0].code, TokenCode::NoSubstitutionTemplateLiteral);
    assert_eq!(tokens[0].string_value(), Some("hello"));
}

#[test]
fn test_template_with_substitutions() {
    let tokens = scan_all("`a${b}c${d}e`");
    let codes: Vec<TokenCode> = tokens.iter().map(|t| t.code).collect();
    assert_eq!(
        codes,
        vec![
            TokenCode::TemplateHead,
            TokenCode::Identifier,
            TokenCode::TemplateMiddle,
            TokenCode::Identifier,
            TokenCode::TemplateTail,
        ]
    );
    assert_eq!(tokens[0].string_value(), Some("a"));
    assert_eq!(tokens[2].string_value(), Some("c"));
    assert_eq!(tokens[4].string_value(), Some("e"));
    assert_eq!(tokens[2].text, "}c${");
}

#[test]
fn test_template_with_object_literal_inside() {
    assert_eq!(
        scan_codes("`${ {a: 1} }`"),
        vec![
            TokenCode::TemplateHead,
            TokenCode::OpenBraceToken,
            TokenCode::Identifier,
            TokenCode::ColonToken,
            TokenCode::NumericLiteral,
            TokenCode::CloseBraceToken,
            TokenCode::TemplateTail,
        ]
    );
}

#[test]
fn test_template_normalizes_line_endings() {
    let tokens = scan_all("`a\r\nb`");
    assert_eq!(tokens[0].string_value(), Some("a\nb"));
}

#[test]
fn test_unterminated_template() {
    assert_eq!(lexical_error("`abc"), "Unterminated template literal.");
    assert_eq!(lexical_error("`a${b"), "Unterminated template literal.");
}

#[test]
fn test_regular_expression_after_operator() {
    let tokens = scan_all("x = /ab+c/gi");
    assert_eq!(tokens[2].code, TokenCode::RegularExpressionLiteral);
    assert_eq!(tokens[2].text, "/ab+c/gi");
}

#[test]
fn test_regular_expression_with_class() {
    let tokens = scan_all(r"return /[/\]]+\//");
    assert_eq!(tokens[1].code, TokenCode::RegularExpressionLiteral);
    assert_eq!(tokens[1].text, r"/[/\]]+\//");
}

#[test]
fn test_division_after_operand() {
    assert_eq!(
        scan_codes("a / b /= (c) / 2"),
        vec![
            TokenCode::Identifier,
            TokenCode::SlashToken,
            TokenCode::Identifier,
            TokenCode::SlashEqualsToken,
            TokenCode::OpenParenToken,
            TokenCode::Identifier,
            TokenCode::CloseParenToken,
            TokenCode::SlashToken,
            TokenCode::NumericLiteral,
        ]
    );
}

#[test]
fn test_unterminated_regular_expression() {
    assert_eq!(
        lexical_error("x = /abc\n/"),
        "Unterminated regular expression literal."
    );
}

#[test]
fn test_identifiers() {
    let tokens = scan_all("foo _private $dollar caf\u{e9}");
    let names: Vec<&str> = tokens.iter().map(|t| t.identifier_name().unwrap()).collect();
    assert_eq!(names, vec!["foo", "_private", "$dollar", "café"]);
    assert!(tokens.iter().all(|t| t.code == TokenCode::Identifier));
}

#[test]
fn test_escaped_identifiers() {
    let tokens = scan_all(r"abc a\u{62}c");
    assert_eq!(tokens[0].identifier_name(), Some("abc"));
    assert_eq!(tokens[1].identifier_name(), Some("abc"));
    assert_eq!(tokens[0].text, r"abc");

    let tokens = scan_all(r"\u0076ar");
    assert_eq!(tokens[0].code, TokenCode::VarKeyword);

    assert!(lexical_error(r"\u0031abc").starts_with("Invalid character in identifier"));
    assert!(lexical_error(r"\u00zz").starts_with("Invalid escape sequence"));
}

#[test]
fn test_keywords() {
    assert_eq!(
        scan_codes("if else while for return function class interface type enum yield"),
        vec![
            TokenCode::IfKeyword,
            TokenCode::ElseKeyword,
            TokenCode::WhileKeyword,
            TokenCode::ForKeyword,
            TokenCode::ReturnKeyword,
            TokenCode::FunctionKeyword,
            TokenCode::ClassKeyword,
            TokenCode::InterfaceKeyword,
            TokenCode::TypeKeyword,
            TokenCode::EnumKeyword,
            TokenCode::YieldKeyword,
        ]
    );
}

#[test]
fn test_operators() {
    assert_eq!(
        scan_codes("+ - * % = == === != !== <= << && || ++ -- ~ ^ |= &="),
        vec![
            TokenCode::PlusToken,
            TokenCode::MinusToken,
            TokenCode::AsteriskToken,
            TokenCode::PercentToken,
            TokenCode::EqualsToken,
            TokenCode::EqualsEqualsToken,
            TokenCode::EqualsEqualsEqualsToken,
            TokenCode::ExclamationEqualsToken,
            TokenCode::ExclamationEqualsEqualsToken,
            TokenCode::LessThanEqualsToken,
            TokenCode::LessThanLessThanToken,
            TokenCode::AmpersandAmpersandToken,
            TokenCode::BarBarToken,
            TokenCode::PlusPlusToken,
            TokenCode::MinusMinusToken,
            TokenCode::TildeToken,
            TokenCode::CaretToken,
            TokenCode::BarEqualsToken,
            TokenCode::AmpersandEqualsToken,
        ]
    );
}

#[test]
fn test_greater_than_is_never_combined() {
    assert_eq!(
        scan_codes("a >= b"),
        vec![
            TokenCode::Identifier,
            TokenCode::GreaterThanToken,
            TokenCode::EqualsToken,
            TokenCode::Identifier,
        ]
    );
}

#[test]
fn test_stray_close_brace() {
    assert_eq!(scan_codes("}"), vec![TokenCode::CloseBraceToken]);
}

#[test]
fn test_invalid_character() {
    assert_eq!(lexical_error("a # b"), "Invalid character '#'.");
}

#[test]
fn test_unterminated_comment() {
    assert_eq!(lexical_error("/* open"), "'*/' expected.");
}

#[test]
fn test_token_locations() {
    let tokens = scan_all("let a\r\n  = 1;\u{2028}b");
    assert_eq!(tokens[0].location.start, LineAndColumn::new(0, 0));
    assert_eq!(tokens[1].location.start, LineAndColumn::new(0, 4));
    assert_eq!(tokens[2].location.start, LineAndColumn::new(1, 2));
    assert_eq!(tokens[3].location.start, LineAndColumn::new(1, 4));
    assert_eq!(tokens[5].location.start, LineAndColumn::new(2, 0));
    assert_eq!(tokens[1].location.span.start, 4);
    assert_eq!(tokens[1].location.span.length, 1);
}

#[test]
fn test_error_location() {
    let err = tokenize("x\n  0b").unwrap_err();
    assert_eq!(err.location.start, LineAndColumn::new(1, 2));
    assert_eq!(err.text, "0b");
}

#[test]
fn test_token_value_kinds() {
    let tokens = scan_all("true ; x");
    assert_eq!(tokens[0].value, TokenValue::Boolean(true));
    assert_eq!(tokens[1].value, TokenValue::Raw(";".into()));
    assert_eq!(tokens[2].value, TokenValue::Identifier("x".into()));
}

proptest! {
    #[test]
    fn prop_identifier_round_trips(name in "[a-zA-Z_$][a-zA-Z0-9_$]{0,12}") {
        let tokens = tokenize(&name).unwrap();
        prop_assert_eq!(tokens.len(), 2);
        prop_assert_eq!(tokens[0].identifier_name(), Some(name.as_str()));
        prop_assert_eq!(&tokens[0].text, &name);
    }

    #[test]
    fn prop_integer_value(n in 0u32..u32::MAX) {
        let tokens = tokenize(&n.to_string()).unwrap();
        prop_assert_eq!(tokens[0].number_value(), Some(f64::from(n)));
    }

    #[test]
    fn prop_hex_value(n in 0u64..u64::MAX) {
        let tokens = tokenize(&format!("0x{n:x}")).unwrap();
        prop_assert_eq!(tokens[0].number_value(), Some(n as f64));
    }

    #[test]
    fn prop_tokens_are_ordered(source in "\\PC{0,64}") {
        if let Ok(tokens) = tokenize(&source) {
            prop_assert_eq!(tokens.last().map(|t| t.code), Some(TokenCode::EndOfFileToken));
            for pair in tokens.windows(2) {
                prop_assert!(pair[0].end() <= pair[1].location.span.start);
            }
        }
    }
}
