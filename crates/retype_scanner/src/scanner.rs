//! The lexer.
//!
//! Converts source text into a finite vector of tokens ending in
//! `EndOfFileToken`. Scanning is forward-only and stops at the first lexical
//! error. A `/` starts a regular expression when the previous token cannot
//! end an expression, or when it is a `)` closing a control-flow head or a
//! `}` closing a statement block; `}` resumes a template when it closes a
//! `${`.

use crate::char_codes::*;
use crate::cursor::{Cursor, Mark};
use crate::token::{Token, TokenValue};
use retype_ast::keywords::{self, KeywordCategory};
use retype_ast::TokenCode;
use retype_diagnostics::{messages, DiagnosticMessage, Result, SyntaxError};
use tracing::debug;

/// Scan `source` into tokens.
pub fn tokenize(source: &str) -> Result<Vec<Token>> {
    Scanner::new(source).scan_all()
}

/// What an open `{` belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Brace {
    /// A block, a function or class body, a type body.
    Statement,
    /// An object literal.
    Expression,
    TemplateSubstitution,
}

/// Punctuators matched by longest prefix. `{`, `}` and `/` are handled
/// separately, and `>` is always a single character.
const PUNCTUATORS: &[(&str, TokenCode)] = &[
    ("...", TokenCode::DotDotDotToken),
    ("===", TokenCode::EqualsEqualsEqualsToken),
    ("!==", TokenCode::ExclamationEqualsEqualsToken),
    ("<<=", TokenCode::LessThanLessThanEqualsToken),
    ("==", TokenCode::EqualsEqualsToken),
    ("=>", TokenCode::EqualsGreaterThanToken),
    ("!=", TokenCode::ExclamationEqualsToken),
    ("<=", TokenCode::LessThanEqualsToken),
    ("<<", TokenCode::LessThanLessThanToken),
    ("++", TokenCode::PlusPlusToken),
    ("--", TokenCode::MinusMinusToken),
    ("+=", TokenCode::PlusEqualsToken),
    ("-=", TokenCode::MinusEqualsToken),
    ("*=", TokenCode::AsteriskEqualsToken),
    ("%=", TokenCode::PercentEqualsToken),
    ("&&", TokenCode::AmpersandAmpersandToken),
    ("||", TokenCode::BarBarToken),
    ("&=", TokenCode::AmpersandEqualsToken),
    ("|=", TokenCode::BarEqualsToken),
    ("^=", TokenCode::CaretEqualsToken),
    ("(", TokenCode::OpenParenToken),
    (")", TokenCode::CloseParenToken),
    ("[", TokenCode::OpenBracketToken),
    ("]", TokenCode::CloseBracketToken),
    (";", TokenCode::SemicolonToken),
    (",", TokenCode::CommaToken),
    ("<", TokenCode::LessThanToken),
    (">", TokenCode::GreaterThanToken),
    ("=", TokenCode::EqualsToken),
    ("!", TokenCode::ExclamationToken),
    ("+", TokenCode::PlusToken),
    ("-", TokenCode::MinusToken),
    ("*", TokenCode::AsteriskToken),
    ("%", TokenCode::PercentToken),
    ("&", TokenCode::AmpersandToken),
    ("|", TokenCode::BarToken),
    ("^", TokenCode::CaretToken),
    ("~", TokenCode::TildeToken),
    ("?", TokenCode::QuestionToken),
    (":", TokenCode::ColonToken),
    ("@", TokenCode::AtToken),
    (".", TokenCode::DotToken),
];

pub struct Scanner<'s> {
    cursor: Cursor<'s>,
    tokens: Vec<Token>,
    braces: Vec<Brace>,
    /// One entry per open `(`: whether it follows `if`, `while`, `for` or
    /// `with`.
    parens: Vec<bool>,
    /// Set when the last `)` or `}` ended a statement head or a block, so
    /// that a `/` right after it begins a regular expression.
    regex_after_close: bool,
}

impl<'s> Scanner<'s> {
    pub fn new(source: &'s str) -> Self {
        Self {
            cursor: Cursor::new(source),
            tokens: Vec::new(),
            braces: Vec::new(),
            parens: Vec::new(),
            regex_after_close: false,
        }
    }

    /// Scan every token. The last one is always `EndOfFileToken`.
    pub fn scan_all(mut self) -> Result<Vec<Token>> {
        loop {
            self.skip_trivia()?;
            let start = self.cursor.mark();
            if self.cursor.is_eof() {
                if self.braces.contains(&Brace::TemplateSubstitution) {
                    return Err(self.error(&messages::UNTERMINATED_TEMPLATE_LITERAL, &[], start));
                }
                let eof = self.finish(start, TokenCode::EndOfFileToken, TokenValue::Raw(String::new()));
                self.tokens.push(eof);
                break;
            }
            let token = self.scan_token(start)?;
            self.tokens.push(token);
        }
        debug!(tokens = self.tokens.len(), "tokenized");
        Ok(self.tokens)
    }

    fn scan_token(&mut self, start: Mark) -> Result<Token> {
        let Some(ch) = self.cursor.current() else {
            return Ok(self.finish(start, TokenCode::EndOfFileToken, TokenValue::Raw(String::new())));
        };
        match ch {
            '{' => {
                let brace = if self.brace_is_statement() {
                    Brace::Statement
                } else {
                    Brace::Expression
                };
                self.braces.push(brace);
                Ok(self.punctuation(start, TokenCode::OpenBraceToken, 1))
            }
            '}' => match self.braces.pop() {
                Some(Brace::TemplateSubstitution) => {
                    self.cursor.advance();
                    self.scan_template(start, false)
                }
                brace => {
                    self.regex_after_close = brace != Some(Brace::Expression);
                    Ok(self.punctuation(start, TokenCode::CloseBraceToken, 1))
                }
            },
            '(' => {
                let control = self.tokens.last().is_some_and(|t| {
                    matches!(
                        t.code,
                        TokenCode::IfKeyword
                            | TokenCode::WhileKeyword
                            | TokenCode::ForKeyword
                            | TokenCode::WithKeyword
                    )
                });
                self.parens.push(control);
                Ok(self.punctuation(start, TokenCode::OpenParenToken, 1))
            }
            ')' => {
                self.regex_after_close = self.parens.pop().unwrap_or(false);
                Ok(self.punctuation(start, TokenCode::CloseParenToken, 1))
            }
            '/' => {
                if self.regex_allowed() {
                    self.scan_regular_expression(start)
                } else if self.cursor.peek(1) == Some('=') {
                    Ok(self.punctuation(start, TokenCode::SlashEqualsToken, 2))
                } else {
                    Ok(self.punctuation(start, TokenCode::SlashToken, 1))
                }
            }
            '\'' | '"' => self.scan_string(start, ch),
            '`' => {
                self.cursor.advance();
                self.scan_template(start, true)
            }
            '0'..='9' => self.scan_number(start),
            '.' if self.cursor.peek(1).is_some_and(|c| c.is_ascii_digit()) => {
                self.scan_number(start)
            }
            '\\' => self.scan_identifier(start),
            c if is_identifier_start(c) => self.scan_identifier(start),
            _ => {
                for &(text, code) in PUNCTUATORS {
                    if self.cursor.starts_with(text) {
                        return Ok(self.punctuation(start, code, text.len()));
                    }
                }
                self.cursor.advance();
                Err(self.error(&messages::INVALID_CHARACTER, &[&ch.to_string()], start))
            }
        }
    }

    // ========================================================================
    // Helpers
    // ========================================================================

    fn finish(&self, start: Mark, code: TokenCode, value: TokenValue) -> Token {
        Token::new(
            code,
            self.cursor.slice_from(start).to_string(),
            value,
            self.cursor.location_from(start),
        )
    }

    fn punctuation(&mut self, start: Mark, code: TokenCode, len: usize) -> Token {
        self.cursor.skip(len);
        let text = self.cursor.slice_from(start).to_string();
        Token::new(
            code,
            text.clone(),
            TokenValue::Raw(text),
            self.cursor.location_from(start),
        )
    }

    fn error(&self, message: &DiagnosticMessage, args: &[&str], start: Mark) -> SyntaxError {
        SyntaxError::new(
            message,
            args,
            self.cursor.slice_from(start),
            self.cursor.location_from(start),
        )
    }

    /// Whether a `/` here starts a regular expression rather than a division.
    fn regex_allowed(&self) -> bool {
        let Some(prev) = self.tokens.last() else {
            return true;
        };
        match prev.code {
            TokenCode::Identifier
            | TokenCode::NumericLiteral
            | TokenCode::StringLiteral
            | TokenCode::RegularExpressionLiteral
            | TokenCode::NoSubstitutionTemplateLiteral
            | TokenCode::TemplateTail
            | TokenCode::CloseBracketToken
            | TokenCode::PlusPlusToken
            | TokenCode::MinusMinusToken
            | TokenCode::ThisKeyword
            | TokenCode::SuperKeyword
            | TokenCode::NullKeyword
            | TokenCode::TrueKeyword
            | TokenCode::FalseKeyword => false,
            TokenCode::CloseParenToken | TokenCode::CloseBraceToken => self.regex_after_close,
            code => !matches!(
                keywords::category(code),
                Some(KeywordCategory::IdentifierEligible | KeywordCategory::TypeNameRestricted)
            ),
        }
    }

    /// Whether a `{` here opens a statement-level body rather than an object
    /// literal. After `:` the enclosing brace decides: a label or `case`
    /// inside a block, a property value inside an object literal.
    fn brace_is_statement(&self) -> bool {
        let Some(prev) = self.tokens.last() else {
            return true;
        };
        match prev.code {
            TokenCode::CloseParenToken
            | TokenCode::EqualsGreaterThanToken
            | TokenCode::OpenBraceToken
            | TokenCode::CloseBraceToken
            | TokenCode::SemicolonToken
            | TokenCode::ElseKeyword
            | TokenCode::DoKeyword
            | TokenCode::TryKeyword
            | TokenCode::FinallyKeyword
            | TokenCode::GreaterThanToken
            | TokenCode::Identifier => true,
            TokenCode::ColonToken => !matches!(
                self.braces.last(),
                Some(Brace::Expression | Brace::TemplateSubstitution)
            ),
            code => matches!(
                keywords::category(code),
                Some(KeywordCategory::IdentifierEligible | KeywordCategory::TypeNameRestricted)
            ),
        }
    }

    // ========================================================================
    // Trivia
    // ========================================================================

    fn skip_trivia(&mut self) -> Result<()> {
        loop {
            match self.cursor.current() {
                Some(ch) if is_white_space_single_line(ch) || is_line_break(ch) => {
                    self.cursor.advance();
                }
                Some('/') if self.cursor.peek(1) == Some('/') => {
                    self.cursor.skip_while(|c| !is_line_break(c));
                }
                Some('/') if self.cursor.peek(1) == Some('*') => {
                    let start = self.cursor.mark();
                    self.cursor.skip(2);
                    match memchr::memmem::find(self.cursor.rest().as_bytes(), b"*/") {
                        Some(offset) => {
                            let end = self.cursor.pos() + offset + 2;
                            self.cursor.advance_to(end);
                        }
                        None => {
                            self.cursor.advance_to(usize::MAX);
                            return Err(self.error(&messages::ASTERISK_SLASH_EXPECTED, &[], start));
                        }
                    }
                }
                _ => return Ok(()),
            }
        }
    }

    // ========================================================================
    // Identifiers
    // ========================================================================

    fn scan_identifier(&mut self, start: Mark) -> Result<Token> {
        let mut name = String::new();
        loop {
            let Some(ch) = self.cursor.current() else {
                break;
            };
            let first = name.is_empty();
            if ch == '\\' {
                let escape_start = self.cursor.mark();
                self.cursor.advance();
                if self.cursor.current() != Some('u') {
                    return Err(self.error(
                        &messages::INVALID_ESCAPE_SEQUENCE,
                        &[self.cursor.slice_from(escape_start)],
                        escape_start,
                    ));
                }
                self.cursor.advance();
                let decoded = self.scan_unicode_escape(escape_start)?;
                let decoded =
                    char::from_u32(decoded).ok_or_else(|| self.invalid_escape(escape_start))?;
                let valid = if first {
                    is_identifier_start(decoded)
                } else {
                    is_identifier_part(decoded)
                };
                if !valid {
                    return Err(self.error(
                        &messages::INVALID_IDENTIFIER_CHARACTER,
                        &[self.cursor.slice_from(escape_start)],
                        escape_start,
                    ));
                }
                name.push(decoded);
            } else if (first && is_identifier_start(ch)) || (!first && is_identifier_part(ch)) {
                self.cursor.advance();
                name.push(ch);
            } else {
                break;
            }
        }

        let code = keywords::keyword_from_str(&name).unwrap_or(TokenCode::Identifier);
        let value = match code {
            TokenCode::TrueKeyword => TokenValue::Boolean(true),
            TokenCode::FalseKeyword => TokenValue::Boolean(false),
            _ => TokenValue::Identifier(name),
        };
        Ok(self.finish(start, code, value))
    }

    /// Decode the part of a `\u` escape after the `u` into a code point. A
    /// four-digit escape may yield a lone UTF-16 surrogate.
    fn scan_unicode_escape(&mut self, escape_start: Mark) -> Result<u32> {
        let value = if self.cursor.current() == Some('{') {
            self.cursor.advance();
            let mut value: u32 = 0;
            let mut digits = 0;
            while let Some(d) = self.cursor.current().and_then(|c| c.to_digit(16)) {
                value = value.saturating_mul(16).saturating_add(d);
                digits += 1;
                self.cursor.advance();
            }
            if digits == 0 || self.cursor.current() != Some('}') || value > 0x10FFFF {
                return Err(self.invalid_escape(escape_start));
            }
            self.cursor.advance();
            value
        } else {
            let mut value: u32 = 0;
            for _ in 0..4 {
                match self.cursor.current().and_then(|c| c.to_digit(16)) {
                    Some(d) => {
                        value = value * 16 + d;
                        self.cursor.advance();
                    }
                    None => return Err(self.invalid_escape(escape_start)),
                }
            }
            value
        };
        Ok(value)
    }

    /// The code point of a string or template `\u` escape. A high surrogate
    /// directly followed by a `\uHHHH` low surrogate combines with it; any
    /// other surrogate becomes U+FFFD.
    fn decode_code_unit(&mut self, value: u32) -> char {
        if (0xD800..=0xDBFF).contains(&value) {
            if let Some(low) = self.low_surrogate_ahead() {
                self.cursor.skip(6);
                let combined = 0x10000 + ((value - 0xD800) << 10) + (low - 0xDC00);
                return char::from_u32(combined).unwrap_or(char::REPLACEMENT_CHARACTER);
            }
        }
        char::from_u32(value).unwrap_or(char::REPLACEMENT_CHARACTER)
    }

    fn low_surrogate_ahead(&self) -> Option<u32> {
        let digits = self.cursor.rest().strip_prefix("\\u")?.get(..4)?;
        let value = u32::from_str_radix(digits, 16).ok()?;
        (0xDC00..=0xDFFF).contains(&value).then_some(value)
    }

    fn scan_hex_escape(&mut self, escape_start: Mark) -> Result<char> {
        let mut value: u32 = 0;
        for _ in 0..2 {
            match self.cursor.current().and_then(|c| c.to_digit(16)) {
                Some(d) => {
                    value = value * 16 + d;
                    self.cursor.advance();
                }
                None => return Err(self.invalid_escape(escape_start)),
            }
        }
        char::from_u32(value).ok_or_else(|| self.invalid_escape(escape_start))
    }

    fn invalid_escape(&self, escape_start: Mark) -> SyntaxError {
        self.error(
            &messages::INVALID_ESCAPE_SEQUENCE,
            &[self.cursor.slice_from(escape_start)],
            escape_start,
        )
    }

    // ========================================================================
    // Strings and templates
    // ========================================================================

    fn scan_string(&mut self, start: Mark, quote: char) -> Result<Token> {
        self.cursor.advance();
        let mut value = String::new();
        loop {
            match self.cursor.current() {
                None => return Err(self.error(&messages::UNTERMINATED_STRING_LITERAL, &[], start)),
                Some(c) if c == quote => {
                    self.cursor.advance();
                    break;
                }
                Some('\\') => self.scan_escape(&mut value)?,
                Some(LINE_FEED | CARRIAGE_RETURN) => {
                    return Err(self.error(&messages::UNTERMINATED_STRING_LITERAL, &[], start));
                }
                Some(c) => {
                    self.cursor.advance();
                    value.push(c);
                }
            }
        }
        Ok(self.finish(start, TokenCode::StringLiteral, TokenValue::String(value)))
    }

    /// Decode one escape sequence (cursor on the backslash) into `out`.
    fn scan_escape(&mut self, out: &mut String) -> Result<()> {
        let escape_start = self.cursor.mark();
        self.cursor.advance();
        let Some(ch) = self.cursor.current() else {
            // The caller reports the unterminated literal.
            return Ok(());
        };
        match ch {
            'n' => out.push('\n'),
            't' => out.push('\t'),
            'r' => out.push('\r'),
            'b' => out.push('\u{0008}'),
            'f' => out.push('\u{000C}'),
            'v' => out.push('\u{000B}'),
            '0' if !self.cursor.peek(1).is_some_and(|c| c.is_ascii_digit()) => out.push('\0'),
            'x' => {
                self.cursor.advance();
                out.push(self.scan_hex_escape(escape_start)?);
                return Ok(());
            }
            'u' => {
                self.cursor.advance();
                let value = self.scan_unicode_escape(escape_start)?;
                out.push(self.decode_code_unit(value));
                return Ok(());
            }
            // Line continuations contribute nothing.
            LINE_FEED | CARRIAGE_RETURN | LINE_SEPARATOR | PARAGRAPH_SEPARATOR => {
                self.cursor.advance();
                if ch == CARRIAGE_RETURN && self.cursor.current() == Some(LINE_FEED) {
                    self.cursor.advance();
                }
                return Ok(());
            }
            other => out.push(other),
        }
        self.cursor.advance();
        Ok(())
    }

    /// Scan a template piece. The cursor is past the opening `` ` `` (for a
    /// head) or the `}` closing a substitution (for a middle or tail).
    fn scan_template(&mut self, start: Mark, is_head: bool) -> Result<Token> {
        let mut cooked = String::new();
        let code = loop {
            match self.cursor.current() {
                None => return Err(self.error(&messages::UNTERMINATED_TEMPLATE_LITERAL, &[], start)),
                Some('`') => {
                    self.cursor.advance();
                    break if is_head {
                        TokenCode::NoSubstitutionTemplateLiteral
                    } else {
                        TokenCode::TemplateTail
                    };
                }
                Some('$') if self.cursor.peek(1) == Some('{') => {
                    self.cursor.skip(2);
                    self.braces.push(Brace::TemplateSubstitution);
                    break if is_head {
                        TokenCode::TemplateHead
                    } else {
                        TokenCode::TemplateMiddle
                    };
                }
                Some('\\') => self.scan_escape(&mut cooked)?,
                Some(CARRIAGE_RETURN) => {
                    self.cursor.advance();
                    if self.cursor.current() == Some(LINE_FEED) {
                        self.cursor.advance();
                    }
                    cooked.push(LINE_FEED);
                }
                Some(c) => {
                    self.cursor.advance();
                    cooked.push(c);
                }
            }
        };
        Ok(self.finish(start, code, TokenValue::String(cooked)))
    }

    // ========================================================================
    // Regular expressions
    // ========================================================================

    fn scan_regular_expression(&mut self, start: Mark) -> Result<Token> {
        self.cursor.advance();
        let mut in_class = false;
        loop {
            match self.cursor.current() {
                None => {
                    return Err(self.error(&messages::UNTERMINATED_REGULAR_EXPRESSION, &[], start))
                }
                Some(c) if is_line_break(c) => {
                    return Err(self.error(&messages::UNTERMINATED_REGULAR_EXPRESSION, &[], start))
                }
                Some('\\') => {
                    self.cursor.advance();
                    match self.cursor.current() {
                        Some(c) if !is_line_break(c) => {
                            self.cursor.advance();
                        }
                        _ => {
                            return Err(self.error(
                                &messages::UNTERMINATED_REGULAR_EXPRESSION,
                                &[],
                                start,
                            ))
                        }
                    }
                }
                Some('[') => {
                    in_class = true;
                    self.cursor.advance();
                }
                Some(']') => {
                    in_class = false;
                    self.cursor.advance();
                }
                Some('/') if !in_class => {
                    self.cursor.advance();
                    break;
                }
                Some(_) => {
                    self.cursor.advance();
                }
            }
        }
        self.cursor.skip_while(is_identifier_part);
        let text = self.cursor.slice_from(start).to_string();
        Ok(self.finish(start, TokenCode::RegularExpressionLiteral, TokenValue::Raw(text)))
    }

    // ========================================================================
    // Numbers
    // ========================================================================

    fn scan_number(&mut self, start: Mark) -> Result<Token> {
        let value = match (self.cursor.current(), self.cursor.peek(1)) {
            (Some('0'), Some('b' | 'B')) => {
                self.scan_radix_number(start, 2, &messages::BINARY_DIGIT_EXPECTED)?
            }
            (Some('0'), Some('o' | 'O')) => {
                self.scan_radix_number(start, 8, &messages::OCTAL_DIGIT_EXPECTED)?
            }
            (Some('0'), Some('x' | 'X')) => {
                self.scan_radix_number(start, 16, &messages::HEXADECIMAL_DIGIT_EXPECTED)?
            }
            (Some('0'), Some(d)) if d.is_ascii_digit() => self.scan_leading_zero_number(start)?,
            _ => self.scan_decimal_number(start)?,
        };

        if let Some(next) = self.cursor.current() {
            if is_identifier_start(next) || next.is_ascii_digit() || next == '\\' {
                self.cursor.advance();
                return Err(self.error(&messages::IDENTIFIER_AFTER_NUMERIC_LITERAL, &[], start));
            }
        }
        Ok(self.finish(start, TokenCode::NumericLiteral, TokenValue::Number(value)))
    }

    /// `0b`, `0o` or `0x` followed by at least one digit of `radix`,
    /// accumulated in 64 bits.
    fn scan_radix_number(
        &mut self,
        start: Mark,
        radix: u32,
        missing_digit: &DiagnosticMessage,
    ) -> Result<f64> {
        self.cursor.skip(2);
        let mut value: Option<u64> = Some(0);
        let mut digits = 0usize;
        while let Some(d) = self.cursor.current().and_then(|c| c.to_digit(radix)) {
            value = value
                .and_then(|v| v.checked_mul(u64::from(radix)))
                .and_then(|v| v.checked_add(u64::from(d)));
            digits += 1;
            self.cursor.advance();
        }
        if digits == 0 {
            return Err(self.error(missing_digit, &[], start));
        }
        match value {
            Some(v) => Ok(v as f64),
            None => Err(self.error(
                &messages::NUMERIC_LITERAL_TOO_LARGE,
                &[self.cursor.slice_from(start)],
                start,
            )),
        }
    }

    /// `0` followed by digits. With every digit below 8 this is a legacy
    /// octal literal (`017` is fifteen); otherwise it is decimal (`019`).
    fn scan_leading_zero_number(&mut self, start: Mark) -> Result<f64> {
        let rest = &self.cursor.rest()[1..];
        let digits = &rest[..rest.bytes().take_while(u8::is_ascii_digit).count()];
        if digits.bytes().any(|b| b >= b'8') {
            return self.scan_decimal_number(start);
        }
        self.cursor.skip(1 + digits.len());
        match u64::from_str_radix(digits, 8) {
            Ok(value) => Ok(value as f64),
            Err(_) => Err(self.error(
                &messages::NUMERIC_LITERAL_TOO_LARGE,
                &[self.cursor.slice_from(start)],
                start,
            )),
        }
    }

    fn scan_decimal_number(&mut self, start: Mark) -> Result<f64> {
        self.cursor.skip_while(|c| c.is_ascii_digit());
        if self.cursor.current() == Some('.') {
            self.cursor.advance();
            self.cursor.skip_while(|c| c.is_ascii_digit());
        }
        if let Some('e' | 'E') = self.cursor.current() {
            self.cursor.advance();
            if let Some('+' | '-') = self.cursor.current() {
                self.cursor.advance();
            }
            if !self.cursor.current().is_some_and(|c| c.is_ascii_digit()) {
                return Err(self.error(&messages::DIGIT_EXPECTED, &[], start));
            }
            self.cursor.skip_while(|c| c.is_ascii_digit());
        }

        let text = self.cursor.slice_from(start);
        match text.parse::<f64>() {
            Ok(value) if value.is_finite() => Ok(value),
            Ok(_) => Err(self.error(&messages::NUMERIC_LITERAL_TOO_LARGE, &[text], start)),
            Err(_) => Err(self.error(&messages::INVALID_NUMERIC_LITERAL, &[text], start)),
        }
    }
}
