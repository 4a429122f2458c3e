//! The parser core.
//!
//! Recursive descent over a [`TokenStream`]. This file holds token access,
//! speculation, identifier handling, automatic semicolon insertion and the
//! public entry points; the grammar itself is split across the sibling
//! modules by area. Errors are fatal: the first one propagates out of the
//! entry point with `?`. Inside [`Parser::try_parse`] an error only means the
//! alternative did not match.

use crate::options::{ParseEntry, ParseOptions};
use crate::token_stream::TokenStream;
use crate::utilities::is_use_strict_directive;
use retype_ast::keywords::{self, KeywordCategory};
use retype_ast::{
    Declaration, Expression, Identifier, IdentifierPosition, NodeFactory, Program, Statement,
    TokenCode, TypeNode,
};
use retype_diagnostics::{messages, DiagnosticMessage, Result, SyntaxError};
use retype_scanner::Token;
use tracing::{debug, trace};

/// The root node of a successful parse.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Parsed<'a> {
    Program(&'a Program<'a>),
    Expression(Expression<'a>),
    Type(TypeNode<'a>),
    Statement(Statement<'a>),
    Declaration(Declaration<'a>),
}

/// Grammar parameters that change with the enclosing construct.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Context {
    pub strict: bool,
    /// Inside a generator body, where `yield` starts an expression.
    pub in_generator: bool,
    /// Whether `in` is a binary operator here. Off in a `for` head.
    pub allow_in: bool,
}

#[derive(Debug)]
pub struct Parser<'a, 'f> {
    pub(crate) factory: &'f NodeFactory<'a>,
    pub(crate) tokens: TokenStream,
    pub(crate) context: Context,
}

impl<'a, 'f> Parser<'a, 'f> {
    /// Scan `source` and prepare to parse it. Lexical errors surface here.
    pub fn new(factory: &'f NodeFactory<'a>, source: &str, options: ParseOptions) -> Result<Self> {
        let tokens = retype_scanner::tokenize(source)?;
        Ok(Self::from_tokens(factory, tokens, options))
    }

    pub fn from_tokens(factory: &'f NodeFactory<'a>, tokens: Vec<Token>, options: ParseOptions) -> Self {
        Self {
            factory,
            tokens: TokenStream::new(tokens),
            context: Context {
                strict: options.strict,
                in_generator: false,
                allow_in: true,
            },
        }
    }

    pub fn factory(&self) -> &'f NodeFactory<'a> {
        self.factory
    }

    /// Index of the next unconsumed token.
    pub fn position(&self) -> usize {
        self.tokens.position()
    }

    pub fn tokens(&self) -> &[Token] {
        self.tokens.tokens()
    }

    pub fn is_strict(&self) -> bool {
        self.context.strict
    }

    // ========================================================================
    // Entry points
    // ========================================================================

    pub fn parse(&mut self, entry: ParseEntry) -> Result<Parsed<'a>> {
        match entry {
            ParseEntry::Program => self.parse_program().map(Parsed::Program),
            ParseEntry::Expression => self.parse_expression().map(Parsed::Expression),
            ParseEntry::Type => self.parse_type().map(Parsed::Type),
            ParseEntry::Statement => self.parse_statement().map(Parsed::Statement),
            ParseEntry::Declaration => self.parse_declaration().map(Parsed::Declaration),
        }
    }

    pub fn parse_program(&mut self) -> Result<&'a Program<'a>> {
        self.parse_to_end(ParseEntry::Program, |p| p.parse_program_items())
    }

    pub fn parse_expression(&mut self) -> Result<Expression<'a>> {
        self.parse_to_end(ParseEntry::Expression, |p| p.parse_comma_expression())
    }

    pub fn parse_type(&mut self) -> Result<TypeNode<'a>> {
        self.parse_to_end(ParseEntry::Type, |p| p.parse_union_type())
    }

    pub fn parse_statement(&mut self) -> Result<Statement<'a>> {
        self.parse_to_end(ParseEntry::Statement, |p| p.parse_statement_list_item())
    }

    pub fn parse_declaration(&mut self) -> Result<Declaration<'a>> {
        self.parse_to_end(ParseEntry::Declaration, |p| p.parse_declaration_item())
    }

    /// Run one production and require that it consumed the whole input.
    fn parse_to_end<T>(
        &mut self,
        entry: ParseEntry,
        f: impl FnOnce(&mut Self) -> Result<T>,
    ) -> Result<T> {
        debug!(%entry, tokens = self.tokens.len(), strict = self.context.strict, "parse started");
        let result = f(self).and_then(|node| {
            if self.at(TokenCode::EndOfFileToken) {
                Ok(node)
            } else {
                Err(self.unexpected())
            }
        });
        match &result {
            Ok(_) => debug!(%entry, "parse finished"),
            Err(err) => debug!(%entry, location = %err.location, message = %err.message, "parse failed"),
        }
        result
    }

    fn parse_program_items(&mut self) -> Result<&'a Program<'a>> {
        if self.has_use_strict_directive() {
            self.context.strict = true;
        }
        let mut items = Vec::new();
        while !self.at(TokenCode::EndOfFileToken) {
            items.push(self.parse_module_item()?);
        }
        Ok(self.factory.program(items, self.context.strict))
    }

    // ========================================================================
    // Speculation
    // ========================================================================

    /// Run `f` speculatively. On success its result and position are kept; on
    /// failure the stream is rewound to where it was and `None` is returned.
    pub fn try_parse<T>(&mut self, f: impl FnOnce(&mut Self) -> Result<T>) -> Option<T> {
        let checkpoint = self.tokens.checkpoint();
        let context = self.context;
        let start = self.tokens.position();
        match f(self) {
            Ok(value) => {
                trace!(start, end = self.tokens.position(), "speculative parse committed");
                Some(value)
            }
            Err(err) => {
                trace!(start, failed_at = self.tokens.position(), message = %err.message, "speculative parse rewound");
                self.tokens.rewind(checkpoint);
                self.context = context;
                None
            }
        }
    }

    /// Run `f` and rewind afterwards, whatever it returns.
    pub fn look_ahead<T>(&mut self, f: impl FnOnce(&mut Self) -> T) -> T {
        let checkpoint = self.tokens.checkpoint();
        let context = self.context;
        let result = f(self);
        trace!(start = self.tokens.position(), "look-ahead rewound");
        self.tokens.rewind(checkpoint);
        self.context = context;
        result
    }

    /// Run `f` under `context`, restoring the current one afterwards.
    pub(crate) fn with_context<T>(
        &mut self,
        context: Context,
        f: impl FnOnce(&mut Self) -> Result<T>,
    ) -> Result<T> {
        let saved = std::mem::replace(&mut self.context, context);
        let result = f(self);
        self.context = saved;
        result
    }

    pub(crate) fn allowing_in<T>(&mut self, f: impl FnOnce(&mut Self) -> Result<T>) -> Result<T> {
        let context = Context {
            allow_in: true,
            ..self.context
        };
        self.with_context(context, f)
    }

    // ========================================================================
    // Token access
    // ========================================================================

    #[inline]
    pub(crate) fn peek(&self) -> &Token {
        self.tokens.peek(0)
    }

    #[inline]
    pub(crate) fn peek_code(&self, n: usize) -> TokenCode {
        self.tokens.peek(n).code
    }

    #[inline]
    pub(crate) fn at(&self, code: TokenCode) -> bool {
        self.peek_code(0) == code
    }

    #[inline]
    pub(crate) fn advance(&mut self) {
        self.tokens.read();
    }

    pub(crate) fn skip(&mut self, count: usize) {
        for _ in 0..count {
            self.tokens.read();
        }
    }

    pub(crate) fn read(&mut self) -> Token {
        self.tokens.read().clone()
    }

    #[inline]
    pub(crate) fn read_if(&mut self, code: TokenCode) -> bool {
        self.tokens.read_if(code)
    }

    pub(crate) fn expect(&mut self, code: TokenCode) -> Result<()> {
        if self.tokens.read_if(code) {
            Ok(())
        } else {
            Err(self.expected(code))
        }
    }

    #[inline]
    pub(crate) fn has_line_break_before(&self) -> bool {
        self.tokens.has_line_break_before(0)
    }

    /// The operator at the current position and the number of tokens it
    /// spans. `>` is always scanned alone, so adjacent `>` and `=` tokens are
    /// combined into shift and comparison operators here.
    pub(crate) fn peek_operator(&self) -> (TokenCode, usize) {
        use TokenCode::{EqualsToken, GreaterThanToken};

        let code = self.peek_code(0);
        if code != GreaterThanToken {
            return (code, 1);
        }
        let adjacent = |n: usize| self.tokens.is_adjacent(n).then(|| self.peek_code(n));
        match (adjacent(1), adjacent(2), adjacent(3)) {
            (Some(GreaterThanToken), Some(GreaterThanToken), Some(EqualsToken)) => {
                (TokenCode::GreaterThanGreaterThanGreaterThanEqualsToken, 4)
            }
            (Some(GreaterThanToken), Some(GreaterThanToken), _) => {
                (TokenCode::GreaterThanGreaterThanGreaterThanToken, 3)
            }
            (Some(GreaterThanToken), Some(EqualsToken), _) => {
                (TokenCode::GreaterThanGreaterThanEqualsToken, 3)
            }
            (Some(GreaterThanToken), _, _) => (TokenCode::GreaterThanGreaterThanToken, 2),
            (Some(EqualsToken), _, _) => (TokenCode::GreaterThanEqualsToken, 2),
            _ => (GreaterThanToken, 1),
        }
    }

    // ========================================================================
    // Errors
    // ========================================================================

    pub(crate) fn error_at(
        &self,
        token: &Token,
        message: &DiagnosticMessage,
        args: &[&str],
    ) -> SyntaxError {
        SyntaxError::new(message, args, token.text.as_str(), token.location)
    }

    pub(crate) fn error(&self, message: &DiagnosticMessage, args: &[&str]) -> SyntaxError {
        self.error_at(self.peek(), message, args)
    }

    pub(crate) fn expected(&self, code: TokenCode) -> SyntaxError {
        self.error(&messages::_0_EXPECTED, &[code.describe()])
    }

    pub(crate) fn unexpected(&self) -> SyntaxError {
        let token = self.peek();
        if token.code == TokenCode::EndOfFileToken {
            self.error(&messages::UNEXPECTED_END_OF_INPUT, &[])
        } else {
            self.error(&messages::UNEXPECTED_TOKEN, &[token.text.as_str()])
        }
    }

    // ========================================================================
    // Identifiers
    // ========================================================================

    fn is_identifier_code(&self, code: TokenCode, position: IdentifierPosition) -> bool {
        keywords::is_identifier_eligible(code, self.context.strict, position)
            && !(code == TokenCode::YieldKeyword && self.context.in_generator)
    }

    /// Whether the token `n` places ahead can be an identifier in an
    /// expression.
    pub(crate) fn is_identifier(&self, n: usize) -> bool {
        self.is_identifier_code(self.peek_code(n), IdentifierPosition::Expression)
    }

    pub(crate) fn parse_identifier(
        &mut self,
        position: IdentifierPosition,
    ) -> Result<&'a Identifier<'a>> {
        let code = self.peek_code(0);
        if !self.is_identifier_code(code, position) {
            return Err(self.identifier_error(code));
        }
        let token = self.tokens.read();
        let name = token.identifier_name().unwrap_or(token.text.as_str());
        Ok(self.factory.identifier(name))
    }

    /// An identifier or any keyword, as after `.` or in an import specifier.
    pub(crate) fn parse_identifier_name(&mut self) -> Result<&'a Identifier<'a>> {
        if !self.peek_code(0).is_identifier_name() {
            return Err(self.identifier_error(TokenCode::Identifier));
        }
        let token = self.tokens.read();
        let name = token.identifier_name().unwrap_or(token.text.as_str());
        Ok(self.factory.identifier(name))
    }

    fn identifier_error(&self, code: TokenCode) -> SyntaxError {
        let text = self.peek().text.as_str();
        match keywords::category(code) {
            Some(KeywordCategory::ReservedAlways) => {
                self.error(&messages::_0_IS_A_RESERVED_WORD, &[text])
            }
            Some(KeywordCategory::ReservedInStrictMode) if self.context.strict => {
                self.error(&messages::_0_IS_A_RESERVED_WORD_IN_STRICT_MODE, &[text])
            }
            Some(KeywordCategory::ReservedInStrictMode) => {
                self.error(&messages::_0_IS_A_RESERVED_WORD, &[text])
            }
            Some(KeywordCategory::TypeNameRestricted) => {
                self.error(&messages::TYPE_NAME_CANNOT_BE_0, &[text])
            }
            _ if self.at(TokenCode::EndOfFileToken) => {
                self.error(&messages::UNEXPECTED_END_OF_INPUT, &[])
            }
            _ => self.error(&messages::IDENTIFIER_EXPECTED, &[]),
        }
    }

    // ========================================================================
    // Semicolons and directives
    // ========================================================================

    /// A semicolon may be implied before `}`, at end of input, or after a
    /// line break.
    pub(crate) fn can_insert_semicolon(&self) -> bool {
        matches!(
            self.peek_code(0),
            TokenCode::CloseBraceToken | TokenCode::EndOfFileToken
        ) || self.has_line_break_before()
    }

    pub(crate) fn parse_semicolon(&mut self) -> Result<()> {
        if self.read_if(TokenCode::SemicolonToken) || self.can_insert_semicolon() {
            Ok(())
        } else {
            Err(self.expected(TokenCode::SemicolonToken))
        }
    }

    /// Whether the directive prologue starting here contains `"use strict"`.
    pub(crate) fn has_use_strict_directive(&self) -> bool {
        let mut n = 0;
        while self.peek_code(n) == TokenCode::StringLiteral {
            let next = self.peek_code(n + 1);
            let terminated = matches!(
                next,
                TokenCode::SemicolonToken | TokenCode::CloseBraceToken | TokenCode::EndOfFileToken
            ) || self.tokens.has_line_break_before(n + 1);
            if !terminated {
                return false;
            }
            if is_use_strict_directive(self.tokens.peek(n)) {
                return true;
            }
            n += if next == TokenCode::SemicolonToken { 2 } else { 1 };
        }
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bumpalo::Bump;

    fn with_parser<R>(source: &str, strict: bool, f: impl FnOnce(&mut Parser<'_, '_>) -> R) -> R {
        let arena = Bump::new();
        let factory = NodeFactory::new(&arena);
        let mut parser = Parser::new(&factory, source, ParseOptions { strict }).unwrap();
        f(&mut parser)
    }

    #[test]
    fn test_try_parse_rewinds_on_failure() {
        with_parser("a b c", false, |p| {
            p.advance();
            let result = p.try_parse(|p| {
                p.advance();
                p.expect(TokenCode::SemicolonToken)
            });
            assert!(result.is_none());
            assert_eq!(p.position(), 1);
        });
    }

    #[test]
    fn test_try_parse_commits_on_success() {
        with_parser("a ; b", false, |p| {
            let result = p.try_parse(|p| {
                p.advance();
                p.expect(TokenCode::SemicolonToken)
            });
            assert!(result.is_some());
            assert_eq!(p.position(), 2);
        });
    }

    #[test]
    fn test_look_ahead_always_rewinds() {
        with_parser("x y z", false, |p| {
            let seen = p.look_ahead(|p| {
                p.skip(2);
                p.peek().text.clone()
            });
            assert_eq!(seen, "z");
            assert_eq!(p.position(), 0);
        });
    }

    #[test]
    fn test_speculation_restores_context() {
        with_parser("a", false, |p| {
            let _ = p.try_parse(|p| -> Result<()> {
                p.context.strict = true;
                Err(p.unexpected())
            });
            assert!(!p.is_strict());
        });
    }

    #[test]
    fn test_peek_operator_combines_adjacent_tokens() {
        let cases = [
            ("a >>> b", TokenCode::GreaterThanGreaterThanGreaterThanToken, 3),
            ("a >>>= b", TokenCode::GreaterThanGreaterThanGreaterThanEqualsToken, 4),
            ("a >> b", TokenCode::GreaterThanGreaterThanToken, 2),
            ("a >>= b", TokenCode::GreaterThanGreaterThanEqualsToken, 3),
            ("a >= b", TokenCode::GreaterThanEqualsToken, 2),
            ("a > = b", TokenCode::GreaterThanToken, 1),
            ("a > > b", TokenCode::GreaterThanToken, 1),
        ];
        for (source, code, count) in cases {
            with_parser(source, false, |p| {
                p.advance();
                assert_eq!(p.peek_operator(), (code, count), "{source}");
            });
        }
    }

    #[test]
    fn test_use_strict_directive() {
        with_parser("'use strict'; x", false, |p| assert!(p.has_use_strict_directive()));
        with_parser("\"a\"\n\"use strict\"", false, |p| assert!(p.has_use_strict_directive()));
        with_parser("'use strict' + x", false, |p| assert!(!p.has_use_strict_directive()));
        with_parser("x; 'use strict'", false, |p| assert!(!p.has_use_strict_directive()));
        with_parser(r"'use\x20strict'", false, |p| assert!(!p.has_use_strict_directive()));
    }

    #[test]
    fn test_identifier_errors() {
        with_parser("class", false, |p| {
            let err = p.parse_identifier(IdentifierPosition::Expression).unwrap_err();
            assert_eq!(err.message, "Identifier expected. 'class' is a reserved word.");
        });
        with_parser("yield", true, |p| {
            let err = p.parse_identifier(IdentifierPosition::Expression).unwrap_err();
            assert_eq!(err.message, "Identifier expected. 'yield' is a reserved word in strict mode.");
        });
        with_parser("string", false, |p| {
            let err = p.parse_identifier(IdentifierPosition::TypeDeclaration).unwrap_err();
            assert_eq!(err.message, "Type name cannot be 'string'.");
            assert!(p.parse_identifier(IdentifierPosition::Expression).is_ok());
        });
    }

    #[test]
    fn test_semicolon_insertion() {
        with_parser("a\nb", false, |p| {
            p.advance();
            assert!(p.parse_semicolon().is_ok());
        });
        with_parser("a b", false, |p| {
            p.advance();
            let err = p.parse_semicolon().unwrap_err();
            assert_eq!(err.message, "';' expected.");
        });
    }
}
