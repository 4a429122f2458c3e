//! A cursor over the scanned tokens with unbounded lookahead and
//! checkpoint/rewind.

use retype_ast::TokenCode;
use retype_core::text::SourceLocation;
use retype_scanner::{Token, TokenValue};

/// A saved stream position. Every checkpoint must be handed back to
/// [`TokenStream::rewind`] or dropped once the speculative step commits.
#[must_use]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Checkpoint {
    position: usize,
}

#[derive(Debug)]
pub struct TokenStream {
    tokens: Vec<Token>,
    position: usize,
}

impl TokenStream {
    /// Wrap a token vector. A missing trailing `EndOfFileToken` is appended.
    pub fn new(mut tokens: Vec<Token>) -> Self {
        if tokens.last().map(|t| t.code) != Some(TokenCode::EndOfFileToken) {
            let location = tokens
                .last()
                .map(|t| SourceLocation::point(t.end(), t.location.end))
                .unwrap_or_default();
            tokens.push(Token::new(
                TokenCode::EndOfFileToken,
                String::new(),
                TokenValue::Raw(String::new()),
                location,
            ));
        }
        Self {
            tokens,
            position: 0,
        }
    }

    /// Number of tokens, end of input included.
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.len() <= 1
    }

    #[inline]
    pub fn position(&self) -> usize {
        self.position
    }

    /// The token `n` places ahead. Past the end this is always the
    /// end-of-file token.
    #[inline]
    pub fn peek(&self, n: usize) -> &Token {
        let last = self.tokens.len() - 1;
        &self.tokens[(self.position + n).min(last)]
    }

    /// Consume and return the current token. End of input is never consumed.
    pub fn read(&mut self) -> &Token {
        let index = self.position;
        if index + 1 < self.tokens.len() {
            self.position += 1;
        }
        &self.tokens[index]
    }

    pub fn read_if(&mut self, code: TokenCode) -> bool {
        if self.peek(0).code == code {
            self.read();
            true
        } else {
            false
        }
    }

    /// Whether a line terminator separates the token `n` places ahead from the
    /// token before it.
    pub fn has_line_break_before(&self, n: usize) -> bool {
        let index = (self.position + n).min(self.tokens.len() - 1);
        match index.checked_sub(1) {
            Some(previous) => {
                self.tokens[previous].location.end.line < self.tokens[index].location.start.line
            }
            None => false,
        }
    }

    /// Whether the token `n` places ahead starts exactly where the one before
    /// it ends.
    pub fn is_adjacent(&self, n: usize) -> bool {
        let index = (self.position + n).min(self.tokens.len() - 1);
        match index.checked_sub(1) {
            Some(previous) => self.tokens[previous].end() == self.tokens[index].location.span.start,
            None => false,
        }
    }

    pub fn checkpoint(&self) -> Checkpoint {
        Checkpoint {
            position: self.position,
        }
    }

    pub fn rewind(&mut self, checkpoint: Checkpoint) {
        self.position = checkpoint.position;
    }

    /// The tokens, end of input included.
    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }
}
