use crate::{
    errors::errors::{Diagnostic, ErrorImpl, Severity},
    Position,
};

use super::tokens::{Token, TokenKind, KEYWORD_LOOKUP};

/// Cursor-based scanner over a borrowed source buffer.
///
/// One instance per tokenization session: every call to [`Lexer::next_token`]
/// advances the cursor and yields exactly one token. Once the buffer is
/// exhausted the scanner keeps returning [`TokenKind::End`] without moving.
pub struct Lexer<'src> {
    source: &'src str,
    cursor: usize,
    pos: Position,
}

impl<'src> Lexer<'src> {
    pub fn new(source: &'src str) -> Lexer<'src> {
        Lexer {
            source,
            cursor: 0,
            pos: Position::start(),
        }
    }

    /// Scans and returns the next token.
    ///
    /// A bare `&` or `|` is a fatal lexical error and comes back as an `Err`
    /// diagnostic; deciding whether that ends the process is the caller's
    /// job. Any other unrecognized byte yields a zero-length
    /// [`TokenKind::Invalid`] token and scanning can continue past it.
    pub fn next_token(&mut self) -> Result<Token<'src>, Diagnostic> {
        self.trim();

        if !self.cursor_safe() {
            return Ok(Token {
                kind: TokenKind::End,
                text: "",
                pos: self.pos,
            });
        }

        let byte = self.source.as_bytes()[self.cursor];

        if byte.is_ascii_alphabetic() {
            return Ok(self.consume_word());
        }

        if byte.is_ascii_digit() {
            return Ok(self.consume_number());
        }

        let token = self.consume_symbol()?;

        // The symbol sub-scan leaves the first byte unconsumed (two-byte
        // forms advance once internally). Advancing here also covers the
        // unrecognized-byte case, so the scanner always makes forward
        // progress instead of looping on bad input.
        self.advance();

        Ok(token)
    }

    fn cursor_safe(&self) -> bool {
        self.cursor < self.source.len()
    }

    fn peek(&self, offset: usize) -> Option<u8> {
        self.source.as_bytes().get(self.cursor + offset).copied()
    }

    /// Consumes one byte, keeping the (row, col) position in sync. Must only
    /// be called while the cursor is in bounds.
    fn advance(&mut self) {
        if self.source.as_bytes()[self.cursor] == b'\n' {
            self.pos.row += 1;
            self.pos.col = 0;
        }

        self.cursor += 1;
        self.pos.col += 1;
    }

    /// Skips interleaved whitespace and `//` comments. A comment may be
    /// followed by more whitespace and further comments, so this loops until
    /// a full pass makes no progress.
    fn trim(&mut self) {
        loop {
            let mut progress = false;

            while self.cursor_safe() && self.source.as_bytes()[self.cursor].is_ascii_whitespace() {
                self.advance();
                progress = true;
            }

            if self.peek(0) == Some(b'/') && self.peek(1) == Some(b'/') {
                while self.cursor_safe() && self.source.as_bytes()[self.cursor] != b'\n' {
                    self.advance();
                    progress = true;
                }
            }

            if !progress {
                break;
            }
        }
    }

    fn consume_word(&mut self) -> Token<'src> {
        let pos = self.pos;
        let start = self.cursor;

        while self.cursor_safe() && self.source.as_bytes()[self.cursor].is_ascii_alphanumeric() {
            self.advance();
        }

        let text = &self.source[start..self.cursor];

        // Full-lexeme match only: `integer` is an identifier, not the
        // keyword `int` plus trailing bytes.
        let kind = if KEYWORD_LOOKUP.contains(text) {
            TokenKind::Keyword
        } else {
            TokenKind::Identifier
        };

        Token { kind, text, pos }
    }

    fn consume_number(&mut self) -> Token<'src> {
        let pos = self.pos;
        let start = self.cursor;

        while self.cursor_safe() && self.source.as_bytes()[self.cursor].is_ascii_digit() {
            self.advance();
        }

        Token {
            kind: TokenKind::Number,
            text: &self.source[start..self.cursor],
            pos,
        }
    }

    fn consume_symbol(&mut self) -> Result<Token<'src>, Diagnostic> {
        let pos = self.pos;
        let start = self.cursor;

        let (kind, length) = match self.source.as_bytes()[self.cursor] {
            b'(' => (TokenKind::OpenParen, 1),
            b')' => (TokenKind::CloseParen, 1),
            b'{' => (TokenKind::OpenCurly, 1),
            b'}' => (TokenKind::CloseCurly, 1),
            b';' => (TokenKind::Semicolon, 1),
            b',' => (TokenKind::Comma, 1),
            b'*' => (TokenKind::Star, 1),
            b'/' => (TokenKind::Slash, 1),
            b'%' => (TokenKind::Percent, 1),
            b'!' => self.widen(TokenKind::Not, b'=', TokenKind::NotEquals),
            b'=' => self.widen(TokenKind::Assignment, b'=', TokenKind::Equals),
            b'>' => self.widen(TokenKind::Greater, b'=', TokenKind::GreaterEquals),
            b'<' => self.widen(TokenKind::Less, b'=', TokenKind::LessEquals),
            b'+' => self.widen(TokenKind::Plus, b'+', TokenKind::PlusPlus),
            b'-' => self.widen(TokenKind::Minus, b'-', TokenKind::MinusMinus),
            b'&' => {
                if self.peek(1) != Some(b'&') {
                    return Err(Diagnostic::new(
                        ErrorImpl::LoneAmpersand,
                        Severity::Error,
                        pos,
                    ));
                }
                self.advance();
                (TokenKind::And, 2)
            }
            b'|' => {
                if self.peek(1) != Some(b'|') {
                    return Err(Diagnostic::new(ErrorImpl::LoneBar, Severity::Error, pos));
                }
                self.advance();
                (TokenKind::Or, 2)
            }
            _ => {
                return Ok(Token {
                    kind: TokenKind::Invalid,
                    text: "",
                    pos,
                })
            }
        };

        Ok(Token {
            kind,
            text: &self.source[start..start + length],
            pos,
        })
    }

    /// Greedy two-byte disambiguation: if the byte after the cursor matches
    /// `continuation`, consume one extra byte and produce `double`, otherwise
    /// keep the `single` kind.
    fn widen(
        &mut self,
        single: TokenKind,
        continuation: u8,
        double: TokenKind,
    ) -> (TokenKind, usize) {
        if self.peek(1) == Some(continuation) {
            self.advance();
            (double, 2)
        } else {
            (single, 1)
        }
    }
}
