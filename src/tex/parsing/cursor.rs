//! Lookahead cursor
//!
//!     Holds the current token and pulls the next one from the lexer on demand. Advancing onto
//!     a `%` skips the comment, leaving the terminating newline (or end-of-stream) as the
//!     current token. Once the lexer is exhausted the cursor keeps reporting end-of-stream.

use super::error::{Expectation, SyntaxError};
use crate::tex::lexing::Lexer;
use crate::tex::token::{Token, TokenKind};

pub struct Cursor<'source> {
    lexer: Lexer<'source>,
    current: Token<'source>,
    end_offset: usize,
}

impl<'source> Cursor<'source> {
    /// Create a cursor positioned on the first meaningful token of `source`
    pub fn new(source: &'source str) -> Self {
        let mut cursor = Self {
            lexer: Lexer::new(source),
            current: Token::end_of_stream(source.len()),
            end_offset: source.len(),
        };
        cursor.advance();
        cursor
    }

    pub fn current(&self) -> Token<'source> {
        self.current
    }

    pub fn kind(&self) -> TokenKind {
        self.current.kind
    }

    pub fn at(&self, kind: TokenKind) -> bool {
        self.current.is(kind)
    }

    pub fn at_end(&self) -> bool {
        self.at(TokenKind::EndOfStream)
    }

    /// Move to the next token, skipping comments
    pub fn advance(&mut self) {
        self.pull();
        if self.at(TokenKind::Percent) {
            self.skip_comment();
        }
    }

    /// Consume the current token if it is of `kind`, fail otherwise
    pub fn eat(&mut self, kind: TokenKind) -> Result<Token<'source>, SyntaxError> {
        self.expect(kind)?;
        let token = self.current;
        self.advance();
        Ok(token)
    }

    /// Check the current token is of `kind`, without consuming it
    pub fn expect(&self, kind: TokenKind) -> Result<(), SyntaxError> {
        if self.at(kind) {
            Ok(())
        } else {
            Err(SyntaxError::new(Expectation::Token(kind), &self.current))
        }
    }

    /// Skip spaces and newlines (comments are already gone)
    pub fn skip_blank(&mut self) {
        while self.current.kind.is_blank() {
            self.advance();
        }
    }

    fn pull(&mut self) {
        self.current = self
            .lexer
            .next()
            .unwrap_or_else(|| Token::end_of_stream(self.end_offset));
    }

    fn skip_comment(&mut self) {
        while !matches!(
            self.current.kind,
            TokenKind::Newline | TokenKind::EndOfStream
        ) {
            self.pull();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn drain(cursor: &mut Cursor<'_>) -> Vec<TokenKind> {
        let mut kinds = vec![cursor.kind()];
        while !cursor.at_end() {
            cursor.advance();
            kinds.push(cursor.kind());
        }
        kinds
    }

    #[test]
    fn test_comment_is_skipped_up_to_newline() {
        let mut cursor = Cursor::new("a%bc\nd");
        assert_eq!(
            drain(&mut cursor),
            vec![
                TokenKind::Char,
                TokenKind::Newline,
                TokenKind::Char,
                TokenKind::EndOfStream
            ]
        );
    }

    #[test]
    fn test_leading_comment() {
        let mut cursor = Cursor::new("% only a comment");
        assert!(cursor.at_end());
    }

    #[test]
    fn test_comment_after_backslash_is_skipped() {
        let mut cursor = Cursor::new("\\%x\ny");
        cursor.eat(TokenKind::Backslash).expect("backslash");
        assert!(cursor.at(TokenKind::Newline));
        assert_eq!(cursor.current().offset, 3);
    }

    #[test]
    fn test_eat() {
        let mut cursor = Cursor::new("{x");
        let token = cursor.eat(TokenKind::LeftCurly).expect("left curly");
        assert_eq!(token.offset, 0);

        let error = cursor.eat(TokenKind::RightCurly).unwrap_err();
        assert_eq!(error.expected, Expectation::Token(TokenKind::RightCurly));
        assert_eq!(error.found, TokenKind::Char);
        assert_eq!(error.offset, 1);
    }

    #[test]
    fn test_end_of_stream_is_sticky() {
        let mut cursor = Cursor::new("");
        assert!(cursor.at_end());
        cursor.advance();
        cursor.advance();
        assert!(cursor.at_end());
        assert_eq!(cursor.current().offset, 0);
    }

    #[test]
    fn test_skip_blank() {
        let mut cursor = Cursor::new(" \n\t % c\n x");
        cursor.skip_blank();
        assert!(cursor.at(TokenKind::Char));
        assert_eq!(cursor.current().offset, 9);
    }
}
