//! Core token types shared across the lexer, parser, and tooling.
//!
//!     TeX is tokenized one character at a time. Every character of the source becomes exactly
//!     one token, classified by a fixed table: the handful of characters that carry structure
//!     (`\ { } [ ] % $ ^ _ &`), blanks (space, tab, newline), and everything else as a generic
//!     character. The stream always ends with a single synthetic end-of-stream token.
//!
//!     Keeping the lexer this dumb means all the context sensitive work (macro names, comment
//!     suppression, environment matching) lives in the parser, which sees one token of lookahead.

use serde::Serialize;
use std::fmt;

/// Literal carried by the end-of-stream sentinel.
pub const END_OF_STREAM_LITERAL: &str = "\0";

/// Classification of a single source character.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum TokenKind {
    Backslash,
    LeftCurly,
    RightCurly,
    LeftSquare,
    RightSquare,
    Percent,
    Dollar,
    Ampersand,
    Circumflex,
    Underscore,
    Space,
    Newline,
    EndOfStream,
    Char,
}

impl TokenKind {
    /// Tokens that may appear inside a text run
    pub fn is_text(&self) -> bool {
        matches!(self, TokenKind::Char | TokenKind::Space | TokenKind::Newline)
    }

    /// Spaces, tabs and newlines
    pub fn is_blank(&self) -> bool {
        matches!(self, TokenKind::Space | TokenKind::Newline)
    }

    /// Short stable name, used by the token dump formats
    pub fn name(&self) -> &'static str {
        match self {
            TokenKind::Backslash => "backslash",
            TokenKind::LeftCurly => "left-curly",
            TokenKind::RightCurly => "right-curly",
            TokenKind::LeftSquare => "left-square",
            TokenKind::RightSquare => "right-square",
            TokenKind::Percent => "percent",
            TokenKind::Dollar => "dollar",
            TokenKind::Ampersand => "ampersand",
            TokenKind::Circumflex => "circumflex",
            TokenKind::Underscore => "underscore",
            TokenKind::Space => "space",
            TokenKind::Newline => "newline",
            TokenKind::EndOfStream => "end-of-stream",
            TokenKind::Char => "char",
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TokenKind::Backslash => write!(f, "`\\`"),
            TokenKind::LeftCurly => write!(f, "`{{`"),
            TokenKind::RightCurly => write!(f, "`}}`"),
            TokenKind::LeftSquare => write!(f, "`[`"),
            TokenKind::RightSquare => write!(f, "`]`"),
            TokenKind::Percent => write!(f, "`%`"),
            TokenKind::Dollar => write!(f, "`$`"),
            TokenKind::Ampersand => write!(f, "`&`"),
            TokenKind::Circumflex => write!(f, "`^`"),
            TokenKind::Underscore => write!(f, "`_`"),
            TokenKind::Space => write!(f, "space"),
            TokenKind::Newline => write!(f, "newline"),
            TokenKind::EndOfStream => write!(f, "end of input"),
            TokenKind::Char => write!(f, "character"),
        }
    }
}

/// A classified character together with its literal and byte offset in the source.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Token<'source> {
    pub kind: TokenKind,
    pub literal: &'source str,
    pub offset: usize,
}

impl<'source> Token<'source> {
    pub fn new(kind: TokenKind, literal: &'source str, offset: usize) -> Self {
        Self {
            kind,
            literal,
            offset,
        }
    }

    /// The sentinel that terminates every stream; `offset` is the source length.
    pub fn end_of_stream(offset: usize) -> Self {
        Self::new(TokenKind::EndOfStream, END_OF_STREAM_LITERAL, offset)
    }

    pub fn is(&self, kind: TokenKind) -> bool {
        self.kind == kind
    }

    /// The character this token was produced from (`'\0'` for end-of-stream).
    pub fn character(&self) -> char {
        self.literal.chars().next().unwrap_or('\0')
    }
}

impl fmt::Display for Token<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {:?} @{}", self.kind.name(), self.literal, self.offset)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_token_predicates() {
        assert!(TokenKind::Char.is_text());
        assert!(TokenKind::Space.is_text());
        assert!(TokenKind::Newline.is_text());
        assert!(!TokenKind::Backslash.is_text());
        assert!(!TokenKind::EndOfStream.is_text());

        assert!(TokenKind::Space.is_blank());
        assert!(TokenKind::Newline.is_blank());
        assert!(!TokenKind::Char.is_blank());
    }

    #[test]
    fn test_end_of_stream_sentinel() {
        let token = Token::end_of_stream(7);
        assert_eq!(token.kind, TokenKind::EndOfStream);
        assert_eq!(token.literal, "\0");
        assert_eq!(token.offset, 7);
        assert_eq!(token.character(), '\0');
    }

    #[test]
    fn test_display() {
        assert_eq!(TokenKind::LeftCurly.to_string(), "`{`");
        assert_eq!(TokenKind::EndOfStream.to_string(), "end of input");
        let token = Token::new(TokenKind::Char, "a", 3);
        assert_eq!(token.to_string(), "char \"a\" @3");
    }
}
