//! Lexer
//!
//!     Converts raw source text into a lazy stream of [Token]s. The character classification is
//!     done by a logos lexer over a fixed table; this module adds the byte offsets and the single
//!     end-of-stream sentinel that the parser relies on.
//!
//!     There are no lexing errors: every character is representable, anything outside the table
//!     is a generic character. A [Lexer] is single pass; to re-tokenize, build a new one over the
//!     same source.

use crate::tex::token::{Token, TokenKind};
use logos::Logos;
use std::iter::FusedIterator;

/// Character table driving the logos automaton. One match per source character.
#[derive(Logos, Debug, Clone, Copy, PartialEq)]
enum Symbol {
    #[token("\\")]
    Backslash,
    #[token("{")]
    LeftCurly,
    #[token("}")]
    RightCurly,
    #[token("[")]
    LeftSquare,
    #[token("]")]
    RightSquare,
    #[token("%")]
    Percent,
    #[token("$")]
    Dollar,
    #[token("&")]
    Ampersand,
    #[token("^")]
    Circumflex,
    #[token("_")]
    Underscore,
    #[regex(r"[ \t]")]
    Space,
    #[token("\n")]
    Newline,
    // Catch-all: a single character that is none of the above
    #[regex(r"[^ \t\n\\{}\[\]%$^_&]")]
    Char,
}

impl From<Symbol> for TokenKind {
    fn from(symbol: Symbol) -> Self {
        match symbol {
            Symbol::Backslash => TokenKind::Backslash,
            Symbol::LeftCurly => TokenKind::LeftCurly,
            Symbol::RightCurly => TokenKind::RightCurly,
            Symbol::LeftSquare => TokenKind::LeftSquare,
            Symbol::RightSquare => TokenKind::RightSquare,
            Symbol::Percent => TokenKind::Percent,
            Symbol::Dollar => TokenKind::Dollar,
            Symbol::Ampersand => TokenKind::Ampersand,
            Symbol::Circumflex => TokenKind::Circumflex,
            Symbol::Underscore => TokenKind::Underscore,
            Symbol::Space => TokenKind::Space,
            Symbol::Newline => TokenKind::Newline,
            Symbol::Char => TokenKind::Char,
        }
    }
}

/// Pull-based tokenizer over a source string.
pub struct Lexer<'source> {
    inner: logos::Lexer<'source, Symbol>,
    source_len: usize,
    finished: bool,
}

impl<'source> Lexer<'source> {
    pub fn new(source: &'source str) -> Self {
        Self {
            inner: Symbol::lexer(source),
            source_len: source.len(),
            finished: false,
        }
    }
}

impl<'source> Iterator for Lexer<'source> {
    type Item = Token<'source>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }

        match self.inner.next() {
            Some(result) => {
                // The table covers every character, so an error can only be a character the
                // automaton did not classify: treat it as generic.
                let kind = result.map(TokenKind::from).unwrap_or(TokenKind::Char);
                Some(Token::new(kind, self.inner.slice(), self.inner.span().start))
            }
            None => {
                self.finished = true;
                Some(Token::end_of_stream(self.source_len))
            }
        }
    }
}

impl FusedIterator for Lexer<'_> {}

/// Tokenize source lazily
pub fn tokenize(source: &str) -> Lexer<'_> {
    Lexer::new(source)
}

/// Convenience function to tokenize a string and collect all tokens, sentinel included
pub fn collect_tokens(source: &str) -> Vec<Token<'_>> {
    tokenize(source).collect()
}
