//! Error types for parsing

use crate::tex::token::{Token, TokenKind};
use std::fmt;
use thiserror::Error;

/// What the parser was looking for when it gave up
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Expectation {
    /// A specific token (a closing delimiter, the second `$` of display math, ...)
    Token(TokenKind),
    /// The `\end{name}` of an open environment
    EnvironmentEnd { name: String, opened_at: usize },
    /// Any node: text, macro, group, math; found a stray closer instead
    Content,
}

impl fmt::Display for Expectation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expectation::Token(kind) => write!(f, "expected {}", kind),
            Expectation::EnvironmentEnd { name, opened_at } => write!(
                f,
                "expected `\\end{{{}}}` for the environment opened at offset {}",
                name, opened_at
            ),
            Expectation::Content => write!(f, "expected text, a macro or a group"),
        }
    }
}

/// A malformed document. Reported at the first offending token.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("syntax error at offset {offset}: {expected}, found {found}")]
pub struct SyntaxError {
    pub expected: Expectation,
    pub found: TokenKind,
    pub literal: String,
    pub offset: usize,
}

impl SyntaxError {
    pub fn new(expected: Expectation, token: &Token<'_>) -> Self {
        Self {
            expected,
            found: token.kind,
            literal: token.literal.to_string(),
            offset: token.offset,
        }
    }

    /// Whether the input ended before the construct was closed
    pub fn is_unterminated(&self) -> bool {
        self.found == TokenKind::EndOfStream
    }

    /// 1-based line and column (in characters) of the offending token
    pub fn location(&self, source: &str) -> (usize, usize) {
        let before = source.get(..self.offset).unwrap_or(source);
        let line = before.matches('\n').count();
        let column = match before.rfind('\n') {
            Some(newline) => before[newline + 1..].chars().count(),
            None => before.chars().count(),
        };
        (line + 1, column + 1)
    }

    /// Human readable report: message, position and the surrounding source lines
    pub fn render(&self, source: &str) -> String {
        let (line, column) = self.location(source);
        let mut report = format!("Error: {}\n  --> line {}, column {}\n\n", self, line, column);
        report.push_str(&format_source_context(source, line - 1));
        report
    }
}

/// Format source code context around an error line (0-indexed)
///
/// Shows 2 lines before the error, the error line with >> marker, and 2 lines after.
/// All lines are numbered for easy reference. The empty line after a trailing newline is
/// kept, so an error at the very end of such a source still gets a marked line.
pub fn format_source_context(source: &str, error_line: usize) -> String {
    let mut lines: Vec<&str> = source.lines().collect();
    if source.is_empty() || source.ends_with('\n') {
        lines.push("");
    }

    let start_line = error_line.saturating_sub(2);
    let end_line = (error_line + 3).min(lines.len());

    let mut context = String::new();

    for (line_num, line) in lines.iter().enumerate().take(end_line).skip(start_line) {
        let marker = if line_num == error_line { ">>" } else { "  " };
        context.push_str(&format!("{} {:3} | {}\n", marker, line_num + 1, line));
    }

    context
}

#[cfg(test)]
mod tests {
    use super::*;

    fn error_at(offset: usize) -> SyntaxError {
        SyntaxError::new(
            Expectation::Token(TokenKind::RightCurly),
            &Token::end_of_stream(offset),
        )
    }

    #[test]
    fn test_message() {
        let error = error_at(3);
        assert_eq!(
            error.to_string(),
            "syntax error at offset 3: expected `}`, found end of input"
        );
        assert!(error.is_unterminated());
    }

    #[test]
    fn test_environment_message() {
        let error = SyntaxError::new(
            Expectation::EnvironmentEnd {
                name: "itemize".to_string(),
                opened_at: 0,
            },
            &Token::end_of_stream(20),
        );
        assert_eq!(
            error.to_string(),
            "syntax error at offset 20: expected `\\end{itemize}` for the environment opened at offset 0, found end of input"
        );
    }

    #[test]
    fn test_location() {
        let source = "ab\ncd\né{";
        assert_eq!(error_at(0).location(source), (1, 1));
        assert_eq!(error_at(4).location(source), (2, 2));
        // offset 8 is the `{` after the two-byte `é`
        assert_eq!(error_at(8).location(source), (3, 2));
        assert_eq!(error_at(source.len()).location(source), (3, 3));
    }

    #[test]
    fn test_format_source_context() {
        let source = "line 1\nline 2\nline 3\nerror line\nline 5\nline 6\nline 7";

        let context = format_source_context(source, 3);

        assert!(!context.contains("line 1"));
        assert!(context.contains("line 2"));
        assert!(context.contains(">>   4 | error line"));
        assert!(context.contains("line 5"));
        assert!(context.contains("line 6"));
        assert!(!context.contains("line 7"));
    }

    #[test]
    fn test_render() {
        let source = "a\n{b";
        let rendered = error_at(source.len()).render(source);
        assert!(rendered.starts_with("Error: syntax error at offset 4"));
        assert!(rendered.contains("line 2, column 3"));
        assert!(rendered.contains(">>   2 | {b"));
    }

    #[test]
    fn test_render_after_trailing_newline() {
        let source = "{a\n";
        let rendered = error_at(source.len()).render(source);
        assert!(rendered.contains("line 2, column 1"));
        assert!(rendered.contains("    1 | {a\n"));
        assert!(rendered.ends_with(">>   2 | \n"));
    }

    #[test]
    fn test_render_empty_source() {
        let rendered = error_at(0).render("");
        assert!(rendered.ends_with(">>   1 | \n"));
    }
}
