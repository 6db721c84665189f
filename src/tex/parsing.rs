//! Parser
//!
//!     Recursive descent over the token stream with exactly one token of lookahead. The
//!     lookahead lives in a [Cursor], which the [Parser] owns and threads through every grammar
//!     rule by exclusive reference; separate parser instances share nothing.
//!
//! Comment Suppression
//!
//!     Comments are handled by the cursor, not by the grammar: whenever the cursor advances onto
//!     a `%`, it drops tokens up to (not including) the next newline or the end of input. No
//!     grammar rule ever sees a comment, including the escape rule: in `\%c` the backslash
//!     escapes the newline that ends the comment. A backslash at the end of input escapes the
//!     end-of-stream sentinel (`'\0'`).
//!
//! Grammar
//!
//!     By lookahead on the current token:
//!         `\`       escape sequence, macro, or environment (a macro shaped like `\begin{name}`)
//!         `$`       math region, display when immediately followed by a second `$`
//!         `{` `[`   enclosed group, up to the structurally opposite closer
//!         `^` `_`   sub/superscript with a braced group or a single character
//!         `&`       separator
//!         other     a maximal run of characters, spaces and newlines (text)
//!
//!     Parsing is fail-fast: the first violation is returned as a [SyntaxError] and nothing of
//!     the partial tree survives.

pub mod cursor;
pub mod error;
pub mod parser;

pub use cursor::Cursor;
pub use error::{format_source_context, Expectation, SyntaxError};
pub use parser::Parser;

use crate::tex::ast::Document;

/// Main parser function that takes source text and returns a parsed document
pub fn parse(source: &str) -> Result<Document, SyntaxError> {
    Parser::new(source).parse()
}
