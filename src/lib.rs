//! # texcount
//!
//! A parser for a restricted TeX/LaTeX dialect and a word counter that walks the resulting
//! tree, counting prose while ignoring markup noise (macro names, braces, math source).
//!
//! File Layout
//!
//! src/tex
//!   ├── token       Token kinds and the token value type
//!   ├── lexing      Character level tokenization (logos)
//!   ├── parsing     Recursive descent parser, lookahead cursor and syntax errors
//!   ├── ast         Node types, the visitor dispatch and structural snapshots
//!   ├── counting    The word counting visitor and its options
//!   ├── formats     Output formats (count, treeviz, json, yaml, token dumps)
//!   └── testing     Fluent assertions over parsed documents
//!
//! The pipeline is always the same: source → tokens → [Document](tex::ast::Document) → count.
//!
//! For comprehensive testing guidelines, see the [testing module](tex::testing).

pub mod tex;

pub use tex::ast::Document;
pub use tex::counting::{count_source, count_words, CountOptions};
pub use tex::parsing::{parse, SyntaxError};
