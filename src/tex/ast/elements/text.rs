//! Text element
//!
//!     A maximal run of generic characters, spaces and newlines, kept verbatim. Whitespace is
//!     not normalized here; the word counter is the one that decides what a word is.

use crate::tex::ast::traits::{AstNode, Visitable, Visitor};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Text {
    pub text: String,
}

impl Text {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }
}

impl AstNode for Text {
    fn node_type(&self) -> &'static str {
        "Text"
    }

    fn display_label(&self) -> String {
        self.text.clone()
    }
}

impl Visitable for Text {
    fn accept<V: Visitor + ?Sized>(&self, visitor: &mut V) -> V::Output {
        visitor.visit_text(self)
    }
}
