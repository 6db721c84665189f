//! Document element
//!
//!     The root of every parsed tree. A document is nothing more than the ordered sequence of
//!     top-level nodes; there is no preamble/body distinction.

use super::node::Node;
use crate::tex::ast::traits::{AstNode, Visitable, Visitor};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Document {
    pub children: Vec<Node>,
}

impl Document {
    pub fn new(children: Vec<Node>) -> Self {
        Self { children }
    }

    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }
}

impl AstNode for Document {
    fn node_type(&self) -> &'static str {
        "Document"
    }

    fn display_label(&self) -> String {
        format!("{} node(s)", self.children.len())
    }
}

impl Visitable for Document {
    fn accept<V: Visitor + ?Sized>(&self, visitor: &mut V) -> V::Output {
        visitor.visit_document(self)
    }
}
