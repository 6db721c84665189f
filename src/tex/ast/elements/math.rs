//! Math elements: dollar delimited regions and sub/superscripts

use super::node::Node;
use crate::tex::ast::traits::{AstNode, Visitable, Visitor};
use crate::tex::token::TokenKind;

/// Math region, `$...$` (inline) or `$$...$$` (display)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MathRegion {
    pub display: bool,
    pub children: Vec<Node>,
}

impl MathRegion {
    pub fn inline(children: Vec<Node>) -> Self {
        Self {
            display: false,
            children,
        }
    }

    pub fn display(children: Vec<Node>) -> Self {
        Self {
            display: true,
            children,
        }
    }

    pub fn delimiter(&self) -> &'static str {
        if self.display {
            "$$"
        } else {
            "$"
        }
    }
}

impl AstNode for MathRegion {
    fn node_type(&self) -> &'static str {
        "MathRegion"
    }

    fn display_label(&self) -> String {
        self.delimiter().to_string()
    }
}

impl Visitable for MathRegion {
    fn accept<V: Visitor + ?Sized>(&self, visitor: &mut V) -> V::Output {
        visitor.visit_math_region(self)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ScriptOperator {
    Subscript,
    Superscript,
}

impl ScriptOperator {
    pub fn from_token(kind: TokenKind) -> Option<Self> {
        match kind {
            TokenKind::Underscore => Some(ScriptOperator::Subscript),
            TokenKind::Circumflex => Some(ScriptOperator::Superscript),
            _ => None,
        }
    }

    pub fn symbol(&self) -> &'static str {
        match self {
            ScriptOperator::Subscript => "_",
            ScriptOperator::Superscript => "^",
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            ScriptOperator::Subscript => "subscript",
            ScriptOperator::Superscript => "superscript",
        }
    }
}

/// `_` and `^` with their operand: a single character or the contents of a braced group
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubSuperScript {
    pub operator: ScriptOperator,
    pub children: Vec<Node>,
}

impl SubSuperScript {
    pub fn new(operator: ScriptOperator, children: Vec<Node>) -> Self {
        Self { operator, children }
    }
}

impl AstNode for SubSuperScript {
    fn node_type(&self) -> &'static str {
        "SubSuperScript"
    }

    fn display_label(&self) -> String {
        self.operator.symbol().to_string()
    }
}

impl Visitable for SubSuperScript {
    fn accept<V: Visitor + ?Sized>(&self, visitor: &mut V) -> V::Output {
        visitor.visit_script(self)
    }
}
