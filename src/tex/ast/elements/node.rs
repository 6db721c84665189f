//! The node union
//!
//!     [Node] is the closed set of variants that can appear as the child of a document, a group,
//!     an argument, an environment, a math region or a script. Dispatch over it is always an
//!     exhaustive match, so adding a variant is a compile error everywhere it is not handled.

use super::enclosed::Enclosed;
use super::macros::{Environment, EscapeSequence, Macro};
use super::math::{MathRegion, SubSuperScript};
use super::text::Text;
use crate::tex::ast::traits::{AstNode, Visitable, Visitor};

/// Column/row separator, a bare `&`
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Separator;

impl AstNode for Separator {
    fn node_type(&self) -> &'static str {
        "Separator"
    }

    fn display_label(&self) -> String {
        "&".to_string()
    }
}

impl Visitable for Separator {
    fn accept<V: Visitor + ?Sized>(&self, visitor: &mut V) -> V::Output {
        visitor.visit_separator(self)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    Text(Text),
    Enclosed(Enclosed),
    Macro(Macro),
    Environment(Environment),
    EscapeSequence(EscapeSequence),
    Separator(Separator),
    MathRegion(MathRegion),
    SubSuperScript(SubSuperScript),
}

impl Node {
    /// Children of container variants; leaves return an empty slice.
    ///
    /// Macro arguments and environment arguments are not children, see [Macro::arguments].
    pub fn children(&self) -> &[Node] {
        match self {
            Node::Enclosed(enclosed) => &enclosed.children,
            Node::Environment(environment) => &environment.children,
            Node::MathRegion(math) => &math.children,
            Node::SubSuperScript(script) => &script.children,
            Node::Text(_) | Node::Macro(_) | Node::EscapeSequence(_) | Node::Separator(_) => &[],
        }
    }

    pub fn as_text(&self) -> Option<&Text> {
        match self {
            Node::Text(text) => Some(text),
            _ => None,
        }
    }

    pub fn as_macro(&self) -> Option<&Macro> {
        match self {
            Node::Macro(mac) => Some(mac),
            _ => None,
        }
    }

    pub fn as_environment(&self) -> Option<&Environment> {
        match self {
            Node::Environment(environment) => Some(environment),
            _ => None,
        }
    }

    fn as_ast_node(&self) -> &dyn AstNode {
        match self {
            Node::Text(text) => text,
            Node::Enclosed(enclosed) => enclosed,
            Node::Macro(mac) => mac,
            Node::Environment(environment) => environment,
            Node::EscapeSequence(escape) => escape,
            Node::Separator(separator) => separator,
            Node::MathRegion(math) => math,
            Node::SubSuperScript(script) => script,
        }
    }
}

impl AstNode for Node {
    fn node_type(&self) -> &'static str {
        self.as_ast_node().node_type()
    }

    fn display_label(&self) -> String {
        self.as_ast_node().display_label()
    }
}

impl Visitable for Node {
    fn accept<V: Visitor + ?Sized>(&self, visitor: &mut V) -> V::Output {
        match self {
            Node::Text(text) => visitor.visit_text(text),
            Node::Enclosed(enclosed) => visitor.visit_enclosed(enclosed),
            Node::Macro(mac) => visitor.visit_macro(mac),
            Node::Environment(environment) => visitor.visit_environment(environment),
            Node::EscapeSequence(escape) => visitor.visit_escape_sequence(escape),
            Node::Separator(separator) => visitor.visit_separator(separator),
            Node::MathRegion(math) => visitor.visit_math_region(math),
            Node::SubSuperScript(script) => visitor.visit_script(script),
        }
    }
}

macro_rules! impl_from_variant {
    ($($variant:ident),* $(,)?) => {
        $(
            impl From<$variant> for Node {
                fn from(value: $variant) -> Self {
                    Node::$variant(value)
                }
            }
        )*
    };
}

impl_from_variant!(
    Text,
    Enclosed,
    Macro,
    Environment,
    EscapeSequence,
    Separator,
    MathRegion,
    SubSuperScript,
);
