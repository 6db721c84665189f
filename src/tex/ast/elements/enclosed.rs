//! Bracketed groups: enclosed groups and macro arguments
//!
//!     Both `{...}` and `[...]` open a balanced group. Outside of an argument position the group
//!     is an [Enclosed]; right after a macro name it becomes an [Argument], optional when square.
//!     The two share nothing but the delimiter, so [Argument] is its own type carrying an
//!     [ArgumentKind] rather than a specialization of [Enclosed].

use super::node::Node;
use crate::tex::ast::traits::{AstNode, Visitable, Visitor};
use crate::tex::token::TokenKind;

/// Which bracket opened a group.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Delimiter {
    Curly,
    Square,
}

impl Delimiter {
    /// The delimiter opened by `kind`, if `kind` is an opening bracket
    pub fn from_opening(kind: TokenKind) -> Option<Self> {
        match kind {
            TokenKind::LeftCurly => Some(Delimiter::Curly),
            TokenKind::LeftSquare => Some(Delimiter::Square),
            _ => None,
        }
    }

    pub fn opening(&self) -> TokenKind {
        match self {
            Delimiter::Curly => TokenKind::LeftCurly,
            Delimiter::Square => TokenKind::LeftSquare,
        }
    }

    /// The structural opposite of the opening token.
    pub fn closing(&self) -> TokenKind {
        match self {
            Delimiter::Curly => TokenKind::RightCurly,
            Delimiter::Square => TokenKind::RightSquare,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Delimiter::Curly => "curly",
            Delimiter::Square => "square",
        }
    }

    pub fn pair(&self) -> &'static str {
        match self {
            Delimiter::Curly => "{}",
            Delimiter::Square => "[]",
        }
    }
}

/// A `{...}` or `[...]` group that is not a macro argument.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Enclosed {
    pub opening: Delimiter,
    pub children: Vec<Node>,
}

impl Enclosed {
    pub fn new(opening: Delimiter, children: Vec<Node>) -> Self {
        Self { opening, children }
    }

    pub fn closing(&self) -> TokenKind {
        self.opening.closing()
    }
}

impl AstNode for Enclosed {
    fn node_type(&self) -> &'static str {
        "Enclosed"
    }

    fn display_label(&self) -> String {
        self.opening.pair().to_string()
    }
}

impl Visitable for Enclosed {
    fn accept<V: Visitor + ?Sized>(&self, visitor: &mut V) -> V::Output {
        visitor.visit_enclosed(self)
    }
}

/// Whether an argument was written `{...}` or `[...]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ArgumentKind {
    Mandatory,
    Optional,
}

impl ArgumentKind {
    pub fn delimiter(&self) -> Delimiter {
        match self {
            ArgumentKind::Mandatory => Delimiter::Curly,
            ArgumentKind::Optional => Delimiter::Square,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            ArgumentKind::Mandatory => "mandatory",
            ArgumentKind::Optional => "optional",
        }
    }
}

impl From<Delimiter> for ArgumentKind {
    fn from(delimiter: Delimiter) -> Self {
        match delimiter {
            Delimiter::Curly => ArgumentKind::Mandatory,
            Delimiter::Square => ArgumentKind::Optional,
        }
    }
}

/// Argument of a macro or an environment
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Argument {
    pub kind: ArgumentKind,
    pub children: Vec<Node>,
}

impl Argument {
    pub fn new(kind: ArgumentKind, children: Vec<Node>) -> Self {
        Self { kind, children }
    }

    pub fn mandatory(children: Vec<Node>) -> Self {
        Self::new(ArgumentKind::Mandatory, children)
    }

    pub fn optional(children: Vec<Node>) -> Self {
        Self::new(ArgumentKind::Optional, children)
    }

    pub fn is_optional(&self) -> bool {
        self.kind == ArgumentKind::Optional
    }

    pub fn closing(&self) -> TokenKind {
        self.kind.delimiter().closing()
    }
}

impl From<Enclosed> for Argument {
    fn from(enclosed: Enclosed) -> Self {
        Self::new(enclosed.opening.into(), enclosed.children)
    }
}

impl AstNode for Argument {
    fn node_type(&self) -> &'static str {
        "Argument"
    }

    fn display_label(&self) -> String {
        self.kind.name().to_string()
    }
}

impl Visitable for Argument {
    fn accept<V: Visitor + ?Sized>(&self, visitor: &mut V) -> V::Output {
        visitor.visit_argument(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tex::ast::Text;

    #[test]
    fn test_closing_is_structural_opposite() {
        assert_eq!(Delimiter::Curly.closing(), TokenKind::RightCurly);
        assert_eq!(Delimiter::Square.closing(), TokenKind::RightSquare);
        assert_eq!(
            Delimiter::from_opening(TokenKind::LeftSquare),
            Some(Delimiter::Square)
        );
        assert_eq!(Delimiter::from_opening(TokenKind::RightSquare), None);
    }

    #[test]
    fn test_argument_from_enclosed() {
        let square = Enclosed::new(Delimiter::Square, vec![Text::new("x").into()]);
        let argument = Argument::from(square);
        assert!(argument.is_optional());
        assert_eq!(argument.closing(), TokenKind::RightSquare);
        assert_eq!(argument.children, vec![Node::Text(Text::new("x"))]);

        let curly = Argument::from(Enclosed::new(Delimiter::Curly, vec![]));
        assert!(!curly.is_optional());
    }
}
