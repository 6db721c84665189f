//! Control sequences: macros, environments and escape sequences
//!
//!     After a backslash the parser either reads a name (letters, digits, `*` and `@`) and
//!     produces a [Macro], or reads a single other character and produces an [EscapeSequence].
//!
//!     Environments are not a lexical construct. `\begin{name}` is ordinary macro syntax; a macro
//!     is promoted to the start of an [Environment] only when its shape matches, see
//!     [Macro::environment_name].

use super::enclosed::Argument;
use super::node::Node;
use crate::tex::ast::traits::{AstNode, Visitable, Visitor};

/// Marker opening an environment
pub const BEGIN: &str = "begin";
/// Marker closing an environment
pub const END: &str = "end";

/// Characters allowed in a macro name besides alphanumerics.
pub fn is_macro_name_char(c: char) -> bool {
    c.is_alphanumeric() || c == '*' || c == '@'
}

/// Macro, written `\name[optarg]{arg1}{arg2}`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Macro {
    pub name: String,
    pub arguments: Vec<Argument>,
}

impl Macro {
    pub fn new(name: impl Into<String>, arguments: Vec<Argument>) -> Self {
        Self {
            name: name.into(),
            arguments,
        }
    }

    /// Environment name carried by this macro when it has the shape of `\marker{name}`.
    ///
    /// The shape is: name equal to `marker`, exactly one argument, holding exactly one child,
    /// which is a text node. The returned name has surrounding whitespace trimmed.
    pub fn environment_name(&self, marker: &str) -> Option<&str> {
        if self.name != marker {
            return None;
        }
        match self.arguments.as_slice() {
            [argument] => match argument.children.as_slice() {
                [Node::Text(text)] => Some(text.text.trim()),
                _ => None,
            },
            _ => None,
        }
    }

    /// Whether this macro is the `\end{name}` matching the environment `name`
    pub fn closes_environment(&self, name: &str) -> bool {
        self.environment_name(END) == Some(name)
    }
}

impl AstNode for Macro {
    fn node_type(&self) -> &'static str {
        "Macro"
    }

    fn display_label(&self) -> String {
        self.name.clone()
    }
}

impl Visitable for Macro {
    fn accept<V: Visitor + ?Sized>(&self, visitor: &mut V) -> V::Output {
        visitor.visit_macro(self)
    }
}

/// Environment, written `\begin{name} ... \end{name}`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Environment {
    pub name: String,
    /// Arguments of the environment itself, the name argument excluded
    pub arguments: Vec<Argument>,
    pub children: Vec<Node>,
}

impl Environment {
    pub fn new(name: impl Into<String>, arguments: Vec<Argument>, children: Vec<Node>) -> Self {
        Self {
            name: name.into(),
            arguments,
            children,
        }
    }
}

impl AstNode for Environment {
    fn node_type(&self) -> &'static str {
        "Environment"
    }

    fn display_label(&self) -> String {
        self.name.clone()
    }
}

impl Visitable for Environment {
    fn accept<V: Visitor + ?Sized>(&self, visitor: &mut V) -> V::Output {
        visitor.visit_environment(self)
    }
}

/// One character escape of the form `\x`, where `x` is not a name character
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EscapeSequence {
    pub character: char,
}

impl EscapeSequence {
    pub fn new(character: char) -> Self {
        Self { character }
    }
}

impl AstNode for EscapeSequence {
    fn node_type(&self) -> &'static str {
        "EscapeSequence"
    }

    fn display_label(&self) -> String {
        self.character.to_string()
    }
}

impl Visitable for EscapeSequence {
    fn accept<V: Visitor + ?Sized>(&self, visitor: &mut V) -> V::Output {
        visitor.visit_escape_sequence(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tex::ast::{Delimiter, Enclosed, Text};

    fn begin(children: Vec<Node>) -> Macro {
        Macro::new(BEGIN, vec![Argument::mandatory(children)])
    }

    #[test]
    fn test_environment_shape() {
        let mac = begin(vec![Text::new(" itemize ").into()]);
        assert_eq!(mac.environment_name(BEGIN), Some("itemize"));
        assert_eq!(mac.environment_name(END), None);
    }

    #[test]
    fn test_environment_shape_rejections() {
        // two arguments
        let mac = Macro::new(
            BEGIN,
            vec![
                Argument::mandatory(vec![Text::new("tabular").into()]),
                Argument::mandatory(vec![Text::new("ll").into()]),
            ],
        );
        assert_eq!(mac.environment_name(BEGIN), None);

        // no argument
        assert_eq!(Macro::new(BEGIN, vec![]).environment_name(BEGIN), None);

        // argument child is not text
        let mac = begin(vec![Enclosed::new(Delimiter::Curly, vec![]).into()]);
        assert_eq!(mac.environment_name(BEGIN), None);

        // two children in the argument
        let mac = begin(vec![Text::new("a").into(), Text::new("b").into()]);
        assert_eq!(mac.environment_name(BEGIN), None);

        // wrong name
        let mac = Macro::new("start", vec![Argument::mandatory(vec![Text::new("x").into()])]);
        assert_eq!(mac.environment_name(BEGIN), None);
    }

    #[test]
    fn test_closes_environment() {
        let end = Macro::new(END, vec![Argument::mandatory(vec![Text::new("test").into()])]);
        assert!(end.closes_environment("test"));
        assert!(!end.closes_environment("other"));
    }

    #[test]
    fn test_macro_name_chars() {
        assert!(is_macro_name_char('a'));
        assert!(is_macro_name_char('2'));
        assert!(is_macro_name_char('*'));
        assert!(is_macro_name_char('@'));
        assert!(!is_macro_name_char('_'));
        assert!(!is_macro_name_char(' '));
    }
}
