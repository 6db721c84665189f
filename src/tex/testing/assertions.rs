//! Fluent assertions over the TeX AST

use super::matchers::TextMatch;
use crate::tex::ast::{
    Argument, AstNode, Delimiter, Document, Enclosed, Environment, Macro, MathRegion, Node,
    ScriptOperator, SubSuperScript, Text,
};
use crate::tex::counting::count_text_words;

/// Start asserting on a parsed document
pub fn assert_ast(doc: &Document) -> DocumentAssertion<'_> {
    DocumentAssertion {
        doc,
        context: "doc".to_string(),
    }
}

fn summarize_nodes(nodes: &[Node]) -> String {
    nodes
        .iter()
        .map(|node| node.node_type())
        .collect::<Vec<_>>()
        .join(", ")
}

fn assert_child_count(nodes: &[Node], expected: usize, context: &str) {
    assert_eq!(
        nodes.len(),
        expected,
        "{}: Expected {} children, found {} children: [{}]",
        context,
        expected,
        nodes.len(),
        summarize_nodes(nodes)
    );
}

fn nth_child<'a>(nodes: &'a [Node], index: usize, context: &str) -> NodeAssertion<'a> {
    assert!(
        index < nodes.len(),
        "{}: Child index {} out of bounds ({} children: [{}])",
        context,
        index,
        nodes.len(),
        summarize_nodes(nodes)
    );
    NodeAssertion {
        node: &nodes[index],
        context: format!("{}:children[{}]", context, index),
    }
}

/// `child_count` and `child` for every assertion wrapping a node with children
macro_rules! children_assertions {
    ($assertion:ident, $field:ident) => {
        impl<'a> $assertion<'a> {
            /// Assert the number of children
            pub fn child_count(self, expected: usize) -> Self {
                assert_child_count(&self.$field.children, expected, &self.context);
                self
            }

            /// Assert on a specific child by index
            pub fn child<F>(self, index: usize, assertion: F) -> Self
            where
                F: FnOnce(NodeAssertion<'a>),
            {
                assertion(nth_child(&self.$field.children, index, &self.context));
                self
            }

            /// Assert the words counted in the children, with no macro or environment rules
            pub fn word_count(self, expected: usize) -> Self {
                let options = crate::tex::counting::CountOptions::default();
                let mut counter = crate::tex::counting::WordCounter::new(&options);
                let actual: usize = self
                    .$field
                    .children
                    .iter()
                    .map(|node| crate::tex::ast::Visitable::accept(node, &mut counter))
                    .sum();
                assert_eq!(
                    actual, expected,
                    "{}: Expected {} words, found {}",
                    self.context, expected, actual
                );
                self
            }
        }
    };
}

// ============================================================================
// Document Assertions
// ============================================================================

pub struct DocumentAssertion<'a> {
    doc: &'a Document,
    context: String,
}

children_assertions!(DocumentAssertion, doc);

impl<'a> DocumentAssertion<'a> {
    /// Assert the document has no children at all
    pub fn is_empty(self) -> Self {
        self.child_count(0)
    }
}

// ============================================================================
// Node Assertions
// ============================================================================

pub struct NodeAssertion<'a> {
    node: &'a Node,
    context: String,
}

impl<'a> NodeAssertion<'a> {
    fn unexpected(&self, expected: &str) -> ! {
        panic!(
            "{}: Expected {}, found {} ({:?})",
            self.context,
            expected,
            self.node.node_type(),
            self.node.display_label()
        )
    }

    /// Assert this node is a Text and return text-specific assertions
    pub fn assert_text(self) -> TextAssertion<'a> {
        match self.node {
            Node::Text(text) => TextAssertion {
                text,
                context: self.context,
            },
            _ => self.unexpected("Text"),
        }
    }

    /// Assert this node is a Macro and return macro-specific assertions
    pub fn assert_macro(self) -> MacroAssertion<'a> {
        match self.node {
            Node::Macro(mac) => MacroAssertion {
                mac,
                context: self.context,
            },
            _ => self.unexpected("Macro"),
        }
    }

    pub fn assert_environment(self) -> EnvironmentAssertion<'a> {
        match self.node {
            Node::Environment(environment) => EnvironmentAssertion {
                environment,
                context: self.context,
            },
            _ => self.unexpected("Environment"),
        }
    }

    pub fn assert_enclosed(self) -> EnclosedAssertion<'a> {
        match self.node {
            Node::Enclosed(enclosed) => EnclosedAssertion {
                enclosed,
                context: self.context,
            },
            _ => self.unexpected("Enclosed"),
        }
    }

    pub fn assert_math(self) -> MathAssertion<'a> {
        match self.node {
            Node::MathRegion(math) => MathAssertion {
                math,
                context: self.context,
            },
            _ => self.unexpected("MathRegion"),
        }
    }

    pub fn assert_script(self) -> ScriptAssertion<'a> {
        match self.node {
            Node::SubSuperScript(script) => ScriptAssertion {
                script,
                context: self.context,
            },
            _ => self.unexpected("SubSuperScript"),
        }
    }

    /// Assert this node is the escape sequence `\<expected>`
    pub fn assert_escape(self, expected: char) {
        match self.node {
            Node::EscapeSequence(escape) => assert_eq!(
                escape.character, expected,
                "{}: Expected escaped {:?}, found {:?}",
                self.context, expected, escape.character
            ),
            _ => self.unexpected("EscapeSequence"),
        }
    }

    pub fn assert_separator(self) {
        if !matches!(self.node, Node::Separator(_)) {
            self.unexpected("Separator");
        }
    }
}

// ============================================================================
// Text Assertions
// ============================================================================

pub struct TextAssertion<'a> {
    text: &'a Text,
    context: String,
}

impl<'a> TextAssertion<'a> {
    pub fn text(self, expected: &str) -> Self {
        TextMatch::Exact(expected.to_string()).assert(&self.text.text, &self.context);
        self
    }

    pub fn text_starts_with(self, prefix: &str) -> Self {
        TextMatch::StartsWith(prefix.to_string()).assert(&self.text.text, &self.context);
        self
    }

    pub fn text_contains(self, substring: &str) -> Self {
        TextMatch::Contains(substring.to_string()).assert(&self.text.text, &self.context);
        self
    }

    pub fn text_trimmed(self, expected: &str) -> Self {
        TextMatch::Trimmed(expected.to_string()).assert(&self.text.text, &self.context);
        self
    }

    pub fn word_count(self, expected: usize) -> Self {
        let actual = count_text_words(&self.text.text);
        assert_eq!(
            actual, expected,
            "{}: Expected {} words in {:?}, found {}",
            self.context, expected, self.text.text, actual
        );
        self
    }
}

// ============================================================================
// Macro and Argument Assertions
// ============================================================================

pub struct MacroAssertion<'a> {
    mac: &'a Macro,
    context: String,
}

impl<'a> MacroAssertion<'a> {
    pub fn name(self, expected: &str) -> Self {
        assert_eq!(
            self.mac.name, expected,
            "{}: Expected macro \\{}, found \\{}",
            self.context, expected, self.mac.name
        );
        self
    }

    pub fn argument_count(self, expected: usize) -> Self {
        assert_argument_count(&self.mac.arguments, expected, &self.context);
        self
    }

    pub fn argument<F>(self, index: usize, assertion: F) -> Self
    where
        F: FnOnce(ArgumentAssertion<'a>),
    {
        assertion(nth_argument(&self.mac.arguments, index, &self.context));
        self
    }
}

fn assert_argument_count(arguments: &[Argument], expected: usize, context: &str) {
    assert_eq!(
        arguments.len(),
        expected,
        "{}: Expected {} arguments, found {} arguments",
        context,
        expected,
        arguments.len()
    );
}

fn nth_argument<'a>(arguments: &'a [Argument], index: usize, context: &str) -> ArgumentAssertion<'a> {
    assert!(
        index < arguments.len(),
        "{}: Argument index {} out of bounds ({} arguments)",
        context,
        index,
        arguments.len()
    );
    ArgumentAssertion {
        argument: &arguments[index],
        context: format!("{}:arguments[{}]", context, index),
    }
}

pub struct ArgumentAssertion<'a> {
    argument: &'a Argument,
    context: String,
}

children_assertions!(ArgumentAssertion, argument);

impl<'a> ArgumentAssertion<'a> {
    /// Assert this is a `[...]` argument
    pub fn optional(self) -> Self {
        assert!(
            self.argument.is_optional(),
            "{}: Expected an optional argument, found a mandatory one",
            self.context
        );
        self
    }

    /// Assert this is a `{...}` argument
    pub fn mandatory(self) -> Self {
        assert!(
            !self.argument.is_optional(),
            "{}: Expected a mandatory argument, found an optional one",
            self.context
        );
        self
    }
}

// ============================================================================
// Environment Assertions
// ============================================================================

pub struct EnvironmentAssertion<'a> {
    environment: &'a Environment,
    context: String,
}

children_assertions!(EnvironmentAssertion, environment);

impl<'a> EnvironmentAssertion<'a> {
    pub fn name(self, expected: &str) -> Self {
        assert_eq!(
            self.environment.name, expected,
            "{}: Expected environment {:?}, found {:?}",
            self.context, expected, self.environment.name
        );
        self
    }

    pub fn argument_count(self, expected: usize) -> Self {
        assert_argument_count(&self.environment.arguments, expected, &self.context);
        self
    }
}

// ============================================================================
// Group, Math and Script Assertions
// ============================================================================

pub struct EnclosedAssertion<'a> {
    enclosed: &'a Enclosed,
    context: String,
}

children_assertions!(EnclosedAssertion, enclosed);

impl<'a> EnclosedAssertion<'a> {
    pub fn delimiter(self, expected: Delimiter) -> Self {
        assert_eq!(
            self.enclosed.opening,
            expected,
            "{}: Expected a {} group, found a {} group",
            self.context,
            expected.pair(),
            self.enclosed.opening.pair()
        );
        self
    }
}

pub struct MathAssertion<'a> {
    math: &'a MathRegion,
    context: String,
}

children_assertions!(MathAssertion, math);

impl<'a> MathAssertion<'a> {
    pub fn inline(self) -> Self {
        assert!(
            !self.math.display,
            "{}: Expected inline math, found display math",
            self.context
        );
        self
    }

    pub fn display(self) -> Self {
        assert!(
            self.math.display,
            "{}: Expected display math, found inline math",
            self.context
        );
        self
    }
}

pub struct ScriptAssertion<'a> {
    script: &'a SubSuperScript,
    context: String,
}

children_assertions!(ScriptAssertion, script);

impl<'a> ScriptAssertion<'a> {
    pub fn operator(self, expected: ScriptOperator) -> Self {
        assert_eq!(
            self.script.operator,
            expected,
            "{}: Expected {}, found {}",
            self.context,
            expected.name(),
            self.script.operator.name()
        );
        self
    }
}

// ============================================================================
// Tests for Assertions
// ============================================================================
