//! Word counting
//!
//!     Folds a parsed [Document] into the number of prose words it contains. What counts as
//!     prose is decided per node variant:
//!
//!         text            whitespace separated words
//!         macro           its arguments, only for include-argument macros; plus one word for
//!                         macro-as-word macros (both apply when both hold)
//!         environment     its body, unless the environment is excluded; never its arguments
//!         inline math     its children
//!         display math    nothing
//!         escape, `&`     nothing
//!         groups, scripts their children
//!
//!     The counter is a pure function of the tree and the [CountOptions]: it never fails and
//!     never mutates the tree. The options start empty; the usual LaTeX defaults are provided
//!     by the configuration layer.

use crate::tex::ast::{
    Argument, Document, Enclosed, Environment, EscapeSequence, Macro, MathRegion, Node,
    Separator, SubSuperScript, Text, Visitable, Visitor,
};
use crate::tex::parsing::{parse, SyntaxError};
use std::collections::HashSet;

/// The three name sets that steer the counter
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CountOptions {
    pub exclude_environments: HashSet<String>,
    pub include_macro_arguments: HashSet<String>,
    pub macro_as_word: HashSet<String>,
}

impl CountOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Do not count the body of environment `name`
    pub fn exclude_environment(mut self, name: impl Into<String>) -> Self {
        self.exclude_environments.insert(name.into());
        self
    }

    pub fn exclude_environments<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.exclude_environments
            .extend(names.into_iter().map(Into::into));
        self
    }

    /// Count the arguments of macro `name` as prose
    pub fn include_macro_arguments(mut self, name: impl Into<String>) -> Self {
        self.include_macro_arguments.insert(name.into());
        self
    }

    pub fn include_arguments_of<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.include_macro_arguments
            .extend(names.into_iter().map(Into::into));
        self
    }

    /// Count macro `name` itself as one word
    pub fn macro_as_word(mut self, name: impl Into<String>) -> Self {
        self.macro_as_word.insert(name.into());
        self
    }

    pub fn macros_as_words<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.macro_as_word.extend(names.into_iter().map(Into::into));
        self
    }

    pub fn is_excluded_environment(&self, name: &str) -> bool {
        self.exclude_environments.contains(name)
    }

    pub fn counts_arguments_of(&self, name: &str) -> bool {
        self.include_macro_arguments.contains(name)
    }

    pub fn counts_as_word(&self, name: &str) -> bool {
        self.macro_as_word.contains(name)
    }
}

/// Visitor computing the word count of a tree
pub struct WordCounter<'a> {
    options: &'a CountOptions,
}

impl<'a> WordCounter<'a> {
    pub fn new(options: &'a CountOptions) -> Self {
        Self { options }
    }

    fn sum(&mut self, nodes: &[Node]) -> usize {
        nodes.iter().map(|node| node.accept(self)).sum()
    }
}

impl Visitor for WordCounter<'_> {
    type Output = usize;

    fn visit_document(&mut self, document: &Document) -> usize {
        self.sum(&document.children)
    }

    fn visit_text(&mut self, text: &Text) -> usize {
        count_text_words(&text.text)
    }

    fn visit_enclosed(&mut self, enclosed: &Enclosed) -> usize {
        self.sum(&enclosed.children)
    }

    fn visit_argument(&mut self, argument: &Argument) -> usize {
        self.sum(&argument.children)
    }

    fn visit_macro(&mut self, mac: &Macro) -> usize {
        let mut words = 0;
        if self.options.counts_arguments_of(&mac.name) {
            words += mac
                .arguments
                .iter()
                .map(|argument| argument.accept(self))
                .sum::<usize>();
        }
        if self.options.counts_as_word(&mac.name) {
            words += 1;
        }
        words
    }

    fn visit_environment(&mut self, environment: &Environment) -> usize {
        if self.options.is_excluded_environment(&environment.name) {
            return 0;
        }
        self.sum(&environment.children)
    }

    fn visit_escape_sequence(&mut self, _escape: &EscapeSequence) -> usize {
        0
    }

    fn visit_separator(&mut self, _separator: &Separator) -> usize {
        0
    }

    fn visit_math_region(&mut self, math: &MathRegion) -> usize {
        if math.display {
            return 0;
        }
        self.sum(&math.children)
    }

    fn visit_script(&mut self, script: &SubSuperScript) -> usize {
        self.sum(&script.children)
    }
}

/// Count the whitespace separated words of a text literal.
///
/// Two-state scan: the state starts as "in a word" when the first character is whitespace,
/// whitespace leaves a word, and each non-whitespace character met outside a word starts a new
/// word.
pub fn count_text_words(text: &str) -> usize {
    let mut chars = text.chars().peekable();
    let mut in_word = match chars.peek() {
        Some(first) => first.is_whitespace(),
        None => return 0,
    };

    let mut words = 0;
    for c in chars {
        if c.is_whitespace() && in_word {
            in_word = false;
        }
        if !c.is_whitespace() && !in_word {
            in_word = true;
            words += 1;
        }
    }
    words
}

/// Count the words of a parsed document
pub fn count_words(document: &Document, options: &CountOptions) -> usize {
    let words = document.accept(&mut WordCounter::new(options));
    tracing::debug!(nodes = document.children.len(), words, "counted words");
    words
}

/// Parse `source` and count its words
pub fn count_source(source: &str, options: &CountOptions) -> Result<usize, SyntaxError> {
    tracing::debug!(bytes = source.len(), "counting source");
    let document = parse(source)?;
    Ok(count_words(&document, options))
}
