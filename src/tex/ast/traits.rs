//! AST traits - Common interfaces for uniform node access
//!
//! This module defines the [Visitor] dispatch used by every tree walk (word counting, snapshot
//! building, printing) and the [AstNode] interface for uniform labelling.

use super::elements::{
    Argument, Document, Enclosed, Environment, EscapeSequence, Macro, MathRegion, Separator,
    SubSuperScript, Text,
};

/// Visitor trait for traversing the AST
///
/// Each visit method corresponds to a node variant and returns the visitor's `Output`. None of
/// them has a default body: a visitor that forgets a variant does not compile. Visitors decide
/// themselves whether and how to descend into children, usually through [Visitable::accept].
///
/// # Example
///
/// ```ignore
/// struct TextCollector(String);
///
/// impl Visitor for TextCollector {
///     type Output = ();
///
///     fn visit_text(&mut self, text: &Text) {
///         self.0.push_str(&text.text);
///     }
///     // ...
/// }
///
/// document.accept(&mut collector);
/// ```
pub trait Visitor {
    type Output;

    fn visit_document(&mut self, document: &Document) -> Self::Output;
    fn visit_text(&mut self, text: &Text) -> Self::Output;
    fn visit_enclosed(&mut self, enclosed: &Enclosed) -> Self::Output;
    fn visit_argument(&mut self, argument: &Argument) -> Self::Output;
    fn visit_macro(&mut self, mac: &Macro) -> Self::Output;
    fn visit_environment(&mut self, environment: &Environment) -> Self::Output;
    fn visit_escape_sequence(&mut self, escape: &EscapeSequence) -> Self::Output;
    fn visit_separator(&mut self, separator: &Separator) -> Self::Output;
    fn visit_math_region(&mut self, math: &MathRegion) -> Self::Output;
    fn visit_script(&mut self, script: &SubSuperScript) -> Self::Output;
}

/// Double dispatch entry point: routes a node to the visitor method for its variant.
pub trait Visitable {
    fn accept<V: Visitor + ?Sized>(&self, visitor: &mut V) -> V::Output;
}

/// Common interface for all AST nodes
pub trait AstNode {
    fn node_type(&self) -> &'static str;
    fn display_label(&self) -> String;
}
