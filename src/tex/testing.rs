//! Testing utilities for AST assertions
//!
//! Checking a parsed tree by hand means a `match` per level and a panic arm per variant. The
//! [assert_ast] entry point offers a fluent API instead: each assertion narrows to one variant
//! and exposes the checks that make sense for it, and children are reached through closures so
//! a whole hierarchy can be verified in one expression. Failure messages carry the path to the
//! offending node (`doc:children[1]:arguments[0]`).
//!
//! ```rust-example
//! use texcount::tex::parsing::parse;
//! use texcount::tex::testing::assert_ast;
//!
//! let doc = parse("a \\textbf{bold}")?;
//!
//! assert_ast(&doc)
//!     .child_count(2)
//!     .child(0, |node| {
//!         node.assert_text().text("a ");
//!     })
//!     .child(1, |node| {
//!         node.assert_macro()
//!             .name("textbf")
//!             .argument_count(1)
//!             .argument(0, |arg| {
//!                 arg.mandatory().child(0, |node| {
//!                     node.assert_text().text("bold");
//!                 });
//!             });
//!     });
//! ```

mod assertions;
mod matchers;

pub use assertions::{
    assert_ast, ArgumentAssertion, DocumentAssertion, EnclosedAssertion, EnvironmentAssertion,
    MacroAssertion, MathAssertion, NodeAssertion, ScriptAssertion, TextAssertion,
};
pub use matchers::TextMatch;
