//! AST definitions and utilities for TeX documents
//!
//! The tree is a closed set of node variants rooted at a [Document]. Ownership is strictly
//! tree shaped: every node belongs to exactly one parent and nothing is shared or mutated once
//! the parser has returned.
//!
//! ## Modules
//!
//! - `elements` - Node type definitions
//! - `traits` - The [Visitor] dispatch and the [AstNode] interface
//! - `snapshot` - Serializable structural description of a tree, and its inverse
//! - `error` - Error types for AST operations

pub mod elements;
pub mod error;
pub mod snapshot;
pub mod traits;

pub use elements::{
    Argument, ArgumentKind, Delimiter, Document, Enclosed, Environment, EscapeSequence, Macro,
    MathRegion, Node, ScriptOperator, Separator, SubSuperScript, Text,
};
pub use error::SnapshotError;
pub use snapshot::{snapshot_from_document, AstSnapshot, SnapshotBuilder};
pub use traits::{AstNode, Visitable, Visitor};
