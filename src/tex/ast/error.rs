//! Error types for AST operations

use thiserror::Error;

/// Errors raised while rebuilding a tree from an [AstSnapshot](super::AstSnapshot)
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SnapshotError {
    /// The snapshot names a node type that does not exist
    #[error("unknown node type `{0}`")]
    UnknownNodeType(String),

    /// A known node type appeared where another one was required
    #[error("expected a {expected} node, found {found}")]
    UnexpectedNodeType { expected: String, found: String },

    /// A required attribute is absent
    #[error("{node_type} node is missing the `{attribute}` attribute")]
    MissingAttribute {
        node_type: String,
        attribute: String,
    },

    /// An attribute or label holds a value the node cannot take
    #[error("{node_type} node has an invalid {attribute}: `{value}`")]
    InvalidValue {
        node_type: String,
        attribute: String,
        value: String,
    },
}
