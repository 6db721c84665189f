//! AST Snapshot - a normalized intermediate representation of the AST tree
//!
//! This module provides a canonical, format-agnostic representation of the AST suitable for
//! serialization to any output format (JSON, YAML, treeviz).
//!
//! The snapshot captures the complete tree structure with node types, labels, attributes, and
//! children, allowing each serializer to focus solely on presentation without reimplementing
//! traversal logic.
//!
//! ## Layout
//!
//! - `node_type` is the variant name (`Text`, `Macro`, `Environment`, ...)
//! - `label` carries the variant's literal: text content, macro/environment name, escaped char
//! - `attributes` carry the flags: `opening` for groups, `optional` for arguments, `display`
//!   for math regions and `operator` for scripts
//! - macro arguments are the children of a macro; an environment lists its arguments first,
//!   then its body
//!
//! The snapshot is lossless, so a tree can be rebuilt from it with `Document::try_from`.

use super::elements::{
    Argument, ArgumentKind, Delimiter, Document, Enclosed, Environment, EscapeSequence, Macro,
    MathRegion, Node, ScriptOperator, Separator, SubSuperScript, Text,
};
use super::error::SnapshotError;
use super::traits::{AstNode, Visitable, Visitor};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

const ATTR_OPENING: &str = "opening";
const ATTR_OPTIONAL: &str = "optional";
const ATTR_DISPLAY: &str = "display";
const ATTR_OPERATOR: &str = "operator";

/// A snapshot of an AST node in a normalized, serializable form
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AstSnapshot {
    /// The type of node (e.g., "Text", "Macro", "Environment")
    pub node_type: String,

    /// The primary label or text content of the node
    pub label: String,

    /// Additional attributes specific to the node type
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub attributes: BTreeMap<String, String>,

    /// Child nodes in the tree
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<AstSnapshot>,
}

impl AstSnapshot {
    /// Create a new snapshot with the given node type and label
    pub fn new(node_type: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            node_type: node_type.into(),
            label: label.into(),
            attributes: BTreeMap::new(),
            children: Vec::new(),
        }
    }

    /// Start a snapshot from any node's type and label
    pub fn of<T: AstNode + ?Sized>(node: &T) -> Self {
        Self::new(node.node_type(), node.display_label())
    }

    /// Add an attribute to this snapshot
    pub fn with_attribute(mut self, key: &str, value: impl Into<String>) -> Self {
        self.attributes.insert(key.to_string(), value.into());
        self
    }

    /// Add multiple children
    pub fn with_children(mut self, children: Vec<AstSnapshot>) -> Self {
        self.children.extend(children);
        self
    }

    fn attribute(&self, key: &str) -> Result<&str, SnapshotError> {
        self.attributes
            .get(key)
            .map(String::as_str)
            .ok_or_else(|| SnapshotError::MissingAttribute {
                node_type: self.node_type.clone(),
                attribute: key.to_string(),
            })
    }

    fn invalid(&self, attribute: &str, value: &str) -> SnapshotError {
        SnapshotError::InvalidValue {
            node_type: self.node_type.clone(),
            attribute: attribute.to_string(),
            value: value.to_string(),
        }
    }

    fn flag(&self, key: &str) -> Result<bool, SnapshotError> {
        match self.attribute(key)? {
            "true" => Ok(true),
            "false" => Ok(false),
            other => Err(self.invalid(key, other)),
        }
    }

    fn expect_type(&self, expected: &str) -> Result<(), SnapshotError> {
        if self.node_type == expected {
            Ok(())
        } else {
            Err(SnapshotError::UnexpectedNodeType {
                expected: expected.to_string(),
                found: self.node_type.clone(),
            })
        }
    }
}

// ============================================================================
// Snapshot Building
// ============================================================================

/// Visitor producing the snapshot of a subtree
#[derive(Debug, Default)]
pub struct SnapshotBuilder;

impl SnapshotBuilder {
    fn nodes(&mut self, nodes: &[Node]) -> Vec<AstSnapshot> {
        nodes.iter().map(|node| node.accept(self)).collect()
    }

    fn arguments(&mut self, arguments: &[Argument]) -> Vec<AstSnapshot> {
        arguments
            .iter()
            .map(|argument| argument.accept(self))
            .collect()
    }
}

impl Visitor for SnapshotBuilder {
    type Output = AstSnapshot;

    fn visit_document(&mut self, document: &Document) -> AstSnapshot {
        AstSnapshot::of(document).with_children(self.nodes(&document.children))
    }

    fn visit_text(&mut self, text: &Text) -> AstSnapshot {
        AstSnapshot::of(text)
    }

    fn visit_enclosed(&mut self, enclosed: &Enclosed) -> AstSnapshot {
        AstSnapshot::of(enclosed)
            .with_attribute(ATTR_OPENING, enclosed.opening.name())
            .with_children(self.nodes(&enclosed.children))
    }

    fn visit_argument(&mut self, argument: &Argument) -> AstSnapshot {
        AstSnapshot::of(argument)
            .with_attribute(ATTR_OPTIONAL, argument.is_optional().to_string())
            .with_children(self.nodes(&argument.children))
    }

    fn visit_macro(&mut self, mac: &Macro) -> AstSnapshot {
        AstSnapshot::of(mac).with_children(self.arguments(&mac.arguments))
    }

    fn visit_environment(&mut self, environment: &Environment) -> AstSnapshot {
        AstSnapshot::of(environment)
            .with_children(self.arguments(&environment.arguments))
            .with_children(self.nodes(&environment.children))
    }

    fn visit_escape_sequence(&mut self, escape: &EscapeSequence) -> AstSnapshot {
        AstSnapshot::of(escape)
    }

    fn visit_separator(&mut self, separator: &Separator) -> AstSnapshot {
        AstSnapshot::of(separator)
    }

    fn visit_math_region(&mut self, math: &MathRegion) -> AstSnapshot {
        AstSnapshot::of(math)
            .with_attribute(ATTR_DISPLAY, math.display.to_string())
            .with_children(self.nodes(&math.children))
    }

    fn visit_script(&mut self, script: &SubSuperScript) -> AstSnapshot {
        AstSnapshot::of(script)
            .with_attribute(ATTR_OPERATOR, script.operator.name())
            .with_children(self.nodes(&script.children))
    }
}

/// Build a snapshot for the document root
pub fn snapshot_from_document(document: &Document) -> AstSnapshot {
    document.accept(&mut SnapshotBuilder)
}

/// Build a snapshot for a single node and its descendants
pub fn snapshot_from_node(node: &Node) -> AstSnapshot {
    node.accept(&mut SnapshotBuilder)
}

// ============================================================================
// Tree Rebuilding
// ============================================================================

impl TryFrom<&AstSnapshot> for Document {
    type Error = SnapshotError;

    fn try_from(snapshot: &AstSnapshot) -> Result<Self, Self::Error> {
        snapshot.expect_type("Document")?;
        Ok(Document::new(nodes_from_snapshots(&snapshot.children)?))
    }
}

impl TryFrom<&AstSnapshot> for Argument {
    type Error = SnapshotError;

    fn try_from(snapshot: &AstSnapshot) -> Result<Self, Self::Error> {
        snapshot.expect_type("Argument")?;
        let kind = if snapshot.flag(ATTR_OPTIONAL)? {
            ArgumentKind::Optional
        } else {
            ArgumentKind::Mandatory
        };
        Ok(Argument::new(kind, nodes_from_snapshots(&snapshot.children)?))
    }
}

impl TryFrom<&AstSnapshot> for Node {
    type Error = SnapshotError;

    fn try_from(snapshot: &AstSnapshot) -> Result<Self, Self::Error> {
        let node: Node = match snapshot.node_type.as_str() {
            "Text" => Text::new(snapshot.label.as_str()).into(),
            "Enclosed" => {
                let opening = match snapshot.attribute(ATTR_OPENING)? {
                    "curly" => Delimiter::Curly,
                    "square" => Delimiter::Square,
                    other => return Err(snapshot.invalid(ATTR_OPENING, other)),
                };
                Enclosed::new(opening, nodes_from_snapshots(&snapshot.children)?).into()
            }
            "Macro" => Macro::new(
                snapshot.label.as_str(),
                arguments_from_snapshots(&snapshot.children)?,
            )
            .into(),
            "Environment" => {
                let (arguments, body): (Vec<&AstSnapshot>, Vec<&AstSnapshot>) = snapshot
                    .children
                    .iter()
                    .partition(|child| child.node_type == "Argument");
                Environment::new(
                    snapshot.label.as_str(),
                    arguments_from_snapshots(arguments)?,
                    nodes_from_snapshots(body)?,
                )
                .into()
            }
            "EscapeSequence" => {
                let mut chars = snapshot.label.chars();
                match (chars.next(), chars.next()) {
                    (Some(character), None) => EscapeSequence::new(character).into(),
                    _ => return Err(snapshot.invalid("label", &snapshot.label)),
                }
            }
            "Separator" => Separator.into(),
            "MathRegion" => MathRegion {
                display: snapshot.flag(ATTR_DISPLAY)?,
                children: nodes_from_snapshots(&snapshot.children)?,
            }
            .into(),
            "SubSuperScript" => {
                let operator = match snapshot.attribute(ATTR_OPERATOR)? {
                    "subscript" => ScriptOperator::Subscript,
                    "superscript" => ScriptOperator::Superscript,
                    other => return Err(snapshot.invalid(ATTR_OPERATOR, other)),
                };
                SubSuperScript::new(operator, nodes_from_snapshots(&snapshot.children)?).into()
            }
            "Document" | "Argument" => {
                return Err(SnapshotError::UnexpectedNodeType {
                    expected: "child".to_string(),
                    found: snapshot.node_type.clone(),
                })
            }
            other => return Err(SnapshotError::UnknownNodeType(other.to_string())),
        };
        Ok(node)
    }
}

fn nodes_from_snapshots<'a>(
    snapshots: impl IntoIterator<Item = &'a AstSnapshot>,
) -> Result<Vec<Node>, SnapshotError> {
    snapshots.into_iter().map(Node::try_from).collect()
}

fn arguments_from_snapshots<'a>(
    snapshots: impl IntoIterator<Item = &'a AstSnapshot>,
) -> Result<Vec<Argument>, SnapshotError> {
    snapshots.into_iter().map(Argument::try_from).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Document {
        Document::new(vec![
            Text::new("a ").into(),
            Macro::new(
                "section",
                vec![
                    Argument::optional(vec![Text::new("short").into()]),
                    Argument::mandatory(vec![Text::new("Long title").into()]),
                ],
            )
            .into(),
            Environment::new(
                "itemize",
                vec![Argument::optional(vec![Text::new("x").into()])],
                vec![
                    EscapeSequence::new('%').into(),
                    Separator.into(),
                    MathRegion::inline(vec![
                        Text::new("x").into(),
                        SubSuperScript::new(ScriptOperator::Superscript, vec![Text::new("2").into()])
                            .into(),
                    ])
                    .into(),
                    Enclosed::new(Delimiter::Square, vec![]).into(),
                ],
            )
            .into(),
        ])
    }

    #[test]
    fn test_snapshot_structure() {
        let snapshot = snapshot_from_document(&sample());
        assert_eq!(snapshot.node_type, "Document");
        assert_eq!(snapshot.children.len(), 3);

        let section = &snapshot.children[1];
        assert_eq!(section.node_type, "Macro");
        assert_eq!(section.label, "section");
        assert_eq!(section.children.len(), 2);
        assert_eq!(section.children[0].attributes["optional"], "true");
        assert_eq!(section.children[1].attributes["optional"], "false");

        let environment = &snapshot.children[2];
        assert_eq!(environment.children[0].node_type, "Argument");
        assert_eq!(environment.children[3].attributes["display"], "false");
    }

    #[test]
    fn test_rebuild_is_lossless() {
        let document = sample();
        let snapshot = snapshot_from_document(&document);
        let rebuilt = Document::try_from(&snapshot).expect("snapshot to rebuild");
        assert_eq!(rebuilt, document);
    }

    #[test]
    fn test_json_round_trip() {
        let snapshot = snapshot_from_document(&sample());
        let json = serde_json::to_string(&snapshot).expect("snapshot to serialize");
        let parsed: AstSnapshot = serde_json::from_str(&json).expect("snapshot to deserialize");
        assert_eq!(parsed, snapshot);
    }

    #[test]
    fn test_rebuild_errors() {
        let unknown = AstSnapshot::new("Paragraph", "");
        assert_eq!(
            Node::try_from(&unknown),
            Err(SnapshotError::UnknownNodeType("Paragraph".to_string()))
        );

        let missing = AstSnapshot::new("MathRegion", "$");
        assert!(matches!(
            Node::try_from(&missing),
            Err(SnapshotError::MissingAttribute { .. })
        ));

        let invalid = AstSnapshot::new("Enclosed", "()").with_attribute("opening", "round");
        assert!(matches!(
            Node::try_from(&invalid),
            Err(SnapshotError::InvalidValue { .. })
        ));

        let long_escape = AstSnapshot::new("EscapeSequence", "ab");
        assert!(Node::try_from(&long_escape).is_err());

        let root = AstSnapshot::new("Text", "x");
        assert!(matches!(
            Document::try_from(&root),
            Err(SnapshotError::UnexpectedNodeType { .. })
        ));
    }
}
