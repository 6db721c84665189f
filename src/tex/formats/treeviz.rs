//! Treeviz formatter for AST nodes
//!
//! Treeviz is a visual representation of the AST, one line per node, which makes a tree quick
//! to scan. Nesting is drawn with tree connectors.
//!
//! So the format is :
//! <prefix>(per level) <connector> <icon><space><label> (truncated to 30 characters)
//!
//! Example:
//!
//! ⧉ 3 node(s)
//! ├─ ◦ Some
//! ├─ λ emph
//! │ └─ ⟨⟩ mandatory
//! │   └─ ◦ prose
//! └─ ∑ $
//!   └─ ◦ x
//!
//! Newlines inside labels are shown as `↵`.
//!
//! Icons
//!     Document: ⧉
//!     Text: ◦
//!     Macro: λ
//!     Argument: ⟨⟩
//!     Environment: ≡
//!     Enclosed: ▢
//!     EscapeSequence: ⧵
//!     Separator: &
//!     MathRegion: ∑
//!     SubSuperScript: ⇅

use crate::tex::ast::{snapshot_from_document, AstSnapshot, Document};

const LABEL_WIDTH: usize = 30;

fn truncate(s: &str, max_chars: usize) -> String {
    if s.chars().count() > max_chars {
        let mut truncated = s.chars().take(max_chars).collect::<String>();
        truncated.push_str("...");
        truncated
    } else {
        s.to_string()
    }
}

fn label(snapshot: &AstSnapshot) -> String {
    truncate(&snapshot.label.replace('\n', "↵"), LABEL_WIDTH)
}

/// Get the icon for a node type
fn get_icon(node_type: &str) -> &'static str {
    match node_type {
        "Document" => "⧉",
        "Text" => "◦",
        "Macro" => "λ",
        "Argument" => "⟨⟩",
        "Environment" => "≡",
        "Enclosed" => "▢",
        "EscapeSequence" => "⧵",
        "Separator" => "&",
        "MathRegion" => "∑",
        "SubSuperScript" => "⇅",
        _ => "○",
    }
}

fn format_snapshot(
    snapshot: &AstSnapshot,
    prefix: &str,
    is_last: bool,
    output: &mut String,
) {
    let connector = if is_last { "└─" } else { "├─" };
    output.push_str(&format!(
        "{}{} {} {}\n",
        prefix,
        connector,
        get_icon(&snapshot.node_type),
        label(snapshot)
    ));

    let child_prefix = format!("{}{}", prefix, if is_last { "  " } else { "│ " });
    format_children(&snapshot.children, &child_prefix, output);
}

fn format_children(children: &[AstSnapshot], prefix: &str, output: &mut String) {
    let child_count = children.len();
    for (i, child) in children.iter().enumerate() {
        format_snapshot(child, prefix, i + 1 == child_count, output);
    }
}

/// Render a snapshot rooted at a document
pub fn snapshot_to_treeviz(snapshot: &AstSnapshot) -> String {
    let mut output = format!("{} {}\n", get_icon(&snapshot.node_type), label(snapshot));
    format_children(&snapshot.children, "", &mut output);
    output
}

pub fn to_treeviz_str(doc: &Document) -> String {
    snapshot_to_treeviz(&snapshot_from_document(doc))
}
