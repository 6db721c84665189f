//! Element types for the TeX AST

pub mod document;
pub mod enclosed;
pub mod macros;
pub mod math;
pub mod node;
pub mod text;

pub use document::Document;
pub use enclosed::{Argument, ArgumentKind, Delimiter, Enclosed};
pub use macros::{Environment, EscapeSequence, Macro};
pub use math::{MathRegion, ScriptOperator, SubSuperScript};
pub use node::{Node, Separator};
pub use text::Text;
