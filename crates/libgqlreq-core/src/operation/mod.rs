mod field;
#[allow(clippy::module_inception)]
mod operation;
mod operation_builder;
mod operation_kind;
mod parameter;
mod variable;

pub use field::Field;
pub use operation::Operation;
pub use operation_builder::OperationBuildError;
pub use operation_builder::OperationBuilder;
pub use operation_kind::OperationKind;
pub use parameter::Parameter;
pub use variable::Variable;

use crate::encoder::INDENT_UNIT;

/// Indent an already-rendered multi-line block by one unit, line by line.
pub(crate) fn indent_block(block: &str) -> String {
    block.lines()
        .map(|line| format!("{INDENT_UNIT}{line}"))
        .collect::<Vec<_>>()
        .join("\n")
}
