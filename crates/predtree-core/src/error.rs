use crate::{fold::FoldMode, op::CompareOp, value::ValueTag};
use thiserror::Error as ThisError;

///
/// ExprError
///
/// Construction-time failures. Every one is a caller contract error; no
/// partial tree is ever returned alongside it.
///

#[remain::sorted]
#[derive(Clone, Debug, Eq, PartialEq, ThisError)]
pub enum ExprError {
    #[error("{op}_{mode} requires at least one operand")]
    EmptyOperandList { op: CompareOp, mode: FoldMode },

    #[error("unsupported operand for {op}: {reason}")]
    UnsupportedOperand {
        op: CompareOp,
        reason: UnsupportedOperandReason,
    },
}

impl ExprError {
    pub(crate) const fn unsupported(op: CompareOp, reason: UnsupportedOperandReason) -> Self {
        Self::UnsupportedOperand { op, reason }
    }

    #[must_use]
    pub const fn op(&self) -> CompareOp {
        match self {
            Self::EmptyOperandList { op, .. } | Self::UnsupportedOperand { op, .. } => *op,
        }
    }
}

///
/// UnsupportedOperandReason
///

#[remain::sorted]
#[derive(Clone, Debug, Eq, PartialEq, ThisError)]
pub enum UnsupportedOperandReason {
    #[error("{operand} operands are only accepted by in/not_in")]
    NotComparable { operand: &'static str },

    #[error("range bounds differ in kind ({start} vs {end})")]
    RangeBoundKindMismatch { start: ValueTag, end: ValueTag },

    #[error("range bound must be a scalar literal, found {bound}")]
    RangeBoundNotScalar { bound: ValueTag },

    #[error("sub-query row {index} has no `id` field")]
    RowMissingId { index: usize },
}
