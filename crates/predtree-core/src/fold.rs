//! Module: fold
//! Responsibility: the any/all combinator over one base operator.
//! Does not own: per-operand node construction (delegated to `CompareOp::apply`).
//! Boundary: backs every `<op>_any` / `<op>_all` method on `Attribute`.


use crate::{
    attribute::Attribute,
    error::ExprError,
    node::Node,
    obs::{self, BuildEvent},
    op::CompareOp,
    operand::InOperand,
};
use serde::{Deserialize, Serialize};

///
/// FoldMode
///

#[derive(Clone, Copy, Debug, Deserialize, Eq, Hash, PartialEq, Serialize)]
pub enum FoldMode {
    /// Disjunction: at least one operand matches.
    Any,
    /// Conjunction: every operand matches.
    All,
}

impl FoldMode {
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Any => "any",
            Self::All => "all",
        }
    }

    /// Join the running result with the next operand's node.
    #[must_use]
    pub fn combine(self, acc: Node, next: Node) -> Node {
        match self {
            Self::Any => acc.or(next),
            Self::All => acc.and(next),
        }
    }
}

impl std::fmt::Display for FoldMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Fold `op` over `operands` left to right and wrap the result in a
/// grouping marker.
///
/// `[x1, x2, x3]` becomes `Grouping(((op x1) ⊕ (op x2)) ⊕ (op x3))` where
/// `⊕` is `Or` for `Any` and `And` for `All`. Operand order is preserved and
/// the tree leans left. The caller's collection is only iterated.
pub fn fold<'a, I>(
    attribute: &Attribute,
    op: CompareOp,
    mode: FoldMode,
    operands: I,
) -> Result<Node, ExprError>
where
    I: IntoIterator<Item = InOperand<'a>>,
{
    let mut operands = operands.into_iter();
    let first = operands
        .next()
        .ok_or(ExprError::EmptyOperandList { op, mode })?;
    let seed = op.apply(attribute, first)?;

    let (folded, count) = operands.try_fold((seed, 1usize), |(acc, count), next| {
        let rhs = op.apply(attribute, next)?;

        Ok::<_, ExprError>((mode.combine(acc, rhs), count + 1))
    })?;

    obs::record(BuildEvent::Fold {
        op,
        mode,
        operands: count,
    });

    Ok(folded.grouping())
}
