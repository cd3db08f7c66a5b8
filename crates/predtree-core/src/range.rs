//! Module: range
//! Responsibility: decompose intervals into equivalent predicate nodes.
//! Does not own: value ordering or evaluation; bounds are carried verbatim.
//! Boundary: consumed by `Attribute::in_` / `Attribute::not_in`.
//!
//! Decomposition table (`a` is the attribute):
//!
//! | interval     | in_                            | not_in                       |
//! |--------------|--------------------------------|------------------------------|
//! | `[lo, hi)`   | `And(a >= lo, a < hi)`         | `Or(a < lo, a >= hi)`        |
//! | `[lo, hi]`   | `Between(a, BoundPair(lo, hi))` | `Or(a < lo, a > hi)`        |
//!
//! The exclusive upper bound is used as given, so no successor arithmetic
//! is needed and the decomposition is exact over any ordered domain.


use crate::{
    attribute::Attribute,
    error::{ExprError, UnsupportedOperandReason},
    node::{BoundPair, Node},
    obs::{self, BuildEvent},
    op::CompareOp,
    value::{FieldValue, Value},
};
use serde::{Deserialize, Serialize};
use std::ops::{Range, RangeInclusive};

///
/// RangeEnd
///

#[derive(Clone, Copy, Debug, Deserialize, Eq, Hash, PartialEq, Serialize)]
pub enum RangeEnd {
    Inclusive,
    Exclusive,
}

///
/// ValueRange
///
/// Interval `[start, end]` or `[start, end)` over literal values.
///

#[derive(Clone, Debug, Deserialize, Eq, Hash, PartialEq, Serialize)]
pub struct ValueRange {
    pub start: Value,
    pub end: Value,
    pub end_kind: RangeEnd,
}

impl ValueRange {
    #[must_use]
    pub fn inclusive(start: impl FieldValue, end: impl FieldValue) -> Self {
        Self {
            start: start.to_value(),
            end: end.to_value(),
            end_kind: RangeEnd::Inclusive,
        }
    }

    #[must_use]
    pub fn exclusive(start: impl FieldValue, end: impl FieldValue) -> Self {
        Self {
            start: start.to_value(),
            end: end.to_value(),
            end_kind: RangeEnd::Exclusive,
        }
    }

    #[must_use]
    pub const fn excludes_end(&self) -> bool {
        matches!(self.end_kind, RangeEnd::Exclusive)
    }

    /// Both bounds must be scalar literals of the same variant.
    fn check_bounds(&self, op: CompareOp) -> Result<(), ExprError> {
        for bound in [&self.start, &self.end] {
            if !bound.is_scalar() {
                return Err(ExprError::unsupported(
                    op,
                    UnsupportedOperandReason::RangeBoundNotScalar { bound: bound.tag() },
                ));
            }
        }

        let (start, end) = (self.start.tag(), self.end.tag());
        if start != end {
            return Err(ExprError::unsupported(
                op,
                UnsupportedOperandReason::RangeBoundKindMismatch { start, end },
            ));
        }

        Ok(())
    }
}

impl<V: FieldValue> From<Range<V>> for ValueRange {
    fn from(range: Range<V>) -> Self {
        Self::exclusive(range.start, range.end)
    }
}

impl<V: FieldValue> From<RangeInclusive<V>> for ValueRange {
    fn from(range: RangeInclusive<V>) -> Self {
        let (start, end) = range.into_inner();

        Self::inclusive(start, end)
    }
}

/// Interval membership: `attribute IN range`.
pub fn range_in(attribute: &Attribute, range: ValueRange) -> Result<Node, ExprError> {
    range.check_bounds(CompareOp::In)?;
    obs::record(BuildEvent::Range {
        op: CompareOp::In,
        end: range.end_kind,
    });

    let ValueRange {
        start,
        end,
        end_kind,
    } = range;

    let node = match end_kind {
        RangeEnd::Exclusive => {
            let low = CompareOp::Gteq.binary(attribute, start);
            let high = CompareOp::Lt.binary(attribute, end);

            low.and(high)
        }
        RangeEnd::Inclusive => Node::between(attribute, BoundPair::new(start, end)),
    };

    Ok(node)
}

/// Interval exclusion: `attribute NOT IN range`.
pub fn range_not_in(attribute: &Attribute, range: ValueRange) -> Result<Node, ExprError> {
    range.check_bounds(CompareOp::NotIn)?;
    obs::record(BuildEvent::Range {
        op: CompareOp::NotIn,
        end: range.end_kind,
    });

    let ValueRange {
        start,
        end,
        end_kind,
    } = range;

    let below = CompareOp::Lt.binary(attribute, start);
    let above = match end_kind {
        RangeEnd::Exclusive => CompareOp::Gteq.binary(attribute, end),
        RangeEnd::Inclusive => CompareOp::Gt.binary(attribute, end),
    };

    Ok(below.or(above))
}
