use crate::{
    attribute::Attribute,
    error::ExprError,
    fold::{FoldMode, fold},
    node::{Direction, Node, Operand},
    obs::{self, BuildEvent},
    op::CompareOp,
    operand::InOperand,
    range::{range_in, range_not_in},
    subquery::materialize_ids,
};

// Generates `<op>_any` / `<op>_all` for operators whose operands are plain
// comparison operands.
macro_rules! grouped_compare {
    ( $( $op:ident => $any:ident, $all:ident; )* ) => {
        $(
            #[doc = concat!("`", stringify!($op), "` against each operand, OR-joined and grouped.")]
            pub fn $any<I>(&self, others: I) -> Result<Node, ExprError>
            where
                I: IntoIterator,
                I::Item: Into<Operand>,
            {
                self.grouped(CompareOp::$op, FoldMode::Any, others)
            }

            #[doc = concat!("`", stringify!($op), "` against each operand, AND-joined and grouped.")]
            pub fn $all<I>(&self, others: I) -> Result<Node, ExprError>
            where
                I: IntoIterator,
                I::Item: Into<Operand>,
            {
                self.grouped(CompareOp::$op, FoldMode::All, others)
            }
        )*
    };
}

impl Attribute {
    // ------------------------------------------------------------------
    // Comparison predicates
    // ------------------------------------------------------------------

    /// `self = right`
    #[must_use]
    pub fn eq(&self, right: impl Into<Operand>) -> Node {
        self.compare(CompareOp::Eq, right)
    }

    /// `self <> right`
    #[must_use]
    pub fn not_eq(&self, right: impl Into<Operand>) -> Node {
        self.compare(CompareOp::NotEq, right)
    }

    /// `self > right`
    #[must_use]
    pub fn gt(&self, right: impl Into<Operand>) -> Node {
        self.compare(CompareOp::Gt, right)
    }

    /// `self >= right`
    #[must_use]
    pub fn gteq(&self, right: impl Into<Operand>) -> Node {
        self.compare(CompareOp::Gteq, right)
    }

    /// `self < right`
    #[must_use]
    pub fn lt(&self, right: impl Into<Operand>) -> Node {
        self.compare(CompareOp::Lt, right)
    }

    /// `self <= right`
    #[must_use]
    pub fn lteq(&self, right: impl Into<Operand>) -> Node {
        self.compare(CompareOp::Lteq, right)
    }

    /// Pattern match (`LIKE`-style); the pattern is carried verbatim.
    #[must_use]
    pub fn matches(&self, right: impl Into<Operand>) -> Node {
        self.compare(CompareOp::Matches, right)
    }

    /// Negated pattern match.
    #[must_use]
    pub fn does_not_match(&self, right: impl Into<Operand>) -> Node {
        self.compare(CompareOp::DoesNotMatch, right)
    }

    // ------------------------------------------------------------------
    // Containment predicates
    // ------------------------------------------------------------------

    /// Membership test.
    ///
    /// - sub-query: `In(self, [row.id, ...])`, materialized now
    /// - `lo..hi`: `And(self >= lo, self < hi)`
    /// - `lo..=hi`: `Between(self, BoundPair(lo, hi))`
    /// - anything else: `In(self, right)` unchanged
    pub fn in_<'a>(&self, right: impl Into<InOperand<'a>>) -> Result<Node, ExprError> {
        match right.into() {
            InOperand::SubQuery(query) => {
                let ids = materialize_ids(CompareOp::In, query)?;

                Ok(self.compare(CompareOp::In, ids))
            }
            InOperand::Range(range) => range_in(self, range),
            InOperand::Operand(right) => Ok(self.compare(CompareOp::In, right)),
        }
    }

    /// Exclusion test; the complement of [`Attribute::in_`].
    ///
    /// - sub-query: `NotIn(self, [row.id, ...])`
    /// - `lo..hi`: `Or(self < lo, self >= hi)`
    /// - `lo..=hi`: `Or(self < lo, self > hi)`
    /// - anything else: `NotIn(self, right)` unchanged
    pub fn not_in<'a>(&self, right: impl Into<InOperand<'a>>) -> Result<Node, ExprError> {
        match right.into() {
            InOperand::SubQuery(query) => {
                let ids = materialize_ids(CompareOp::NotIn, query)?;

                Ok(self.compare(CompareOp::NotIn, ids))
            }
            InOperand::Range(range) => range_not_in(self, range),
            InOperand::Operand(right) => Ok(self.compare(CompareOp::NotIn, right)),
        }
    }

    // ------------------------------------------------------------------
    // Ordering
    // ------------------------------------------------------------------

    /// Ascending sort key on this column.
    #[must_use]
    pub fn asc(&self) -> Node {
        self.order(Direction::Asc)
    }

    /// Descending sort key on this column.
    #[must_use]
    pub fn desc(&self) -> Node {
        self.order(Direction::Desc)
    }

    // ------------------------------------------------------------------
    // Grouped (any / all) predicates
    // ------------------------------------------------------------------

    grouped_compare! {
        Eq => eq_any, eq_all;
        NotEq => not_eq_any, not_eq_all;
        Gt => gt_any, gt_all;
        Gteq => gteq_any, gteq_all;
        Lt => lt_any, lt_all;
        Lteq => lteq_any, lteq_all;
        Matches => matches_any, matches_all;
        DoesNotMatch => does_not_match_any, does_not_match_all;
    }

    /// Membership in at least one operand, OR-joined and grouped.
    ///
    /// Each element may itself be a list, interval, or sub-query.
    pub fn in_any<'a, I>(&self, others: I) -> Result<Node, ExprError>
    where
        I: IntoIterator,
        I::Item: Into<InOperand<'a>>,
    {
        fold(
            self,
            CompareOp::In,
            FoldMode::Any,
            others.into_iter().map(Into::into),
        )
    }

    /// Membership in every operand, AND-joined and grouped.
    pub fn in_all<'a, I>(&self, others: I) -> Result<Node, ExprError>
    where
        I: IntoIterator,
        I::Item: Into<InOperand<'a>>,
    {
        fold(
            self,
            CompareOp::In,
            FoldMode::All,
            others.into_iter().map(Into::into),
        )
    }

    /// Exclusion from at least one operand, OR-joined and grouped.
    pub fn not_in_any<'a, I>(&self, others: I) -> Result<Node, ExprError>
    where
        I: IntoIterator,
        I::Item: Into<InOperand<'a>>,
    {
        fold(
            self,
            CompareOp::NotIn,
            FoldMode::Any,
            others.into_iter().map(Into::into),
        )
    }

    /// Exclusion from every operand, AND-joined and grouped.
    pub fn not_in_all<'a, I>(&self, others: I) -> Result<Node, ExprError>
    where
        I: IntoIterator,
        I::Item: Into<InOperand<'a>>,
    {
        fold(
            self,
            CompareOp::NotIn,
            FoldMode::All,
            others.into_iter().map(Into::into),
        )
    }

    // ----------------------------------------------------------------------
    // Internal helpers (not public API)
    // ----------------------------------------------------------------------

    pub(crate) fn compare(&self, op: CompareOp, right: impl Into<Operand>) -> Node {
        obs::record(BuildEvent::Compare { op });

        op.binary(self, right)
    }

    fn order(&self, direction: Direction) -> Node {
        obs::record(BuildEvent::Ordering { direction });

        Node::ordering(self, direction)
    }

    fn grouped<I>(&self, op: CompareOp, mode: FoldMode, others: I) -> Result<Node, ExprError>
    where
        I: IntoIterator,
        I::Item: Into<Operand>,
    {
        fold(
            self,
            op,
            mode,
            others
                .into_iter()
                .map(|other| InOperand::Operand(other.into())),
        )
    }
}
