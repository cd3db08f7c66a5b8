use crate::{
    attribute::Attribute,
    node::{Node, Operand},
    range::ValueRange,
    subquery::SubQuery,
    value::{FieldValue, Value},
};
use std::{
    fmt,
    ops::{Range, RangeInclusive},
};

///
/// InOperand
///
/// Right-hand side accepted by `in_` / `not_in`. Intervals are decomposed,
/// sub-queries are materialized to their ids, plain operands pass through.
///

#[derive(Clone)]
pub enum InOperand<'a> {
    Operand(Operand),
    Range(ValueRange),
    SubQuery(&'a dyn SubQuery),
}

impl<'a> InOperand<'a> {
    /// Wrap a sub-query handle.
    #[must_use]
    pub fn subquery(query: &'a dyn SubQuery) -> Self {
        Self::SubQuery(query)
    }

    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Operand(_) => "literal",
            Self::Range(_) => "range",
            Self::SubQuery(_) => "sub-query",
        }
    }
}

impl fmt::Debug for InOperand<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Operand(operand) => f.debug_tuple("Operand").field(operand).finish(),
            Self::Range(range) => f.debug_tuple("Range").field(range).finish(),
            Self::SubQuery(_) => f.write_str("SubQuery(..)"),
        }
    }
}

impl From<Operand> for InOperand<'_> {
    fn from(operand: Operand) -> Self {
        Self::Operand(operand)
    }
}

impl From<ValueRange> for InOperand<'_> {
    fn from(range: ValueRange) -> Self {
        Self::Range(range)
    }
}

impl<V: FieldValue> From<Range<V>> for InOperand<'_> {
    fn from(range: Range<V>) -> Self {
        Self::Range(ValueRange::from(range))
    }
}

impl<V: FieldValue> From<RangeInclusive<V>> for InOperand<'_> {
    fn from(range: RangeInclusive<V>) -> Self {
        Self::Range(ValueRange::from(range))
    }
}

impl<V: FieldValue> From<Vec<V>> for InOperand<'_> {
    fn from(values: Vec<V>) -> Self {
        Self::Operand(Operand::from(values))
    }
}

macro_rules! impl_in_operand_from {
    ( $( $type:ty ),* $(,)? ) => {
        $(
            impl From<$type> for InOperand<'_> {
                fn from(v: $type) -> Self {
                    Self::Operand(Operand::from(v))
                }
            }
        )*
    };
}

impl_in_operand_from!(
    Attribute,
    &Attribute,
    Node,
    Value,
    bool,
    i8,
    i16,
    i32,
    i64,
    u8,
    u16,
    u32,
    u64,
    &str,
    String,
    rust_decimal::Decimal,
    crate::value::Float64,
    crate::value::Timestamp,
);
