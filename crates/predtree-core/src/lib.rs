//! Core runtime for predtree: column attributes, literal values, and the
//! immutable predicate/ordering node trees they build.
//!
//! Nothing in this crate renders SQL text or executes queries. Trees are
//! handed to an external assembly/rendering layer as plain values.
#![warn(unreachable_pub)]

// public exports are one module level down
pub mod attribute;
pub mod error;
pub mod fold;
pub mod node;
pub mod obs;
pub mod op;
pub mod operand;
pub mod range;
pub mod subquery;
pub mod value;

// test
#[cfg(test)]
pub(crate) mod test_support;

///
/// CONSTANTS
///

/// Row field read from sub-query results when materializing `IN` lists.
pub const ID_FIELD: &str = "id";

///
/// Prelude
///
/// Prelude contains only domain vocabulary.
/// No sinks or internal helpers are re-exported here.
///

pub mod prelude {
    pub use crate::{
        attribute::{Attribute, ColumnName, ColumnRef, RelationRef},
        error::ExprError,
        fold::FoldMode,
        node::{BoundPair, Direction, Node, NodeKind, Operand},
        op::CompareOp,
        operand::InOperand,
        range::{RangeEnd, ValueRange},
        subquery::{FieldPresence, Row, SubQuery},
        value::{FieldValue, Float64, Timestamp, Value, ValueKind},
    };
}
