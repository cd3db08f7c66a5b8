use crate::{
    ID_FIELD,
    error::{ExprError, UnsupportedOperandReason},
    obs::{self, BuildEvent},
    op::CompareOp,
    value::Value,
};
use std::collections::BTreeMap;

///
/// FieldPresence
///

#[derive(Clone, Debug, Eq, PartialEq)]
pub enum FieldPresence {
    Present(Value),
    Missing,
}

///
/// Row
///
/// One already-resolved result row of a sub-query.
///

pub trait Row {
    fn field(&self, name: &str) -> FieldPresence;
}

impl Row for BTreeMap<String, Value> {
    fn field(&self, name: &str) -> FieldPresence {
        match self.get(name) {
            Some(value) => FieldPresence::Present(value.clone()),
            None => FieldPresence::Missing,
        }
    }
}

///
/// SubQuery
///
/// Handle to an external query whose rows are already resolved. Called
/// exactly once per `in_` / `not_in` invocation.
///

pub trait SubQuery {
    fn rows(&self) -> Vec<Box<dyn Row + '_>>;
}

impl<R: Row> SubQuery for Vec<R> {
    fn rows(&self) -> Vec<Box<dyn Row + '_>> {
        self.iter().map(|row| Box::new(row) as Box<dyn Row + '_>).collect()
    }
}

impl<R: Row + ?Sized> Row for &R {
    fn field(&self, name: &str) -> FieldPresence {
        (**self).field(name)
    }
}

/// Collect the `id` of every row, in row order, into a literal list.
pub(crate) fn materialize_ids(op: CompareOp, query: &dyn SubQuery) -> Result<Value, ExprError> {
    let rows = query.rows();
    let mut ids = Vec::with_capacity(rows.len());

    for (index, row) in rows.iter().enumerate() {
        match row.field(ID_FIELD) {
            FieldPresence::Present(id) => ids.push(id),
            FieldPresence::Missing => {
                return Err(ExprError::unsupported(
                    op,
                    UnsupportedOperandReason::RowMissingId { index },
                ));
            }
        }
    }

    obs::record(BuildEvent::SubQuery {
        op,
        rows: ids.len(),
    });

    Ok(Value::List(ids))
}
