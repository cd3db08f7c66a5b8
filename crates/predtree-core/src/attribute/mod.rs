//! Module: attribute
//! Responsibility: typed column handles and their predicate-building surface.
//! Does not own: relation/column catalog resolution or SQL rendering.
//! Boundary: the entry point callers use to construct predicate trees.

mod ops;

#[cfg(test)]
mod tests;

use crate::value::ValueKind;
use derive_more::{Deref, Display};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

///
/// RelationRef
///
/// Opaque reference to the relation (table, alias, or derived table) that
/// owns a column. Stored and forwarded, never resolved here.
///

#[derive(Clone, Debug, Deref, Deserialize, Display, Eq, Hash, PartialEq, Serialize)]
pub struct RelationRef(Arc<str>);

impl RelationRef {
    #[must_use]
    pub fn new(name: impl Into<Arc<str>>) -> Self {
        Self(name.into())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for RelationRef {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

impl From<String> for RelationRef {
    fn from(name: String) -> Self {
        Self::new(name)
    }
}

///
/// ColumnName
///

#[derive(Clone, Debug, Deref, Deserialize, Display, Eq, Hash, PartialEq, Serialize)]
pub struct ColumnName(Arc<str>);

impl ColumnName {
    #[must_use]
    pub fn new(name: impl Into<Arc<str>>) -> Self {
        Self(name.into())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for ColumnName {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

impl From<String> for ColumnName {
    fn from(name: String) -> Self {
        Self::new(name)
    }
}

///
/// ColumnRef
///
/// Opaque handle to externally owned column metadata.
///

#[derive(Clone, Debug, Deref, Deserialize, Display, Eq, Hash, PartialEq, Serialize)]
pub struct ColumnRef(Arc<str>);

impl ColumnRef {
    #[must_use]
    pub fn new(handle: impl Into<Arc<str>>) -> Self {
        Self(handle.into())
    }
}

///
/// Attribute
///
/// Identifies one column on one relation. Immutable; clones share the
/// underlying name storage.
///

#[derive(Clone, Debug, Deserialize, Eq, Hash, PartialEq, Serialize)]
pub struct Attribute {
    relation: RelationRef,
    name: ColumnName,
    column: Option<ColumnRef>,
    kind: ValueKind,
}

impl Attribute {
    /// Create a `Generic` attribute.
    #[must_use]
    pub fn new(relation: impl Into<RelationRef>, name: impl Into<ColumnName>) -> Self {
        Self::with_kind(relation, name, ValueKind::Generic)
    }

    #[must_use]
    pub fn with_kind(
        relation: impl Into<RelationRef>,
        name: impl Into<ColumnName>,
        kind: ValueKind,
    ) -> Self {
        Self {
            relation: relation.into(),
            name: name.into(),
            column: None,
            kind,
        }
    }

    #[must_use]
    pub fn string(relation: impl Into<RelationRef>, name: impl Into<ColumnName>) -> Self {
        Self::with_kind(relation, name, ValueKind::String)
    }

    #[must_use]
    pub fn time(relation: impl Into<RelationRef>, name: impl Into<ColumnName>) -> Self {
        Self::with_kind(relation, name, ValueKind::Time)
    }

    #[must_use]
    pub fn boolean(relation: impl Into<RelationRef>, name: impl Into<ColumnName>) -> Self {
        Self::with_kind(relation, name, ValueKind::Boolean)
    }

    #[must_use]
    pub fn decimal(relation: impl Into<RelationRef>, name: impl Into<ColumnName>) -> Self {
        Self::with_kind(relation, name, ValueKind::Decimal)
    }

    #[must_use]
    pub fn float(relation: impl Into<RelationRef>, name: impl Into<ColumnName>) -> Self {
        Self::with_kind(relation, name, ValueKind::Float)
    }

    #[must_use]
    pub fn integer(relation: impl Into<RelationRef>, name: impl Into<ColumnName>) -> Self {
        Self::with_kind(relation, name, ValueKind::Integer)
    }

    /// Attach the external column metadata handle.
    #[must_use]
    pub fn with_column(mut self, column: ColumnRef) -> Self {
        self.column = Some(column);
        self
    }

    #[must_use]
    pub const fn relation(&self) -> &RelationRef {
        &self.relation
    }

    #[must_use]
    pub const fn name(&self) -> &ColumnName {
        &self.name
    }

    #[must_use]
    pub const fn column(&self) -> Option<&ColumnRef> {
        self.column.as_ref()
    }

    #[must_use]
    pub const fn kind(&self) -> ValueKind {
        self.kind
    }
}
