mod float64;
mod tag;
mod timestamp;


use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

// re-exports
pub use float64::{Float64, NonFiniteFloat};
pub use tag::ValueTag;
pub use timestamp::Timestamp;

///
/// Value
/// literal operand carried by predicate nodes
///
/// Null → SQL NULL literal.
/// List → ordered literal sequence (`IN` lists); order is preserved as given.
///

#[remain::sorted]
#[derive(Clone, Debug, Deserialize, Eq, Hash, PartialEq, Serialize)]
pub enum Value {
    Bool(bool),
    Decimal(Decimal),
    Float64(Float64),
    Int(i64),
    List(Vec<Self>),
    Null,
    Text(String),
    Timestamp(Timestamp),
    Uint(u64),
}

impl Value {
    ///
    /// CONSTRUCTION
    ///

    /// Build a `Value::List` from a list literal.
    pub fn from_slice<T>(items: &[T]) -> Self
    where
        T: FieldValue,
    {
        Self::List(items.iter().map(FieldValue::to_value).collect())
    }

    ///
    /// CLASSIFICATION
    ///

    /// Stable variant tag for this value.
    #[must_use]
    pub const fn tag(&self) -> ValueTag {
        match self {
            Self::Bool(_) => ValueTag::Bool,
            Self::Decimal(_) => ValueTag::Decimal,
            Self::Float64(_) => ValueTag::Float64,
            Self::Int(_) => ValueTag::Int,
            Self::List(_) => ValueTag::List,
            Self::Null => ValueTag::Null,
            Self::Text(_) => ValueTag::Text,
            Self::Timestamp(_) => ValueTag::Timestamp,
            Self::Uint(_) => ValueTag::Uint,
        }
    }

    /// Scalar values are everything except lists and null.
    #[must_use]
    pub const fn is_scalar(&self) -> bool {
        !matches!(self, Self::List(_) | Self::Null)
    }

    /// Attribute kind this literal naturally belongs to.
    #[must_use]
    pub const fn kind(&self) -> ValueKind {
        match self {
            Self::Bool(_) => ValueKind::Boolean,
            Self::Decimal(_) => ValueKind::Decimal,
            Self::Float64(_) => ValueKind::Float,
            Self::Int(_) | Self::Uint(_) => ValueKind::Integer,
            Self::Text(_) => ValueKind::String,
            Self::Timestamp(_) => ValueKind::Time,
            Self::List(_) | Self::Null => ValueKind::Generic,
        }
    }

    #[must_use]
    pub fn as_list(&self) -> Option<&[Self]> {
        match self {
            Self::List(items) => Some(items.as_slice()),
            _ => None,
        }
    }
}

///
/// ValueKind
///
/// Declared column kind of an attribute.
/// Informational only: operator semantics are identical across kinds.
///

#[derive(Clone, Copy, Debug, Default, Deserialize, Eq, Hash, PartialEq, Serialize)]
pub enum ValueKind {
    Boolean,
    Decimal,
    Float,
    #[default]
    Generic,
    Integer,
    String,
    Time,
}

impl ValueKind {
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Boolean => "Boolean",
            Self::Decimal => "Decimal",
            Self::Float => "Float",
            Self::Generic => "Generic",
            Self::Integer => "Integer",
            Self::String => "String",
            Self::Time => "Time",
        }
    }
}

///
/// FieldValue
///
/// Conversion of Rust literals into predicate `Value`s.
///

pub trait FieldValue {
    fn to_value(&self) -> Value;
}

impl<T: FieldValue + ?Sized> FieldValue for &T {
    fn to_value(&self) -> Value {
        (**self).to_value()
    }
}

impl FieldValue for Value {
    fn to_value(&self) -> Value {
        self.clone()
    }
}

impl FieldValue for bool {
    fn to_value(&self) -> Value {
        Value::Bool(*self)
    }
}

impl FieldValue for str {
    fn to_value(&self) -> Value {
        Value::Text(self.to_string())
    }
}

impl FieldValue for String {
    fn to_value(&self) -> Value {
        Value::Text(self.clone())
    }
}

impl FieldValue for Decimal {
    fn to_value(&self) -> Value {
        Value::Decimal(*self)
    }
}

impl<T: FieldValue> FieldValue for Option<T> {
    fn to_value(&self) -> Value {
        match self {
            Some(v) => v.to_value(),
            None => Value::Null,
        }
    }
}

impl<T: FieldValue> FieldValue for [T] {
    fn to_value(&self) -> Value {
        Value::List(self.iter().map(FieldValue::to_value).collect())
    }
}

impl<T: FieldValue> FieldValue for Vec<T> {
    fn to_value(&self) -> Value {
        self.as_slice().to_value()
    }
}

macro_rules! impl_field_value {
    ( $( $type:ty => $variant:ident ),* $(,)? ) => {
        $(
            impl FieldValue for $type {
                fn to_value(&self) -> Value {
                    Value::$variant((*self).into())
                }
            }
        )*
    };
}

impl_field_value!(
    i8 => Int,
    i16 => Int,
    i32 => Int,
    i64 => Int,
    u8 => Uint,
    u16 => Uint,
    u32 => Uint,
    u64 => Uint,
);

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        s.to_value()
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Self::Text(s)
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Self::Int(n)
    }
}

impl From<u64> for Value {
    fn from(n: u64) -> Self {
        Self::Uint(n)
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Self::Bool(b)
    }
}
