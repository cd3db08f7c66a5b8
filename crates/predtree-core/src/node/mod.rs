//! Module: node
//! Responsibility: the immutable predicate/ordering tree handed to renderers.
//! Does not own: SQL text generation or evaluation.
//! Boundary: closed, exhaustively matchable output of every builder.

mod logical;


use crate::{attribute::Attribute, value::Value};
use serde::{Deserialize, Serialize};

///
/// Operand
///
/// One side of a binary node: a nested node, a column, or a literal
/// (`Value::List` for literal sequences).
///

#[derive(Clone, Debug, Deserialize, Eq, Hash, PartialEq, Serialize)]
pub enum Operand {
    Attribute(Attribute),
    Node(Box<Node>),
    Value(Value),
}

impl Operand {
    #[must_use]
    pub const fn as_attribute(&self) -> Option<&Attribute> {
        match self {
            Self::Attribute(a) => Some(a),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_node(&self) -> Option<&Node> {
        match self {
            Self::Node(n) => Some(n),
            _ => None,
        }
    }

    #[must_use]
    pub const fn as_value(&self) -> Option<&Value> {
        match self {
            Self::Value(v) => Some(v),
            _ => None,
        }
    }
}

///
/// Binary
///

#[derive(Clone, Debug, Deserialize, Eq, Hash, PartialEq, Serialize)]
pub struct Binary {
    pub left: Operand,
    pub right: Operand,
}

impl Binary {
    #[must_use]
    pub fn new(left: impl Into<Operand>, right: impl Into<Operand>) -> Self {
        Self {
            left: left.into(),
            right: right.into(),
        }
    }
}

///
/// BoundPair
///
/// Inclusive `low`/`high` payload of a `Between` node. A value carrier
/// only; it has no logical meaning on its own.
///

#[derive(Clone, Debug, Deserialize, Eq, Hash, PartialEq, Serialize)]
pub struct BoundPair {
    pub low: Value,
    pub high: Value,
}

impl BoundPair {
    #[must_use]
    pub const fn new(low: Value, high: Value) -> Self {
        Self { low, high }
    }
}

///
/// Between
///

#[derive(Clone, Debug, Deserialize, Eq, Hash, PartialEq, Serialize)]
pub struct Between {
    pub expr: Operand,
    pub bounds: BoundPair,
}

///
/// Direction
///

#[derive(Clone, Copy, Debug, Default, Deserialize, Eq, Hash, PartialEq, Serialize)]
pub enum Direction {
    #[default]
    Asc,
    Desc,
}

///
/// Ordering
///

#[derive(Clone, Debug, Deserialize, Eq, Hash, PartialEq, Serialize)]
pub struct Ordering {
    pub expr: Operand,
    pub direction: Direction,
}

///
/// Node
///
/// Immutable expression tree element. Equality is structural.
///

#[derive(Clone, Debug, Deserialize, Eq, Hash, PartialEq, Serialize)]
pub enum Node {
    Equality(Binary),
    NotEqual(Binary),
    GreaterThan(Binary),
    GreaterThanOrEqual(Binary),
    LessThan(Binary),
    LessThanOrEqual(Binary),
    Matches(Binary),
    DoesNotMatch(Binary),
    In(Binary),
    NotIn(Binary),
    Between(Between),
    And(Binary),
    Or(Binary),
    Grouping(Box<Self>),
    Ordering(Ordering),
}

impl Node {
    #[must_use]
    pub fn between(expr: impl Into<Operand>, bounds: BoundPair) -> Self {
        Self::Between(Between {
            expr: expr.into(),
            bounds,
        })
    }

    #[must_use]
    pub fn ordering(expr: impl Into<Operand>, direction: Direction) -> Self {
        Self::Ordering(Ordering {
            expr: expr.into(),
            direction,
        })
    }

    #[must_use]
    pub const fn kind(&self) -> NodeKind {
        match self {
            Self::Equality(_) => NodeKind::Equality,
            Self::NotEqual(_) => NodeKind::NotEqual,
            Self::GreaterThan(_) => NodeKind::GreaterThan,
            Self::GreaterThanOrEqual(_) => NodeKind::GreaterThanOrEqual,
            Self::LessThan(_) => NodeKind::LessThan,
            Self::LessThanOrEqual(_) => NodeKind::LessThanOrEqual,
            Self::Matches(_) => NodeKind::Matches,
            Self::DoesNotMatch(_) => NodeKind::DoesNotMatch,
            Self::In(_) => NodeKind::In,
            Self::NotIn(_) => NodeKind::NotIn,
            Self::Between(_) => NodeKind::Between,
            Self::And(_) => NodeKind::And,
            Self::Or(_) => NodeKind::Or,
            Self::Grouping(_) => NodeKind::Grouping,
            Self::Ordering(_) => NodeKind::Ordering,
        }
    }

    /// Left and right operands of a binary node.
    ///
    /// `Between`, `Grouping` and `Ordering` are not binary and return `None`.
    #[must_use]
    pub const fn operands(&self) -> Option<(&Operand, &Operand)> {
        match self {
            Self::Equality(b)
            | Self::NotEqual(b)
            | Self::GreaterThan(b)
            | Self::GreaterThanOrEqual(b)
            | Self::LessThan(b)
            | Self::LessThanOrEqual(b)
            | Self::Matches(b)
            | Self::DoesNotMatch(b)
            | Self::In(b)
            | Self::NotIn(b)
            | Self::And(b)
            | Self::Or(b) => Some((&b.left, &b.right)),
            Self::Between(_) | Self::Grouping(_) | Self::Ordering(_) => None,
        }
    }

    /// Number of nodes in this tree, counting nested operand nodes.
    #[must_use]
    pub fn node_count(&self) -> usize {
        let nested = |operand: &Operand| operand.as_node().map_or(0, Self::node_count);

        1 + match self {
            Self::Between(between) => nested(&between.expr),
            Self::Grouping(inner) => inner.node_count(),
            Self::Ordering(ordering) => nested(&ordering.expr),
            other => other
                .operands()
                .map_or(0, |(left, right)| nested(left) + nested(right)),
        }
    }
}

// Left-leaning folds nest one box per operand, so the derived drop glue
// would recurse once per level. Children are detached onto a local stack
// and released one at a time instead.
impl Drop for Node {
    fn drop(&mut self) {
        let mut pending = Vec::new();
        detach_children(self, &mut pending);

        while let Some(mut node) = pending.pop() {
            detach_children(&mut node, &mut pending);
        }
    }
}

// Childless stand-in left behind where a child was detached.
const fn vacant() -> Node {
    Node::Equality(Binary {
        left: Operand::Value(Value::Null),
        right: Operand::Value(Value::Null),
    })
}

fn detach_operand(operand: &mut Operand, pending: &mut Vec<Node>) {
    if let Operand::Node(child) = operand {
        pending.push(std::mem::replace(&mut **child, vacant()));
    }
}

fn detach_children(node: &mut Node, pending: &mut Vec<Node>) {
    match node {
        Node::Equality(b)
        | Node::NotEqual(b)
        | Node::GreaterThan(b)
        | Node::GreaterThanOrEqual(b)
        | Node::LessThan(b)
        | Node::LessThanOrEqual(b)
        | Node::Matches(b)
        | Node::DoesNotMatch(b)
        | Node::In(b)
        | Node::NotIn(b)
        | Node::And(b)
        | Node::Or(b) => {
            detach_operand(&mut b.left, pending);
            detach_operand(&mut b.right, pending);
        }
        Node::Between(between) => detach_operand(&mut between.expr, pending),
        Node::Ordering(ordering) => detach_operand(&mut ordering.expr, pending),
        Node::Grouping(inner) => pending.push(std::mem::replace(&mut **inner, vacant())),
    }
}

///
/// NodeKind
///
/// Stable variant tag for nodes.
///

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
#[repr(u8)]
pub enum NodeKind {
    Equality = 0x01,
    NotEqual = 0x02,
    GreaterThan = 0x03,
    GreaterThanOrEqual = 0x04,
    LessThan = 0x05,
    LessThanOrEqual = 0x06,
    Matches = 0x07,
    DoesNotMatch = 0x08,
    In = 0x09,
    NotIn = 0x0a,
    Between = 0x0b,
    And = 0x0c,
    Or = 0x0d,
    Grouping = 0x0e,
    Ordering = 0x0f,
}

impl NodeKind {
    #[must_use]
    pub const fn tag(self) -> u8 {
        self as u8
    }

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Equality => "Equality",
            Self::NotEqual => "NotEqual",
            Self::GreaterThan => "GreaterThan",
            Self::GreaterThanOrEqual => "GreaterThanOrEqual",
            Self::LessThan => "LessThan",
            Self::LessThanOrEqual => "LessThanOrEqual",
            Self::Matches => "Matches",
            Self::DoesNotMatch => "DoesNotMatch",
            Self::In => "In",
            Self::NotIn => "NotIn",
            Self::Between => "Between",
            Self::And => "And",
            Self::Or => "Or",
            Self::Grouping => "Grouping",
            Self::Ordering => "Ordering",
        }
    }
}

// ----------------------------------------------------------------------
// Operand conversions
// ----------------------------------------------------------------------

impl From<Attribute> for Operand {
    fn from(attribute: Attribute) -> Self {
        Self::Attribute(attribute)
    }
}

impl From<&Attribute> for Operand {
    fn from(attribute: &Attribute) -> Self {
        Self::Attribute(attribute.clone())
    }
}

impl From<Node> for Operand {
    fn from(node: Node) -> Self {
        Self::Node(Box::new(node))
    }
}

impl From<Value> for Operand {
    fn from(value: Value) -> Self {
        Self::Value(value)
    }
}

impl<V: crate::value::FieldValue> From<Vec<V>> for Operand {
    fn from(values: Vec<V>) -> Self {
        Self::Value(crate::value::FieldValue::to_value(&values))
    }
}

macro_rules! impl_operand_from_literal {
    ( $( $type:ty ),* $(,)? ) => {
        $(
            impl From<$type> for Operand {
                fn from(v: $type) -> Self {
                    Self::Value(crate::value::FieldValue::to_value(&v))
                }
            }
        )*
    };
}

impl_operand_from_literal!(
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
