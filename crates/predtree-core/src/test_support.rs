//! Shared helpers for unit tests.

use crate::{
    ID_FIELD,
    attribute::Attribute,
    node::{Binary, Node, Operand},
    value::Value,
};
use std::collections::BTreeMap;

pub(crate) fn users_id() -> Attribute {
    Attribute::integer("users", "id")
}

pub(crate) fn users_name() -> Attribute {
    Attribute::string("users", "name")
}

pub(crate) fn int(n: i64) -> Operand {
    Operand::Value(Value::Int(n))
}

pub(crate) fn bin(left: &Attribute, right: impl Into<Operand>) -> Binary {
    Binary::new(left, right)
}

/// Sub-query result rows carrying the given ids.
pub(crate) fn id_rows(ids: &[i64]) -> Vec<BTreeMap<String, Value>> {
    ids.iter()
        .map(|id| BTreeMap::from([(ID_FIELD.to_string(), Value::Int(*id))]))
        .collect()
}

/// Evaluate a single-attribute integer predicate tree for the column value `x`.
///
/// Only the shapes the builders emit over `Value::Int` literals are supported.
pub(crate) fn eval_int(node: &Node, x: i64) -> bool {
    let rhs = |b: &Binary| match &b.right {
        Operand::Value(Value::Int(n)) => *n,
        other => panic!("unsupported right operand: {other:?}"),
    };
    let sub = |operand: &Operand| match operand {
        Operand::Node(inner) => eval_int(inner, x),
        other => panic!("expected nested node, found {other:?}"),
    };
    let list = |b: &Binary| match &b.right {
        Operand::Value(Value::List(items)) => items.contains(&Value::Int(x)),
        other => panic!("expected literal list, found {other:?}"),
    };

    match node {
        Node::Equality(b) => x == rhs(b),
        Node::NotEqual(b) => x != rhs(b),
        Node::GreaterThan(b) => x > rhs(b),
        Node::GreaterThanOrEqual(b) => x >= rhs(b),
        Node::LessThan(b) => x < rhs(b),
        Node::LessThanOrEqual(b) => x <= rhs(b),
        Node::In(b) => list(b),
        Node::NotIn(b) => !list(b),
        Node::Between(between) => match (&between.bounds.low, &between.bounds.high) {
            (Value::Int(low), Value::Int(high)) => *low <= x && x <= *high,
            other => panic!("unsupported bounds: {other:?}"),
        },
        Node::And(b) => sub(&b.left) && sub(&b.right),
        Node::Or(b) => sub(&b.left) || sub(&b.right),
        Node::Grouping(inner) => eval_int(inner, x),
        Node::Matches(_) | Node::DoesNotMatch(_) | Node::Ordering(_) => {
            panic!("not a boolean integer predicate: {node:?}")
        }
    }
}
