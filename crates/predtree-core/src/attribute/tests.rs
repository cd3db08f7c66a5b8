use crate::{
    attribute::{Attribute, ColumnRef},
    error::{ExprError, UnsupportedOperandReason},
    node::{Direction, Node, Operand},
    op::CompareOp,
    operand::InOperand,
    subquery::{FieldPresence, Row, SubQuery},
    test_support::{bin, id_rows, int, users_id, users_name},
    value::{Value, ValueKind},
};
use std::collections::BTreeMap;

#[test]
fn comparison_methods_build_matching_binary_nodes() {
    let a = users_id();

    assert_eq!(a.eq(1), Node::Equality(bin(&a, 1)));
    assert_eq!(a.not_eq(1), Node::NotEqual(bin(&a, 1)));
    assert_eq!(a.gt(1), Node::GreaterThan(bin(&a, 1)));
    assert_eq!(a.gteq(1), Node::GreaterThanOrEqual(bin(&a, 1)));
    assert_eq!(a.lt(1), Node::LessThan(bin(&a, 1)));
    assert_eq!(a.lteq(1), Node::LessThanOrEqual(bin(&a, 1)));
}

#[test]
fn pattern_methods_carry_the_pattern_verbatim() {
    let name = users_name();

    let node = name.matches("%ice%");
    assert_eq!(node, Node::Matches(bin(&name, "%ice%")));

    let node = name.does_not_match("a_c");
    let Node::DoesNotMatch(b) = &node else {
        panic!("expected does-not-match node");
    };
    assert_eq!(b.right, Operand::Value(Value::Text("a_c".to_string())));
}

#[test]
fn left_operand_is_the_attribute_itself() {
    let a = users_id().with_column(ColumnRef::new("users.id:int8"));
    let node = a.eq(5);

    let (left, right) = node.operands().expect("binary node");
    assert_eq!(left.as_attribute(), Some(&a));
    assert_eq!(right, &int(5));
    assert_eq!(
        left.as_attribute().and_then(Attribute::column),
        Some(&ColumnRef::new("users.id:int8"))
    );
}

#[test]
fn attributes_and_nodes_are_accepted_as_right_operands() {
    let a = users_id();
    let b = Attribute::integer("orders", "user_id");

    assert_eq!(a.eq(&b), Node::Equality(bin(&a, &b)));

    let inner = b.gt(10);
    let node = a.lt(inner.clone());
    assert_eq!(node, Node::LessThan(bin(&a, inner)));
}

#[test]
fn asc_and_desc_build_orderings() {
    let a = users_id();

    assert_eq!(a.asc(), Node::ordering(&a, Direction::Asc));
    assert_eq!(a.desc(), Node::ordering(&a, Direction::Desc));
    assert_ne!(a.asc(), a.desc());
}

#[test]
fn in_with_literal_list_passes_through_unchanged() {
    let a = users_id();

    let node = a.in_(vec![1, 2, 3]).expect("literal in");
    assert_eq!(
        node,
        Node::In(bin(
            &a,
            Value::List(vec![Value::Int(1), Value::Int(2), Value::Int(3)])
        ))
    );

    let node = a.not_in(7).expect("scalar not in");
    assert_eq!(node, Node::NotIn(bin(&a, 7)));
}

#[test]
fn in_with_empty_literal_list_is_kept() {
    let a = users_id();

    let node = a.in_(Vec::<i64>::new()).expect("empty list");
    assert_eq!(node, Node::In(bin(&a, Value::List(vec![]))));
}

#[test]
fn in_with_subquery_materializes_ids_in_row_order() {
    let a = users_id();
    let rows = id_rows(&[3, 7]);

    let node = a.in_(InOperand::subquery(&rows)).expect("sub-query in");
    assert_eq!(
        node,
        Node::In(bin(&a, Value::List(vec![Value::Int(3), Value::Int(7)])))
    );

    let node = a.not_in(InOperand::subquery(&rows)).expect("sub-query not in");
    assert_eq!(
        node,
        Node::NotIn(bin(&a, Value::List(vec![Value::Int(3), Value::Int(7)])))
    );
}

#[test]
fn in_with_empty_subquery_yields_empty_list() {
    let a = users_id();
    let rows = id_rows(&[]);

    let node = a.in_(InOperand::subquery(&rows)).expect("empty sub-query");
    assert_eq!(node, Node::In(bin(&a, Value::List(vec![]))));
}

#[test]
fn subquery_row_without_id_is_unsupported() {
    let a = users_id();
    let mut rows = id_rows(&[1]);
    rows.push(BTreeMap::from([("name".to_string(), Value::from("x"))]));

    let err = a.in_(InOperand::subquery(&rows)).expect_err("missing id");
    assert_eq!(
        err,
        ExprError::UnsupportedOperand {
            op: CompareOp::In,
            reason: UnsupportedOperandReason::RowMissingId { index: 1 },
        }
    );
}

#[test]
fn subquery_handle_is_read_exactly_once() {
    struct CountingQuery {
        calls: std::cell::Cell<usize>,
    }

    struct IdRow(i64);

    impl Row for IdRow {
        fn field(&self, name: &str) -> FieldPresence {
            if name == "id" {
                FieldPresence::Present(Value::Int(self.0))
            } else {
                FieldPresence::Missing
            }
        }
    }

    impl SubQuery for CountingQuery {
        fn rows(&self) -> Vec<Box<dyn Row + '_>> {
            self.calls.set(self.calls.get() + 1);
            vec![Box::new(IdRow(4)) as Box<dyn Row>, Box::new(IdRow(2))]
        }
    }

    let query = CountingQuery {
        calls: std::cell::Cell::new(0),
    };
    let node = users_id()
        .not_in(InOperand::subquery(&query))
        .expect("sub-query not in");

    assert_eq!(query.calls.get(), 1);
    assert_eq!(
        node.operands().map(|(_, right)| right.clone()),
        Some(Operand::Value(Value::List(vec![
            Value::Int(4),
            Value::Int(2)
        ])))
    );
}

#[test]
fn kind_constructors_set_informational_kind_only() {
    let cases = [
        (Attribute::string("t", "c"), ValueKind::String),
        (Attribute::time("t", "c"), ValueKind::Time),
        (Attribute::boolean("t", "c"), ValueKind::Boolean),
        (Attribute::decimal("t", "c"), ValueKind::Decimal),
        (Attribute::float("t", "c"), ValueKind::Float),
        (Attribute::integer("t", "c"), ValueKind::Integer),
        (Attribute::new("t", "c"), ValueKind::Generic),
    ];

    for (attribute, kind) in cases {
        assert_eq!(attribute.kind(), kind);
        assert_eq!(attribute.relation().as_str(), "t");
        assert_eq!(attribute.name().as_str(), "c");

        // same operator shape regardless of kind
        let node = attribute.eq(1);
        assert_eq!(node, Node::Equality(bin(&attribute, 1)));
    }
}

#[test]
fn rebuilding_from_identical_inputs_is_structurally_equal() {
    let build = || {
        let a = users_id();
        a.eq_any([1, 2, 3]).expect("eq_any") & a.in_(1..=5).expect("between")
    };

    assert_eq!(build(), build());
}
