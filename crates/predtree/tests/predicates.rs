use predtree::{
    ExprError, ID_FIELD,
    core::{error::UnsupportedOperandReason, node::Binary},
    prelude::*,
};
use proptest::prelude::*;
use std::collections::BTreeMap;

fn a() -> Attribute {
    Attribute::integer("users", "id")
}

fn cmp(build: fn(Binary) -> Node, right: i64) -> Node {
    build(Binary::new(a(), Value::Int(right)))
}

// ---- range decomposition ----------------------------------------------

#[test]
fn half_open_interval_in() {
    assert_eq!(
        a().in_(1..5).expect("half-open in"),
        Node::And(Binary::new(
            cmp(Node::GreaterThanOrEqual, 1),
            cmp(Node::LessThan, 5)
        ))
    );
}

#[test]
fn closed_interval_in() {
    assert_eq!(
        a().in_(1..=5).expect("closed in"),
        Node::between(a(), BoundPair::new(Value::Int(1), Value::Int(5)))
    );
}

#[test]
fn half_open_interval_not_in() {
    assert_eq!(
        a().not_in(1..5).expect("half-open not_in"),
        Node::Or(Binary::new(
            cmp(Node::LessThan, 1),
            cmp(Node::GreaterThanOrEqual, 5)
        ))
    );
}

#[test]
fn closed_interval_not_in() {
    assert_eq!(
        a().not_in(1..=5).expect("closed not_in"),
        Node::Or(Binary::new(cmp(Node::LessThan, 1), cmp(Node::GreaterThan, 5)))
    );
}

#[test]
fn explicit_value_range_matches_std_range() {
    assert_eq!(
        a().in_(ValueRange::exclusive(1, 5)).expect("exclusive value range"),
        a().in_(1..5).expect("half-open in")
    );
    assert_eq!(
        a().not_in(ValueRange::inclusive(1, 5)).expect("inclusive value range"),
        a().not_in(1..=5).expect("closed not_in")
    );
}

// ---- sub-queries -------------------------------------------------------

#[test]
fn subquery_ids_are_materialized() {
    let rows: Vec<BTreeMap<String, Value>> = [3, 7]
        .into_iter()
        .map(|id| BTreeMap::from([(ID_FIELD.to_string(), Value::Int(id))]))
        .collect();

    assert_eq!(
        a().in_(InOperand::subquery(&rows)).expect("subquery in"),
        Node::In(Binary::new(
            a(),
            Value::List(vec![Value::Int(3), Value::Int(7)])
        ))
    );
}

#[test]
fn subquery_without_ids_is_rejected() {
    let rows = vec![BTreeMap::from([("email".to_string(), Value::from("x@y"))])];

    let err = a()
        .not_in(InOperand::subquery(&rows))
        .expect_err("row without id");
    assert_eq!(
        err,
        ExprError::UnsupportedOperand {
            op: CompareOp::NotIn,
            reason: UnsupportedOperandReason::RowMissingId { index: 0 },
        }
    );
    assert_eq!(
        err.to_string(),
        "unsupported operand for not_in: sub-query row 0 has no `id` field"
    );
}

// ---- any / all ---------------------------------------------------------

#[test]
fn eq_any_three_operands() {
    assert_eq!(
        a().eq_any([1, 2, 3]).expect("eq_any"),
        Node::Grouping(Box::new(Node::Or(Binary::new(
            Node::Or(Binary::new(cmp(Node::Equality, 1), cmp(Node::Equality, 2))),
            cmp(Node::Equality, 3),
        ))))
    );
}

#[test]
fn eq_all_two_operands() {
    assert_eq!(
        a().eq_all([1, 2]).expect("eq_all"),
        Node::Grouping(Box::new(Node::And(Binary::new(
            cmp(Node::Equality, 1),
            cmp(Node::Equality, 2)
        ))))
    );
}

#[test]
fn every_grouped_method_rejects_empty_input() {
    let none = Vec::<i64>::new;
    let results = [
        a().eq_any(none()),
        a().eq_all(none()),
        a().not_eq_any(none()),
        a().not_eq_all(none()),
        a().gt_any(none()),
        a().gt_all(none()),
        a().gteq_any(none()),
        a().gteq_all(none()),
        a().lt_any(none()),
        a().lt_all(none()),
        a().lteq_any(none()),
        a().lteq_all(none()),
        a().matches_any(none()),
        a().matches_all(none()),
        a().does_not_match_any(none()),
        a().does_not_match_all(none()),
        a().in_any(none()),
        a().in_all(none()),
        a().not_in_any(none()),
        a().not_in_all(none()),
    ];

    for result in results {
        assert!(matches!(result, Err(ExprError::EmptyOperandList { .. })));
    }
}

// ---- ordering ----------------------------------------------------------

#[test]
fn orderings() {
    let (asc_node, desc_node) = (a().asc(), a().desc());
    let Node::Ordering(asc) = &asc_node else {
        panic!("expected ordering");
    };
    let Node::Ordering(desc) = &desc_node else {
        panic!("expected ordering");
    };

    assert_eq!(asc.direction, Direction::Asc);
    assert_eq!(desc.direction, Direction::Desc);
    assert_eq!(asc.expr, Operand::Attribute(a()));
}

// ---- assembly ----------------------------------------------------------

#[test]
fn assembled_filter_is_reproducible_and_observable() {
    let created = Attribute::time("orders", "created_at");
    let total = Attribute::decimal("orders", "total");
    let status = Attribute::string("orders", "status");

    let build = || -> Result<Node, ExprError> {
        let window = created.in_(Timestamp::from_seconds(100)..Timestamp::from_seconds(200))?;
        let amount = total.gteq(Decimal::new(1999, 2));
        let state = status.not_in_any([vec!["void"], vec!["refunded", "disputed"]])?;

        Ok(window & amount & state)
    };

    let counters = BuildCounters::new();
    let first = with_build_sink(&counters, build).expect("first build");
    let second = build().expect("second build");

    assert_eq!(first, second);
    assert_eq!(first.kind(), NodeKind::And);

    let report = counters.snapshot();
    assert_eq!(report.ranges, 1);
    assert_eq!(report.folds, 1);
    assert_eq!(report.fold_operands, 2);
    // range halves are built directly, not through the comparison surface
    assert_eq!(report.compares, 3);
}

#[test]
fn assembled_filter_survives_json_round_trip() {
    let status = Attribute::string("orders", "status");
    let filter = (a().in_(10..=20).expect("closed in") | a().lt(0))
        & status.matches_any(["open%", "held%"]).expect("matches_any");

    let json = serde_json::to_string(&filter).expect("serialize filter");
    let back: Node = serde_json::from_str(&json).expect("deserialize filter");

    assert_eq!(back, filter);
}

// ---- fold shape law ----------------------------------------------------

proptest! {
    #[test]
    fn grouped_methods_lean_left_in_operand_order(
        operands in prop::collection::vec(any::<i64>(), 1..24),
        all in any::<bool>(),
    ) {
        let node = if all {
            a().gteq_all(operands.clone())
        } else {
            a().gteq_any(operands.clone())
        }
        .expect("non-empty operands");

        let join = if all { Node::And } else { Node::Or };
        let expected = operands[1..]
            .iter()
            .fold(cmp(Node::GreaterThanOrEqual, operands[0]), |acc, &n| {
                join(Binary::new(acc, cmp(Node::GreaterThanOrEqual, n)))
            });

        prop_assert_eq!(node, Node::Grouping(Box::new(expected)));
    }
}
