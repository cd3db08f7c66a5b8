use crate::{
    attribute::Attribute,
    error::{ExprError, UnsupportedOperandReason},
    node::{Binary, Node, Operand},
    operand::InOperand,
};
use serde::{Deserialize, Serialize};

///
/// CompareOp
///
/// Base binary operators an attribute can be tested with. This is the
/// dispatch table the any/all fold re-enters per operand.
///

#[derive(Clone, Copy, Debug, Deserialize, Eq, Hash, PartialEq, Serialize)]
#[repr(u8)]
pub enum CompareOp {
    Eq = 0x01,
    NotEq = 0x02,
    Lt = 0x03,
    Lteq = 0x04,
    Gt = 0x05,
    Gteq = 0x06,
    In = 0x07,
    NotIn = 0x08,
    Matches = 0x09,
    DoesNotMatch = 0x0a,
}

impl CompareOp {
    pub const ALL: [Self; 10] = [
        Self::Eq,
        Self::NotEq,
        Self::Lt,
        Self::Lteq,
        Self::Gt,
        Self::Gteq,
        Self::In,
        Self::NotIn,
        Self::Matches,
        Self::DoesNotMatch,
    ];

    #[must_use]
    pub const fn tag(self) -> u8 {
        self as u8
    }

    /// Method-style name of the operator, as used in diagnostics.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Eq => "eq",
            Self::NotEq => "not_eq",
            Self::Lt => "lt",
            Self::Lteq => "lteq",
            Self::Gt => "gt",
            Self::Gteq => "gteq",
            Self::In => "in",
            Self::NotIn => "not_in",
            Self::Matches => "matches",
            Self::DoesNotMatch => "does_not_match",
        }
    }

    /// `In` and `NotIn` accept intervals and sub-queries; nothing else does.
    #[must_use]
    pub const fn is_containment(self) -> bool {
        matches!(self, Self::In | Self::NotIn)
    }

    /// Build the binary node for this operator without any operand rewriting.
    #[must_use]
    pub fn binary(self, left: impl Into<Operand>, right: impl Into<Operand>) -> Node {
        let b = Binary::new(left, right);

        match self {
            Self::Eq => Node::Equality(b),
            Self::NotEq => Node::NotEqual(b),
            Self::Lt => Node::LessThan(b),
            Self::Lteq => Node::LessThanOrEqual(b),
            Self::Gt => Node::GreaterThan(b),
            Self::Gteq => Node::GreaterThanOrEqual(b),
            Self::In => Node::In(b),
            Self::NotIn => Node::NotIn(b),
            Self::Matches => Node::Matches(b),
            Self::DoesNotMatch => Node::DoesNotMatch(b),
        }
    }

    /// Apply this operator to `attribute` exactly as the matching
    /// `Attribute` method would.
    pub fn apply(self, attribute: &Attribute, operand: InOperand<'_>) -> Result<Node, ExprError> {
        match self {
            Self::In => attribute.in_(operand),
            Self::NotIn => attribute.not_in(operand),
            _ => match operand {
                InOperand::Operand(right) => Ok(attribute.compare(self, right)),
                other => Err(ExprError::unsupported(
                    self,
                    UnsupportedOperandReason::NotComparable {
                        operand: other.label(),
                    },
                )),
            },
        }
    }
}

impl std::fmt::Display for CompareOp {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}
