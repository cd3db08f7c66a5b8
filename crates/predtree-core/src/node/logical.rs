use crate::node::{Binary, Node};
use std::ops::{BitAnd, BitOr};

impl Node {
    /// Binary conjunction `self AND other`; no flattening.
    #[must_use]
    pub fn and(self, other: Self) -> Self {
        Self::And(Binary::new(self, other))
    }

    /// Binary disjunction `self OR other`; no flattening.
    #[must_use]
    pub fn or(self, other: Self) -> Self {
        Self::Or(Binary::new(self, other))
    }

    /// Wrap in an explicit parenthesization marker.
    #[must_use]
    pub fn grouping(self) -> Self {
        Self::Grouping(Box::new(self))
    }
}

impl BitAnd for Node {
    type Output = Self;

    fn bitand(self, rhs: Self) -> Self::Output {
        self.and(rhs)
    }
}

impl BitAnd for &Node {
    type Output = Node;

    fn bitand(self, rhs: Self) -> Self::Output {
        self.clone().and(rhs.clone())
    }
}

impl BitOr for Node {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self::Output {
        self.or(rhs)
    }
}

impl BitOr for &Node {
    type Output = Node;

    fn bitor(self, rhs: Self) -> Self::Output {
        self.clone().or(rhs.clone())
    }
}
