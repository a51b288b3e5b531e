use std::fmt;

use crate::expression::{Expression, Operator};
use crate::hand::constants::HAND_SIZE;
use crate::search::Shape;

/// A leaf ordering, operator triple and shape that evaluates to 24
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Solution {
    pub leaves: [u8; HAND_SIZE],
    pub operators: [Operator; 3],
    pub shape: Shape,
}

impl Solution {
    pub fn to_expression(&self) -> Expression {
        self.shape.build(self.leaves.map(f64::from), self.operators)
    }

    /// Value computed along the search path
    pub fn value(&self) -> f64 {
        self.shape.evaluate(self.leaves.map(f64::from), self.operators)
    }
}

impl fmt::Display for Solution {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.to_expression())
    }
}
