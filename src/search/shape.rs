use std::fmt;

use crate::expression::{Expression, Operator};

/// The five ways to fully parenthesize `a ? b ? c ? d` with leaves kept in order.
///
/// `op1`, `op2` and `op3` are numbered by the gap they sit in (between a/b,
/// b/c and c/d), not by evaluation order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Shape {
    /// `((a op1 b) op2 c) op3 d`
    LeftChain,
    /// `(a op1 (b op2 c)) op3 d`
    LeftInner,
    /// `(a op1 b) op2 (c op3 d)`
    Balanced,
    /// `a op1 ((b op2 c) op3 d)`
    RightInner,
    /// `a op1 (b op2 (c op3 d))`
    RightChain,
}

impl Shape {
    /// Every shape, in search order
    pub const ALL: [Shape; 5] = [
        Shape::LeftChain,
        Shape::LeftInner,
        Shape::Balanced,
        Shape::RightInner,
        Shape::RightChain,
    ];

    /// Evaluate the shape over `leaves` joined by `ops`.
    ///
    /// Uses [`Operator::apply`], so a zero divisor anywhere makes the result non-finite.
    #[inline]
    pub fn evaluate(self, leaves: [f64; 4], ops: [Operator; 3]) -> f64 {
        self.fold(leaves, ops, |op, l, r| op.apply(l, r))
    }

    /// Build the expression tree for this shape
    pub fn build(self, leaves: [f64; 4], ops: [Operator; 3]) -> Expression {
        self.fold(leaves.map(Expression::Number), ops, Expression::binary)
    }

    /// Combine leaves bottom-up following the shape's topology
    fn fold<T>(self, leaves: [T; 4], ops: [Operator; 3], join: impl Fn(Operator, T, T) -> T) -> T {
        let [a, b, c, d] = leaves;
        let [op1, op2, op3] = ops;
        match self {
            Shape::LeftChain => join(op3, join(op2, join(op1, a, b), c), d),
            Shape::LeftInner => join(op3, join(op1, a, join(op2, b, c)), d),
            Shape::Balanced => join(op2, join(op1, a, b), join(op3, c, d)),
            Shape::RightInner => join(op1, a, join(op3, join(op2, b, c), d)),
            Shape::RightChain => join(op1, a, join(op2, b, join(op3, c, d))),
        }
    }

    /// Fully parenthesized template, e.g. `((a op1 b) op2 c) op3 d`
    pub fn template(self) -> &'static str {
        match self {
            Shape::LeftChain => "((a op1 b) op2 c) op3 d",
            Shape::LeftInner => "(a op1 (b op2 c)) op3 d",
            Shape::Balanced => "(a op1 b) op2 (c op3 d)",
            Shape::RightInner => "a op1 ((b op2 c) op3 d)",
            Shape::RightChain => "a op1 (b op2 (c op3 d))",
        }
    }
}

impl fmt::Display for Shape {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.template())
    }
}
