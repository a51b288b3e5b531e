use crate::expression::operator::Operator;

/// Arithmetic expression over card values
#[derive(Debug, Clone, PartialEq)]
pub enum Expression {
    Number(f64),
    Add(Box<Expression>, Box<Expression>),
    Sub(Box<Expression>, Box<Expression>),
    Mul(Box<Expression>, Box<Expression>),
    Div(Box<Expression>, Box<Expression>),
}

impl Expression {
    /// Build the binary node for `op` with the given operands
    pub fn binary(op: Operator, left: Expression, right: Expression) -> Self {
        let (l, r) = (Box::new(left), Box::new(right));
        match op {
            Operator::Add => Expression::Add(l, r),
            Operator::Sub => Expression::Sub(l, r),
            Operator::Mul => Expression::Mul(l, r),
            Operator::Div => Expression::Div(l, r),
        }
    }

    /// Operator at the root, `None` for a bare number
    pub fn operator(&self) -> Option<Operator> {
        match self {
            Expression::Number(_) => None,
            Expression::Add(_, _) => Some(Operator::Add),
            Expression::Sub(_, _) => Some(Operator::Sub),
            Expression::Mul(_, _) => Some(Operator::Mul),
            Expression::Div(_, _) => Some(Operator::Div),
        }
    }

    /// Leaf values in left-to-right order
    pub fn numbers(&self) -> Vec<f64> {
        fn collect(expr: &Expression, out: &mut Vec<f64>) {
            match expr {
                Expression::Number(n) => out.push(*n),
                Expression::Add(l, r)
                | Expression::Sub(l, r)
                | Expression::Mul(l, r)
                | Expression::Div(l, r) => {
                    collect(l, out);
                    collect(r, out);
                }
            }
        }

        let mut out = Vec::new();
        collect(self, &mut out);
        out
    }
}
