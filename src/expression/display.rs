use std::fmt;

use crate::expression::ast::Expression;

impl fmt::Display for Expression {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        fn precedence(expr: &Expression) -> u8 {
            expr.operator().map_or(3, |op| op.precedence())
        }

        fn write_with_parens(
            f: &mut fmt::Formatter,
            expr: &Expression,
            need_parens: bool,
        ) -> fmt::Result {
            if need_parens {
                write!(f, "(")?;
                fmt_expression(f, expr)?;
                write!(f, ")")
            } else {
                fmt_expression(f, expr)
            }
        }

        // Left operands only need parens when they bind looser than the parent.
        // Right operands also need them at equal precedence unless the parent
        // is associative (+ or *), otherwise `a - (b - c)` would print as `a - b - c`.
        fn fmt_binary(
            f: &mut fmt::Formatter,
            l: &Expression,
            r: &Expression,
            symbol: char,
            prec: u8,
            associative: bool,
        ) -> fmt::Result {
            let need_l = precedence(l) < prec;
            let need_r = if associative {
                precedence(r) < prec
            } else {
                precedence(r) <= prec
            };
            write_with_parens(f, l, need_l)?;
            write!(f, " {} ", symbol)?;
            write_with_parens(f, r, need_r)
        }

        fn fmt_expression(f: &mut fmt::Formatter, expr: &Expression) -> fmt::Result {
            match expr {
                Expression::Number(n) => write!(f, "{}", n),
                Expression::Add(l, r) => fmt_binary(f, l, r, '+', 1, true),
                Expression::Sub(l, r) => fmt_binary(f, l, r, '-', 1, false),
                Expression::Mul(l, r) => fmt_binary(f, l, r, '*', 2, true),
                Expression::Div(l, r) => fmt_binary(f, l, r, '/', 2, false),
            }
        }

        fmt_expression(f, self)
    }
}
