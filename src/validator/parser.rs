use std::iter::Peekable;
use std::slice::Iter;

use crate::expression::{Expression, Operator};
use crate::validator::constants::MAX_NESTING;
use crate::validator::errors::MalformedError;
use crate::validator::tokens::Token;

/// Parse tokens into an expression tree.
///
/// ```text
/// expr   := term (('+' | '-') term)*
/// term   := factor (('*' | '/') factor)*
/// factor := number | '(' expr ')'
/// ```
///
/// There are no unary operators, so `-3` or `2*-3` do not parse.
///
/// # Errors
///
/// Returns an error when the tokens do not form exactly one expression, or
/// when parentheses nest deeper than [`MAX_NESTING`] levels.
pub fn parse(tokens: &[Token]) -> Result<Expression, MalformedError> {
    let mut parser = Parser {
        tokens: tokens.iter().peekable(),
        depth: 0,
    };
    let expr = parser.expr()?;
    match parser.tokens.next() {
        None => Ok(expr),
        Some(token) => Err(MalformedError::UnexpectedToken(token.to_string())),
    }
}

struct Parser<'a> {
    tokens: Peekable<Iter<'a, Token>>,
    depth: usize,
}

impl Parser<'_> {
    fn expr(&mut self) -> Result<Expression, MalformedError> {
        let mut left = self.term()?;
        while let Some(op) = self.next_operator(&[Operator::Add, Operator::Sub]) {
            let right = self.term()?;
            left = Expression::binary(op, left, right);
        }
        Ok(left)
    }

    fn term(&mut self) -> Result<Expression, MalformedError> {
        let mut left = self.factor()?;
        while let Some(op) = self.next_operator(&[Operator::Mul, Operator::Div]) {
            let right = self.factor()?;
            left = Expression::binary(op, left, right);
        }
        Ok(left)
    }

    fn factor(&mut self) -> Result<Expression, MalformedError> {
        match self.tokens.next() {
            Some(Token::Number(n)) => Ok(Expression::Number(*n)),
            Some(Token::LeftParen) => {
                if self.depth >= MAX_NESTING {
                    return Err(MalformedError::TooDeep(MAX_NESTING));
                }
                self.depth += 1;
                let inner = self.expr()?;
                self.depth -= 1;
                match self.tokens.next() {
                    Some(Token::RightParen) => Ok(inner),
                    Some(token) => Err(MalformedError::UnexpectedToken(token.to_string())),
                    None => Err(MalformedError::UnexpectedEnd),
                }
            }
            Some(token) => Err(MalformedError::UnexpectedToken(token.to_string())),
            None => Err(MalformedError::UnexpectedEnd),
        }
    }

    /// Consume the next token if it is one of `allowed`
    fn next_operator(&mut self, allowed: &[Operator]) -> Option<Operator> {
        match self.tokens.peek() {
            Some(Token::Operator(op)) if allowed.contains(op) => {
                let op = *op;
                self.tokens.next();
                Some(op)
            }
            _ => None,
        }
    }
}
