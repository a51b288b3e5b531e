use thiserror::Error;

use crate::expression::ExpressionError;

/// Why text that passed the character and parenthesis gates still failed
#[derive(Error, Debug, Clone, PartialEq)]
pub enum MalformedError {
    #[error("unexpected '{0}'")]
    UnexpectedToken(String),
    #[error("expression ends too early")]
    UnexpectedEnd,
    #[error("parentheses nested deeper than {0} levels")]
    TooDeep(usize),
    #[error("{0}")]
    Evaluation(#[from] ExpressionError),
}

/// Rejections of player input, one per validation gate
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ValidationError {
    #[error("Expression is empty")]
    EmptyInput,
    #[error("Only digits, + - * / and parentheses are allowed, found '{0}'")]
    InvalidCharacters(char),
    #[error("Parentheses are not balanced")]
    UnbalancedParentheses,
    #[error("Use each dealt card exactly once, found [{}]", .found.join(", "))]
    WrongCardsUsed { found: Vec<String> },
    #[error("Malformed expression: {0}")]
    MalformedExpression(#[from] MalformedError),
}
