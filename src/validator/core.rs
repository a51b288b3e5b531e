use std::fmt;

use log::{debug, info};

use crate::hand::Hand;
use crate::solver::is_target;
use crate::validator::errors::{MalformedError, ValidationError};
use crate::validator::parser::parse;
use crate::validator::tokens::tokenize;
use crate::validator::validation::{check_cards, check_characters, check_parentheses};

/// Result of a successfully evaluated player expression
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Verdict {
    /// Evaluates to 24 within tolerance
    Correct(f64),
    /// Evaluates to some other finite value
    WrongResult(f64),
}

impl Verdict {
    pub fn value(&self) -> f64 {
        match self {
            Verdict::Correct(v) | Verdict::WrongResult(v) => *v,
        }
    }

    pub fn is_correct(&self) -> bool {
        matches!(self, Verdict::Correct(_))
    }

    pub fn kind(&self) -> Option<ErrorKind> {
        match self {
            Verdict::Correct(_) => None,
            Verdict::WrongResult(_) => Some(ErrorKind::WrongResult),
        }
    }
}

/// Flat classification of every way an answer can be rejected
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    EmptyInput,
    InvalidCharacters,
    UnbalancedParentheses,
    WrongCardsUsed,
    MalformedExpression,
    WrongResult,
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let name = match self {
            ErrorKind::EmptyInput => "empty input",
            ErrorKind::InvalidCharacters => "invalid characters",
            ErrorKind::UnbalancedParentheses => "unbalanced parentheses",
            ErrorKind::WrongCardsUsed => "wrong cards used",
            ErrorKind::MalformedExpression => "malformed expression",
            ErrorKind::WrongResult => "wrong result",
        };
        write!(f, "{}", name)
    }
}

impl ValidationError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            ValidationError::EmptyInput => ErrorKind::EmptyInput,
            ValidationError::InvalidCharacters(_) => ErrorKind::InvalidCharacters,
            ValidationError::UnbalancedParentheses => ErrorKind::UnbalancedParentheses,
            ValidationError::WrongCardsUsed { .. } => ErrorKind::WrongCardsUsed,
            ValidationError::MalformedExpression(_) => ErrorKind::MalformedExpression,
        }
    }
}

/// Caller-facing summary: `kind` is `None` for a correct answer, `value` is set
/// whenever the expression evaluated
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Outcome {
    pub kind: Option<ErrorKind>,
    pub value: Option<f64>,
}

impl Outcome {
    pub fn is_ok(&self) -> bool {
        self.kind.is_none()
    }
}

impl From<Result<Verdict, ValidationError>> for Outcome {
    fn from(result: Result<Verdict, ValidationError>) -> Self {
        match result {
            Ok(verdict) => Outcome {
                kind: verdict.kind(),
                value: Some(verdict.value()),
            },
            Err(e) => Outcome {
                kind: Some(e.kind()),
                value: None,
            },
        }
    }
}

/// Validate `text` against `hand` and compute its value.
///
/// # Errors
///
/// Returns the error of the first gate that fails: empty input, characters,
/// parentheses, card usage, then parsing and evaluation.
pub fn evaluate(text: &str, hand: &Hand) -> Result<f64, ValidationError> {
    debug!("Validating '{}' against hand [{}]", text, hand);

    let cleaned: String = text.chars().filter(|c| !c.is_whitespace()).collect();
    if cleaned.is_empty() {
        return Err(ValidationError::EmptyInput);
    }

    check_characters(&cleaned)?;
    check_parentheses(&cleaned)?;
    check_cards(&cleaned, hand)?;

    let tokens = tokenize(&cleaned)?;
    let expr = parse(&tokens)?;
    let value = expr.evaluate().map_err(MalformedError::from)?;

    debug!("'{}' parsed as {} = {}", cleaned, expr, value);
    Ok(value)
}

/// Validate and evaluate, then judge the value against 24
///
/// # Errors
///
/// See [`evaluate`].
pub fn check(text: &str, hand: &Hand) -> Result<Verdict, ValidationError> {
    let verdict = classify(evaluate(text, hand)?);
    info!("Answer '{}' for [{}]: {:?}", text.trim(), hand, verdict);
    Ok(verdict)
}

/// Judge a computed value against 24
pub fn classify(value: f64) -> Verdict {
    if is_target(value) {
        Verdict::Correct(value)
    } else {
        Verdict::WrongResult(value)
    }
}

/// [`check`] flattened into an [`Outcome`]
pub fn outcome(text: &str, hand: &Hand) -> Outcome {
    Outcome::from(check(text, hand))
}
