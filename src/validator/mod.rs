//! Checks and evaluates player-typed expressions against the dealt hand.
//!
//! Text passes four gates in order: character whitelist, parenthesis balance,
//! card usage, then parsing and evaluation. Each gate fails with its own error
//! and nothing is evaluated until the first three have passed. The grammar
//! only knows integer literals, `+ - * /` and parentheses.

pub mod constants;
mod core;
mod errors;
mod parser;
mod tokens;
mod validation;

pub use self::core::{ErrorKind, Outcome, Verdict, check, classify, evaluate, outcome};
pub use errors::{MalformedError, ValidationError};
pub use parser::parse;
pub use tokens::{Token, tokenize};
pub use validation::{check_cards, check_characters, check_parentheses, extract_numbers};

#[cfg(test)]
mod tests;
