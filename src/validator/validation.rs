use log::{debug, warn};

use crate::hand::Hand;
use crate::validator::errors::ValidationError;

fn is_allowed(c: char) -> bool {
    c.is_ascii_digit() || matches!(c, '+' | '-' | '*' | '/' | '(' | ')')
}

/// Reject any character other than digits, `+ - * /` and parentheses.
///
/// # Errors
///
/// Returns [`ValidationError::InvalidCharacters`] with the first offending character.
pub fn check_characters(text: &str) -> Result<(), ValidationError> {
    match text.chars().find(|c| !is_allowed(*c)) {
        Some(c) => {
            warn!("Rejected character '{}' in '{}'", c, text);
            Err(ValidationError::InvalidCharacters(c))
        }
        None => Ok(()),
    }
}

/// Depth scan: never below zero, zero at the end.
///
/// # Errors
///
/// Returns [`ValidationError::UnbalancedParentheses`] on a stray `)` or an unclosed `(`.
pub fn check_parentheses(text: &str) -> Result<(), ValidationError> {
    let mut depth: usize = 0;
    for c in text.chars() {
        match c {
            '(' => depth += 1,
            ')' => {
                depth = depth
                    .checked_sub(1)
                    .ok_or(ValidationError::UnbalancedParentheses)?;
            }
            _ => {}
        }
    }

    if depth == 0 {
        Ok(())
    } else {
        debug!("{} unclosed parenthesis(es) in '{}'", depth, text);
        Err(ValidationError::UnbalancedParentheses)
    }
}

/// Maximal runs of ASCII digits, in order of appearance
pub fn extract_numbers(text: &str) -> Vec<&str> {
    text.split(|c: char| !c.is_ascii_digit())
        .filter(|run| !run.is_empty())
        .collect()
}

/// The numbers in `text` must be exactly the hand's ranks, in any order.
///
/// # Errors
///
/// Returns [`ValidationError::WrongCardsUsed`] when a card is missing, repeated,
/// or a number that was never dealt appears.
pub fn check_cards(text: &str, hand: &Hand) -> Result<(), ValidationError> {
    let runs = extract_numbers(text);

    let mut used: Option<Vec<u32>> = runs.iter().map(|run| run.parse::<u32>().ok()).collect();
    if let Some(used) = used.as_mut() {
        used.sort_unstable();
    }

    let expected: Vec<u32> = hand.sorted().iter().map(|&r| u32::from(r)).collect();
    if used.as_ref() == Some(&expected) {
        Ok(())
    } else {
        debug!("Numbers {:?} do not match hand [{}]", runs, hand);
        Err(ValidationError::WrongCardsUsed {
            found: runs.iter().map(|run| run.to_string()).collect(),
        })
    }
}
