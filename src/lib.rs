//! Twentyfour - an engine for the 24 card game
//!
//! Four cards ranked 1 to 13 are dealt and the player combines all of them, each
//! exactly once, with `+ - * /` and parentheses to make 24. This library deals
//! hands that always have a solution, finds solutions by exhaustive search, and
//! checks player-typed answers without evaluating anything but arithmetic.

pub mod expression;
pub mod hand;
pub mod search;
pub mod solver;
pub mod validator;

// Re-export the main public API
pub use expression::{Expression, ExpressionError, Operator};
pub use hand::{CardSource, Dealer, Hand, HandError, RngSource};
pub use search::{Shape, permutations};
pub use solver::{Solution, Solver, SurveyReport, is_target, survey};
pub use validator::{ErrorKind, Outcome, ValidationError, Verdict};

/// Deal a random hand that is guaranteed to be solvable
///
/// Uses the thread-local random generator. For reproducible deals build a
/// [`Dealer`] with [`Dealer::seeded`] or a custom [`CardSource`].
pub fn new_hand() -> Hand {
    Dealer::new().deal()
}

/// Find the first solution for `hand`, or `None` if it cannot make 24
///
/// # Examples
///
/// ```
/// use twentyfour::{Hand, solve};
///
/// if let Ok(hand) = Hand::new([1, 2, 3, 4]) {
///     match solve(&hand) {
///         Some(solution) => println!("Found: {}", solution),
///         None => println!("No solution found"),
///     }
/// }
/// ```
pub fn solve(hand: &Hand) -> Option<Solution> {
    Solver::new().solve(hand)
}

/// Validate a player's answer for `hand` and judge it against 24
///
/// # Errors
///
/// Returns a [`ValidationError`] when the text is empty, contains characters other
/// than digits, operators and parentheses, has unbalanced parentheses, does not use
/// exactly the dealt cards, or cannot be parsed and evaluated to a finite number.
///
/// # Examples
///
/// ```
/// use twentyfour::{Hand, Verdict, check_answer};
///
/// if let Ok(hand) = Hand::new([3, 3, 8, 8]) {
///     let verdict = check_answer("8 / (3 - 8 / 3)", &hand);
///     assert!(matches!(verdict, Ok(Verdict::Correct(_))));
/// }
/// ```
pub fn check_answer(text: &str, hand: &Hand) -> Result<Verdict, ValidationError> {
    validator::check(text, hand)
}
