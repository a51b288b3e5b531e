use std::io::{BufRead, Write};

use anyhow::{Context, Result};
use log::{debug, info};
use twentyfour::validator::check;
use twentyfour::{CardSource, Dealer, Hand, Solution, Solver, ValidationError, Verdict};

use crate::cli::cards::rank_label;

const RULES: &str = "\
Use each of the four cards exactly once.
Combine them with + - * / and parentheses to make 24.
Example: (6-2)*(9-3)=24";

/// One player's game: the current hand and the running score
pub struct Session<S> {
    dealer: Dealer<S>,
    solver: Solver,
    hand: Hand,
    score: u32,
}

impl<S: CardSource> Session<S> {
    pub fn new(mut dealer: Dealer<S>) -> Self {
        let hand = dealer.deal();
        Self {
            dealer,
            solver: Solver::new(),
            hand,
            score: 0,
        }
    }

    pub fn hand(&self) -> Hand {
        self.hand
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    /// Judge an answer; a correct one scores a point and deals the next hand
    pub fn submit(&mut self, text: &str) -> Result<Verdict, ValidationError> {
        let verdict = check(text, &self.hand)?;
        if verdict.is_correct() {
            self.score += 1;
            info!("Solved [{}], score {}", self.hand, self.score);
            self.next_round();
        }
        Ok(verdict)
    }

    /// Show a solution for the current hand and move on without scoring
    pub fn reveal(&mut self) -> Option<Solution> {
        let solution = self.solver.solve(&self.hand);
        self.next_round();
        solution
    }

    pub fn next_round(&mut self) {
        self.hand = self.dealer.deal();
        debug!("New round with [{}]", self.hand);
    }
}

fn render_hand(hand: &Hand) -> String {
    hand.ranks()
        .iter()
        .map(|&r| rank_label(r))
        .collect::<Vec<_>>()
        .join("  ")
}

fn prompt<S: CardSource>(session: &Session<S>, output: &mut impl Write) -> Result<()> {
    let hand = session.hand();
    writeln!(output)?;
    writeln!(output, "Cards: {}    (numbers: {})", render_hand(&hand), hand)?;
    write!(output, "[score {}] > ", session.score())?;
    output.flush()?;
    Ok(())
}

/// Read answers and commands line by line until `quit` or end of input
pub fn run_session<S: CardSource>(
    session: &mut Session<S>,
    input: impl BufRead,
    mut output: impl Write,
) -> Result<()> {
    writeln!(
        output,
        "Make 24! Type an expression, or: skip, new, hint, answer, quit"
    )?;
    prompt(session, &mut output)?;

    for line in input.lines() {
        let line = line.context("Failed to read input")?;
        let entry = line.trim();

        match entry.to_ascii_lowercase().as_str() {
            "quit" | "exit" | "q" => break,
            "skip" => {
                writeln!(output, "Round skipped.")?;
                session.next_round();
            }
            "new" => {
                writeln!(output, "New hand dealt.")?;
                session.next_round();
            }
            "hint" => writeln!(output, "{}", RULES)?,
            "answer" => match session.reveal() {
                Some(solution) => writeln!(output, "One answer: {} = 24", solution)?,
                None => writeln!(output, "This hand has no solution.")?,
            },
            _ => match session.submit(entry) {
                Ok(Verdict::Correct(_)) => {
                    writeln!(output, "Correct! {} = 24", entry)?;
                }
                Ok(Verdict::WrongResult(value)) => {
                    writeln!(output, "That makes {}, not 24.", value)?;
                }
                Err(ValidationError::EmptyInput) => {
                    writeln!(output, "Please enter an expression.")?;
                }
                Err(e) => writeln!(output, "{}", e)?,
            },
        }
        prompt(session, &mut output)?;
    }

    writeln!(output)?;
    writeln!(output, "Final score: {}", session.score())?;
    Ok(())
}
