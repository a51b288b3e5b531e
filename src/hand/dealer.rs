use log::{debug, info, warn};
use rand::rngs::{StdRng, ThreadRng};
use rand::{Rng, SeedableRng};

use crate::hand::constants::{HAND_SIZE, MAX_DEAL_ATTEMPTS, MAX_RANK, MIN_RANK};
use crate::hand::core::Hand;
use crate::solver::Solver;

/// Supplies card ranks to a [`Dealer`]
pub trait CardSource {
    /// Next rank, expected to lie in 1..=13
    fn next_rank(&mut self) -> u8;
}

/// Uniform, independent ranks drawn from any `rand` generator
#[derive(Debug, Clone)]
pub struct RngSource<R>(pub R);

impl<R: Rng> CardSource for RngSource<R> {
    fn next_rank(&mut self) -> u8 {
        self.0.gen_range(MIN_RANK..=MAX_RANK)
    }
}

/// Deals hands that are guaranteed to have a solution
#[derive(Debug, Clone)]
pub struct Dealer<S> {
    source: S,
    solver: Solver,
    max_attempts: usize,
}

impl Dealer<RngSource<ThreadRng>> {
    /// Dealer backed by the thread-local random generator
    pub fn new() -> Self {
        Self::with_source(RngSource(rand::thread_rng()))
    }
}

impl Default for Dealer<RngSource<ThreadRng>> {
    fn default() -> Self {
        Self::new()
    }
}

impl Dealer<RngSource<StdRng>> {
    /// Reproducible dealer for a fixed seed
    pub fn seeded(seed: u64) -> Self {
        Self::with_source(RngSource(StdRng::seed_from_u64(seed)))
    }
}

impl<S: CardSource> Dealer<S> {
    pub fn with_source(source: S) -> Self {
        Self {
            source,
            solver: Solver::new(),
            max_attempts: MAX_DEAL_ATTEMPTS,
        }
    }

    /// Cap the number of draws per deal before falling back to `{1, 2, 3, 4}`
    pub fn with_max_attempts(mut self, max_attempts: usize) -> Self {
        self.max_attempts = max_attempts;
        self
    }

    /// Draw four ranks without checking solvability.
    ///
    /// Ranks outside 1..=13 from a misbehaving source are wrapped back into range.
    pub fn draw(&mut self) -> Hand {
        let mut ranks = [MIN_RANK; HAND_SIZE];
        for slot in &mut ranks {
            let rank = self.source.next_rank();
            *slot = if (MIN_RANK..=MAX_RANK).contains(&rank) {
                rank
            } else {
                warn!("Card source produced out-of-range rank {}, wrapping", rank);
                (rank.wrapping_sub(MIN_RANK) % MAX_RANK) + MIN_RANK
            };
        }
        Hand::new(ranks).unwrap_or(Hand::FALLBACK)
    }

    /// Deal a hand the solver can solve.
    ///
    /// Redraws until a solvable hand appears. After `max_attempts` unsolvable draws
    /// the fallback hand `{1, 2, 3, 4}` is returned instead.
    pub fn deal(&mut self) -> Hand {
        for attempt in 1..=self.max_attempts {
            let hand = self.draw();
            if self.solver.is_solvable(&hand) {
                debug!("Dealt solvable hand [{}] after {} draw(s)", hand, attempt);
                return hand;
            }
            debug!("Rejected unsolvable hand [{}]", hand);
        }

        warn!(
            "No solvable hand after {} draws, using fallback hand",
            self.max_attempts
        );
        info!("Dealt fallback hand [{}]", Hand::FALLBACK);
        Hand::FALLBACK
    }
}
