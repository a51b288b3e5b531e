use std::collections::HashSet;

use log::{debug, info};

use crate::expression::Operator;
use crate::hand::Hand;
use crate::search::{Shape, permutations};
use crate::solver::constants::is_target;
use crate::solver::solution::Solution;

/// Exhaustive solver over every ordering, operator triple and shape of a hand
#[derive(Debug, Clone, Copy, Default)]
pub struct Solver {}

impl Solver {
    pub fn new() -> Self {
        Self {}
    }

    /// Find the first solution in search order.
    ///
    /// Orderings are the outer loop, then `op1`, `op2`, `op3` over
    /// [`Operator::ALL`], then [`Shape::ALL`]. The same hand always yields the
    /// same solution.
    pub fn solve(&self, hand: &Hand) -> Option<Solution> {
        debug!("Solving hand [{}]", hand);

        let found = self.candidates(hand).find(|candidate| is_target(candidate.value()));

        match &found {
            Some(solution) => debug!("Found solution for [{}]: {}", hand, solution),
            None => debug!("No solution for [{}]", hand),
        }
        found
    }

    pub fn is_solvable(&self, hand: &Hand) -> bool {
        self.solve(hand).is_some()
    }

    /// Every solution in search order, skipping ones that render identically
    pub fn solve_all(&self, hand: &Hand) -> Vec<Solution> {
        let mut seen = HashSet::new();
        let solutions: Vec<Solution> = self
            .candidates(hand)
            .filter(|candidate| is_target(candidate.value()))
            .filter(|solution| seen.insert(solution.to_string()))
            .collect();

        info!(
            "Found {} distinct solution(s) for [{}]",
            solutions.len(),
            hand
        );
        solutions
    }

    /// All 24 x 64 x 5 candidates in search order
    fn candidates(&self, hand: &Hand) -> impl Iterator<Item = Solution> {
        permutations(&hand.ranks())
            .filter_map(|ordering| <[u8; 4]>::try_from(ordering).ok())
            .flat_map(|leaves| {
                Operator::ALL.into_iter().flat_map(move |op1| {
                    Operator::ALL.into_iter().flat_map(move |op2| {
                        Operator::ALL.into_iter().flat_map(move |op3| {
                            Shape::ALL.into_iter().map(move |shape| Solution {
                                leaves,
                                operators: [op1, op2, op3],
                                shape,
                            })
                        })
                    })
                })
            })
    }
}
