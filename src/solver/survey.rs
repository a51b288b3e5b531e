use log::info;
use rayon::prelude::*;

use crate::hand::Hand;
use crate::hand::constants::{MAX_RANK, MIN_RANK};
use crate::solver::core::Solver;

/// Solvability over every possible hand
#[derive(Debug, Clone, Default)]
pub struct SurveyReport {
    /// Distinct hands ignoring order
    pub distinct_hands: usize,
    pub solvable_hands: usize,
    /// Ordered four-card draws (13^4)
    pub ordered_deals: usize,
    pub solvable_deals: usize,
    /// Unsolvable hands, ascending ranks, in ascending order
    pub unsolvable: Vec<Hand>,
}

impl SurveyReport {
    /// Share of uniform random draws that can be solved
    pub fn solvable_ratio(&self) -> f64 {
        if self.ordered_deals == 0 {
            0.0
        } else {
            self.solvable_deals as f64 / self.ordered_deals as f64
        }
    }
}

/// Classify every rank multiset, solving each one in parallel
pub fn survey() -> SurveyReport {
    let hands = rank_multisets();
    info!("Surveying {} distinct hands", hands.len());

    let solver = Solver::new();
    let results: Vec<(Hand, bool)> = hands
        .par_iter()
        .map(|hand| (*hand, solver.is_solvable(hand)))
        .collect();

    let mut report = SurveyReport {
        distinct_hands: results.len(),
        ..SurveyReport::default()
    };
    for (hand, solvable) in results {
        let weight = ordered_arrangements(&hand);
        report.ordered_deals += weight;
        if solvable {
            report.solvable_hands += 1;
            report.solvable_deals += weight;
        } else {
            report.unsolvable.push(hand);
        }
    }

    info!(
        "{} of {} distinct hands are solvable",
        report.solvable_hands, report.distinct_hands
    );
    report
}

/// Every non-decreasing rank quadruple
fn rank_multisets() -> Vec<Hand> {
    let mut hands = Vec::new();
    for a in MIN_RANK..=MAX_RANK {
        for b in a..=MAX_RANK {
            for c in b..=MAX_RANK {
                for d in c..=MAX_RANK {
                    if let Ok(hand) = Hand::new([a, b, c, d]) {
                        hands.push(hand);
                    }
                }
            }
        }
    }
    hands
}

/// Number of distinct ordered draws producing this multiset: 4! / prod(count!)
fn ordered_arrangements(hand: &Hand) -> usize {
    let sorted = hand.sorted();
    let mut divisor = 1;
    let mut run = 1;
    for pair in sorted.windows(2) {
        if let [x, y] = pair
            && x == y
        {
            run += 1;
            divisor *= run;
        } else {
            run = 1;
        }
    }
    24 / divisor
}

#[cfg(test)]
mod tests_inner_helpers {
    use super::{ordered_arrangements, rank_multisets};
    use crate::hand::Hand;

    #[test]
    fn test_rank_multisets_count() {
        // C(13 + 4 - 1, 4)
        assert_eq!(rank_multisets().len(), 1820);
    }

    #[test]
    fn test_ordered_arrangements() {
        let cases = [
            ([1, 2, 3, 4], 24),
            ([7, 7, 2, 3], 12),
            ([3, 3, 8, 8], 6),
            ([5, 5, 5, 1], 4),
            ([9, 9, 9, 9], 1),
        ];
        for (ranks, expected) in cases {
            if let Ok(hand) = Hand::new(ranks) {
                assert_eq!(ordered_arrangements(&hand), expected, "{:?}", ranks);
            }
        }
    }

    #[test]
    fn test_arrangements_cover_all_draws() {
        let total: usize = rank_multisets().iter().map(ordered_arrangements).sum();
        assert_eq!(total, 13usize.pow(4));
    }
}
