use std::fmt;
use std::str::FromStr;

use log::debug;

use crate::hand::constants::{FALLBACK_HAND, HAND_SIZE, MAX_RANK, MIN_RANK};
use crate::hand::errors::HandError;

/// Four card ranks dealt for one round
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Hand {
    ranks: [u8; HAND_SIZE],
}

impl Hand {
    /// Known solvable hand, `(1 + 2 + 3) * 4`
    pub const FALLBACK: Hand = Hand {
        ranks: FALLBACK_HAND,
    };

    /// # Errors
    ///
    /// Returns an error if any rank falls outside 1..=13.
    pub fn new(ranks: [u8; HAND_SIZE]) -> Result<Self, HandError> {
        if let Some(&bad) = ranks.iter().find(|r| !(MIN_RANK..=MAX_RANK).contains(*r)) {
            return Err(HandError::RankOutOfRange(u32::from(bad)));
        }
        Ok(Self { ranks })
    }

    /// Ranks in dealt order
    pub fn ranks(&self) -> [u8; HAND_SIZE] {
        self.ranks
    }

    /// Ranks in ascending order, the hand's multiset key
    pub fn sorted(&self) -> [u8; HAND_SIZE] {
        let mut sorted = self.ranks;
        sorted.sort_unstable();
        sorted
    }
}

impl TryFrom<&[u32]> for Hand {
    type Error = HandError;

    fn try_from(values: &[u32]) -> Result<Self, Self::Error> {
        let values: [u32; HAND_SIZE] = values
            .try_into()
            .map_err(|_| HandError::WrongSize(values.len()))?;

        let mut ranks = [0u8; HAND_SIZE];
        for (slot, value) in ranks.iter_mut().zip(values) {
            *slot = u8::try_from(value)
                .ok()
                .filter(|r| (MIN_RANK..=MAX_RANK).contains(r))
                .ok_or(HandError::RankOutOfRange(value))?;
        }
        Hand::new(ranks)
    }
}

impl FromStr for Hand {
    type Err = HandError;

    /// Parse four ranks separated by whitespace and/or commas, e.g. `"3 3 8 8"` or `"3,3,8,8"`
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        debug!("Parsing hand from '{}'", s);

        let values = s
            .split(|c: char| c == ',' || c.is_whitespace())
            .filter(|part| !part.is_empty())
            .map(|part| {
                part.parse::<u32>()
                    .map_err(|_| HandError::NotANumber(part.to_string()))
            })
            .collect::<Result<Vec<u32>, HandError>>()?;

        Hand::try_from(values.as_slice())
    }
}

impl fmt::Display for Hand {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let [a, b, c, d] = self.ranks;
        write!(f, "{} {} {} {}", a, b, c, d)
    }
}
