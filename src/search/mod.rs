//! Candidate enumeration: leaf orderings and tree shapes

mod permutations;
mod shape;

pub use permutations::{Permutations, permutations};
pub use shape::Shape;
