//! Dealt hands and the dealer that guarantees they can be solved

pub mod constants;
mod core;
mod dealer;
mod errors;

pub use self::core::Hand;
pub use dealer::{CardSource, Dealer, RngSource};
pub use errors::HandError;
