pub mod constants;
mod core;
mod solution;
mod survey;

pub use constants::is_target;
pub use self::core::Solver;
pub use solution::Solution;
pub use survey::{SurveyReport, survey};
