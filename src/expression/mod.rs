//! Expression trees over card values and the binary operators that join them

mod ast;
mod display;
mod errors;
mod eval;
mod operator;

pub use ast::Expression;
pub use errors::ExpressionError;
pub use operator::Operator;
