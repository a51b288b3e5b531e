// Target value and the absolute tolerance used to absorb division error
pub const TARGET: f64 = 24.0;
pub const EPSILON: f64 = 1e-4;

/// True when `value` counts as 24
#[inline]
pub fn is_target(value: f64) -> bool {
    (value - TARGET).abs() < EPSILON
}
