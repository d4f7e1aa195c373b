use num::{BigUint, Zero};
use tracing::trace;

/// Multiply and divide with unbounded intermediate precision (rounds down)
/// Returns (a * b) / denominator, or zero for a zero denominator
pub fn mul_div(a: &BigUint, b: &BigUint, denominator: &BigUint) -> BigUint {
    if denominator.is_zero() {
        trace!("mul_div with zero denominator, returning zero");
        return BigUint::zero();
    }
    (a * b) / denominator
}
