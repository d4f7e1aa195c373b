use num::BigUint;
use thiserror::Error;

/// Domain violations. These point at corrupted pool reads or programming
/// errors upstream; degenerate user input never produces one.
#[derive(Clone, Debug, Eq, PartialEq, Error)]
pub enum MathError {
    #[error("tick {0} out of bounds")]
    TickOutOfBounds(i32),
    #[error("sqrt price {0} out of bounds")]
    SqrtRatioOutOfBounds(BigUint),
    #[error("empty position range [{tick_lower}, {tick_upper})")]
    InvalidRange { tick_lower: i32, tick_upper: i32 },
}
