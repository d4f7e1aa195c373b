use crate::{MathError, MAX_TICK, MIN_TICK};
use serde::{Deserialize, Serialize};

/// Tick boundaries of a position. Always `tick_lower < tick_upper`.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub struct PositionRange {
    tick_lower: i32,
    tick_upper: i32,
}

impl PositionRange {
    /// Build a range from two ticks in either order
    pub fn new(tick_a: i32, tick_b: i32) -> Result<Self, MathError> {
        for tick in [tick_a, tick_b] {
            if !(MIN_TICK..=MAX_TICK).contains(&tick) {
                return Err(MathError::TickOutOfBounds(tick));
            }
        }
        let (tick_lower, tick_upper) = if tick_a > tick_b {
            (tick_b, tick_a)
        } else {
            (tick_a, tick_b)
        };
        if tick_lower == tick_upper {
            return Err(MathError::InvalidRange {
                tick_lower,
                tick_upper,
            });
        }
        Ok(Self {
            tick_lower,
            tick_upper,
        })
    }

    pub fn tick_lower(&self) -> i32 {
        self.tick_lower
    }

    pub fn tick_upper(&self) -> i32 {
        self.tick_upper
    }

    /// Number of ticks covered by the range
    pub fn width(&self) -> u32 {
        self.tick_upper.abs_diff(self.tick_lower)
    }

    /// True if `tick` lies in `[tick_lower, tick_upper)`
    pub fn contains(&self, tick: i32) -> bool {
        tick >= self.tick_lower && tick < self.tick_upper
    }

    /// True if both bounds are multiples of `tick_spacing`
    pub fn is_aligned(&self, tick_spacing: i32) -> bool {
        tick_spacing > 0
            && self.tick_lower % tick_spacing == 0
            && self.tick_upper % tick_spacing == 0
    }
}

/// Where the current price sits relative to a position's range
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub enum RangeStatus {
    /// Price at or below the lower bound - position holds token0 only
    BelowRange,
    /// Both tokens held
    InRange,
    /// Price at or above the upper bound - position holds token1 only
    AboveRange,
}

impl RangeStatus {
    /// Classify `current` against the bounds `a` and `b`, given in either order.
    /// Works for human prices and sqrt ratios alike.
    pub fn classify<T: PartialOrd + ?Sized>(current: &T, a: &T, b: &T) -> Self {
        let (lower, upper) = if a > b { (b, a) } else { (a, b) };
        if current <= lower {
            RangeStatus::BelowRange
        } else if current >= upper {
            RangeStatus::AboveRange
        } else {
            RangeStatus::InRange
        }
    }
}

/// Which token(s) a deposit into a range needs at the current price
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct RequiredTokens {
    pub needs_token0: bool,
    pub needs_token1: bool,
    pub is_single_sided: bool,
}

impl RequiredTokens {
    pub fn classify<T: PartialOrd + ?Sized>(current: &T, a: &T, b: &T) -> Self {
        RangeStatus::classify(current, a, b).into()
    }
}

impl From<RangeStatus> for RequiredTokens {
    fn from(status: RangeStatus) -> Self {
        match status {
            RangeStatus::BelowRange => RequiredTokens {
                needs_token0: true,
                needs_token1: false,
                is_single_sided: true,
            },
            RangeStatus::InRange => RequiredTokens {
                needs_token0: true,
                needs_token1: true,
                is_single_sided: false,
            },
            RangeStatus::AboveRange => RequiredTokens {
                needs_token0: false,
                needs_token1: true,
                is_single_sided: true,
            },
        }
    }
}
