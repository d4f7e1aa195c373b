use num::BigUint;
use serde::{Deserialize, Serialize};

/// Raw (smallest-unit) token amounts held by or required for a position
#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
pub struct TokenAmounts {
    pub amount0: BigUint,
    pub amount1: BigUint,
}

/// Paired deposit amounts together with the liquidity they mint
#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
pub struct OptimalAmounts {
    pub amount0: BigUint,
    pub amount1: BigUint,
    pub liquidity: BigUint,
}

/// Human-readable amounts used for live previews
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct FloatAmounts {
    pub amount0: f64,
    pub amount1: f64,
}

impl FloatAmounts {
    pub fn new(amount0: f64, amount1: f64) -> Self {
        Self { amount0, amount1 }
    }

    /// "This input is not usable for this range"
    pub fn zero() -> Self {
        Self::default()
    }
}

/// A price-based range in human units, pool order (token1 per token0)
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct PricePosition {
    pub current_price: f64,
    pub price_lower: f64,
    pub price_upper: f64,
}
