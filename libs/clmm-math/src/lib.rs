pub mod apr;
pub mod full_math;
pub mod liquidity_math;
pub mod position_sizing;
pub mod price_math;
pub mod tick_math;

pub use apr::*;
pub use full_math::*;
pub use liquidity_math::*;
pub use position_sizing::*;
pub use price_math::*;
pub use tick_math::*;

pub use clmm_types::{
    AprConfig, FloatAmounts, MathError, OptimalAmounts, PositionRange, PricePosition, RangeApr,
    RangeStatus, RequiredTokens, TokenAmounts,
};
