mod amounts;
mod apr;
mod error;
mod position;

pub use amounts::*;
pub use apr::*;
pub use error::*;
pub use position::*;

use num::{BigUint, One};
use std::sync::LazyLock;

/// Minimum tick index (price ≈ 2.94e-39)
pub const MIN_TICK: i32 = -887272;

/// Maximum tick index (price ≈ 3.40e+38)
pub const MAX_TICK: i32 = 887272;

/// Q96 constant (2^96) for fixed-point math
pub static Q96: LazyLock<BigUint> = LazyLock::new(|| BigUint::one() << 96u32);

/// Minimum sqrt price, equal to get_sqrt_ratio_at_tick(MIN_TICK)
pub static MIN_SQRT_RATIO: LazyLock<BigUint> = LazyLock::new(|| BigUint::from(4295128739u64));

/// Maximum sqrt price, equal to get_sqrt_ratio_at_tick(MAX_TICK).
/// Exclusive upper bound for sqrt price inputs.
/// 0xfffd8963efd1fc6a506488495d951d5263988d26
pub static MAX_SQRT_RATIO: LazyLock<BigUint> = LazyLock::new(|| {
    BigUint::from_slice(&[0x63988d26, 0x5d951d52, 0x50648849, 0xefd1fc6a, 0xfffd8963])
});

/// Fee amount in hundredths of a basis point (1e-6)
/// 100 = 0.01%, 500 = 0.05%, 3000 = 0.3%, 10000 = 1%
pub type Fee = u32;

/// Get tick spacing for a given fee tier, `None` for unknown tiers
pub fn fee_to_tick_spacing(fee: Fee) -> Option<i32> {
    match fee {
        100 => Some(1),     // 0.01%
        500 => Some(10),    // 0.05%
        3000 => Some(60),   // 0.3%
        10000 => Some(200), // 1%
        _ => None,
    }
}
