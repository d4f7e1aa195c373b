//! Human price conversions.
//!
//! A human price is either in pool order (token1 per token0) when
//! `is_token0_base` is true, or the inverse when the UI shows token1 as the
//! base. The raw pool price is the human pool-order price scaled by
//! `10^(decimals1 - decimals0)`.

use crate::tick_math::{max_usable_tick, min_usable_tick, round_half_up};
use num::{BigUint, FromPrimitive, ToPrimitive, Zero};
use tracing::debug;

/// 2^96 as a float
const Q96_F64: f64 = 79228162514264337593543950336.0;

fn decimal_factor(exponent: i32) -> f64 {
    10f64.powi(exponent)
}

fn is_positive(price: f64) -> bool {
    price.is_finite() && price > 0.0
}

/// Human price -> raw pool price (token1 per token0 in smallest units)
fn to_raw_price(price: f64, decimals0: u8, decimals1: u8, is_token0_base: bool) -> f64 {
    let pool_order = if is_token0_base { price } else { 1.0 / price };
    pool_order * decimal_factor(i32::from(decimals1) - i32::from(decimals0))
}

/// Raw pool price -> human price
fn from_raw_price(raw_price: f64, decimals0: u8, decimals1: u8, is_token0_base: bool) -> f64 {
    let pool_order = raw_price * decimal_factor(i32::from(decimals0) - i32::from(decimals1));
    if is_token0_base {
        pool_order
    } else if pool_order == 0.0 {
        0.0
    } else {
        1.0 / pool_order
    }
}

/// Convert a human price to the nearest tick aligned to `tick_spacing`.
///
/// A non-positive price yields tick 0. Callers that cannot accept that
/// default must validate the price first.
pub fn price_to_tick(
    price: f64,
    decimals0: u8,
    decimals1: u8,
    tick_spacing: i32,
    is_token0_base: bool,
) -> i32 {
    if !is_positive(price) {
        debug!(price, "non-positive price, falling back to tick 0");
        return 0;
    }

    let raw_price = to_raw_price(price, decimals0, decimals1, is_token0_base);
    let tick = raw_price.ln() / 1.0001f64.ln();

    let spacing = tick_spacing.max(1);
    let steps = round_half_up(tick / f64::from(spacing)).clamp(
        f64::from(min_usable_tick(spacing) / spacing),
        f64::from(max_usable_tick(spacing) / spacing),
    );
    steps as i32 * spacing
}

/// Convert a tick to a human price
pub fn tick_to_price(tick: i32, decimals0: u8, decimals1: u8, is_token0_base: bool) -> f64 {
    let raw_price = 1.0001f64.powf(f64::from(tick));
    from_raw_price(raw_price, decimals0, decimals1, is_token0_base)
}

/// Convert an arbitrary (not tick-aligned) human price to a sqrt price.
/// A non-positive price yields zero.
pub fn price_to_sqrt_price_x96(
    price: f64,
    decimals0: u8,
    decimals1: u8,
    is_token0_base: bool,
) -> BigUint {
    if !is_positive(price) {
        debug!(price, "non-positive price, falling back to zero sqrt price");
        return BigUint::zero();
    }

    let raw_price = to_raw_price(price, decimals0, decimals1, is_token0_base);
    BigUint::from_f64(raw_price.sqrt() * Q96_F64).unwrap_or_default()
}

/// Convert a sqrt price to a human price
pub fn sqrt_price_x96_to_price(
    sqrt_price_x96: &BigUint,
    decimals0: u8,
    decimals1: u8,
    is_token0_base: bool,
) -> f64 {
    let sqrt_price = sqrt_price_x96.to_f64().unwrap_or(f64::INFINITY) / Q96_F64;
    from_raw_price(sqrt_price * sqrt_price, decimals0, decimals1, is_token0_base)
}

/// Multiply a human amount by `10^decimals` into raw units, truncating.
/// Non-positive or non-finite amounts yield zero.
pub fn to_raw_amount(amount: f64, decimals: u8) -> BigUint {
    if !is_positive(amount) {
        return BigUint::zero();
    }
    BigUint::from_f64(amount * decimal_factor(i32::from(decimals))).unwrap_or_default()
}

/// Divide a raw amount by `10^decimals`
pub fn from_raw_amount(amount: &BigUint, decimals: u8) -> f64 {
    amount.to_f64().unwrap_or(f64::INFINITY) / decimal_factor(i32::from(decimals))
}
