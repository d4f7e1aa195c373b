use clmm_types::{MathError, MAX_SQRT_RATIO, MAX_TICK, MIN_SQRT_RATIO, MIN_TICK};
use num::{BigUint, One, ToPrimitive};
use std::f64::consts::LN_2;
use std::sync::LazyLock;
use tracing::trace;

/// sqrt(1.0001^-1) in Q128, used when bit 0 of |tick| is set
const SQRT_1_0001_NEG_1: u128 = 0xfffcb933bd6fad37aa2d162d1a594001;

/// sqrt(1.0001^-(2^i)) in Q128 for bits 1..=19 of |tick|
const TICK_MULTIPLIERS: [u128; 19] = [
    0xfff97272373d413259a46990580e213a, // 2^1
    0xfff2e50f5f656932ef12357cf3c7fdcc, // 2^2
    0xffe5caca7e10e4e61c3624eaa0941cd0, // 2^3
    0xffcb9843d60f6159c9db58835c926644, // 2^4
    0xff973b41fa98c081472e6896dfb254c0, // 2^5
    0xff2ea16466c96a3843ec78b326b52861, // 2^6
    0xfe5dee046a99a2a811c461f1969c3053, // 2^7
    0xfcbe86c7900a88aedcffc83b479aa3a4, // 2^8
    0xf987a7253ac413176f2b074cf7815e54, // 2^9
    0xf3392b0822b70005940c7a398e4b70f3, // 2^10
    0xe7159475a2c29b7443b29c7fa6e889d9, // 2^11
    0xd097f3bdfd2022b8845ad8f792aa5825, // 2^12
    0xa9f746462d870fdf8a65dc1f90e061e5, // 2^13
    0x70d869a156d2a1b890bb3df62baf32f7, // 2^14
    0x31be135f97d08fd981231505542fcfa6, // 2^15
    0x9aa508b5b7a84e1c677de54f3e99bc9,  // 2^16
    0x5d6af8dedb81196699c329225ee604,   // 2^17
    0x2216e584f5fa1ea926041bedfe98,     // 2^18
    0x48a170391f7dc42444e8fa2,          // 2^19
];

// 2^256 - 1, the uint256 numerator used to invert the ratio for positive ticks
static U256_MAX: LazyLock<BigUint> = LazyLock::new(|| (BigUint::one() << 256u32) - 1u32);

/// Calculate sqrt(1.0001^tick) * 2^96
/// Bit-exact with the on-chain TickMath.getSqrtRatioAtTick
pub fn get_sqrt_ratio_at_tick(tick: i32) -> Result<BigUint, MathError> {
    if !(MIN_TICK..=MAX_TICK).contains(&tick) {
        trace!(tick, "tick out of bounds");
        return Err(MathError::TickOutOfBounds(tick));
    }

    let abs_tick = tick.unsigned_abs();

    // Q128.128 ratio for -|tick|
    let mut ratio = if abs_tick & 0x1 != 0 {
        BigUint::from(SQRT_1_0001_NEG_1)
    } else {
        BigUint::one() << 128u32
    };
    for (bit, multiplier) in TICK_MULTIPLIERS.iter().enumerate() {
        if abs_tick & (0x2 << bit) != 0 {
            ratio = (ratio * *multiplier) >> 128u32;
        }
    }

    if tick > 0 {
        ratio = &*U256_MAX / ratio;
    }

    // Q128.128 -> Q64.96, rounding up so that get_tick_at_sqrt_ratio inverts exactly
    let sqrt_price_x96 = &ratio >> 32u32;
    if (&sqrt_price_x96 << 32u32) == ratio {
        Ok(sqrt_price_x96)
    } else {
        Ok(sqrt_price_x96 + 1u32)
    }
}

/// Get the greatest tick whose sqrt ratio does not exceed `sqrt_price_x96`
pub fn get_tick_at_sqrt_ratio(sqrt_price_x96: &BigUint) -> Result<i32, MathError> {
    if sqrt_price_x96 < &*MIN_SQRT_RATIO || sqrt_price_x96 >= &*MAX_SQRT_RATIO {
        trace!(%sqrt_price_x96, "sqrt price out of bounds");
        return Err(MathError::SqrtRatioOutOfBounds(sqrt_price_x96.clone()));
    }

    // Float estimate: tick = floor(2 * ln(sqrt_price) / ln(1.0001))
    let ln_sqrt_price = sqrt_price_x96.to_f64().map_or(f64::MAX, f64::ln) - 96.0 * LN_2;
    let estimate = (2.0 * ln_sqrt_price / 1.0001f64.ln()).floor();
    let mut tick = estimate.clamp(MIN_TICK as f64, MAX_TICK as f64) as i32;

    // Correct the float estimate against the exact ratios
    while tick > MIN_TICK && get_sqrt_ratio_at_tick(tick)? > *sqrt_price_x96 {
        tick -= 1;
    }
    while tick < MAX_TICK && get_sqrt_ratio_at_tick(tick + 1)? <= *sqrt_price_x96 {
        tick += 1;
    }

    Ok(tick)
}

/// Round half toward positive infinity, so -1.5 becomes -1
pub(crate) fn round_half_up(value: f64) -> f64 {
    (value + 0.5).floor()
}

/// Round `tick` to the nearest multiple of `tick_spacing` that is a usable
/// position bound. Inputs outside the tick bounds are clamped first.
pub fn nearest_usable_tick(tick: i32, tick_spacing: i32) -> i32 {
    let spacing = tick_spacing.max(1);
    let tick = tick.clamp(MIN_TICK, MAX_TICK);
    let steps = round_half_up(f64::from(tick) / f64::from(spacing)) as i32;
    steps.clamp(min_usable_tick(spacing) / spacing, max_usable_tick(spacing) / spacing) * spacing
}

/// Lowest tick usable as a position bound for `tick_spacing`
pub fn min_usable_tick(tick_spacing: i32) -> i32 {
    let spacing = tick_spacing.max(1);
    (MIN_TICK / spacing) * spacing
}

/// Highest tick usable as a position bound for `tick_spacing`
pub fn max_usable_tick(tick_spacing: i32) -> i32 {
    let spacing = tick_spacing.max(1);
    (MAX_TICK / spacing) * spacing
}
