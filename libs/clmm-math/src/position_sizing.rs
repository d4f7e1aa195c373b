//! Deposit sizing for a range.
//!
//! The integer (wei) calculators are authoritative; the float calculators
//! are a thin preview layer for values typed by a user and follow the same
//! range classification.

use crate::liquidity_math::{
    get_amount0_for_liquidity, get_amount1_for_liquidity, get_amounts_for_liquidity,
    get_liquidity_for_amount0, get_liquidity_for_amount1,
};
use crate::tick_math::get_sqrt_ratio_at_tick;
use clmm_types::{
    FloatAmounts, MathError, OptimalAmounts, PositionRange, PricePosition, RangeStatus,
    RequiredTokens, TokenAmounts,
};
use num::{BigUint, Zero};
use tracing::debug;

fn non_negative(value: f64) -> f64 {
    if value.is_finite() && value > 0.0 {
        value
    } else {
        0.0
    }
}

fn sort_prices(price_a: f64, price_b: f64) -> (f64, f64) {
    if price_a > price_b {
        (price_b, price_a)
    } else {
        (price_a, price_b)
    }
}

/// Which token(s) a deposit needs at `current_price`
pub fn get_required_tokens(
    current_price: f64,
    price_lower: f64,
    price_upper: f64,
) -> RequiredTokens {
    RequiredTokens::classify(&current_price, &price_lower, &price_upper)
}

/// token1 amount to pair with `amount0` for an in-range position.
/// Zero when the current price is outside the range.
pub fn calculate_amount1_from_amount0(
    amount0: f64,
    current_price: f64,
    price_lower: f64,
    price_upper: f64,
) -> f64 {
    let (price_lower, price_upper) = sort_prices(price_lower, price_upper);
    if RangeStatus::classify(&current_price, &price_lower, &price_upper) != RangeStatus::InRange {
        return 0.0;
    }

    let sqrt_price = current_price.sqrt();
    let sqrt_lower = price_lower.sqrt();
    let sqrt_upper = price_upper.sqrt();

    let liquidity = amount0 * sqrt_price * sqrt_upper / (sqrt_upper - sqrt_price);
    non_negative(liquidity * (sqrt_price - sqrt_lower))
}

/// token0 amount to pair with `amount1` for an in-range position.
/// Zero when the current price is outside the range.
pub fn calculate_amount0_from_amount1(
    amount1: f64,
    current_price: f64,
    price_lower: f64,
    price_upper: f64,
) -> f64 {
    let (price_lower, price_upper) = sort_prices(price_lower, price_upper);
    if RangeStatus::classify(&current_price, &price_lower, &price_upper) != RangeStatus::InRange {
        return 0.0;
    }

    let sqrt_price = current_price.sqrt();
    let sqrt_lower = price_lower.sqrt();
    let sqrt_upper = price_upper.sqrt();

    let liquidity = amount1 / (sqrt_price - sqrt_lower);
    non_negative(liquidity * (sqrt_upper - sqrt_price) / (sqrt_price * sqrt_upper))
}

/// Pair a user-entered amount of one token with the other token for a
/// price-based range. Returns zeros when the input token cannot be
/// deposited into this range at the current price.
pub fn calculate_optimal_amounts(
    input_amount: f64,
    input_is_token0: bool,
    position: &PricePosition,
) -> FloatAmounts {
    let input_amount = non_negative(input_amount);
    if input_amount == 0.0 {
        return FloatAmounts::zero();
    }

    let PricePosition {
        current_price,
        price_lower,
        price_upper,
    } = *position;
    let required = get_required_tokens(current_price, price_lower, price_upper);

    if required.is_single_sided {
        return match (input_is_token0, required.needs_token0) {
            (true, true) => FloatAmounts::new(input_amount, 0.0),
            (false, false) => FloatAmounts::new(0.0, input_amount),
            _ => {
                debug!(input_is_token0, "input token not usable for this range");
                FloatAmounts::zero()
            }
        };
    }

    if input_is_token0 {
        FloatAmounts::new(
            input_amount,
            calculate_amount1_from_amount0(input_amount, current_price, price_lower, price_upper),
        )
    } else {
        FloatAmounts::new(
            calculate_amount0_from_amount1(input_amount, current_price, price_lower, price_upper),
            input_amount,
        )
    }
}

/// Integer variant of [`calculate_optimal_amounts`] over raw amounts and
/// sqrt ratios, also returning the liquidity the deposit mints
pub fn calculate_optimal_amounts_wei(
    input_amount: &BigUint,
    input_is_token0: bool,
    sqrt_ratio_x96: &BigUint,
    sqrt_ratio_a_x96: &BigUint,
    sqrt_ratio_b_x96: &BigUint,
) -> OptimalAmounts {
    let (sqrt_ratio_lower, sqrt_ratio_upper) = if sqrt_ratio_a_x96 > sqrt_ratio_b_x96 {
        (sqrt_ratio_b_x96, sqrt_ratio_a_x96)
    } else {
        (sqrt_ratio_a_x96, sqrt_ratio_b_x96)
    };

    let status = RangeStatus::classify(sqrt_ratio_x96, sqrt_ratio_lower, sqrt_ratio_upper);
    match (status, input_is_token0) {
        (RangeStatus::BelowRange, true) => OptimalAmounts {
            amount0: input_amount.clone(),
            amount1: BigUint::zero(),
            liquidity: get_liquidity_for_amount0(sqrt_ratio_lower, sqrt_ratio_upper, input_amount),
        },
        (RangeStatus::AboveRange, false) => OptimalAmounts {
            amount0: BigUint::zero(),
            amount1: input_amount.clone(),
            liquidity: get_liquidity_for_amount1(sqrt_ratio_lower, sqrt_ratio_upper, input_amount),
        },
        (RangeStatus::InRange, true) => {
            let liquidity =
                get_liquidity_for_amount0(sqrt_ratio_x96, sqrt_ratio_upper, input_amount);
            OptimalAmounts {
                amount0: input_amount.clone(),
                amount1: get_amount1_for_liquidity(sqrt_ratio_lower, sqrt_ratio_x96, &liquidity),
                liquidity,
            }
        }
        (RangeStatus::InRange, false) => {
            let liquidity =
                get_liquidity_for_amount1(sqrt_ratio_lower, sqrt_ratio_x96, input_amount);
            OptimalAmounts {
                amount0: get_amount0_for_liquidity(sqrt_ratio_x96, sqrt_ratio_upper, &liquidity),
                amount1: input_amount.clone(),
                liquidity,
            }
        }
        (status, input_is_token0) => {
            debug!(?status, input_is_token0, "input token not usable for this range");
            OptimalAmounts::default()
        }
    }
}

/// Tick-based entry point: boundary sqrt ratios come from the range's ticks
pub fn calculate_optimal_amounts_for_ticks(
    input_amount: &BigUint,
    input_is_token0: bool,
    sqrt_ratio_x96: &BigUint,
    range: &PositionRange,
) -> Result<OptimalAmounts, MathError> {
    let sqrt_ratio_lower = get_sqrt_ratio_at_tick(range.tick_lower())?;
    let sqrt_ratio_upper = get_sqrt_ratio_at_tick(range.tick_upper())?;
    Ok(calculate_optimal_amounts_wei(
        input_amount,
        input_is_token0,
        sqrt_ratio_x96,
        &sqrt_ratio_lower,
        &sqrt_ratio_upper,
    ))
}

/// Token amounts a position of `liquidity` holds at the current sqrt price
pub fn get_amounts_for_position(
    range: &PositionRange,
    sqrt_ratio_x96: &BigUint,
    liquidity: &BigUint,
) -> Result<TokenAmounts, MathError> {
    let sqrt_ratio_lower = get_sqrt_ratio_at_tick(range.tick_lower())?;
    let sqrt_ratio_upper = get_sqrt_ratio_at_tick(range.tick_upper())?;
    Ok(get_amounts_for_liquidity(
        sqrt_ratio_x96,
        &sqrt_ratio_lower,
        &sqrt_ratio_upper,
        liquidity,
    ))
}

/// Where `sqrt_ratio_x96` sits relative to the range
pub fn range_status(
    sqrt_ratio_x96: &BigUint,
    range: &PositionRange,
) -> Result<RangeStatus, MathError> {
    let sqrt_ratio_lower = get_sqrt_ratio_at_tick(range.tick_lower())?;
    let sqrt_ratio_upper = get_sqrt_ratio_at_tick(range.tick_upper())?;
    Ok(RangeStatus::classify(
        sqrt_ratio_x96,
        &sqrt_ratio_lower,
        &sqrt_ratio_upper,
    ))
}
