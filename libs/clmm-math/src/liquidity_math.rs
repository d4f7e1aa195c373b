use crate::full_math::mul_div;
use clmm_types::{RangeStatus, TokenAmounts, Q96};
use num::{BigUint, Zero};

fn sort_ratios<'a>(
    sqrt_ratio_a_x96: &'a BigUint,
    sqrt_ratio_b_x96: &'a BigUint,
) -> (&'a BigUint, &'a BigUint) {
    if sqrt_ratio_a_x96 > sqrt_ratio_b_x96 {
        (sqrt_ratio_b_x96, sqrt_ratio_a_x96)
    } else {
        (sqrt_ratio_a_x96, sqrt_ratio_b_x96)
    }
}

/// Calculate liquidity from token amounts for a price range
pub fn get_liquidity_for_amounts(
    sqrt_ratio_x96: &BigUint,
    sqrt_ratio_a_x96: &BigUint,
    sqrt_ratio_b_x96: &BigUint,
    amount0: &BigUint,
    amount1: &BigUint,
) -> BigUint {
    let (sqrt_ratio_lower, sqrt_ratio_upper) = sort_ratios(sqrt_ratio_a_x96, sqrt_ratio_b_x96);

    match RangeStatus::classify(sqrt_ratio_x96, sqrt_ratio_lower, sqrt_ratio_upper) {
        // Current price below range - all token0
        RangeStatus::BelowRange => {
            get_liquidity_for_amount0(sqrt_ratio_lower, sqrt_ratio_upper, amount0)
        }
        // Current price in range - the limiting token decides
        RangeStatus::InRange => {
            let liquidity0 = get_liquidity_for_amount0(sqrt_ratio_x96, sqrt_ratio_upper, amount0);
            let liquidity1 = get_liquidity_for_amount1(sqrt_ratio_lower, sqrt_ratio_x96, amount1);
            liquidity0.min(liquidity1)
        }
        // Current price above range - all token1
        RangeStatus::AboveRange => {
            get_liquidity_for_amount1(sqrt_ratio_lower, sqrt_ratio_upper, amount1)
        }
    }
}

/// Calculate liquidity from amount0
/// L = amount0 * sqrt_pa * sqrt_pb / (Q96 * (sqrt_pb - sqrt_pa))
pub fn get_liquidity_for_amount0(
    sqrt_ratio_a_x96: &BigUint,
    sqrt_ratio_b_x96: &BigUint,
    amount0: &BigUint,
) -> BigUint {
    let (sqrt_ratio_lower, sqrt_ratio_upper) = sort_ratios(sqrt_ratio_a_x96, sqrt_ratio_b_x96);

    let numerator = sqrt_ratio_lower * sqrt_ratio_upper;
    let denominator = &*Q96 * (sqrt_ratio_upper - sqrt_ratio_lower);
    mul_div(amount0, &numerator, &denominator)
}

/// Calculate liquidity from amount1
/// L = amount1 * Q96 / (sqrt_pb - sqrt_pa)
pub fn get_liquidity_for_amount1(
    sqrt_ratio_a_x96: &BigUint,
    sqrt_ratio_b_x96: &BigUint,
    amount1: &BigUint,
) -> BigUint {
    let (sqrt_ratio_lower, sqrt_ratio_upper) = sort_ratios(sqrt_ratio_a_x96, sqrt_ratio_b_x96);

    mul_div(amount1, &Q96, &(sqrt_ratio_upper - sqrt_ratio_lower))
}

/// Get amounts from liquidity for a price range.
/// Outside the range exactly one of the amounts is zero.
pub fn get_amounts_for_liquidity(
    sqrt_ratio_x96: &BigUint,
    sqrt_ratio_a_x96: &BigUint,
    sqrt_ratio_b_x96: &BigUint,
    liquidity: &BigUint,
) -> TokenAmounts {
    let (sqrt_ratio_lower, sqrt_ratio_upper) = sort_ratios(sqrt_ratio_a_x96, sqrt_ratio_b_x96);

    match RangeStatus::classify(sqrt_ratio_x96, sqrt_ratio_lower, sqrt_ratio_upper) {
        RangeStatus::BelowRange => TokenAmounts {
            amount0: get_amount0_for_liquidity(sqrt_ratio_lower, sqrt_ratio_upper, liquidity),
            amount1: BigUint::zero(),
        },
        RangeStatus::InRange => TokenAmounts {
            amount0: get_amount0_for_liquidity(sqrt_ratio_x96, sqrt_ratio_upper, liquidity),
            amount1: get_amount1_for_liquidity(sqrt_ratio_lower, sqrt_ratio_x96, liquidity),
        },
        RangeStatus::AboveRange => TokenAmounts {
            amount0: BigUint::zero(),
            amount1: get_amount1_for_liquidity(sqrt_ratio_lower, sqrt_ratio_upper, liquidity),
        },
    }
}

/// Calculate amount0 from liquidity
/// amount0 = L * Q96 * (sqrt_pb - sqrt_pa) / sqrt_pb / sqrt_pa
pub fn get_amount0_for_liquidity(
    sqrt_ratio_a_x96: &BigUint,
    sqrt_ratio_b_x96: &BigUint,
    liquidity: &BigUint,
) -> BigUint {
    let (sqrt_ratio_lower, sqrt_ratio_upper) = sort_ratios(sqrt_ratio_a_x96, sqrt_ratio_b_x96);

    if sqrt_ratio_lower.is_zero() {
        return BigUint::zero();
    }
    mul_div(
        &(liquidity << 96u32),
        &(sqrt_ratio_upper - sqrt_ratio_lower),
        sqrt_ratio_upper,
    ) / sqrt_ratio_lower
}

/// Calculate amount1 from liquidity
/// amount1 = L * (sqrt_pb - sqrt_pa) / Q96
pub fn get_amount1_for_liquidity(
    sqrt_ratio_a_x96: &BigUint,
    sqrt_ratio_b_x96: &BigUint,
    liquidity: &BigUint,
) -> BigUint {
    let (sqrt_ratio_lower, sqrt_ratio_upper) = sort_ratios(sqrt_ratio_a_x96, sqrt_ratio_b_x96);

    mul_div(liquidity, &(sqrt_ratio_upper - sqrt_ratio_lower), &Q96)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn q96_scaled(numerator: u32, denominator: u32) -> BigUint {
        &*Q96 * numerator / denominator
    }

    fn big(value: u128) -> BigUint {
        BigUint::from(value)
    }

    // === get_liquidity_for_amount0 / amount1 tests ===

    #[test]
    fn test_liquidity_for_amount0_roundtrip() {
        // sqrtA = 2^96 (price 1), sqrtB = 4 * 2^96 (price 16)
        let sqrt_a = Q96.clone();
        let sqrt_b = &*Q96 * 4u32;
        let amount0 = big(1_000_000_000_000_000_000);

        let liquidity = get_liquidity_for_amount0(&sqrt_a, &sqrt_b, &amount0);
        assert_eq!(liquidity, big(1_333_333_333_333_333_333));

        let recovered = get_amount0_for_liquidity(&sqrt_a, &sqrt_b, &liquidity);
        assert!(recovered <= amount0);
        assert!(&amount0 - &recovered <= big(1));
    }

    #[test]
    fn test_liquidity_for_amount1_roundtrip() {
        let sqrt_a = q96_scaled(9, 10);
        let sqrt_b = q96_scaled(11, 10);
        let amount1 = big(5_000_000);

        let liquidity = get_liquidity_for_amount1(&sqrt_a, &sqrt_b, &amount1);
        let recovered = get_amount1_for_liquidity(&sqrt_a, &sqrt_b, &liquidity);
        assert!(recovered <= amount1);
        assert!(&amount1 - &recovered <= big(1));
    }

    #[test]
    fn test_single_sided_formulas_order_independent() {
        let sqrt_a = q96_scaled(9, 10);
        let sqrt_b = q96_scaled(11, 10);
        let amount = big(1_000_000_000);

        assert_eq!(
            get_liquidity_for_amount0(&sqrt_a, &sqrt_b, &amount),
            get_liquidity_for_amount0(&sqrt_b, &sqrt_a, &amount)
        );
        assert_eq!(
            get_liquidity_for_amount1(&sqrt_a, &sqrt_b, &amount),
            get_liquidity_for_amount1(&sqrt_b, &sqrt_a, &amount)
        );
        assert_eq!(
            get_amount0_for_liquidity(&sqrt_a, &sqrt_b, &amount),
            get_amount0_for_liquidity(&sqrt_b, &sqrt_a, &amount)
        );
    }

    #[test]
    fn test_degenerate_bounds_yield_zero() {
        let sqrt = Q96.clone();
        let amount = big(1_000_000);
        assert!(get_liquidity_for_amount0(&sqrt, &sqrt, &amount).is_zero());
        assert!(get_liquidity_for_amount1(&sqrt, &sqrt, &amount).is_zero());
        assert!(get_amount0_for_liquidity(&BigUint::zero(), &sqrt, &amount).is_zero());
        assert!(get_amount1_for_liquidity(&sqrt, &sqrt, &amount).is_zero());
    }

    // === get_liquidity_for_amounts tests ===

    #[test]
    fn test_get_liquidity_for_amounts_in_range() {
        let liquidity = get_liquidity_for_amounts(
            &Q96,
            &q96_scaled(9, 10),
            &q96_scaled(11, 10),
            &big(1_000_000_000),
            &big(1_000_000_000),
        );
        assert!(liquidity > BigUint::zero());
    }

    #[test]
    fn test_get_liquidity_for_amounts_below_range() {
        // Current price below range - only token0 matters
        let sqrt_price = q96_scaled(8, 10);
        let sqrt_lower = q96_scaled(9, 10);
        let sqrt_upper = q96_scaled(11, 10);

        let liquidity = get_liquidity_for_amounts(
            &sqrt_price,
            &sqrt_lower,
            &sqrt_upper,
            &big(1_000_000_000),
            &big(0),
        );
        assert!(liquidity > BigUint::zero());

        let liquidity_with_token1 = get_liquidity_for_amounts(
            &sqrt_price,
            &sqrt_lower,
            &sqrt_upper,
            &big(1_000_000_000),
            &big(1_000_000_000),
        );
        assert_eq!(liquidity, liquidity_with_token1);
    }

    #[test]
    fn test_get_liquidity_for_amounts_above_range() {
        // Current price above range - only token1 matters
        let sqrt_price = q96_scaled(12, 10);
        let sqrt_lower = q96_scaled(9, 10);
        let sqrt_upper = q96_scaled(11, 10);

        let liquidity = get_liquidity_for_amounts(
            &sqrt_price,
            &sqrt_lower,
            &sqrt_upper,
            &big(0),
            &big(1_000_000_000),
        );
        assert!(liquidity > BigUint::zero());

        let liquidity_with_token0 = get_liquidity_for_amounts(
            &sqrt_price,
            &sqrt_lower,
            &sqrt_upper,
            &big(1_000_000_000),
            &big(1_000_000_000),
        );
        assert_eq!(liquidity, liquidity_with_token0);
    }

    #[test]
    fn test_get_liquidity_for_amounts_at_lower_boundary() {
        // Exactly at the lower bound counts as below range: token0 only
        let sqrt_lower = q96_scaled(9, 10);
        let sqrt_upper = q96_scaled(11, 10);

        let liquidity = get_liquidity_for_amounts(
            &sqrt_lower,
            &sqrt_lower,
            &sqrt_upper,
            &big(1_000_000_000),
            &big(0),
        );
        assert_eq!(
            liquidity,
            get_liquidity_for_amount0(&sqrt_lower, &sqrt_upper, &big(1_000_000_000))
        );
    }

    #[test]
    fn test_get_liquidity_for_amounts_at_upper_boundary() {
        // Exactly at the upper bound counts as above range: token1 only
        let sqrt_lower = q96_scaled(9, 10);
        let sqrt_upper = q96_scaled(11, 10);

        let liquidity = get_liquidity_for_amounts(
            &sqrt_upper,
            &sqrt_lower,
            &sqrt_upper,
            &big(0),
            &big(1_000_000_000),
        );
        assert_eq!(
            liquidity,
            get_liquidity_for_amount1(&sqrt_lower, &sqrt_upper, &big(1_000_000_000))
        );
    }

    #[test]
    fn test_get_liquidity_for_amounts_order_independent() {
        let sqrt_a = q96_scaled(9, 10);
        let sqrt_b = q96_scaled(11, 10);
        let amount = big(1_000_000_000);

        assert_eq!(
            get_liquidity_for_amounts(&Q96, &sqrt_a, &sqrt_b, &amount, &amount),
            get_liquidity_for_amounts(&Q96, &sqrt_b, &sqrt_a, &amount, &amount)
        );
    }

    #[test]
    fn test_get_liquidity_proportional() {
        let sqrt_lower = q96_scaled(9, 10);
        let sqrt_upper = q96_scaled(11, 10);

        let liquidity_1x = get_liquidity_for_amounts(
            &Q96,
            &sqrt_lower,
            &sqrt_upper,
            &big(1_000_000_000),
            &big(1_000_000_000),
        );
        let liquidity_2x = get_liquidity_for_amounts(
            &Q96,
            &sqrt_lower,
            &sqrt_upper,
            &big(2_000_000_000),
            &big(2_000_000_000),
        );

        // Should be proportional (allowing for rounding)
        let ratio = (&liquidity_2x * 100u32) / &liquidity_1x;
        assert!(ratio >= big(199) && ratio <= big(201), "Liquidity should be ~2x");
    }

    // === get_amounts_for_liquidity tests ===

    #[test]
    fn test_get_amounts_for_liquidity_in_range() {
        let amounts = get_amounts_for_liquidity(
            &Q96,
            &q96_scaled(9, 10),
            &q96_scaled(11, 10),
            &big(1_000_000_000_000),
        );
        assert!(amounts.amount0 > BigUint::zero(), "amount0 should be > 0 in range");
        assert!(amounts.amount1 > BigUint::zero(), "amount1 should be > 0 in range");
    }

    #[test]
    fn test_get_amounts_for_liquidity_below_range() {
        let amounts = get_amounts_for_liquidity(
            &q96_scaled(8, 10),
            &q96_scaled(9, 10),
            &q96_scaled(11, 10),
            &big(1_000_000_000_000),
        );
        assert!(amounts.amount0 > BigUint::zero());
        assert!(amounts.amount1.is_zero(), "amount1 should be 0 below range");
    }

    #[test]
    fn test_get_amounts_for_liquidity_above_range() {
        let amounts = get_amounts_for_liquidity(
            &q96_scaled(12, 10),
            &q96_scaled(9, 10),
            &q96_scaled(11, 10),
            &big(1_000_000_000_000),
        );
        assert!(amounts.amount0.is_zero(), "amount0 should be 0 above range");
        assert!(amounts.amount1 > BigUint::zero());
    }

    #[test]
    fn test_get_amounts_for_liquidity_zero_liquidity() {
        let amounts = get_amounts_for_liquidity(
            &Q96,
            &q96_scaled(9, 10),
            &q96_scaled(11, 10),
            &BigUint::zero(),
        );
        assert_eq!(amounts, TokenAmounts::default());
    }

    // === Roundtrip tests ===

    #[test]
    fn test_liquidity_amounts_roundtrip_above_range() {
        // Token1 math is just mul/div by Q96, so the roundtrip is tight
        let sqrt_price = q96_scaled(12, 10);
        let sqrt_lower = q96_scaled(9, 10);
        let sqrt_upper = q96_scaled(11, 10);
        let initial_liquidity = big(1_000_000_000_000_000);

        let amounts =
            get_amounts_for_liquidity(&sqrt_price, &sqrt_lower, &sqrt_upper, &initial_liquidity);
        assert!(amounts.amount0.is_zero());

        let recovered = get_liquidity_for_amounts(
            &sqrt_price,
            &sqrt_lower,
            &sqrt_upper,
            &amounts.amount0,
            &amounts.amount1,
        );
        assert!(recovered <= initial_liquidity);
        assert!(&initial_liquidity - &recovered <= big(10));
    }

    #[test]
    fn test_liquidity_amounts_consistency() {
        // Amounts from the recovered liquidity never exceed the originals
        let sqrt_price = Q96.clone();
        let sqrt_lower = q96_scaled(9, 10);
        let sqrt_upper = q96_scaled(11, 10);

        let amounts = get_amounts_for_liquidity(
            &sqrt_price,
            &sqrt_lower,
            &sqrt_upper,
            &big(1_000_000_000_000_000),
        );
        let recovered = get_liquidity_for_amounts(
            &sqrt_price,
            &sqrt_lower,
            &sqrt_upper,
            &amounts.amount0,
            &amounts.amount1,
        );
        assert!(recovered > BigUint::zero());

        let check = get_amounts_for_liquidity(&sqrt_price, &sqrt_lower, &sqrt_upper, &recovered);
        assert!(check.amount0 <= amounts.amount0);
        assert!(check.amount1 <= amounts.amount1);
    }

    #[test]
    fn test_wider_range_less_liquidity() {
        let amount = big(1_000_000_000_000);

        let liquidity_narrow = get_liquidity_for_amounts(
            &Q96,
            &q96_scaled(99, 100),
            &q96_scaled(101, 100),
            &amount,
            &amount,
        );
        let liquidity_wide = get_liquidity_for_amounts(
            &Q96,
            &q96_scaled(8, 10),
            &q96_scaled(12, 10),
            &amount,
            &amount,
        );

        // Narrow range should provide more liquidity for same capital
        assert!(liquidity_narrow > liquidity_wide);
    }

    #[test]
    fn test_large_amounts_do_not_overflow() {
        // 10^40 raw units against near-maximum sqrt ratios
        let amount = BigUint::from(10u32).pow(40);
        let sqrt_lower = BigUint::from(1u8) << 150u32;
        let sqrt_upper = BigUint::from(1u8) << 159u32;

        let liquidity = get_liquidity_for_amount0(&sqrt_lower, &sqrt_upper, &amount);
        let recovered = get_amount0_for_liquidity(&sqrt_lower, &sqrt_upper, &liquidity);
        assert!(recovered <= amount);
        assert!(recovered > &amount / 2u32);
    }
}
