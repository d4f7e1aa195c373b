use crate::tick_math::{max_usable_tick, min_usable_tick};
use clmm_types::{AprConfig, PositionRange, RangeApr};

/// How much a range concentrates liquidity relative to a full-range position:
/// sqrt(full_range_width / range_width), clamped to [1, max_multiplier]
pub fn concentration_multiplier(
    range: &PositionRange,
    tick_spacing: i32,
    config: &AprConfig,
) -> f64 {
    let full_range_width = f64::from(max_usable_tick(tick_spacing) - min_usable_tick(tick_spacing));
    let range_width = f64::from(range.width());

    let multiplier = (full_range_width / range_width).sqrt();
    multiplier.clamp(1.0, config.max_multiplier.max(1.0))
}

/// Scale an externally sourced base APR (percent) by the range concentration.
/// Negative or non-finite base APR is treated as zero.
pub fn estimate_range_apr(
    base_apr: f64,
    range: &PositionRange,
    current_tick: i32,
    tick_spacing: i32,
    config: &AprConfig,
) -> RangeApr {
    let base_apr = if base_apr.is_finite() && base_apr > 0.0 {
        base_apr
    } else {
        0.0
    };

    let multiplier = concentration_multiplier(range, tick_spacing, config);
    let in_range = range.contains(current_tick);
    let apr = if in_range {
        base_apr * multiplier
    } else {
        base_apr * multiplier * config.out_of_range_factor.max(0.0)
    };

    RangeApr {
        multiplier,
        apr,
        in_range,
    }
}
