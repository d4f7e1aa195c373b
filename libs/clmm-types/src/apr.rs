use serde::{Deserialize, Serialize};

/// Canonical knobs for range-adjusted APR estimates
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct AprConfig {
    /// Upper clamp for the concentration multiplier (lower clamp is 1)
    pub max_multiplier: f64,
    /// Factor applied to the APR while the current tick is outside the range
    pub out_of_range_factor: f64,
}

impl Default for AprConfig {
    fn default() -> Self {
        Self {
            max_multiplier: 500.0,
            out_of_range_factor: 0.5,
        }
    }
}

/// Result of a range-adjusted APR estimate
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct RangeApr {
    pub multiplier: f64,
    pub apr: f64,
    pub in_range: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_apr_config_partial_override() {
        let config: AprConfig = serde_json::from_str(r#"{"maxMultiplier": 1000}"#).unwrap();
        assert_eq!(config.max_multiplier, 1000.0);
        assert_eq!(config.out_of_range_factor, 0.5);
    }

    #[test]
    fn test_apr_config_empty_is_default() {
        let config: AprConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config, AprConfig::default());
    }
}
