use serde::{Deserialize, Serialize};

use super::factors::EmissionFactorTable;

/// Footprint engine configuration.
///
/// Bundles the emission factors, the sustainability-score rules and the
/// carbon-credit rate. Every section and field is optional in a config file;
/// anything left out keeps its standard value.
///
/// Example YAML:
/// ```yaml
/// footprint:
///   factors:
///     fertilizer: { synthetic: 4.5, organic: 0.8 }
///   score:
///     base: 50
///     drip_irrigation_bonus: 15
///   credit:
///     rate_per_ton: 400
/// ```
#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct FootprintConfig {
    pub factors: EmissionFactorTable,
    pub score: ScoreRules,
    pub credit: CreditRules,
}

/// Sustainability score: a base plus independent bonuses, clamped to 0-100.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct ScoreRules {
    /// Score before any bonus is applied
    pub base: i32,

    /// Organic share (percent of the category total) that earns a share bonus
    pub share_threshold_percent: f64,

    pub organic_fertilizer_share_bonus: i32,
    pub no_synthetic_fertilizer_bonus: i32,
    pub organic_pesticide_share_bonus: i32,
    pub no_chemical_pesticide_bonus: i32,
    pub drip_irrigation_bonus: i32,

    /// Number of crops grown at or above which the diversity bonus applies
    pub crop_diversity_threshold: u32,
    pub crop_diversity_bonus: i32,

    pub conservation_agriculture_bonus: i32,
    pub mulching_bonus: i32,
}

impl Default for ScoreRules {
    fn default() -> Self {
        Self {
            base: 50,
            share_threshold_percent: 50.0,
            organic_fertilizer_share_bonus: 10,
            no_synthetic_fertilizer_bonus: 5,
            organic_pesticide_share_bonus: 10,
            no_chemical_pesticide_bonus: 5,
            drip_irrigation_bonus: 15,
            crop_diversity_threshold: 3,
            crop_diversity_bonus: 10,
            conservation_agriculture_bonus: 10,
            mulching_bonus: 5,
        }
    }
}

/// Carbon-credit valuation.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct CreditRules {
    /// Notional value of one ton of CO2e reduction (currency-agnostic)
    pub rate_per_ton: f64,
}

impl Default for CreditRules {
    fn default() -> Self {
        Self { rate_per_ton: 400.0 }
    }
}
