use serde::{Deserialize, Serialize};

use super::config::{CreditRules, FootprintConfig, ScoreRules};
use super::factors::EmissionFactorTable;
use super::recommendations::{generate_recommendations, Recommendation};
use crate::record::UsageRecord;

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreditPotential {
    pub reduction_tons: f64,
    pub value_estimate: f64,
}

/// Everything one footprint calculation produces.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoreResult {
    /// kg CO2e under current practices
    pub baseline_footprint: f64,
    /// kg CO2e of the organic/efficient channels only
    pub ecofriendly_footprint: f64,
    pub reduction_percent: i64,
    pub sustainability_score: u32,
    pub recommendations: Vec<Recommendation>,
    pub credit_potential: CreditPotential,
}

#[derive(Debug, Clone, PartialEq)]
pub struct BonusContribution {
    pub label: String, // e.g. "Drip irrigation"
    pub points: i32,
}

/// How a sustainability score was assembled, before clamping.
#[derive(Debug, Clone, PartialEq)]
pub struct ScoreBreakdown {
    pub base: i32,
    pub bonuses: Vec<BonusContribution>,
}

impl ScoreBreakdown {
    pub fn raw_total(&self) -> i32 {
        self.bonuses
            .iter()
            .map(|b| b.points)
            .fold(self.base, i32::saturating_add)
    }

    pub fn clamped_total(&self) -> u32 {
        self.raw_total().clamp(0, 100) as u32
    }
}

/// Round to 2 decimals, halves away from zero.
///
/// Each engine operation sums unrounded terms and rounds once at the end.
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// kg CO2e under the farm's current practices.
pub fn compute_baseline_footprint(record: &UsageRecord, factors: &EmissionFactorTable) -> f64 {
    let fertilizer = record.synthetic_fertilizer() * factors.fertilizer.synthetic;
    let pesticide = record.chemical_pesticide() * factors.pesticide.chemical;
    let fuel = record.diesel() * factors.fuel.diesel;
    let irrigation =
        record.irrigation_load() * factors.irrigation_factor(record.irrigation_type.as_ref());

    round2(fertilizer + pesticide + fuel + irrigation)
}

/// kg CO2e of the organic and efficient channels the farm already uses.
pub fn compute_ecofriendly_footprint(record: &UsageRecord, factors: &EmissionFactorTable) -> f64 {
    let fertilizer = record.organic_fertilizer() * factors.fertilizer.organic;
    let pesticide = record.organic_pesticide() * factors.pesticide.organic;
    let irrigation = if record.uses_drip() {
        record.irrigation_load() * factors.irrigation.drip
    } else {
        0.0
    };

    round2(fertilizer + pesticide + irrigation)
}

/// Percentage reduction of `eco` relative to `baseline`, 0 when there is no baseline.
pub fn compute_reduction(baseline: f64, eco: f64) -> i64 {
    if baseline == 0.0 {
        return 0;
    }
    (((baseline - eco) / baseline) * 100.0).round() as i64
}

pub fn score_breakdown(record: &UsageRecord, rules: &ScoreRules) -> ScoreBreakdown {
    let mut bonuses = Vec::new();
    let mut award = |applies: bool, label: &str, points: i32| {
        if applies {
            bonuses.push(BonusContribution {
                label: label.to_string(),
                points,
            });
        }
    };

    let synthetic = record.synthetic_fertilizer();
    let chemical = record.chemical_pesticide();

    award(
        meets_share(record.organic_fertilizer(), synthetic, rules.share_threshold_percent),
        "Organic fertilizer share",
        rules.organic_fertilizer_share_bonus,
    );
    award(
        synthetic == 0.0,
        "No synthetic fertilizer",
        rules.no_synthetic_fertilizer_bonus,
    );
    award(
        meets_share(record.organic_pesticide(), chemical, rules.share_threshold_percent),
        "Organic pesticide share",
        rules.organic_pesticide_share_bonus,
    );
    award(
        chemical == 0.0,
        "No chemical pesticide",
        rules.no_chemical_pesticide_bonus,
    );
    award(record.uses_drip(), "Drip irrigation", rules.drip_irrigation_bonus);
    award(
        record.crop_diversity >= rules.crop_diversity_threshold,
        "Crop diversity",
        rules.crop_diversity_bonus,
    );
    award(
        record.conservation_agriculture,
        "Conservation agriculture",
        rules.conservation_agriculture_bonus,
    );
    award(record.mulching, "Mulching", rules.mulching_bonus);

    ScoreBreakdown {
        base: rules.base,
        bonuses,
    }
}

/// Organic share of a category is undefined (and earns nothing) when the category is unused.
fn meets_share(organic: f64, conventional: f64, threshold_percent: f64) -> bool {
    let total = organic + conventional;
    total > 0.0 && organic / total * 100.0 >= threshold_percent
}

/// 0-100 sustainability index: base plus independent bonuses, clamped.
pub fn compute_sustainability_score(record: &UsageRecord, rules: &ScoreRules) -> u32 {
    score_breakdown(record, rules).clamped_total()
}

pub fn compute_carbon_credit_potential(reduction_kg: f64, credit: &CreditRules) -> CreditPotential {
    let tons = reduction_kg / 1000.0;
    CreditPotential {
        reduction_tons: round2(tons),
        value_estimate: round2(tons * credit.rate_per_ton),
    }
}

pub fn calculate_footprint(record: &UsageRecord, config: &FootprintConfig) -> ScoreResult {
    let baseline = compute_baseline_footprint(record, &config.factors);
    let eco = compute_ecofriendly_footprint(record, &config.factors);

    // Policy: a negative reduction earns no credit. The credit
    // computation itself stays linear.
    let reduction_kg = (baseline - eco).max(0.0);

    ScoreResult {
        baseline_footprint: baseline,
        ecofriendly_footprint: eco,
        reduction_percent: compute_reduction(baseline, eco),
        sustainability_score: compute_sustainability_score(record, &config.score),
        recommendations: generate_recommendations(record, &config.factors),
        credit_potential: compute_carbon_credit_potential(reduction_kg, &config.credit),
    }
}
