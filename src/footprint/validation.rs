use super::config::FootprintConfig;

/// Validate footprint configuration at startup.
/// Returns all validation errors at once (not just the first).
pub fn validate_config(config: &FootprintConfig) -> Result<(), Vec<String>> {
    let mut errors = Vec::new();

    // Every emission factor must be a usable non-negative number
    for entry in config.factors.entries() {
        if !entry.factor.is_finite() || entry.factor < 0.0 {
            errors.push(format!(
                "footprint.factors.{}.{}: must be a non-negative number, got {}",
                entry.category, entry.subtype, entry.factor
            ));
        }
    }

    let score = &config.score;
    if !(0..=100).contains(&score.base) {
        errors.push(format!(
            "footprint.score.base: must be between 0 and 100, got {}",
            score.base
        ));
    }

    for (name, points) in [
        ("organic_fertilizer_share_bonus", score.organic_fertilizer_share_bonus),
        ("no_synthetic_fertilizer_bonus", score.no_synthetic_fertilizer_bonus),
        ("organic_pesticide_share_bonus", score.organic_pesticide_share_bonus),
        ("no_chemical_pesticide_bonus", score.no_chemical_pesticide_bonus),
        ("drip_irrigation_bonus", score.drip_irrigation_bonus),
        ("crop_diversity_bonus", score.crop_diversity_bonus),
        ("conservation_agriculture_bonus", score.conservation_agriculture_bonus),
        ("mulching_bonus", score.mulching_bonus),
    ] {
        if !(-100..=100).contains(&points) {
            errors.push(format!(
                "footprint.score.{}: must be between -100 and 100, got {}",
                name, points
            ));
        }
    }

    if !(0.0..=100.0).contains(&score.share_threshold_percent) {
        errors.push(format!(
            "footprint.score.share_threshold_percent: must be between 0 and 100, got {}",
            score.share_threshold_percent
        ));
    }

    if score.crop_diversity_threshold < 1 {
        errors.push("footprint.score.crop_diversity_threshold: must be at least 1".to_string());
    }

    let rate = config.credit.rate_per_ton;
    if !rate.is_finite() || rate < 0.0 {
        errors.push(format!(
            "footprint.credit.rate_per_ton: must be a non-negative number, got {}",
            rate
        ));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
