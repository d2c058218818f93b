use super::types::UsageRecord;

/// Validate a usage record before it reaches the footprint engine.
/// Returns all validation errors at once (not just the first).
///
/// Unrecognized irrigation or transport values are not errors: the engine
/// resolves them to the factor table's defaults.
pub fn validate_record(record: &UsageRecord) -> Result<(), Vec<String>> {
    let mut errors = Vec::new();

    if !record.area_hectares.is_finite() || record.area_hectares <= 0.0 {
        errors.push(format!(
            "areaHectares: must be a positive number, got {}",
            record.area_hectares
        ));
    }

    if let Some(ref fertilizer) = record.fertilizer_usage {
        check_quantity(&mut errors, "fertilizerUsage.synthetic", fertilizer.synthetic);
        check_quantity(&mut errors, "fertilizerUsage.organic", fertilizer.organic);
    }

    if let Some(ref pesticide) = record.pesticide_usage {
        check_quantity(&mut errors, "pesticideUsage.chemical", pesticide.chemical);
        check_quantity(&mut errors, "pesticideUsage.organic", pesticide.organic);
    }

    if let Some(ref fuel) = record.fuel_usage {
        check_quantity(&mut errors, "fuelUsage.diesel", fuel.diesel);
        check_quantity(&mut errors, "fuelUsage.petrol", fuel.petrol);
        check_quantity(&mut errors, "fuelUsage.electricity", fuel.electricity);
    }

    check_quantity(&mut errors, "irrigationHours", record.irrigation_hours);

    if record.crop_diversity < 1 {
        errors.push("cropDiversity: must be at least 1".to_string());
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

fn check_quantity(errors: &mut Vec<String>, path: &str, value: Option<f64>) {
    if let Some(v) = value {
        if !v.is_finite() || v < 0.0 {
            errors.push(format!("{}: must be a non-negative number, got {}", path, v));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::{FertilizerUsage, FuelUsage, IrrigationType, PesticideUsage};

    #[test]
    fn test_valid_record() {
        let mut record = UsageRecord::new(2.0);
        record.fertilizer_usage = Some(FertilizerUsage {
            synthetic: Some(50.0),
            organic: Some(0.0),
        });
        record.irrigation_hours = Some(10.0);
        assert!(validate_record(&record).is_ok());
    }

    #[test]
    fn test_empty_record_is_valid() {
        assert!(validate_record(&UsageRecord::new(0.5)).is_ok());
    }

    #[test]
    fn test_zero_area_rejected() {
        let result = validate_record(&UsageRecord::new(0.0));
        let errors = result.unwrap_err();
        assert_eq!(errors.len(), 1);
        assert!(errors[0].contains("areaHectares"));
    }

    #[test]
    fn test_nan_area_rejected() {
        let errors = validate_record(&UsageRecord::new(f64::NAN)).unwrap_err();
        assert!(errors[0].contains("areaHectares"));
    }

    #[test]
    fn test_negative_quantity_rejected() {
        let mut record = UsageRecord::new(1.0);
        record.pesticide_usage = Some(PesticideUsage {
            chemical: Some(-1.0),
            organic: None,
        });
        let errors = validate_record(&record).unwrap_err();
        assert!(errors[0].contains("pesticideUsage.chemical"));
    }

    #[test]
    fn test_zero_crop_diversity_rejected() {
        let mut record = UsageRecord::new(1.0);
        record.crop_diversity = 0;
        let errors = validate_record(&record).unwrap_err();
        assert!(errors[0].contains("cropDiversity"));
    }

    #[test]
    fn test_unknown_irrigation_type_is_not_an_error() {
        let mut record = UsageRecord::new(1.0);
        record.irrigation_type = Some(IrrigationType::Other("canal".to_string()));
        assert!(validate_record(&record).is_ok());
    }

    #[test]
    fn test_collects_all_errors() {
        let mut record = UsageRecord::new(-3.0); // Error 1
        record.fuel_usage = Some(FuelUsage {
            diesel: Some(-2.0),            // Error 2
            petrol: Some(f64::INFINITY),   // Error 3
            electricity: None,
        });
        record.irrigation_hours = Some(-1.0); // Error 4
        let errors = validate_record(&record).unwrap_err();
        assert_eq!(errors.len(), 4);
    }
}
