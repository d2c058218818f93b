use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

use super::types::UsageRecord;

/// Read a usage record from disk: JSON for `.json` files, YAML otherwise.
pub fn load_record(path: &Path) -> Result<UsageRecord> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read record file at {}", path.display()))?;

    let is_json = path
        .extension()
        .map(|ext| ext.eq_ignore_ascii_case("json"))
        .unwrap_or(false);

    if is_json {
        serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse record: invalid JSON in {}", path.display()))
    } else {
        serde_saphyr::from_str(&content)
            .with_context(|| format!("Failed to parse record: invalid YAML in {}", path.display()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::IrrigationType;
    use std::env;

    #[test]
    fn test_load_json_record() {
        let path = env::temp_dir().join("swasth_khet_test_record.json");
        fs::write(
            &path,
            r#"{"areaHectares": 1.5, "irrigationType": "drip", "irrigationHours": 12}"#,
        )
        .unwrap();

        let record = load_record(&path).unwrap();
        assert_eq!(record.area_hectares, 1.5);
        assert_eq!(record.irrigation_type, Some(IrrigationType::Drip));
        assert_eq!(record.irrigation_hours(), 12.0);

        let _ = fs::remove_file(&path);
    }

    #[test]
    fn test_load_yaml_record() {
        let path = env::temp_dir().join("swasth_khet_test_record.yaml");
        fs::write(&path, "areaHectares: 3\nmulching: true\n").unwrap();

        let record = load_record(&path).unwrap();
        assert_eq!(record.area_hectares, 3.0);
        assert!(record.mulching);

        let _ = fs::remove_file(&path);
    }

    #[test]
    fn test_load_missing_record_fails() {
        let path = env::temp_dir().join("swasth_khet_test_record_missing.yaml");
        let _ = fs::remove_file(&path);
        assert!(load_record(&path).is_err());
    }

    #[test]
    fn test_load_record_missing_area_fails() {
        let path = env::temp_dir().join("swasth_khet_test_record_no_area.json");
        fs::write(&path, r#"{"mulching": true}"#).unwrap();
        assert!(load_record(&path).is_err());
        let _ = fs::remove_file(&path);
    }
}
