pub mod init;
mod schema;

pub use init::run_init;
pub use schema::Config;

use anyhow::{Context, Result};
use std::fs;
use std::path::PathBuf;
use tracing::debug;

/// Get the config directory path (~/.config/swasth-khet/)
pub fn get_config_dir() -> Result<PathBuf> {
    let home = dirs::home_dir().context("Could not determine home directory")?;
    Ok(home.join(".config").join("swasth-khet"))
}

/// Get the default config file path (~/.config/swasth-khet/config.yaml)
pub fn get_config_path() -> Result<PathBuf> {
    Ok(get_config_dir()?.join("config.yaml"))
}

/// Load configuration from a YAML file
///
/// # Arguments
///
/// * `path` - Optional path to config file. If None, uses default path (~/.config/swasth-khet/config.yaml)
///
/// A missing file at the default path yields the standard configuration.
///
/// # Errors
///
/// Returns an error if:
/// - An explicitly given config file does not exist
/// - The config file cannot be read
/// - The YAML cannot be parsed
pub fn load_config(path: Option<PathBuf>) -> Result<Config> {
    let explicit = path.is_some();
    let config_path = match path {
        Some(p) => p,
        None => get_config_path()?,
    };

    if !config_path.exists() {
        if explicit {
            anyhow::bail!("Config file not found at {}", config_path.display());
        }
        debug!(
            path = %config_path.display(),
            "No config file, using standard emission factors"
        );
        return Ok(Config::default());
    }

    let config_content = fs::read_to_string(&config_path)
        .with_context(|| format!("Failed to read config file at {}", config_path.display()))?;

    let config: Config = serde_saphyr::from_str(&config_content).with_context(|| {
        format!("Failed to parse config: invalid YAML in {}", config_path.display())
    })?;

    debug!(path = %config_path.display(), "Loaded config");
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;

    #[test]
    fn test_load_explicit_missing_file_fails() {
        let temp_path = env::temp_dir().join("swasth_khet_test_missing_config.yaml");
        let _ = fs::remove_file(&temp_path);

        let result = load_config(Some(temp_path));
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("not found"));
    }

    #[test]
    fn test_load_config_from_file() {
        let temp_path = env::temp_dir().join("swasth_khet_test_load_config.yaml");
        fs::write(&temp_path, "footprint:\n  score:\n    base: 45\n").unwrap();

        let config = load_config(Some(temp_path.clone())).unwrap();
        assert_eq!(config.footprint.score.base, 45);
        assert_eq!(config.footprint.score.mulching_bonus, 5);

        let _ = fs::remove_file(&temp_path);
    }

    #[test]
    fn test_load_invalid_yaml_fails() {
        let temp_path = env::temp_dir().join("swasth_khet_test_invalid_config.yaml");
        fs::write(&temp_path, "footprint: [unclosed\n").unwrap();

        let result = load_config(Some(temp_path.clone()));
        assert!(result.is_err());

        let _ = fs::remove_file(&temp_path);
    }
}
