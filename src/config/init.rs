use anyhow::{Context, Result};
use std::io::{BufRead, Write};
use std::path::{Path, PathBuf};
use tracing::info;

use crate::config::{get_config_path, Config};

/// Prompt user with a message and return their trimmed input.
fn prompt(message: &str) -> Result<String> {
    print!("{}", message);
    std::io::stdout()
        .flush()
        .context("Failed to flush stdout")?;
    let mut input = String::new();
    std::io::stdin()
        .lock()
        .read_line(&mut input)
        .context("Failed to read input")?;
    Ok(input.trim().to_string())
}

/// Prompt user with a yes/no question. Returns bool based on input and default.
fn prompt_yes_no(message: &str, default_yes: bool) -> Result<bool> {
    let hint = if default_yes { "Y/n" } else { "y/N" };
    let input = prompt(&format!("{} [{}]: ", message, hint))?;
    Ok(parse_yes_no(&input, default_yes))
}

fn parse_yes_no(input: &str, default_yes: bool) -> bool {
    let input = input.trim().to_lowercase();
    if input.is_empty() {
        default_yes
    } else {
        input == "y" || input == "yes"
    }
}

/// YAML for the standard configuration, every factor and rule spelled out.
pub fn render_default_config() -> Result<String> {
    let header = "# Swasth Khet footprint configuration.\n\
                  # Factors are kg CO2e per unit; remove any entry to use its standard value.\n";
    let yaml = serde_saphyr::to_string(&Config::default())
        .map_err(|e| anyhow::anyhow!("Failed to serialize config: {}", e))?;
    Ok(format!("{}{}", header, yaml))
}

/// Write the standard configuration to `path`, creating parent directories.
pub fn write_default_config(path: &Path) -> Result<()> {
    let yaml = render_default_config()?;

    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory {}", parent.display()))?;
    }

    std::fs::write(path, &yaml)
        .with_context(|| format!("Failed to write config to {}", path.display()))?;
    Ok(())
}

/// Create a config file holding the standard configuration.
///
/// If `path` is None, uses the default config path. An existing file is only
/// replaced with `force` or after the user confirms.
pub fn run_init(path: Option<PathBuf>, force: bool) -> Result<()> {
    let config_path = match path {
        Some(p) => p,
        None => get_config_path()?,
    };

    if config_path.exists() && !force {
        let overwrite = prompt_yes_no(
            &format!(
                "Config already exists at {}. Overwrite?",
                config_path.display()
            ),
            false,
        )?;
        if !overwrite {
            println!("Aborted.");
            return Ok(());
        }
    }

    write_default_config(&config_path)?;
    info!(path = %config_path.display(), "Wrote default config");

    println!("Config written to {}", config_path.display());
    println!("Edit emission factors, score rules or the credit rate there, then run `swasth-khet score <record>`.");

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;

    #[test]
    fn test_parse_yes_no() {
        assert!(parse_yes_no("", true));
        assert!(!parse_yes_no("", false));
        assert!(parse_yes_no("Y", false));
        assert!(parse_yes_no("yes", false));
        assert!(!parse_yes_no("nope", true));
    }

    #[test]
    fn test_default_config_parses_back() {
        let yaml = render_default_config().unwrap();
        assert!(yaml.starts_with("# Swasth Khet"));
        let parsed: Config = serde_saphyr::from_str(&yaml).unwrap();
        assert_eq!(parsed, Config::default());
    }

    #[test]
    fn test_run_init_force_writes_file() {
        let dir = env::temp_dir().join("swasth_khet_test_init");
        let path = dir.join("config.yaml");
        let _ = std::fs::remove_dir_all(&dir);

        run_init(Some(path.clone()), true).unwrap();
        let loaded = crate::config::load_config(Some(path)).unwrap();
        assert_eq!(loaded, Config::default());

        let _ = std::fs::remove_dir_all(&dir);
    }
}
