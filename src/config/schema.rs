use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::footprint::FootprintConfig;

#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Emission factors, score rules and credit rate; missing parts keep standard values
    #[serde(default)]
    pub footprint: FootprintConfig,

    /// Where computed results are stored (defaults to ~/.config/swasth-khet/history.json)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub history_path: Option<PathBuf>,
}
