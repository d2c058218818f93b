use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::footprint::ScoreResult;
use crate::record::UsageRecord;

pub const HISTORY_VERSION: u32 = 1;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HistoryState {
    pub version: u32,
    #[serde(default)]
    pub entries: Vec<HistoryEntry>,
}

/// One saved calculation: the input record and what the engine made of it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HistoryEntry {
    pub farm: String,
    pub computed_at: DateTime<Utc>,
    pub record: UsageRecord,
    pub result: ScoreResult,
}

impl HistoryEntry {
    pub fn age(&self) -> chrono::Duration {
        Utc::now() - self.computed_at
    }
}

impl Default for HistoryState {
    fn default() -> Self {
        Self::new()
    }
}

impl HistoryState {
    /// Create a new empty history with the current version
    pub fn new() -> Self {
        Self {
            version: HISTORY_VERSION,
            entries: Vec::new(),
        }
    }

    /// Append a result computed now for `farm`
    pub fn record(&mut self, farm: String, record: UsageRecord, result: ScoreResult) {
        self.entries.push(HistoryEntry {
            farm,
            computed_at: Utc::now(),
            record,
            result,
        });
    }

    /// Entries for a farm (case-insensitive), oldest first
    pub fn entries_for(&self, farm: &str) -> Vec<&HistoryEntry> {
        self.entries
            .iter()
            .filter(|e| e.farm.eq_ignore_ascii_case(farm))
            .collect()
    }

    /// Most recently computed entry for a farm
    pub fn latest_for(&self, farm: &str) -> Option<&HistoryEntry> {
        self.entries
            .iter()
            .filter(|e| e.farm.eq_ignore_ascii_case(farm))
            .max_by_key(|e| e.computed_at)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::footprint::{calculate_footprint, FootprintConfig};
    use chrono::Duration;

    fn sample_result() -> (UsageRecord, ScoreResult) {
        let record = UsageRecord::new(1.5);
        let result = calculate_footprint(&record, &FootprintConfig::default());
        (record, result)
    }

    #[test]
    fn test_new_state_empty() {
        let state = HistoryState::new();
        assert_eq!(state.version, 1);
        assert!(state.entries.is_empty());
    }

    #[test]
    fn test_record_appends() {
        let mut state = HistoryState::new();
        let (record, result) = sample_result();
        state.record("North Field".to_string(), record, result);
        assert_eq!(state.entries.len(), 1);
        assert_eq!(state.entries[0].farm, "North Field");
        assert!(state.entries[0].age() < Duration::minutes(1));
    }

    #[test]
    fn test_entries_for_is_case_insensitive() {
        let mut state = HistoryState::new();
        let (record, result) = sample_result();
        state.record("North Field".to_string(), record.clone(), result.clone());
        state.record("south field".to_string(), record.clone(), result.clone());
        state.record("NORTH FIELD".to_string(), record, result);

        assert_eq!(state.entries_for("north field").len(), 2);
        assert_eq!(state.entries_for("South Field").len(), 1);
        assert!(state.entries_for("east").is_empty());
    }

    #[test]
    fn test_latest_for() {
        let mut state = HistoryState::new();
        let (record, result) = sample_result();
        state.record("plot-7".to_string(), record.clone(), result.clone());
        state.record("plot-7".to_string(), record, result);
        state.entries[0].computed_at = Utc::now() - Duration::days(3);

        let latest = state.latest_for("plot-7").unwrap();
        assert!(latest.age() < Duration::minutes(1));
        assert!(state.latest_for("plot-8").is_none());
    }
}
