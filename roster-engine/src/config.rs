use std::collections::HashMap;
use std::path::Path;

use chrono::Weekday;
use serde::Deserialize;

use crate::domain::types::DayRolePriorities;

/// One fill-order override: on `weekday`, attempt `role_id` at the given
/// priority (lower fills first).
#[derive(Debug, Clone, Deserialize)]
pub struct DayRolePriority {
    pub weekday: Weekday,
    pub role_id: i32,
    pub priority: i32,
}

/// File-backed engine configuration.
///
/// ```toml
/// [[day_role_priorities]]
/// weekday = "Sun"
/// role_id = 2
/// priority = 1
/// ```
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct RosterConfig {
    pub day_role_priorities: Vec<DayRolePriority>,
}

impl RosterConfig {
    pub fn load(path: &str) -> Result<Self, Box<dyn std::error::Error>> {
        if !Path::new(path).exists() {
            tracing::info!("Config file not found at {path}, using defaults");
            return Ok(Self::default());
        }
        let content = std::fs::read_to_string(path)?;
        let config: Self = toml::from_str(&content)?;
        tracing::info!(?config, "Loaded roster config from {path}");
        Ok(config)
    }

    /// Folds the override entries into the map the engine consumes. A later
    /// entry for the same (weekday, role) overwrites an earlier one.
    pub fn day_role_priorities(&self) -> DayRolePriorities {
        let mut priorities = DayRolePriorities::new();
        for entry in &self.day_role_priorities {
            priorities
                .entry(entry.weekday)
                .or_insert_with(HashMap::new)
                .insert(entry.role_id, entry.priority);
        }
        priorities
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_falls_back_to_defaults() {
        let config = RosterConfig::load("/nonexistent/roster.toml").unwrap();
        assert!(config.day_role_priorities.is_empty());
        assert!(config.day_role_priorities().is_empty());
    }

    #[test]
    fn parses_priority_entries_from_toml() {
        let config: RosterConfig = toml::from_str(
            r#"
            [[day_role_priorities]]
            weekday = "Sun"
            role_id = 2
            priority = 1

            [[day_role_priorities]]
            weekday = "Sun"
            role_id = 1
            priority = 2

            [[day_role_priorities]]
            weekday = "Wed"
            role_id = 1
            priority = 1
            "#,
        )
        .unwrap();

        let priorities = config.day_role_priorities();
        assert_eq!(priorities[&Weekday::Sun][&2], 1);
        assert_eq!(priorities[&Weekday::Sun][&1], 2);
        assert_eq!(priorities[&Weekday::Wed][&1], 1);
    }

    #[test]
    fn later_duplicate_entry_wins() {
        let config: RosterConfig = toml::from_str(
            r#"
            [[day_role_priorities]]
            weekday = "Sun"
            role_id = 1
            priority = 5

            [[day_role_priorities]]
            weekday = "Sun"
            role_id = 1
            priority = 1
            "#,
        )
        .unwrap();
        assert_eq!(config.day_role_priorities()[&Weekday::Sun][&1], 1);
    }

    #[test]
    fn empty_document_parses_to_defaults() {
        let config: RosterConfig = toml::from_str("").unwrap();
        assert!(config.day_role_priorities.is_empty());
    }
}
