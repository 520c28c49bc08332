//! Planner Configuration
//!
//! Settings embedded at build time from `planner.json`.

use log::LevelFilter;
use serde::Deserialize;

const EMBEDDED_CONFIG: &str = include_str!("../planner.json");

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct PlannerConfig {
    /// One of off/error/warn/info/debug/trace
    pub log_level: String,
    /// Number of log entries kept in memory
    pub log_capacity: usize,
    /// Pointer movement before a press becomes a drag
    pub drag_threshold_px: i32,
    /// Simulated latency of the mock service
    pub mock_latency_ms: u32,
}

impl Default for PlannerConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            log_capacity: rolling_logger::DEFAULT_CAPACITY,
            drag_threshold_px: leptos_dragdrop::DRAG_THRESHOLD_PX,
            mock_latency_ms: 300,
        }
    }
}

impl PlannerConfig {
    pub fn parse(json: &str) -> Result<Self, String> {
        serde_json::from_str(json).map_err(|e| e.to_string())
    }

    /// Embedded configuration, or the defaults with the parse error
    pub fn load() -> (Self, Option<String>) {
        match Self::parse(EMBEDDED_CONFIG) {
            Ok(config) => (config, None),
            Err(e) => (Self::default(), Some(e)),
        }
    }

    /// Unknown level names fall back to `Info`
    pub fn level_filter(&self) -> LevelFilter {
        self.log_level.parse().unwrap_or(LevelFilter::Info)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_embedded_config_parses() {
        let (config, error) = PlannerConfig::load();
        assert!(error.is_none());
        assert!(config.drag_threshold_px >= 0);
    }

    #[test]
    fn test_missing_fields_use_defaults() {
        let config = PlannerConfig::parse(r#"{"mock_latency_ms": 0}"#).unwrap();
        assert_eq!(config.mock_latency_ms, 0);
        assert_eq!(config.drag_threshold_px, 5);
        assert_eq!(config.level_filter(), LevelFilter::Info);
    }

    #[test]
    fn test_level_filter() {
        let config = PlannerConfig { log_level: "DEBUG".to_string(), ..Default::default() };
        assert_eq!(config.level_filter(), LevelFilter::Debug);

        let config = PlannerConfig { log_level: "loud".to_string(), ..Default::default() };
        assert_eq!(config.level_filter(), LevelFilter::Info);
    }

    #[test]
    fn test_invalid_json_is_error() {
        assert!(PlannerConfig::parse("{ not json").is_err());
    }
}
