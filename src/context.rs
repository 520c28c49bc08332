//! Application Context
//!
//! Shared state provided via Leptos Context API.

use leptos::prelude::*;
use rolling_logger::{LogEntry, RollingLogger};

use crate::config::PlannerConfig;

/// App-wide signals provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Trip opened in the planner (None = overview) - read
    pub selected_trip: ReadSignal<Option<String>>,
    /// Trip opened in the planner (None = overview) - write
    set_selected_trip: WriteSignal<Option<String>>,
    config: StoredValue<PlannerConfig>,
    /// Installed logger, `None` if another one was already set
    logger: Option<&'static RollingLogger>,
}

impl AppContext {
    pub fn new(
        selected_trip: (ReadSignal<Option<String>>, WriteSignal<Option<String>>),
        config: PlannerConfig,
        logger: Option<&'static RollingLogger>,
    ) -> Self {
        Self {
            selected_trip: selected_trip.0,
            set_selected_trip: selected_trip.1,
            config: StoredValue::new(config),
            logger,
        }
    }

    /// Open a trip in the planner
    pub fn open_trip(&self, trip_id: String) {
        self.set_selected_trip.set(Some(trip_id));
    }

    /// Back to the overview
    pub fn close_trip(&self) {
        self.set_selected_trip.set(None);
    }

    pub fn mock_latency_ms(&self) -> u32 {
        self.config.with_value(|c| c.mock_latency_ms)
    }

    pub fn drag_threshold_px(&self) -> i32 {
        self.config.with_value(|c| c.drag_threshold_px)
    }

    /// Last `count` buffered log entries, newest first
    pub fn recent_logs(&self, count: usize) -> Vec<LogEntry> {
        self.logger
            .map(|logger| logger.recent().into_iter().rev().take(count).collect())
            .unwrap_or_default()
    }
}
