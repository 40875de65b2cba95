//! Tracker configuration.

use serde::{Deserialize, Serialize};

/// Which reconciliation strategy a tracker uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum TrackerVariant {
    /// Per-unit start/resume/pause/stop/destroy counters.
    #[default]
    ActivityCounter,
    /// App-level active/inactive/background/terminate notifications.
    Notification,
}

/// Options for the counter-based detector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CounterConfig {
    /// Suppress a counter-derived emission equal to the previous one.
    ///
    /// Without this, returning from background emits `Resumed` twice (once
    /// on start, once on resume) and every extra destroy re-emits `Detached`.
    pub collapse_repeats: bool,
}

impl Default for CounterConfig {
    fn default() -> Self {
        Self {
            collapse_repeats: true,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TrackerConfig {
    pub variant: TrackerVariant,
    pub counter: CounterConfig,
}
