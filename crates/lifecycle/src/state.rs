//! Canonical lifecycle states.
//!
//! Pure domain types - no platform dependencies.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// The four canonical app lifecycle states delivered downstream.
///
/// Serialized by lowercase name, which is also the value relayed on the
/// event stream (`"resumed"`, `"inactive"`, `"paused"`, `"detached"`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LifecycleState {
    /// Visible and focused.
    Resumed,
    /// Visible but not focused (system dialog, app switcher, incoming call).
    Inactive,
    /// Not visible; running in the background.
    Paused,
    /// All foreground units are gone.
    Detached,
}

impl LifecycleState {
    pub const ALL: [LifecycleState; 4] = [
        LifecycleState::Resumed,
        LifecycleState::Inactive,
        LifecycleState::Paused,
        LifecycleState::Detached,
    ];

    /// Name used on the event stream.
    pub fn as_str(&self) -> &'static str {
        match self {
            LifecycleState::Resumed => "resumed",
            LifecycleState::Inactive => "inactive",
            LifecycleState::Paused => "paused",
            LifecycleState::Detached => "detached",
        }
    }
}

impl std::fmt::Display for LifecycleState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown lifecycle state: {0}")]
pub struct ParseStateError(pub String);

impl std::str::FromStr for LifecycleState {
    type Err = ParseStateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        LifecycleState::ALL
            .into_iter()
            .find(|state| state.as_str() == s)
            .ok_or_else(|| ParseStateError(s.to_string()))
    }
}

/// Aggregated application state as reported by a platform that exposes it directly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ApplicationState {
    Active,
    Inactive,
    Background,
    /// Any value the platform reports that this crate does not recognize.
    #[default]
    Unknown,
}

impl ApplicationState {
    /// Unrecognized values map conservatively to `Detached`.
    pub fn to_lifecycle(self) -> LifecycleState {
        match self {
            ApplicationState::Active => LifecycleState::Resumed,
            ApplicationState::Inactive => LifecycleState::Inactive,
            ApplicationState::Background => LifecycleState::Paused,
            ApplicationState::Unknown => LifecycleState::Detached,
        }
    }
}
