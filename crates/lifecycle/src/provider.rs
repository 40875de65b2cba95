//! Provider traits for querying aggregated application state.
//!
//! These abstract the platform query so the notification detector stays
//! testable without a running OS.

use crate::state::ApplicationState;
use std::sync::RwLock;

/// Synchronous query of the platform's current aggregated application state.
pub trait ApplicationStateProvider: Send + Sync {
    fn application_state(&self) -> ApplicationState;
}

/// Provider holding a cached state value.
///
/// Hosts write the last platform value into it; tests pin it.
#[derive(Debug, Default)]
pub struct StaticStateProvider {
    state: RwLock<ApplicationState>,
}

impl StaticStateProvider {
    pub fn new(state: ApplicationState) -> Self {
        Self {
            state: RwLock::new(state),
        }
    }

    pub fn set(&self, state: ApplicationState) {
        if let Ok(mut guard) = self.state.write() {
            *guard = state;
        }
    }
}

impl ApplicationStateProvider for StaticStateProvider {
    fn application_state(&self) -> ApplicationState {
        self.state
            .read()
            .map(|guard| *guard)
            .unwrap_or(ApplicationState::Unknown)
    }
}
