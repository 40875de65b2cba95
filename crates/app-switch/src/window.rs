//! Desktop windows as foreground units.
//!
//! Window toolkits report focus, minimize and destroy per window. This module
//! turns those into per-unit transitions for the counter tracker, and into an
//! aggregated [`ApplicationState`] for the notification tracker.

use apz_lifecycle::{AppNotification, ApplicationState, UnitEvent};
use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard, PoisonError};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    /// Visible, not focused.
    Started,
    /// Visible and focused.
    Resumed,
    /// Minimized.
    Stopped,
}

/// Result of one window signal.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct WindowTransition {
    pub units: Vec<UnitEvent>,
    /// New aggregated state, when it changed.
    pub app_state: Option<ApplicationState>,
}

#[derive(Default)]
struct Inner {
    windows: HashMap<String, Phase>,
    app_state: ApplicationState,
}

impl Inner {
    fn aggregate(&self) -> ApplicationState {
        let phases = || self.windows.values();
        if phases().any(|p| *p == Phase::Resumed) {
            ApplicationState::Active
        } else if phases().any(|p| *p == Phase::Started) {
            ApplicationState::Inactive
        } else if !self.windows.is_empty() {
            ApplicationState::Background
        } else {
            ApplicationState::Unknown
        }
    }

    fn finish(&mut self, units: Vec<UnitEvent>) -> WindowTransition {
        let next = self.aggregate();
        let app_state = (next != self.app_state).then_some(next);
        self.app_state = next;
        WindowTransition { units, app_state }
    }
}

/// Per-window phases, keyed by window label.
#[derive(Default)]
pub struct WindowUnits {
    inner: Mutex<Inner>,
}

impl WindowUnits {
    fn lock(&self) -> MutexGuard<'_, Inner> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn ready(&self, label: &str, focused: bool) -> WindowTransition {
        let mut inner = self.lock();
        if inner.windows.contains_key(label) {
            tracing::debug!(label, "window already tracked");
            return inner.finish(Vec::new());
        }

        let mut units = vec![UnitEvent::Created, UnitEvent::Started];
        let phase = if focused {
            units.push(UnitEvent::Resumed);
            Phase::Resumed
        } else {
            Phase::Started
        };
        inner.windows.insert(label.to_string(), phase);
        inner.finish(units)
    }

    pub fn focus_changed(&self, label: &str, focused: bool) -> WindowTransition {
        let mut inner = self.lock();
        let Some(phase) = inner.windows.get_mut(label) else {
            return inner.finish(Vec::new());
        };

        let units = match (*phase, focused) {
            (Phase::Started, true) => {
                *phase = Phase::Resumed;
                vec![UnitEvent::Resumed]
            }
            (Phase::Resumed, false) => {
                *phase = Phase::Started;
                vec![UnitEvent::Paused]
            }
            // Focus can restore a minimized window without a resize first.
            (Phase::Stopped, true) => {
                *phase = Phase::Resumed;
                vec![UnitEvent::Started, UnitEvent::Resumed]
            }
            _ => Vec::new(),
        };
        inner.finish(units)
    }

    pub fn minimized_changed(&self, label: &str, minimized: bool) -> WindowTransition {
        let mut inner = self.lock();
        let Some(phase) = inner.windows.get_mut(label) else {
            return inner.finish(Vec::new());
        };

        let units = match (*phase, minimized) {
            (Phase::Resumed, true) => {
                *phase = Phase::Stopped;
                vec![UnitEvent::Paused, UnitEvent::Stopped]
            }
            (Phase::Started, true) => {
                *phase = Phase::Stopped;
                vec![UnitEvent::Stopped]
            }
            (Phase::Stopped, false) => {
                *phase = Phase::Started;
                vec![UnitEvent::Started]
            }
            _ => Vec::new(),
        };
        inner.finish(units)
    }

    pub fn destroyed(&self, label: &str) -> WindowTransition {
        let mut inner = self.lock();
        let Some(phase) = inner.windows.remove(label) else {
            return inner.finish(Vec::new());
        };

        let mut units = match phase {
            Phase::Resumed => vec![UnitEvent::Paused, UnitEvent::Stopped],
            Phase::Started => vec![UnitEvent::Stopped],
            Phase::Stopped => Vec::new(),
        };
        units.push(UnitEvent::Destroyed);
        inner.finish(units)
    }

    /// Unit events that bring fresh counters up to the current phases.
    ///
    /// Minimized windows contribute nothing, matching a stopped unit.
    pub fn snapshot(&self) -> Vec<UnitEvent> {
        let inner = self.lock();
        let visible = inner.windows.values().filter(|p| **p != Phase::Stopped);
        let focused = inner.windows.values().filter(|p| **p == Phase::Resumed);
        let units = visible
            .map(|_| UnitEvent::Started)
            .chain(focused.map(|_| UnitEvent::Resumed))
            .collect();
        units
    }
}

/// Notification the platform would have posted on entering `state`.
pub fn notification_for(state: ApplicationState) -> AppNotification {
    match state {
        ApplicationState::Active => AppNotification::DidBecomeActive,
        ApplicationState::Inactive => AppNotification::WillResignActive,
        ApplicationState::Background => AppNotification::DidEnterBackground,
        ApplicationState::Unknown => AppNotification::WillTerminate,
    }
}
