//! Notification-based lifecycle detection.
//!
//! Used where the platform already aggregates foreground state and posts
//! app-level notifications. The detector forwards them 1:1, reports the
//! current state on start and drops adjacent duplicates.

use crate::provider::ApplicationStateProvider;
use crate::state::LifecycleState;
use crate::{LifecycleTracker, StateCallback};
use std::sync::Arc;

/// App-level notifications posted by the platform.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AppNotification {
    DidBecomeActive,
    WillResignActive,
    DidEnterBackground,
    WillEnterForeground,
    WillTerminate,
}

impl AppNotification {
    /// `WillEnterForeground` precedes full activation and maps to nothing;
    /// `DidBecomeActive` follows it and carries the `Resumed` transition.
    pub fn to_lifecycle(self) -> Option<LifecycleState> {
        match self {
            AppNotification::DidBecomeActive => Some(LifecycleState::Resumed),
            AppNotification::WillResignActive => Some(LifecycleState::Inactive),
            AppNotification::DidEnterBackground => Some(LifecycleState::Paused),
            AppNotification::WillEnterForeground => None,
            AppNotification::WillTerminate => Some(LifecycleState::Detached),
        }
    }
}

pub struct NotificationDetector {
    provider: Arc<dyn ApplicationStateProvider>,
    callback: Option<StateCallback>,
    last_emitted: Option<LifecycleState>,
}

impl NotificationDetector {
    pub fn new(provider: Arc<dyn ApplicationStateProvider>) -> Self {
        Self {
            provider,
            callback: None,
            last_emitted: None,
        }
    }

    pub fn on_notification(&mut self, notification: AppNotification) {
        if self.callback.is_none() {
            tracing::trace!(?notification, "tracker not started, dropping notification");
            return;
        }

        match notification.to_lifecycle() {
            Some(state) => self.emit(state),
            None => tracing::trace!(?notification, "notification not forwarded"),
        }
    }

    fn emit(&mut self, state: LifecycleState) {
        if self.last_emitted == Some(state) {
            return;
        }

        let Some(callback) = self.callback.as_ref() else {
            return;
        };

        tracing::debug!(state = %state, "lifecycle state changed");
        self.last_emitted = Some(state);
        callback(state);
    }
}

impl LifecycleTracker for NotificationDetector {
    fn start(&mut self, callback: StateCallback) {
        if self.callback.is_some() {
            tracing::warn!("NotificationDetector already started");
            return;
        }

        self.callback = Some(callback);

        // A late subscriber still gets a value.
        let current = self.provider.application_state();
        tracing::debug!(?current, "reporting initial application state");
        self.emit(current.to_lifecycle());
    }

    fn stop(&mut self) {
        self.callback = None;
        self.last_emitted = None;
    }

    fn is_started(&self) -> bool {
        self.callback.is_some()
    }

    fn last_emitted(&self) -> Option<LifecycleState> {
        self.last_emitted
    }
}
