//! Runtime selection between the two detector variants.

use crate::activity::{ActivityCounterDetector, UnitEvent};
use crate::config::{TrackerConfig, TrackerVariant};
use crate::notification::{AppNotification, NotificationDetector};
use crate::provider::ApplicationStateProvider;
use crate::state::LifecycleState;
use crate::{LifecycleTracker, StateCallback};
use std::sync::Arc;

/// A tracker whose variant is picked from configuration.
///
/// Host glue forwards every signal it sees; signals belonging to the other
/// variant's input family are ignored.
pub enum PlatformTracker {
    ActivityCounter(ActivityCounterDetector),
    Notification(NotificationDetector),
}

impl PlatformTracker {
    pub fn from_config(config: TrackerConfig, provider: Arc<dyn ApplicationStateProvider>) -> Self {
        match config.variant {
            TrackerVariant::ActivityCounter => {
                Self::ActivityCounter(ActivityCounterDetector::new(config.counter))
            }
            TrackerVariant::Notification => Self::Notification(NotificationDetector::new(provider)),
        }
    }

    pub fn variant(&self) -> TrackerVariant {
        match self {
            Self::ActivityCounter(_) => TrackerVariant::ActivityCounter,
            Self::Notification(_) => TrackerVariant::Notification,
        }
    }

    pub fn on_unit(&mut self, event: UnitEvent) {
        match self {
            Self::ActivityCounter(detector) => detector.on_unit(event),
            Self::Notification(_) => {
                tracing::debug!(?event, "unit event ignored by notification tracker")
            }
        }
    }

    pub fn on_trim_memory(&mut self, level: u32) {
        match self {
            Self::ActivityCounter(detector) => detector.on_trim_memory(level),
            Self::Notification(_) => {
                tracing::debug!(level, "trim signal ignored by notification tracker")
            }
        }
    }

    pub fn on_notification(&mut self, notification: AppNotification) {
        match self {
            Self::Notification(detector) => detector.on_notification(notification),
            Self::ActivityCounter(_) => {
                tracing::debug!(?notification, "notification ignored by counter tracker")
            }
        }
    }

    fn inner(&self) -> &dyn LifecycleTracker {
        match self {
            Self::ActivityCounter(detector) => detector,
            Self::Notification(detector) => detector,
        }
    }

    fn inner_mut(&mut self) -> &mut dyn LifecycleTracker {
        match self {
            Self::ActivityCounter(detector) => detector,
            Self::Notification(detector) => detector,
        }
    }
}

impl LifecycleTracker for PlatformTracker {
    fn start(&mut self, callback: StateCallback) {
        self.inner_mut().start(callback);
    }

    fn stop(&mut self) {
        self.inner_mut().stop();
    }

    fn is_started(&self) -> bool {
        self.inner().is_started()
    }

    fn last_emitted(&self) -> Option<LifecycleState> {
        self.inner().last_emitted()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::CounterConfig;
    use crate::new_callback;
    use crate::provider::StaticStateProvider;
    use crate::state::ApplicationState;
    use std::sync::Mutex;

    fn provider() -> Arc<dyn ApplicationStateProvider> {
        Arc::new(StaticStateProvider::new(ApplicationState::Inactive))
    }

    #[test]
    fn test_default_config_selects_counter_variant() {
        let tracker = PlatformTracker::from_config(TrackerConfig::default(), provider());
        assert_eq!(tracker.variant(), TrackerVariant::ActivityCounter);
    }

    #[test]
    fn test_notification_tracker_ignores_unit_events() {
        let config = TrackerConfig {
            variant: TrackerVariant::Notification,
            counter: CounterConfig::default(),
        };
        let mut tracker = PlatformTracker::from_config(config, provider());
        let emitted = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&emitted);
        tracker.start(new_callback(move |state| sink.lock().unwrap().push(state)));

        tracker.on_unit(UnitEvent::Started);
        tracker.on_unit(UnitEvent::Resumed);
        tracker.on_trim_memory(crate::TRIM_MEMORY_UI_HIDDEN);
        tracker.on_notification(AppNotification::DidEnterBackground);

        assert_eq!(
            *emitted.lock().unwrap(),
            vec![LifecycleState::Inactive, LifecycleState::Paused]
        );
    }

    #[test]
    fn test_counter_tracker_ignores_notifications() {
        let mut tracker = PlatformTracker::from_config(TrackerConfig::default(), provider());
        let emitted = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&emitted);
        tracker.start(new_callback(move |state| sink.lock().unwrap().push(state)));

        tracker.on_notification(AppNotification::DidBecomeActive);
        assert!(emitted.lock().unwrap().is_empty());
        assert!(tracker.is_started());

        tracker.stop();
        assert!(!tracker.is_started());
    }
}
