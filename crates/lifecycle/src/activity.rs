//! Counter-based lifecycle detection.
//!
//! Used where the platform only reports per-unit transitions (one callback
//! stream per activity, window or scene). The detector keeps running counts of
//! started and resumed units and derives the app-level state from the edges
//! where those counts cross zero.

use crate::config::CounterConfig;
use crate::state::LifecycleState;
use crate::{LifecycleTracker, StateCallback};

/// Memory-trim level reported when the app's UI is no longer visible.
pub const TRIM_MEMORY_UI_HIDDEN: u32 = 20;

/// A lifecycle transition of a single foreground-capable unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UnitEvent {
    Created,
    Started,
    Resumed,
    Paused,
    Stopped,
    Destroyed,
}

/// Snapshot of the detector's counters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct UnitCounters {
    /// Units currently resumed (focused).
    pub resumed: u32,
    /// Units currently started (visible).
    pub started: u32,
    /// Set once `started` drops to zero, cleared when a unit starts again.
    pub was_backgrounded: bool,
}

#[derive(Default)]
pub struct ActivityCounterDetector {
    config: CounterConfig,
    counters: UnitCounters,
    callback: Option<StateCallback>,
    last_emitted: Option<LifecycleState>,
}

impl ActivityCounterDetector {
    pub fn new(config: CounterConfig) -> Self {
        Self {
            config,
            ..Self::default()
        }
    }

    pub fn counters(&self) -> UnitCounters {
        self.counters
    }

    pub fn on_unit(&mut self, event: UnitEvent) {
        if self.callback.is_none() {
            tracing::trace!(?event, "tracker not started, dropping unit event");
            return;
        }

        let counters = &mut self.counters;
        let next = match event {
            UnitEvent::Created => None,
            UnitEvent::Started => {
                counters.started = counters.started.saturating_add(1);
                if counters.was_backgrounded && counters.started == 1 {
                    counters.was_backgrounded = false;
                    Some(LifecycleState::Resumed)
                } else {
                    None
                }
            }
            UnitEvent::Resumed => {
                counters.resumed = counters.resumed.saturating_add(1);
                // After background, `Started` already reported `Resumed`; the
                // repeat from this path is dropped by `collapse_repeats`.
                (counters.resumed == 1 && !counters.was_backgrounded)
                    .then_some(LifecycleState::Resumed)
            }
            UnitEvent::Paused => {
                counters.resumed = counters.resumed.saturating_sub(1);
                (counters.resumed == 0 && counters.started > 0).then_some(LifecycleState::Inactive)
            }
            UnitEvent::Stopped => {
                counters.started = counters.started.saturating_sub(1);
                if counters.started == 0 {
                    counters.was_backgrounded = true;
                    Some(LifecycleState::Paused)
                } else {
                    None
                }
            }
            UnitEvent::Destroyed => {
                counters.resumed = counters.resumed.saturating_sub(1);
                counters.started = counters.started.saturating_sub(1);
                (counters.resumed == 0 && counters.started == 0).then_some(LifecycleState::Detached)
            }
        };

        tracing::trace!(?event, counters = ?self.counters, "unit transition");

        if let Some(state) = next {
            self.emit(state, self.config.collapse_repeats);
        }
    }

    /// Trim callbacks can arrive without a matching stop on some OS versions,
    /// so `TRIM_MEMORY_UI_HIDDEN` reports `Paused` regardless of the counters.
    pub fn on_trim_memory(&mut self, level: u32) {
        if self.callback.is_none() {
            tracing::trace!(level, "tracker not started, dropping trim signal");
            return;
        }

        if level == TRIM_MEMORY_UI_HIDDEN {
            self.emit(LifecycleState::Paused, false);
        }
    }

    fn emit(&mut self, state: LifecycleState, collapse: bool) {
        if collapse && self.last_emitted == Some(state) {
            tracing::trace!(state = %state, "collapsing repeated state");
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

impl LifecycleTracker for ActivityCounterDetector {
    fn start(&mut self, callback: StateCallback) {
        if self.callback.is_some() {
            tracing::warn!("ActivityCounterDetector already started");
            return;
        }
        self.callback = Some(callback);
    }

    fn stop(&mut self) {
        self.callback = None;
        self.counters = UnitCounters::default();
        self.last_emitted = None;
    }

    fn is_started(&self) -> bool {
        self.callback.is_some()
    }

    fn last_emitted(&self) -> Option<LifecycleState> {
        self.last_emitted
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::new_callback;
    use std::sync::{Arc, Mutex};

    fn started_detector(config: CounterConfig) -> (ActivityCounterDetector, Arc<Mutex<Vec<LifecycleState>>>) {
        let emitted = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&emitted);
        let mut detector = ActivityCounterDetector::new(config);
        detector.start(new_callback(move |state| sink.lock().unwrap().push(state)));
        (detector, emitted)
    }

    fn feed(detector: &mut ActivityCounterDetector, events: &[UnitEvent]) {
        for event in events {
            detector.on_unit(*event);
        }
    }

    #[test]
    fn test_cold_start_emits_single_resumed() {
        let (mut detector, emitted) = started_detector(CounterConfig::default());
        feed(&mut detector, &[UnitEvent::Created, UnitEvent::Started, UnitEvent::Resumed]);
        assert_eq!(*emitted.lock().unwrap(), vec![LifecycleState::Resumed]);
    }

    #[test]
    fn test_foreground_to_background_sequence() {
        let (mut detector, emitted) = started_detector(CounterConfig::default());
        feed(
            &mut detector,
            &[UnitEvent::Started, UnitEvent::Resumed, UnitEvent::Paused, UnitEvent::Stopped],
        );
        assert_eq!(
            *emitted.lock().unwrap(),
            vec![LifecycleState::Resumed, LifecycleState::Inactive, LifecycleState::Paused]
        );
        assert!(detector.counters().was_backgrounded);
    }

    #[test]
    fn test_return_from_background_emits_resumed_once() {
        let (mut detector, emitted) = started_detector(CounterConfig::default());
        feed(
            &mut detector,
            &[
                UnitEvent::Started,
                UnitEvent::Resumed,
                UnitEvent::Paused,
                UnitEvent::Stopped,
                UnitEvent::Started,
                UnitEvent::Resumed,
            ],
        );
        assert_eq!(
            *emitted.lock().unwrap(),
            vec![
                LifecycleState::Resumed,
                LifecycleState::Inactive,
                LifecycleState::Paused,
                LifecycleState::Resumed,
            ]
        );
        assert!(!detector.counters().was_backgrounded);
    }

    #[test]
    fn test_uncollapsed_return_from_background_repeats_resumed() {
        let (mut detector, emitted) = started_detector(CounterConfig {
            collapse_repeats: false,
        });
        feed(
            &mut detector,
            &[UnitEvent::Started, UnitEvent::Stopped, UnitEvent::Started, UnitEvent::Resumed],
        );
        assert_eq!(
            *emitted.lock().unwrap(),
            vec![LifecycleState::Paused, LifecycleState::Resumed, LifecycleState::Resumed]
        );
    }

    #[test]
    fn test_overlay_reemits_resumed_after_inactive() {
        // Permission dialog: pause and resume without a stop.
        let (mut detector, emitted) = started_detector(CounterConfig::default());
        feed(
            &mut detector,
            &[UnitEvent::Started, UnitEvent::Resumed, UnitEvent::Paused, UnitEvent::Resumed],
        );
        assert_eq!(
            *emitted.lock().unwrap(),
            vec![LifecycleState::Resumed, LifecycleState::Inactive, LifecycleState::Resumed]
        );
    }

    #[test]
    fn test_counters_never_go_negative() {
        let (mut detector, _emitted) = started_detector(CounterConfig::default());
        feed(
            &mut detector,
            &[UnitEvent::Stopped, UnitEvent::Stopped, UnitEvent::Started, UnitEvent::Paused],
        );
        assert_eq!(detector.counters().started, 1);
        assert_eq!(detector.counters().resumed, 0);

        feed(&mut detector, &[UnitEvent::Stopped, UnitEvent::Stopped, UnitEvent::Destroyed]);
        assert_eq!(detector.counters().started, 0);
        assert_eq!(detector.counters().resumed, 0);
    }

    #[test]
    fn test_started_count_tracks_net_transitions() {
        let (mut detector, _emitted) = started_detector(CounterConfig::default());
        feed(
            &mut detector,
            &[UnitEvent::Started, UnitEvent::Started, UnitEvent::Started, UnitEvent::Stopped],
        );
        assert_eq!(detector.counters().started, 2);
    }

    #[test]
    fn test_destroy_emits_detached_once() {
        let (mut detector, emitted) = started_detector(CounterConfig::default());
        feed(
            &mut detector,
            &[
                UnitEvent::Started,
                UnitEvent::Resumed,
                UnitEvent::Destroyed,
                UnitEvent::Destroyed,
                UnitEvent::Destroyed,
            ],
        );
        assert_eq!(
            *emitted.lock().unwrap(),
            vec![LifecycleState::Resumed, LifecycleState::Detached]
        );
    }

    #[test]
    fn test_detached_after_regular_teardown() {
        let (mut detector, emitted) = started_detector(CounterConfig::default());
        feed(
            &mut detector,
            &[
                UnitEvent::Started,
                UnitEvent::Resumed,
                UnitEvent::Paused,
                UnitEvent::Stopped,
                UnitEvent::Destroyed,
            ],
        );
        assert_eq!(emitted.lock().unwrap().last(), Some(&LifecycleState::Detached));
    }

    #[test]
    fn test_second_unit_keeps_app_visible() {
        let (mut detector, emitted) = started_detector(CounterConfig::default());
        feed(
            &mut detector,
            &[
                UnitEvent::Started,
                UnitEvent::Resumed,
                // Second unit launched on top of the first.
                UnitEvent::Paused,
                UnitEvent::Started,
                UnitEvent::Resumed,
                UnitEvent::Stopped,
            ],
        );
        assert_eq!(
            *emitted.lock().unwrap(),
            vec![LifecycleState::Resumed, LifecycleState::Inactive, LifecycleState::Resumed]
        );
        assert_eq!(detector.counters().started, 1);
    }

    #[test]
    fn test_trim_memory_ui_hidden_emits_paused_unconditionally() {
        let (mut detector, emitted) = started_detector(CounterConfig::default());
        detector.on_trim_memory(TRIM_MEMORY_UI_HIDDEN);
        detector.on_trim_memory(TRIM_MEMORY_UI_HIDDEN);
        detector.on_trim_memory(80);
        assert_eq!(
            *emitted.lock().unwrap(),
            vec![LifecycleState::Paused, LifecycleState::Paused]
        );
    }

    #[test]
    fn test_stop_before_start_is_inert() {
        let mut detector = ActivityCounterDetector::default();
        detector.stop();
        detector.on_unit(UnitEvent::Started);
        detector.on_trim_memory(TRIM_MEMORY_UI_HIDDEN);
        assert!(!detector.is_started());
        assert_eq!(detector.counters(), UnitCounters::default());
        assert_eq!(detector.last_emitted(), None);
    }

    #[test]
    fn test_stop_resets_counters_and_drops_later_events() {
        let (mut detector, emitted) = started_detector(CounterConfig::default());
        feed(&mut detector, &[UnitEvent::Started, UnitEvent::Resumed]);
        detector.stop();
        feed(&mut detector, &[UnitEvent::Paused, UnitEvent::Stopped]);

        assert_eq!(*emitted.lock().unwrap(), vec![LifecycleState::Resumed]);
        assert_eq!(detector.counters(), UnitCounters::default());
    }

    #[test]
    fn test_double_start_keeps_first_callback() {
        let (mut detector, emitted) = started_detector(CounterConfig::default());
        let other = Arc::new(Mutex::new(Vec::new()));
        let other_sink = Arc::clone(&other);
        detector.start(new_callback(move |state| other_sink.lock().unwrap().push(state)));

        feed(&mut detector, &[UnitEvent::Started, UnitEvent::Resumed]);
        assert_eq!(emitted.lock().unwrap().len(), 1);
        assert!(other.lock().unwrap().is_empty());
    }
}
