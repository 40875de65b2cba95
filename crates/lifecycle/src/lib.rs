//! App lifecycle state reconciliation.
//!
//! Platforms report foreground/background through several overlapping
//! callback streams. This crate folds them into one signal of four canonical
//! states: `resumed`, `inactive`, `paused`, `detached`.
//!
//! # Variants
//!
//! ```text
//! per-unit callbacks ──► ActivityCounterDetector ──┐
//!  (start/resume/pause/stop/destroy, memory trim)  │
//!                                                  ├──► StateCallback(LifecycleState)
//! app-level notifications ──► NotificationDetector ┘
//!  (active/resign/background/terminate)
//! ```
//!
//! Both variants are driven by the host's lifecycle dispatcher, which
//! serializes callbacks; the detectors take `&mut self` and do no locking.
//!
//! # Example
//!
//! ```
//! use apz_lifecycle::{new_callback, ActivityCounterDetector, LifecycleTracker, UnitEvent};
//!
//! let mut detector = ActivityCounterDetector::default();
//! detector.start(new_callback(|state| println!("state: {state}")));
//! detector.on_unit(UnitEvent::Started);
//! detector.on_unit(UnitEvent::Resumed);
//! detector.stop();
//! ```

mod activity;
mod config;
mod notification;
mod provider;
mod state;
mod tracker;

pub use activity::{ActivityCounterDetector, UnitCounters, UnitEvent, TRIM_MEMORY_UI_HIDDEN};
pub use config::{CounterConfig, TrackerConfig, TrackerVariant};
pub use notification::{AppNotification, NotificationDetector};
pub use provider::{ApplicationStateProvider, StaticStateProvider};
pub use state::{ApplicationState, LifecycleState, ParseStateError};
pub use tracker::PlatformTracker;

/// Receives each emitted state.
pub type StateCallback = std::sync::Arc<dyn Fn(LifecycleState) + Send + Sync + 'static>;

pub fn new_callback<F>(f: F) -> StateCallback
where
    F: Fn(LifecycleState) + Send + Sync + 'static,
{
    std::sync::Arc::new(f)
}

/// Start/stop contract shared by the detectors.
pub trait LifecycleTracker: Send {
    /// Begin delivering states to `callback`. No-op when already started.
    fn start(&mut self, callback: StateCallback);

    /// Clear the callback and reset all internal state. Safe without a prior `start`.
    fn stop(&mut self);

    fn is_started(&self) -> bool;

    /// The last state delivered since `start`.
    fn last_emitted(&self) -> Option<LifecycleState>;
}
