//! App-switch plugin logic.
//!
//! Connects a [`PlatformTracker`] to the bridge:
//! - method channel `apz_app_switch_method`: `initialize` acknowledges, nothing else is implemented
//! - event channel `apz_app_switch_events`: subscribing starts the tracker and
//!   each state is relayed by name; cancelling stops it
//!
//! Host glue feeds platform signals in through [`AppSwitchChannel::on_unit`],
//! [`AppSwitchChannel::on_trim_memory`] and [`AppSwitchChannel::on_notification`].
//! Desktop hosts can derive those signals from window events with [`WindowUnits`].

use apz_channel::{EventSink, MethodCall, MethodHandler, Result, StreamHandler};
use apz_lifecycle::{
    new_callback, AppNotification, ApplicationStateProvider, LifecycleState, LifecycleTracker,
    PlatformTracker, TrackerConfig, TrackerVariant, UnitEvent,
};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

mod window;

pub use window::{notification_for, WindowTransition, WindowUnits};

pub use apz_events::channel_names::APP_SWITCH_METHOD;
pub use apz_events::event_names::APP_SWITCH_EVENTS;

type SharedSink = Arc<Mutex<Option<EventSink>>>;

pub struct AppSwitchChannel {
    tracker: Mutex<PlatformTracker>,
    sink: SharedSink,
    windows: WindowUnits,
}

impl AppSwitchChannel {
    pub fn new(tracker: PlatformTracker) -> Self {
        Self {
            tracker: Mutex::new(tracker),
            sink: Arc::new(Mutex::new(None)),
            windows: WindowUnits::default(),
        }
    }

    pub fn from_config(config: TrackerConfig, provider: Arc<dyn ApplicationStateProvider>) -> Self {
        tracing::info!(variant = ?config.variant, "creating app-switch channel");
        Self::new(PlatformTracker::from_config(config, provider))
    }

    pub fn on_unit(&self, event: UnitEvent) {
        self.tracker().on_unit(event);
    }

    pub fn on_trim_memory(&self, level: u32) {
        self.tracker().on_trim_memory(level);
    }

    pub fn on_notification(&self, notification: AppNotification) {
        self.tracker().on_notification(notification);
    }

    /// Window phases, tracked whether or not anyone is listening.
    pub fn windows(&self) -> &WindowUnits {
        &self.windows
    }

    /// Feed a window transition to whichever tracker family is active.
    pub fn on_window(&self, transition: &WindowTransition) {
        for unit in &transition.units {
            self.on_unit(*unit);
        }
        if let Some(state) = transition.app_state {
            self.on_notification(notification_for(state));
        }
    }

    /// The last state relayed to a listener, if one is subscribed.
    pub fn current_state(&self) -> Option<LifecycleState> {
        self.tracker().last_emitted()
    }

    pub fn is_listening(&self) -> bool {
        lock(&self.sink).is_some()
    }

    // Lock order is tracker then sink: tracker emissions lock the sink.
    fn tracker(&self) -> MutexGuard<'_, PlatformTracker> {
        lock(&self.tracker)
    }
}

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}

fn relay(sink: SharedSink) -> apz_lifecycle::StateCallback {
    new_callback(move |state| match lock(&sink).as_ref() {
        Some(sink) => sink.success(state.as_str()),
        None => tracing::trace!(state = %state, "no listener, dropping state"),
    })
}

impl MethodHandler for AppSwitchChannel {
    fn handle(&self, call: &MethodCall) -> Result<serde_json::Value> {
        match call.method.as_str() {
            // Setup happens on listen.
            "initialize" => Ok(serde_json::Value::Null),
            _ => Err(call.not_implemented()),
        }
    }
}

impl StreamHandler for AppSwitchChannel {
    fn on_listen(&self, _arguments: &serde_json::Value, sink: EventSink) -> Result<()> {
        if lock(&self.sink).replace(sink).is_some() {
            tracing::debug!("replacing app-switch listener");
        }

        let mut tracker = self.tracker();
        if tracker.is_started() {
            if tracker.variant() != TrackerVariant::Notification {
                return Ok(());
            }
            // Re-query so the new listener receives the current state.
            tracker.stop();
        }
        tracker.start(relay(Arc::clone(&self.sink)));
        if tracker.variant() == TrackerVariant::ActivityCounter {
            // Fresh counters miss windows opened before this listener. Replaying
            // them reports `resumed` right away when one of them has focus.
            for unit in self.windows.snapshot() {
                tracker.on_unit(unit);
            }
        }
        tracing::info!("app-switch listener subscribed");
        Ok(())
    }

    fn on_cancel(&self, _arguments: &serde_json::Value) -> Result<()> {
        self.tracker().stop();
        lock(&self.sink).take();
        tracing::info!("app-switch listener cancelled");
        Ok(())
    }
}
