//! Foreground/background reporting for Tauri apps.
//!
//! Every webview window counts as one foreground unit. Window events are fed
//! to the configured tracker and each resulting state is emitted on
//! `apz_app_switch_events` while the frontend is listening.
//!
//! ```json
//! { "plugins": { "apz-app-switch": { "variant": "notification" } } }
//! ```

use std::sync::Arc;

use apz_app_switch::{AppSwitchChannel, WindowTransition};
use apz_events::{EventBusRef, TauriEventBus};
use apz_lifecycle::{ApplicationState, StaticStateProvider, TrackerConfig};
use tauri::plugin::{Builder, TauriPlugin};
use tauri::{Manager, Runtime};

mod commands;
mod handler;

const PLUGIN_NAME: &str = "apz-app-switch";

pub struct AppSwitchState {
    pub(crate) channel: AppSwitchChannel,
    pub(crate) provider: Arc<StaticStateProvider>,
    pub(crate) bus: EventBusRef,
}

impl AppSwitchState {
    /// Provider first, so a tracker started afterwards sees the new state.
    pub(crate) fn apply(&self, transition: WindowTransition) {
        if let Some(state) = transition.app_state {
            self.provider.set(state);
        }
        self.channel.on_window(&transition);
    }
}

pub fn init<R: Runtime>() -> TauriPlugin<R, Option<TrackerConfig>> {
    Builder::<R, Option<TrackerConfig>>::new(PLUGIN_NAME)
        .invoke_handler(tauri::generate_handler![
            commands::initialize,
            commands::listen,
            commands::cancel,
            commands::current_state,
        ])
        .setup(|app, api| {
            let config = api.config().clone().unwrap_or_default();
            let provider = Arc::new(StaticStateProvider::new(ApplicationState::Unknown));
            let channel = AppSwitchChannel::from_config(config, provider.clone());

            app.manage(AppSwitchState {
                channel,
                provider,
                bus: Arc::new(TauriEventBus::new(app.clone())),
            });
            Ok(())
        })
        .on_window_ready(|window| handler::window_ready(&window))
        .on_event(handler::run_event)
        .build()
}
