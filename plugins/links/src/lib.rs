//! Deep links and universal links for Tauri apps.
//!
//! Links opened by the OS are routed by scheme: `http`/`https` go to the
//! universal-link registry, anything else is a custom-scheme deep link.

use std::sync::Arc;

use apz_events::{EventBusRef, TauriEventBus};
use apz_links::{DeepLinks, UniversalLinks};
use tauri::plugin::{Builder, TauriPlugin};
use tauri::{AppHandle, Manager, RunEvent, Runtime};

mod commands;

const PLUGIN_NAME: &str = "apz-links";

pub struct LinksState {
    pub(crate) deep: DeepLinks,
    pub(crate) universal: UniversalLinks,
    pub(crate) bus: EventBusRef,
}

impl LinksState {
    pub fn handle_incoming(&self, link: &str) {
        if is_universal(link) {
            self.universal.handle_incoming(link);
        } else {
            self.deep.handle_incoming(link);
        }
    }
}

fn is_universal(link: &str) -> bool {
    let scheme = link.split_once(':').map(|(scheme, _)| scheme).unwrap_or_default();
    scheme.eq_ignore_ascii_case("https") || scheme.eq_ignore_ascii_case("http")
}

pub fn init<R: Runtime>() -> TauriPlugin<R> {
    Builder::new(PLUGIN_NAME)
        .invoke_handler(tauri::generate_handler![
            commands::get_initial_link,
            commands::listen_links,
            commands::cancel_links,
            commands::get_initial_universal_link,
        ])
        .setup(|app, _api| {
            let bus: EventBusRef = Arc::new(TauriEventBus::new(app.clone()));
            app.manage(LinksState {
                deep: DeepLinks::new(),
                universal: UniversalLinks::new(bus.clone()),
                bus,
            });
            Ok(())
        })
        .on_event(opened)
        .build()
}

#[cfg(any(target_os = "macos", target_os = "ios"))]
fn opened<R: Runtime>(app: &AppHandle<R>, event: &RunEvent) {
    let RunEvent::Opened { urls } = event else {
        return;
    };
    let Some(state) = app.try_state::<LinksState>() else {
        tracing::warn!("links state not managed, dropping {} opened urls", urls.len());
        return;
    };
    for url in urls {
        state.handle_incoming(url.as_str());
    }
}

// Other platforms deliver links through their own deep-link integration,
// which calls `LinksState::handle_incoming`.
#[cfg(not(any(target_os = "macos", target_os = "ios")))]
fn opened<R: Runtime>(_app: &AppHandle<R>, _event: &RunEvent) {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_links_routed_by_scheme() {
        assert!(is_universal("https://example.com/pay"));
        assert!(is_universal("HTTP://example.com"));
        assert!(!is_universal("apzapp://login"));
        assert!(!is_universal("no-scheme"));
    }
}
