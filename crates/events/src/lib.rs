//! Shared event contracts for the apz plugins.
//!
//! Defines the channel and topic names both sides of the bridge agree on,
//! the DTOs carried on those topics, and the [`EventBus`] trait used to
//! emit them.

mod bus;
#[cfg(feature = "tauri")]
mod tauri_bus;

pub use bus::{EmittedEvent, EventBus, EventBusRef, InMemoryEventBus, NullEventBus};
#[cfg(feature = "tauri")]
pub use tauri_bus::TauriEventBus;

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Components of a received deep or universal link.
///
/// Producers: links crate
/// Consumers: app (`getInitialLink` result, `onLinkReceived` payload)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LinkData {
    /// Host, or empty when the link has none.
    pub host: String,
    pub path: String,
    pub scheme: String,
    /// The link as received.
    pub full_url: String,
    /// Query parameters; valueless keys map to an empty string.
    #[serde(default)]
    pub query_params: BTreeMap<String, String>,
}

/// Method channel names.
pub mod channel_names {
    pub const APP_SWITCH_METHOD: &str = "apz_app_switch_method";
    pub const DEEPLINK_METHOD: &str = "apz_deeplink/method";
    pub const UNIVERSAL_LINKING: &str = "apz_universal_linking";
}

/// Event stream names.
pub mod event_names {
    /// Lifecycle state names (`"resumed"`, `"inactive"`, `"paused"`, `"detached"`).
    pub const APP_SWITCH_EVENTS: &str = "apz_app_switch_events";
    /// Raw deep link strings.
    pub const DEEPLINK_EVENTS: &str = "apz_deeplink/events";
    /// [`LinkData`](crate::LinkData) for each universal link.
    pub const UNIVERSAL_LINK_RECEIVED: &str = "apz_universal_linking:onLinkReceived";
}
