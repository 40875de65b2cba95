//! Universal (https) links.

use crate::parse::parse_link;
use apz_channel::{MethodCall, MethodHandler, Result};
use apz_events::event_names::UNIVERSAL_LINK_RECEIVED;
use apz_events::{EventBusRef, LinkData};
use std::sync::{Mutex, PoisonError};

/// Universal-link state for one app instance.
///
/// The outbound bus is required at construction, so links can never arrive
/// before the plugin is able to deliver them.
pub struct UniversalLinks {
    bus: EventBusRef,
    latest: Mutex<Option<String>>,
}

impl UniversalLinks {
    pub fn new(bus: EventBusRef) -> Self {
        Self {
            bus,
            latest: Mutex::new(None),
        }
    }

    /// Store the link (latest wins) and announce it when it parses.
    pub fn handle_incoming(&self, link: &str) {
        *self.latest.lock().unwrap_or_else(PoisonError::into_inner) = Some(link.to_string());

        match parse_link(link) {
            Ok(data) => {
                tracing::info!(link, "universal link received");
                match serde_json::to_value(&data) {
                    Ok(payload) => self.bus.emit(UNIVERSAL_LINK_RECEIVED, payload),
                    Err(e) => tracing::error!("failed to serialize link data: {}", e),
                }
            }
            Err(e) => tracing::warn!("dropping universal link: {}", e),
        }
    }

    /// The latest link, if it parses.
    pub fn initial_link(&self) -> Option<LinkData> {
        let latest = self
            .latest
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()?;
        parse_link(&latest).ok()
    }
}

impl MethodHandler for UniversalLinks {
    fn handle(&self, call: &MethodCall) -> Result<serde_json::Value> {
        match call.method.as_str() {
            "getInitialLink" => Ok(serde_json::to_value(self.initial_link())?),
            _ => Err(call.not_implemented()),
        }
    }
}
