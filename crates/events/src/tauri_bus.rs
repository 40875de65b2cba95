//! Tauri event bus adapter.

use crate::EventBus;
use tauri::{AppHandle, Emitter, Runtime};

/// Emits bus events to every webview of the app.
pub struct TauriEventBus<R: Runtime> {
    app: AppHandle<R>,
}

impl<R: Runtime> TauriEventBus<R> {
    pub fn new(app: AppHandle<R>) -> Self {
        Self { app }
    }
}

impl<R: Runtime> EventBus for TauriEventBus<R> {
    fn emit(&self, topic: &str, payload: serde_json::Value) {
        if let Err(e) = self.app.emit(topic, payload) {
            tracing::warn!(topic, "failed to emit event: {}", e);
        }
    }
}
