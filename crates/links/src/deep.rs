//! Custom-scheme deep links.

use apz_channel::{EventSink, MethodCall, MethodHandler, Result, StreamHandler};
use std::sync::{Mutex, MutexGuard, PoisonError};

#[derive(Default)]
struct Inner {
    initial_link: Option<String>,
    sink: Option<EventSink>,
}

/// Deep-link state for one app instance.
///
/// Construct once at host startup and keep it in host-managed state; every
/// incoming link must go through the same instance.
#[derive(Default)]
pub struct DeepLinks {
    inner: Mutex<Inner>,
}

impl DeepLinks {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> MutexGuard<'_, Inner> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Record a link delivered by the platform and forward it to the listener.
    ///
    /// Only the first link ever received becomes the initial link.
    pub fn handle_incoming(&self, link: &str) {
        let sink = {
            let mut inner = self.lock();
            if inner.initial_link.is_none() {
                tracing::info!(link, "initial deep link");
                inner.initial_link = Some(link.to_string());
            }
            inner.sink.clone()
        };

        match sink {
            Some(sink) => sink.success(link),
            None => tracing::debug!(link, "no deep link listener"),
        }
    }

    pub fn initial_link(&self) -> Option<String> {
        self.lock().initial_link.clone()
    }
}

impl MethodHandler for DeepLinks {
    fn handle(&self, call: &MethodCall) -> Result<serde_json::Value> {
        match call.method.as_str() {
            "getInitialLink" => Ok(self.initial_link().into()),
            _ => Err(call.not_implemented()),
        }
    }
}

impl StreamHandler for DeepLinks {
    fn on_listen(&self, _arguments: &serde_json::Value, sink: EventSink) -> Result<()> {
        self.lock().sink = Some(sink);
        Ok(())
    }

    fn on_cancel(&self, _arguments: &serde_json::Value) -> Result<()> {
        self.lock().sink = None;
        Ok(())
    }
}
