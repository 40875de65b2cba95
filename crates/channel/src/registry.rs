//! Name-based routing of method calls and stream subscriptions.

use crate::call::MethodCall;
use crate::error::{ChannelError, Result};
use crate::handler::{MethodHandler, StreamHandler};
use crate::sink::EventSink;
use std::collections::HashMap;
use std::sync::Arc;

#[derive(Default)]
pub struct ChannelRegistry {
    methods: HashMap<String, Arc<dyn MethodHandler>>,
    streams: HashMap<String, Arc<dyn StreamHandler>>,
}

impl ChannelRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register_method(&mut self, channel: &str, handler: Arc<dyn MethodHandler>) {
        if self.methods.insert(channel.to_string(), handler).is_some() {
            tracing::warn!(channel, "replacing method handler");
        }
    }

    pub fn register_stream(&mut self, channel: &str, handler: Arc<dyn StreamHandler>) {
        if self.streams.insert(channel.to_string(), handler).is_some() {
            tracing::warn!(channel, "replacing stream handler");
        }
    }

    /// Route a call. Unknown channels answer like unknown methods.
    pub fn invoke(&self, channel: &str, call: &MethodCall) -> Result<serde_json::Value> {
        let Some(handler) = self.methods.get(channel) else {
            tracing::debug!(channel, method = %call.method, "no handler for channel");
            return Err(call.not_implemented());
        };

        let result = handler.handle(call);
        if let Err(ref e) = result {
            tracing::debug!(channel, method = %call.method, code = e.code(), "method call failed");
        }
        result
    }

    pub fn listen(&self, channel: &str, arguments: &serde_json::Value, sink: EventSink) -> Result<()> {
        self.stream(channel)?.on_listen(arguments, sink)
    }

    pub fn cancel(&self, channel: &str, arguments: &serde_json::Value) -> Result<()> {
        self.stream(channel)?.on_cancel(arguments)
    }

    fn stream(&self, channel: &str) -> Result<&Arc<dyn StreamHandler>> {
        self.streams
            .get(channel)
            .ok_or_else(|| ChannelError::Unavailable(format!("no stream named {channel}")))
    }
}
