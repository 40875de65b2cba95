use crate::call::MethodCall;
use crate::error::Result;
use crate::sink::EventSink;

/// Handles request/response calls on one method channel.
pub trait MethodHandler: Send + Sync {
    fn handle(&self, call: &MethodCall) -> Result<serde_json::Value>;
}

/// Handles subscription to one event stream.
pub trait StreamHandler: Send + Sync {
    /// A consumer subscribed; events go to `sink` until `on_cancel`.
    fn on_listen(&self, arguments: &serde_json::Value, sink: EventSink) -> Result<()>;

    fn on_cancel(&self, arguments: &serde_json::Value) -> Result<()>;
}
