//! Method-call and event-stream bridge.
//!
//! Models the two channel kinds a plugin exposes to its caller:
//! - method channels: one request, one response or [`ChannelError`]
//! - event channels: subscribe, receive a stream of payloads, cancel
//!
//! Host integrations (Tauri commands, an in-process [`ChannelRegistry`])
//! translate their own transport into these calls.

mod call;
mod error;
mod handler;
mod registry;
mod sink;

pub use call::MethodCall;
pub use error::{ChannelError, Result};
pub use handler::{MethodHandler, StreamHandler};
pub use registry::ChannelRegistry;
pub use sink::{DeliveryThread, EventSink};
