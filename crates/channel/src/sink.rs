//! Outbound event delivery.
//!
//! An [`EventSink`] is bound to one stream topic. It either emits inline on
//! the caller's thread or hands events to a [`DeliveryThread`] so the consumer
//! always receives them on a single thread, in emission order.

use crate::error::ChannelError;
use apz_events::EventBusRef;
use crossbeam_channel::Sender;
use serde::Serialize;
use std::sync::Arc;
use std::thread::JoinHandle;

enum Message {
    Deliver {
        topic: Arc<str>,
        payload: serde_json::Value,
    },
    Shutdown,
}

#[derive(Clone)]
enum Target {
    Direct(EventBusRef),
    Queued(Sender<Message>),
}

#[derive(Clone)]
pub struct EventSink {
    topic: Arc<str>,
    target: Target,
}

impl EventSink {
    /// Sink that emits on the calling thread.
    pub fn direct(bus: EventBusRef, topic: &str) -> Self {
        Self {
            topic: Arc::from(topic),
            target: Target::Direct(bus),
        }
    }

    pub fn topic(&self) -> &str {
        &self.topic
    }

    pub fn success<T: Serialize + ?Sized>(&self, payload: &T) {
        match serde_json::to_value(payload) {
            Ok(value) => self.send(value),
            Err(e) => tracing::error!(topic = %self.topic, "failed to serialize event: {}", e),
        }
    }

    /// Deliver an error event with the same `{code, message}` shape as method errors.
    pub fn error(&self, error: &ChannelError) {
        self.success(error);
    }

    fn send(&self, payload: serde_json::Value) {
        match &self.target {
            Target::Direct(bus) => bus.emit(&self.topic, payload),
            Target::Queued(tx) => {
                let message = Message::Deliver {
                    topic: Arc::clone(&self.topic),
                    payload,
                };
                if tx.send(message).is_err() {
                    tracing::debug!(topic = %self.topic, "delivery thread stopped, dropping event");
                }
            }
        }
    }
}

/// Dedicated thread that forwards queued events to a bus.
pub struct DeliveryThread {
    tx: Sender<Message>,
    handle: Option<JoinHandle<()>>,
}

impl DeliveryThread {
    pub fn spawn(bus: EventBusRef) -> Self {
        let (tx, rx) = crossbeam_channel::unbounded::<Message>();

        let handle = std::thread::spawn(move || {
            tracing::debug!("delivery thread started");
            for message in rx.iter() {
                match message {
                    Message::Deliver { topic, payload } => bus.emit(&topic, payload),
                    Message::Shutdown => break,
                }
            }
            tracing::debug!("delivery thread stopped");
        });

        Self {
            tx,
            handle: Some(handle),
        }
    }

    /// Sink whose events are delivered on this thread.
    pub fn sink(&self, topic: &str) -> EventSink {
        EventSink {
            topic: Arc::from(topic),
            target: Target::Queued(self.tx.clone()),
        }
    }

    /// Deliver everything queued so far, then stop. Later sends are dropped.
    pub fn shutdown(&mut self) {
        let Some(handle) = self.handle.take() else {
            return;
        };
        let _ = self.tx.send(Message::Shutdown);
        if handle.join().is_err() {
            tracing::error!("delivery thread panicked");
        }
    }

    pub fn is_running(&self) -> bool {
        self.handle.is_some()
    }
}

impl Drop for DeliveryThread {
    fn drop(&mut self) {
        self.shutdown();
    }
}
