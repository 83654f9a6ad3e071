//! The live-update channel.
//!
//! A long-lived publish/subscribe transport used to notify other
//! connected clients of changes: the admin screen broadcasts mutated
//! user records on the `usuarios` topic, and the dashboard consumes
//! incremental sales events from the `grafica` topic. The concrete
//! socket wrapper is supplied by the host; [`MemoryChannel`] is the
//! in-process implementation that backs tests and embedded use.
//!
//! Delivery is at-most-once and unacknowledged. Order is assumed, not
//! verified; there is no deduplication or sequence numbering at this
//! layer.

mod memory;

pub use memory::MemoryChannel;

use async_trait::async_trait;
use serde_json::Value;
use thiserror::Error;
use tokio::sync::broadcast;

/// Errors that can occur on the live-update channel.
#[derive(Debug, Error)]
pub enum LiveError {
    /// The channel is not connected; nothing was sent.
    #[error("live channel is disconnected")]
    Disconnected,

    /// The subscription fell behind and dropped messages.
    #[error("subscription lagged, {0} messages dropped")]
    Lagged(u64),

    /// The channel was torn down while subscribed.
    #[error("subscription closed")]
    Closed,
}

/// Topic names used by the app.
pub mod topics {
    /// Mutated user records, broadcast by the admin screen.
    pub const USERS: &str = "usuarios";

    /// Incremental sales events consumed by the dashboard.
    pub const SALES: &str = "grafica";
}

/// A subscription to one topic.
///
/// Payloads arrive in publish order. Implementations feed subscriptions
/// through a broadcast queue, so a slow consumer observes
/// [`LiveError::Lagged`] instead of blocking publishers.
pub struct Subscription {
    receiver: broadcast::Receiver<Value>,
}

impl Subscription {
    pub(crate) const fn new(receiver: broadcast::Receiver<Value>) -> Self {
        Self { receiver }
    }

    /// Wait for the next payload on this topic.
    ///
    /// # Errors
    ///
    /// Returns [`LiveError::Closed`] once the channel is gone and
    /// [`LiveError::Lagged`] when messages were dropped.
    pub async fn recv(&mut self) -> Result<Value, LiveError> {
        match self.receiver.recv().await {
            Ok(value) => Ok(value),
            Err(broadcast::error::RecvError::Closed) => Err(LiveError::Closed),
            Err(broadcast::error::RecvError::Lagged(n)) => Err(LiveError::Lagged(n)),
        }
    }
}

/// Abstract live-update transport.
#[async_trait]
pub trait LiveChannel: Send + Sync {
    /// Whether the underlying connection is currently up.
    ///
    /// Mutating screens consult this before touching the backend, so a
    /// change made while disconnected can never go unannounced.
    fn is_connected(&self) -> bool;

    /// Send a payload to every subscriber of `topic`.
    ///
    /// Fire-and-forget: no acknowledgment is awaited.
    ///
    /// # Errors
    ///
    /// Returns [`LiveError::Disconnected`] when the channel is down.
    async fn publish(&self, topic: &str, payload: Value) -> Result<(), LiveError>;

    /// Subscribe to a topic.
    ///
    /// Only payloads published after the call are delivered.
    fn subscribe(&self, topic: &str) -> Subscription;
}
