//! In-process implementation of [`LiveChannel`].

use std::collections::HashMap;
use std::sync::RwLock;
use std::sync::atomic::{AtomicBool, Ordering};

use async_trait::async_trait;
use serde_json::Value;
use tokio::sync::broadcast;

use super::{LiveChannel, LiveError, Subscription};

/// Buffered payloads per topic before slow subscribers start lagging.
const TOPIC_CAPACITY: usize = 64;

/// An in-process topic broker.
///
/// Stands in for the externally supplied socket wrapper: same topics,
/// same payloads, same connectivity flag, but everything stays inside
/// the process. `set_connected(false)` simulates a dropped socket, which
/// is what the admin screen's save precondition keys off.
pub struct MemoryChannel {
    topics: RwLock<HashMap<String, broadcast::Sender<Value>>>,
    connected: AtomicBool,
}

impl MemoryChannel {
    /// Create a connected channel.
    #[must_use]
    pub fn new() -> Self {
        Self {
            topics: RwLock::new(HashMap::new()),
            connected: AtomicBool::new(true),
        }
    }

    /// Flip the connectivity flag.
    pub fn set_connected(&self, connected: bool) {
        self.connected.store(connected, Ordering::SeqCst);
    }

    fn sender(&self, topic: &str) -> broadcast::Sender<Value> {
        if let Ok(topics) = self.topics.read()
            && let Some(sender) = topics.get(topic)
        {
            return sender.clone();
        }

        let mut topics = self.topics.write().unwrap_or_else(std::sync::PoisonError::into_inner);
        topics
            .entry(topic.to_owned())
            .or_insert_with(|| broadcast::channel(TOPIC_CAPACITY).0)
            .clone()
    }
}

impl Default for MemoryChannel {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl LiveChannel for MemoryChannel {
    fn is_connected(&self) -> bool {
        self.connected.load(Ordering::SeqCst)
    }

    async fn publish(&self, topic: &str, payload: Value) -> Result<(), LiveError> {
        if !self.is_connected() {
            return Err(LiveError::Disconnected);
        }

        // A send with no subscribers is not an error; the payload just
        // has nobody to reach, same as a socket emit.
        let _ = self.sender(topic).send(payload);
        Ok(())
    }

    fn subscribe(&self, topic: &str) -> Subscription {
        Subscription::new(self.sender(topic).subscribe())
    }
}
