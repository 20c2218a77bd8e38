//! Fan-out of live order events to the board.
//!
//! The push-notification channel delivers order events to the console's
//! webhook; this feed broadcasts them to every connected board stream.
//! No order state is kept here - a board that misses events (slow
//! consumer, reconnect) refetches the order listing instead.

use tokio::sync::broadcast;
use tracing::debug;

use crate::platform::OrderEvent;

/// How many events a lagging subscriber may fall behind before the
/// channel drops it.
const FEED_CAPACITY: usize = 256;

/// Broadcast hub for live order events.
#[derive(Clone)]
pub struct OrderFeed {
    tx: broadcast::Sender<OrderEvent>,
}

impl OrderFeed {
    /// Create the feed.
    #[must_use]
    pub fn new() -> Self {
        let (tx, _rx) = broadcast::channel(FEED_CAPACITY);
        Self { tx }
    }

    /// Publish one event to every connected board.
    ///
    /// Events published while no board is connected are dropped; the
    /// boards refetch on connect anyway.
    pub fn publish(&self, event: OrderEvent) {
        match self.tx.send(event) {
            Ok(receivers) => debug!(receivers, "order event published"),
            Err(_) => debug!("order event dropped, no boards connected"),
        }
    }

    /// Subscribe a new board stream.
    #[must_use]
    pub fn subscribe(&self) -> broadcast::Receiver<OrderEvent> {
        self.tx.subscribe()
    }

    /// Number of boards currently connected.
    #[must_use]
    pub fn connected_boards(&self) -> usize {
        self.tx.receiver_count()
    }
}

impl Default for OrderFeed {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for OrderFeed {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OrderFeed")
            .field("connected_boards", &self.connected_boards())
            .finish()
    }
}
