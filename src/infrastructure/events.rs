//! # Event Publisher Adapters
//!
//! Implementations of the [`TradeEventPublisher`] port.
//!
//! [`TracingEventPublisher`] emits each event as a structured log record,
//! which is where the notification glue taps in for a single-process
//! deployment. [`InMemoryEventPublisher`] records events for assertions
//! in tests.

use crate::application::use_cases::TradeEventPublisher;
use crate::domain::events::TradeEvent;
use async_trait::async_trait;
use std::sync::{Arc, Mutex};
use tracing::info;

/// Publishes trade events as structured log records.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingEventPublisher;

impl TracingEventPublisher {
    /// Creates a new tracing-backed publisher.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl TradeEventPublisher for TracingEventPublisher {
    async fn publish(&self, event: TradeEvent) -> Result<(), String> {
        info!(
            event_id = %event.event_id(),
            trade_id = %event.trade_id(),
            event = event.kind().name(),
            "trade event published"
        );
        Ok(())
    }
}

/// Records published trade events for test assertions.
#[derive(Debug, Clone, Default)]
pub struct InMemoryEventPublisher {
    events: Arc<Mutex<Vec<TradeEvent>>>,
}

impl InMemoryEventPublisher {
    /// Creates a new empty recording publisher.
    #[must_use]
    pub fn new() -> Self {
        Self {
            events: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Returns a snapshot of the recorded events, in publish order.
    #[must_use]
    pub fn events(&self) -> Vec<TradeEvent> {
        self.events.lock().map(|guard| guard.clone()).unwrap_or_default()
    }

    /// Returns the number of recorded events.
    #[must_use]
    pub fn len(&self) -> usize {
        self.events.lock().map(|guard| guard.len()).unwrap_or(0)
    }

    /// Returns true if nothing has been published.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Discards the recorded events.
    pub fn clear(&self) {
        if let Ok(mut guard) = self.events.lock() {
            guard.clear();
        }
    }
}

#[async_trait]
impl TradeEventPublisher for InMemoryEventPublisher {
    async fn publish(&self, event: TradeEvent) -> Result<(), String> {
        self.events
            .lock()
            .map_err(|e| e.to_string())?
            .push(event);
        Ok(())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::domain::entities::Trade;
    use crate::domain::value_objects::{ObjectId, UserId};

    fn create_test_trade() -> Trade {
        Trade::new(
            UserId::new("user-1"),
            UserId::new("user-2"),
            vec![ObjectId::new("obj-1")],
        )
        .unwrap()
    }

    #[tokio::test]
    async fn tracing_publisher_accepts_events() {
        let publisher = TracingEventPublisher::new();
        let trade = create_test_trade();

        let result = publisher.publish(TradeEvent::requested(&trade)).await;
        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn in_memory_publisher_records_in_order() {
        let publisher = InMemoryEventPublisher::new();
        let trade = create_test_trade();
        assert!(publisher.is_empty());

        publisher
            .publish(TradeEvent::requested(&trade))
            .await
            .unwrap();
        publisher
            .publish(TradeEvent::cancelled(&trade))
            .await
            .unwrap();

        let events = publisher.events();
        assert_eq!(events.len(), 2);
        assert_eq!(events[0].kind().name(), "trade_requested");
        assert_eq!(events[1].kind().name(), "trade_cancelled");
    }

    #[tokio::test]
    async fn in_memory_publisher_clear() {
        let publisher = InMemoryEventPublisher::new();
        let trade = create_test_trade();

        publisher
            .publish(TradeEvent::requested(&trade))
            .await
            .unwrap();
        assert_eq!(publisher.len(), 1);

        publisher.clear();
        assert!(publisher.is_empty());
    }
}
