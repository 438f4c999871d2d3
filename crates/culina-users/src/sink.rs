//! Event sink implementations.

use std::sync::Mutex;

use culina_core::error::{CulinaError, CulinaResult};
use culina_core::models::event::{EventChannel, UserEvent};
use culina_core::publisher::EventSink;
use tracing::info;

/// Emits serialized events through structured logging at the
/// transport boundary. Stands in for a broker-backed sink when no
/// transport is wired.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingSink;

impl EventSink for TracingSink {
    async fn publish(&self, event: UserEvent, channel: EventChannel) -> CulinaResult<()> {
        let payload = serde_json::to_string(&event)
            .map_err(|e| CulinaError::Publish(format!("event serialization: {e}")))?;
        info!(
            channel = channel.as_str(),
            user_id = %event.user_id,
            payload,
            "lifecycle event published"
        );
        Ok(())
    }
}

/// Records published events in memory. Used by tests to assert on
/// emission counts and channel routing.
#[derive(Debug, Default)]
pub struct MemorySink {
    events: Mutex<Vec<(UserEvent, EventChannel)>>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of everything published so far.
    pub fn events(&self) -> Vec<(UserEvent, EventChannel)> {
        self.events.lock().unwrap().clone()
    }

    pub fn len(&self) -> usize {
        self.events.lock().unwrap().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl EventSink for MemorySink {
    async fn publish(&self, event: UserEvent, channel: EventChannel) -> CulinaResult<()> {
        self.events.lock().unwrap().push((event, channel));
        Ok(())
    }
}
