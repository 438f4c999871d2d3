//! Event sink trait — the boundary to the message transport.

use crate::error::CulinaResult;
use crate::models::event::{EventChannel, UserEvent};

/// A fire-and-forget publish sink for user lifecycle events.
///
/// At-least-once delivery is the transport's concern; this core does
/// not retry internally. A publish failure after a successful
/// persistence step is an accepted inconsistency (logged by the
/// caller, never rolled back).
pub trait EventSink: Send + Sync {
    fn publish(
        &self,
        event: UserEvent,
        channel: EventChannel,
    ) -> impl Future<Output = CulinaResult<()>> + Send;
}

impl<S: EventSink> EventSink for std::sync::Arc<S> {
    fn publish(
        &self,
        event: UserEvent,
        channel: EventChannel,
    ) -> impl Future<Output = CulinaResult<()>> + Send {
        (**self).publish(event, channel)
    }
}
