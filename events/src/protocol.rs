//! Wire message envelopes.
//!
//! DESIGN
//! ======
//! Messages are JSON text frames, internally tagged on `type` with
//! kebab-case names. The transport underneath (WebSocket) provides reliable
//! ordered delivery per connection; there are no acknowledgements, retries,
//! or sequence numbers at this layer — ordering is the transport's ordering
//! plus the hub's single-writer append loop.

#[cfg(test)]
#[path = "protocol_test.rs"]
mod protocol_test;

use serde::{Deserialize, Serialize};

use crate::event::DrawingEvent;

/// Messages a client sends to the hub.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "kebab-case")]
pub enum ClientMessage {
    /// One finalized drawing event to append to the authoritative log.
    Drawing { event: DrawingEvent },
    /// Reset the authoritative log to empty.
    ClearCanvas,
}

/// Messages the hub sends to clients.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "kebab-case")]
pub enum ServerMessage {
    /// Current connection count; broadcast on every connect and disconnect.
    UserCount { count: usize },
    /// Full authoritative log; sent only to a newly registered connection.
    DrawingHistory { events: Vec<DrawingEvent> },
    /// One relayed drawing event (the sender does not receive its own copy).
    Drawing { event: DrawingEvent },
    /// The log was reset; broadcast to every connection including the
    /// client that requested the clear.
    CanvasCleared,
}
