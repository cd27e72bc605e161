//! Shared drawing-event model and wire protocol for Paintroom.
//!
//! This crate owns the wire representation used by both `server` and
//! `client`: the schema of one finalized drawing operation (stroke, shape,
//! or fill), and the JSON message envelopes exchanged over the WebSocket
//! transport. Everything here is pure data — validation at construction and
//! serde derives, no behavior beyond that.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`event`] | [`DrawingEvent`], [`Tool`], [`Point`], schema validation |
//! | [`color`] | Hex RGB triplet parsing |
//! | [`protocol`] | [`ClientMessage`] / [`ServerMessage`] wire envelopes |

pub mod color;
pub mod event;
pub mod protocol;

pub use event::{BlendMode, DrawingEvent, EventError, Point, Tool, ERASER_COLOR};
pub use protocol::{ClientMessage, ServerMessage};
