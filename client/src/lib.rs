//! Per-client drawing engine for the collaborative canvas.
//!
//! This crate owns everything that happens between the pointer and the
//! wire on one participant's machine: the gesture state machine, the local
//! copy of the shared event log with its undo cursor, and the locally
//! rendered surface. It never touches a socket — pointer handlers and
//! `clear()` return [`events::ClientMessage`] values for the host to send,
//! and the host feeds received [`events::ServerMessage`]s back in. The
//! host UI (tool palette, buttons, canvas widget) consumes the engine
//! through [`engine::Engine`].
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`engine`] | The engine: pointer handlers, undo/redo/clear/export |
//! | [`history`] | Local event log + undo cursor |
//! | [`input`] | Palette state and the gesture state machine |

pub mod engine;
pub mod history;
pub mod input;

pub use engine::Engine;
pub use history::History;
pub use input::{Brush, Gesture};
