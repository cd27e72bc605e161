//! Deterministic software rasterizer for the shared drawing log.
//!
//! This crate turns an ordered sequence of drawing events back into pixels.
//! Determinism is the whole point: every client (and any late joiner
//! replaying the authoritative log from scratch) must arrive at
//! pixel-identical surfaces, so all geometry is resolved with pure
//! arithmetic — no GPU, no platform canvas, no anti-aliasing.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`surface`] | RGBA pixel buffer, compositing, PNG export |
//! | [`stroke`] | Polyline and shape-outline rasterization |
//! | [`fill`] | Stack-based 4-connected flood fill |
//! | [`replay`] | Two-pass log-to-pixels reconstruction |

pub mod fill;
pub mod replay;
pub mod stroke;
pub mod surface;

pub use fill::flood_fill;
pub use replay::{draw_event, replay};
pub use surface::{ExportError, Surface};
