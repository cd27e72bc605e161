//! Input model: palette state and the gesture state machine.
//!
//! `Brush` captures the host UI's palette at the time of a pointer event;
//! `Gesture` is the state carried between pointer-down and pointer-up.

#[cfg(test)]
#[path = "input_test.rs"]
mod input_test;

use events::{Point, Tool};

/// Palette state fed by the host UI: active tool, stroke color, brush width.
#[derive(Debug, Clone)]
pub struct Brush {
    pub tool: Tool,
    /// Hex RGB color, e.g. `"#000000"`.
    pub color: String,
    /// Stroke width in pixels.
    pub brush_size: u32,
}

impl Default for Brush {
    fn default() -> Self {
        Self { tool: Tool::Pencil, color: "#000000".into(), brush_size: 5 }
    }
}

/// One continuous pointer-down-to-pointer-up interaction.
///
/// Freehand tools accumulate every pointer position in `path`; shape tools
/// only need `start` and the latest position. Paint-bucket never enters
/// `Gesturing` — it resolves on pointer-down.
#[derive(Debug, Clone, Default)]
pub enum Gesture {
    /// No gesture in progress; waiting for the next pointer-down.
    #[default]
    Idle,
    /// Pointer is down.
    Gesturing {
        /// Where the pointer went down.
        start: Point,
        /// Latest observed pointer position.
        last: Point,
        /// Accumulated freehand path, seeded with `start`.
        path: Vec<Point>,
    },
}

impl Gesture {
    #[must_use]
    pub fn is_idle(&self) -> bool {
        matches!(self, Self::Idle)
    }
}
