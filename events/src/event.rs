//! Drawing event model: the atomic, immutable unit of the shared log.
//!
//! DESIGN
//! ======
//! A [`DrawingEvent`] is one finalized paint operation — a freehand stroke,
//! a shape outline, or a flood fill. Events are append-only: once one lands
//! in any log (the hub's authoritative copy or a client's local copy) it is
//! never edited, only appended after or truncated away. Point cardinality is
//! tool-dependent and checked at construction; events received off the wire
//! can be re-checked with [`DrawingEvent::validate`].
//!
//! Erasing is an explicit compositing mode ([`BlendMode::DestinationOut`])
//! resolved from the tool, not a color the renderer interprets. The `color`
//! field on eraser events still carries [`ERASER_COLOR`] so logs stay
//! readable by clients that paint white instead of compositing.

#[cfg(test)]
#[path = "event_test.rs"]
mod event_test;

use serde::{Deserialize, Serialize};

use crate::color::parse_hex_rgb;

/// Sentinel color stamped on eraser events for wire compatibility. The
/// renderer never reads it; erasers composite as destination-out.
pub const ERASER_COLOR: &str = "#FFFFFF";

/// A point in canvas-local pixel coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Which drawing tool produced an event. Closed set; unknown tool names are
/// rejected at the decode boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Tool {
    /// Freehand stroke through every captured path point.
    Pencil,
    /// Freehand stroke that composites as destination-out.
    Eraser,
    /// Single segment between two points.
    Line,
    /// Axis-aligned outline; the two points are opposite corners.
    Rectangle,
    /// Ellipse outline inscribed in the two-point bounding box.
    Oval,
    /// Isoceles outline: apex at point 0, base at point 1 and its horizontal
    /// mirror through the apex.
    Triangle,
    /// Flood fill seeded at a single point.
    PaintBucket,
}

impl Tool {
    /// Whether this tool records a full freehand path (2..N points).
    #[must_use]
    pub fn is_freehand(self) -> bool {
        matches!(self, Self::Pencil | Self::Eraser)
    }

    /// Whether this tool records exactly a start/end point pair.
    #[must_use]
    pub fn is_shape(self) -> bool {
        matches!(self, Self::Line | Self::Rectangle | Self::Oval | Self::Triangle)
    }

    /// How strokes from this tool composite onto the surface.
    #[must_use]
    pub fn blend_mode(self) -> BlendMode {
        match self {
            Self::Eraser => BlendMode::DestinationOut,
            _ => BlendMode::SourceOver,
        }
    }
}

/// How a paint operation composites onto existing pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum BlendMode {
    /// Write the stroke color at full opacity.
    SourceOver,
    /// Write full transparency — erased regions stay erased under later
    /// compositing instead of becoming opaque white.
    DestinationOut,
}

/// Validation failure for a [`DrawingEvent`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EventError {
    /// The point count does not match what the tool records.
    #[error("{tool:?} expects {expected} point(s), got {got}")]
    PointCount {
        tool: Tool,
        expected: &'static str,
        got: usize,
    },
    /// Brush size must be a positive pixel width.
    #[error("brush size must be positive")]
    ZeroBrushSize,
    /// The color is not a parseable `#RRGGBB` triplet.
    #[error("invalid hex color: {0}")]
    InvalidColor(String),
}

/// One finalized paint operation on the shared log.
///
/// Field names follow the wire format (`brushSize`); `points` cardinality is
/// tool-dependent — see [`Tool`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DrawingEvent {
    pub tool: Tool,
    pub points: Vec<Point>,
    /// Hex RGB stroke/fill color. Ignored by the renderer for erasers.
    pub color: String,
    /// Stroke width in pixels. Unused by paint-bucket but always positive.
    pub brush_size: u32,
}

impl DrawingEvent {
    /// Validating constructor.
    ///
    /// # Errors
    ///
    /// Returns [`EventError`] when the point count does not match the tool,
    /// the brush size is zero, or the color is not a hex triplet.
    pub fn new(
        tool: Tool,
        points: Vec<Point>,
        color: impl Into<String>,
        brush_size: u32,
    ) -> Result<Self, EventError> {
        let event = Self { tool, points, color: color.into(), brush_size };
        event.validate()?;
        Ok(event)
    }

    /// Construct a paint-bucket event from its seed point.
    ///
    /// # Errors
    ///
    /// Returns [`EventError::InvalidColor`] when the fill color is not a hex
    /// triplet.
    pub fn fill(seed: Point, color: impl Into<String>) -> Result<Self, EventError> {
        Self::new(Tool::PaintBucket, vec![seed], color, 1)
    }

    /// Re-check an event received off the wire against the schema rules.
    ///
    /// # Errors
    ///
    /// Returns the first [`EventError`] found, if any.
    pub fn validate(&self) -> Result<(), EventError> {
        let got = self.points.len();
        let expected = match self.tool {
            Tool::Pencil | Tool::Eraser if got < 2 => Some("2 or more"),
            Tool::Line | Tool::Rectangle | Tool::Oval | Tool::Triangle if got != 2 => {
                Some("exactly 2")
            }
            Tool::PaintBucket if got != 1 => Some("exactly 1"),
            _ => None,
        };
        if let Some(expected) = expected {
            return Err(EventError::PointCount { tool: self.tool, expected, got });
        }
        if self.brush_size == 0 {
            return Err(EventError::ZeroBrushSize);
        }
        if parse_hex_rgb(&self.color).is_none() {
            return Err(EventError::InvalidColor(self.color.clone()));
        }
        Ok(())
    }
}
