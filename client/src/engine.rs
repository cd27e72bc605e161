//! The per-client drawing engine.
//!
//! DESIGN
//! ======
//! The engine is the programmatic surface the host UI consumes: pointer
//! handlers, `undo`/`redo`/`clear`/`export`, and `apply_server` for
//! incoming hub messages. Handlers that produce outbound traffic return a
//! [`ClientMessage`] for the host to send — the engine never owns a socket.
//!
//! Rendering is a full replay of the active history prefix into the owned
//! surface on every mutation, with the in-progress gesture drawn on top as
//! a preview. A repaint per pointer move is the cost model this design
//! accepts for an interactive whiteboard.
//!
//! The host is expected to call `set_surface_size` once the canvas element
//! exists; until then every operation is a silent no-op.
//!
//! CONCURRENCY
//! ===========
//! The engine is single-threaded by construction: gesture tracking,
//! incoming broadcasts, and undo/redo all run on whatever thread owns the
//! `Engine`, so a broadcast can never interleave with a half-applied
//! gesture. A broadcast that lands mid-gesture repaints the committed
//! prefix and re-overlays the live preview.

#[cfg(test)]
#[path = "engine_test.rs"]
mod engine_test;

use events::{ClientMessage, DrawingEvent, Point, ServerMessage, Tool, ERASER_COLOR};
use raster::{draw_event, replay, Surface};

use crate::history::History;
use crate::input::{Brush, Gesture};

/// Per-client drawing state: local log, gesture, palette, rendered surface.
#[derive(Debug, Default)]
pub struct Engine {
    history: History,
    gesture: Gesture,
    brush: Brush,
    surface: Option<Surface>,
    user_count: usize,
}

impl Engine {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    // --- Host wiring ---

    /// Create (or recreate) the rendering surface and repaint the active
    /// history onto it. Events keep their captured coordinates — a resize
    /// never rescales the log.
    pub fn set_surface_size(&mut self, width: u32, height: u32) {
        self.surface = Some(Surface::new(width, height));
        self.repaint();
    }

    /// The rendered surface, once the host has sized it.
    #[must_use]
    pub fn surface(&self) -> Option<&Surface> {
        self.surface.as_ref()
    }

    #[must_use]
    pub fn history(&self) -> &History {
        &self.history
    }

    /// Connection count last broadcast by the hub.
    #[must_use]
    pub fn user_count(&self) -> usize {
        self.user_count
    }

    // --- Palette ---

    pub fn set_tool(&mut self, tool: Tool) {
        self.brush.tool = tool;
    }

    pub fn set_color(&mut self, color: impl Into<String>) {
        self.brush.color = color.into();
    }

    pub fn set_brush_size(&mut self, brush_size: u32) {
        self.brush.brush_size = brush_size;
    }

    // --- Pointer events ---

    /// Begin a gesture, or — for paint-bucket — resolve the fill against
    /// the live surface immediately and return the event to send.
    #[must_use]
    pub fn pointer_down(&mut self, at: Point) -> Option<ClientMessage> {
        self.surface.as_ref()?;

        if self.brush.tool == Tool::PaintBucket {
            // No gesture: fill now, commit, send. The live surface already
            // shows the result, so no repaint is needed.
            let event = DrawingEvent::fill(at, self.brush.color.clone()).ok()?;
            if let Some(surface) = self.surface.as_mut() {
                draw_event(surface, &event);
            }
            self.history.commit(event.clone());
            return Some(ClientMessage::Drawing { event });
        }

        self.gesture = Gesture::Gesturing { start: at, last: at, path: vec![at] };
        None
    }

    /// Track the pointer during a gesture and repaint with the preview.
    pub fn pointer_move(&mut self, at: Point) {
        if self.surface.is_none() {
            return;
        }
        let Gesture::Gesturing { last, path, .. } = &mut self.gesture else {
            return;
        };
        *last = at;
        if self.brush.tool.is_freehand() {
            path.push(at);
        }
        self.repaint();
    }

    /// Finalize the gesture into a [`DrawingEvent`], commit it locally, and
    /// return it for the host to send.
    #[must_use]
    pub fn pointer_up(&mut self, at: Point) -> Option<ClientMessage> {
        self.surface.as_ref()?;
        let Gesture::Gesturing { start, mut path, .. } = std::mem::take(&mut self.gesture) else {
            return None;
        };

        let tool = self.brush.tool;
        let points = if tool.is_freehand() {
            // Capture the release point; a plain click still yields a
            // two-point degenerate path that paints a dot.
            if path.len() < 2 || path.last() != Some(&at) {
                path.push(at);
            }
            path
        } else {
            vec![start, at]
        };
        let color = if tool == Tool::Eraser {
            ERASER_COLOR.to_owned()
        } else {
            self.brush.color.clone()
        };

        let event = DrawingEvent::new(tool, points, color, self.brush.brush_size).ok()?;
        self.history.commit(event.clone());
        self.repaint();
        Some(ClientMessage::Drawing { event })
    }

    // --- History controls ---

    /// Step back one event and repaint. Silent no-op at the start of the
    /// log or before the surface exists. Purely local — the hub's log is
    /// untouched.
    pub fn undo(&mut self) {
        if self.surface.is_none() {
            return;
        }
        if self.history.undo() {
            self.repaint();
        }
    }

    /// Step forward one event and repaint. Silent no-op at the end of the
    /// log or before the surface exists.
    pub fn redo(&mut self) {
        if self.surface.is_none() {
            return;
        }
        if self.history.redo() {
            self.repaint();
        }
    }

    /// Wipe local history and surface, and return the clear message for the
    /// hub — the one history-mutating local action that does propagate.
    #[must_use]
    pub fn clear(&mut self) -> Option<ClientMessage> {
        self.surface.as_ref()?;
        self.history.clear();
        self.gesture = Gesture::Idle;
        if let Some(surface) = self.surface.as_mut() {
            surface.clear();
        }
        Some(ClientMessage::ClearCanvas)
    }

    /// Serialize the current surface as a PNG. `None` before the surface
    /// exists or if encoding fails.
    #[must_use]
    pub fn export(&self) -> Option<Vec<u8>> {
        self.surface.as_ref()?.encode_png().ok()
    }

    // --- Incoming hub messages ---

    /// Apply one message from the hub to local state.
    pub fn apply_server(&mut self, message: ServerMessage) {
        match message {
            ServerMessage::UserCount { count } => {
                self.user_count = count;
            }
            ServerMessage::DrawingHistory { events } => {
                self.history.replace(events);
                self.repaint();
            }
            ServerMessage::Drawing { event } => {
                // Relayed events are appended at the tail and the cursor
                // jumps there, even past a local undo. Invalid events are
                // skipped silently.
                if event.validate().is_err() {
                    return;
                }
                self.history.append_remote(event);
                self.repaint();
            }
            ServerMessage::CanvasCleared => {
                self.history.clear();
                if let Some(surface) = self.surface.as_mut() {
                    surface.clear();
                }
            }
        }
    }

    // --- Rendering ---

    /// Replay the active prefix and overlay the in-progress gesture.
    fn repaint(&mut self) {
        let preview = self.preview_event();
        let Some(surface) = self.surface.as_mut() else {
            return;
        };
        replay(surface, self.history.active());
        if let Some(preview) = &preview {
            draw_event(surface, preview);
        }
    }

    /// The in-progress gesture as a drawable (uncommitted) event.
    fn preview_event(&self) -> Option<DrawingEvent> {
        let Gesture::Gesturing { start, last, path } = &self.gesture else {
            return None;
        };
        let tool = self.brush.tool;
        let points = if tool.is_freehand() { path.clone() } else { vec![*start, *last] };
        let color = if tool == Tool::Eraser {
            ERASER_COLOR.to_owned()
        } else {
            self.brush.color.clone()
        };
        DrawingEvent::new(tool, points, color, self.brush.brush_size).ok()
    }
}
