//! Client-local event log with an undo cursor.
//!
//! DESIGN
//! ======
//! Each client holds its own copy of the shared log plus a cursor counting
//! how many events are *active* for rendering: the active prefix is
//! `events[..cursor]`, and `cursor == events.len()` means fully up to date.
//! Undo and redo only move the cursor — they never touch the hub, whose
//! authoritative log knows nothing about any client's view.
//!
//! Local commits and remote appends differ in one way that matters: a local
//! commit discards the undone tail first (the usual editor behavior), while
//! a remote append lands after the undone tail and drags the cursor to the
//! new end, silently re-activating events the user had undone. That is the
//! accepted cost of client-local undo over a shared log, reproduced here
//! deliberately — redesigning it means per-event provenance and a splice
//! policy on the wire.

#[cfg(test)]
#[path = "history_test.rs"]
mod history_test;

use events::DrawingEvent;

/// Ordered local log of drawing events plus the undo cursor.
#[derive(Debug, Clone, Default)]
pub struct History {
    events: Vec<DrawingEvent>,
    /// Number of active events; the rendered prefix is `events[..cursor]`.
    cursor: usize,
}

impl History {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The prefix of the log that is active for rendering.
    #[must_use]
    pub fn active(&self) -> &[DrawingEvent] {
        &self.events[..self.cursor]
    }

    /// Every held event, including any undone tail.
    #[must_use]
    pub fn all(&self) -> &[DrawingEvent] {
        &self.events
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.events.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    #[must_use]
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    #[must_use]
    pub fn can_undo(&self) -> bool {
        self.cursor > 0
    }

    #[must_use]
    pub fn can_redo(&self) -> bool {
        self.cursor < self.events.len()
    }

    /// Append a locally finalized event: the undone tail (if any) is
    /// discarded and the cursor moves to the new end.
    pub fn commit(&mut self, event: DrawingEvent) {
        self.events.truncate(self.cursor);
        self.events.push(event);
        self.cursor = self.events.len();
    }

    /// Append a relayed remote event at the tail and advance the cursor to
    /// the new end — regardless of where an undo left it.
    pub fn append_remote(&mut self, event: DrawingEvent) {
        self.events.push(event);
        self.cursor = self.events.len();
    }

    /// Step the cursor back one event. Returns `false` (and does nothing)
    /// at the start of the log.
    pub fn undo(&mut self) -> bool {
        if self.cursor == 0 {
            return false;
        }
        self.cursor -= 1;
        true
    }

    /// Step the cursor forward one event. Returns `false` (and does
    /// nothing) at the end of the log.
    pub fn redo(&mut self) -> bool {
        if self.cursor >= self.events.len() {
            return false;
        }
        self.cursor += 1;
        true
    }

    /// Drop everything; the log and cursor return to the empty state.
    pub fn clear(&mut self) {
        self.events.clear();
        self.cursor = 0;
    }

    /// Replace the whole log with a hub snapshot, cursor at the tail.
    pub fn replace(&mut self, events: Vec<DrawingEvent>) {
        self.cursor = events.len();
        self.events = events;
    }
}
