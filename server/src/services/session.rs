//! Session hub service — connection registry, authoritative log, fan-out.
//!
//! DESIGN
//! ======
//! The hub is single-writer with respect to the log: every operation holds
//! the session write lock across both the mutation and the fan-out, so all
//! connections observe one total append order. Clients depend on that —
//! each one replays its local copy of the log assuming everyone agreed on
//! the same order.
//!
//! Fan-out is best-effort `try_send` into bounded per-client channels: a
//! client that stops draining its channel loses frames instead of stalling
//! every other participant.

#[cfg(test)]
#[path = "session_test.rs"]
mod tests;

use events::{DrawingEvent, ServerMessage};
use tokio::sync::mpsc;
use tracing::{info, warn};
use uuid::Uuid;

use crate::state::{AppState, Session};

/// Register a connection: broadcast the new user count to every connection
/// (the new one included), then queue the full authoritative history to the
/// new connection only.
pub async fn join(state: &AppState, client_id: Uuid, tx: mpsc::Sender<ServerMessage>) {
    let mut session = state.session.write().await;
    session.clients.insert(client_id, tx);

    let count = session.user_count();
    broadcast(&session, &ServerMessage::UserCount { count }, None);
    send_to(&session, client_id, ServerMessage::DrawingHistory { events: session.history.clone() });

    info!(%client_id, count, "session: client joined");
}

/// Deregister a connection and broadcast the decremented user count. The
/// disconnected client itself is never notified — loss is only visible to
/// the others through the count.
pub async fn leave(state: &AppState, client_id: Uuid) {
    let mut session = state.session.write().await;
    if session.clients.remove(&client_id).is_none() {
        return;
    }

    let count = session.user_count();
    broadcast(&session, &ServerMessage::UserCount { count }, None);

    info!(%client_id, count, "session: client left");
}

/// Append one drawing event to the authoritative log and relay it to every
/// connection except the sender, who already holds it locally. Events are
/// relayed verbatim — no validation, no acknowledgement.
pub async fn append_drawing(state: &AppState, sender: Uuid, event: DrawingEvent) {
    let mut session = state.session.write().await;
    session.history.push(event.clone());
    broadcast(&session, &ServerMessage::Drawing { event }, Some(sender));

    info!(%sender, history_len = session.history.len(), "session: drawing appended");
}

/// Reset the authoritative log to empty and broadcast the clear to every
/// connection — including the requester, whose local state must follow the
/// authoritative reset.
pub async fn clear(state: &AppState) {
    let mut session = state.session.write().await;
    session.history.clear();
    broadcast(&session, &ServerMessage::CanvasCleared, None);

    info!("session: canvas cleared");
}

/// Queue a message to every connection, optionally excluding one.
fn broadcast(session: &Session, message: &ServerMessage, exclude: Option<Uuid>) {
    for (client_id, tx) in &session.clients {
        if exclude == Some(*client_id) {
            continue;
        }
        if tx.try_send(message.clone()).is_err() {
            warn!(%client_id, "session: dropped message for slow client");
        }
    }
}

/// Queue a message to a single connection.
fn send_to(session: &Session, client_id: Uuid, message: ServerMessage) {
    let Some(tx) = session.clients.get(&client_id) else {
        return;
    };
    if tx.try_send(message).is_err() {
        warn!(%client_id, "session: dropped message for slow client");
    }
}
