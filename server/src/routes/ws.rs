//! WebSocket handler — drawing event relay.
//!
//! DESIGN
//! ======
//! On upgrade, the connection gets a fresh id and a bounded outbound
//! channel, registers with the session hub, and enters a `select!` loop:
//! - Incoming client messages → parse + dispatch to the session service
//! - Messages queued by the hub (relays, counts, clears) → forward to the
//!   socket
//!
//! The handler never replies to the sender directly; everything outbound
//! flows through the hub's fan-out so ordering matches the authoritative
//! log. Malformed inbound frames are logged and dropped — there is no
//! error reply and no retry.
//!
//! LIFECYCLE
//! =========
//! 1. Upgrade → `join` (user-count to all, drawing-history to this client)
//! 2. Inbound `drawing` → append to the log, relay to peers
//! 3. Inbound `clear-canvas` → reset the log, `canvas-cleared` to all
//! 4. Close or socket error → `leave` (user-count to all)

#[cfg(test)]
#[path = "ws_test.rs"]
mod tests;

use axum::extract::State;
use axum::extract::ws::{Message, WebSocket, WebSocketUpgrade};
use axum::response::Response;
use events::{ClientMessage, ServerMessage};
use tokio::sync::mpsc;
use tracing::{info, warn};
use uuid::Uuid;

use crate::services;
use crate::state::AppState;

/// Outbound queue depth per connection. A client this far behind starts
/// losing frames rather than backpressuring the hub.
const OUTBOUND_CAPACITY: usize = 256;

pub async fn handle_ws(State(state): State<AppState>, ws: WebSocketUpgrade) -> Response {
    ws.on_upgrade(move |socket| run_ws(socket, state))
}

async fn run_ws(mut socket: WebSocket, state: AppState) {
    let client_id = Uuid::new_v4();
    let (client_tx, mut client_rx) = mpsc::channel::<ServerMessage>(OUTBOUND_CAPACITY);

    services::session::join(&state, client_id, client_tx).await;
    info!(%client_id, "ws: client connected");

    loop {
        tokio::select! {
            inbound = socket.recv() => {
                let Some(Ok(message)) = inbound else { break };
                match message {
                    Message::Text(text) => {
                        process_inbound(&state, client_id, text.as_str()).await;
                    }
                    Message::Close(_) => break,
                    _ => {}
                }
            }
            Some(outbound) = client_rx.recv() => {
                if send_message(&mut socket, &outbound).await.is_err() {
                    break;
                }
            }
        }
    }

    services::session::leave(&state, client_id).await;
    info!(%client_id, "ws: client disconnected");
}

/// Parse one inbound text frame and dispatch it to the session hub.
async fn process_inbound(state: &AppState, client_id: Uuid, text: &str) {
    let message: ClientMessage = match serde_json::from_str(text) {
        Ok(message) => message,
        Err(e) => {
            warn!(%client_id, error = %e, "ws: invalid inbound message");
            return;
        }
    };

    match message {
        ClientMessage::Drawing { event } => {
            services::session::append_drawing(state, client_id, event).await;
        }
        ClientMessage::ClearCanvas => {
            services::session::clear(state).await;
        }
    }
}

async fn send_message(socket: &mut WebSocket, message: &ServerMessage) -> Result<(), ()> {
    let json = match serde_json::to_string(message) {
        Ok(json) => json,
        Err(e) => {
            warn!(error = %e, "ws: failed to serialize message");
            return Err(());
        }
    };
    socket.send(Message::Text(json.into())).await.map_err(|_| ())
}
