use serde_json::json;

use super::*;
use crate::event::{Point, Tool};

fn sample_event() -> DrawingEvent {
    DrawingEvent::new(
        Tool::Line,
        vec![Point::new(0.0, 0.0), Point::new(4.0, 4.0)],
        "#000000",
        2,
    )
    .unwrap()
}

// =============================================================================
// Tag names — must match the wire table verbatim
// =============================================================================

#[test]
fn client_message_tags() {
    let drawing = serde_json::to_value(ClientMessage::Drawing { event: sample_event() }).unwrap();
    assert_eq!(drawing["type"], "drawing");

    let clear = serde_json::to_value(ClientMessage::ClearCanvas).unwrap();
    assert_eq!(clear, json!({"type": "clear-canvas"}));
}

#[test]
fn server_message_tags() {
    let count = serde_json::to_value(ServerMessage::UserCount { count: 3 }).unwrap();
    assert_eq!(count, json!({"type": "user-count", "count": 3}));

    let history =
        serde_json::to_value(ServerMessage::DrawingHistory { events: vec![sample_event()] }).unwrap();
    assert_eq!(history["type"], "drawing-history");
    assert_eq!(history["events"].as_array().unwrap().len(), 1);

    let drawing = serde_json::to_value(ServerMessage::Drawing { event: sample_event() }).unwrap();
    assert_eq!(drawing["type"], "drawing");

    let cleared = serde_json::to_value(ServerMessage::CanvasCleared).unwrap();
    assert_eq!(cleared, json!({"type": "canvas-cleared"}));
}

// =============================================================================
// Round trips
// =============================================================================

#[test]
fn client_message_round_trips() {
    for msg in [ClientMessage::Drawing { event: sample_event() }, ClientMessage::ClearCanvas] {
        let text = serde_json::to_string(&msg).unwrap();
        let back: ClientMessage = serde_json::from_str(&text).unwrap();
        assert_eq!(back, msg);
    }
}

#[test]
fn server_message_round_trips() {
    let messages = [
        ServerMessage::UserCount { count: 0 },
        ServerMessage::DrawingHistory { events: vec![sample_event(), sample_event()] },
        ServerMessage::Drawing { event: sample_event() },
        ServerMessage::CanvasCleared,
    ];
    for msg in messages {
        let text = serde_json::to_string(&msg).unwrap();
        let back: ServerMessage = serde_json::from_str(&text).unwrap();
        assert_eq!(back, msg);
    }
}

#[test]
fn unknown_message_type_rejects() {
    assert!(serde_json::from_str::<ClientMessage>("{\"type\":\"resize\"}").is_err());
    assert!(serde_json::from_str::<ServerMessage>("{\"type\":\"pong\"}").is_err());
}

#[test]
fn empty_history_round_trips() {
    let msg = ServerMessage::DrawingHistory { events: Vec::new() };
    let text = serde_json::to_string(&msg).unwrap();
    let back: ServerMessage = serde_json::from_str(&text).unwrap();
    assert_eq!(back, msg);
}
