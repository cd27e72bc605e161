use serde_json::json;

use super::*;

fn pts(coords: &[(f64, f64)]) -> Vec<Point> {
    coords.iter().map(|&(x, y)| Point::new(x, y)).collect()
}

// =============================================================================
// Tool serde
// =============================================================================

#[test]
fn tool_serde_all_variants() {
    let cases = [
        (Tool::Pencil, "\"pencil\""),
        (Tool::Eraser, "\"eraser\""),
        (Tool::Line, "\"line\""),
        (Tool::Rectangle, "\"rectangle\""),
        (Tool::Oval, "\"oval\""),
        (Tool::Triangle, "\"triangle\""),
        (Tool::PaintBucket, "\"paint-bucket\""),
    ];
    for (tool, expected) in cases {
        assert_eq!(serde_json::to_string(&tool).unwrap(), expected);
        let back: Tool = serde_json::from_str(expected).unwrap();
        assert_eq!(back, tool);
    }
}

#[test]
fn tool_deserialize_unknown_rejects() {
    assert!(serde_json::from_str::<Tool>("\"spraycan\"").is_err());
}

#[test]
fn tool_classification() {
    assert!(Tool::Pencil.is_freehand());
    assert!(Tool::Eraser.is_freehand());
    assert!(!Tool::Line.is_freehand());
    assert!(Tool::Rectangle.is_shape());
    assert!(Tool::Triangle.is_shape());
    assert!(!Tool::PaintBucket.is_shape());
    assert!(!Tool::PaintBucket.is_freehand());
}

#[test]
fn only_eraser_composites_destination_out() {
    assert_eq!(Tool::Eraser.blend_mode(), BlendMode::DestinationOut);
    for tool in [Tool::Pencil, Tool::Line, Tool::Rectangle, Tool::Oval, Tool::Triangle, Tool::PaintBucket] {
        assert_eq!(tool.blend_mode(), BlendMode::SourceOver);
    }
}

// =============================================================================
// DrawingEvent wire format
// =============================================================================

#[test]
fn event_serializes_camel_case() {
    let event = DrawingEvent::new(Tool::Line, pts(&[(0.0, 0.0), (10.0, 5.0)]), "#1F6FEB", 3).unwrap();
    let value = serde_json::to_value(&event).unwrap();
    assert_eq!(
        value,
        json!({
            "tool": "line",
            "points": [{"x": 0.0, "y": 0.0}, {"x": 10.0, "y": 5.0}],
            "color": "#1F6FEB",
            "brushSize": 3,
        })
    );
}

#[test]
fn event_round_trips() {
    let event = DrawingEvent::new(
        Tool::Pencil,
        pts(&[(1.5, 2.5), (3.0, 4.0), (5.0, 6.0)]),
        "#000000",
        5,
    )
    .unwrap();
    let text = serde_json::to_string(&event).unwrap();
    let back: DrawingEvent = serde_json::from_str(&text).unwrap();
    assert_eq!(back, event);
}

// =============================================================================
// Validation
// =============================================================================

#[test]
fn freehand_requires_at_least_two_points() {
    let err = DrawingEvent::new(Tool::Pencil, pts(&[(0.0, 0.0)]), "#000000", 5).unwrap_err();
    assert!(matches!(err, EventError::PointCount { tool: Tool::Pencil, got: 1, .. }));

    assert!(DrawingEvent::new(Tool::Eraser, pts(&[(0.0, 0.0), (1.0, 1.0)]), ERASER_COLOR, 5).is_ok());
}

#[test]
fn freehand_accepts_long_paths() {
    let path: Vec<Point> = (0..40).map(|i| Point::new(f64::from(i), f64::from(i * 2))).collect();
    assert!(DrawingEvent::new(Tool::Pencil, path, "#336699", 2).is_ok());
}

#[test]
fn shapes_require_exactly_two_points() {
    for tool in [Tool::Line, Tool::Rectangle, Tool::Oval, Tool::Triangle] {
        let err = DrawingEvent::new(tool, pts(&[(0.0, 0.0)]), "#000000", 1).unwrap_err();
        assert!(matches!(err, EventError::PointCount { got: 1, .. }));

        let err = DrawingEvent::new(tool, pts(&[(0.0, 0.0), (1.0, 1.0), (2.0, 2.0)]), "#000000", 1)
            .unwrap_err();
        assert!(matches!(err, EventError::PointCount { got: 3, .. }));
    }
}

#[test]
fn paint_bucket_requires_exactly_one_point() {
    let err =
        DrawingEvent::new(Tool::PaintBucket, pts(&[(0.0, 0.0), (1.0, 1.0)]), "#ff0000", 1).unwrap_err();
    assert!(matches!(err, EventError::PointCount { tool: Tool::PaintBucket, got: 2, .. }));

    let event = DrawingEvent::fill(Point::new(30.0, 30.0), "#ff0000").unwrap();
    assert_eq!(event.tool, Tool::PaintBucket);
    assert_eq!(event.points.len(), 1);
}

#[test]
fn zero_brush_size_rejects() {
    let err = DrawingEvent::new(Tool::Line, pts(&[(0.0, 0.0), (1.0, 1.0)]), "#000000", 0).unwrap_err();
    assert_eq!(err, EventError::ZeroBrushSize);
}

#[test]
fn invalid_color_rejects() {
    let err = DrawingEvent::new(Tool::Line, pts(&[(0.0, 0.0), (1.0, 1.0)]), "red", 1).unwrap_err();
    assert_eq!(err, EventError::InvalidColor("red".into()));
}

#[test]
fn validate_catches_wire_tampering() {
    // A structurally valid JSON event whose cardinality is wrong for the tool.
    let raw = json!({
        "tool": "paint-bucket",
        "points": [{"x": 1.0, "y": 1.0}, {"x": 2.0, "y": 2.0}],
        "color": "#ff0000",
        "brushSize": 1,
    });
    let event: DrawingEvent = serde_json::from_value(raw).unwrap();
    assert!(event.validate().is_err());
}
