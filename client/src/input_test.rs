use events::{Point, Tool};

use super::*;

#[test]
fn brush_defaults_match_the_palette() {
    let brush = Brush::default();
    assert_eq!(brush.tool, Tool::Pencil);
    assert_eq!(brush.color, "#000000");
    assert_eq!(brush.brush_size, 5);
}

#[test]
fn gesture_starts_idle() {
    assert!(Gesture::default().is_idle());
}

#[test]
fn gesturing_is_not_idle() {
    let gesture = Gesture::Gesturing {
        start: Point::new(1.0, 2.0),
        last: Point::new(3.0, 4.0),
        path: vec![Point::new(1.0, 2.0)],
    };
    assert!(!gesture.is_idle());
}
