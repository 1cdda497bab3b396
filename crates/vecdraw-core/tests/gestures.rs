//! Whole-gesture scenarios driven through the tool manager.

use kurbo::{Point, Rect};
use vecdraw_core::shapes::Rectangle;
use vecdraw_core::{Canvas, PointerEvent, Shape, ShapeKind, ToolKind, ToolManager};

fn down(x: f64, y: f64) -> PointerEvent {
    PointerEvent::Down {
        position: Point::new(x, y),
    }
}

fn moved(x: f64, y: f64) -> PointerEvent {
    PointerEvent::Move {
        position: Point::new(x, y),
    }
}

fn up(x: f64, y: f64) -> PointerEvent {
    PointerEvent::Up {
        position: Point::new(x, y),
    }
}

fn play(manager: &mut ToolManager, canvas: &mut Canvas, events: &[PointerEvent]) {
    for event in events {
        manager.dispatch(canvas, *event).unwrap();
    }
}

#[test]
fn test_box_gestures_normalize_corners() {
    let cases = [
        (10.0, 20.0, 110.0, 70.0),
        (110.0, 70.0, 10.0, 20.0),
        (110.0, 20.0, 10.0, 70.0),
        (10.0, 70.0, 110.0, 20.0),
        (-40.0, -5.0, -60.0, 15.0),
    ];
    let tools = [
        (ToolKind::Rectangle, ShapeKind::Rectangle),
        (ToolKind::Ellipse, ShapeKind::Ellipse),
        (ToolKind::Text, ShapeKind::Text),
        (ToolKind::Arc, ShapeKind::Arc),
    ];

    for (tool, kind) in tools {
        for (x1, y1, x2, y2) in cases {
            let mut canvas = Canvas::new();
            let mut manager = ToolManager::new();
            manager.set_tool(&mut canvas, tool).unwrap();
            play(
                &mut manager,
                &mut canvas,
                &[down(x1, y1), moved(x2, y2), down(x2, y2)],
            );

            let shape = canvas.shapes().next().expect("gesture creates a shape");
            assert_eq!(shape.kind(), kind);
            assert_eq!(
                shape.control_points(),
                vec![
                    Point::new(x1.min(x2), y1.min(y2)),
                    Point::new(x1.max(x2), y1.max(y2)),
                ],
                "{} from ({}, {}) to ({}, {})",
                tool,
                x1,
                y1,
                x2,
                y2
            );
            assert!(!canvas.is_captured());
            assert!(canvas.overlay().is_empty());
        }
    }
}

#[test]
fn test_overlapping_rectangles_first_added_wins() {
    let mut canvas = Canvas::new();
    let a = canvas.add_shape(Shape::Rectangle(Rectangle::new(
        Point::new(0.0, 0.0),
        Point::new(100.0, 100.0),
    )));
    let b = canvas.add_shape(Shape::Rectangle(Rectangle::new(
        Point::new(50.0, 50.0),
        Point::new(150.0, 150.0),
    )));

    let mut manager = ToolManager::new();
    manager.set_tool(&mut canvas, ToolKind::Select).unwrap();
    play(&mut manager, &mut canvas, &[down(75.0, 75.0), up(75.0, 75.0)]);

    assert_eq!(manager.selection().selected(), vec![a]);
    assert!(canvas.bounds(a).unwrap().is_visible());
    assert!(!canvas.bounds(b).unwrap().is_visible());
}

#[test]
fn test_draw_select_move_undo() {
    let mut canvas = Canvas::new();
    let mut manager = ToolManager::new();

    manager.handle_key(&mut canvas, 'r').unwrap();
    play(
        &mut manager,
        &mut canvas,
        &[down(0.0, 0.0), moved(40.0, 40.0), down(40.0, 40.0)],
    );
    let id = canvas.shapes().next().unwrap().id();

    manager.handle_key(&mut canvas, 's').unwrap();
    play(
        &mut manager,
        &mut canvas,
        &[
            moved(20.0, 20.0),
            down(20.0, 20.0),
            moved(30.0, 25.0),
            moved(120.0, 120.0),
            up(120.0, 120.0),
        ],
    );
    assert_eq!(
        canvas.shape(id).unwrap().extent(),
        Rect::new(100.0, 100.0, 140.0, 140.0)
    );
    assert_eq!(canvas.history().undo_len(), 2);

    assert!(manager.undo(&mut canvas).unwrap());
    assert_eq!(
        canvas.shape(id).unwrap().extent(),
        Rect::new(0.0, 0.0, 40.0, 40.0)
    );
    assert!(manager.selection().selected().is_empty());
    assert!(canvas.overlay().is_empty());

    assert!(manager.undo(&mut canvas).unwrap());
    assert!(canvas.is_empty());
    assert!(!manager.undo(&mut canvas).unwrap());

    assert!(manager.redo(&mut canvas).unwrap());
    assert!(manager.redo(&mut canvas).unwrap());
    assert_eq!(
        canvas.shape(id).unwrap().extent(),
        Rect::new(100.0, 100.0, 140.0, 140.0)
    );
}

#[test]
fn test_only_registered_editor_reacts() {
    let mut canvas = Canvas::new();
    let mut manager = ToolManager::new();
    manager.set_tool(&mut canvas, ToolKind::Line).unwrap();
    play(&mut manager, &mut canvas, &[down(0.0, 0.0), down(10.0, 0.0)]);

    manager.set_tool(&mut canvas, ToolKind::Ellipse).unwrap();
    play(&mut manager, &mut canvas, &[down(0.0, 0.0), down(10.0, 10.0)]);

    let kinds: Vec<ShapeKind> = canvas.shapes().map(Shape::kind).collect();
    assert_eq!(kinds, vec![ShapeKind::Line, ShapeKind::Ellipse]);
}

#[test]
fn test_curves_are_never_hit() {
    let mut canvas = Canvas::new();
    let mut manager = ToolManager::new();
    manager.set_tool(&mut canvas, ToolKind::Bezier).unwrap();
    play(
        &mut manager,
        &mut canvas,
        &[down(0.0, 0.0), down(100.0, 0.0), down(30.0, 30.0), down(70.0, 30.0)],
    );
    assert_eq!(canvas.len(), 1);
    assert!(!canvas.is_captured());

    manager.set_tool(&mut canvas, ToolKind::Select).unwrap();
    play(&mut manager, &mut canvas, &[down(0.0, 0.0), up(0.0, 0.0)]);
    assert!(manager.selection().selected().is_empty());
}
