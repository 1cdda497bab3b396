//! Two-click box gesture shared by rectangles, ellipses, text and arcs.

use super::{Editor, PointerEvent, ToolKind, begin_shape, end_shape};
use crate::canvas::Canvas;
use crate::history::HistoryError;
use crate::shapes::{Shape, ShapeId, ShapeKind, normalized_rect};
use kurbo::Point;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum BoxState {
    Idle,
    /// First corner placed; the second follows the pointer.
    Sizing { id: ShapeId },
}

/// Creates a shape from two opposite corners.
///
/// The first Down places both corners, moves drag the second one and the
/// next Down fixes it. The finished box is normalized so `point1` is the
/// minimum corner.
#[derive(Debug, Clone)]
pub struct BoundingBoxEditor {
    kind: ShapeKind,
    enabled: bool,
    state: BoxState,
}

impl BoundingBoxEditor {
    fn new(kind: ShapeKind) -> Self {
        Self {
            kind,
            enabled: false,
            state: BoxState::Idle,
        }
    }

    pub fn rectangle() -> Self {
        Self::new(ShapeKind::Rectangle)
    }

    pub fn ellipse() -> Self {
        Self::new(ShapeKind::Ellipse)
    }

    pub fn text() -> Self {
        Self::new(ShapeKind::Text)
    }

    pub fn arc() -> Self {
        Self::new(ShapeKind::Arc)
    }

    /// Shape being sized, if any.
    pub fn current(&self) -> Option<ShapeId> {
        match self.state {
            BoxState::Idle => None,
            BoxState::Sizing { id } => Some(id),
        }
    }

    fn abandon(&mut self, canvas: &mut Canvas) {
        if let BoxState::Sizing { id } = self.state {
            end_shape(canvas, id);
            log::debug!("{} gesture abandoned", self.kind);
        }
        self.state = BoxState::Idle;
    }
}

fn set_second_corner(shape: &mut Shape, position: Point) {
    if let Some((_, p2)) = shape.box_corners_mut() {
        *p2 = position;
    }
}

fn normalize_corners(shape: &mut Shape) {
    if let Some((p1, p2)) = shape.box_corners_mut() {
        let rect = normalized_rect(*p1, *p2);
        *p1 = Point::new(rect.x0, rect.y0);
        *p2 = Point::new(rect.x1, rect.y1);
    }
}

impl Editor for BoundingBoxEditor {
    fn tool(&self) -> ToolKind {
        match self.kind {
            ShapeKind::Rectangle => ToolKind::Rectangle,
            ShapeKind::Ellipse => ToolKind::Ellipse,
            ShapeKind::Text => ToolKind::Text,
            ShapeKind::Arc => ToolKind::Arc,
            ShapeKind::Line => ToolKind::Line,
            ShapeKind::Bezier => ToolKind::Bezier,
            ShapeKind::QuadraticBezier => ToolKind::QuadraticBezier,
        }
    }

    fn is_enabled(&self) -> bool {
        self.enabled
    }

    fn set_enabled(&mut self, canvas: &mut Canvas, enabled: bool) -> Result<(), HistoryError> {
        if !enabled {
            self.abandon(canvas);
        }
        self.enabled = enabled;
        Ok(())
    }

    fn on_pointer(
        &mut self,
        canvas: &mut Canvas,
        event: PointerEvent,
        captured: bool,
    ) -> Result<(), HistoryError> {
        if !self.enabled {
            return Ok(());
        }
        match (self.state, event) {
            (BoxState::Idle, PointerEvent::Down { position }) => {
                let id = begin_shape(canvas, self.kind, position)?;
                self.state = BoxState::Sizing { id };
            }
            (BoxState::Sizing { id }, PointerEvent::Move { position }) if captured => {
                if !canvas.edit_shape(id, |shape| set_second_corner(shape, position)) {
                    self.abandon(canvas);
                }
            }
            (BoxState::Sizing { id }, PointerEvent::Down { position }) => {
                canvas.edit_shape(id, |shape| {
                    set_second_corner(shape, position);
                    normalize_corners(shape);
                });
                end_shape(canvas, id);
                self.state = BoxState::Idle;
                log::debug!("{} {} finished", self.kind, id);
            }
            _ => {}
        }
        Ok(())
    }

    fn is_active(&self) -> bool {
        self.state != BoxState::Idle
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use kurbo::Rect;

    fn run(editor: &mut BoundingBoxEditor, canvas: &mut Canvas, event: PointerEvent) {
        let captured = canvas.is_captured();
        editor.on_pointer(canvas, event, captured).unwrap();
    }

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

    fn enabled(mut editor: BoundingBoxEditor, canvas: &mut Canvas) -> BoundingBoxEditor {
        editor.set_enabled(canvas, true).unwrap();
        editor
    }

    #[test]
    fn test_two_click_rectangle() {
        let mut canvas = Canvas::new();
        let mut editor = enabled(BoundingBoxEditor::rectangle(), &mut canvas);

        run(&mut editor, &mut canvas, down(40.0, 30.0));
        assert!(canvas.is_captured());
        assert_eq!(canvas.overlay().len(), 4);
        assert_eq!(canvas.history().undo_len(), 1);

        run(&mut editor, &mut canvas, moved(10.0, 50.0));
        run(&mut editor, &mut canvas, down(10.0, 50.0));
        assert!(!canvas.is_captured());
        assert!(canvas.overlay().is_empty());
        assert_eq!(canvas.history().undo_len(), 1);

        let rect = canvas.shapes().next().and_then(Shape::as_rectangle).unwrap();
        assert_eq!(rect.point1, Point::new(10.0, 30.0));
        assert_eq!(rect.point2, Point::new(40.0, 50.0));
    }

    #[test]
    fn test_move_updates_bounds() {
        let mut canvas = Canvas::new();
        let mut editor = enabled(BoundingBoxEditor::ellipse(), &mut canvas);
        run(&mut editor, &mut canvas, down(0.0, 0.0));
        run(&mut editor, &mut canvas, moved(100.0, 50.0));

        let id = editor.current().unwrap();
        let extent = canvas.bounds(id).unwrap().extent();
        assert_eq!(extent, Rect::new(-5.0, -5.0, 105.0, 55.0));
    }

    #[test]
    fn test_move_without_capture_is_ignored() {
        let mut canvas = Canvas::new();
        let mut editor = enabled(BoundingBoxEditor::rectangle(), &mut canvas);
        run(&mut editor, &mut canvas, down(0.0, 0.0));
        editor
            .on_pointer(&mut canvas, moved(30.0, 30.0), false)
            .unwrap();
        let id = editor.current().unwrap();
        assert_eq!(canvas.shape(id).unwrap().extent(), Rect::new(0.0, 0.0, 0.0, 0.0));
    }

    #[test]
    fn test_disabled_editor_ignores_events() {
        let mut canvas = Canvas::new();
        let mut editor = BoundingBoxEditor::text();
        run(&mut editor, &mut canvas, down(0.0, 0.0));
        assert!(canvas.is_empty());
        assert!(!canvas.is_captured());
    }

    #[test]
    fn test_disable_abandons_gesture() {
        let mut canvas = Canvas::new();
        let mut editor = enabled(BoundingBoxEditor::rectangle(), &mut canvas);
        run(&mut editor, &mut canvas, down(0.0, 0.0));
        editor.set_enabled(&mut canvas, false).unwrap();

        assert!(!editor.is_active());
        assert!(!canvas.is_captured());
        assert!(canvas.overlay().is_empty());
        assert_eq!(canvas.len(), 1);
    }

    #[test]
    fn test_zero_size_arc() {
        let mut canvas = Canvas::new();
        let mut editor = enabled(BoundingBoxEditor::arc(), &mut canvas);
        run(&mut editor, &mut canvas, down(5.0, 5.0));
        run(&mut editor, &mut canvas, down(5.0, 5.0));

        let arc = canvas.shapes().next().unwrap();
        assert_eq!(arc.kind(), ShapeKind::Arc);
        assert!(arc.to_path().elements().is_empty());
        assert!(!canvas.is_captured());
    }

    #[test]
    fn test_text_uses_factory_defaults() {
        let mut canvas = Canvas::new();
        let mut editor = enabled(BoundingBoxEditor::text(), &mut canvas);
        run(&mut editor, &mut canvas, down(0.0, 0.0));
        run(&mut editor, &mut canvas, down(50.0, 20.0));
        match canvas.shapes().next() {
            Some(Shape::Text(text)) => assert_eq!(text.content, "Text"),
            other => panic!("expected text, got {:?}", other),
        }
    }
}
