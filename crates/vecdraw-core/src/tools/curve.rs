//! Multi-click curve gestures: quadratic (three clicks) and cubic (four clicks).

use super::{Editor, PointerEvent, ToolKind, begin_shape, end_shape};
use crate::canvas::Canvas;
use crate::history::HistoryError;
use crate::shapes::{Bezier, QuadraticBezier, Shape, ShapeId, ShapeKind};

/// Which control point the next click places.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum CurveState {
    Idle,
    Start { id: ShapeId },
    Point1 { id: ShapeId },
    Point2 { id: ShapeId },
}

impl CurveState {
    fn id(self) -> Option<ShapeId> {
        match self {
            CurveState::Idle => None,
            CurveState::Start { id } | CurveState::Point1 { id } | CurveState::Point2 { id } => {
                Some(id)
            }
        }
    }
}

fn abandon(kind: ShapeKind, state: &mut CurveState, canvas: &mut Canvas) {
    if let Some(id) = state.id() {
        end_shape(canvas, id);
        log::debug!("{} gesture abandoned", kind);
    }
    *state = CurveState::Idle;
}

/// Cubic bezier editor.
///
/// Clicks place the start, then the end, then the first and second control
/// points. Until the second click the end and second control point move
/// together.
#[derive(Debug, Clone)]
pub struct BezierEditor {
    enabled: bool,
    state: CurveState,
}

impl Default for BezierEditor {
    fn default() -> Self {
        Self::new()
    }
}

impl BezierEditor {
    pub fn new() -> Self {
        Self {
            enabled: false,
            state: CurveState::Idle,
        }
    }

    pub fn current(&self) -> Option<ShapeId> {
        self.state.id()
    }
}

fn edit_bezier(canvas: &mut Canvas, id: ShapeId, edit: impl FnOnce(&mut Bezier)) {
    canvas.edit_shape(id, |shape| {
        if let Shape::Bezier(bezier) = shape {
            edit(bezier);
        }
    });
}

impl Editor for BezierEditor {
    fn tool(&self) -> ToolKind {
        ToolKind::Bezier
    }

    fn is_enabled(&self) -> bool {
        self.enabled
    }

    fn set_enabled(&mut self, canvas: &mut Canvas, enabled: bool) -> Result<(), HistoryError> {
        if !enabled {
            abandon(ShapeKind::Bezier, &mut self.state, canvas);
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
        self.state = match (self.state, event) {
            (CurveState::Idle, PointerEvent::Down { position }) => {
                let id = begin_shape(canvas, ShapeKind::Bezier, position)?;
                CurveState::Start { id }
            }
            (CurveState::Start { id }, PointerEvent::Down { position }) => {
                edit_bezier(canvas, id, |b| {
                    b.point2 = position;
                    b.point3 = position;
                });
                CurveState::Point1 { id }
            }
            (CurveState::Point1 { id }, PointerEvent::Down { position }) => {
                edit_bezier(canvas, id, |b| b.point1 = position);
                CurveState::Point2 { id }
            }
            (CurveState::Point2 { id }, PointerEvent::Down { position }) => {
                edit_bezier(canvas, id, |b| b.point2 = position);
                end_shape(canvas, id);
                log::debug!("bezier {} finished", id);
                CurveState::Idle
            }
            (CurveState::Start { id }, PointerEvent::Move { position }) if captured => {
                edit_bezier(canvas, id, |b| {
                    b.point2 = position;
                    b.point3 = position;
                });
                self.state
            }
            (CurveState::Point1 { id }, PointerEvent::Move { position }) if captured => {
                edit_bezier(canvas, id, |b| b.point1 = position);
                self.state
            }
            (CurveState::Point2 { id }, PointerEvent::Move { position }) if captured => {
                edit_bezier(canvas, id, |b| b.point2 = position);
                self.state
            }
            (state, _) => state,
        };
        Ok(())
    }

    fn is_active(&self) -> bool {
        self.state != CurveState::Idle
    }
}

/// Quadratic bezier editor.
///
/// Clicks place the start, confirm the end and then place the control
/// point.
#[derive(Debug, Clone)]
pub struct QuadraticBezierEditor {
    enabled: bool,
    state: CurveState,
}

impl Default for QuadraticBezierEditor {
    fn default() -> Self {
        Self::new()
    }
}

impl QuadraticBezierEditor {
    pub fn new() -> Self {
        Self {
            enabled: false,
            state: CurveState::Idle,
        }
    }

    pub fn current(&self) -> Option<ShapeId> {
        self.state.id()
    }
}

fn edit_quadratic(
    canvas: &mut Canvas,
    id: ShapeId,
    edit: impl FnOnce(&mut QuadraticBezier),
) {
    canvas.edit_shape(id, |shape| {
        if let Shape::QuadraticBezier(quad) = shape {
            edit(quad);
        }
    });
}

impl Editor for QuadraticBezierEditor {
    fn tool(&self) -> ToolKind {
        ToolKind::QuadraticBezier
    }

    fn is_enabled(&self) -> bool {
        self.enabled
    }

    fn set_enabled(&mut self, canvas: &mut Canvas, enabled: bool) -> Result<(), HistoryError> {
        if !enabled {
            abandon(ShapeKind::QuadraticBezier, &mut self.state, canvas);
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
        self.state = match (self.state, event) {
            (CurveState::Idle, PointerEvent::Down { position }) => {
                let id = begin_shape(canvas, ShapeKind::QuadraticBezier, position)?;
                CurveState::Start { id }
            }
            (CurveState::Start { id }, PointerEvent::Down { .. }) => CurveState::Point1 { id },
            (CurveState::Point1 { id }, PointerEvent::Down { position }) => {
                edit_quadratic(canvas, id, |q| q.point1 = position);
                end_shape(canvas, id);
                log::debug!("quadratic bezier {} finished", id);
                CurveState::Idle
            }
            (CurveState::Start { id }, PointerEvent::Move { position }) if captured => {
                edit_quadratic(canvas, id, |q| q.point2 = position);
                self.state
            }
            (CurveState::Point1 { id }, PointerEvent::Move { position }) if captured => {
                edit_quadratic(canvas, id, |q| q.point1 = position);
                self.state
            }
            (state, _) => state,
        };
        Ok(())
    }

    fn is_active(&self) -> bool {
        self.state != CurveState::Idle
    }
}
