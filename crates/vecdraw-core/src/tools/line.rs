//! Two-click line gesture.

use super::{Editor, PointerEvent, ToolKind, begin_shape, end_shape};
use crate::canvas::Canvas;
use crate::history::HistoryError;
use crate::shapes::{Shape, ShapeId, ShapeKind};
use kurbo::Point;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum LineState {
    Idle,
    /// Start placed; the end follows the pointer.
    End { id: ShapeId },
}

/// Creates lines: Down places the start, Down again places the end.
#[derive(Debug, Clone)]
pub struct LineEditor {
    enabled: bool,
    state: LineState,
}

impl Default for LineEditor {
    fn default() -> Self {
        Self::new()
    }
}

impl LineEditor {
    pub fn new() -> Self {
        Self {
            enabled: false,
            state: LineState::Idle,
        }
    }

    /// Line being drawn, if any.
    pub fn current(&self) -> Option<ShapeId> {
        match self.state {
            LineState::Idle => None,
            LineState::End { id } => Some(id),
        }
    }
}

fn set_end(shape: &mut Shape, position: Point) {
    if let Shape::Line(line) = shape {
        line.point2 = position;
    }
}

impl Editor for LineEditor {
    fn tool(&self) -> ToolKind {
        ToolKind::Line
    }

    fn is_enabled(&self) -> bool {
        self.enabled
    }

    fn set_enabled(&mut self, canvas: &mut Canvas, enabled: bool) -> Result<(), HistoryError> {
        if !enabled {
            if let LineState::End { id } = self.state {
                end_shape(canvas, id);
                log::debug!("line gesture abandoned");
            }
            self.state = LineState::Idle;
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
            (LineState::Idle, PointerEvent::Down { position }) => {
                let id = begin_shape(canvas, ShapeKind::Line, position)?;
                self.state = LineState::End { id };
            }
            (LineState::End { id }, PointerEvent::Move { position }) if captured => {
                canvas.edit_shape(id, |shape| set_end(shape, position));
            }
            (LineState::End { id }, PointerEvent::Down { position }) => {
                canvas.edit_shape(id, |shape| set_end(shape, position));
                end_shape(canvas, id);
                self.state = LineState::Idle;
                log::debug!("line {} finished", id);
            }
            _ => {}
        }
        Ok(())
    }

    fn is_active(&self) -> bool {
        self.state != LineState::Idle
    }
}
