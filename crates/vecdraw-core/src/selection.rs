//! Selection editor: hover highlighting, click and rubber-band selection,
//! and dragging shapes around.

use crate::canvas::{Canvas, Document};
use crate::history::HistoryError;
use crate::shapes::{ShapeId, normalized_rect};
use crate::tools::{Editor, PointerEvent, ToolKind};
use kurbo::{Point, Rect};

/// Selection editor state.
#[derive(Debug, Clone, PartialEq)]
enum SelectionState {
    /// Nothing selected.
    Idle { hover: Option<ShapeId> },
    /// One or more shapes selected, their bounds visible.
    Selected {
        ids: Vec<ShapeId>,
        hover: Option<ShapeId>,
    },
    /// Dragging a shape. `pre_move` is the document before the drag began.
    Moving {
        id: ShapeId,
        origin: Point,
        last: Point,
        pre_move: Document,
    },
    /// Dragging a selection rectangle.
    Marquee { start: Point, current: Point },
}

impl Default for SelectionState {
    fn default() -> Self {
        SelectionState::Idle { hover: None }
    }
}

/// Hit-tests shapes through their bounds and moves them with the pointer.
///
/// A rubber-band drag selects every shape whose overlay lies entirely
/// inside the dragged rectangle.
#[derive(Debug, Clone, Default)]
pub struct SelectionEditor {
    enabled: bool,
    state: SelectionState,
}

impl SelectionEditor {
    pub fn new() -> Self {
        Self::default()
    }

    /// Currently selected shapes (the dragged shape while moving).
    pub fn selected(&self) -> Vec<ShapeId> {
        match &self.state {
            SelectionState::Selected { ids, .. } => ids.clone(),
            SelectionState::Moving { id, .. } => vec![*id],
            SelectionState::Idle { .. } | SelectionState::Marquee { .. } => Vec::new(),
        }
    }

    /// Shape highlighted under the pointer, if any.
    pub fn hovered(&self) -> Option<ShapeId> {
        match &self.state {
            SelectionState::Idle { hover } | SelectionState::Selected { hover, .. } => *hover,
            SelectionState::Moving { .. } | SelectionState::Marquee { .. } => None,
        }
    }

    /// Selection rectangle being dragged, if any.
    pub fn marquee(&self) -> Option<Rect> {
        match &self.state {
            SelectionState::Marquee { start, current } => Some(normalized_rect(*start, *current)),
            _ => None,
        }
    }

    /// Drop every overlay this editor put on the canvas and return to idle.
    /// A drag in progress keeps its geometry and stays undoable. If recording
    /// the move fails the editor is still reset and the error is returned.
    fn reset(&mut self, canvas: &mut Canvas) -> Result<(), HistoryError> {
        let mut result = Ok(());
        match std::mem::take(&mut self.state) {
            SelectionState::Idle { hover } => {
                if let Some(id) = hover {
                    canvas.hide_bounds(id);
                }
            }
            SelectionState::Selected { ids, hover } => {
                for id in ids.into_iter().chain(hover) {
                    canvas.hide_bounds(id);
                }
            }
            SelectionState::Moving {
                id,
                origin,
                last,
                pre_move,
            } => {
                if last != origin {
                    result = canvas.push_history(&pre_move);
                    if let Err(err) = &result {
                        log::warn!("Failed to record move of {}: {}", id, err);
                    }
                }
                canvas.hide_bounds(id);
                canvas.release_capture();
            }
            SelectionState::Marquee { .. } => {
                canvas.clear_marquee();
                canvas.release_capture();
            }
        }
        result
    }

    fn on_down(&mut self, canvas: &mut Canvas, position: Point) -> Result<(), HistoryError> {
        self.reset(canvas)?;
        match canvas.hit_test(position) {
            Some(id) => {
                canvas.show_bounds(id);
                canvas.capture();
                log::debug!("selected {}, moving", id);
                self.state = SelectionState::Moving {
                    id,
                    origin: position,
                    last: position,
                    pre_move: canvas.document(),
                };
            }
            None => {
                canvas.capture();
                log::debug!("selection rectangle started");
                self.state = SelectionState::Marquee {
                    start: position,
                    current: position,
                };
            }
        }
        Ok(())
    }

    fn on_drag(&mut self, canvas: &mut Canvas, position: Point) {
        match &mut self.state {
            SelectionState::Moving { id, last, .. } => {
                let delta = position - *last;
                if delta.hypot2() > 0.0 {
                    canvas.edit_shape(*id, |shape| shape.translate(delta));
                    *last = position;
                }
            }
            SelectionState::Marquee { start, current } => {
                *current = position;
                canvas.set_marquee(normalized_rect(*start, position));
            }
            SelectionState::Idle { .. } | SelectionState::Selected { .. } => {}
        }
    }

    fn on_hover(&mut self, canvas: &mut Canvas, position: Point) {
        let (hover, selected): (&mut Option<ShapeId>, &[ShapeId]) = match &mut self.state {
            SelectionState::Idle { hover } => (hover, &[]),
            SelectionState::Selected { ids, hover } => (hover, ids.as_slice()),
            SelectionState::Moving { .. } | SelectionState::Marquee { .. } => return,
        };
        let target = canvas
            .hit_test(position)
            .filter(|id| !selected.contains(id));
        if *hover == target {
            return;
        }
        if let Some(previous) = hover.take() {
            canvas.hide_bounds(previous);
        }
        if let Some(id) = target {
            canvas.show_bounds(id);
        }
        *hover = target;
    }

    fn on_up(&mut self, canvas: &mut Canvas, position: Point) -> Result<(), HistoryError> {
        match std::mem::take(&mut self.state) {
            SelectionState::Moving {
                id,
                origin,
                last,
                pre_move,
            } => {
                let delta = position - last;
                if delta.hypot2() > 0.0 {
                    canvas.edit_shape(id, |shape| shape.translate(delta));
                }
                canvas.release_capture();
                self.state = SelectionState::Selected {
                    ids: vec![id],
                    hover: None,
                };
                if position != origin {
                    canvas.push_history(&pre_move)?;
                    log::debug!("moved {} by ({}, {})", id, position.x - origin.x, position.y - origin.y);
                }
            }
            SelectionState::Marquee { start, .. } => {
                canvas.clear_marquee();
                canvas.release_capture();
                let ids = canvas.shapes_within(normalized_rect(start, position));
                for id in &ids {
                    canvas.show_bounds(*id);
                }
                log::debug!("selection rectangle picked {} shapes", ids.len());
                self.state = if ids.is_empty() {
                    SelectionState::Idle { hover: None }
                } else {
                    SelectionState::Selected { ids, hover: None }
                };
            }
            other => self.state = other,
        }
        Ok(())
    }
}

impl Editor for SelectionEditor {
    fn tool(&self) -> ToolKind {
        ToolKind::Select
    }

    fn is_enabled(&self) -> bool {
        self.enabled
    }

    fn set_enabled(&mut self, canvas: &mut Canvas, enabled: bool) -> Result<(), HistoryError> {
        let result = if enabled { Ok(()) } else { self.reset(canvas) };
        self.enabled = enabled;
        result
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
        match event {
            PointerEvent::Down { position } => self.on_down(canvas, position)?,
            PointerEvent::Move { position } if captured => self.on_drag(canvas, position),
            PointerEvent::Move { position } => self.on_hover(canvas, position),
            PointerEvent::Up { position } if captured => self.on_up(canvas, position)?,
            PointerEvent::Up { .. } => {}
        }
        Ok(())
    }

    fn is_active(&self) -> bool {
        matches!(
            self.state,
            SelectionState::Moving { .. } | SelectionState::Marquee { .. }
        )
    }
}
