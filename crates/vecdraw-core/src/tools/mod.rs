//! Tool system: pointer-driven editors and the manager that switches them.
//!
//! Every tool kind has one [`Editor`]. The [`ToolManager`] keeps at most one
//! of them enabled and forwards pointer events to that editor only, so the
//! canvas capture flag never has two listeners.

mod bounding_box;
mod curve;
mod line;

pub use bounding_box::BoundingBoxEditor;
pub use curve::{BezierEditor, QuadraticBezierEditor};
pub use line::LineEditor;

use crate::canvas::Canvas;
use crate::history::HistoryError;
use crate::selection::SelectionEditor;
use crate::shapes::{ShapeId, ShapeKind};
use kurbo::Point;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Available tools.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum ToolKind {
    #[default]
    Select,
    Line,
    Bezier,
    QuadraticBezier,
    Arc,
    Rectangle,
    Ellipse,
    Text,
}

impl ToolKind {
    pub const ALL: [ToolKind; 8] = [
        ToolKind::Select,
        ToolKind::Line,
        ToolKind::Bezier,
        ToolKind::QuadraticBezier,
        ToolKind::Arc,
        ToolKind::Rectangle,
        ToolKind::Ellipse,
        ToolKind::Text,
    ];

    /// Keyboard key that activates this tool.
    pub fn activation_key(self) -> char {
        match self {
            ToolKind::Select => 'S',
            ToolKind::Line => 'L',
            ToolKind::Bezier => 'B',
            ToolKind::QuadraticBezier => 'Q',
            ToolKind::Arc => 'A',
            ToolKind::Rectangle => 'R',
            ToolKind::Ellipse => 'E',
            ToolKind::Text => 'T',
        }
    }

    /// Tool for an activation key (case-insensitive).
    pub fn from_key(key: char) -> Option<Self> {
        let key = key.to_ascii_uppercase();
        Self::ALL.into_iter().find(|t| t.activation_key() == key)
    }

    /// Shape kind created by this tool, if it creates shapes.
    pub fn shape_kind(self) -> Option<ShapeKind> {
        match self {
            ToolKind::Select => None,
            ToolKind::Line => Some(ShapeKind::Line),
            ToolKind::Bezier => Some(ShapeKind::Bezier),
            ToolKind::QuadraticBezier => Some(ShapeKind::QuadraticBezier),
            ToolKind::Arc => Some(ShapeKind::Arc),
            ToolKind::Rectangle => Some(ShapeKind::Rectangle),
            ToolKind::Ellipse => Some(ShapeKind::Ellipse),
            ToolKind::Text => Some(ShapeKind::Text),
        }
    }
}

impl fmt::Display for ToolKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.shape_kind() {
            Some(kind) => fmt::Display::fmt(&kind, f),
            None => f.write_str("select"),
        }
    }
}

/// A single pointer event in canvas coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PointerEvent {
    Down { position: Point },
    Move { position: Point },
    Up { position: Point },
}

impl PointerEvent {
    pub fn position(&self) -> Point {
        match *self {
            PointerEvent::Down { position }
            | PointerEvent::Move { position }
            | PointerEvent::Up { position } => position,
        }
    }

    /// Same event kind at a different position.
    pub fn with_position(self, position: Point) -> Self {
        match self {
            PointerEvent::Down { .. } => PointerEvent::Down { position },
            PointerEvent::Move { .. } => PointerEvent::Move { position },
            PointerEvent::Up { .. } => PointerEvent::Up { position },
        }
    }
}

/// A pointer-gesture state machine bound to one tool.
pub trait Editor: fmt::Debug {
    /// The tool this editor implements.
    fn tool(&self) -> ToolKind;

    fn is_enabled(&self) -> bool;

    /// Enable or disable the editor. Disabling abandons any gesture in
    /// progress, hides its overlays and releases capture. The editor ends up
    /// in the requested state even when recording the abandoned gesture fails.
    fn set_enabled(&mut self, canvas: &mut Canvas, enabled: bool) -> Result<(), HistoryError>;

    /// Handle one pointer event. `captured` is the canvas capture flag at the
    /// time the event was delivered.
    fn on_pointer(
        &mut self,
        canvas: &mut Canvas,
        event: PointerEvent,
        captured: bool,
    ) -> Result<(), HistoryError>;

    /// Whether a gesture is in progress.
    fn is_active(&self) -> bool;
}

/// Snapshot history, then create a shape of `kind` at `position`, show its
/// bounds and capture the pointer.
fn begin_shape(
    canvas: &mut Canvas,
    kind: ShapeKind,
    position: Point,
) -> Result<ShapeId, HistoryError> {
    canvas.snapshot()?;
    let shape = canvas.factory().create(kind, position);
    let id = canvas.add_shape(shape);
    canvas.show_bounds(id);
    canvas.capture();
    log::debug!("{} gesture started at ({}, {})", kind, position.x, position.y);
    Ok(id)
}

/// Hide the overlay of a finished (or abandoned) shape and release capture.
fn end_shape(canvas: &mut Canvas, id: ShapeId) {
    canvas.hide_bounds(id);
    canvas.release_capture();
}

/// Proof that a tool was registered with the manager.
///
/// Releasing a registration disables its editor. A registration that has
/// been superseded by a later one is stale and releasing it does nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Registration {
    tool: ToolKind,
    generation: u64,
}

impl Registration {
    pub fn tool(&self) -> ToolKind {
        self.tool
    }
}

/// Owns one editor per tool and keeps at most one enabled.
#[derive(Debug)]
pub struct ToolManager {
    selection: SelectionEditor,
    line: LineEditor,
    bezier: BezierEditor,
    quadratic: QuadraticBezierEditor,
    arc: BoundingBoxEditor,
    rectangle: BoundingBoxEditor,
    ellipse: BoundingBoxEditor,
    text: BoundingBoxEditor,
    active: Option<Registration>,
    generation: u64,
}

impl Default for ToolManager {
    fn default() -> Self {
        Self::new()
    }
}

impl ToolManager {
    /// Create a manager with every editor disabled.
    pub fn new() -> Self {
        Self {
            selection: SelectionEditor::new(),
            line: LineEditor::new(),
            bezier: BezierEditor::new(),
            quadratic: QuadraticBezierEditor::new(),
            arc: BoundingBoxEditor::arc(),
            rectangle: BoundingBoxEditor::rectangle(),
            ellipse: BoundingBoxEditor::ellipse(),
            text: BoundingBoxEditor::text(),
            active: None,
            generation: 0,
        }
    }

    /// Currently registered tool.
    pub fn current_tool(&self) -> Option<ToolKind> {
        self.active.map(|r| r.tool)
    }

    pub fn editor(&self, tool: ToolKind) -> &dyn Editor {
        match tool {
            ToolKind::Select => &self.selection,
            ToolKind::Line => &self.line,
            ToolKind::Bezier => &self.bezier,
            ToolKind::QuadraticBezier => &self.quadratic,
            ToolKind::Arc => &self.arc,
            ToolKind::Rectangle => &self.rectangle,
            ToolKind::Ellipse => &self.ellipse,
            ToolKind::Text => &self.text,
        }
    }

    fn editor_mut(&mut self, tool: ToolKind) -> &mut dyn Editor {
        match tool {
            ToolKind::Select => &mut self.selection,
            ToolKind::Line => &mut self.line,
            ToolKind::Bezier => &mut self.bezier,
            ToolKind::QuadraticBezier => &mut self.quadratic,
            ToolKind::Arc => &mut self.arc,
            ToolKind::Rectangle => &mut self.rectangle,
            ToolKind::Ellipse => &mut self.ellipse,
            ToolKind::Text => &mut self.text,
        }
    }

    /// The selection editor, for querying selected and hovered shapes.
    pub fn selection(&self) -> &SelectionEditor {
        &self.selection
    }

    /// Enable the editor for `tool`, releasing the previous registration first.
    pub fn register(
        &mut self,
        canvas: &mut Canvas,
        tool: ToolKind,
    ) -> Result<Registration, HistoryError> {
        if let Some(previous) = self.active {
            self.release(canvas, previous)?;
        }
        self.generation += 1;
        let registration = Registration {
            tool,
            generation: self.generation,
        };
        self.editor_mut(tool).set_enabled(canvas, true)?;
        self.active = Some(registration);
        log::info!("tool switched to {}", tool);
        Ok(registration)
    }

    /// Disable the editor behind `registration`. Returns false for stale
    /// registrations.
    pub fn release(
        &mut self,
        canvas: &mut Canvas,
        registration: Registration,
    ) -> Result<bool, HistoryError> {
        if self.active != Some(registration) {
            log::warn!(
                "ignoring stale {} registration #{}",
                registration.tool,
                registration.generation
            );
            return Ok(false);
        }
        let result = self.editor_mut(registration.tool).set_enabled(canvas, false);
        self.active = None;
        result.map(|()| true)
    }

    /// Switch to `tool`.
    pub fn set_tool(
        &mut self,
        canvas: &mut Canvas,
        tool: ToolKind,
    ) -> Result<Registration, HistoryError> {
        self.register(canvas, tool)
    }

    /// Switch tools from an activation key. Unknown keys are ignored.
    pub fn handle_key(
        &mut self,
        canvas: &mut Canvas,
        key: char,
    ) -> Result<Option<Registration>, HistoryError> {
        match ToolKind::from_key(key) {
            Some(tool) => self.set_tool(canvas, tool).map(Some),
            None => Ok(None),
        }
    }

    /// Snap the event position and deliver it to the registered editor.
    pub fn dispatch(&mut self, canvas: &mut Canvas, event: PointerEvent) -> Result<(), HistoryError> {
        let Some(registration) = self.active else {
            return Ok(());
        };
        let event = event.with_position(canvas.snap_point(event.position()));
        let captured = canvas.is_captured();
        self.editor_mut(registration.tool)
            .on_pointer(canvas, event, captured)
    }

    /// Abandon the active gesture, keeping the current tool selected.
    pub fn cancel(&mut self, canvas: &mut Canvas) -> Result<(), HistoryError> {
        let Some(registration) = self.active else {
            return Ok(());
        };
        let editor = self.editor_mut(registration.tool);
        if editor.is_active() {
            log::debug!("abandoning {} gesture", registration.tool);
        }
        let result = editor.set_enabled(canvas, false);
        editor.set_enabled(canvas, true)?;
        result
    }

    /// Abandon the active gesture and restore the previous document.
    pub fn undo(&mut self, canvas: &mut Canvas) -> Result<bool, HistoryError> {
        self.cancel(canvas)?;
        canvas.undo()
    }

    /// Abandon the active gesture and re-apply the next document.
    pub fn redo(&mut self, canvas: &mut Canvas) -> Result<bool, HistoryError> {
        self.cancel(canvas)?;
        canvas.redo()
    }
}
