//! Canvas: the ordered shape records, their overlays, capture and history.

use crate::bounds::{Bounds, OverlayLayer, OverlayOwner, OverlayStyle};
use crate::codec::CanvasCodec;
use crate::config::{BoundsConfig, CanvasConfig};
use crate::history::{History, HistoryError};
use crate::shapes::{Shape, ShapeFactory, ShapeId};
use kurbo::{Line, Point, Rect};
use serde::{Deserialize, Serialize};

/// Serializable canvas content: shapes in insertion (z) order.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Document {
    pub shapes: Vec<Shape>,
}

impl Document {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.shapes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.shapes.is_empty()
    }
}

/// A shape together with the bounds that decorate it.
#[derive(Debug, Clone)]
pub struct ShapeRecord {
    shape: Shape,
    bounds: Option<Bounds>,
}

impl ShapeRecord {
    fn new(shape: Shape, config: &BoundsConfig) -> Self {
        let bounds = Bounds::create(&shape, config);
        Self { shape, bounds }
    }

    pub fn shape(&self) -> &Shape {
        &self.shape
    }

    pub fn bounds(&self) -> Option<&Bounds> {
        self.bounds.as_ref()
    }

    pub fn id(&self) -> ShapeId {
        self.shape.id()
    }
}

/// What part of the scene needs redrawing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenderHint {
    Shapes,
    Overlay,
}

/// Accumulated redraw request, drained by the renderer.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RenderRequest {
    pub shapes: bool,
    pub overlay: bool,
}

impl RenderRequest {
    fn merge(&mut self, hint: RenderHint) {
        match hint {
            RenderHint::Shapes => self.shapes = true,
            RenderHint::Overlay => self.overlay = true,
        }
    }
}

/// The drawing surface shared by every editor.
#[derive(Debug)]
pub struct Canvas {
    records: Vec<ShapeRecord>,
    overlay: OverlayLayer,
    captured: bool,
    pending: Option<RenderRequest>,
    render_count: usize,
    history: History,
    factory: ShapeFactory,
    config: CanvasConfig,
}

impl Default for Canvas {
    fn default() -> Self {
        Self::new()
    }
}

impl Canvas {
    /// Create an empty canvas with the default configuration.
    pub fn new() -> Self {
        Self::with_config(CanvasConfig::default())
    }

    /// Create an empty canvas whose history uses the JSON codec.
    pub fn with_config(config: CanvasConfig) -> Self {
        let history = History::default().with_limit(config.history_limit);
        Self::with_history(config, history)
    }

    /// Create an empty canvas whose history uses `codec`.
    pub fn with_codec(config: CanvasConfig, codec: Box<dyn CanvasCodec>) -> Self {
        let history = History::new(codec).with_limit(config.history_limit);
        Self::with_history(config, history)
    }

    fn with_history(config: CanvasConfig, history: History) -> Self {
        Self {
            records: Vec::new(),
            overlay: OverlayLayer::new(),
            captured: false,
            pending: None,
            render_count: 0,
            history,
            factory: config.shape_factory(),
            config,
        }
    }

    pub fn config(&self) -> &CanvasConfig {
        &self.config
    }

    /// Factory for default-initialized shapes.
    pub fn factory(&self) -> &ShapeFactory {
        &self.factory
    }

    // --- Shapes ---

    /// Append a shape on top of the z-order. Its bounds start hidden.
    pub fn add_shape(&mut self, shape: Shape) -> ShapeId {
        let id = shape.id();
        log::debug!("add {} {}", shape.kind(), id);
        self.records.push(ShapeRecord::new(shape, &self.config.bounds));
        self.render(RenderHint::Shapes);
        id
    }

    /// Remove a shape and its bounds.
    pub fn remove_shape(&mut self, id: ShapeId) -> Option<Shape> {
        let index = self.index_of(id)?;
        let mut record = self.records.remove(index);
        let hidden = record
            .bounds
            .as_mut()
            .is_some_and(|b| b.hide(&mut self.overlay));
        if hidden {
            self.render(RenderHint::Overlay);
        }
        self.render(RenderHint::Shapes);
        Some(record.shape)
    }

    /// Remove every shape and overlay segment.
    pub fn clear(&mut self) {
        self.records.clear();
        self.overlay.clear();
        self.render(RenderHint::Shapes);
        self.render(RenderHint::Overlay);
    }

    pub fn shapes(&self) -> impl Iterator<Item = &Shape> {
        self.records.iter().map(|r| &r.shape)
    }

    pub fn records(&self) -> &[ShapeRecord] {
        &self.records
    }

    pub fn shape(&self, id: ShapeId) -> Option<&Shape> {
        self.records.iter().find(|r| r.id() == id).map(|r| &r.shape)
    }

    pub fn contains(&self, id: ShapeId) -> bool {
        self.index_of(id).is_some()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Mutate a shape's geometry, then bring its bounds up to date.
    /// Returns false when no shape has `id`.
    pub fn edit_shape(&mut self, id: ShapeId, edit: impl FnOnce(&mut Shape)) -> bool {
        let Some(record) = self.records.iter_mut().find(|r| r.shape.id() == id) else {
            return false;
        };
        edit(&mut record.shape);
        self.update_bounds(id);
        self.render(RenderHint::Shapes);
        true
    }

    fn index_of(&self, id: ShapeId) -> Option<usize> {
        self.records.iter().position(|r| r.shape.id() == id)
    }

    // --- Bounds and overlay ---

    pub fn bounds(&self, id: ShapeId) -> Option<&Bounds> {
        self.records
            .iter()
            .find(|r| r.id() == id)
            .and_then(|r| r.bounds.as_ref())
    }

    /// Show a shape's overlay. False when already visible or unsupported.
    pub fn show_bounds(&mut self, id: ShapeId) -> bool {
        let shown = self
            .records
            .iter_mut()
            .find(|r| r.shape.id() == id)
            .and_then(|r| r.bounds.as_mut())
            .is_some_and(|b| b.show(&mut self.overlay));
        if shown {
            self.render(RenderHint::Overlay);
        }
        shown
    }

    /// Hide a shape's overlay. False when already hidden or unsupported.
    pub fn hide_bounds(&mut self, id: ShapeId) -> bool {
        let hidden = self
            .records
            .iter_mut()
            .find(|r| r.shape.id() == id)
            .and_then(|r| r.bounds.as_mut())
            .is_some_and(|b| b.hide(&mut self.overlay));
        if hidden {
            self.render(RenderHint::Overlay);
        }
        hidden
    }

    /// Recompute a shape's bounds from its current geometry.
    pub fn update_bounds(&mut self, id: ShapeId) {
        let Some(record) = self.records.iter_mut().find(|r| r.shape.id() == id) else {
            return;
        };
        let Some(bounds) = record.bounds.as_mut() else {
            return;
        };
        bounds.update(&record.shape, &mut self.overlay);
        if bounds.is_visible() {
            self.render(RenderHint::Overlay);
        }
    }

    /// First shape in insertion order whose bounds contain `point`.
    pub fn hit_test(&self, point: Point) -> Option<ShapeId> {
        self.records
            .iter()
            .find(|r| r.bounds.as_ref().is_some_and(|b| b.contains(point)))
            .map(ShapeRecord::id)
    }

    /// Shapes whose overlay extent lies fully inside `rect`.
    pub fn shapes_within(&self, rect: Rect) -> Vec<ShapeId> {
        self.records
            .iter()
            .filter(|r| {
                r.bounds.as_ref().is_some_and(|b| {
                    let extent = b.extent();
                    extent.x0 >= rect.x0
                        && extent.y0 >= rect.y0
                        && extent.x1 <= rect.x1
                        && extent.y1 <= rect.y1
                })
            })
            .map(ShapeRecord::id)
            .collect()
    }

    pub fn overlay(&self) -> &OverlayLayer {
        &self.overlay
    }

    /// Draw (or move) the selection marquee.
    pub fn set_marquee(&mut self, rect: Rect) {
        let corners = [
            Point::new(rect.x0, rect.y0),
            Point::new(rect.x1, rect.y0),
            Point::new(rect.x1, rect.y1),
            Point::new(rect.x0, rect.y1),
        ];
        let lines = (0..4).map(|i| Line::new(corners[i], corners[(i + 1) % 4]));
        let style = OverlayStyle {
            color: self.config.bounds.color,
            thickness: self.config.bounds.thickness,
        };
        self.overlay.replace(OverlayOwner::Marquee, lines, style);
        self.render(RenderHint::Overlay);
    }

    /// Remove the selection marquee, if drawn.
    pub fn clear_marquee(&mut self) {
        if self.overlay.remove_owner(OverlayOwner::Marquee) > 0 {
            self.render(RenderHint::Overlay);
        }
    }

    // --- Capture ---

    pub fn capture(&mut self) {
        if !self.captured {
            log::debug!("pointer captured");
        }
        self.captured = true;
    }

    pub fn release_capture(&mut self) {
        if self.captured {
            log::debug!("pointer capture released");
        }
        self.captured = false;
    }

    pub fn is_captured(&self) -> bool {
        self.captured
    }

    // --- Rendering ---

    /// Schedule a redraw.
    pub fn render(&mut self, hint: RenderHint) {
        self.pending.get_or_insert_with(RenderRequest::default).merge(hint);
        self.render_count += 1;
    }

    /// Take the pending redraw request, if any.
    pub fn take_render_request(&mut self) -> Option<RenderRequest> {
        self.pending.take()
    }

    /// Total number of render calls so far.
    pub fn render_count(&self) -> usize {
        self.render_count
    }

    /// Apply grid snapping to a raw pointer position.
    pub fn snap_point(&self, point: Point) -> Point {
        self.config.snap.apply(point)
    }

    // --- Document and history ---

    /// Capture the current shapes.
    pub fn document(&self) -> Document {
        Document {
            shapes: self.shapes().cloned().collect(),
        }
    }

    /// Replace all shapes with `document`. Bounds are rebuilt hidden,
    /// the overlay is cleared and capture is released.
    pub fn restore(&mut self, document: Document) {
        let config = &self.config.bounds;
        let records: Vec<ShapeRecord> = document
            .shapes
            .into_iter()
            .map(|shape| ShapeRecord::new(shape, config))
            .collect();
        self.records = records;
        self.overlay.clear();
        self.release_capture();
        self.render(RenderHint::Shapes);
        self.render(RenderHint::Overlay);
        log::info!("restored document with {} shapes", self.records.len());
    }

    pub fn history(&self) -> &History {
        &self.history
    }

    pub fn history_mut(&mut self) -> &mut History {
        &mut self.history
    }

    /// Push the current document onto the undo stack.
    pub fn snapshot(&mut self) -> Result<(), HistoryError> {
        let document = self.document();
        self.history.snapshot(&document)
    }

    /// Push an already captured document onto the undo stack.
    pub fn push_history(&mut self, document: &Document) -> Result<(), HistoryError> {
        self.history.snapshot(document)
    }

    /// Restore the previous document. `Ok(false)` when there is nothing to undo.
    pub fn undo(&mut self) -> Result<bool, HistoryError> {
        let current = self.document();
        match self.history.undo(&current)? {
            Some(document) => {
                self.restore(document);
                Ok(true)
            }
            None => Ok(false),
        }
    }

    /// Re-apply an undone document. `Ok(false)` when there is nothing to redo.
    pub fn redo(&mut self) -> Result<bool, HistoryError> {
        let current = self.document();
        match self.history.redo(&current)? {
            Some(document) => {
                self.restore(document);
                Ok(true)
            }
            None => Ok(false),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shapes::{Bezier, Line as LineShape, Rectangle};
    use kurbo::Vec2;

    fn rect(x0: f64, y0: f64, x1: f64, y1: f64) -> Shape {
        Shape::Rectangle(Rectangle::new(Point::new(x0, y0), Point::new(x1, y1)))
    }

    #[test]
    fn test_add_and_remove() {
        let mut canvas = Canvas::new();
        let id = canvas.add_shape(rect(0.0, 0.0, 10.0, 10.0));
        assert_eq!(canvas.len(), 1);
        assert!(canvas.bounds(id).is_some());
        assert!(!canvas.bounds(id).unwrap().is_visible());

        canvas.show_bounds(id);
        assert_eq!(canvas.overlay().len(), 4);

        let removed = canvas.remove_shape(id).unwrap();
        assert_eq!(removed.id(), id);
        assert!(canvas.is_empty());
        assert!(canvas.overlay().is_empty());
        assert!(canvas.remove_shape(id).is_none());
    }

    #[test]
    fn test_curves_have_no_bounds() {
        let mut canvas = Canvas::new();
        let id = canvas.add_shape(Shape::Bezier(Bezier::at(Point::new(5.0, 5.0))));
        assert!(canvas.bounds(id).is_none());
        assert!(!canvas.show_bounds(id));
        assert_eq!(canvas.hit_test(Point::new(5.0, 5.0)), None);
    }

    #[test]
    fn test_hit_test_prefers_insertion_order() {
        let mut canvas = Canvas::new();
        let a = canvas.add_shape(rect(0.0, 0.0, 100.0, 100.0));
        let b = canvas.add_shape(rect(50.0, 50.0, 150.0, 150.0));
        assert_eq!(canvas.hit_test(Point::new(75.0, 75.0)), Some(a));
        assert_eq!(canvas.hit_test(Point::new(140.0, 140.0)), Some(b));
        assert_eq!(canvas.hit_test(Point::new(300.0, 300.0)), None);
    }

    #[test]
    fn test_edit_shape_updates_visible_bounds() {
        let mut canvas = Canvas::new();
        let id = canvas.add_shape(rect(0.0, 0.0, 10.0, 10.0));
        canvas.show_bounds(id);
        assert!(canvas.edit_shape(id, |s| s.translate(Vec2::new(100.0, 0.0))));

        assert!(canvas.bounds(id).unwrap().contains(Point::new(105.0, 5.0)));
        assert!(canvas.overlay().segments().iter().all(|s| s.line.p0.x >= 95.0));
    }

    #[test]
    fn test_update_bounds_hidden_and_visible() {
        let mut canvas = Canvas::new();
        let id = canvas.add_shape(rect(0.0, 0.0, 10.0, 10.0));
        canvas.take_render_request();

        // Hidden bounds still move with the shape but request no overlay redraw.
        canvas.edit_shape(id, |s| s.translate(Vec2::new(0.0, 50.0)));
        assert_eq!(canvas.hit_test(Point::new(5.0, 55.0)), Some(id));
        assert_eq!(canvas.hit_test(Point::new(5.0, 5.0)), None);
        let request = canvas.take_render_request().unwrap();
        assert!(request.shapes && !request.overlay);

        canvas.show_bounds(id);
        canvas.take_render_request();
        canvas.update_bounds(id);
        let request = canvas.take_render_request().unwrap();
        assert!(request.overlay && !request.shapes);
        assert_eq!(canvas.overlay().len(), 4);

        let curve = canvas.add_shape(Shape::Bezier(Bezier::at(Point::ZERO)));
        canvas.take_render_request();
        canvas.update_bounds(curve);
        canvas.update_bounds(ShapeId::new_v4());
        assert!(canvas.take_render_request().is_none());
    }

    #[test]
    fn test_render_requests_merge() {
        let mut canvas = Canvas::new();
        assert!(canvas.take_render_request().is_none());
        canvas.render(RenderHint::Shapes);
        canvas.render(RenderHint::Overlay);
        let request = canvas.take_render_request().unwrap();
        assert!(request.shapes && request.overlay);
        assert!(canvas.take_render_request().is_none());
        assert_eq!(canvas.render_count(), 2);
    }

    #[test]
    fn test_capture_flag() {
        let mut canvas = Canvas::new();
        assert!(!canvas.is_captured());
        canvas.capture();
        assert!(canvas.is_captured());
        canvas.release_capture();
        assert!(!canvas.is_captured());
    }

    #[test]
    fn test_marquee() {
        let mut canvas = Canvas::new();
        canvas.set_marquee(Rect::new(0.0, 0.0, 10.0, 10.0));
        canvas.set_marquee(Rect::new(0.0, 0.0, 20.0, 20.0));
        assert_eq!(canvas.overlay().segments_of(OverlayOwner::Marquee).count(), 4);
        canvas.clear_marquee();
        assert!(canvas.overlay().is_empty());
    }

    #[test]
    fn test_shapes_within_requires_full_containment() {
        let mut canvas = Canvas::new();
        let inside = canvas.add_shape(rect(10.0, 10.0, 20.0, 20.0));
        canvas.add_shape(rect(90.0, 90.0, 120.0, 120.0));
        canvas.add_shape(Shape::Line(LineShape::new(Point::new(500.0, 500.0), Point::new(510.0, 510.0))));
        assert_eq!(canvas.shapes_within(Rect::new(0.0, 0.0, 100.0, 100.0)), vec![inside]);
    }

    #[test]
    fn test_undo_redo_restores_documents() {
        let mut canvas = Canvas::new();
        let first = canvas.add_shape(rect(0.0, 0.0, 10.0, 10.0));
        canvas.snapshot().unwrap();
        canvas.add_shape(rect(20.0, 20.0, 30.0, 30.0));
        canvas.show_bounds(first);
        canvas.capture();

        assert!(canvas.undo().unwrap());
        assert_eq!(canvas.len(), 1);
        assert!(canvas.overlay().is_empty());
        assert!(!canvas.is_captured());
        assert!(!canvas.bounds(first).unwrap().is_visible());

        assert!(canvas.redo().unwrap());
        assert_eq!(canvas.len(), 2);
        assert!(!canvas.redo().unwrap());
    }

    #[test]
    fn test_undo_without_history() {
        let mut canvas = Canvas::new();
        canvas.add_shape(rect(0.0, 0.0, 1.0, 1.0));
        assert!(!canvas.undo().unwrap());
        assert_eq!(canvas.len(), 1);
    }

    #[test]
    fn test_snap_point_uses_config() {
        let mut config = CanvasConfig::default();
        config.snap.enabled = true;
        let canvas = Canvas::with_config(config);
        assert_eq!(canvas.snap_point(Point::new(29.0, 11.0)), Point::new(20.0, 20.0));
    }
}
