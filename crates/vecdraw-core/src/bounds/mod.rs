//! Bounds overlays: hit-test polygons and highlight outlines per shape.
//!
//! Each supported shape kind gets a [`BoundsProvider`] that rebuilds its
//! polygons from the shape geometry. [`Bounds`] wraps a provider together
//! with its visibility on the canvas overlay layer.
//!
//! Curves and arcs have no provider: [`Bounds::create`] returns `None` for
//! them, so they carry no overlay and never win a hit-test.

mod overlay;
mod polygon;

pub use overlay::{OverlayLayer, OverlayOwner, OverlaySegment, OverlayStyle};
pub use polygon::Polygon;

use crate::config::BoundsConfig;
use crate::shapes::{Shape, ShapeId};
use kurbo::{Line, Point, Rect, Vec2};

/// Per-kind bounds geometry.
pub trait BoundsProvider {
    /// Recompute every vertex from the current shape geometry.
    fn update(&mut self, shape: &Shape);

    /// Check whether `point` falls inside the overlay region.
    fn contains(&self, point: Point) -> bool;

    /// Polygons making up the overlay, in drawing order.
    fn polygons(&self) -> Vec<&Polygon>;
}

/// Single inflated box around rectangles, ellipses and text.
#[derive(Debug, Clone, PartialEq)]
pub struct BoxBounds {
    offset: f64,
    polygon: Polygon,
}

impl BoxBounds {
    pub fn new(offset: f64) -> Self {
        Self {
            offset,
            polygon: Polygon::default(),
        }
    }

    pub fn polygon(&self) -> &Polygon {
        &self.polygon
    }
}

impl BoundsProvider for BoxBounds {
    fn update(&mut self, shape: &Shape) {
        let rect = shape.extent().inflate(self.offset, self.offset);
        self.polygon = Polygon::from_rect(rect);
    }

    fn contains(&self, point: Point) -> bool {
        self.polygon.contains(point)
    }

    fn polygons(&self) -> Vec<&Polygon> {
        vec![&self.polygon]
    }
}

/// How the corners of the two endpoint handles are joined into the line body.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DiagonalPairing {
    /// Minimum-x corners take the minimum y (top-left / bottom-right pairs).
    /// Used when x and y change in opposite directions along the line.
    StraightThrough,
    /// Minimum-x corners take the maximum y (bottom-left / top-right pairs).
    /// Used for every other orientation, including axis-parallel lines.
    Inverted,
}

impl DiagonalPairing {
    pub fn for_line(p1: Point, p2: Point) -> Self {
        let d = p2 - p1;
        if d.x * d.y < 0.0 {
            DiagonalPairing::StraightThrough
        } else {
            DiagonalPairing::Inverted
        }
    }

    /// Offsets of the two handle corners the body runs through.
    fn corner_offsets(self, half: f64) -> (Vec2, Vec2) {
        match self {
            DiagonalPairing::StraightThrough => (Vec2::new(-half, -half), Vec2::new(half, half)),
            DiagonalPairing::Inverted => (Vec2::new(-half, half), Vec2::new(half, -half)),
        }
    }
}

/// Endpoint handles plus a body quadrilateral around a line.
#[derive(Debug, Clone, PartialEq)]
pub struct LineBounds {
    offset: f64,
    handle_size: f64,
    pairing: DiagonalPairing,
    start_handle: Polygon,
    end_handle: Polygon,
    body: Polygon,
}

impl LineBounds {
    pub fn new(offset: f64, handle_size: f64) -> Self {
        Self {
            offset,
            handle_size,
            pairing: DiagonalPairing::Inverted,
            start_handle: Polygon::default(),
            end_handle: Polygon::default(),
            body: Polygon::default(),
        }
    }

    pub fn pairing(&self) -> DiagonalPairing {
        self.pairing
    }

    pub fn start_handle(&self) -> &Polygon {
        &self.start_handle
    }

    pub fn end_handle(&self) -> &Polygon {
        &self.end_handle
    }

    /// Body vertices: start corner A, end corner A, end corner B, start corner B.
    pub fn body(&self) -> &Polygon {
        &self.body
    }

    fn half(&self) -> f64 {
        self.handle_size / 2.0 + self.offset
    }
}

impl BoundsProvider for LineBounds {
    fn update(&mut self, shape: &Shape) {
        let Some(line) = shape.as_line() else {
            log::warn!("line bounds asked to track a {}", shape.kind());
            return;
        };
        let (p1, p2) = (line.point1, line.point2);
        let half = self.half();

        self.start_handle = Polygon::square(p1, half);
        self.end_handle = Polygon::square(p2, half);

        self.pairing = DiagonalPairing::for_line(p1, p2);
        let (a, b) = self.pairing.corner_offsets(half);
        self.body.set_vertices([p1 + a, p2 + a, p2 + b, p1 + b]);
    }

    fn contains(&self, point: Point) -> bool {
        self.body.contains(point)
            || self.start_handle.contains(point)
            || self.end_handle.contains(point)
    }

    fn polygons(&self) -> Vec<&Polygon> {
        vec![&self.start_handle, &self.end_handle, &self.body]
    }
}

/// Kind-specific bounds geometry.
#[derive(Debug, Clone, PartialEq)]
pub enum BoundsGeometry {
    Box(BoxBounds),
    Line(LineBounds),
}

impl BoundsGeometry {
    fn provider(&self) -> &dyn BoundsProvider {
        match self {
            BoundsGeometry::Box(b) => b,
            BoundsGeometry::Line(b) => b,
        }
    }

    fn provider_mut(&mut self) -> &mut dyn BoundsProvider {
        match self {
            BoundsGeometry::Box(b) => b,
            BoundsGeometry::Line(b) => b,
        }
    }
}

/// Overlay and hit-test region of one shape.
#[derive(Debug, Clone, PartialEq)]
pub struct Bounds {
    owner: ShapeId,
    geometry: BoundsGeometry,
    style: OverlayStyle,
    visible: bool,
}

impl Bounds {
    /// Build bounds for `shape`, or `None` when its kind has no overlay.
    pub fn create(shape: &Shape, config: &BoundsConfig) -> Option<Self> {
        let geometry = match shape {
            Shape::Rectangle(_) | Shape::Ellipse(_) | Shape::Text(_) => {
                BoundsGeometry::Box(BoxBounds::new(config.box_offset))
            }
            Shape::Line(_) => {
                BoundsGeometry::Line(LineBounds::new(config.line_offset, config.handle_size))
            }
            Shape::Bezier(_) | Shape::QuadraticBezier(_) | Shape::Arc(_) => {
                log::debug!("no bounds for {} {}", shape.kind(), shape.id());
                return None;
            }
        };
        let mut bounds = Self {
            owner: shape.id(),
            geometry,
            style: OverlayStyle {
                color: config.color,
                thickness: config.thickness,
            },
            visible: false,
        };
        bounds.geometry.provider_mut().update(shape);
        Some(bounds)
    }

    pub fn owner(&self) -> ShapeId {
        self.owner
    }

    pub fn geometry(&self) -> &BoundsGeometry {
        &self.geometry
    }

    pub fn as_line(&self) -> Option<&LineBounds> {
        match &self.geometry {
            BoundsGeometry::Line(l) => Some(l),
            BoundsGeometry::Box(_) => None,
        }
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn contains(&self, point: Point) -> bool {
        self.geometry.provider().contains(point)
    }

    pub fn polygons(&self) -> Vec<&Polygon> {
        self.geometry.provider().polygons()
    }

    /// Union of every polygon's extent.
    pub fn extent(&self) -> Rect {
        self.polygons()
            .into_iter()
            .map(Polygon::extent)
            .reduce(|acc, r| acc.union(r))
            .unwrap_or(Rect::ZERO)
    }

    /// Outline segments of all polygons.
    pub fn segments(&self) -> Vec<Line> {
        self.polygons()
            .into_iter()
            .flat_map(|p| p.edges().collect::<Vec<_>>())
            .collect()
    }

    /// Recompute geometry; visible segments on `layer` follow the shape.
    pub fn update(&mut self, shape: &Shape, layer: &mut OverlayLayer) {
        self.geometry.provider_mut().update(shape);
        if self.visible {
            layer.replace(OverlayOwner::Shape(self.owner), self.segments(), self.style);
        }
    }

    /// Add the outline to `layer`. Returns false when already visible.
    pub fn show(&mut self, layer: &mut OverlayLayer) -> bool {
        if self.visible {
            return false;
        }
        layer.add(OverlayOwner::Shape(self.owner), self.segments(), self.style);
        self.visible = true;
        true
    }

    /// Remove the outline from `layer`. Returns false when already hidden.
    pub fn hide(&mut self, layer: &mut OverlayLayer) -> bool {
        if !self.visible {
            return false;
        }
        layer.remove_owner(OverlayOwner::Shape(self.owner));
        self.visible = false;
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shapes::{Arc, Line as LineShape, Rectangle};

    fn config() -> BoundsConfig {
        BoundsConfig::default()
    }

    #[test]
    fn test_box_bounds_inflated_by_offset() {
        let rect = Shape::Rectangle(Rectangle::new(Point::new(10.0, 10.0), Point::new(30.0, 20.0)));
        let bounds = Bounds::create(&rect, &config()).expect("rectangles have bounds");
        assert_eq!(bounds.extent(), Rect::new(5.0, 5.0, 35.0, 25.0));
        assert!(bounds.contains(Point::new(7.0, 7.0)));
        assert!(!bounds.contains(Point::new(4.0, 7.0)));
    }

    #[test]
    fn test_unsupported_kinds() {
        let arc = Shape::Arc(Arc::new(Point::ZERO, Point::new(10.0, 10.0)));
        assert!(Bounds::create(&arc, &config()).is_none());
    }

    #[test]
    fn test_line_pairing() {
        assert_eq!(
            DiagonalPairing::for_line(Point::new(0.0, 0.0), Point::new(10.0, -10.0)),
            DiagonalPairing::StraightThrough
        );
        assert_eq!(
            DiagonalPairing::for_line(Point::new(10.0, -10.0), Point::new(0.0, 0.0)),
            DiagonalPairing::StraightThrough
        );
        assert_eq!(
            DiagonalPairing::for_line(Point::new(0.0, 0.0), Point::new(10.0, 10.0)),
            DiagonalPairing::Inverted
        );
        assert_eq!(
            DiagonalPairing::for_line(Point::new(0.0, 0.0), Point::new(10.0, 0.0)),
            DiagonalPairing::Inverted
        );
    }

    #[test]
    fn test_line_contains_body_and_handles() {
        let line = Shape::Line(LineShape::new(Point::new(0.0, 0.0), Point::new(100.0, 100.0)));
        let bounds = Bounds::create(&line, &config()).expect("lines have bounds");
        let half = config().handle_size / 2.0 + config().line_offset;

        assert!(bounds.contains(Point::new(50.0, 50.0)));
        assert!(bounds.contains(Point::new(-half + 0.5, -half + 0.5)));
        assert!(bounds.contains(Point::new(100.0 + half - 0.5, 100.0)));
        assert!(!bounds.contains(Point::new(50.0, 0.0)));
        assert!(!bounds.contains(Point::new(0.0, 50.0)));
    }

    #[test]
    fn test_show_hide_idempotent() {
        let rect = Shape::Rectangle(Rectangle::new(Point::ZERO, Point::new(10.0, 10.0)));
        let mut bounds = Bounds::create(&rect, &config()).expect("rectangles have bounds");
        let mut layer = OverlayLayer::new();

        assert!(bounds.show(&mut layer));
        assert!(!bounds.show(&mut layer));
        assert_eq!(layer.len(), 4);

        assert!(bounds.hide(&mut layer));
        assert!(!bounds.hide(&mut layer));
        assert!(layer.is_empty());
    }

    #[test]
    fn test_update_moves_visible_segments() {
        let mut rect = Shape::Rectangle(Rectangle::new(Point::ZERO, Point::new(10.0, 10.0)));
        let mut bounds = Bounds::create(&rect, &config()).expect("rectangles have bounds");
        let mut layer = OverlayLayer::new();
        bounds.show(&mut layer);

        rect.translate(Vec2::new(100.0, 0.0));
        bounds.update(&rect, &mut layer);

        assert_eq!(layer.len(), 4);
        assert!(layer.segments().iter().all(|s| s.line.p0.x >= 95.0));
        assert!(bounds.contains(Point::new(105.0, 5.0)));
    }

    #[test]
    fn test_update_hidden_leaves_layer_alone() {
        let mut rect = Shape::Rectangle(Rectangle::new(Point::ZERO, Point::new(10.0, 10.0)));
        let mut bounds = Bounds::create(&rect, &config()).expect("rectangles have bounds");
        let mut layer = OverlayLayer::new();

        rect.translate(Vec2::new(1.0, 1.0));
        bounds.update(&rect, &mut layer);
        assert!(layer.is_empty());
    }
}
