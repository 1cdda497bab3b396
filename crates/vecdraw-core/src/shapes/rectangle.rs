//! Rectangle shape.

use super::{ShapeId, ShapeKind, ShapeStyle, ShapeTrait, normalized_rect};
use kurbo::{BezPath, Point, Rect, Shape as KurboShape, Vec2};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// An axis-aligned rectangle spanned by two corner points.
///
/// The corners may be given in any order while the shape is being drawn;
/// [`Rectangle::normalize`] rewrites them as top-left / bottom-right.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Rectangle {
    pub(crate) id: ShapeId,
    /// First corner.
    pub point1: Point,
    /// Opposite corner.
    pub point2: Point,
    /// Style properties.
    pub style: ShapeStyle,
}

impl Rectangle {
    /// Create a new rectangle from two corners.
    pub fn new(point1: Point, point2: Point) -> Self {
        Self {
            id: Uuid::new_v4(),
            point1,
            point2,
            style: ShapeStyle::default(),
        }
    }

    /// Get the rectangle as a kurbo Rect.
    pub fn as_rect(&self) -> Rect {
        normalized_rect(self.point1, self.point2)
    }

    /// Rewrite the corners so `point1` is the minimum and `point2` the maximum.
    pub fn normalize(&mut self) {
        let rect = self.as_rect();
        self.point1 = Point::new(rect.x0, rect.y0);
        self.point2 = Point::new(rect.x1, rect.y1);
    }
}

impl ShapeTrait for Rectangle {
    fn id(&self) -> ShapeId {
        self.id
    }

    fn kind(&self) -> ShapeKind {
        ShapeKind::Rectangle
    }

    fn extent(&self) -> Rect {
        self.as_rect()
    }

    fn control_points(&self) -> Vec<Point> {
        vec![self.point1, self.point2]
    }

    fn to_path(&self) -> BezPath {
        self.as_rect().to_path(0.1)
    }

    fn style(&self) -> &ShapeStyle {
        &self.style
    }

    fn style_mut(&mut self) -> &mut ShapeStyle {
        &mut self.style
    }

    fn translate(&mut self, delta: Vec2) {
        self.point1 += delta;
        self.point2 += delta;
    }
}
