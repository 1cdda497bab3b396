//! Quadratic bezier shape.

use super::{ShapeId, ShapeKind, ShapeStyle, ShapeTrait, points_extent};
use kurbo::{BezPath, Point, QuadBez, Rect, Shape as KurboShape, Vec2};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A quadratic bezier curve from `start` through control `point1` to `point2`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuadraticBezier {
    pub(crate) id: ShapeId,
    pub start: Point,
    pub point1: Point,
    pub point2: Point,
    #[serde(default)]
    pub is_closed: bool,
    pub style: ShapeStyle,
}

impl QuadraticBezier {
    /// Create a curve with every control point at `point`.
    pub fn at(point: Point) -> Self {
        Self::new(point, point, point)
    }

    pub fn new(start: Point, point1: Point, point2: Point) -> Self {
        Self {
            id: Uuid::new_v4(),
            start,
            point1,
            point2,
            is_closed: false,
            style: ShapeStyle::default(),
        }
    }

    pub fn as_kurbo(&self) -> QuadBez {
        QuadBez::new(self.start, self.point1, self.point2)
    }
}

impl ShapeTrait for QuadraticBezier {
    fn id(&self) -> ShapeId {
        self.id
    }

    fn kind(&self) -> ShapeKind {
        ShapeKind::QuadraticBezier
    }

    fn extent(&self) -> Rect {
        points_extent(&self.control_points())
    }

    fn control_points(&self) -> Vec<Point> {
        vec![self.start, self.point1, self.point2]
    }

    fn to_path(&self) -> BezPath {
        let mut path = self.as_kurbo().to_path(0.1);
        if self.is_closed {
            path.close_path();
        }
        path
    }

    fn style(&self) -> &ShapeStyle {
        &self.style
    }

    fn style_mut(&mut self) -> &mut ShapeStyle {
        &mut self.style
    }

    fn translate(&mut self, delta: Vec2) {
        self.start += delta;
        self.point1 += delta;
        self.point2 += delta;
    }
}
