//! Cubic bezier shape.

use super::{ShapeId, ShapeKind, ShapeStyle, ShapeTrait, points_extent};
use kurbo::{BezPath, CubicBez, Point, Rect, Shape as KurboShape, Vec2};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A cubic bezier curve: `start`, two control points and `point3` as end.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Bezier {
    pub(crate) id: ShapeId,
    pub start: Point,
    pub point1: Point,
    pub point2: Point,
    pub point3: Point,
    /// Close the path back to `start`.
    #[serde(default)]
    pub is_closed: bool,
    pub style: ShapeStyle,
}

impl Bezier {
    /// Create a curve with every control point at `point`.
    pub fn at(point: Point) -> Self {
        Self::new(point, point, point, point)
    }

    pub fn new(start: Point, point1: Point, point2: Point, point3: Point) -> Self {
        Self {
            id: Uuid::new_v4(),
            start,
            point1,
            point2,
            point3,
            is_closed: false,
            style: ShapeStyle::default(),
        }
    }

    pub fn as_kurbo(&self) -> CubicBez {
        CubicBez::new(self.start, self.point1, self.point2, self.point3)
    }
}

impl ShapeTrait for Bezier {
    fn id(&self) -> ShapeId {
        self.id
    }

    fn kind(&self) -> ShapeKind {
        ShapeKind::Bezier
    }

    fn extent(&self) -> Rect {
        points_extent(&self.control_points())
    }

    fn control_points(&self) -> Vec<Point> {
        vec![self.start, self.point1, self.point2, self.point3]
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
        self.point3 += delta;
    }
}
