//! Line shape.

use super::{ShapeId, ShapeKind, ShapeStyle, ShapeTrait, normalized_rect};
use kurbo::{BezPath, Point, Rect, Vec2};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A straight line segment between two points.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Line {
    pub(crate) id: ShapeId,
    /// First endpoint.
    pub point1: Point,
    /// Second endpoint.
    pub point2: Point,
    /// Style properties.
    pub style: ShapeStyle,
}

impl Line {
    /// Create a new line.
    pub fn new(point1: Point, point2: Point) -> Self {
        Self {
            id: Uuid::new_v4(),
            point1,
            point2,
            style: ShapeStyle::default(),
        }
    }

}

impl ShapeTrait for Line {
    fn id(&self) -> ShapeId {
        self.id
    }

    fn kind(&self) -> ShapeKind {
        ShapeKind::Line
    }

    fn extent(&self) -> Rect {
        normalized_rect(self.point1, self.point2)
    }

    fn control_points(&self) -> Vec<Point> {
        vec![self.point1, self.point2]
    }

    fn to_path(&self) -> BezPath {
        let mut path = BezPath::new();
        if self.point1 == self.point2 {
            return path;
        }
        path.move_to(self.point1);
        path.line_to(self.point2);
        path
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

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_path_runs_between_endpoints() {
        let line = Line::new(Point::new(0.0, 0.0), Point::new(100.0, 0.0));
        let path = line.to_path();
        assert_eq!(path.elements().len(), 2);
        assert_eq!(path.elements()[1], kurbo::PathEl::LineTo(Point::new(100.0, 0.0)));
    }

    #[test]
    fn test_extent_any_direction() {
        let line = Line::new(Point::new(50.0, 80.0), Point::new(10.0, 20.0));
        let extent = line.extent();
        assert!((extent.x0 - 10.0).abs() < f64::EPSILON);
        assert!((extent.y0 - 20.0).abs() < f64::EPSILON);
        assert!((extent.x1 - 50.0).abs() < f64::EPSILON);
        assert!((extent.y1 - 80.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_zero_length_path_is_empty() {
        let line = Line::new(Point::new(3.0, 3.0), Point::new(3.0, 3.0));
        assert!(line.to_path().elements().is_empty());
    }
}
