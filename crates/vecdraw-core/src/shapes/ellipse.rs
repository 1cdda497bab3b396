//! Ellipse shape.

use super::{ShapeId, ShapeKind, ShapeStyle, ShapeTrait, normalized_rect};
use kurbo::{BezPath, Ellipse as KurboEllipse, Point, Rect, Shape as KurboShape, Vec2};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// An ellipse inscribed in the box spanned by two corner points.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ellipse {
    pub(crate) id: ShapeId,
    pub point1: Point,
    pub point2: Point,
    /// Style properties.
    pub style: ShapeStyle,
}

impl Ellipse {
    /// Create a new ellipse from two box corners.
    pub fn new(point1: Point, point2: Point) -> Self {
        Self {
            id: Uuid::new_v4(),
            point1,
            point2,
            style: ShapeStyle::default(),
        }
    }

    pub fn as_rect(&self) -> Rect {
        normalized_rect(self.point1, self.point2)
    }

    /// Rewrite the corners so `point1` is the minimum and `point2` the maximum.
    pub fn normalize(&mut self) {
        let rect = self.as_rect();
        self.point1 = Point::new(rect.x0, rect.y0);
        self.point2 = Point::new(rect.x1, rect.y1);
    }

    /// Get as a kurbo Ellipse.
    pub fn as_kurbo(&self) -> KurboEllipse {
        KurboEllipse::from_rect(self.as_rect())
    }
}

impl ShapeTrait for Ellipse {
    fn id(&self) -> ShapeId {
        self.id
    }

    fn kind(&self) -> ShapeKind {
        ShapeKind::Ellipse
    }

    fn extent(&self) -> Rect {
        self.as_rect()
    }

    fn control_points(&self) -> Vec<Point> {
        vec![self.point1, self.point2]
    }

    fn to_path(&self) -> BezPath {
        self.as_kurbo().to_path(0.1)
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
    fn test_ellipse_geometry() {
        let ellipse = Ellipse::new(Point::new(0.0, 0.0), Point::new(100.0, 50.0));
        let kurbo = ellipse.as_kurbo();
        assert_eq!(kurbo.center(), Point::new(50.0, 25.0));
        let radii = kurbo.radii();
        assert!((radii.x - 50.0).abs() < 1e-9);
        assert!((radii.y - 25.0).abs() < 1e-9);
    }
}
