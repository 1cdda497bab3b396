//! Elliptical arc shape.

use super::{ShapeId, ShapeKind, ShapeStyle, ShapeTrait, normalized_rect};
use kurbo::{Arc as KurboArc, BezPath, Point, Rect, Shape as KurboShape, Vec2};
use serde::{Deserialize, Serialize};
use std::f64::consts::{FRAC_PI_2, PI};
use uuid::Uuid;

/// An arc of the ellipse inscribed in the box spanned by two corners.
///
/// Angles are in radians; a zero width or height box is a valid,
/// degenerate arc.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Arc {
    pub(crate) id: ShapeId,
    pub point1: Point,
    pub point2: Point,
    pub start_angle: f64,
    pub sweep_angle: f64,
    #[serde(default)]
    pub is_closed: bool,
    pub style: ShapeStyle,
}

impl Arc {
    /// Default sweep for new arcs (quarter turn, counter-clockwise from 0).
    pub const DEFAULT_SWEEP: f64 = FRAC_PI_2;

    pub fn new(point1: Point, point2: Point) -> Self {
        Self {
            id: Uuid::new_v4(),
            point1,
            point2,
            start_angle: 0.0,
            sweep_angle: Self::DEFAULT_SWEEP,
            is_closed: false,
            style: ShapeStyle::default(),
        }
    }

    pub fn rect(&self) -> Rect {
        normalized_rect(self.point1, self.point2)
    }

    pub fn center(&self) -> Point {
        self.rect().center()
    }

    pub fn radii(&self) -> Vec2 {
        let rect = self.rect();
        Vec2::new(rect.width() / 2.0, rect.height() / 2.0)
    }

    pub fn is_degenerate(&self) -> bool {
        let radii = self.radii();
        radii.x <= 0.0 || radii.y <= 0.0
    }

    pub fn as_kurbo(&self) -> KurboArc {
        KurboArc::new(
            self.center(),
            self.radii(),
            self.start_angle,
            self.sweep_angle.clamp(-2.0 * PI, 2.0 * PI),
            0.0,
        )
    }
}

impl ShapeTrait for Arc {
    fn id(&self) -> ShapeId {
        self.id
    }

    fn kind(&self) -> ShapeKind {
        ShapeKind::Arc
    }

    fn extent(&self) -> Rect {
        self.rect()
    }

    fn control_points(&self) -> Vec<Point> {
        vec![self.point1, self.point2]
    }

    fn to_path(&self) -> BezPath {
        if self.is_degenerate() {
            // Collapsed box: the arc flattens onto a segment (or a point).
            let mut path = BezPath::new();
            let rect = self.rect();
            if rect.width() > 0.0 || rect.height() > 0.0 {
                path.move_to(Point::new(rect.x0, rect.y0));
                path.line_to(Point::new(rect.x1, rect.y1));
            }
            return path;
        }
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
        self.point1 += delta;
        self.point2 += delta;
    }
}
