//! Default-initialized shape construction.

use super::{
    Arc, Bezier, Ellipse, Line, QuadraticBezier, Rectangle, Shape, ShapeKind, ShapeStyle, Text,
};
use kurbo::Point;

/// Creates new shapes with the current default style.
#[derive(Debug, Clone, PartialEq)]
pub struct ShapeFactory {
    /// Style applied to every new shape.
    pub style: ShapeStyle,
    /// Content of newly created text shapes.
    pub default_text: String,
}

impl Default for ShapeFactory {
    fn default() -> Self {
        Self {
            style: ShapeStyle::default(),
            default_text: "Text".to_string(),
        }
    }
}

impl ShapeFactory {
    pub fn new(style: ShapeStyle, default_text: String) -> Self {
        Self { style, default_text }
    }

    /// Create a shape of `kind` with all of its control points at `point`.
    pub fn create(&self, kind: ShapeKind, point: Point) -> Shape {
        let mut shape = match kind {
            ShapeKind::Line => Shape::Line(Line::new(point, point)),
            ShapeKind::Bezier => Shape::Bezier(Bezier::at(point)),
            ShapeKind::QuadraticBezier => Shape::QuadraticBezier(QuadraticBezier::at(point)),
            ShapeKind::Arc => Shape::Arc(Arc::new(point, point)),
            ShapeKind::Rectangle => Shape::Rectangle(Rectangle::new(point, point)),
            ShapeKind::Ellipse => Shape::Ellipse(Ellipse::new(point, point)),
            ShapeKind::Text => {
                Shape::Text(Text::new(point, point, self.default_text.clone()))
            }
        };
        *shape.style_mut() = self.style.clone();
        shape
    }
}
