//! Shape definitions for the drawing surface.

mod arc;
mod bezier;
mod ellipse;
mod factory;
mod line;
mod quadratic_bezier;
mod rectangle;
mod text;

pub use arc::Arc;
pub use bezier::Bezier;
pub use ellipse::Ellipse;
pub use factory::ShapeFactory;
pub use line::Line;
pub use quadratic_bezier::QuadraticBezier;
pub use rectangle::Rectangle;
pub use text::{HorizontalAlignment, Text, VerticalAlignment};

use kurbo::{BezPath, Point, Rect, Vec2};
use peniko::Color;
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Serializable color as an (a, r, g, b) byte quadruple.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ArgbColor {
    pub a: u8,
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl ArgbColor {
    pub const fn new(a: u8, r: u8, g: u8, b: u8) -> Self {
        Self { a, r, g, b }
    }

    pub const fn black() -> Self {
        Self::new(255, 0, 0, 0)
    }

    pub const fn white() -> Self {
        Self::new(255, 255, 255, 255)
    }

    pub const fn transparent() -> Self {
        Self::new(0, 0, 0, 0)
    }
}

impl From<Color> for ArgbColor {
    fn from(color: Color) -> Self {
        let rgba = color.to_rgba8();
        Self {
            a: rgba.a,
            r: rgba.r,
            g: rgba.g,
            b: rgba.b,
        }
    }
}

impl From<ArgbColor> for Color {
    fn from(color: ArgbColor) -> Self {
        Color::from_rgba8(color.r, color.g, color.b, color.a)
    }
}

/// Stroke and fill properties shared by every shape kind.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ShapeStyle {
    /// Stroke color.
    pub stroke_color: ArgbColor,
    /// Stroke width.
    pub stroke_width: f64,
    /// Fill color (None = no fill).
    pub fill_color: Option<ArgbColor>,
}

impl Default for ShapeStyle {
    fn default() -> Self {
        Self {
            stroke_color: ArgbColor::black(),
            stroke_width: 2.0,
            fill_color: None,
        }
    }
}

/// Unique identifier for shapes.
pub type ShapeId = Uuid;

/// The closed set of shape kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ShapeKind {
    Line,
    Bezier,
    QuadraticBezier,
    Arc,
    Rectangle,
    Ellipse,
    Text,
}

impl fmt::Display for ShapeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ShapeKind::Line => "line",
            ShapeKind::Bezier => "bezier",
            ShapeKind::QuadraticBezier => "quadratic bezier",
            ShapeKind::Arc => "arc",
            ShapeKind::Rectangle => "rectangle",
            ShapeKind::Ellipse => "ellipse",
            ShapeKind::Text => "text",
        };
        f.write_str(name)
    }
}

/// Axis-aligned rectangle spanned by two arbitrary corner points.
pub fn normalized_rect(p1: Point, p2: Point) -> Rect {
    Rect::new(
        p1.x.min(p2.x),
        p1.y.min(p2.y),
        p1.x.max(p2.x),
        p1.y.max(p2.y),
    )
}

/// Smallest rectangle containing all `points`.
fn points_extent(points: &[Point]) -> Rect {
    let mut iter = points.iter();
    let Some(first) = iter.next() else {
        return Rect::ZERO;
    };
    iter.fold(Rect::from_points(*first, *first), |acc, p| {
        acc.union_pt(*p)
    })
}

/// Common trait for all shapes.
pub trait ShapeTrait {
    /// Get the unique identifier.
    fn id(&self) -> ShapeId;

    /// Get the shape kind.
    fn kind(&self) -> ShapeKind;

    /// Geometric extent of the shape's control geometry.
    fn extent(&self) -> Rect;

    /// All control points, in declaration order.
    fn control_points(&self) -> Vec<Point>;

    /// Get the path representation for rendering.
    fn to_path(&self) -> BezPath;

    /// Get the style.
    fn style(&self) -> &ShapeStyle;

    /// Get mutable style.
    fn style_mut(&mut self) -> &mut ShapeStyle;

    /// Move every control point by `delta`.
    fn translate(&mut self, delta: Vec2);
}

/// Enum wrapper for all shape types (for serialization).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Shape {
    Line(Line),
    Bezier(Bezier),
    QuadraticBezier(QuadraticBezier),
    Arc(Arc),
    Rectangle(Rectangle),
    Ellipse(Ellipse),
    Text(Text),
}

impl Shape {
    pub fn id(&self) -> ShapeId {
        match self {
            Shape::Line(s) => s.id(),
            Shape::Bezier(s) => s.id(),
            Shape::QuadraticBezier(s) => s.id(),
            Shape::Arc(s) => s.id(),
            Shape::Rectangle(s) => s.id(),
            Shape::Ellipse(s) => s.id(),
            Shape::Text(s) => s.id(),
        }
    }

    pub fn kind(&self) -> ShapeKind {
        match self {
            Shape::Line(s) => s.kind(),
            Shape::Bezier(s) => s.kind(),
            Shape::QuadraticBezier(s) => s.kind(),
            Shape::Arc(s) => s.kind(),
            Shape::Rectangle(s) => s.kind(),
            Shape::Ellipse(s) => s.kind(),
            Shape::Text(s) => s.kind(),
        }
    }

    pub fn extent(&self) -> Rect {
        match self {
            Shape::Line(s) => s.extent(),
            Shape::Bezier(s) => s.extent(),
            Shape::QuadraticBezier(s) => s.extent(),
            Shape::Arc(s) => s.extent(),
            Shape::Rectangle(s) => s.extent(),
            Shape::Ellipse(s) => s.extent(),
            Shape::Text(s) => s.extent(),
        }
    }

    pub fn control_points(&self) -> Vec<Point> {
        match self {
            Shape::Line(s) => s.control_points(),
            Shape::Bezier(s) => s.control_points(),
            Shape::QuadraticBezier(s) => s.control_points(),
            Shape::Arc(s) => s.control_points(),
            Shape::Rectangle(s) => s.control_points(),
            Shape::Ellipse(s) => s.control_points(),
            Shape::Text(s) => s.control_points(),
        }
    }

    /// Convert to a renderable path.
    pub fn to_path(&self) -> BezPath {
        match self {
            Shape::Line(s) => s.to_path(),
            Shape::Bezier(s) => s.to_path(),
            Shape::QuadraticBezier(s) => s.to_path(),
            Shape::Arc(s) => s.to_path(),
            Shape::Rectangle(s) => s.to_path(),
            Shape::Ellipse(s) => s.to_path(),
            Shape::Text(s) => s.to_path(),
        }
    }

    pub fn style(&self) -> &ShapeStyle {
        match self {
            Shape::Line(s) => s.style(),
            Shape::Bezier(s) => s.style(),
            Shape::QuadraticBezier(s) => s.style(),
            Shape::Arc(s) => s.style(),
            Shape::Rectangle(s) => s.style(),
            Shape::Ellipse(s) => s.style(),
            Shape::Text(s) => s.style(),
        }
    }

    pub fn style_mut(&mut self) -> &mut ShapeStyle {
        match self {
            Shape::Line(s) => s.style_mut(),
            Shape::Bezier(s) => s.style_mut(),
            Shape::QuadraticBezier(s) => s.style_mut(),
            Shape::Arc(s) => s.style_mut(),
            Shape::Rectangle(s) => s.style_mut(),
            Shape::Ellipse(s) => s.style_mut(),
            Shape::Text(s) => s.style_mut(),
        }
    }

    pub fn translate(&mut self, delta: Vec2) {
        match self {
            Shape::Line(s) => s.translate(delta),
            Shape::Bezier(s) => s.translate(delta),
            Shape::QuadraticBezier(s) => s.translate(delta),
            Shape::Arc(s) => s.translate(delta),
            Shape::Rectangle(s) => s.translate(delta),
            Shape::Ellipse(s) => s.translate(delta),
            Shape::Text(s) => s.translate(delta),
        }
    }

    /// Get the line if this shape is a line.
    pub fn as_line(&self) -> Option<&Line> {
        match self {
            Shape::Line(l) => Some(l),
            _ => None,
        }
    }

    /// Get the rectangle if this shape is a rectangle.
    pub fn as_rectangle(&self) -> Option<&Rectangle> {
        match self {
            Shape::Rectangle(r) => Some(r),
            _ => None,
        }
    }

    /// Corner points of the shapes drawn from a two-corner box
    /// (rectangle, ellipse, text, arc).
    pub fn box_corners_mut(&mut self) -> Option<(&mut Point, &mut Point)> {
        match self {
            Shape::Rectangle(s) => Some((&mut s.point1, &mut s.point2)),
            Shape::Ellipse(s) => Some((&mut s.point1, &mut s.point2)),
            Shape::Text(s) => Some((&mut s.point1, &mut s.point2)),
            Shape::Arc(s) => Some((&mut s.point1, &mut s.point2)),
            Shape::Line(_) | Shape::Bezier(_) | Shape::QuadraticBezier(_) => None,
        }
    }
}
