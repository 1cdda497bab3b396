//! Text shape.

use super::{ShapeId, ShapeKind, ShapeStyle, ShapeTrait, normalized_rect};
use kurbo::{BezPath, Point, Rect, Vec2};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Horizontal placement of the text inside its box.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum HorizontalAlignment {
    Left,
    #[default]
    Center,
    Right,
}

/// Vertical placement of the text inside its box.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum VerticalAlignment {
    Top,
    #[default]
    Center,
    Bottom,
}

/// A text block laid out inside the box spanned by two corner points.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Text {
    pub(crate) id: ShapeId,
    pub point1: Point,
    pub point2: Point,
    /// The text content.
    pub content: String,
    /// Font size in pixels.
    pub font_size: f64,
    #[serde(default)]
    pub h_align: HorizontalAlignment,
    #[serde(default)]
    pub v_align: VerticalAlignment,
    /// Style properties.
    pub style: ShapeStyle,
}

impl Text {
    pub const DEFAULT_FONT_SIZE: f64 = 12.0;

    pub fn new(point1: Point, point2: Point, content: String) -> Self {
        Self {
            id: Uuid::new_v4(),
            point1,
            point2,
            content,
            font_size: Self::DEFAULT_FONT_SIZE,
            h_align: HorizontalAlignment::default(),
            v_align: VerticalAlignment::default(),
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

    /// Anchor point a renderer should align the laid-out text to.
    pub fn anchor(&self) -> Point {
        let rect = self.as_rect();
        let x = match self.h_align {
            HorizontalAlignment::Left => rect.x0,
            HorizontalAlignment::Center => rect.center().x,
            HorizontalAlignment::Right => rect.x1,
        };
        let y = match self.v_align {
            VerticalAlignment::Top => rect.y0,
            VerticalAlignment::Center => rect.center().y,
            VerticalAlignment::Bottom => rect.y1,
        };
        Point::new(x, y)
    }
}

impl ShapeTrait for Text {
    fn id(&self) -> ShapeId {
        self.id
    }

    fn kind(&self) -> ShapeKind {
        ShapeKind::Text
    }

    fn extent(&self) -> Rect {
        self.as_rect()
    }

    fn control_points(&self) -> Vec<Point> {
        vec![self.point1, self.point2]
    }

    fn to_path(&self) -> BezPath {
        // Glyph outlines come from the renderer's text layout.
        BezPath::new()
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
