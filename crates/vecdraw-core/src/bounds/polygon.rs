//! Closed polygons used for overlay outlines and hit-testing.

use kurbo::{Line, Point, Rect};

/// A closed polygon given by its ordered vertex list.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Polygon {
    vertices: Vec<Point>,
}

impl Polygon {
    pub fn new(vertices: Vec<Point>) -> Self {
        Self { vertices }
    }

    /// Four-corner polygon of `rect`: top-left, top-right, bottom-right, bottom-left.
    pub fn from_rect(rect: Rect) -> Self {
        Self::new(vec![
            Point::new(rect.x0, rect.y0),
            Point::new(rect.x1, rect.y0),
            Point::new(rect.x1, rect.y1),
            Point::new(rect.x0, rect.y1),
        ])
    }

    /// Square of side `2 * half` centered on `center`.
    pub fn square(center: Point, half: f64) -> Self {
        Self::from_rect(Rect::new(
            center.x - half,
            center.y - half,
            center.x + half,
            center.y + half,
        ))
    }

    pub fn vertices(&self) -> &[Point] {
        &self.vertices
    }

    /// Replace the vertices in place, reusing the allocation.
    pub fn set_vertices(&mut self, vertices: impl IntoIterator<Item = Point>) {
        self.vertices.clear();
        self.vertices.extend(vertices);
    }

    /// Edges of the closed outline, last vertex joined back to the first.
    pub fn edges(&self) -> impl Iterator<Item = Line> + '_ {
        let n = self.vertices.len();
        let count = if n < 2 { 0 } else { n };
        (0..count).map(move |i| Line::new(self.vertices[i], self.vertices[(i + 1) % n]))
    }

    /// Smallest axis-aligned rectangle containing every vertex.
    pub fn extent(&self) -> Rect {
        let mut iter = self.vertices.iter();
        let Some(first) = iter.next() else {
            return Rect::ZERO;
        };
        iter.fold(Rect::from_points(*first, *first), |acc, p| acc.union_pt(*p))
    }

    /// Even-odd ray-casting point-in-polygon test.
    pub fn contains(&self, point: Point) -> bool {
        let v = &self.vertices;
        if v.len() < 3 {
            return false;
        }
        let mut inside = false;
        let mut j = v.len() - 1;
        for i in 0..v.len() {
            let (pi, pj) = (v[i], v[j]);
            if (pi.y > point.y) != (pj.y > point.y) {
                let x_cross = (pj.x - pi.x) * (point.y - pi.y) / (pj.y - pi.y) + pi.x;
                if point.x < x_cross {
                    inside = !inside;
                }
            }
            j = i;
        }
        inside
    }
}
