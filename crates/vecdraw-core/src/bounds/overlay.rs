//! Overlay layer: highlight segments drawn above the shapes.

use crate::shapes::{ArgbColor, ShapeId};
use kurbo::Line;

/// Who put a segment on the overlay layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OverlayOwner {
    /// Bounds of a shape.
    Shape(ShapeId),
    /// Rubber-band selection rectangle.
    Marquee,
}

/// Stroke used for overlay segments.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OverlayStyle {
    pub color: ArgbColor,
    pub thickness: f64,
}

/// A single rendered overlay line.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OverlaySegment {
    pub owner: OverlayOwner,
    pub line: Line,
    pub style: OverlayStyle,
}

/// Ordered overlay children of a canvas.
#[derive(Debug, Clone, Default)]
pub struct OverlayLayer {
    segments: Vec<OverlaySegment>,
}

impl OverlayLayer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append segments for `owner`.
    pub fn add(
        &mut self,
        owner: OverlayOwner,
        lines: impl IntoIterator<Item = Line>,
        style: OverlayStyle,
    ) {
        self.segments.extend(
            lines
                .into_iter()
                .map(|line| OverlaySegment { owner, line, style }),
        );
    }

    /// Remove every segment of `owner`, returning how many were removed.
    pub fn remove_owner(&mut self, owner: OverlayOwner) -> usize {
        let before = self.segments.len();
        self.segments.retain(|s| s.owner != owner);
        before - self.segments.len()
    }

    /// Swap the segments of `owner` for new geometry.
    pub fn replace(
        &mut self,
        owner: OverlayOwner,
        lines: impl IntoIterator<Item = Line>,
        style: OverlayStyle,
    ) {
        self.remove_owner(owner);
        self.add(owner, lines, style);
    }

    pub fn segments(&self) -> &[OverlaySegment] {
        &self.segments
    }

    pub fn segments_of(&self, owner: OverlayOwner) -> impl Iterator<Item = &OverlaySegment> {
        self.segments.iter().filter(move |s| s.owner == owner)
    }

    pub fn contains_owner(&self, owner: OverlayOwner) -> bool {
        self.segments.iter().any(|s| s.owner == owner)
    }

    pub fn len(&self) -> usize {
        self.segments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    pub fn clear(&mut self) {
        self.segments.clear();
    }
}
