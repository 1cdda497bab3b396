//! Grid snapping for incoming pointer positions.

use kurbo::Point;
use serde::{Deserialize, Serialize};

/// Default grid size for snapping.
pub const GRID_SIZE: f64 = 20.0;

/// Grid snapping settings.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SnapConfig {
    /// Snap pointer positions to the grid.
    pub enabled: bool,
    /// Grid spacing in canvas units.
    pub grid_size: f64,
}

impl Default for SnapConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            grid_size: GRID_SIZE,
        }
    }
}

impl SnapConfig {
    /// Apply the configured snapping to `point`.
    pub fn apply(&self, point: Point) -> Point {
        if self.enabled {
            snap_to_grid(point, self.grid_size)
        } else {
            point
        }
    }
}

/// Snap a point to the nearest grid intersection.
pub fn snap_to_grid(point: Point, grid_size: f64) -> Point {
    if grid_size <= 0.0 {
        return point;
    }
    Point::new(
        (point.x / grid_size).round() * grid_size,
        (point.y / grid_size).round() * grid_size,
    )
}
