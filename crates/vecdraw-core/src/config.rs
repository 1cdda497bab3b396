//! Canvas configuration.

use crate::shapes::{ArgbColor, ShapeFactory, ShapeStyle};
use crate::snap::SnapConfig;
use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

/// Default number of undo states to keep.
pub const DEFAULT_HISTORY_LIMIT: usize = 50;

/// Configuration errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("Invalid config: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Overlay geometry and appearance.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BoundsConfig {
    /// Outward inflation of rectangle, ellipse and text boxes.
    pub box_offset: f64,
    /// Outward inflation of line handles and body.
    pub line_offset: f64,
    /// Side length of the square handles on line endpoints.
    pub handle_size: f64,
    /// Highlight color.
    pub color: ArgbColor,
    /// Highlight stroke thickness.
    pub thickness: f64,
}

impl Default for BoundsConfig {
    fn default() -> Self {
        Self {
            box_offset: 5.0,
            line_offset: 0.0,
            handle_size: 8.0,
            color: ArgbColor::new(255, 0, 191, 255),
            thickness: 1.0,
        }
    }
}

/// Everything a canvas needs besides its shapes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CanvasConfig {
    pub bounds: BoundsConfig,
    pub snap: SnapConfig,
    /// Maximum undo entries (0 = unlimited).
    pub history_limit: usize,
    /// Style for new shapes.
    pub style: ShapeStyle,
    /// Content for new text shapes.
    pub default_text: String,
}

impl Default for CanvasConfig {
    fn default() -> Self {
        Self {
            bounds: BoundsConfig::default(),
            snap: SnapConfig::default(),
            history_limit: DEFAULT_HISTORY_LIMIT,
            style: ShapeStyle::default(),
            default_text: "Text".to_string(),
        }
    }
}

impl CanvasConfig {
    /// Parse a configuration from JSON. Missing fields take their defaults.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Load a JSON configuration file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.display().to_string(),
            source,
        })?;
        let config = Self::from_json(&json)?;
        log::info!("Loaded canvas config from {}", path.display());
        Ok(config)
    }

    /// Shape factory seeded with this configuration's defaults.
    pub fn shape_factory(&self) -> ShapeFactory {
        ShapeFactory::new(self.style.clone(), self.default_text.clone())
    }
}
