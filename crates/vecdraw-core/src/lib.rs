//! VecDraw Core Library
//!
//! Shapes, bounds overlays, pointer-gesture editors and snapshot history for
//! an interactive 2-D vector drawing surface.

pub mod bounds;
pub mod canvas;
pub mod codec;
pub mod config;
pub mod history;
pub mod selection;
pub mod shapes;
pub mod snap;
pub mod tools;

pub use bounds::{Bounds, BoundsProvider, OverlayLayer, OverlayOwner, OverlaySegment, Polygon};
pub use canvas::{Canvas, Document, RenderHint, RenderRequest};
pub use codec::{CanvasCodec, CodecError, JsonCodec};
pub use config::{BoundsConfig, CanvasConfig, ConfigError};
pub use history::{History, HistoryError, HistoryStack};
pub use selection::SelectionEditor;
pub use shapes::{ArgbColor, Shape, ShapeFactory, ShapeId, ShapeKind, ShapeStyle, ShapeTrait};
pub use snap::{GRID_SIZE, SnapConfig, snap_to_grid};
pub use tools::{Editor, PointerEvent, Registration, ToolKind, ToolManager};
