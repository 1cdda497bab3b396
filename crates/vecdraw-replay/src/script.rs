//! Replay scripts: a JSON list of tool switches, pointer events and
//! undo/redo steps.
//!
//! ```json
//! { "steps": [
//!     { "tool": "rectangle" },
//!     { "down": [10, 10] },
//!     { "move": [60, 40] },
//!     { "down": [60, 40] },
//!     { "undo": null }
//! ] }
//! ```

use kurbo::Point;
use serde::Deserialize;
use std::path::Path;
use thiserror::Error;
use vecdraw_core::{Canvas, HistoryError, PointerEvent, ToolKind, ToolManager};

/// Replay errors.
#[derive(Debug, Error)]
pub enum ReplayError {
    #[error("Failed to read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("Invalid script: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("Step {index}: {source}")]
    History {
        index: usize,
        #[source]
        source: HistoryError,
    },
    #[error("Step {index}: unknown activation key '{key}'")]
    UnknownKey { index: usize, key: char },
}

/// One scripted action.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Step {
    Tool(ToolKind),
    Key(char),
    Down([f64; 2]),
    Move([f64; 2]),
    Up([f64; 2]),
    Undo,
    Redo,
}

/// A parsed replay script.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Script {
    pub steps: Vec<Step>,
}

impl Script {
    pub fn from_json(json: &str) -> Result<Self, ReplayError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, ReplayError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|source| ReplayError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_json(&json)
    }
}

fn point([x, y]: [f64; 2]) -> Point {
    Point::new(x, y)
}

/// Run every step of `script` against `canvas`.
pub fn replay(script: &Script, canvas: &mut Canvas) -> Result<(), ReplayError> {
    let mut tools = ToolManager::new();
    for (index, step) in script.steps.iter().enumerate() {
        log::debug!("step {}: {:?}", index, step);
        let result = match *step {
            Step::Tool(tool) => tools.set_tool(canvas, tool).map(|_| ()),
            Step::Key(key) => match tools.handle_key(canvas, key) {
                Ok(Some(_)) => Ok(()),
                Ok(None) => return Err(ReplayError::UnknownKey { index, key }),
                Err(err) => Err(err),
            },
            Step::Down(p) => tools.dispatch(canvas, PointerEvent::Down { position: point(p) }),
            Step::Move(p) => tools.dispatch(canvas, PointerEvent::Move { position: point(p) }),
            Step::Up(p) => tools.dispatch(canvas, PointerEvent::Up { position: point(p) }),
            Step::Undo => tools.undo(canvas).map(|undone| {
                if !undone {
                    log::info!("step {}: nothing to undo", index);
                }
            }),
            Step::Redo => tools.redo(canvas).map(|redone| {
                if !redone {
                    log::info!("step {}: nothing to redo", index);
                }
            }),
        };
        result.map_err(|source| ReplayError::History { index, source })?;
    }
    Ok(())
}
