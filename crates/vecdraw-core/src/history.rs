//! Snapshot-based undo/redo.
//!
//! Every entry is a whole-document serialization produced by the injected
//! [`CanvasCodec`]. A new snapshot clears the redo stack. Undo and redo
//! decode the candidate entry before touching either stack, so a corrupt
//! entry leaves the history exactly as it was.

use crate::canvas::Document;
use crate::codec::{CanvasCodec, CodecError, JsonCodec};
use std::fmt;
use thiserror::Error;

/// Which stack an entry came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HistoryStack {
    Undo,
    Redo,
}

impl fmt::Display for HistoryStack {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HistoryStack::Undo => f.write_str("undo"),
            HistoryStack::Redo => f.write_str("redo"),
        }
    }
}

/// History errors.
#[derive(Debug, Error)]
pub enum HistoryError {
    #[error("Failed to capture canvas state: {0}")]
    Capture(#[from] CodecError),
    #[error("Corrupt {stack} history entry: {source}")]
    CorruptEntry {
        stack: HistoryStack,
        #[source]
        source: CodecError,
    },
}

/// Undo and redo stacks of serialized documents.
pub struct History {
    undo: Vec<Vec<u8>>,
    redo: Vec<Vec<u8>>,
    codec: Box<dyn CanvasCodec>,
    /// Maximum undo entries (0 = unlimited).
    limit: usize,
}

impl fmt::Debug for History {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("History")
            .field("undo", &self.undo.len())
            .field("redo", &self.redo.len())
            .field("limit", &self.limit)
            .finish()
    }
}

impl Default for History {
    fn default() -> Self {
        Self::new(Box::new(JsonCodec))
    }
}

impl History {
    /// Create an unlimited history using `codec`.
    pub fn new(codec: Box<dyn CanvasCodec>) -> Self {
        Self {
            undo: Vec::new(),
            redo: Vec::new(),
            codec,
            limit: 0,
        }
    }

    /// Keep at most `limit` undo entries (0 = unlimited).
    pub fn with_limit(mut self, limit: usize) -> Self {
        self.limit = limit;
        self.trim();
        self
    }

    /// Push `document` onto the undo stack and clear the redo stack.
    pub fn snapshot(&mut self, document: &Document) -> Result<(), HistoryError> {
        let entry = self.codec.encode(document)?;
        self.undo.push(entry);
        self.redo.clear();
        self.trim();
        log::debug!("history snapshot ({} undo entries)", self.undo.len());
        Ok(())
    }

    /// Step back. `current` is pushed onto the redo stack and the most
    /// recent undo entry is returned; `Ok(None)` when there is nothing to undo.
    pub fn undo(&mut self, current: &Document) -> Result<Option<Document>, HistoryError> {
        let restored = Self::step(
            self.codec.as_ref(),
            &mut self.undo,
            &mut self.redo,
            current,
            HistoryStack::Undo,
        )?;
        Ok(restored)
    }

    /// Step forward, mirroring [`History::undo`].
    pub fn redo(&mut self, current: &Document) -> Result<Option<Document>, HistoryError> {
        let restored = Self::step(
            self.codec.as_ref(),
            &mut self.redo,
            &mut self.undo,
            current,
            HistoryStack::Redo,
        )?;
        self.trim();
        Ok(restored)
    }

    fn step(
        codec: &dyn CanvasCodec,
        source: &mut Vec<Vec<u8>>,
        target: &mut Vec<Vec<u8>>,
        current: &Document,
        stack: HistoryStack,
    ) -> Result<Option<Document>, HistoryError> {
        let Some(entry) = source.last() else {
            return Ok(None);
        };
        let restored = codec.read(entry).map_err(|source| {
            log::warn!("Corrupt {} history entry: {}", stack, source);
            HistoryError::CorruptEntry { stack, source }
        })?;
        let current = codec.encode(current)?;
        source.pop();
        target.push(current);
        log::debug!("history {} applied", stack);
        Ok(Some(restored))
    }

    /// Drop every entry on both stacks.
    pub fn clear(&mut self) {
        self.undo.clear();
        self.redo.clear();
    }

    pub fn can_undo(&self) -> bool {
        !self.undo.is_empty()
    }

    pub fn can_redo(&self) -> bool {
        !self.redo.is_empty()
    }

    pub fn undo_len(&self) -> usize {
        self.undo.len()
    }

    pub fn redo_len(&self) -> usize {
        self.redo.len()
    }

    fn trim(&mut self) {
        if self.limit > 0 && self.undo.len() > self.limit {
            let excess = self.undo.len() - self.limit;
            self.undo.drain(..excess);
        }
    }

    #[cfg(test)]
    pub(crate) fn push_raw_undo(&mut self, bytes: Vec<u8>) {
        self.undo.push(bytes);
    }
}
