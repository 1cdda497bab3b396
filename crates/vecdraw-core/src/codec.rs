//! Whole-canvas serialization used by the history stacks.

use crate::canvas::Document;
use std::io::Write;
use thiserror::Error;

/// Codec errors.
#[derive(Debug, Error)]
pub enum CodecError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Result type for codec operations.
pub type CodecResult<T> = Result<T, CodecError>;

/// Pluggable whole-document serializer.
pub trait CanvasCodec: Send + Sync {
    /// Write `document` to `out`.
    fn write(&self, out: &mut dyn Write, document: &Document) -> CodecResult<()>;

    /// Read a document back from bytes produced by [`CanvasCodec::write`].
    fn read(&self, bytes: &[u8]) -> CodecResult<Document>;

    /// Serialize into a fresh buffer.
    fn encode(&self, document: &Document) -> CodecResult<Vec<u8>> {
        let mut buf = Vec::new();
        self.write(&mut buf, document)?;
        Ok(buf)
    }
}

/// Compact JSON codec.
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonCodec;

impl CanvasCodec for JsonCodec {
    fn write(&self, out: &mut dyn Write, document: &Document) -> CodecResult<()> {
        serde_json::to_writer(&mut *out, document)?;
        Ok(())
    }

    fn read(&self, bytes: &[u8]) -> CodecResult<Document> {
        Ok(serde_json::from_slice(bytes)?)
    }
}
