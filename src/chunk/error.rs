//! Error types for bounded chunk reads.

use thiserror::Error;

use super::id::ChunkId;

/// Errors that can occur while reading a chunk's payload.
///
/// Every variant is returned to the immediate caller; the reader never retries
/// or suppresses a failure.  Whether `position()` moved on failure depends on
/// the operation, see [`ChunkReader`](super::ChunkReader).
#[derive(Debug, Error)]
pub enum ChunkError {
    /// The reader has no underlying source.
    #[error("chunk has no underlying source")]
    UnavailableSource,

    /// The chunk's declared payload has been fully consumed.
    #[error("end of data in chunk {id}")]
    EndOfData {
        /// Tag of the exhausted chunk.
        id: ChunkId,
    },

    /// The source ended before supplying the requested bytes.
    #[error("source ended early: requested {requested} bytes, obtained {obtained}")]
    ShortSource {
        /// Number of bytes asked for.
        requested: u64,
        /// Number of bytes actually produced by the source.
        obtained: u64,
    },

    /// A fixed-width read is wider than what is left of the chunk.
    #[error("read of {requested} bytes overruns chunk ({remaining} bytes remaining)")]
    Overrun {
        /// Width of the attempted read.
        requested: u64,
        /// Bytes left in the chunk's declared payload.
        remaining: u64,
    },

    /// A fixed-layout value rejected its bytes.
    #[error("cannot decode {type_name}: {reason}")]
    Decode {
        /// Name of the type being decoded.
        type_name: &'static str,
        /// Description of the failure.
        reason: String,
    },

    /// I/O error from the underlying source.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl ChunkError {
    /// Returns true for [`ChunkError::EndOfData`].
    #[must_use]
    pub fn is_end_of_data(&self) -> bool {
        matches!(self, ChunkError::EndOfData { .. })
    }
}

impl From<ChunkError> for std::io::Error {
    fn from(err: ChunkError) -> Self {
        use std::io::ErrorKind;

        let kind = match err {
            ChunkError::Io(inner) => return inner,
            ChunkError::UnavailableSource => ErrorKind::NotConnected,
            ChunkError::EndOfData { .. } | ChunkError::ShortSource { .. } => {
                ErrorKind::UnexpectedEof
            }
            ChunkError::Overrun { .. } | ChunkError::Decode { .. } => ErrorKind::InvalidData,
        };
        std::io::Error::new(kind, err)
    }
}

/// Result type for chunk read operations.
pub type Result<T> = std::result::Result<T, ChunkError>;
