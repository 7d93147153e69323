//! Bounded readers for the chunks of RIFF/IFF-style binary containers.
//!
//! See the [`chunk`] module for an overview.

pub mod chunk;
mod util;

#[cfg(any(test, feature = "test"))]
pub mod test;

pub use chunk::{
    ByteOrder, ChunkError, ChunkHeader, ChunkId, ChunkReader, FixedWidth, Result, HEADER_SIZE,
};
