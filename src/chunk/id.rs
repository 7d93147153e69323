//! Chunk tags and the header that precedes every chunk payload.

use std::fmt;

use zerocopy::{FromBytes, Immutable, IntoBytes, KnownLayout};

use super::value::{ByteOrder, FixedWidth};

/// Size of a chunk header on the wire: a 4-byte tag followed by a 32-bit size.
pub const HEADER_SIZE: usize = 8;

/// The 4-byte tag identifying a chunk kind (`"RIFF"`, `"fmt "`, `"SSND"`, ...).
///
/// The tag is opaque to the reader; only callers interpret it.
#[derive(
    Clone, Copy, PartialEq, Eq, Hash, Default, FromBytes, Immutable, IntoBytes, KnownLayout,
)]
#[repr(transparent)]
pub struct ChunkId([u8; 4]);

impl ChunkId {
    /// Outer chunk of a RIFF container.
    pub const RIFF: ChunkId = ChunkId(*b"RIFF");
    /// Nested list chunk of a RIFF container.
    pub const LIST: ChunkId = ChunkId(*b"LIST");
    /// Outer chunk of an IFF/AIFF container.
    pub const FORM: ChunkId = ChunkId(*b"FORM");

    /// Create a tag from its raw bytes.
    #[must_use]
    pub const fn new(bytes: [u8; 4]) -> Self {
        ChunkId(bytes)
    }

    /// The raw tag bytes.
    #[must_use]
    pub const fn bytes(&self) -> [u8; 4] {
        self.0
    }
}

impl From<[u8; 4]> for ChunkId {
    fn from(bytes: [u8; 4]) -> Self {
        ChunkId(bytes)
    }
}

impl From<ChunkId> for [u8; 4] {
    fn from(id: ChunkId) -> Self {
        id.0
    }
}

impl PartialEq<[u8; 4]> for ChunkId {
    fn eq(&self, other: &[u8; 4]) -> bool {
        &self.0 == other
    }
}

impl fmt::Display for ChunkId {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for &b in &self.0 {
            if b.is_ascii_graphic() || b == b' ' {
                write!(f, "{}", b as char)?;
            } else {
                write!(f, "\\x{b:02x}")?;
            }
        }
        Ok(())
    }
}

impl fmt::Debug for ChunkId {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "ChunkId(\"{self}\")")
    }
}

impl FixedWidth for ChunkId {
    type Bytes = [u8; 4];
    const ZEROED: [u8; 4] = [0; 4];

    fn from_le_bytes(bytes: [u8; 4]) -> Self {
        ChunkId(bytes)
    }

    fn from_be_bytes(bytes: [u8; 4]) -> Self {
        ChunkId(bytes)
    }
}

/// A parsed chunk header: the tag and the declared payload size.
///
/// Reading headers is the container parser's job; this type exists so that the
/// parser and [`ChunkReader::from_header`](super::ChunkReader::from_header) agree
/// on what a header is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChunkHeader {
    /// The chunk's tag.
    pub id: ChunkId,
    /// Number of payload bytes following the header, excluding any padding.
    pub size: u32,
}

impl ChunkHeader {
    /// Parse a header from its 8 wire bytes.
    ///
    /// RIFF stores the size little-endian, IFF/AIFF big-endian.
    #[must_use]
    pub fn parse(bytes: [u8; HEADER_SIZE], order: ByteOrder) -> Self {
        let [a, b, c, d, s0, s1, s2, s3] = bytes;
        Self {
            id: ChunkId([a, b, c, d]),
            size: order.decode::<u32>([s0, s1, s2, s3]),
        }
    }

    /// The payload size rounded up to the next 16-bit boundary.
    ///
    /// RIFF and IFF both pad odd-sized payloads with one byte; skipping that
    /// byte after [`ChunkReader::finish`](super::ChunkReader::finish) is up to
    /// the container parser.
    #[must_use]
    pub fn padded_size(&self) -> u64 {
        let size = u64::from(self.size);
        size + (size & 1)
    }
}
