//! Bounded reading of RIFF/IFF-style chunks.
//!
//! Chunked containers are a sequence of records, each a 4-byte tag, a 32-bit
//! payload size and then the payload itself:
//!
//! ```text
//! +------+------+---------------------+-----+------+------+-----
//! | tag  | size | payload (size bytes)| pad | tag  | size | ...
//! +------+------+---------------------+-----+------+------+-----
//! ```
//!
//! The container parser reads each header, wraps the shared source in a
//! [`ChunkReader`] and passes it to the decoder for that tag.  The decoder may
//! read as much or as little of the payload as it cares about; the reader
//! refuses to hand out bytes past the payload and [`ChunkReader::finish`]
//! discards the unread remainder, so the next header is always read from the
//! right place.  The optional pad byte after an odd-sized payload belongs to
//! the container parser (see [`ChunkHeader::padded_size`]).
//!
//! # Example
//!
//! ```
//! use riff_chunk::{ByteOrder, ChunkHeader, ChunkReader, HEADER_SIZE};
//!
//! let mut source: &[u8] = b"fmt \x04\x00\x00\x00\x01\x00\x02\x00data\x00\x00\x00\x00";
//!
//! let mut header = [0u8; HEADER_SIZE];
//! std::io::Read::read_exact(&mut source, &mut header).unwrap();
//! let header = ChunkHeader::parse(header, ByteOrder::Little);
//!
//! let mut chunk = ChunkReader::from_header(header, &mut source);
//! let format: u16 = chunk.read_le().unwrap();
//! assert_eq!(format, 1);
//! chunk.finish().unwrap(); // skips the channel count nobody read
//!
//! assert!(source.starts_with(b"data"));
//! ```

mod error;
mod id;
mod reader;
mod value;

pub use error::{ChunkError, Result};
pub use id::{ChunkHeader, ChunkId, HEADER_SIZE};
pub use reader::ChunkReader;
pub use value::{ByteOrder, FixedWidth};
