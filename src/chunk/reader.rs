//! Bounded reader over a single chunk's payload.

use std::io::{ErrorKind, Read};

use log::{debug, trace};
use zerocopy::{FromBytes, Immutable, KnownLayout};

use crate::util::read_filled;

use super::error::{ChunkError, Result};
use super::id::{ChunkHeader, ChunkId};
use super::value::{ByteOrder, FixedWidth};

/// Size of the scratch buffer used to discard skipped bytes.
const DISCARD_BUF_SIZE: usize = 8192;

/// A reader limited to one chunk's declared payload.
///
/// The container parser reads a chunk header from its source, wraps the source
/// in a `ChunkReader` and hands it to whatever decodes that kind of chunk.  The
/// reader counts every byte it delivers and, once [`finish`] has run, the
/// source is positioned exactly at the end of the payload no matter how much
/// of it the decoder looked at.  Any padding byte after an odd-sized payload is
/// left for the container parser.
///
/// Pass the source as `&mut R` to keep ownership of it:
///
/// ```
/// use riff_chunk::{ChunkId, ChunkReader};
///
/// let mut source: &[u8] = b"hello worldNEXT";
/// let mut chunk = ChunkReader::new(ChunkId::new(*b"text"), 11, &mut source);
/// assert_eq!(chunk.read_u8().unwrap(), b'h');
/// chunk.finish().unwrap();
/// assert_eq!(source, b"NEXT");
/// ```
///
/// # Position accounting
///
/// [`position`] only ever grows and never exceeds [`size`] through the
/// bounded operations.  How a failure affects it depends on the operation:
///
/// - [`read_bytes`] and [`skip`] count whatever the source actually produced,
///   even when the outcome is short.
/// - Fixed-width reads ([`read_le`], [`read_be`], [`read_u8`],
///   [`read_record`]) are all-or-nothing: on failure the position is left
///   where it was, even if the source gave up some bytes before ending.
///
/// [`finish`]: ChunkReader::finish
/// [`position`]: ChunkReader::position
/// [`size`]: ChunkReader::size
/// [`read_bytes`]: ChunkReader::read_bytes
/// [`skip`]: ChunkReader::skip
/// [`read_le`]: ChunkReader::read_le
/// [`read_be`]: ChunkReader::read_be
/// [`read_u8`]: ChunkReader::read_u8
/// [`read_record`]: ChunkReader::read_record
#[derive(Debug)]
pub struct ChunkReader<R> {
    id: ChunkId,
    size: u64,
    source: Option<R>,
    pos: u64,
}

impl<R: Read> ChunkReader<R> {
    /// Create a reader for a chunk of `size` payload bytes starting at the
    /// current position of `source`.
    pub fn new(id: ChunkId, size: u64, source: R) -> Self {
        Self {
            id,
            size,
            source: Some(source),
            pos: 0,
        }
    }

    /// Create a reader from a header the container parser just read.
    pub fn from_header(header: ChunkHeader, source: R) -> Self {
        Self::new(header.id, u64::from(header.size), source)
    }

    /// Create a reader with no source.
    ///
    /// Such a reader is permanently exhausted.  Reads fail with
    /// [`ChunkError::UnavailableSource`], except [`read_u8`] which reports
    /// [`ChunkError::EndOfData`].
    ///
    /// [`read_u8`]: ChunkReader::read_u8
    pub fn detached(id: ChunkId, size: u64) -> Self {
        Self {
            id,
            size,
            source: None,
            pos: 0,
        }
    }

    /// The chunk's tag.
    #[must_use]
    pub fn id(&self) -> ChunkId {
        self.id
    }

    /// The declared payload size.
    #[must_use]
    pub fn size(&self) -> u64 {
        self.size
    }

    /// Number of payload bytes consumed so far.
    #[must_use]
    pub fn position(&self) -> u64 {
        self.pos
    }

    /// Number of payload bytes not yet consumed.
    #[must_use]
    pub fn remaining(&self) -> u64 {
        self.size.saturating_sub(self.pos)
    }

    /// Whether nothing more can be read from this chunk.
    ///
    /// True when the payload has been consumed, and always true for a
    /// reader without a source.  A zero-sized chunk is exhausted from the
    /// start.
    #[must_use]
    pub fn is_exhausted(&self) -> bool {
        self.source.is_none() || self.pos >= self.size
    }

    /// Release the underlying source, if there is one.
    pub fn into_inner(self) -> Option<R> {
        self.source
    }

    /// Read up to `buf.len()` bytes with a single read call on the source.
    ///
    /// The request is cut down to the bytes left in the chunk, so this never
    /// returns bytes from whatever follows the payload.  Like
    /// [`Read::read`], fewer bytes than asked for may be returned; call
    /// again to fill the rest.
    ///
    /// Fails with [`ChunkError::EndOfData`] once the chunk is exhausted,
    /// without touching the source.
    pub fn read_bytes(&mut self, buf: &mut [u8]) -> Result<usize> {
        let remaining = self.remaining();
        let id = self.id;
        let source = self.source.as_mut().ok_or(ChunkError::UnavailableSource)?;
        if remaining == 0 {
            return Err(ChunkError::EndOfData { id });
        }
        if buf.is_empty() {
            return Ok(0);
        }

        let limit = usize::try_from(remaining).map_or(buf.len(), |r| r.min(buf.len()));
        let n = source.read(&mut buf[..limit])?;
        self.pos += n as u64;
        Ok(n)
    }

    /// Read a little-endian value.
    pub fn read_le<T: FixedWidth>(&mut self) -> Result<T> {
        self.read_value(ByteOrder::Little)
    }

    /// Read a big-endian value.
    pub fn read_be<T: FixedWidth>(&mut self) -> Result<T> {
        self.read_value(ByteOrder::Big)
    }

    /// Read a single byte.
    ///
    /// Unlike the wider reads, an exhausted chunk takes precedence over a
    /// missing source: a detached reader reports [`ChunkError::EndOfData`].
    pub fn read_u8(&mut self) -> Result<u8> {
        if self.is_exhausted() {
            return Err(ChunkError::EndOfData { id: self.id });
        }
        self.read_value(ByteOrder::Little)
    }

    /// Read a value stored in the given byte order.
    ///
    /// Exactly `T::width()` bytes are taken from the source.  If the source
    /// runs dry first the read fails with [`ChunkError::ShortSource`] and
    /// the position is not advanced.  A value wider than the rest of the
    /// chunk fails with [`ChunkError::Overrun`] before the source is touched.
    pub fn read_value<T: FixedWidth>(&mut self, order: ByteOrder) -> Result<T> {
        let mut bytes = T::ZEROED;
        self.fill(bytes.as_mut())?;
        Ok(order.decode(bytes))
    }

    /// Read a fixed-layout record.
    ///
    /// The record's byte order is part of its field types, as with
    /// `zerocopy::little_endian::U32`.  The position rules are the same as
    /// for [`read_value`](ChunkReader::read_value).
    pub fn read_record<T: FromBytes + KnownLayout + Immutable>(&mut self) -> Result<T> {
        let mut bytes = vec![0u8; size_of::<T>()];
        self.fill(&mut bytes)?;
        T::read_from_bytes(&bytes).map_err(|e| ChunkError::Decode {
            type_name: std::any::type_name::<T>(),
            reason: e.to_string(),
        })
    }

    /// Discard the next `n` bytes of the source.
    ///
    /// The position advances by the number of bytes actually discarded,
    /// including when the source ends early and this fails with
    /// [`ChunkError::ShortSource`].
    ///
    /// This does not check `n` against the chunk boundary.  Use
    /// [`finish`](ChunkReader::finish) to skip the rest of the chunk.
    pub fn skip(&mut self, n: u64) -> Result<()> {
        if n == 0 {
            return Ok(());
        }
        let source = self.source.as_mut().ok_or(ChunkError::UnavailableSource)?;

        trace!("skipping {n} bytes of chunk {} at {}", self.id, self.pos);
        let mut buf = [0u8; DISCARD_BUF_SIZE];
        let mut discarded = 0u64;
        while discarded < n {
            let want = (n - discarded).min(DISCARD_BUF_SIZE as u64) as usize;
            match source.read(&mut buf[..want]) {
                Ok(0) => break,
                Ok(got) => {
                    discarded += got as u64;
                    self.pos += got as u64;
                }
                Err(e) if e.kind() == ErrorKind::Interrupted => continue,
                Err(e) => return Err(e.into()),
            }
        }

        if discarded < n {
            return Err(ChunkError::ShortSource {
                requested: n,
                obtained: discarded,
            });
        }
        Ok(())
    }

    /// Skip whatever is left of the chunk so the source is positioned at the
    /// end of its payload.
    ///
    /// Every chunk must be finished before the next header is read from the
    /// same source.  Finishing an exhausted chunk does nothing, so calling
    /// this twice is harmless.
    pub fn finish(&mut self) -> Result<()> {
        if self.is_exhausted() {
            return Ok(());
        }
        let remainder = self.remaining();
        debug!(
            "chunk {}: discarding {remainder} unread of {} bytes",
            self.id, self.size
        );
        self.skip(remainder)
    }

    /// Fill `buf` completely or fail without moving the position.
    fn fill(&mut self, buf: &mut [u8]) -> Result<()> {
        let remaining = self.remaining();
        let id = self.id;
        let source = self.source.as_mut().ok_or(ChunkError::UnavailableSource)?;
        if remaining == 0 {
            return Err(ChunkError::EndOfData { id });
        }

        let requested = buf.len() as u64;
        if requested > remaining {
            return Err(ChunkError::Overrun {
                requested,
                remaining,
            });
        }

        let obtained = read_filled(source, buf)?;
        if obtained < buf.len() {
            return Err(ChunkError::ShortSource {
                requested,
                obtained: obtained as u64,
            });
        }
        self.pos += requested;
        Ok(())
    }
}

impl<R: Read> Read for ChunkReader<R> {
    /// Reads stop with `Ok(0)` at the end of the chunk's payload.
    fn read(&mut self, buf: &mut [u8]) -> std::io::Result<usize> {
        match self.read_bytes(buf) {
            Err(ChunkError::EndOfData { .. }) => Ok(0),
            other => other.map_err(Into::into),
        }
    }
}
