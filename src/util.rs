use std::io::{ErrorKind, Read, Result};

/// Fills `buf` from `reader`, possibly performing multiple reads to do so (and also retrying if
/// required to deal with EINTR).
///
/// Unlike the standard Read::read_exact() method, an early EOF is not an error: the number of
/// bytes actually placed into the buffer is returned, so the caller can tell a complete read
/// (`buf.len()`), a clean EOF (`0`) and a short read (anything in between) apart and decide for
/// itself what each one means.
///
/// Errors from the underlying Read implementation are returned directly.  Bytes obtained before
/// such an error are lost along with the count.
pub(crate) fn read_filled(reader: &mut impl Read, buf: &mut [u8]) -> Result<usize> {
    let mut filled = 0;

    while filled < buf.len() {
        match reader.read(&mut buf[filled..]) {
            Ok(0) => break,
            Ok(n) => filled += n,
            Err(e) if e.kind() == ErrorKind::Interrupted => continue,
            Err(e) => return Err(e),
        }
    }

    Ok(filled)
}

#[cfg(test)]
mod test {
    use similar_asserts::assert_eq;

    use super::*;

    #[test]
    fn test_read_filled() {
        let mut buf = [0u8; 9];

        // empty returns zero immediately
        let mut r = b"" as &[u8];
        assert_eq!(read_filled(&mut r, &mut buf).unwrap(), 0);
        assert_eq!(read_filled(&mut r, &mut buf).unwrap(), 0); // repeatable

        // read one full buffer and then a short one
        r = b"twelve bytes";
        assert_eq!(read_filled(&mut r, &mut buf).unwrap(), 9);
        assert_eq!(&buf, b"twelve by");
        assert_eq!(read_filled(&mut r, &mut buf).unwrap(), 3);
        assert_eq!(&buf[..3], b"tes");
        assert_eq!(read_filled(&mut r, &mut buf).unwrap(), 0);
    }

    #[test]
    fn test_read_filled_retries_interrupted() {
        struct FlakyReader {
            data: &'static [u8],
            interrupt: bool,
        }
        impl Read for FlakyReader {
            fn read(&mut self, buffer: &mut [u8]) -> Result<usize> {
                self.interrupt = !self.interrupt;
                if self.interrupt {
                    return Err(ErrorKind::Interrupted.into());
                }
                // hand out one byte at a time
                let n = buffer.len().min(self.data.len()).min(1);
                buffer[..n].copy_from_slice(&self.data[..n]);
                self.data = &self.data[n..];
                Ok(n)
            }
        }

        let mut reader = FlakyReader {
            data: b"abcd",
            interrupt: false,
        };
        let mut buf = [0u8; 4];
        assert_eq!(read_filled(&mut reader, &mut buf).unwrap(), 4);
        assert_eq!(&buf, b"abcd");
    }

    #[test]
    fn test_read_filled_broken_reader() {
        struct BrokenReader;
        impl Read for BrokenReader {
            fn read(&mut self, _buffer: &mut [u8]) -> Result<usize> {
                Err(ErrorKind::ConnectionReset.into())
            }
        }

        assert_eq!(
            read_filled(&mut BrokenReader, &mut [0; 9])
                .unwrap_err()
                .kind(),
            ErrorKind::ConnectionReset
        );
    }
}
