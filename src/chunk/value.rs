//! Fixed-width values and the byte orders they are stored in.

/// Byte order of multi-byte values in a chunk payload.
///
/// RIFF containers (WAVE, AVI, WebP) are little-endian; IFF containers
/// (AIFF, 8SVX, ILBM) are big-endian.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ByteOrder {
    /// Least significant byte first.
    Little,
    /// Most significant byte first.
    Big,
}

impl ByteOrder {
    /// Decode `bytes` as a `T` in this byte order.
    #[must_use]
    pub fn decode<T: FixedWidth>(self, bytes: T::Bytes) -> T {
        match self {
            ByteOrder::Little => T::from_le_bytes(bytes),
            ByteOrder::Big => T::from_be_bytes(bytes),
        }
    }
}

/// A value stored as exactly `size_of::<Self::Bytes>()` bytes in a chunk.
///
/// Implemented for the primitive integers, floats, byte arrays and
/// [`ChunkId`](super::ChunkId).  Formats with their own fixed-width encodings
/// (the 80-bit extended float of AIFF's `COMM`, say) can implement it too.
pub trait FixedWidth: Sized {
    /// The raw representation, normally `[u8; N]`.
    type Bytes: AsMut<[u8]>;

    /// An all-zero `Bytes` to read into.
    const ZEROED: Self::Bytes;

    /// Decode from little-endian bytes.
    fn from_le_bytes(bytes: Self::Bytes) -> Self;

    /// Decode from big-endian bytes.
    fn from_be_bytes(bytes: Self::Bytes) -> Self;

    /// Number of bytes a value occupies.
    fn width() -> usize {
        let mut zeroed = Self::ZEROED;
        zeroed.as_mut().len()
    }
}

macro_rules! impl_fixed_width {
    ($($ty:ty),* $(,)?) => {
        $(
            impl FixedWidth for $ty {
                type Bytes = [u8; std::mem::size_of::<$ty>()];
                const ZEROED: Self::Bytes = [0; std::mem::size_of::<$ty>()];

                fn from_le_bytes(bytes: Self::Bytes) -> Self {
                    <$ty>::from_le_bytes(bytes)
                }

                fn from_be_bytes(bytes: Self::Bytes) -> Self {
                    <$ty>::from_be_bytes(bytes)
                }
            }
        )*
    };
}

impl_fixed_width!(u8, u16, u32, u64, u128, i8, i16, i32, i64, i128, f32, f64);

// Byte strings have no byte order.
impl<const N: usize> FixedWidth for [u8; N] {
    type Bytes = [u8; N];
    const ZEROED: [u8; N] = [0; N];

    fn from_le_bytes(bytes: [u8; N]) -> Self {
        bytes
    }

    fn from_be_bytes(bytes: [u8; N]) -> Self {
        bytes
    }
}

#[cfg(test)]
mod tests {
    use similar_asserts::assert_eq;

    use super::*;

    #[test]
    fn test_decode_orders() {
        let bytes = [0x01, 0x02];
        assert_eq!(ByteOrder::Little.decode::<u16>(bytes), 0x0201);
        assert_eq!(ByteOrder::Big.decode::<u16>(bytes), 0x0102);

        let bytes = 1.5f32.to_be_bytes();
        assert_eq!(ByteOrder::Big.decode::<f32>(bytes), 1.5);

        assert_eq!(ByteOrder::Big.decode::<i8>([0xff]), -1);
        assert_eq!(ByteOrder::Little.decode::<[u8; 3]>(*b"abc"), *b"abc");
    }

    #[test]
    fn test_width() {
        assert_eq!(<u8 as FixedWidth>::width(), 1);
        assert_eq!(<i32 as FixedWidth>::width(), 4);
        assert_eq!(<f64 as FixedWidth>::width(), 8);
        assert_eq!(<u128 as FixedWidth>::width(), 16);
        assert_eq!(<[u8; 10] as FixedWidth>::width(), 10);
    }
}
