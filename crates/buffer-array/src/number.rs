//! Fixed-width numeric encodings.
//!
//! [`Number`] ties each primitive to its byte width and its big- and
//! little-endian byte representation. The buffer's numeric operations are
//! written once against this trait and delegate to the byte primitives, so
//! every type shares the same bounds and zero-fill behavior.

/// Byte order of a multi-byte value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Endian {
    /// Most significant byte first.
    Big,
    /// Least significant byte first.
    Little,
}

/// A primitive that can be stored as a fixed number of bytes.
///
/// # Example
///
/// ```
/// use buffer_array::{Endian, Number};
///
/// assert_eq!(10i16.to_bytes(Endian::Big), [0x00, 0x0a]);
/// assert_eq!(10i16.to_bytes(Endian::Little), [0x0a, 0x00]);
/// assert_eq!(u32::from_bytes(&[0, 0, 1, 0], Endian::Big), 256);
/// ```
pub trait Number: Copy {
    /// Byte array holding the encoded value.
    type Bytes: AsRef<[u8]>;

    /// Encoded width in bytes.
    const WIDTH: usize;

    /// Encodes the value.
    fn to_bytes(self, endian: Endian) -> Self::Bytes;

    /// Decodes a value from exactly [`WIDTH`](Number::WIDTH) bytes.
    ///
    /// # Panics
    ///
    /// Panics if `bytes.len() != Self::WIDTH`.
    fn from_bytes(bytes: &[u8], endian: Endian) -> Self;
}

macro_rules! impl_number {
    ($($ty:ty => $width:literal),* $(,)?) => {
        $(
            impl Number for $ty {
                type Bytes = [u8; $width];

                const WIDTH: usize = $width;

                #[inline]
                fn to_bytes(self, endian: Endian) -> Self::Bytes {
                    match endian {
                        Endian::Big => self.to_be_bytes(),
                        Endian::Little => self.to_le_bytes(),
                    }
                }

                #[inline]
                fn from_bytes(bytes: &[u8], endian: Endian) -> Self {
                    let mut raw = [0u8; $width];
                    raw.copy_from_slice(bytes);
                    match endian {
                        Endian::Big => <$ty>::from_be_bytes(raw),
                        Endian::Little => <$ty>::from_le_bytes(raw),
                    }
                }
            }
        )*
    };
}

impl_number! {
    u8 => 1,
    i8 => 1,
    u16 => 2,
    i16 => 2,
    u32 => 4,
    i32 => 4,
    u64 => 8,
    i64 => 8,
    f32 => 4,
    f64 => 8,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_widths() {
        assert_eq!(<u8 as Number>::WIDTH, 1);
        assert_eq!(<i16 as Number>::WIDTH, 2);
        assert_eq!(<f32 as Number>::WIDTH, 4);
        assert_eq!(<i64 as Number>::WIDTH, 8);
        assert_eq!(<f64 as Number>::WIDTH, 8);
    }

    #[test]
    fn test_single_byte_ignores_endian() {
        assert_eq!((-2i8).to_bytes(Endian::Big), [0xfe]);
        assert_eq!((-2i8).to_bytes(Endian::Little), [0xfe]);
        assert_eq!(i8::from_bytes(&[0xfe], Endian::Little), -2);
    }

    #[test]
    fn test_u32_byte_order() {
        assert_eq!(0x01020304u32.to_bytes(Endian::Big), [1, 2, 3, 4]);
        assert_eq!(0x01020304u32.to_bytes(Endian::Little), [4, 3, 2, 1]);
        assert_eq!(u32::from_bytes(&[4, 3, 2, 1], Endian::Little), 0x01020304);
    }

    #[test]
    fn test_f64_big_endian() {
        let bytes = 1.5f64.to_bytes(Endian::Big);
        assert_eq!(bytes, [0x3f, 0xf8, 0, 0, 0, 0, 0, 0]);
        assert_eq!(f64::from_bytes(&bytes, Endian::Big), 1.5);
    }

    #[test]
    #[should_panic]
    fn test_from_bytes_wrong_length() {
        u16::from_bytes(&[1, 2, 3], Endian::Big);
    }
}
