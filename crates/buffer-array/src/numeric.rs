//! Named per-type numeric methods.
//!
//! Each method is a thin wrapper over the generic `*_number` operations of
//! [`BufferArray`], e.g. `push_i16_be`, `pop_u32_le`, `shift_f64_be`,
//! `unshift_u8`. Single-byte types carry no endianness suffix.
//!
//! `read_*` methods consume from the front exactly like `shift_*`; `peek_*`
//! methods decode the front value without consuming it.

use crate::number::Endian;
use crate::BufferArray;

macro_rules! impl_numeric_ops {
    (@ops $ty:ident, $name:ident, $endian:expr, $order:literal) => {
        paste::paste! {
            impl BufferArray {
                #[doc = "Appends " $order " `" $ty "` at the cursor."]
                #[doc = ""]
                #[doc = "Returns `false` and leaves the buffer untouched if it does not fit."]
                #[inline]
                #[must_use = "a rejected push leaves the buffer unchanged"]
                pub fn [<push_ $name>](&mut self, value: $ty) -> bool {
                    self.push_number(value, $endian)
                }

                #[doc = "Removes " $order " `" $ty "` from the cursor end."]
                #[doc = ""]
                #[doc = "Returns `None` if too few bytes are in use."]
                #[inline]
                pub fn [<pop_ $name>](&mut self) -> Option<$ty> {
                    self.pop_number($endian)
                }

                #[doc = "Removes " $order " `" $ty "` from the front."]
                #[doc = ""]
                #[doc = "Returns `None` if too few bytes are in use."]
                #[inline]
                pub fn [<shift_ $name>](&mut self) -> Option<$ty> {
                    self.shift_number($endian)
                }

                #[doc = "Inserts " $order " `" $ty "` at the front."]
                #[doc = ""]
                #[doc = "Returns `false` and leaves the buffer untouched if it does not fit."]
                #[inline]
                #[must_use = "a rejected unshift leaves the buffer unchanged"]
                pub fn [<unshift_ $name>](&mut self, value: $ty) -> bool {
                    self.unshift_number(value, $endian)
                }

                #[doc = "Consumes " $order " `" $ty "` from the front. Same as `shift_" $name "`."]
                #[inline]
                pub fn [<read_ $name>](&mut self) -> Option<$ty> {
                    self.read_number($endian)
                }

                #[doc = "Decodes " $order " `" $ty "` at the front without consuming it."]
                #[inline]
                pub fn [<peek_ $name>](&self) -> Option<$ty> {
                    self.peek_number($endian)
                }
            }
        }
    };
    (single: $($ty:ident),* $(,)?) => {
        $(
            impl_numeric_ops!(@ops $ty, $ty, Endian::Big, "a");
        )*
    };
    (multi: $($ty:ident),* $(,)?) => {
        $(
            paste::paste! {
                impl_numeric_ops!(@ops $ty, [<$ty _be>], Endian::Big, "a big-endian");
                impl_numeric_ops!(@ops $ty, [<$ty _le>], Endian::Little, "a little-endian");
            }
        )*
    };
}

impl_numeric_ops!(single: u8, i8);
impl_numeric_ops!(multi: u16, i16, u32, i32, u64, i64, f32, f64);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_i16_be() {
        let mut buf = BufferArray::new(3);
        assert!(buf.push_i16_be(10));
        assert_eq!(&buf.as_bytes()[..2], &[0x00, 0x0a]);
        assert_eq!(buf.seek(), 2);
        assert!(!buf.push_i16_be(10));
        assert_eq!(buf.seek(), 2);
    }

    #[test]
    fn test_pop_i16_be() {
        let mut buf = BufferArray::new(3);
        assert!(buf.push_i16_be(10));
        assert_eq!(buf.pop_i16_be(), Some(10));
        assert_eq!(buf.seek(), 0);
        assert_eq!(buf.pop_i16_be(), None);
        assert_eq!(buf.seek(), 0);
    }

    #[test]
    fn test_zero_is_distinct_from_absent() {
        let mut buf = BufferArray::new(4);
        assert!(buf.push_u32_le(0));
        assert_eq!(buf.pop_u32_le(), Some(0));
        assert_eq!(buf.pop_u32_le(), None);
    }

    #[test]
    fn test_unshift_i16_be() {
        let mut buf = BufferArray::new(5);
        assert!(buf.push_i16_be(10));
        assert!(buf.unshift_i16_be(125));
        assert_eq!(buf.seek(), 4);
        assert!(!buf.unshift_i16_be(125));
        assert_eq!(buf.seek(), 4);
        assert_eq!(buf.pop_i16_be(), Some(10));
        assert_eq!(buf.pop_i16_be(), Some(125));
    }

    #[test]
    fn test_shift_and_read() {
        let mut buf = BufferArray::new(5);
        assert!(buf.push_i16_be(10));
        assert!(buf.push_i16_be(114));
        assert_eq!(buf.shift_i16_be(), Some(10));
        assert_eq!(buf.seek(), 2);
        assert_eq!(buf.shift_i32_be(), None);
        assert_eq!(buf.read_i32_be(), None);
        assert_eq!(buf.seek(), 2);
        assert_eq!(buf.read_i16_be(), Some(114));
        assert_eq!(buf.seek(), 0);
    }

    #[test]
    fn test_little_endian_layout() {
        let mut buf = BufferArray::new(8);
        assert!(buf.push_u16_le(0x0102));
        assert!(buf.push_i32_le(-2));
        assert_eq!(buf.used_bytes(), &[0x02, 0x01, 0xfe, 0xff, 0xff, 0xff]);
        assert_eq!(buf.peek_u16_le(), Some(0x0102));
        assert_eq!(buf.peek_u16_be(), Some(0x0201));
        assert_eq!(buf.seek(), 6);
    }

    #[test]
    fn test_single_byte() {
        let mut buf = BufferArray::new(2);
        assert!(buf.push_u8(0xff));
        assert!(buf.unshift_i8(-128));
        assert!(!buf.push_u8(1));
        assert_eq!(buf.used_bytes(), &[0x80, 0xff]);
        assert_eq!(buf.read_i8(), Some(-128));
        assert_eq!(buf.pop_u8(), Some(0xff));
        assert_eq!(buf.peek_u8(), None);
    }

    #[test]
    fn test_floats() {
        let mut buf = BufferArray::new(12);
        assert!(buf.push_f32_be(1.5));
        assert!(buf.push_f64_le(-0.1));
        assert_eq!(&buf.as_bytes()[..4], &[0x3f, 0xc0, 0x00, 0x00]);
        assert_eq!(buf.pop_f64_le(), Some(-0.1));
        assert_eq!(buf.shift_f32_be(), Some(1.5));
    }

    #[test]
    fn test_sixty_four_bit() {
        let mut buf = BufferArray::new(16);
        assert!(buf.push_u64_be(u64::MAX));
        assert!(buf.unshift_i64_le(i64::MIN));
        assert_eq!(buf.shift_i64_le(), Some(i64::MIN));
        assert_eq!(buf.shift_u64_be(), Some(u64::MAX));
        assert_eq!(buf.as_bytes(), &[0; 16]);
    }
}
