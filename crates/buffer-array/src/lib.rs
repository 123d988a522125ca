//! Fixed-capacity byte buffer with an internal cursor.
//!
//! A [`BufferArray`] owns a byte block of fixed length and a cursor marking
//! how many bytes at the front are in use. Bytes and fixed-width numbers can
//! be appended at the cursor, removed from the cursor end, removed from the
//! front or inserted at the front. The buffer never grows: an operation that
//! does not fit is rejected without touching the buffer.
//!
//! # Overview
//!
//! - [`BufferArray`] - The buffer and its byte-level `push`/`pop`/`shift`/`unshift`
//! - [`Number`] / [`Endian`] - Fixed-width encodings behind the numeric methods
//! - [`Encoding`] - String encodings accepted by `push_encoded`/`unshift_encoded`
//! - [`BufferError`] - Invalid-argument failures
//!
//! Capacity problems are reported through the return value (`false` or
//! `None`). Only malformed input, such as bad hex, is a [`BufferError`].
//!
//! Note that `read` and `read_*` are destructive: they consume from the
//! front exactly like `shift`. Use `peek` and `peek_*` to inspect the front
//! without consuming.
//!
//! # Example
//!
//! ```
//! use buffer_array::BufferArray;
//!
//! let mut frame = BufferArray::new(8);
//! assert!(frame.push_u16_be(0xCAFE));
//! assert!(frame.push_encoded("0102", "hex").unwrap());
//! assert!(frame.unshift_u8(4));
//!
//! assert_eq!(frame.read_u8(), Some(4));
//! assert_eq!(frame.read_u16_be(), Some(0xCAFE));
//! assert_eq!(frame.read(2), Some(vec![0x01, 0x02]));
//! assert_eq!(frame.read_u8(), None);
//! ```

mod buffer_array;
mod encoding;
mod error;
mod number;
mod numeric;

pub use buffer_array::BufferArray;
pub use encoding::Encoding;
pub use error::{BufferError, Result};
pub use number::{Endian, Number};
