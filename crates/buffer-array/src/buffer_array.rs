//! Fixed-capacity byte buffer with a cursor.

use std::fmt;

use tracing::{debug, trace};

use crate::encoding::Encoding;
use crate::error::Result;
use crate::number::{Endian, Number};

/// A fixed-capacity byte buffer split by a cursor into a used front region
/// `[0, seek())` and a free tail `[seek(), len())`.
///
/// Bytes are appended at the cursor ([`push`](Self::push)), removed from the
/// cursor end ([`pop`](Self::pop)), removed from the front
/// ([`shift`](Self::shift)) or inserted at the front
/// ([`unshift`](Self::unshift)). An operation that does not fit is rejected
/// as a whole: it returns `false` or `None` and leaves the buffer untouched.
/// Removals zero-fill the bytes they vacate.
///
/// # Example
///
/// ```
/// use buffer_array::BufferArray;
///
/// let mut buf = BufferArray::new(4);
/// assert!(buf.push(&[13, 17]));
/// assert!(buf.push(&[23, 12]));
/// assert!(!buf.push(&[33, 7]));
/// assert_eq!(buf.seek(), 4);
///
/// assert_eq!(buf.pop(3), Some(vec![17, 23, 12]));
/// assert_eq!(buf.as_bytes(), &[13, 0, 0, 0]);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct BufferArray {
    storage: Box<[u8]>,
    cursor: usize,
}

impl BufferArray {
    /// Creates a zero-filled buffer with the given capacity and the cursor at 0.
    pub fn new(capacity: usize) -> Self {
        Self {
            storage: vec![0; capacity].into_boxed_slice(),
            cursor: 0,
        }
    }

    /// Creates a buffer holding a copy of `bytes`, with every byte in use.
    pub fn from_slice(bytes: &[u8]) -> Self {
        Self::from(bytes.to_vec())
    }

    /// Total capacity in bytes. Never changes.
    #[inline]
    pub fn len(&self) -> usize {
        self.storage.len()
    }

    /// Returns `true` if the capacity is zero.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.storage.is_empty()
    }

    /// Returns the cursor position, which is also the number of used bytes.
    #[inline]
    pub fn seek(&self) -> usize {
        self.cursor
    }

    /// Moves the cursor without touching any byte.
    ///
    /// Moving the cursor back leaves the bytes past it in place, so a later
    /// [`push`](Self::push) overwrites them.
    ///
    /// # Panics
    ///
    /// Panics if `position > self.len()`.
    #[inline]
    pub fn set_seek(&mut self, position: usize) {
        assert!(
            position <= self.storage.len(),
            "seek position {} out of bounds for capacity {}",
            position,
            self.storage.len()
        );
        self.cursor = position;
    }

    /// Number of used bytes. Same as [`seek`](Self::seek).
    #[inline]
    pub fn used(&self) -> usize {
        self.cursor
    }

    /// Number of free bytes after the cursor.
    #[inline]
    pub fn remaining(&self) -> usize {
        self.storage.len() - self.cursor
    }

    /// Returns `true` if no free bytes remain.
    #[inline]
    pub fn is_full(&self) -> bool {
        self.cursor == self.storage.len()
    }

    /// Zeroes every byte and resets the cursor to 0.
    pub fn clear(&mut self) {
        self.storage.fill(0);
        self.cursor = 0;
    }

    /// The whole storage, used and free regions alike.
    #[inline]
    pub fn as_bytes(&self) -> &[u8] {
        &self.storage
    }

    /// The used region `[0, seek())`.
    #[inline]
    pub fn used_bytes(&self) -> &[u8] {
        &self.storage[..self.cursor]
    }

    /// Copies the whole storage into a vector.
    pub fn to_vec(&self) -> Vec<u8> {
        self.storage.to_vec()
    }

    /// Consumes the buffer, returning its whole storage.
    pub fn into_bytes(self) -> Vec<u8> {
        self.storage.into_vec()
    }

    /// Writes `data` at the cursor and advances the cursor past it.
    ///
    /// Returns `false` without writing anything if `data` does not fit in the
    /// free region.
    #[must_use = "a rejected push leaves the buffer unchanged"]
    pub fn push(&mut self, data: &[u8]) -> bool {
        if data.len() > self.remaining() {
            self.reject("push", data.len());
            return false;
        }
        let end = self.cursor + data.len();
        self.storage[self.cursor..end].copy_from_slice(data);
        self.set_seek(end);
        true
    }

    /// Removes the last `n` used bytes and returns them in order.
    ///
    /// The vacated bytes are zeroed. Returns `None` without changes if fewer
    /// than `n` bytes are in use.
    pub fn pop(&mut self, n: usize) -> Option<Vec<u8>> {
        if n > self.cursor {
            self.reject("pop", n);
            return None;
        }
        let start = self.cursor - n;
        let out = self.storage[start..self.cursor].to_vec();
        self.storage[start..self.cursor].fill(0);
        self.set_seek(start);
        Some(out)
    }

    /// Removes the first `n` used bytes and returns them in order.
    ///
    /// The remaining used bytes move to the front and the vacated tail is
    /// zeroed. Returns `None` without changes if fewer than `n` bytes are in
    /// use.
    pub fn shift(&mut self, n: usize) -> Option<Vec<u8>> {
        if n > self.cursor {
            self.reject("shift", n);
            return None;
        }
        let end = self.cursor;
        let out = self.storage[..n].to_vec();
        self.storage.copy_within(n..end, 0);
        self.storage[end - n..end].fill(0);
        self.set_seek(end - n);
        Some(out)
    }

    /// Inserts `data` at the front, moving the used bytes right to make room.
    ///
    /// Returns `false` without changes if the used bytes plus `data` exceed
    /// the capacity.
    #[must_use = "a rejected unshift leaves the buffer unchanged"]
    pub fn unshift(&mut self, data: &[u8]) -> bool {
        if data.len() > self.remaining() {
            self.reject("unshift", data.len());
            return false;
        }
        let k = data.len();
        let end = self.cursor;
        self.storage.copy_within(..end, k);
        self.storage[..k].copy_from_slice(data);
        self.set_seek(end + k);
        true
    }

    /// Consumes `n` bytes from the front. Same as [`shift`](Self::shift).
    ///
    /// Reading is destructive: the bytes are removed. Use
    /// [`peek`](Self::peek) to look without consuming.
    #[inline]
    pub fn read(&mut self, n: usize) -> Option<Vec<u8>> {
        self.shift(n)
    }

    /// Returns the first `n` used bytes without removing them.
    pub fn peek(&self, n: usize) -> Option<&[u8]> {
        if n > self.cursor {
            return None;
        }
        Some(&self.storage[..n])
    }

    /// Decodes `data` using the named encoding and pushes the bytes.
    ///
    /// Fails with [`BufferError`](crate::BufferError) if the encoding name is
    /// unknown or `data` does not decode. A decoded value that does not fit
    /// yields `Ok(false)`.
    ///
    /// # Example
    ///
    /// ```
    /// use buffer_array::BufferArray;
    ///
    /// let mut buf = BufferArray::new(2);
    /// assert_eq!(buf.push_encoded("09F3", "hex"), Ok(true));
    /// assert!(buf.push_encoded("0", "hex").is_err());
    /// ```
    pub fn push_encoded(&mut self, data: &str, encoding: &str) -> Result<bool> {
        self.push_str_as(data, encoding.parse()?)
    }

    /// Decodes `data` and pushes the bytes.
    pub fn push_str_as(&mut self, data: &str, encoding: Encoding) -> Result<bool> {
        let bytes = decode(data, encoding)?;
        Ok(self.push(&bytes))
    }

    /// Decodes `data` using the named encoding and unshifts the bytes.
    pub fn unshift_encoded(&mut self, data: &str, encoding: &str) -> Result<bool> {
        self.unshift_str_as(data, encoding.parse()?)
    }

    /// Decodes `data` and unshifts the bytes.
    pub fn unshift_str_as(&mut self, data: &str, encoding: Encoding) -> Result<bool> {
        let bytes = decode(data, encoding)?;
        Ok(self.unshift(&bytes))
    }

    /// Encodes `value` and pushes it.
    #[must_use = "a rejected push leaves the buffer unchanged"]
    pub fn push_number<T: Number>(&mut self, value: T, endian: Endian) -> bool {
        self.push(value.to_bytes(endian).as_ref())
    }

    /// Pops `T::WIDTH` bytes and decodes them.
    pub fn pop_number<T: Number>(&mut self, endian: Endian) -> Option<T> {
        self.pop(T::WIDTH).map(|bytes| T::from_bytes(&bytes, endian))
    }

    /// Shifts `T::WIDTH` bytes and decodes them.
    pub fn shift_number<T: Number>(&mut self, endian: Endian) -> Option<T> {
        self.shift(T::WIDTH).map(|bytes| T::from_bytes(&bytes, endian))
    }

    /// Encodes `value` and unshifts it.
    #[must_use = "a rejected unshift leaves the buffer unchanged"]
    pub fn unshift_number<T: Number>(&mut self, value: T, endian: Endian) -> bool {
        self.unshift(value.to_bytes(endian).as_ref())
    }

    /// Consumes a value from the front. Same as [`shift_number`](Self::shift_number).
    #[inline]
    pub fn read_number<T: Number>(&mut self, endian: Endian) -> Option<T> {
        self.shift_number(endian)
    }

    /// Decodes the value at the front without consuming it.
    pub fn peek_number<T: Number>(&self, endian: Endian) -> Option<T> {
        self.peek(T::WIDTH).map(|bytes| T::from_bytes(bytes, endian))
    }

    #[cold]
    fn reject(&self, op: &'static str, requested: usize) {
        trace!(
            op,
            requested,
            cursor = self.cursor,
            capacity = self.storage.len(),
            "buffer operation rejected"
        );
    }
}

fn decode(data: &str, encoding: Encoding) -> Result<Vec<u8>> {
    encoding.decode(data).map_err(|err| {
        debug!(%encoding, error = %err, "failed to decode string input");
        err
    })
}

impl From<Vec<u8>> for BufferArray {
    /// Adopts `bytes` as storage, with every byte in use.
    fn from(bytes: Vec<u8>) -> Self {
        let cursor = bytes.len();
        Self {
            storage: bytes.into_boxed_slice(),
            cursor,
        }
    }
}

impl From<&[u8]> for BufferArray {
    fn from(bytes: &[u8]) -> Self {
        Self::from_slice(bytes)
    }
}

impl From<BufferArray> for Vec<u8> {
    fn from(buf: BufferArray) -> Self {
        buf.into_bytes()
    }
}

impl AsRef<[u8]> for BufferArray {
    fn as_ref(&self) -> &[u8] {
        self.as_bytes()
    }
}

/// Formats the used region as space-separated hex octets.
impl fmt::Display for BufferArray {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, byte) in self.used_bytes().iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{:02x}", byte)?;
        }
        Ok(())
    }
}
