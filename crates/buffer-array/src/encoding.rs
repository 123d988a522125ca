//! String encodings accepted by `push` and `unshift`.

use std::fmt;
use std::str::FromStr;

use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;

use crate::error::{BufferError, Result};

/// Encoding of a string to be decoded into raw bytes before insertion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Encoding {
    /// Pairs of hex digits, case-insensitive. Odd length is rejected.
    Hex,
    /// The string's own UTF-8 bytes.
    Utf8,
    /// Standard base64 alphabet with padding.
    Base64,
}

impl Encoding {
    /// Decodes `data` into bytes.
    ///
    /// # Example
    ///
    /// ```
    /// use buffer_array::Encoding;
    ///
    /// assert_eq!(Encoding::Hex.decode("09F3").unwrap(), vec![0x09, 0xF3]);
    /// assert!(Encoding::Hex.decode("09F").is_err());
    /// ```
    pub fn decode(self, data: &str) -> Result<Vec<u8>> {
        let bytes = match self {
            Encoding::Hex => hex::decode(data)?,
            Encoding::Utf8 => data.as_bytes().to_vec(),
            Encoding::Base64 => STANDARD.decode(data)?,
        };
        Ok(bytes)
    }

    /// Canonical lowercase name.
    pub fn name(self) -> &'static str {
        match self {
            Encoding::Hex => "hex",
            Encoding::Utf8 => "utf8",
            Encoding::Base64 => "base64",
        }
    }
}

impl FromStr for Encoding {
    type Err = BufferError;

    fn from_str(name: &str) -> Result<Self> {
        match name.to_ascii_lowercase().as_str() {
            "hex" => Ok(Encoding::Hex),
            "utf8" | "utf-8" => Ok(Encoding::Utf8),
            "base64" => Ok(Encoding::Base64),
            _ => Err(BufferError::UnsupportedEncoding(name.to_string())),
        }
    }
}

impl fmt::Display for Encoding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
