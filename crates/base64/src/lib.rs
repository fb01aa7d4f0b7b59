//! Base64 encoding and decoding for the imagetk toolkit.
//!
//! This crate provides the Base64 codec used by the format-conversion and
//! encoding subsystems:
//! - Encoding with optional line wrapping at a fixed column (76 by
//!   convention), padded to 4-character groups
//! - Strict decoding that skips interior whitespace but rejects invalid
//!   characters, truncated input, and misplaced padding
//! - A streaming decode variant that appends bytes to any caller-supplied
//!   collector
//!
//! # Example
//!
//! ```
//! use imagetk_base64::{encode, decode};
//!
//! let data = b"Test Base64 Encoding";
//! let encoded = encode(data, 0);
//! assert_eq!(encoded, "VGVzdCBCYXNlNjQgRW5jb2Rpbmc=");
//! let decoded = decode(&encoded).unwrap();
//! assert_eq!(decoded.as_slice(), data);
//! ```

use thiserror::Error;

mod constants;
mod decode;
mod decode_into;
mod encode;

pub use constants::{ALPHABET, ALPHABET_BYTES, DEFAULT_LINE_LENGTH, PAD};
pub use decode::decode;
pub use decode_into::decode_into;
pub use encode::encode;

/// Error type for base64 decoding.
///
/// Encoding is total and has no error type. Any decode error is fatal to
/// the call; there is no partial or best-effort decode.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Base64Error {
    /// The input ended in the middle of a 4-character group.
    #[error("unexpected end of base64 input")]
    UnexpectedEndOfInput,

    /// The input contains a byte that is neither a base64 alphabet
    /// character, padding, nor skippable whitespace.
    #[error("invalid character 0x{0:02x} in base64 input")]
    InvalidCharacter(u8),

    /// Padding appeared somewhere other than the last one or two
    /// positions of the final 4-character group.
    #[error("base64 padding permitted only at end of input")]
    MisplacedPadding,
}
