//! Base64 decoding to an owned byte vector.

use crate::decode_into;
use crate::Base64Error;

/// Decodes a base64 string to its byte sequence.
///
/// Interior whitespace is skipped; malformed input fails the whole call
/// (see [`decode_into`] for the error conditions). The caller receives
/// either the fully decoded bytes or an error, never a partial result.
///
/// # Example
///
/// ```
/// use imagetk_base64::decode;
///
/// let decoded = decode("aGVsbG8gd29ybGQ=").unwrap();
/// assert_eq!(decoded.as_slice(), b"hello world");
/// ```
pub fn decode(encoded: &str) -> Result<Vec<u8>, Base64Error> {
    let mut out = Vec::with_capacity(encoded.len() * 3 / 4);
    decode_into(encoded, &mut out)?;
    Ok(out)
}
