//! Streaming base64 decoding into a caller-supplied collector.

use crate::constants::{
    DECODE_TABLE, DECODE_WINDOW_END, DECODE_WINDOW_START, INVALID_SENTINEL, PAD_SENTINEL,
};
use crate::Base64Error;

/// Resolves one meaningful input byte to its 6-bit value or [`PAD_SENTINEL`].
fn resolve(byte: u8) -> Result<u8, Base64Error> {
    if !(DECODE_WINDOW_START..=DECODE_WINDOW_END).contains(&byte) {
        return Err(Base64Error::InvalidCharacter(byte));
    }
    match DECODE_TABLE[(byte - DECODE_WINDOW_START) as usize] {
        INVALID_SENTINEL => Err(Base64Error::InvalidCharacter(byte)),
        code => Ok(code),
    }
}

/// Decodes a base64 string, appending the decoded bytes to `out`.
///
/// This is the streaming counterpart of [`decode`](crate::decode): bytes
/// are appended one at a time to any [`Extend<u8>`] collector, so callers
/// can decode straight into the container they need without an
/// intermediate buffer.
///
/// Input is consumed four meaningful characters at a time; ASCII
/// whitespace between characters is skipped, so line-wrapped encodings
/// decode identically to their unbroken form. Whitespace after the final
/// complete group is a clean end of input.
///
/// # Errors
///
/// * [`Base64Error::UnexpectedEndOfInput`] - the input ends partway
///   through a 4-character group.
/// * [`Base64Error::InvalidCharacter`] - a byte outside the base64
///   alphabet (and not whitespace or `=`).
/// * [`Base64Error::MisplacedPadding`] - `=` anywhere but the final one
///   or two positions of the last group, including data following a
///   padded group.
///
/// On error the collector may already hold bytes decoded from earlier
/// groups; its contents must be discarded.
///
/// # Example
///
/// ```
/// use imagetk_base64::decode_into;
///
/// let mut out = Vec::new();
/// decode_into("Zm9v", &mut out).unwrap();
/// assert_eq!(out, b"foo");
/// ```
pub fn decode_into<C: Extend<u8>>(encoded: &str, out: &mut C) -> Result<(), Base64Error> {
    let mut tokens = encoded.bytes().filter(|byte| !byte.is_ascii_whitespace());
    let mut padded = false;

    while let Some(t0) = tokens.next() {
        if padded {
            return Err(Base64Error::MisplacedPadding);
        }

        let c0 = resolve(t0)?;
        let c1 = resolve(tokens.next().ok_or(Base64Error::UnexpectedEndOfInput)?)?;
        let c2 = resolve(tokens.next().ok_or(Base64Error::UnexpectedEndOfInput)?)?;
        let c3 = resolve(tokens.next().ok_or(Base64Error::UnexpectedEndOfInput)?)?;

        if c0 == PAD_SENTINEL || c1 == PAD_SENTINEL {
            return Err(Base64Error::MisplacedPadding);
        }
        out.extend([(c0 << 2) | (c1 >> 4)]);

        if c2 == PAD_SENTINEL {
            // The group ends after one byte; the fourth position must
            // also be padding.
            if c3 != PAD_SENTINEL {
                return Err(Base64Error::MisplacedPadding);
            }
            padded = true;
            continue;
        }
        out.extend([(c1 << 4) | (c2 >> 2)]);

        if c3 == PAD_SENTINEL {
            padded = true;
            continue;
        }
        out.extend([(c2 << 6) | c3]);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_into_existing_collector() {
        let mut out = vec![0xFF];
        decode_into("Zm9v", &mut out).unwrap();
        assert_eq!(out, [0xFF, b'f', b'o', b'o']);
    }

    #[test]
    fn empty_and_whitespace_only_input() {
        let mut out: Vec<u8> = Vec::new();
        decode_into("", &mut out).unwrap();
        decode_into(" \t\r\n", &mut out).unwrap();
        assert!(out.is_empty());
    }
}
