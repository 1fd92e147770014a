//! Lowercase hex encoding for object ids.
//!
//! Tree entries carry raw 20-byte ids; everything user-facing (paths under
//! `objects/`, ref files, rendered output) uses two lowercase hex digits per
//! byte.

use crate::HashError;

const DIGITS: &[u8; 16] = b"0123456789abcdef";

/// Value of a single hex digit, accepting either case.
fn nibble(c: u8) -> Option<u8> {
    match c {
        b'0'..=b'9' => Some(c - b'0'),
        b'a'..=b'f' => Some(c - b'a' + 10),
        b'A'..=b'F' => Some(c - b'A' + 10),
        _ => None,
    }
}

/// Encode `bytes` as lowercase hex.
pub fn encode(bytes: &[u8]) -> String {
    let mut out = String::with_capacity(bytes.len() * 2);
    for &b in bytes {
        out.push(DIGITS[(b >> 4) as usize] as char);
        out.push(DIGITS[(b & 0x0f) as usize] as char);
    }
    out
}

/// Decode `hex` into `buf`. The input must be exactly `buf.len() * 2` digits.
pub fn decode_into(hex: &str, buf: &mut [u8]) -> Result<(), HashError> {
    let digits = hex.as_bytes();
    if digits.len() != buf.len() * 2 {
        return Err(HashError::InvalidHexLength {
            expected: buf.len() * 2,
            actual: digits.len(),
        });
    }
    for (i, pair) in digits.chunks_exact(2).enumerate() {
        let hi = nibble(pair[0]).ok_or(HashError::InvalidHex {
            position: i * 2,
            character: pair[0] as char,
        })?;
        let lo = nibble(pair[1]).ok_or(HashError::InvalidHex {
            position: i * 2 + 1,
            character: pair[1] as char,
        })?;
        buf[i] = (hi << 4) | lo;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn encode_is_lowercase_two_digits_per_byte() {
        assert_eq!(encode(&[0x00, 0x0f, 0xab, 0xff]), "000fabff");
        assert_eq!(encode(&[]), "");
    }

    #[test]
    fn decode_mixed_case() {
        let mut buf = [0u8; 4];
        decode_into("DeAdBeEf", &mut buf).unwrap();
        assert_eq!(buf, [0xde, 0xad, 0xbe, 0xef]);
    }

    #[test]
    fn decode_reports_offending_position() {
        let mut buf = [0u8; 4];
        let err = decode_into("deadgoof", &mut buf).unwrap_err();
        assert!(matches!(
            err,
            HashError::InvalidHex {
                position: 4,
                character: 'g'
            }
        ));
    }

    #[test]
    fn decode_rejects_wrong_length() {
        let mut buf = [0u8; 2];
        let err = decode_into("abc", &mut buf).unwrap_err();
        assert!(matches!(
            err,
            HashError::InvalidHexLength {
                expected: 4,
                actual: 3
            }
        ));
    }
}
