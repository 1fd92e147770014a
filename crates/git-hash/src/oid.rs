use std::fmt;
use std::str::FromStr;

use crate::{hex, HashError, DIGEST_LEN, HEX_LEN};

/// A git object identifier: the SHA-1 of an object's uncompressed bytes.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ObjectId(pub(crate) [u8; DIGEST_LEN]);

impl ObjectId {
    /// The all-zeros id.
    pub const NULL: Self = Self([0u8; DIGEST_LEN]);

    /// Create an ObjectId from its raw 20 digest bytes.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, HashError> {
        let arr: [u8; DIGEST_LEN] =
            bytes
                .try_into()
                .map_err(|_| HashError::InvalidHashLength {
                    expected: DIGEST_LEN,
                    actual: bytes.len(),
                })?;
        Ok(Self(arr))
    }

    /// Create an ObjectId from 40 hex digits (either case).
    pub fn from_hex(s: &str) -> Result<Self, HashError> {
        if s.len() != HEX_LEN {
            return Err(HashError::InvalidHexLength {
                expected: HEX_LEN,
                actual: s.len(),
            });
        }
        let mut bytes = [0u8; DIGEST_LEN];
        hex::decode_into(s, &mut bytes)?;
        Ok(Self(bytes))
    }

    /// Get the raw digest bytes.
    pub fn as_bytes(&self) -> &[u8; DIGEST_LEN] {
        &self.0
    }

    pub fn is_null(&self) -> bool {
        self.0.iter().all(|&b| b == 0)
    }

    /// Lowercase hex representation.
    pub fn to_hex(&self) -> String {
        hex::encode(&self.0)
    }

    /// Abbreviated hex, as used in log and error output.
    pub fn to_short_hex(&self) -> String {
        hex::encode(&self.0[..4])
    }

    /// The loose object path below `objects/`: `"xx/<38 more digits>"`.
    pub fn loose_path(&self) -> String {
        let hex = self.to_hex();
        format!("{}/{}", &hex[..2], &hex[2..])
    }
}

impl fmt::Display for ObjectId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl fmt::Debug for ObjectId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ObjectId({})", self.to_short_hex())
    }
}

impl FromStr for ObjectId {
    type Err = HashError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_hex(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    const HEX: &str = "da39a3ee5e6b4b0d3255bfef95601890afd80709";

    #[test]
    fn display_roundtrip() {
        let oid = ObjectId::from_hex(HEX).unwrap();
        assert_eq!(oid.to_string(), HEX);
        let parsed: ObjectId = oid.to_string().parse().unwrap();
        assert_eq!(parsed, oid);
    }

    #[test]
    fn uppercase_input_normalizes() {
        let upper = ObjectId::from_hex(&HEX.to_ascii_uppercase()).unwrap();
        assert_eq!(upper.to_hex(), HEX);
    }

    #[test]
    fn debug_is_abbreviated() {
        let oid = ObjectId::from_hex(HEX).unwrap();
        assert_eq!(format!("{oid:?}"), "ObjectId(da39a3ee)");
    }

    #[test]
    fn loose_path_splits_after_two_digits() {
        let oid = ObjectId::from_hex(HEX).unwrap();
        assert_eq!(oid.loose_path(), "da/39a3ee5e6b4b0d3255bfef95601890afd80709");
    }

    #[test]
    fn from_bytes_requires_twenty() {
        let err = ObjectId::from_bytes(&[0; 10]).unwrap_err();
        assert!(matches!(
            err,
            HashError::InvalidHashLength {
                expected: 20,
                actual: 10
            }
        ));
        assert!(ObjectId::from_bytes(&[7; 20]).is_ok());
    }

    #[test]
    fn rejects_short_and_sha256_length_hex() {
        assert!(ObjectId::from_hex("abcd").is_err());
        assert!(ObjectId::from_hex(&"a".repeat(64)).is_err());
    }

    #[test]
    fn null_and_set_membership() {
        assert!(ObjectId::NULL.is_null());
        let oid = ObjectId::from_hex(HEX).unwrap();
        assert!(!oid.is_null());
        let set: HashSet<_> = [oid, oid, ObjectId::NULL].into_iter().collect();
        assert_eq!(set.len(), 2);
    }
}
