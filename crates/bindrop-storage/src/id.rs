//! Object identifier generation and validation.
//!
//! Identifiers are the only input to storage path construction, so this type
//! is deliberately strict: a value can only be obtained from the CSPRNG or by
//! parsing a string that is exactly 32 lowercase hex characters.

use std::fmt;
use std::str::FromStr;

/// Length of an object id in hex characters (16 random bytes).
pub const OBJECT_ID_LEN: usize = 32;

/// Opaque object identifier: 128 bits from a CSPRNG, hex encoded.
///
/// Uniqueness is probabilistic; at 128 bits of entropy no existence check
/// against the store is needed.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ObjectId(String);

impl ObjectId {
    /// Generate a fresh identifier from the thread-local CSPRNG.
    pub fn generate() -> Self {
        use rand::Rng;

        let mut rng = rand::rng();
        let random_bytes: [u8; 16] = rng.random();
        ObjectId(hex::encode(random_bytes))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// File name of the payload artifact for this id.
    pub(crate) fn payload_file(&self) -> String {
        format!("{}.bin", self.0)
    }

    /// File name of the metadata artifact for this id.
    pub(crate) fn metadata_file(&self) -> String {
        format!("{}.json", self.0)
    }
}

impl fmt::Display for ObjectId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
#[error("invalid object id")]
pub struct ParseObjectIdError;

impl FromStr for ObjectId {
    type Err = ParseObjectIdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.len() != OBJECT_ID_LEN {
            return Err(ParseObjectIdError);
        }
        if !s
            .bytes()
            .all(|b| b.is_ascii_digit() || (b'a'..=b'f').contains(&b))
        {
            return Err(ParseObjectIdError);
        }
        Ok(ObjectId(s.to_string()))
    }
}
