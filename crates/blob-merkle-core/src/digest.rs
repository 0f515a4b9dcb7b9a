//! The 32-byte digest used for every node of a commitment tree.
//!
//! Digests are Blake2b with a 256-bit output. The hash function is fixed:
//! committed values are exchanged with other implementations.

use blake2::digest::consts::U32;
use blake2::{Blake2b, Digest as _};
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::CoreError;

type Blake2b256 = Blake2b<U32>;

/// Size of a digest in bytes.
pub const DIGEST_SIZE: usize = 32;

/// A 32-byte Blake2b-256 digest.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Digest(pub [u8; DIGEST_SIZE]);

impl Digest {
    /// Compute the Blake2b-256 digest of the given data.
    pub fn hash(data: &[u8]) -> Self {
        Self(Blake2b256::digest(data).into())
    }

    /// Compute the Blake2b-256 digest of `left || right`.
    pub fn hash_concat(left: &[u8], right: &[u8]) -> Self {
        let mut hasher = Blake2b256::new();
        hasher.update(left);
        hasher.update(right);
        Self(hasher.finalize().into())
    }

    /// Create from raw bytes.
    pub const fn from_bytes(bytes: [u8; DIGEST_SIZE]) -> Self {
        Self(bytes)
    }

    /// Get the raw bytes.
    pub const fn as_bytes(&self) -> &[u8; DIGEST_SIZE] {
        &self.0
    }

    /// Convert to hex string.
    pub fn to_hex(&self) -> String {
        hex::encode(self.0)
    }

    /// Parse from hex string.
    pub fn from_hex(s: &str) -> Result<Self, CoreError> {
        let mut arr = [0u8; DIGEST_SIZE];
        hex::decode_to_slice(s, &mut arr)?;
        Ok(Self(arr))
    }

    /// The all-zero digest (sentinel value, never a real hash output).
    pub const ZERO: Self = Self([0u8; DIGEST_SIZE]);
}

impl fmt::Debug for Digest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Digest({})", &self.to_hex()[..16])
    }
}

impl fmt::Display for Digest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl AsRef<[u8]> for Digest {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl From<[u8; DIGEST_SIZE]> for Digest {
    fn from(bytes: [u8; DIGEST_SIZE]) -> Self {
        Self(bytes)
    }
}

impl TryFrom<&[u8]> for Digest {
    type Error = std::array::TryFromSliceError;

    fn try_from(slice: &[u8]) -> Result<Self, Self::Error> {
        let arr: [u8; DIGEST_SIZE] = slice.try_into()?;
        Ok(Self(arr))
    }
}
