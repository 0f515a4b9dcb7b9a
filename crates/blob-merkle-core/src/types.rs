//! Strong type definitions for blob content.

use bytes::Bytes;
use std::fmt;

use crate::constants::SECTOR_SIZE;
use crate::error::CoreError;

/// Position of a sector within a blob, and of its hash within a base.
///
/// A blob has exactly 256 sectors, so every `u8` is a valid position.
pub type SectorId = u8;

/// The content of a single sector: exactly [`SECTOR_SIZE`] bytes.
#[derive(Clone, PartialEq, Eq)]
pub struct Sector(Bytes);

impl Sector {
    /// Wrap sector content, checking its length.
    pub fn new(content: impl Into<Bytes>) -> Result<Self, CoreError> {
        let content = content.into();
        if content.len() != SECTOR_SIZE {
            return Err(CoreError::InvalidSectorLength {
                expected: SECTOR_SIZE,
                actual: content.len(),
            });
        }
        Ok(Self(content))
    }

    /// A sector of zero bytes, as found in a newly allocated blob.
    pub fn zeroed() -> Self {
        Self(Bytes::from(vec![0u8; SECTOR_SIZE]))
    }

    /// Get the raw content.
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    /// Consume the sector, returning its content.
    pub fn into_bytes(self) -> Bytes {
        self.0
    }
}

impl AsRef<[u8]> for Sector {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl fmt::Debug for Sector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let nonzero = self.0.iter().filter(|&&b| b != 0).count();
        write!(f, "Sector({} bytes, {} non-zero)", self.0.len(), nonzero)
    }
}

impl TryFrom<Vec<u8>> for Sector {
    type Error = CoreError;

    fn try_from(content: Vec<u8>) -> Result<Self, Self::Error> {
        Self::new(content)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sector_length_is_checked() {
        let err = Sector::new(vec![0u8; SECTOR_SIZE - 1]).unwrap_err();
        assert!(matches!(
            err,
            CoreError::InvalidSectorLength { expected: SECTOR_SIZE, actual } if actual == SECTOR_SIZE - 1
        ));
        assert!(Sector::new(vec![7u8; SECTOR_SIZE]).is_ok());
    }

    #[test]
    fn test_zeroed_sector() {
        let sector = Sector::zeroed();
        assert_eq!(sector.as_bytes().len(), SECTOR_SIZE);
        assert!(sector.as_bytes().iter().all(|&b| b == 0));
        assert_eq!(format!("{:?}", sector), "Sector(65536 bytes, 0 non-zero)");
    }
}
