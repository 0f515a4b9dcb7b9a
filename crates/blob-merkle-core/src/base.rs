//! The base: the 256-digest commitment layer shared between peers.
//!
//! For a full blob the base is exactly the list of sector hashes, so two
//! bases can be compared entry by entry to find the sectors that changed.

use std::fmt;
use std::ops::Index;

use crate::constants::BASE_WIDTH;
use crate::digest::Digest;
use crate::hashing::EMPTY_SECTOR_HASH;
use crate::types::SectorId;

/// The digests at depth 8 of a blob tree, one per sector.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct MerkleBase([Digest; BASE_WIDTH]);

impl MerkleBase {
    /// All-zero digests. A placeholder, not the base of any blob.
    pub const ZERO: Self = Self([Digest::ZERO; BASE_WIDTH]);

    /// The base of an all-zero blob.
    pub const EMPTY_BLOB: Self = Self([EMPTY_SECTOR_HASH; BASE_WIDTH]);

    /// Create from the sector hashes in order.
    pub const fn from_digests(digests: [Digest; BASE_WIDTH]) -> Self {
        Self(digests)
    }

    /// Copy a tree level that is known to hold exactly [`BASE_WIDTH`] digests.
    pub(crate) fn from_level(level: &[Digest]) -> Self {
        let mut digests = [Digest::ZERO; BASE_WIDTH];
        digests.copy_from_slice(level);
        Self(digests)
    }

    /// The digests as a slice.
    pub fn as_slice(&self) -> &[Digest] {
        &self.0
    }

    /// The hash committed for one sector.
    pub fn get(&self, sector_id: SectorId) -> &Digest {
        &self.0[usize::from(sector_id)]
    }

    /// A copy of this base with one sector hash replaced.
    pub fn with_sector(&self, sector_id: SectorId, digest: Digest) -> Self {
        let mut digests = self.0;
        digests[usize::from(sector_id)] = digest;
        Self(digests)
    }

    /// Iterate over `(sector_id, digest)` pairs.
    pub fn iter(&self) -> impl Iterator<Item = (SectorId, &Digest)> {
        self.0
            .iter()
            .enumerate()
            .map(|(i, digest)| (i as SectorId, digest))
    }

    /// Sector positions whose hashes differ between `self` and `other`, ascending.
    ///
    /// Empty when the bases are equal.
    pub fn diff(&self, other: &MerkleBase) -> Vec<SectorId> {
        if self == other {
            return Vec::new();
        }
        self.iter()
            .zip(other.0.iter())
            .filter(|((_, ours), theirs)| ours != theirs)
            .map(|((sector_id, _), _)| sector_id)
            .collect()
    }
}

impl Index<SectorId> for MerkleBase {
    type Output = Digest;

    fn index(&self, sector_id: SectorId) -> &Digest {
        self.get(sector_id)
    }
}

impl Default for MerkleBase {
    fn default() -> Self {
        Self::ZERO
    }
}

impl fmt::Debug for MerkleBase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let written = self.0.iter().filter(|d| **d != EMPTY_SECTOR_HASH).count();
        write!(f, "MerkleBase({} of {} sectors non-empty)", written, BASE_WIDTH)
    }
}
