//! Sector hashes and sector membership proofs.
//!
//! A sector proof carries the 8 sibling digests on the path from a base entry
//! up to the blob root. Together with the sector content and its position,
//! they let a verifier that only knows the root authenticate one sector.
//!
//! The scheme relies on the hash of a sector being the same digest the full
//! blob tree holds at that sector's base position. That holds because a
//! sector covers exactly the 16 subsectors below one base entry (checked at
//! compile time in [`crate::constants`]).

use std::fmt;

use crate::constants::{BASE_DEPTH, PROOF_LEN, SUBSECTOR_SIZE};
use crate::digest::Digest;
use crate::hashing::{hash_leaf, hash_level};
use crate::tree::MerkleTree;
use crate::types::{Sector, SectorId};

/// Sibling digests from the base layer up to just below the root.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct SectorProof([Digest; PROOF_LEN]);

impl SectorProof {
    /// Create from sibling digests, base level first.
    pub const fn from_digests(siblings: [Digest; PROOF_LEN]) -> Self {
        Self(siblings)
    }

    /// The sibling digests, base level first.
    pub fn siblings(&self) -> &[Digest; PROOF_LEN] {
        &self.0
    }
}

impl fmt::Debug for SectorProof {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.0.iter()).finish()
    }
}

/// The root of the tree built from one sector's subsectors.
pub fn hash_sector(sector: &Sector) -> Digest {
    let leaves = sector
        .as_bytes()
        .chunks_exact(SUBSECTOR_SIZE)
        .map(hash_leaf)
        .collect();
    MerkleTree::build(leaves).root()
}

/// Build the proof that the base entry at `sector_id` belongs under `tree`'s root.
///
/// # Panics
///
/// Panics if the tree is shallower than the base depth.
pub fn make_sector_proof(tree: &MerkleTree, sector_id: SectorId) -> SectorProof {
    assert!(
        tree.height() >= BASE_DEPTH,
        "tree of height {} is too shallow for sector proofs",
        tree.height()
    );

    let levels = tree.levels();
    let mut siblings = [Digest::ZERO; PROOF_LEN];
    let mut pos = usize::from(sector_id);
    for (slot, depth) in siblings.iter_mut().zip((1..=BASE_DEPTH).rev()) {
        *slot = levels[depth][pos ^ 1];
        pos /= 2;
    }
    SectorProof(siblings)
}

/// Check that `sector` sits at `sector_id` under `root`.
pub fn verify_sector_proof(
    sector: &Sector,
    sector_id: SectorId,
    root: &Digest,
    proof: &SectorProof,
) -> bool {
    let mut current = hash_sector(sector);
    let mut pos = sector_id;
    for sibling in &proof.0 {
        current = if pos % 2 == 0 {
            hash_level(&current, sibling)
        } else {
            hash_level(sibling, &current)
        };
        pos /= 2;
    }
    current == *root
}

/// Like [`verify_sector_proof`], taking the proof in wire form.
///
/// A buffer that is not exactly 256 bytes is rejected rather than reported.
pub fn verify_sector_proof_bytes(
    sector: &Sector,
    sector_id: SectorId,
    root: &Digest,
    proof: &[u8],
) -> bool {
    match SectorProof::from_slice(proof) {
        Ok(proof) => verify_sector_proof(sector, sector_id, root, &proof),
        Err(_) => false,
    }
}
