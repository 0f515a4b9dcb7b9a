//! Proptest generators for property-based testing.

use proptest::prelude::*;

use blob_merkle_core::{Digest, MerkleBase, Sector, SectorId, SectorProof, SECTOR_SIZE};

/// Generate a random Digest.
pub fn digest() -> impl Strategy<Value = Digest> {
    any::<[u8; 32]>().prop_map(Digest::from_bytes)
}

/// Generate any sector position.
pub fn sector_id() -> impl Strategy<Value = SectorId> {
    any::<SectorId>()
}

/// Generate a base where up to `max_written` sectors differ from the empty blob.
pub fn merkle_base(max_written: usize) -> impl Strategy<Value = MerkleBase> {
    prop::collection::vec((sector_id(), digest()), 0..=max_written).prop_map(|edits| {
        edits
            .into_iter()
            .fold(MerkleBase::EMPTY_BLOB, |base, (id, d)| base.with_sector(id, d))
    })
}

/// Generate a mostly-zero sector with up to `max_edits` bytes set.
///
/// Sparse content keeps most subsectors on the zero fast path, which is the
/// shape real blobs take.
pub fn sparse_sector(max_edits: usize) -> impl Strategy<Value = Sector> {
    prop::collection::vec((0..SECTOR_SIZE, 1u8..=u8::MAX), 0..=max_edits).prop_map(|edits| {
        let mut content = vec![0u8; SECTOR_SIZE];
        for (offset, byte) in edits {
            content[offset] = byte;
        }
        Sector::new(content).expect("sector-sized buffer")
    })
}

/// Generate an arbitrary (almost certainly invalid) proof.
pub fn sector_proof() -> impl Strategy<Value = SectorProof> {
    prop::array::uniform8(digest()).prop_map(SectorProof::from_digests)
}
