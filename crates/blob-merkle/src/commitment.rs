//! A blob's commitment tree and the queries peers make against it.

use std::io::Write;

use blob_merkle_core::{make_sector_proof, Digest, MerkleBase, MerkleTree, SectorId, SectorProof};

use crate::error::Result;

/// The commitment to one blob.
///
/// Holds either the full tree built from the blob's content or the upper
/// tree regrown from a base. Both have the same root and base, so either can
/// answer diff and proof queries.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BlobCommitment {
    tree: MerkleTree,
    base: MerkleBase,
}

impl BlobCommitment {
    pub(crate) fn new(tree: MerkleTree) -> Self {
        let base = tree.base();
        Self { tree, base }
    }

    /// The digest that commits to the whole blob.
    pub fn root(&self) -> Digest {
        self.tree.root()
    }

    /// The per-sector hashes to publish alongside the root.
    pub fn base(&self) -> &MerkleBase {
        &self.base
    }

    /// The underlying tree.
    pub fn tree(&self) -> &MerkleTree {
        &self.tree
    }

    /// Consume the commitment, returning its tree.
    pub fn into_tree(self) -> MerkleTree {
        self.tree
    }

    /// Sectors whose hashes differ from `other`, ascending.
    pub fn changed_sectors(&self, other: &MerkleBase) -> Vec<SectorId> {
        let changed = self.base.diff(other);
        tracing::trace!(root = %self.root(), changed = changed.len(), "diffed base");
        changed
    }

    /// Proof that sector `sector_id` belongs under [`Self::root`].
    pub fn prove(&self, sector_id: SectorId) -> SectorProof {
        make_sector_proof(&self.tree, sector_id)
    }

    /// Write the tree in wire form.
    pub fn encode<W: Write>(&self, writer: W) -> Result<()> {
        self.tree.encode(writer)?;
        Ok(())
    }
}
