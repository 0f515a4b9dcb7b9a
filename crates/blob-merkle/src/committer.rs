//! The Committer: builds commitments from content and accepts them from peers.

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use blob_merkle_core::{
    verify_sector_proof, Digest, MerkleBase, MerkleTree, Sector, SectorId, SectorProof,
    MAX_TREE_HEIGHT, SECTOR_SIZE,
};

use crate::commitment::BlobCommitment;
use crate::error::{CommitError, Result};

/// Configuration for the Committer.
#[derive(Debug, Clone)]
pub struct CommitterConfig {
    /// Capacity of the buffer used when reading blob files.
    ///
    /// Only applies to [`Committer::merkleize_file`]. Readers handed to the
    /// other methods are read as given, so wrap them in a `BufReader` yourself
    /// when the stream holds nothing else.
    pub read_buffer_size: usize,
    /// Deepest tree accepted from a peer. At most 32.
    pub max_tree_height: u8,
}

impl Default for CommitterConfig {
    fn default() -> Self {
        Self {
            read_buffer_size: SECTOR_SIZE,
            max_tree_height: MAX_TREE_HEIGHT,
        }
    }
}

/// Produces and checks blob commitments.
#[derive(Debug, Clone)]
pub struct Committer {
    config: CommitterConfig,
}

impl Committer {
    /// Create a committer, validating the configuration.
    pub fn new(config: CommitterConfig) -> Result<Self> {
        if config.read_buffer_size == 0 {
            return Err(CommitError::InvalidConfig(
                "read_buffer_size must be non-zero".to_string(),
            ));
        }
        if config.max_tree_height > MAX_TREE_HEIGHT {
            return Err(CommitError::InvalidConfig(format!(
                "max_tree_height {} exceeds {}",
                config.max_tree_height, MAX_TREE_HEIGHT
            )));
        }
        Ok(Self { config })
    }

    /// Get the configuration.
    pub fn config(&self) -> &CommitterConfig {
        &self.config
    }

    /// Build the commitment of a whole blob read from `reader`.
    ///
    /// Reads exactly one blob; anything after it stays in the reader.
    pub fn merkleize<R: Read>(&self, reader: R) -> Result<BlobCommitment> {
        let tree = MerkleTree::merkleize(reader)?;
        tracing::debug!(root = %tree.root(), height = tree.height(), "merkleized blob");
        Ok(BlobCommitment::new(tree))
    }

    /// Build the commitment of a blob stored in a file.
    pub fn merkleize_file(&self, path: impl AsRef<Path>) -> Result<BlobCommitment> {
        let file = File::open(path.as_ref())?;
        self.merkleize(BufReader::with_capacity(self.config.read_buffer_size, file))
    }

    /// Accept a peer's base, checking it against the root they advertised.
    pub fn accept_base(&self, base: &MerkleBase, expected_root: &Digest) -> Result<BlobCommitment> {
        let tree = MerkleTree::from_base(base);
        let actual = tree.root();
        if actual != *expected_root {
            tracing::warn!(
                expected = %expected_root,
                actual = %actual,
                "base does not match advertised root"
            );
            return Err(CommitError::RootMismatch {
                expected: *expected_root,
                actual,
            });
        }
        tracing::debug!(root = %actual, "regrew tree from base");
        Ok(BlobCommitment::new(tree))
    }

    /// Decode a peer's tree within the configured height limit.
    ///
    /// Reads exactly one encoded tree and nothing past it; a tree that is too
    /// deep is refused after its height byte.
    ///
    /// Parents are taken as sent, not recomputed from their children. Compare
    /// the root against one obtained from a trusted source before relying on
    /// any of the tree's nodes.
    pub fn decode_tree<R: Read>(&self, reader: R) -> Result<MerkleTree> {
        let tree = MerkleTree::decode_with_limit(reader, self.config.max_tree_height)?;
        tracing::debug!(root = %tree.root(), height = tree.height(), "decoded tree");
        Ok(tree)
    }

    /// Check a sector fetched from an untrusted source.
    pub fn verify_sector(
        &self,
        sector: &Sector,
        sector_id: SectorId,
        root: &Digest,
        proof: &SectorProof,
    ) -> bool {
        let valid = verify_sector_proof(sector, sector_id, root, proof);
        if !valid {
            tracing::warn!(sector_id, root = %root, "rejected sector proof");
        }
        valid
    }
}
