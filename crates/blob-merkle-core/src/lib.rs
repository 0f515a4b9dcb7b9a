//! # Blob Merkle Core
//!
//! Pure primitives for committing to fixed-size blobs with a two-level
//! Merkle tree: digests, trees, bases and sector proofs.
//!
//! This crate contains no logging, no storage and no networking. Readers and
//! writers are the only I/O it touches.
//!
//! ## Key Types
//!
//! - [`Digest`] - 32-byte Blake2b-256 hash, the value of every tree node
//! - [`MerkleTree`] - full binary tree over 4096-byte subsectors
//! - [`MerkleBase`] - the 256 digests at depth 8, one per sector
//! - [`SectorProof`] - 8 sibling digests authenticating one sector
//! - [`Sector`] - the 64 KiB content of one sector
//!
//! ## Zero Subtrees
//!
//! All-zero subtrees resolve to precomputed digests instead of being hashed.
//! See [`hashing`] for the table.
//!
//! ## Wire Formats
//!
//! Bases, proofs and trees have fixed binary encodings. See [`wire`].

pub mod base;
pub mod constants;
pub mod digest;
pub mod error;
pub mod hashing;
pub mod proof;
pub mod tree;
pub mod types;
pub mod wire;

pub use base::MerkleBase;
pub use constants::{
    BASE_DEPTH, BASE_SIZE, BASE_WIDTH, BLOB_SIZE, BLOB_TREE_HEIGHT, MAX_TREE_HEIGHT, PROOF_LEN,
    PROOF_SIZE, SECTOR_SIZE, SECTOR_TREE_HEIGHT, SUBSECTOR_COUNT_BLOB, SUBSECTOR_COUNT_SECTOR,
    SUBSECTOR_SIZE,
};
pub use digest::{Digest, DIGEST_SIZE};
pub use error::{CoreError, Result};
pub use hashing::{
    hash_leaf, hash_level, EMPTY_BLOB_ROOT, EMPTY_SECTOR_HASH, EMPTY_SUBSECTOR_HASH,
    ZERO_SUBTREE_ROOTS,
};
pub use proof::{
    hash_sector, make_sector_proof, verify_sector_proof, verify_sector_proof_bytes, SectorProof,
};
pub use tree::MerkleTree;
pub use types::{Sector, SectorId};
