//! # Blob Merkle
//!
//! Content commitments for fixed-size 16 MiB blobs.
//!
//! ## Overview
//!
//! A blob is committed to by the root of a Merkle tree over its 4096-byte
//! subsectors. The layer 8 levels below the root, the *base*, holds one digest
//! per 64 KiB sector and is what peers exchange:
//!
//! - **Root**: a single digest committing to the whole blob
//! - **Base**: 256 sector hashes; regrows into the same root without the content
//! - **Sector proof**: 8 digests proving one sector belongs under a root
//!
//! Mostly-empty blobs are cheap: all-zero subtrees resolve to precomputed
//! digests instead of being hashed.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use blob_merkle::{Committer, CommitterConfig};
//!
//! fn example() -> blob_merkle::Result<()> {
//!     let committer = Committer::new(CommitterConfig::default())?;
//!
//!     // Commit to a blob on disk and publish root + base
//!     let ours = committer.merkleize_file("blob.bin")?;
//!     let (root, base) = (ours.root(), ours.base().clone());
//!
//!     // A peer accepts the base if it matches the advertised root
//!     let theirs = committer.accept_base(&base, &root)?;
//!
//!     // ...and later asks for proofs of individual sectors
//!     let proof = ours.prove(17);
//!     # let _ = (theirs, proof);
//!     Ok(())
//! }
//! ```
//!
//! ## Re-exports
//!
//! The primitives live in `blob_merkle::core`.

pub mod commitment;
pub mod committer;
pub mod error;

pub use blob_merkle_core as core;

pub use commitment::BlobCommitment;
pub use committer::{Committer, CommitterConfig};
pub use error::{CommitError, Result};

pub use blob_merkle_core::{
    hash_sector, verify_sector_proof, Digest, MerkleBase, MerkleTree, Sector, SectorId,
    SectorProof, EMPTY_BLOB_ROOT, EMPTY_SECTOR_HASH,
};
