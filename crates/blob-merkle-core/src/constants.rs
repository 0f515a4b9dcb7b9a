//! Geometry of blobs, sectors and commitment trees.
//!
//! These values are cross-implementation compatibility requirements: changing
//! any of them changes every committed root.

use crate::digest::DIGEST_SIZE;

/// Size of a subsector, the unit hashed directly from content.
pub const SUBSECTOR_SIZE: usize = 4096;

/// Size of a whole blob.
pub const BLOB_SIZE: usize = 16 * 1024 * 1024;

/// Number of subsectors (tree leaves) in a blob.
pub const SUBSECTOR_COUNT_BLOB: usize = BLOB_SIZE / SUBSECTOR_SIZE;

/// Height of the full blob tree.
pub const BLOB_TREE_HEIGHT: usize = 12;

/// Depth of the base (commitment) layer below the root.
pub const BASE_DEPTH: usize = 8;

/// Number of digests in a base.
pub const BASE_WIDTH: usize = 1 << BASE_DEPTH;

/// Encoded size of a base.
pub const BASE_SIZE: usize = BASE_WIDTH * DIGEST_SIZE;

/// Size of a sector. Each sector is one base entry.
pub const SECTOR_SIZE: usize = BLOB_SIZE / BASE_WIDTH;

/// Number of subsectors in a sector.
pub const SUBSECTOR_COUNT_SECTOR: usize = SECTOR_SIZE / SUBSECTOR_SIZE;

/// Height of the tree built from a single sector.
pub const SECTOR_TREE_HEIGHT: usize = 4;

/// Number of sibling digests in a sector proof.
pub const PROOF_LEN: usize = BASE_DEPTH;

/// Encoded size of a sector proof.
pub const PROOF_SIZE: usize = PROOF_LEN * DIGEST_SIZE;

/// Deepest tree the wire decoder will accept.
pub const MAX_TREE_HEIGHT: u8 = 32;

// A sector hash must land exactly on a base entry of the blob tree.
const _: () = assert!(SECTOR_SIZE == SUBSECTOR_SIZE * SUBSECTOR_COUNT_SECTOR);
const _: () = assert!(1 << SECTOR_TREE_HEIGHT == SUBSECTOR_COUNT_SECTOR);
const _: () = assert!(1 << BLOB_TREE_HEIGHT == SUBSECTOR_COUNT_BLOB);
const _: () = assert!(BASE_DEPTH + SECTOR_TREE_HEIGHT == BLOB_TREE_HEIGHT);
const _: () = assert!(BASE_WIDTH == u8::MAX as usize + 1);
