//! Leaf and parent hashing with the all-zero fast paths.
//!
//! Freshly allocated blobs are mostly zero bytes, so most subtrees of a blob
//! tree are uniform zero subtrees. Their roots are fixed values; they are
//! listed in [`ZERO_SUBTREE_ROOTS`] and returned without hashing. The fast
//! paths never change a result: every table entry is exactly the hash the
//! plain rule would compute.

use crate::constants::{BLOB_TREE_HEIGHT, SECTOR_TREE_HEIGHT, SUBSECTOR_SIZE};
use crate::digest::Digest;

/// Roots of all-zero subtrees, indexed by subtree height.
///
/// Entry 0 is the digest of an all-zero subsector; entry `h + 1` is
/// `hash(entry h || entry h)`. The chain reaches the root of an all-zero
/// blob, the deepest uniform subtree the blob geometry can produce.
///
/// That makes 13 entries: the 12 lookup keys for heights 0 to 11, plus the
/// blob root they lead to, which is never a key itself.
pub const ZERO_SUBTREE_ROOTS: [Digest; BLOB_TREE_HEIGHT + 1] = [
    // height 0
    Digest([
        0x68, 0x6e, 0xde, 0x92, 0x88, 0xc3, 0x91, 0xe7, 0xe0, 0x50, 0x26, 0xe5, 0x6f, 0x2f, 0x91, 0xbf,
        0xd8, 0x79, 0x98, 0x7a, 0x04, 0x0e, 0xa9, 0x84, 0x45, 0xda, 0xbc, 0x76, 0xf5, 0x5b, 0x8e, 0x5f,
    ]),
    // height 1
    Digest([
        0x49, 0xe4, 0xb8, 0x0d, 0x5b, 0x7d, 0x8d, 0x93, 0x22, 0x48, 0x25, 0xf2, 0x6c, 0x45, 0x98, 0x7e,
        0x10, 0x7b, 0xbf, 0x2f, 0x87, 0x1d, 0x4e, 0x56, 0x36, 0xac, 0x55, 0x0f, 0xf1, 0x25, 0xe0, 0x82,
    ]),
    // height 2
    Digest([
        0xb7, 0x95, 0x51, 0x37, 0x10, 0x7e, 0x8c, 0x87, 0x98, 0x94, 0xa9, 0x47, 0xa2, 0x35, 0xec, 0xd2,
        0xa4, 0x22, 0x5a, 0x6c, 0x82, 0x12, 0x97, 0x6e, 0x97, 0x6c, 0x50, 0x31, 0x9b, 0x59, 0x31, 0xb3,
    ]),
    // height 3
    Digest([
        0x47, 0x19, 0x5c, 0x0c, 0xa9, 0x4e, 0x02, 0x20, 0xcd, 0x01, 0xbe, 0x88, 0x32, 0x00, 0xfd, 0xbf,
        0x71, 0x48, 0x13, 0x64, 0x94, 0x2b, 0xa1, 0xe8, 0xd3, 0xef, 0x4c, 0x9a, 0x3d, 0xc4, 0xb6, 0xa5,
    ]),
    // height 4
    Digest([
        0x53, 0x2a, 0x12, 0xf0, 0x9f, 0xeb, 0xf8, 0x52, 0x14, 0x19, 0x95, 0x99, 0x73, 0xad, 0x53, 0x46,
        0x94, 0x4c, 0x2b, 0x22, 0xbf, 0x76, 0x4d, 0x0e, 0x1a, 0x34, 0x25, 0x5b, 0x65, 0x64, 0xfe, 0x4b,
    ]),
    // height 5
    Digest([
        0xff, 0xe2, 0xcf, 0x7e, 0xcd, 0x1b, 0x99, 0x32, 0x35, 0x74, 0x6b, 0xe2, 0x1e, 0x91, 0xc8, 0xe6,
        0x1a, 0x1e, 0x22, 0xda, 0xce, 0x98, 0x50, 0x91, 0x25, 0x85, 0x41, 0x65, 0x01, 0xe9, 0x84, 0x47,
    ]),
    // height 6
    Digest([
        0x60, 0x52, 0x2e, 0x01, 0x34, 0x1f, 0xe9, 0x62, 0x54, 0x66, 0x8b, 0xa1, 0xbc, 0x2c, 0x79, 0xdd,
        0x6f, 0xc6, 0x6b, 0x37, 0x84, 0xc2, 0xeb, 0x39, 0xd4, 0xf0, 0x73, 0x19, 0xc6, 0x23, 0x26, 0x57,
    ]),
    // height 7
    Digest([
        0xae, 0x01, 0x82, 0xab, 0x78, 0x03, 0xfc, 0x44, 0xd0, 0x85, 0xc1, 0xc7, 0x34, 0xa5, 0x52, 0xff,
        0xfd, 0xb0, 0xf7, 0x44, 0x17, 0x9f, 0x0d, 0x95, 0xbd, 0x60, 0xdd, 0x6f, 0x8f, 0x18, 0x18, 0xaf,
    ]),
    // height 8
    Digest([
        0xf3, 0x4c, 0x7d, 0x70, 0xb6, 0x52, 0xeb, 0xa4, 0x8e, 0x02, 0xb4, 0x71, 0x7e, 0x1f, 0x0a, 0x2b,
        0xe9, 0x33, 0x7b, 0x07, 0x51, 0xcc, 0xf7, 0xbf, 0x36, 0x44, 0x67, 0x4c, 0xbe, 0x64, 0x23, 0xd5,
    ]),
    // height 9
    Digest([
        0x32, 0x00, 0xb9, 0x9b, 0xfc, 0xd8, 0x2c, 0x64, 0xc8, 0x18, 0xb1, 0xa2, 0xb2, 0x6e, 0x14, 0xbf,
        0x78, 0x4f, 0xe9, 0x18, 0x8a, 0x55, 0x9b, 0x6b, 0x38, 0xa6, 0xdd, 0xa4, 0xfb, 0x55, 0x31, 0x47,
    ]),
    // height 10
    Digest([
        0xb8, 0x6b, 0xe3, 0xa8, 0xb2, 0x88, 0xb0, 0xef, 0x0b, 0x7e, 0xe5, 0xa9, 0x85, 0x2d, 0x11, 0x81,
        0x67, 0xa5, 0x0c, 0x84, 0x71, 0xbf, 0xb9, 0xfb, 0x8f, 0x0c, 0x79, 0x92, 0xf4, 0x52, 0xc7, 0x9c,
    ]),
    // height 11
    Digest([
        0xaa, 0xbd, 0xcb, 0xb2, 0x3b, 0xfc, 0xea, 0xfe, 0x71, 0xf3, 0x83, 0x4a, 0x17, 0xec, 0x1d, 0x24,
        0xbd, 0x4e, 0xf2, 0xda, 0xed, 0x68, 0xd2, 0xcc, 0xc3, 0xc2, 0x98, 0x9f, 0xd0, 0x92, 0xe3, 0x53,
    ]),
    // height 12
    Digest([
        0x7d, 0x1e, 0x84, 0xe6, 0x2d, 0x7e, 0xc9, 0xf6, 0xbc, 0x3f, 0x88, 0x66, 0x75, 0x73, 0x3d, 0xa0,
        0x6d, 0xaf, 0x02, 0x77, 0xad, 0x8f, 0xfc, 0xf7, 0xc5, 0x39, 0x93, 0x8c, 0xa5, 0xee, 0x9c, 0xf2,
    ]),
];

/// Digest of a 4096-byte all-zero subsector.
pub const EMPTY_SUBSECTOR_HASH: Digest = ZERO_SUBTREE_ROOTS[0];

/// Digest of an all-zero sector; every base entry of an empty blob.
pub const EMPTY_SECTOR_HASH: Digest = ZERO_SUBTREE_ROOTS[SECTOR_TREE_HEIGHT];

/// Root of an all-zero blob.
pub const EMPTY_BLOB_ROOT: Digest = ZERO_SUBTREE_ROOTS[BLOB_TREE_HEIGHT];

/// Hash a leaf's content.
pub fn hash_leaf(content: &[u8]) -> Digest {
    if content.len() == SUBSECTOR_SIZE && content.iter().all(|&b| b == 0) {
        return EMPTY_SUBSECTOR_HASH;
    }
    Digest::hash(content)
}

/// Hash two sibling nodes into their parent.
///
/// Order matters: `hash_level(a, b) != hash_level(b, a)` unless `a == b`.
pub fn hash_level(left: &Digest, right: &Digest) -> Digest {
    if left == right {
        if let Some(height) = zero_subtree_height(left) {
            return ZERO_SUBTREE_ROOTS[height + 1];
        }
    }
    Digest::hash_concat(&left.0, &right.0)
}

/// Height of the all-zero subtree rooted at `digest`, if it has a known parent.
fn zero_subtree_height(digest: &Digest) -> Option<usize> {
    ZERO_SUBTREE_ROOTS[..BLOB_TREE_HEIGHT]
        .iter()
        .position(|root| root == digest)
}
