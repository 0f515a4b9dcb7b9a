//! Full binary Merkle trees over subsector leaves.
//!
//! A tree is stored root first: level 0 holds the root, level `i` holds
//! `2^i` digests, and the node at `(i, p)` is the parent of `(i + 1, 2p)` and
//! `(i + 1, 2p + 1)`. Trees are immutable once built.

use std::fmt;
use std::io::Read;

use crate::base::MerkleBase;
use crate::constants::{BASE_DEPTH, SUBSECTOR_COUNT_BLOB, SUBSECTOR_SIZE};
use crate::digest::Digest;
use crate::error::{CoreError, Result};
use crate::hashing::{hash_leaf, hash_level};

/// A Merkle tree, kept as its complete sequence of levels.
#[derive(Clone, PartialEq, Eq)]
pub struct MerkleTree {
    levels: Vec<Vec<Digest>>,
}

impl MerkleTree {
    /// Build the tree of a whole blob read from `reader`.
    pub fn merkleize<R: Read>(reader: R) -> Result<Self> {
        Self::from_reader(reader, SUBSECTOR_COUNT_BLOB, SUBSECTOR_SIZE)
    }

    /// Build a tree by reading `leaf_count` leaves of `leaf_size` bytes each.
    ///
    /// `leaf_count` must be a power of two no larger than `u32::MAX`. Input
    /// that ends early fails with [`CoreError::ShortRead`].
    pub fn from_reader<R: Read>(mut reader: R, leaf_count: usize, leaf_size: usize) -> Result<Self> {
        check_leaf_count(leaf_count)?;

        let mut buf = vec![0u8; leaf_size];
        let mut leaves = Vec::with_capacity(leaf_count.min(SUBSECTOR_COUNT_BLOB));
        for _ in 0..leaf_count {
            reader
                .read_exact(&mut buf)
                .map_err(|e| CoreError::from_read(e, "leaf"))?;
            leaves.push(hash_leaf(&buf));
        }
        Ok(Self::build(leaves))
    }

    /// Build a tree from leaves that are already digests.
    pub fn from_hashed_leaves(leaves: Vec<Digest>) -> Result<Self> {
        check_leaf_count(leaves.len())?;
        Ok(Self::build(leaves))
    }

    /// Regrow the upper tree of a blob from its base.
    ///
    /// The result has height 8 and the same root as the full blob tree the
    /// base was extracted from.
    pub fn from_base(base: &MerkleBase) -> Self {
        Self::build(base.as_slice().to_vec())
    }

    /// Build the levels above `leaves`. The leaf count must already be checked.
    pub(crate) fn build(leaves: Vec<Digest>) -> Self {
        let mut levels = Vec::new();
        let mut current = leaves;
        while current.len() > 1 {
            let parents = current
                .chunks_exact(2)
                .map(|pair| hash_level(&pair[0], &pair[1]))
                .collect();
            levels.push(current);
            current = parents;
        }
        levels.push(current);
        levels.reverse();
        Self { levels }
    }

    /// Wrap decoded levels, root first.
    pub(crate) fn from_levels(levels: Vec<Vec<Digest>>) -> Self {
        Self { levels }
    }

    /// The root digest.
    pub fn root(&self) -> Digest {
        self.levels[0][0]
    }

    /// Number of levels below the root.
    ///
    /// # Panics
    ///
    /// Panics if the tree has no levels, which no constructor produces.
    pub fn height(&self) -> usize {
        assert!(!self.levels.is_empty(), "merkle tree has no levels");
        self.levels.len() - 1
    }

    /// Number of leaves.
    pub fn leaf_count(&self) -> usize {
        self.levels[self.height()].len()
    }

    /// A copy of level `depth` (0 is the root).
    ///
    /// # Panics
    ///
    /// Panics if `depth > self.height()`.
    pub fn level(&self, depth: usize) -> Vec<Digest> {
        self.levels[depth].clone()
    }

    /// All levels, root first.
    pub fn levels(&self) -> &[Vec<Digest>] {
        &self.levels
    }

    /// The commitment layer at depth 8.
    ///
    /// # Panics
    ///
    /// Panics if the tree is shallower than the base depth.
    pub fn base(&self) -> MerkleBase {
        assert!(
            self.height() >= BASE_DEPTH,
            "tree of height {} has no base layer at depth {}",
            self.height(),
            BASE_DEPTH
        );
        MerkleBase::from_level(&self.levels[BASE_DEPTH])
    }
}

/// Leaf counts must be powers of two that fit in 32 bits.
fn check_leaf_count(count: usize) -> Result<()> {
    if !count.is_power_of_two() || count as u64 > u64::from(u32::MAX) {
        return Err(CoreError::InvalidLeafCount { count });
    }
    Ok(())
}

impl fmt::Debug for MerkleTree {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MerkleTree")
            .field("height", &self.height())
            .field("root", &self.root())
            .finish()
    }
}

/// Leaf level first, each higher level indented one step further.
impl fmt::Display for MerkleTree {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let height = self.height();
        for (depth, level) in self.levels.iter().enumerate().rev() {
            for node in level {
                if depth < height {
                    write!(f, "{}\u{fe42}", "  ".repeat(height + 1 - depth))?;
                }
                writeln!(f, "{}", node.to_hex())?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::{BASE_WIDTH, BLOB_SIZE, BLOB_TREE_HEIGHT};
    use crate::hashing::{EMPTY_BLOB_ROOT, EMPTY_SECTOR_HASH};
    use proptest::prelude::*;
    use std::io;

    fn digest_leaves(count: usize) -> Vec<Digest> {
        (0..count).map(|i| Digest::hash(&(i as u64).to_le_bytes())).collect()
    }

    #[test]
    fn test_single_leaf_tree() {
        let leaf = Digest::hash(b"only");
        let tree = MerkleTree::from_hashed_leaves(vec![leaf]).unwrap();
        assert_eq!(tree.height(), 0);
        assert_eq!(tree.root(), leaf);
    }

    #[test]
    fn test_two_leaf_root() {
        let leaves = digest_leaves(2);
        let tree = MerkleTree::from_hashed_leaves(leaves.clone()).unwrap();
        assert_eq!(tree.height(), 1);
        assert_eq!(tree.root(), hash_level(&leaves[0], &leaves[1]));
    }

    #[test]
    fn test_invalid_leaf_counts() {
        for count in [0usize, 3, 6, 255] {
            assert!(matches!(
                MerkleTree::from_hashed_leaves(digest_leaves(count)),
                Err(CoreError::InvalidLeafCount { count: c }) if c == count
            ));
        }
        assert!(matches!(
            MerkleTree::from_reader(io::empty(), 12, SUBSECTOR_SIZE),
            Err(CoreError::InvalidLeafCount { count: 12 })
        ));
    }

    #[cfg(target_pointer_width = "64")]
    #[test]
    fn test_leaf_count_above_u32_is_rejected() {
        let count = 1usize << 32;
        assert!(matches!(
            MerkleTree::from_reader(io::empty(), count, 1),
            Err(CoreError::InvalidLeafCount { .. })
        ));
    }

    #[test]
    fn test_truncated_input_is_short_read() {
        let data = vec![1u8; 3 * 64 + 10];
        let err = MerkleTree::from_reader(&data[..], 4, 64).unwrap_err();
        assert!(matches!(err, CoreError::ShortRead { what: "leaf" }));
    }

    #[test]
    fn test_from_reader_hashes_leaves() {
        let data: Vec<u8> = (0..4u8).flat_map(|i| vec![i; 64]).collect();
        let tree = MerkleTree::from_reader(&data[..], 4, 64).unwrap();
        let expected: Vec<Digest> = data.chunks(64).map(Digest::hash).collect();
        assert_eq!(tree.level(2), expected);
    }

    #[test]
    fn test_empty_blob_root_and_base() {
        let tree = MerkleTree::merkleize(io::repeat(0).take(BLOB_SIZE as u64)).unwrap();
        assert_eq!(tree.height(), BLOB_TREE_HEIGHT);
        assert_eq!(tree.root(), EMPTY_BLOB_ROOT);
        assert_eq!(tree.base(), MerkleBase::EMPTY_BLOB);
        assert!(tree.base().as_slice().iter().all(|d| *d == EMPTY_SECTOR_HASH));
    }

    #[test]
    fn test_base_regrows_blob_root() {
        let tree = MerkleTree::from_hashed_leaves(digest_leaves(1 << 10)).unwrap();
        let regrown = MerkleTree::from_base(&tree.base());
        assert_eq!(regrown.height(), BASE_DEPTH);
        assert_eq!(regrown.root(), tree.root());
        assert_eq!(regrown.level(3), tree.level(3));
    }

    #[test]
    #[should_panic(expected = "has no base layer")]
    fn test_base_of_shallow_tree_panics() {
        let tree = MerkleTree::from_hashed_leaves(digest_leaves(16)).unwrap();
        let _ = tree.base();
    }

    #[test]
    #[should_panic]
    fn test_level_out_of_range_panics() {
        let tree = MerkleTree::from_hashed_leaves(digest_leaves(4)).unwrap();
        let _ = tree.level(3);
    }

    #[test]
    fn test_display_lists_every_node_leaf_first() {
        let leaves = digest_leaves(2);
        let tree = MerkleTree::from_hashed_leaves(leaves.clone()).unwrap();
        let text = tree.to_string();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0], leaves[0].to_hex());
        assert!(lines[2].ends_with(&tree.root().to_hex()));
        assert!(lines[2].starts_with("    "));
    }

    proptest! {
        #[test]
        fn prop_levels_have_expected_shape(height in 0usize..=10, seed in any::<u64>()) {
            let leaves: Vec<Digest> = (0..1usize << height)
                .map(|i| Digest::hash(&[seed.to_le_bytes(), (i as u64).to_le_bytes()].concat()))
                .collect();
            let tree = MerkleTree::from_hashed_leaves(leaves).unwrap();

            prop_assert_eq!(tree.height(), height);
            prop_assert_eq!(tree.level(0), vec![tree.root()]);
            for depth in 0..=height {
                prop_assert_eq!(tree.level(depth).len(), 1usize << depth);
            }
        }

        #[test]
        fn prop_build_is_deterministic(data in prop::collection::vec(any::<u8>(), 8 * 32)) {
            let t1 = MerkleTree::from_reader(&data[..], 8, 32).unwrap();
            let t2 = MerkleTree::from_reader(&data[..], 8, 32).unwrap();
            prop_assert_eq!(t1.root(), t2.root());
            prop_assert_eq!(t1, t2);
        }

        #[test]
        fn prop_base_regrow_preserves_root(extra in 0usize..=2, seed in any::<u64>()) {
            let leaves: Vec<Digest> = (0..BASE_WIDTH << extra)
                .map(|i| Digest::hash(&[seed.to_le_bytes(), (i as u64).to_le_bytes()].concat()))
                .collect();
            let tree = MerkleTree::from_hashed_leaves(leaves).unwrap();
            prop_assert_eq!(MerkleTree::from_base(&tree.base()).root(), tree.root());
        }
    }
}
