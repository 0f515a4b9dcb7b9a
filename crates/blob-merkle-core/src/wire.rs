//! Wire encodings for bases, sector proofs and trees.
//!
//! All formats are plain concatenations of 32-byte digests:
//!
//! - base: 256 digests, 8192 bytes, no length prefix;
//! - sector proof: 8 digests, 256 bytes, base level first;
//! - tree: one height byte `H`, then the `2^(H+1) - 1` nodes level by level,
//!   starting with the leaves (left to right) and ending with the root.

use std::io::{Read, Write};

use crate::base::MerkleBase;
use crate::constants::{BASE_SIZE, BASE_WIDTH, MAX_TREE_HEIGHT, PROOF_LEN, PROOF_SIZE};
use crate::digest::{Digest, DIGEST_SIZE};
use crate::error::{CoreError, Result};
use crate::proof::SectorProof;
use crate::tree::MerkleTree;

/// Upper bound on digests reserved up front for one decoded level.
const LEVEL_PREALLOC: u64 = 4096;

fn read_digest<R: Read>(reader: &mut R, what: &'static str) -> Result<Digest> {
    let mut buf = [0u8; DIGEST_SIZE];
    reader
        .read_exact(&mut buf)
        .map_err(|e| CoreError::from_read(e, what))?;
    Ok(Digest(buf))
}

impl MerkleBase {
    /// Write the 256 digests in order.
    pub fn encode<W: Write>(&self, mut writer: W) -> Result<()> {
        for digest in self.as_slice() {
            writer.write_all(digest.as_bytes())?;
        }
        Ok(())
    }

    /// Read exactly 256 digests.
    pub fn decode<R: Read>(mut reader: R) -> Result<Self> {
        let mut digests = [Digest::ZERO; BASE_WIDTH];
        for slot in digests.iter_mut() {
            *slot = read_digest(&mut reader, "base")?;
        }
        Ok(Self::from_digests(digests))
    }

    /// The encoded form as a byte vector.
    pub fn to_bytes(&self) -> Vec<u8> {
        let mut buf = Vec::with_capacity(BASE_SIZE);
        for digest in self.as_slice() {
            buf.extend_from_slice(digest.as_bytes());
        }
        buf
    }
}

impl SectorProof {
    /// Write the sibling digests, base level first.
    pub fn encode<W: Write>(&self, mut writer: W) -> Result<()> {
        writer.write_all(&self.to_bytes())?;
        Ok(())
    }

    /// Read exactly 8 sibling digests.
    pub fn decode<R: Read>(mut reader: R) -> Result<Self> {
        let mut siblings = [Digest::ZERO; PROOF_LEN];
        for slot in siblings.iter_mut() {
            *slot = read_digest(&mut reader, "sector proof")?;
        }
        Ok(Self::from_digests(siblings))
    }

    /// Parse a proof from exactly 256 bytes.
    pub fn from_slice(bytes: &[u8]) -> Result<Self> {
        if bytes.len() != PROOF_SIZE {
            return Err(CoreError::InvalidProofLength {
                expected: PROOF_SIZE,
                actual: bytes.len(),
            });
        }
        Self::decode(bytes)
    }

    /// The encoded form.
    pub fn to_bytes(&self) -> [u8; PROOF_SIZE] {
        let mut buf = [0u8; PROOF_SIZE];
        for (chunk, sibling) in buf.chunks_exact_mut(DIGEST_SIZE).zip(self.siblings()) {
            chunk.copy_from_slice(sibling.as_bytes());
        }
        buf
    }
}

impl MerkleTree {
    /// Write the height byte followed by every node, leaves first.
    pub fn encode<W: Write>(&self, mut writer: W) -> Result<()> {
        // Leaf counts fit in 32 bits, so the height always fits in a byte.
        writer.write_all(&[self.height() as u8])?;
        for level in self.levels().iter().rev() {
            for node in level {
                writer.write_all(node.as_bytes())?;
            }
        }
        Ok(())
    }

    /// Decode a tree of at most [`MAX_TREE_HEIGHT`] levels.
    pub fn decode<R: Read>(reader: R) -> Result<Self> {
        Self::decode_with_limit(reader, MAX_TREE_HEIGHT)
    }

    /// Decode a tree, refusing heights above `max_height`.
    ///
    /// The limit is clamped to [`MAX_TREE_HEIGHT`]. On [`CoreError::TreeTooDeep`]
    /// nothing past the height byte has been read.
    ///
    /// Nodes are taken as sent: parents are not checked against their
    /// children, so only the root says anything about the content.
    pub fn decode_with_limit<R: Read>(mut reader: R, max_height: u8) -> Result<Self> {
        let mut height = [0u8; 1];
        reader
            .read_exact(&mut height)
            .map_err(|e| CoreError::from_read(e, "tree height"))?;
        let height = height[0];
        let max = max_height.min(MAX_TREE_HEIGHT);
        if height > max {
            return Err(CoreError::TreeTooDeep { height, max });
        }

        let mut levels = Vec::with_capacity(usize::from(height) + 1);
        let mut count: u64 = 1 << height;
        loop {
            let mut level = Vec::with_capacity(count.min(LEVEL_PREALLOC) as usize);
            for _ in 0..count {
                level.push(read_digest(&mut reader, "tree")?);
            }
            levels.push(level);
            if count == 1 {
                break;
            }
            count /= 2;
        }
        levels.reverse();
        Ok(Self::from_levels(levels))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hashing::EMPTY_SECTOR_HASH;
    use crate::proof::make_sector_proof;
    use proptest::prelude::*;
    use std::io::Cursor;

    fn sample_tree(height: usize) -> MerkleTree {
        let leaves = (0..1usize << height)
            .map(|i| Digest::hash(&(i as u32).to_be_bytes()))
            .collect();
        MerkleTree::from_hashed_leaves(leaves).unwrap()
    }

    #[test]
    fn test_base_wire_size_and_layout() {
        let base = MerkleBase::EMPTY_BLOB.with_sector(1, Digest::from_bytes([0xee; 32]));
        let mut buf = Vec::new();
        base.encode(&mut buf).unwrap();

        assert_eq!(buf.len(), BASE_SIZE);
        assert_eq!(buf, base.to_bytes());
        assert_eq!(&buf[..32], EMPTY_SECTOR_HASH.as_bytes());
        assert_eq!(&buf[32..64], &[0xee; 32]);
        assert_eq!(MerkleBase::decode(&buf[..]).unwrap(), base);
    }

    #[test]
    fn test_truncated_base_is_short_read() {
        let buf = MerkleBase::EMPTY_BLOB.to_bytes();
        assert!(matches!(
            MerkleBase::decode(&buf[..BASE_SIZE - 1]),
            Err(CoreError::ShortRead { what: "base" })
        ));
    }

    #[test]
    fn test_proof_wire_size() {
        let tree = MerkleTree::from_base(&MerkleBase::EMPTY_BLOB);
        let proof = make_sector_proof(&tree, 9);
        let mut buf = Vec::new();
        proof.encode(&mut buf).unwrap();

        assert_eq!(buf.len(), PROOF_SIZE);
        assert_eq!(SectorProof::decode(&buf[..]).unwrap(), proof);
        assert!(matches!(
            SectorProof::decode(&buf[..100]),
            Err(CoreError::ShortRead { what: "sector proof" })
        ));
    }

    #[test]
    fn test_proof_slice_must_be_exact() {
        let proof = make_sector_proof(&MerkleTree::from_base(&MerkleBase::EMPTY_BLOB), 3);
        let mut buf = proof.to_bytes().to_vec();
        assert_eq!(SectorProof::from_slice(&buf).unwrap(), proof);

        assert!(matches!(
            SectorProof::from_slice(&buf[..100]),
            Err(CoreError::InvalidProofLength { expected: 256, actual: 100 })
        ));
        buf.push(0);
        assert!(matches!(
            SectorProof::from_slice(&buf),
            Err(CoreError::InvalidProofLength { expected: 256, actual: 257 })
        ));
    }

    #[test]
    fn test_tree_wire_layout() {
        let tree = sample_tree(2);
        let mut buf = Vec::new();
        tree.encode(&mut buf).unwrap();

        // height byte + 4 leaves + 2 inner nodes + root
        assert_eq!(buf.len(), 1 + 7 * DIGEST_SIZE);
        assert_eq!(buf[0], 2);
        assert_eq!(&buf[1..33], tree.level(2)[0].as_bytes());
        assert_eq!(&buf[buf.len() - DIGEST_SIZE..], tree.root().as_bytes());
    }

    #[test]
    fn test_too_deep_tree_reads_nothing_more() {
        let mut input = vec![MAX_TREE_HEIGHT + 1];
        input.extend_from_slice(&[0u8; 64]);
        let mut cursor = Cursor::new(input);

        let err = MerkleTree::decode(&mut cursor).unwrap_err();
        assert!(matches!(err, CoreError::TreeTooDeep { height: 33, max: 32 }));
        assert_eq!(cursor.position(), 1);
    }

    #[test]
    fn test_decoded_nodes_are_taken_as_sent() {
        let tree = sample_tree(3);
        let mut buf = Vec::new();
        tree.encode(&mut buf).unwrap();
        let last = buf.len() - 1;
        buf[last] ^= 0x01;

        let forged = MerkleTree::decode(&buf[..]).unwrap();
        assert_eq!(forged.level(3), tree.level(3));
        assert_ne!(forged.root(), tree.root());
    }

    #[test]
    fn test_decode_limit_is_clamped() {
        let mut cursor = Cursor::new(vec![40u8]);
        assert!(matches!(
            MerkleTree::decode_with_limit(&mut cursor, u8::MAX),
            Err(CoreError::TreeTooDeep { height: 40, max: 32 })
        ));

        let mut buf = Vec::new();
        sample_tree(4).encode(&mut buf).unwrap();
        assert!(matches!(
            MerkleTree::decode_with_limit(&buf[..], 3),
            Err(CoreError::TreeTooDeep { height: 4, max: 3 })
        ));
    }

    #[test]
    fn test_truncated_tree_is_short_read() {
        let mut buf = Vec::new();
        sample_tree(3).encode(&mut buf).unwrap();
        buf.truncate(buf.len() - 1);
        assert!(matches!(
            MerkleTree::decode(&buf[..]),
            Err(CoreError::ShortRead { what: "tree" })
        ));
        assert!(matches!(
            MerkleTree::decode(&[0u8; 0][..]),
            Err(CoreError::ShortRead { what: "tree height" })
        ));
    }

    proptest! {
        #[test]
        fn prop_tree_encode_decode_preserves_levels(height in 0usize..=9) {
            let tree = sample_tree(height);
            let mut buf = Vec::new();
            tree.encode(&mut buf).unwrap();
            prop_assert_eq!(buf.len(), 1 + ((2usize << height) - 1) * DIGEST_SIZE);

            let decoded = MerkleTree::decode(&buf[..]).unwrap();
            prop_assert_eq!(decoded.root(), tree.root());
            prop_assert_eq!(decoded.levels(), tree.levels());
        }
    }
}
