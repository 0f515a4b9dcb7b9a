//! Test fixtures and helpers.
//!
//! Deterministic sector content and whole-blob builders for integration tests.

use rand::{RngCore, SeedableRng};

use blob_merkle::{BlobCommitment, Committer, CommitterConfig, Sector, SectorId};
use blob_merkle_core::{BLOB_SIZE, SECTOR_SIZE, SUBSECTOR_SIZE};

/// A sector whose i-th subsector is filled with `i ^ xor`.
pub fn patterned_sector(xor: u8) -> Sector {
    let content: Vec<u8> = (0..SECTOR_SIZE)
        .map(|i| (i / SUBSECTOR_SIZE) as u8 ^ xor)
        .collect();
    Sector::new(content).expect("sector-sized buffer")
}

/// A sector filled with a single byte value.
pub fn uniform_sector(fill: u8) -> Sector {
    Sector::new(vec![fill; SECTOR_SIZE]).expect("sector-sized buffer")
}

/// A sector of seeded random bytes.
pub fn random_sector(seed: u64) -> Sector {
    let mut rng = rand::rngs::StdRng::seed_from_u64(seed);
    let mut content = vec![0u8; SECTOR_SIZE];
    rng.fill_bytes(&mut content);
    Sector::new(content).expect("sector-sized buffer")
}

/// A whole blob under construction, starting out all zero.
#[derive(Clone)]
pub struct BlobFixture {
    content: Vec<u8>,
    written: Vec<SectorId>,
}

impl BlobFixture {
    /// An all-zero blob.
    pub fn new() -> Self {
        Self {
            content: vec![0u8; BLOB_SIZE],
            written: Vec::new(),
        }
    }

    /// Write `sector` at position `id`.
    pub fn with_sector(mut self, id: SectorId, sector: &Sector) -> Self {
        let start = usize::from(id) * SECTOR_SIZE;
        self.content[start..start + SECTOR_SIZE].copy_from_slice(sector.as_bytes());
        if let Err(pos) = self.written.binary_search(&id) {
            self.written.insert(pos, id);
        }
        self
    }

    /// The sector currently stored at `id`.
    pub fn sector(&self, id: SectorId) -> Sector {
        let start = usize::from(id) * SECTOR_SIZE;
        Sector::new(self.content[start..start + SECTOR_SIZE].to_vec()).expect("sector-sized slice")
    }

    /// Positions written so far, ascending.
    pub fn written(&self) -> &[SectorId] {
        &self.written
    }

    /// The raw blob content.
    pub fn bytes(&self) -> &[u8] {
        &self.content
    }

    /// Merkleize the blob with the default committer.
    pub fn commit(&self) -> BlobCommitment {
        Committer::new(CommitterConfig::default())
            .and_then(|committer| committer.merkleize(&self.content[..]))
            .expect("in-memory blob merkleizes")
    }
}

impl Default for BlobFixture {
    fn default() -> Self {
        Self::new()
    }
}
