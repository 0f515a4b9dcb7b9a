//! Golden test vectors for deterministic verification.
//!
//! These vectors pin the hash construction and tree geometry so that every
//! implementation derives identical roots from identical content.

use serde::Serialize;

use blob_merkle_core::{hash_leaf, hash_sector, Sector, SectorId, SUBSECTOR_SIZE};

use crate::fixtures::{patterned_sector, uniform_sector, BlobFixture};

/// The content a golden vector hashes.
#[derive(Debug, Clone, Copy, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum VectorInput {
    /// A single leaf over raw bytes.
    Leaf(&'static [u8]),
    /// One all-zero subsector.
    ZeroSubsector,
    /// One all-zero sector.
    ZeroSector,
    /// A sector whose i-th subsector is filled with `i ^ xor`.
    PatternedSector { xor: u8 },
    /// A sector filled with one byte value.
    UniformSector { fill: u8 },
    /// An all-zero blob.
    EmptyBlob,
    /// An all-zero blob with a patterned sector written at `sector_id`.
    BlobWithPatternedSector { sector_id: SectorId },
}

/// A golden test vector.
#[derive(Debug, Clone, Serialize)]
pub struct GoldenVector {
    /// Human-readable name for the vector.
    pub name: &'static str,
    /// What gets hashed.
    pub input: VectorInput,
    /// Expected digest (hex).
    pub expected: &'static str,
}

/// Get all golden test vectors.
pub fn all_vectors() -> Vec<GoldenVector> {
    vec![
        GoldenVector {
            name: "leaf over abc",
            input: VectorInput::Leaf(b"abc"),
            expected: "bddd813c634239723171ef3fee98579b94964e3bb1cb3e427262c8c068d52319",
        },
        GoldenVector {
            name: "zero subsector",
            input: VectorInput::ZeroSubsector,
            expected: "686ede9288c391e7e05026e56f2f91bfd879987a040ea98445dabc76f55b8e5f",
        },
        GoldenVector {
            name: "zero sector",
            input: VectorInput::ZeroSector,
            expected: "532a12f09febf8521419959973ad5346944c2b22bf764d0e1a34255b6564fe4b",
        },
        GoldenVector {
            name: "patterned sector",
            input: VectorInput::PatternedSector { xor: 0 },
            expected: "34531614a0ef5d3891780fa563e16392c765bfa708cac5afdb118caf29357f15",
        },
        GoldenVector {
            name: "uniform 0x01 sector",
            input: VectorInput::UniformSector { fill: 0x01 },
            expected: "487cebd0c4987452f51d5fd3e241b79b53d97857d0c582ae4eadcbcf5e24e245",
        },
        GoldenVector {
            name: "empty blob",
            input: VectorInput::EmptyBlob,
            expected: "7d1e84e62d7ec9f6bc3f886675733da06daf0277ad8ffcf7c539938ca5ee9cf2",
        },
        GoldenVector {
            name: "patterned sector at 5",
            input: VectorInput::BlobWithPatternedSector { sector_id: 5 },
            expected: "29fc97957d7471164357ec47716b0da0b820d24c801d74f5d60592839908935f",
        },
        GoldenVector {
            name: "patterned sector at 255",
            input: VectorInput::BlobWithPatternedSector { sector_id: 255 },
            expected: "a3f3c0da41046de165a8d7e3089ff826208c8ad024bc60e49bc64f5f35261b67",
        },
    ]
}

/// Compute the digest a vector describes.
pub fn compute_vector(vector: &GoldenVector) -> blob_merkle_core::Digest {
    match vector.input {
        VectorInput::Leaf(data) => hash_leaf(data),
        VectorInput::ZeroSubsector => hash_leaf(&[0u8; SUBSECTOR_SIZE]),
        VectorInput::ZeroSector => hash_sector(&Sector::zeroed()),
        VectorInput::PatternedSector { xor } => hash_sector(&patterned_sector(xor)),
        VectorInput::UniformSector { fill } => hash_sector(&uniform_sector(fill)),
        VectorInput::EmptyBlob => BlobFixture::new().commit().root(),
        VectorInput::BlobWithPatternedSector { sector_id } => BlobFixture::new()
            .with_sector(sector_id, &patterned_sector(0))
            .commit()
            .root(),
    }
}

/// Verify all golden vectors.
///
/// Returns `(name, matches, computed_hex)` for each vector.
pub fn verify_all_vectors() -> Vec<(String, bool, String)> {
    all_vectors()
        .iter()
        .map(|v| {
            let hex = compute_vector(v).to_hex();
            let matches = hex == v.expected;
            (v.name.to_string(), matches, hex)
        })
        .collect()
}

/// All vectors as pretty JSON, for sharing with other implementations.
pub fn vectors_json() -> serde_json::Result<String> {
    serde_json::to_string_pretty(&all_vectors())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_vectors_match() {
        for (name, matches, hex) in verify_all_vectors() {
            assert!(matches, "vector '{name}' computed {hex}");
        }
    }

    #[test]
    fn test_vector_names_are_unique() {
        let vectors = all_vectors();
        let mut names: Vec<_> = vectors.iter().map(|v| v.name).collect();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), vectors.len());
    }

    #[test]
    fn test_vectors_serialize_to_json() {
        let json = vectors_json().unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&json).unwrap();
        let entries = parsed.as_array().unwrap();
        assert_eq!(entries.len(), all_vectors().len());
        assert_eq!(entries[3]["input"]["patterned_sector"]["xor"], 0);
        assert_eq!(
            entries[1]["expected"],
            "686ede9288c391e7e05026e56f2f91bfd879987a040ea98445dabc76f55b8e5f"
        );
    }
}
