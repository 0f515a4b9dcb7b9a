//! # Blob Merkle Testkit
//!
//! Testing utilities for blob Merkle commitments.
//!
//! ## Overview
//!
//! This crate provides:
//!
//! - **Golden vectors**: Known digests for cross-implementation verification
//! - **Generators**: Proptest strategies for property-based testing
//! - **Fixtures**: Deterministic sectors and whole-blob builders
//!
//! ## Golden Vectors
//!
//! ```rust,no_run
//! use blob_merkle_testkit::vectors::verify_all_vectors;
//!
//! for (name, matches, hex) in verify_all_vectors() {
//!     println!("{name}: {hex} ({})", if matches { "ok" } else { "MISMATCH" });
//! }
//! ```
//!
//! ## Property Testing
//!
//! ```rust,ignore
//! use proptest::prelude::*;
//! use blob_merkle_testkit::generators::{merkle_base, sector_id};
//!
//! proptest! {
//!     #[test]
//!     fn diff_with_self_is_empty(base in merkle_base(16)) {
//!         prop_assert!(base.diff(&base).is_empty());
//!     }
//! }
//! ```
//!
//! ## Test Fixtures
//!
//! ```rust
//! use blob_merkle_testkit::fixtures::{patterned_sector, BlobFixture};
//!
//! let fixture = BlobFixture::new().with_sector(5, &patterned_sector(0));
//! assert_eq!(fixture.written(), &[5]);
//! ```

pub mod fixtures;
pub mod generators;
pub mod vectors;

pub use fixtures::{patterned_sector, random_sector, uniform_sector, BlobFixture};
pub use generators::{digest, merkle_base, sector_id, sector_proof, sparse_sector};
pub use vectors::{all_vectors, compute_vector, verify_all_vectors, GoldenVector, VectorInput};
