//! ## Library Design / Architecture
//!
//! The main purpose of this library is to commit to EIP-4844 blobs and to
//! generate and verify KZG opening proofs against those commitments, over
//! the BLS12-381 pairing-friendly curve.
//!
//! ### Data Types
//!
//! The main data pipeline goes:
//! > blob bytes -> [Blob] -> [Polynomial] -> KZG Commitment / Proof
//!
//! - Blob: 4096 field elements, each 32 little-endian bytes below the field
//!   modulus. Only the length is checked when the blob is built.
//! - Polynomial: the 4096 field elements read as evaluations of a polynomial
//!   over the 4096-th roots of unity, taken in bit-reversed order.
//! - Commit key: the Lagrange-basis G1 points of the trusted setup, in the
//!   same bit-reversed order, so a commitment is one multi-scalar
//!   multiplication against the evaluations.
//! - Open key: the G1 and G2 generators and the G2 point `s·G2`.
//!
//! The heavy lifting lives in three crates: `rust-kzg-bls12-381-primitives`
//! (field, curve, domain, polynomial, Fiat-Shamir), `rust-kzg-bls12-381-prover`
//! (commit key and proof computation) and `rust-kzg-bls12-381-verifier`
//! (opening key, single and batch verification). [kzg::Context] bundles
//! them behind a byte-level API.
//!
//! ## Examples
//!
//! ### Commit to a blob and verify its proof
//! ```rust,no_run
//! use rust_kzg_bls12_381::kzg::Context;
//!
//! let context = Context::from_trusted_setup_file("tests/test-files/trusted_setup.json").unwrap();
//!
//! let blob = vec![0u8; 4096 * 32];
//! let (_y, commitment, proof) = context.compute_blob_kzg_proof(&blob).unwrap();
//! assert!(context.verify_blob_kzg_proof(&blob, &commitment, &proof).unwrap());
//! ```

pub mod kzg;
pub mod trusted_setup;

pub use rust_kzg_bls12_381_primitives::{
    blob::Blob,
    consts,
    errors::KzgError,
    polynomial::Polynomial,
    traits::{Bytes32, Bytes48, Bytes96, KzgCommitment, KzgProof, SerializedScalar},
};
