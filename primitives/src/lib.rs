//! Building blocks for KZG commitments over BLS12-381 on EIP-4844 blobs.
//!
//! Everything here is independent of the trusted setup: scalar and point
//! codecs, the pairing check, multi-scalar multiplication, the bit-reversed
//! evaluation domain, polynomials in evaluation form and the Fiat-Shamir
//! challenge derivation.

pub mod blob;
pub mod consts;
pub mod curve;
pub mod domain;
pub mod errors;
pub mod fiat_shamir;
pub mod field;
pub mod msm;
pub mod polynomial;
pub mod traits;
