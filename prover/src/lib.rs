//! Commitments and opening proofs for EIP-4844 blobs over BLS12-381.

pub mod kzg;
pub mod srs;
