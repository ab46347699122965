//! Verification of KZG opening proofs and EIP-4844 blob proofs over BLS12-381.

pub mod batch;
pub mod open_key;
pub mod verify;
