use ark_bls12_381::Fr;
use ark_ff::One;
use sha2::{Digest, Sha256};

use crate::{
    blob::Blob,
    consts::{
        BYTES_PER_BLOB, CHALLENGE_DEGREE_BYTES, FIAT_SHAMIR_PROTOCOL_DOMAIN,
        FIELD_ELEMENTS_PER_BLOB, SIZE_OF_G1_AFFINE_COMPRESSED,
    },
    traits::{Bytes48, ReadFrFromBytes},
};

/// SHA-256 of `msg`, read as a little-endian integer and reduced modulo the field order.
pub fn hash_to_field_element(msg: &[u8]) -> Fr {
    let digest = Sha256::digest(msg);
    Fr::from_bytes_le_reduce(&digest)
}

/// Derives the evaluation point binding a blob to its commitment:
/// `H(domain separator ‖ LE16(n) ‖ blob ‖ commitment)`.
///
/// The commitment enters the transcript as the caller supplied it, so prover
/// and verifier must hash the same 48 bytes.
pub fn compute_challenge(blob: &Blob, commitment: &Bytes48) -> Fr {
    let challenge_input_size = FIAT_SHAMIR_PROTOCOL_DOMAIN.len()
        + CHALLENGE_DEGREE_BYTES
        + BYTES_PER_BLOB
        + SIZE_OF_G1_AFFINE_COMPRESSED;

    let mut digest_bytes = Vec::with_capacity(challenge_input_size);
    digest_bytes.extend_from_slice(FIAT_SHAMIR_PROTOCOL_DOMAIN);
    digest_bytes.extend_from_slice(&(FIELD_ELEMENTS_PER_BLOB as u128).to_le_bytes());
    digest_bytes.extend_from_slice(blob.data());
    digest_bytes.extend_from_slice(commitment);

    hash_to_field_element(&digest_bytes)
}

/// Returns `[base^0, base^1, ..., base^(count-1)]`.
pub fn compute_powers(base: &Fr, count: usize) -> Vec<Fr> {
    let mut powers = Vec::with_capacity(count);
    let mut current = Fr::one();
    for _ in 0..count {
        powers.push(current);
        current *= base;
    }
    powers
}
