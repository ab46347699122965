use ark_bls12_381::{Fr, G1Affine};
use rust_kzg_bls12_381_primitives::{
    blob::Blob,
    domain::Domain,
    errors::KzgError,
    fiat_shamir::compute_challenge,
    traits::{Bytes32, Bytes48, ReadFrFromBytes, ReadPointFromBytes, WritePointToBytes},
};

use crate::open_key::OpenKey;

/// This function performs verification of a KZG proof where the commitment, proof,
/// evaluation value, and evaluation point are provided as decoded curve points
/// and field elements.
///
/// # Arguments
///
/// * `open_key` - The opening key from the trusted setup
/// * `commitment` - The KZG commitment to the polynomial
/// * `proof` - The KZG proof for the evaluation
/// * `value_fr` - The claimed polynomial value at the evaluation point
/// * `z_fr` - The evaluation point
///
/// # Returns
///
/// * `true` if the proof is valid, `false` otherwise
///
/// # Examples
///
/// ```rust,no_run
/// use rust_kzg_bls12_381_verifier::{open_key::OpenKey, verify::verify_proof_impl};
/// use ark_bls12_381::{Fr, G1Affine};
/// use ark_ec::AffineRepr;
/// use ark_ff::One;
///
/// let open_key = OpenKey::insecure_setup(&Fr::from(42u64));
/// let commitment = G1Affine::generator(); // Example commitment
/// let proof = G1Affine::generator();      // Example proof
/// let value = Fr::one();                  // Claimed polynomial value
/// let z = Fr::one();                      // Evaluation point
///
/// if verify_proof_impl(&open_key, &commitment, &proof, &value, &z) {
///     println!("Proof is valid!");
/// }
/// ```
pub fn verify_proof_impl(
    open_key: &OpenKey,
    commitment: &G1Affine,
    proof: &G1Affine,
    value_fr: &Fr,
    z_fr: &Fr,
) -> bool {
    open_key.verify(&(*commitment).into(), z_fr, value_fr, &(*proof).into())
}

/// This function performs verification of a KZG proof where the commitment,
/// proof, evaluation value, and evaluation point are provided as bytes. Points
/// are compressed, scalars are canonical little-endian. All four inputs are
/// decoded before any pairing work.
///
/// # Returns
///
/// * `Ok(true)` - If the proof is valid and verification succeeds
/// * `Ok(false)` - If the proof is invalid but all inputs decoded
/// * `Err(KzgError)` - If any input fails to decode
///
/// # References
///
/// * [Ethereum Consensus Specs - KZG Proof Verification](https://github.com/ethereum/consensus-specs/blob/master/specs/deneb/polynomial-commitments.md#verify_kzg_proof)
pub fn verify_proof(
    open_key: &OpenKey,
    commitment: &Bytes48,
    z_fr: &Bytes32,
    value_fr: &Bytes32,
    proof: &Bytes48,
) -> Result<bool, KzgError> {
    let commitment = G1Affine::read_point_from_bytes_compressed(commitment)?;
    let z_fr = Fr::deserialize_from_bytes_le(z_fr)?;
    let value_fr = Fr::deserialize_from_bytes_le(value_fr)?;
    let proof = G1Affine::read_point_from_bytes_compressed(proof)?;
    Ok(verify_proof_impl(open_key, &commitment, &proof, &value_fr, &z_fr))
}

/// Returns the Fiat-Shamir challenge for `(blob, commitment)` and the blob's
/// polynomial evaluated there.
pub(crate) fn compute_challenge_and_evaluate(
    domain: &Domain,
    blob: &Blob,
    commitment: &G1Affine,
) -> Result<(Fr, Fr), KzgError> {
    let polynomial = blob.to_polynomial()?;
    let commitment_bytes = commitment.to_compressed_bytes()?;
    let z_fr = compute_challenge(blob, &commitment_bytes);
    let y_fr = domain.evaluate_polynomial_in_evaluation_form(&polynomial, &z_fr)?;
    Ok((z_fr, y_fr))
}

/// Verifies a blob proof over decoded inputs: re-derives the challenge from
/// the blob and commitment, evaluates the blob there, and checks the opening.
pub fn verify_blob_kzg_proof_impl(
    domain: &Domain,
    open_key: &OpenKey,
    blob: &Blob,
    commitment: &G1Affine,
    proof: &G1Affine,
) -> Result<bool, KzgError> {
    let (z_fr, y_fr) = compute_challenge_and_evaluate(domain, blob, commitment)?;
    Ok(verify_proof_impl(open_key, commitment, proof, &y_fr, &z_fr))
}

/// This function performs verification of a KZG proof for a blob where the
/// blob data, commitment, and proof are provided as bytes.
///
/// # Returns
///
/// * `Ok(true)` - If the proof is valid and verification succeeds
/// * `Ok(false)` - If the proof is invalid but all inputs decoded
/// * `Err(KzgError)` - If the blob length, a blob element, or a point fails to decode
///
/// # References
///
/// * [Ethereum Consensus Specs - Blob Proof Verification](https://github.com/ethereum/consensus-specs/blob/master/specs/deneb/polynomial-commitments.md#verify_blob_kzg_proof)
pub fn verify_blob_kzg_proof(
    domain: &Domain,
    open_key: &OpenKey,
    blob: &[u8],
    commitment: &Bytes48,
    proof: &Bytes48,
) -> Result<bool, KzgError> {
    let blob = Blob::new(blob)?;
    let commitment = G1Affine::read_point_from_bytes_compressed(commitment)?;
    let proof = G1Affine::read_point_from_bytes_compressed(proof)?;
    verify_blob_kzg_proof_impl(domain, open_key, &blob, &commitment, &proof)
}
