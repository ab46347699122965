use ark_bls12_381::{Fr, G1Affine, G1Projective};
use ark_ff::UniformRand;
use rayon::prelude::*;
use rust_kzg_bls12_381_primitives::{
    blob::Blob,
    curve::{g1_mul, pairing_check},
    domain::Domain,
    errors::KzgError,
    fiat_shamir::compute_powers,
    msm::{g1_lincomb, g1_lincomb_proj},
    traits::{Bytes48, ReadPointFromBytes},
};
use tracing::debug;

use crate::{open_key::OpenKey, verify::compute_challenge_and_evaluate};

fn check_batch_lengths(lengths: &[(&str, usize)]) -> Result<(), KzgError> {
    let expected = lengths.first().map_or(0, |(_, len)| *len);
    if lengths.iter().any(|(_, len)| *len != expected) {
        let described: Vec<String> = lengths
            .iter()
            .map(|(name, len)| format!("{name}={len}"))
            .collect();
        return Err(KzgError::LengthMismatch(format!(
            "batch inputs differ in length: {}",
            described.join(", ")
        )));
    }
    Ok(())
}

/// Verifies multiple KZG openings with one pairing check.
///
/// Draws a fresh random `r` from the thread-local CSPRNG and checks
/// `e(Σ rᵏ·πₖ, -α·G2) · e(Σ rᵏ·(Cₖ - yₖ·G1) + Σ rᵏ·zₖ·πₖ, G2) == 1`.
///
/// # Arguments
///
/// * `commitments` - A slice of `G1Affine` commitments.
/// * `zs` - A slice of `Fr` elements representing z values.
/// * `ys` - A slice of `Fr` elements representing y values.
/// * `proofs` - A slice of `G1Affine` proofs.
///
/// # Returns
///
/// * `Ok(true)` if all proofs are valid. An empty batch is valid.
/// * `Ok(false)` if any proof is invalid.
/// * `Err(KzgError::LengthMismatch)` if the slices differ in length.
pub fn verify_kzg_proof_batch_impl(
    open_key: &OpenKey,
    commitments: &[G1Affine],
    zs: &[Fr],
    ys: &[Fr],
    proofs: &[G1Affine],
) -> Result<bool, KzgError> {
    let r = Fr::rand(&mut rand::thread_rng());
    verify_kzg_proof_batch_with_randomness(open_key, commitments, zs, ys, proofs, &r)
}

/// Same as [`verify_kzg_proof_batch_impl`] with a caller-chosen `r`.
///
/// Soundness relies on `r` being unpredictable to whoever produced the proofs.
pub fn verify_kzg_proof_batch_with_randomness(
    open_key: &OpenKey,
    commitments: &[G1Affine],
    zs: &[Fr],
    ys: &[Fr],
    proofs: &[G1Affine],
    r: &Fr,
) -> Result<bool, KzgError> {
    check_batch_lengths(&[
        ("commitments", commitments.len()),
        ("zs", zs.len()),
        ("ys", ys.len()),
        ("proofs", proofs.len()),
    ])?;
    let n = commitments.len();
    debug!(batch_size = n, "verifying kzg proof batch");

    // [r^0, r^1, ..., r^(n-1)]
    let r_powers = compute_powers(r, n);

    // Σ(r^i * proof_i)
    let proof_lincomb = g1_lincomb(proofs, &r_powers)?;

    // C_i - [y_i] and r^i * z_i
    let c_minus_y: Vec<G1Projective> = commitments
        .iter()
        .zip(ys)
        .map(|(commitment, y)| G1Projective::from(*commitment) - g1_mul(open_key.g1_gen(), y))
        .collect();
    let r_times_z: Vec<Fr> = r_powers.iter().zip(zs).map(|(r_i, z)| *r_i * z).collect();

    // Σ(r^i * z_i * proof_i) and Σ(r^i * (C_i - [y_i]))
    let proof_z_lincomb = g1_lincomb(proofs, &r_times_z)?;
    let c_minus_y_lincomb = g1_lincomb_proj(&c_minus_y, &r_powers)?;

    let rhs_g1 = c_minus_y_lincomb + proof_z_lincomb;

    Ok(pairing_check(&[
        (proof_lincomb, -*open_key.alpha_g2()),
        (rhs_g1, *open_key.g2_gen()),
    ]))
}

/// Batch verification of blob proofs over decoded inputs. Each blob's
/// challenge and evaluation are derived exactly as in single blob
/// verification, then all openings are checked together.
pub fn verify_blob_kzg_proof_batch_impl(
    domain: &Domain,
    open_key: &OpenKey,
    blobs: &[Blob],
    commitments: &[G1Affine],
    proofs: &[G1Affine],
) -> Result<bool, KzgError> {
    check_batch_lengths(&[
        ("blobs", blobs.len()),
        ("commitments", commitments.len()),
        ("proofs", proofs.len()),
    ])?;

    let (zs, ys): (Vec<Fr>, Vec<Fr>) = blobs
        .par_iter()
        .zip(commitments.par_iter())
        .map(|(blob, commitment)| compute_challenge_and_evaluate(domain, blob, commitment))
        .collect::<Result<Vec<_>, _>>()?
        .into_iter()
        .unzip();

    verify_kzg_proof_batch_impl(open_key, commitments, &zs, &ys, proofs)
}

/// Ref: https://github.com/ethereum/consensus-specs/blob/master/specs/deneb/polynomial-commitments.md#verify_blob_kzg_proof_batch
/// Batch verification of blob proofs from bytes. Lengths are checked first,
/// then every blob, commitment and proof is decoded before any pairing work.
pub fn verify_blob_kzg_proof_batch<B: AsRef<[u8]>>(
    domain: &Domain,
    open_key: &OpenKey,
    blobs_bytes: &[B],
    commitments_compressed: &[Bytes48],
    proofs_compressed: &[Bytes48],
) -> Result<bool, KzgError> {
    check_batch_lengths(&[
        ("blobs", blobs_bytes.len()),
        ("commitments", commitments_compressed.len()),
        ("proofs", proofs_compressed.len()),
    ])?;

    let blobs = blobs_bytes
        .iter()
        .map(|blob| Blob::new(blob.as_ref()))
        .collect::<Result<Vec<Blob>, KzgError>>()?;
    let commitments = commitments_compressed
        .iter()
        .map(|commitment| G1Affine::read_point_from_bytes_compressed(commitment))
        .collect::<Result<Vec<G1Affine>, KzgError>>()?;
    let proofs = proofs_compressed
        .iter()
        .map(|proof| G1Affine::read_point_from_bytes_compressed(proof))
        .collect::<Result<Vec<G1Affine>, KzgError>>()?;

    verify_blob_kzg_proof_batch_impl(domain, open_key, &blobs, &commitments, &proofs)
}
