use ark_bls12_381::{Fr, G1Affine};
use ark_ec::CurveGroup;
use rayon::prelude::*;
use rust_kzg_bls12_381_primitives::{
    blob::Blob,
    domain::Domain,
    errors::KzgError,
    fiat_shamir::compute_challenge,
    field::batch_invert,
    polynomial::Polynomial,
    traits::{KzgCommitment, WritePointToBytes},
};
use tracing::debug;

use crate::srs::CommitKey;

/// Main interesting struct of the prover crate.
/// [KZG] holds the evaluation domain and provides methods for committing to
/// a [Blob] or [Polynomial] and computing opening proofs against a [CommitKey].
#[derive(Debug, PartialEq, Clone)]
pub struct KZG {
    domain: Domain,
}

/// Output of [KZG::compute_blob_proof].
#[derive(Debug, PartialEq, Clone)]
pub struct BlobProof {
    /// The polynomial evaluated at the Fiat-Shamir challenge.
    pub value: Fr,
    pub commitment: G1Affine,
    pub proof: G1Affine,
}

impl KZG {
    pub fn new(domain: Domain) -> Self {
        Self { domain }
    }

    pub fn domain(&self) -> &Domain {
        &self.domain
    }

    /// Commit to a polynomial in evaluation form.
    pub fn commit_polynomial(
        &self,
        polynomial: &Polynomial,
        commit_key: &CommitKey,
    ) -> Result<G1Affine, KzgError> {
        Ok(commit_key.commit_unsafe(polynomial)?.into_affine())
    }

    /// commit to a [Blob], by transforming it into a [Polynomial] and
    /// then calling [KZG::commit_polynomial].
    pub fn commit_blob(&self, blob: &Blob, commit_key: &CommitKey) -> Result<G1Affine, KzgError> {
        let polynomial = blob.to_polynomial()?;
        self.commit_polynomial(&polynomial, commit_key)
    }

    /// Compute a KZG opening proof for `polynomial` at `z_fr`.
    ///
    /// # Returns
    ///
    /// * `(y, proof)` where `y = p(z)` and `proof` commits to the quotient
    ///   `q(x) = (p(x) - y) / (x - z)`.
    pub fn compute_proof(
        &self,
        polynomial: &Polynomial,
        z_fr: &Fr,
        commit_key: &CommitKey,
    ) -> Result<(Fr, G1Affine), KzgError> {
        self.compute_proof_impl(polynomial, z_fr, commit_key)
    }

    fn compute_proof_impl(
        &self,
        polynomial: &Polynomial,
        z_fr: &Fr,
        commit_key: &CommitKey,
    ) -> Result<(Fr, G1Affine), KzgError> {
        let roots_of_unity = self.domain.roots_of_unity();

        // y = p(z)
        let y_fr = self
            .domain
            .evaluate_polynomial_in_evaluation_form(polynomial, z_fr)?;

        // Numerator p(x) - y at each root of unity
        let poly_shift = polynomial.sub_constant(&y_fr);

        // Denominator x - z at each root of unity
        let mut denom_poly: Vec<Fr> = roots_of_unity.iter().map(|root| *root - z_fr).collect();

        // The denominator vanishes where z is itself a root; park a 1 there so
        // the batch inversion goes through, the slot is overwritten below.
        let z_index = self.domain.find_index_of_element(z_fr);
        if let Some(index) = z_index {
            denom_poly[index] = Fr::from(1u64);
        }
        let denom_inv = batch_invert(&denom_poly)?;

        let mut quotient_poly: Vec<Fr> = poly_shift
            .evaluations()
            .par_iter()
            .zip(denom_inv.par_iter())
            .map(|(numerator, inverse)| *numerator * inverse)
            .collect();

        if let Some(index) = z_index {
            quotient_poly[index] =
                self.compute_quotient_eval_on_domain(index, polynomial.evaluations(), &y_fr)?;
        }
        debug!(in_domain = z_index.is_some(), "computed quotient polynomial");

        let quotient = Polynomial::new(quotient_poly)?;
        let proof = self.commit_polynomial(&quotient, commit_key)?;
        Ok((y_fr, proof))
    }

    /// Evaluates the quotient at the root `ω_m` where `(x - z)` vanishes:
    /// `q(ω_m) = Σ_{i≠m} (fᵢ - y)·ωᵢ / (ω_m·(ω_m - ωᵢ))`.
    pub fn compute_quotient_eval_on_domain(
        &self,
        z_index: usize,
        eval_fr: &[Fr],
        value_fr: &Fr,
    ) -> Result<Fr, KzgError> {
        let roots_of_unity = self.domain.roots_of_unity();
        let z_fr = roots_of_unity.get(z_index).ok_or_else(|| {
            KzgError::LengthMismatch(format!(
                "root index {z_index} outside domain of size {}",
                roots_of_unity.len()
            ))
        })?;

        let (omegas, numerators): (Vec<Fr>, Vec<Fr>) = roots_of_unity
            .iter()
            .zip(eval_fr)
            .enumerate()
            .filter(|(i, _)| *i != z_index)
            .map(|(_, (omega_i, f_i))| (*omega_i, (*f_i - value_fr) * omega_i))
            .unzip();

        let denominators: Vec<Fr> = omegas
            .iter()
            .map(|omega_i| *z_fr * (*z_fr - omega_i))
            .collect();
        let inverses = batch_invert(&denominators)?;

        Ok(numerators
            .iter()
            .zip(&inverses)
            .map(|(numerator, inverse)| *numerator * inverse)
            .sum())
    }

    /// Commits to the blob, derives the Fiat-Shamir challenge from the blob and
    /// the encoded commitment, and opens the polynomial at that challenge.
    pub fn compute_blob_proof(
        &self,
        blob: &Blob,
        commit_key: &CommitKey,
    ) -> Result<BlobProof, KzgError> {
        let blob_poly = blob.to_polynomial()?;
        let commitment = self.commit_polynomial(&blob_poly, commit_key)?;
        let commitment_bytes: KzgCommitment = commitment.to_compressed_bytes()?;

        let evaluation_challenge = compute_challenge(blob, &commitment_bytes);
        let (value, proof) = self.compute_proof_impl(&blob_poly, &evaluation_challenge, commit_key)?;
        Ok(BlobProof {
            value,
            commitment,
            proof,
        })
    }
}
