use ark_bls12_381::{Fr, G1Affine, G1Projective};
use ark_ec::{CurveGroup, PrimeGroup};
use ark_ff::{Field, One};
use rayon::prelude::*;
use rust_kzg_bls12_381_primitives::{
    consts::FIELD_ELEMENTS_PER_BLOB,
    domain::Domain,
    errors::KzgError,
    field::batch_invert,
    msm::{Accumulate, G1LinComb, Pippenger},
    polynomial::Polynomial,
    traits::{Bytes48, ReadPointFromBytes},
};
use tracing::debug;

/// The G1 side of the structured reference string.
///
/// Points are stored in Lagrange form over the bit-reversed domain, so a
/// polynomial in evaluation form commits with a single linear combination
/// of its evaluations against these points.
#[derive(Debug, PartialEq, Clone)]
pub struct CommitKey {
    g1: Vec<G1Affine>,
}

impl CommitKey {
    /// Wraps exactly [`FIELD_ELEMENTS_PER_BLOB`] points.
    pub fn new(g1: Vec<G1Affine>) -> Result<Self, KzgError> {
        if g1.len() != FIELD_ELEMENTS_PER_BLOB {
            return Err(KzgError::ConfigurationCorrupt(format!(
                "commit key needs {FIELD_ELEMENTS_PER_BLOB} G1 points, got {}",
                g1.len()
            )));
        }
        Ok(Self { g1 })
    }

    /// Decodes and validates compressed points in parallel.
    ///
    /// # Arguments
    ///
    /// * `points` - Compressed G1 points in bit-reversed Lagrange order.
    ///
    /// # Returns
    ///
    /// * `Result<CommitKey, KzgError>` - `ConfigurationCorrupt` if the count is
    ///   wrong, `InvalidPointEncoding` if any point fails validation.
    pub fn from_bytes(points: &[Bytes48]) -> Result<Self, KzgError> {
        if points.len() != FIELD_ELEMENTS_PER_BLOB {
            return Err(KzgError::ConfigurationCorrupt(format!(
                "commit key needs {FIELD_ELEMENTS_PER_BLOB} G1 points, got {}",
                points.len()
            )));
        }
        let g1 = points
            .par_iter()
            .map(|bytes| G1Affine::read_point_from_bytes_compressed(bytes))
            .collect::<Result<Vec<_>, _>>()?;
        debug!(points = g1.len(), "commit key decoded");
        Self::new(g1)
    }

    /// Derives a commit key from a known secret. For tests and benchmarks only:
    /// anyone holding `secret` can forge opening proofs.
    ///
    /// The i-th point is `Lᵢ(s)·G` with `Lᵢ(s) = ωᵢ·(sⁿ - 1) / (n·(s - ωᵢ))`.
    /// Fails with `DivisionByZero` if `secret` lies in the domain.
    pub fn insecure_setup(domain: &Domain, secret: &Fr) -> Result<Self, KzgError> {
        let denominators: Vec<Fr> = domain
            .roots_of_unity()
            .iter()
            .map(|root| *secret - root)
            .collect();
        let inverses = batch_invert(&denominators)?;
        let vanishing = (secret.pow([domain.len() as u64]) - Fr::one()) * domain.size_inv();

        let generator = G1Projective::generator();
        let points: Vec<G1Projective> = domain
            .roots_of_unity()
            .par_iter()
            .zip(inverses.par_iter())
            .map(|(root, inverse)| generator * (vanishing * root * inverse))
            .collect();
        Self::new(G1Projective::normalize_batch(&points))
    }

    pub fn g1(&self) -> &[G1Affine] {
        &self.g1
    }

    /// Commits over the scale-and-add path.
    pub fn commit(&self, polynomial: &Polynomial) -> Result<G1Projective, KzgError> {
        Accumulate::lincomb(&self.g1, polynomial.evaluations())
    }

    /// Commits over the Pippenger path.
    pub fn commit_unsafe(&self, polynomial: &Polynomial) -> Result<G1Projective, KzgError> {
        Pippenger::lincomb(&self.g1, polynomial.evaluations())
    }
}
