use ark_bls12_381::{Fr, G1Affine, G1Projective, G2Affine, G2Projective};
use rust_kzg_bls12_381_primitives::{
    curve::{g1_generator, g1_mul, g2_generator, g2_mul, pairing_check},
    errors::KzgError,
    traits::{Bytes48, Bytes96, ReadPointFromBytes},
};

/// The G2 side of the structured reference string: the G1 and G2 generators
/// and the secret-shifted G2 generator `α·G2`.
#[derive(Debug, PartialEq, Eq, Clone)]
pub struct OpenKey {
    g1_gen: G1Projective,
    g2_gen: G2Projective,
    alpha_g2: G2Projective,
}

impl OpenKey {
    pub fn new(g1_gen: G1Projective, g2_gen: G2Projective, alpha_g2: G2Projective) -> Self {
        Self {
            g1_gen,
            g2_gen,
            alpha_g2,
        }
    }

    /// Decodes and validates the three compressed points.
    pub fn from_bytes(
        g1_gen: &Bytes48,
        g2_gen: &Bytes96,
        alpha_g2: &Bytes96,
    ) -> Result<Self, KzgError> {
        Ok(Self::new(
            G1Affine::read_point_from_bytes_compressed(g1_gen)?.into(),
            G2Affine::read_point_from_bytes_compressed(g2_gen)?.into(),
            G2Affine::read_point_from_bytes_compressed(alpha_g2)?.into(),
        ))
    }

    /// Opening key matching a commit key built from the same known secret.
    /// For tests and benchmarks only.
    pub fn insecure_setup(secret: &Fr) -> Self {
        Self::new(g1_generator(), g2_generator(), g2_mul(&g2_generator(), secret))
    }

    pub fn g1_gen(&self) -> &G1Projective {
        &self.g1_gen
    }

    pub fn g2_gen(&self) -> &G2Projective {
        &self.g2_gen
    }

    pub fn alpha_g2(&self) -> &G2Projective {
        &self.alpha_g2
    }

    /// Checks a single opening `p(z) = y` against `commitment`:
    /// `e(-proof, α·G2 - z·G2) · e(commitment - y·G1, G2) == 1`.
    pub fn verify(&self, commitment: &G1Projective, z: &Fr, y: &Fr, proof: &G1Projective) -> bool {
        let x_minus_z = self.alpha_g2 - g2_mul(&self.g2_gen, z);
        let commitment_minus_y = *commitment - g1_mul(&self.g1_gen, y);
        pairing_check(&[(-*proof, x_minus_z), (commitment_minus_y, self.g2_gen)])
    }
}
