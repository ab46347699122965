use std::{fs, path::Path};

use ark_ec::CurveGroup;
use rust_kzg_bls12_381_primitives::{
    consts::{SIZE_OF_G1_AFFINE_COMPRESSED, SIZE_OF_G2_AFFINE_COMPRESSED},
    curve::g1_generator,
    domain::reverse_bit_order,
    errors::KzgError,
    traits::{bytes_from_slice, Bytes48, WritePointToBytes},
};
use rust_kzg_bls12_381_prover::srs::CommitKey;
use rust_kzg_bls12_381_verifier::open_key::OpenKey;
use serde::{Deserialize, Serialize};
use tracing::info;

/// The Ethereum KZG ceremony output as published in `trusted_setup.json`.
///
/// `g1_lagrange` holds the Lagrange-basis G1 points in natural order and
/// `g2_monomial` the powers `[G2, s·G2, ...]`. Other keys are ignored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrustedSetup {
    pub g1_lagrange: Vec<String>,
    pub g2_monomial: Vec<String>,
}

fn decode_hex<const N: usize>(encoded: &str) -> Result<[u8; N], KzgError> {
    let trimmed = encoded.strip_prefix("0x").unwrap_or(encoded);
    let bytes = hex::decode(trimmed)
        .map_err(|e| KzgError::SetupLoadError(format!("invalid hex point: {e}")))?;
    bytes_from_slice(&bytes)
}

impl TrustedSetup {
    pub fn from_json_str(json: &str) -> Result<Self, KzgError> {
        serde_json::from_str(json).map_err(|e| KzgError::SetupLoadError(e.to_string()))
    }

    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, KzgError> {
        let path = path.as_ref();
        let json = fs::read_to_string(path)
            .map_err(|e| KzgError::SetupLoadError(format!("{}: {e}", path.display())))?;
        Self::from_json_str(&json)
    }

    /// Decodes and validates the G1 points, then permutes them into the
    /// bit-reversed order of the evaluation domain.
    pub fn commit_key(&self) -> Result<CommitKey, KzgError> {
        let mut points = self
            .g1_lagrange
            .iter()
            .map(|point| decode_hex::<SIZE_OF_G1_AFFINE_COMPRESSED>(point))
            .collect::<Result<Vec<Bytes48>, _>>()?;
        if !points.len().is_power_of_two() {
            return Err(KzgError::ConfigurationCorrupt(format!(
                "g1_lagrange has {} points",
                points.len()
            )));
        }
        reverse_bit_order(&mut points);
        CommitKey::from_bytes(&points)
    }

    /// Builds the opening key from the G1 generator and the first two G2 powers.
    pub fn open_key(&self) -> Result<OpenKey, KzgError> {
        let [g2_gen, alpha_g2] = match self.g2_monomial.as_slice() {
            [first, second, ..] => [first, second],
            _ => {
                return Err(KzgError::ConfigurationCorrupt(format!(
                    "g2_monomial needs at least 2 points, got {}",
                    self.g2_monomial.len()
                )))
            },
        };
        let g1_gen = g1_generator().into_affine().to_compressed_bytes()?;
        OpenKey::from_bytes(
            &g1_gen,
            &decode_hex::<SIZE_OF_G2_AFFINE_COMPRESSED>(g2_gen)?,
            &decode_hex::<SIZE_OF_G2_AFFINE_COMPRESSED>(alpha_g2)?,
        )
    }

    /// Converts the setup into both keys, logging the point counts.
    pub fn keys(&self) -> Result<(CommitKey, OpenKey), KzgError> {
        let commit_key = self.commit_key()?;
        let open_key = self.open_key()?;
        info!(
            g1_points = self.g1_lagrange.len(),
            g2_points = self.g2_monomial.len(),
            "loaded trusted setup"
        );
        Ok((commit_key, open_key))
    }
}
