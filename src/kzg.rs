use std::path::Path;

use ark_bls12_381::Fr;
use rust_kzg_bls12_381_primitives::{
    blob::Blob,
    domain::Domain,
    errors::KzgError,
    traits::{
        Bytes32, Bytes48, KzgCommitment, KzgProof, ReadFrFromBytes, SerializedScalar,
        WritePointToBytes,
    },
};
use rust_kzg_bls12_381_prover::{kzg::KZG, srs::CommitKey};
use rust_kzg_bls12_381_verifier::{batch, open_key::OpenKey, verify};
use tracing::debug;

use crate::trusted_setup::TrustedSetup;

/// Everything needed to commit, prove and verify: the evaluation domain and
/// both halves of the trusted setup. Read-only once built, so one instance
/// can be shared across threads.
///
/// Every operation takes and returns bytes. Inputs are fully decoded and
/// validated before any curve arithmetic runs.
#[derive(Debug, Clone, PartialEq)]
pub struct Context {
    kzg: KZG,
    commit_key: CommitKey,
    open_key: OpenKey,
}

impl Context {
    pub fn new(domain: Domain, commit_key: CommitKey, open_key: OpenKey) -> Self {
        Self {
            kzg: KZG::new(domain),
            commit_key,
            open_key,
        }
    }

    /// Builds a context from a parsed ceremony file and the computed domain.
    pub fn from_trusted_setup(setup: &TrustedSetup) -> Result<Self, KzgError> {
        let (commit_key, open_key) = setup.keys()?;
        let context = Self::new(Domain::new()?, commit_key, open_key);
        debug!("kzg context ready");
        Ok(context)
    }

    pub fn from_trusted_setup_file(path: impl AsRef<Path>) -> Result<Self, KzgError> {
        Self::from_trusted_setup(&TrustedSetup::from_file(path)?)
    }

    /// A context whose secret is known to the caller. For tests and benchmarks only.
    pub fn insecure(secret: &Fr) -> Result<Self, KzgError> {
        let domain = Domain::new()?;
        let commit_key = CommitKey::insecure_setup(&domain, secret)?;
        Ok(Self::new(domain, commit_key, OpenKey::insecure_setup(secret)))
    }

    pub fn domain(&self) -> &Domain {
        self.kzg.domain()
    }

    pub fn commit_key(&self) -> &CommitKey {
        &self.commit_key
    }

    pub fn open_key(&self) -> &OpenKey {
        &self.open_key
    }

    /// Commits to a blob.
    pub fn blob_to_kzg_commitment(&self, blob: &[u8]) -> Result<KzgCommitment, KzgError> {
        let blob = Blob::new(blob)?;
        self.kzg
            .commit_blob(&blob, &self.commit_key)?
            .to_compressed_bytes()
    }

    /// Opens the blob's polynomial at `z`, returning `(y, proof)`.
    pub fn compute_kzg_proof(
        &self,
        blob: &[u8],
        z: &Bytes32,
    ) -> Result<(SerializedScalar, KzgProof), KzgError> {
        let polynomial = Blob::new(blob)?.to_polynomial()?;
        let z = Fr::deserialize_from_bytes_le(z)?;
        let (y, proof) = self.kzg.compute_proof(&polynomial, &z, &self.commit_key)?;
        Ok((y.to_bytes_le(), proof.to_compressed_bytes()?))
    }

    /// Commits to the blob and opens it at its Fiat-Shamir challenge,
    /// returning `(y, commitment, proof)`.
    pub fn compute_blob_kzg_proof(
        &self,
        blob: &[u8],
    ) -> Result<(SerializedScalar, KzgCommitment, KzgProof), KzgError> {
        let blob = Blob::new(blob)?;
        let blob_proof = self.kzg.compute_blob_proof(&blob, &self.commit_key)?;
        Ok((
            blob_proof.value.to_bytes_le(),
            blob_proof.commitment.to_compressed_bytes()?,
            blob_proof.proof.to_compressed_bytes()?,
        ))
    }

    /// Checks that `proof` opens `commitment` to `y` at `z`.
    pub fn verify_kzg_proof(
        &self,
        commitment: &Bytes48,
        z: &Bytes32,
        y: &Bytes32,
        proof: &Bytes48,
    ) -> Result<bool, KzgError> {
        verify::verify_proof(&self.open_key, commitment, z, y, proof)
    }

    pub fn verify_blob_kzg_proof(
        &self,
        blob: &[u8],
        commitment: &Bytes48,
        proof: &Bytes48,
    ) -> Result<bool, KzgError> {
        verify::verify_blob_kzg_proof(self.domain(), &self.open_key, blob, commitment, proof)
    }

    /// Verifies many blob proofs at once. A `false` result does not say which
    /// proof failed; use [`Context::verify_blob_kzg_proof`] per item for that.
    pub fn verify_blob_kzg_proof_batch<B: AsRef<[u8]>>(
        &self,
        blobs: &[B],
        commitments: &[Bytes48],
        proofs: &[Bytes48],
    ) -> Result<bool, KzgError> {
        batch::verify_blob_kzg_proof_batch(self.domain(), &self.open_key, blobs, commitments, proofs)
    }
}
