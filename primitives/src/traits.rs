use ark_bls12_381::{Fr, G1Affine, G2Affine};
use ark_ec::{
    short_weierstrass::{Affine, SWCurveConfig},
    AffineRepr,
};
use ark_ff::{BigInt, BigInteger, PrimeField};
use ark_serialize::{CanonicalDeserialize, CanonicalSerialize};

use crate::{
    consts::{BYTES_PER_FIELD_ELEMENT, SIZE_OF_G1_AFFINE_COMPRESSED, SIZE_OF_G2_AFFINE_COMPRESSED},
    errors::KzgError,
};

pub type Bytes32 = [u8; BYTES_PER_FIELD_ELEMENT];
pub type Bytes48 = [u8; SIZE_OF_G1_AFFINE_COMPRESSED];
pub type Bytes96 = [u8; SIZE_OF_G2_AFFINE_COMPRESSED];

/// A compressed G1 point committing to a polynomial.
pub type KzgCommitment = Bytes48;
/// A compressed G1 point committing to a quotient polynomial.
pub type KzgProof = Bytes48;
/// A canonical little-endian scalar.
pub type SerializedScalar = Bytes32;

/// Copies `bytes` into a fixed-size array, failing when the length is not exactly `N`.
pub fn bytes_from_slice<const N: usize>(bytes: &[u8]) -> Result<[u8; N], KzgError> {
    bytes.try_into().map_err(|_| KzgError::DecodeLengthMismatch {
        expected: N,
        got: bytes.len(),
    })
}

pub trait ReadPointFromBytes: AffineRepr + CanonicalDeserialize + CanonicalSerialize {
    /// Decodes a compressed point, rejecting bytes that are malformed, off the
    /// curve, or outside the prime-order subgroup.
    fn read_point_from_bytes_compressed(bytes: &[u8]) -> Result<Self, KzgError> {
        let expected = Self::zero().compressed_size();
        if bytes.len() != expected {
            return Err(KzgError::DecodeLengthMismatch {
                expected,
                got: bytes.len(),
            });
        }
        Self::deserialize_compressed(bytes)
            .map_err(|e| KzgError::InvalidPointEncoding(e.to_string()))
    }
}

// G1 and G2 share one impl: the two affine types are not provably distinct to coherence.
impl<P: SWCurveConfig> ReadPointFromBytes for Affine<P> {}

pub trait WritePointToBytes<const N: usize>: CanonicalSerialize {
    /// Encodes the point in the standard compressed form.
    fn to_compressed_bytes(&self) -> Result<[u8; N], KzgError> {
        let mut bytes = [0u8; N];
        self.serialize_compressed(&mut bytes[..])
            .map_err(|e| KzgError::SerializationError(e.to_string()))?;
        Ok(bytes)
    }
}

impl WritePointToBytes<SIZE_OF_G1_AFFINE_COMPRESSED> for G1Affine {}

impl WritePointToBytes<SIZE_OF_G2_AFFINE_COMPRESSED> for G2Affine {}

// Scalars travel as 32 little-endian bytes.
pub trait ReadFrFromBytes: PrimeField {
    /// Decodes a scalar, failing if the integer is not below the field modulus.
    fn deserialize_from_bytes_le(bytes: &[u8]) -> Result<Self, KzgError>;

    /// Interprets arbitrary bytes as a little-endian integer reduced modulo the field order.
    fn from_bytes_le_reduce(bytes: &[u8]) -> Self {
        Self::from_le_bytes_mod_order(bytes)
    }

    fn to_bytes_le(&self) -> SerializedScalar;
}

impl ReadFrFromBytes for Fr {
    fn deserialize_from_bytes_le(bytes: &[u8]) -> Result<Fr, KzgError> {
        let bytes: SerializedScalar = bytes_from_slice(bytes)?;
        let mut limbs = [0u64; 4];
        for (limb, chunk) in limbs.iter_mut().zip(bytes.chunks_exact(8)) {
            let mut word = [0u8; 8];
            word.copy_from_slice(chunk);
            *limb = u64::from_le_bytes(word);
        }
        Fr::from_bigint(BigInt::new(limbs)).ok_or_else(|| {
            KzgError::NonCanonicalValue("scalar is not less than the field modulus".to_string())
        })
    }

    fn to_bytes_le(&self) -> SerializedScalar {
        let mut out = [0u8; BYTES_PER_FIELD_ELEMENT];
        for (dst, src) in out.iter_mut().zip(self.into_bigint().to_bytes_le()) {
            *dst = src;
        }
        out
    }
}
