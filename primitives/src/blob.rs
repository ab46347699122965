use serde::{Deserialize, Serialize};

use crate::{
    consts::{BYTES_PER_BLOB, BYTES_PER_FIELD_ELEMENT},
    errors::KzgError,
    polynomial::Polynomial,
};

/// An EIP-4844 blob: exactly [`BYTES_PER_BLOB`] bytes, read as consecutive
/// 32-byte little-endian field elements.
///
/// Construction only checks the length. Canonicity of the field elements is
/// checked when the blob is turned into a [`Polynomial`].
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<u8>", into = "Vec<u8>")]
pub struct Blob {
    /// The binary data contained within the blob.
    blob_data: Vec<u8>,
}

impl Blob {
    /// Creates a new `Blob` from the given bytes.
    pub fn new(blob_data: &[u8]) -> Result<Self, KzgError> {
        if blob_data.len() != BYTES_PER_BLOB {
            return Err(KzgError::DecodeLengthMismatch {
                expected: BYTES_PER_BLOB,
                got: blob_data.len(),
            });
        }
        Ok(Blob {
            blob_data: blob_data.to_vec(),
        })
    }

    // Only called with data produced by encoding a full polynomial.
    pub(crate) fn from_polynomial_bytes(blob_data: Vec<u8>) -> Self {
        debug_assert_eq!(blob_data.len(), BYTES_PER_BLOB);
        Blob { blob_data }
    }

    /// Returns the blob data
    pub fn data(&self) -> &[u8] {
        &self.blob_data
    }

    pub fn len(&self) -> usize {
        self.blob_data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.blob_data.is_empty()
    }

    /// Iterates over the 32-byte field element encodings.
    pub fn chunks(&self) -> impl Iterator<Item = &[u8]> {
        self.blob_data.chunks_exact(BYTES_PER_FIELD_ELEMENT)
    }

    /// Converts the blob into a polynomial in evaluation form, failing on the
    /// first non-canonical field element.
    pub fn to_polynomial(&self) -> Result<Polynomial, KzgError> {
        Polynomial::from_blob(self)
    }
}

impl TryFrom<Vec<u8>> for Blob {
    type Error = KzgError;

    fn try_from(blob_data: Vec<u8>) -> Result<Self, Self::Error> {
        if blob_data.len() != BYTES_PER_BLOB {
            return Err(KzgError::DecodeLengthMismatch {
                expected: BYTES_PER_BLOB,
                got: blob_data.len(),
            });
        }
        Ok(Blob { blob_data })
    }
}

impl From<Blob> for Vec<u8> {
    fn from(blob: Blob) -> Self {
        blob.blob_data
    }
}
