use core::ops::{Add, Sub};

use ark_bls12_381::Fr;

use crate::{
    blob::Blob,
    consts::{BYTES_PER_BLOB, FIELD_ELEMENTS_PER_BLOB},
    errors::KzgError,
    traits::ReadFrFromBytes,
};

/// A polynomial of degree below [`FIELD_ELEMENTS_PER_BLOB`], represented by its
/// evaluations over the bit-reversed domain.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Polynomial {
    evaluations: Vec<Fr>,
}

impl Polynomial {
    /// Wraps exactly [`FIELD_ELEMENTS_PER_BLOB`] evaluations.
    pub fn new(evaluations: Vec<Fr>) -> Result<Self, KzgError> {
        if evaluations.len() != FIELD_ELEMENTS_PER_BLOB {
            return Err(KzgError::LengthMismatch(format!(
                "polynomial needs {FIELD_ELEMENTS_PER_BLOB} evaluations, got {}",
                evaluations.len()
            )));
        }
        Ok(Polynomial { evaluations })
    }

    /// Decodes each 32-byte chunk of the blob as a canonical scalar.
    pub fn from_blob(blob: &Blob) -> Result<Self, KzgError> {
        let evaluations = blob
            .chunks()
            .map(Fr::deserialize_from_bytes_le)
            .collect::<Result<Vec<_>, _>>()?;
        Polynomial::new(evaluations)
    }

    /// Serializes the evaluations back into a blob.
    pub fn to_blob(&self) -> Blob {
        let mut data = Vec::with_capacity(BYTES_PER_BLOB);
        for evaluation in &self.evaluations {
            data.extend_from_slice(&evaluation.to_bytes_le());
        }
        Blob::from_polynomial_bytes(data)
    }

    pub fn evaluations(&self) -> &[Fr] {
        &self.evaluations
    }

    pub fn get(&self, index: usize) -> Option<&Fr> {
        self.evaluations.get(index)
    }

    pub fn len(&self) -> usize {
        self.evaluations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.evaluations.is_empty()
    }

    /// Subtracts `constant` from every evaluation.
    pub fn sub_constant(&self, constant: &Fr) -> Polynomial {
        Polynomial {
            evaluations: self.evaluations.iter().map(|e| *e - constant).collect(),
        }
    }
}

impl Add for &Polynomial {
    type Output = Polynomial;

    fn add(self, rhs: &Polynomial) -> Polynomial {
        Polynomial {
            evaluations: self
                .evaluations
                .iter()
                .zip(&rhs.evaluations)
                .map(|(a, b)| *a + b)
                .collect(),
        }
    }
}

impl Sub for &Polynomial {
    type Output = Polynomial;

    fn sub(self, rhs: &Polynomial) -> Polynomial {
        Polynomial {
            evaluations: self
                .evaluations
                .iter()
                .zip(&rhs.evaluations)
                .map(|(a, b)| *a - b)
                .collect(),
        }
    }
}
