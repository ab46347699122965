use std::collections::BTreeSet;

use ark_bls12_381::Fr;
use ark_ff::{Field, One};
use ark_poly::{EvaluationDomain, Radix2EvaluationDomain};
use rayon::prelude::*;
use tracing::trace;

use crate::{
    consts::FIELD_ELEMENTS_PER_BLOB,
    errors::KzgError,
    field::{batch_invert, invert},
    polynomial::Polynomial,
    traits::{Bytes32, ReadFrFromBytes},
};

/// The `n`-th roots of unity in bit-reversed order, together with `n` and `1/n`
/// as field elements.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Domain {
    roots_of_unity: Vec<Fr>,
    size: Fr,
    size_inv: Fr,
}

/// Permutes `values` so that index `i` holds the element previously at the
/// bit-reversal of `i`. The length must be a power of two.
pub fn reverse_bit_order<T>(values: &mut [T]) {
    let n = values.len();
    if n <= 1 {
        return;
    }
    let bits = n.trailing_zeros();
    for i in 0..n {
        let j = i.reverse_bits() >> (usize::BITS - bits);
        if i < j {
            values.swap(i, j);
        }
    }
}

impl Domain {
    /// Computes the production domain: the radix-2 subgroup of size
    /// [`FIELD_ELEMENTS_PER_BLOB`] in bit-reversed order, starting at 1.
    pub fn new() -> Result<Self, KzgError> {
        let radix2 = Radix2EvaluationDomain::<Fr>::new(FIELD_ELEMENTS_PER_BLOB).ok_or_else(|| {
            KzgError::ConfigurationCorrupt(format!(
                "no radix-2 domain of size {FIELD_ELEMENTS_PER_BLOB}"
            ))
        })?;
        let mut roots: Vec<Fr> = radix2.elements().collect();
        reverse_bit_order(&mut roots);
        Self::from_roots_of_unity(roots)
    }

    /// Builds a domain from an externally supplied root table.
    ///
    /// The table must hold exactly [`FIELD_ELEMENTS_PER_BLOB`] pairwise distinct
    /// `n`-th roots of unity with the identity first.
    pub fn from_roots_of_unity(roots_of_unity: Vec<Fr>) -> Result<Self, KzgError> {
        let n = FIELD_ELEMENTS_PER_BLOB;
        if roots_of_unity.len() != n {
            return Err(KzgError::ConfigurationCorrupt(format!(
                "expected {n} roots of unity, got {}",
                roots_of_unity.len()
            )));
        }
        if !roots_of_unity[0].is_one() {
            return Err(KzgError::ConfigurationCorrupt(
                "first root of unity is not 1".to_string(),
            ));
        }
        if let Some(i) = roots_of_unity
            .iter()
            .position(|root| !root.pow([n as u64]).is_one())
        {
            return Err(KzgError::ConfigurationCorrupt(format!(
                "element {i} is not an {n}-th root of unity"
            )));
        }
        let distinct: BTreeSet<&Fr> = roots_of_unity.iter().collect();
        if distinct.len() != n {
            return Err(KzgError::ConfigurationCorrupt(
                "roots of unity are not distinct".to_string(),
            ));
        }

        let size = Fr::from(n as u64);
        let size_inv = invert(&size)?;
        trace!(size = n, "domain constructed");
        Ok(Domain {
            roots_of_unity,
            size,
            size_inv,
        })
    }

    /// Decodes a table of canonical little-endian scalars, then validates it
    /// like [`Domain::from_roots_of_unity`].
    pub fn from_bytes(roots: &[Bytes32]) -> Result<Self, KzgError> {
        let roots = roots
            .iter()
            .map(|bytes| Fr::deserialize_from_bytes_le(bytes))
            .collect::<Result<Vec<_>, _>>()?;
        Self::from_roots_of_unity(roots)
    }

    pub fn roots_of_unity(&self) -> &[Fr] {
        &self.roots_of_unity
    }

    pub fn len(&self) -> usize {
        self.roots_of_unity.len()
    }

    pub fn is_empty(&self) -> bool {
        self.roots_of_unity.is_empty()
    }

    /// `n` as a field element.
    pub fn size(&self) -> &Fr {
        &self.size
    }

    pub fn size_inv(&self) -> &Fr {
        &self.size_inv
    }

    /// Position of `x` in the domain, if it is one of the roots.
    pub fn find_index_of_element(&self, x: &Fr) -> Option<usize> {
        self.roots_of_unity.iter().position(|root| root == x)
    }

    /// Evaluates a polynomial given in evaluation form over this domain at `x`.
    ///
    /// Inside the domain this is a lookup. Outside it applies the barycentric
    /// formula `(xⁿ - 1)/n · Σ fᵢ·ωᵢ/(x - ωᵢ)`.
    pub fn evaluate_polynomial_in_evaluation_form(
        &self,
        polynomial: &Polynomial,
        x: &Fr,
    ) -> Result<Fr, KzgError> {
        let evaluations = polynomial.evaluations();
        if evaluations.len() != self.len() {
            return Err(KzgError::LengthMismatch(format!(
                "polynomial has {} evaluations, domain has {} roots",
                evaluations.len(),
                self.len()
            )));
        }

        if let Some(index) = self.find_index_of_element(x) {
            return Ok(evaluations[index]);
        }

        let denominators: Vec<Fr> = self.roots_of_unity.iter().map(|root| *x - root).collect();
        let inverses = batch_invert(&denominators)?;

        let sum: Fr = evaluations
            .par_iter()
            .zip(self.roots_of_unity.par_iter())
            .zip(inverses.par_iter())
            .map(|((f_i, root), inv)| *f_i * root * inv)
            .sum();

        let x_pow_n_minus_one = x.pow([self.len() as u64]) - Fr::one();
        Ok(sum * self.size_inv * x_pow_n_minus_one)
    }
}
