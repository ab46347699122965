//! Scalar field helpers that add the checked conversions and fallible
//! inversion the arkworks field API leaves to the caller.

use ark_bls12_381::Fr;
use ark_ff::{batch_inversion, Field, PrimeField};
use ark_std::Zero;
use num_bigint::BigUint;

use crate::errors::KzgError;

pub fn from_u64(value: u64) -> Fr {
    Fr::from(value)
}

/// Builds a scalar from an integer that must already be below the field modulus.
pub fn from_integer_checked(value: &BigUint) -> Result<Fr, KzgError> {
    if *value >= BigUint::from(Fr::MODULUS) {
        return Err(KzgError::NonCanonicalValue(format!(
            "{value} is not less than the field modulus"
        )));
    }
    Ok(Fr::from(value.clone()))
}

/// Builds a scalar from any integer, reducing modulo the field order.
pub fn from_integer_reduce(value: &BigUint) -> Fr {
    Fr::from(value.clone())
}

pub fn invert(value: &Fr) -> Result<Fr, KzgError> {
    value.inverse().ok_or(KzgError::DivisionByZero)
}

pub fn div(numerator: &Fr, denominator: &Fr) -> Result<Fr, KzgError> {
    Ok(*numerator * invert(denominator)?)
}

/// Raises `base` to a scalar exponent.
pub fn pow(base: &Fr, exponent: &Fr) -> Fr {
    base.pow(exponent.into_bigint())
}

/// Inverts every element with a single field inversion (Montgomery's trick).
///
/// Fails with [`KzgError::DivisionByZero`] if any element is zero, rather than
/// silently mapping it to zero the way [`ark_ff::batch_inversion`] does.
pub fn batch_invert(values: &[Fr]) -> Result<Vec<Fr>, KzgError> {
    if values.iter().any(Zero::is_zero) {
        return Err(KzgError::DivisionByZero);
    }
    let mut inverses = values.to_vec();
    batch_inversion(&mut inverses);
    Ok(inverses)
}
