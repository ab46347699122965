//! Linear combinations of G1 points, `Σ sᵢ·Pᵢ`.
//!
//! Two strategies share one contract: [`Accumulate`] scales and adds every term
//! and is the default for anything security sensitive, [`Pippenger`] delegates
//! to the arkworks bucket method and is used where throughput matters. Both
//! must return the same point for the same input.

use ark_bls12_381::{Fr, G1Affine, G1Projective};
use ark_ec::{CurveGroup, VariableBaseMSM};
use ark_std::Zero;
use rayon::prelude::*;

use crate::{curve::g1_mul, errors::KzgError};

pub trait G1LinComb {
    fn lincomb(points: &[G1Affine], scalars: &[Fr]) -> Result<G1Projective, KzgError>;
}

/// Scale-and-add over every term.
pub struct Accumulate;

/// Windowed bucket multi-exponentiation.
pub struct Pippenger;

fn check_lengths(points: usize, scalars: usize) -> Result<(), KzgError> {
    if points != scalars {
        return Err(KzgError::LengthMismatch(format!(
            "{points} points, {scalars} scalars"
        )));
    }
    Ok(())
}

impl G1LinComb for Accumulate {
    fn lincomb(points: &[G1Affine], scalars: &[Fr]) -> Result<G1Projective, KzgError> {
        check_lengths(points.len(), scalars.len())?;
        Ok(points
            .par_iter()
            .zip(scalars.par_iter())
            .map(|(point, scalar)| g1_mul(&G1Projective::from(*point), scalar))
            .reduce(G1Projective::zero, |acc, term| acc + term))
    }
}

impl G1LinComb for Pippenger {
    fn lincomb(points: &[G1Affine], scalars: &[Fr]) -> Result<G1Projective, KzgError> {
        check_lengths(points.len(), scalars.len())?;
        G1Projective::msm(points, scalars).map_err(|len| {
            KzgError::LengthMismatch(format!("msm rejected inputs at length {len}"))
        })
    }
}

/// Linear combination over the audited path.
pub fn g1_lincomb(points: &[G1Affine], scalars: &[Fr]) -> Result<G1Projective, KzgError> {
    Accumulate::lincomb(points, scalars)
}

/// Linear combination over projective inputs, normalizing them first.
pub fn g1_lincomb_proj(points: &[G1Projective], scalars: &[Fr]) -> Result<G1Projective, KzgError> {
    check_lengths(points.len(), scalars.len())?;
    let affine = G1Projective::normalize_batch(points);
    Accumulate::lincomb(&affine, scalars)
}

/// Linear combination over the Pippenger path.
pub fn g1_lincomb_unsafe(points: &[G1Affine], scalars: &[Fr]) -> Result<G1Projective, KzgError> {
    Pippenger::lincomb(points, scalars)
}
