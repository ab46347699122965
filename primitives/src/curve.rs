use ark_bls12_381::{Bls12_381, Fr, G1Affine, G1Projective, G2Affine, G2Projective};
use ark_ec::{pairing::Pairing, CurveGroup, PrimeGroup};
use ark_std::Zero;

pub fn g1_generator() -> G1Projective {
    G1Projective::generator()
}

pub fn g2_generator() -> G2Projective {
    G2Projective::generator()
}

/// Multiplies a G1 point by a scalar. A zero scalar yields the identity.
pub fn g1_mul(point: &G1Projective, scalar: &Fr) -> G1Projective {
    if scalar.is_zero() {
        return G1Projective::zero();
    }
    *point * scalar
}

/// Multiplies a G2 point by a scalar. A zero scalar yields the identity.
pub fn g2_mul(point: &G2Projective, scalar: &Fr) -> G2Projective {
    if scalar.is_zero() {
        return G2Projective::zero();
    }
    *point * scalar
}

/// Returns true iff the product of pairings `∏ e(P_i, Q_i)` is the identity of GT.
///
/// Pairs with an identity operand contribute nothing and are skipped. The
/// Miller loops of the remaining pairs are multiplied together and a single
/// final exponentiation is applied to the product.
pub fn pairing_check(pairs: &[(G1Projective, G2Projective)]) -> bool {
    let (g1s, g2s): (Vec<G1Projective>, Vec<G2Projective>) = pairs
        .iter()
        .filter(|(p, q)| !p.is_zero() && !q.is_zero())
        .cloned()
        .unzip();

    if g1s.is_empty() {
        return true;
    }

    let g1s: Vec<G1Affine> = G1Projective::normalize_batch(&g1s);
    let g2s: Vec<G2Affine> = G2Projective::normalize_batch(&g2s);

    let miller_loop = Bls12_381::multi_miller_loop(g1s, g2s);
    Bls12_381::final_exponentiation(miller_loop).is_some_and(|out| out.is_zero())
}
