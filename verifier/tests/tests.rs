#[cfg(test)]
mod tests {
    use ark_bls12_381::{Fr, G1Affine, G1Projective};
    use ark_ec::{AffineRepr, CurveGroup, PrimeGroup};
    use ark_ff::{One, UniformRand};
    use lazy_static::lazy_static;
    use rand::Rng;
    use rust_kzg_bls12_381_primitives::{
        blob::Blob,
        consts::FIELD_ELEMENTS_PER_BLOB,
        domain::Domain,
        errors::KzgError,
        polynomial::Polynomial,
        traits::{ReadFrFromBytes, WritePointToBytes},
    };
    use rust_kzg_bls12_381_prover::{kzg::KZG, srs::CommitKey};
    use rust_kzg_bls12_381_verifier::{
        batch::{
            verify_blob_kzg_proof_batch, verify_blob_kzg_proof_batch_impl,
            verify_kzg_proof_batch_impl, verify_kzg_proof_batch_with_randomness,
        },
        open_key::OpenKey,
        verify::{verify_blob_kzg_proof, verify_blob_kzg_proof_impl, verify_proof, verify_proof_impl},
    };

    // Define a static variable for setup
    lazy_static! {
        static ref SECRET: Fr = Fr::from(0x0dd5_ba11u64);
        static ref KZG_INSTANCE: KZG = KZG::new(Domain::new().unwrap());
        static ref COMMIT_KEY: CommitKey =
            CommitKey::insecure_setup(KZG_INSTANCE.domain(), &SECRET).unwrap();
        static ref OPEN_KEY: OpenKey = OpenKey::insecure_setup(&SECRET);
    }

    fn random_blob() -> Blob {
        let mut rng = rand::thread_rng();
        Polynomial::new((0..FIELD_ELEMENTS_PER_BLOB).map(|_| Fr::rand(&mut rng)).collect())
            .unwrap()
            .to_blob()
    }

    fn random_point() -> G1Affine {
        G1Projective::rand(&mut rand::thread_rng()).into_affine()
    }

    struct Opening {
        commitment: G1Affine,
        z: Fr,
        y: Fr,
        proof: G1Affine,
    }

    fn random_opening() -> Opening {
        let polynomial = random_blob().to_polynomial().unwrap();
        let commitment = KZG_INSTANCE
            .commit_polynomial(&polynomial, &COMMIT_KEY)
            .unwrap();
        let z = Fr::rand(&mut rand::thread_rng());
        let (y, proof) = KZG_INSTANCE
            .compute_proof(&polynomial, &z, &COMMIT_KEY)
            .unwrap();
        Opening {
            commitment,
            z,
            y,
            proof,
        }
    }

    #[test]
    fn test_verify_proof_impl() {
        let opening = random_opening();
        assert!(verify_proof_impl(
            &OPEN_KEY,
            &opening.commitment,
            &opening.proof,
            &opening.y,
            &opening.z
        ));
        assert!(!verify_proof_impl(
            &OPEN_KEY,
            &opening.commitment,
            &opening.proof,
            &(opening.y + Fr::one()),
            &opening.z
        ));
        assert!(!verify_proof_impl(
            &OPEN_KEY,
            &opening.commitment,
            &opening.proof,
            &opening.y,
            &(opening.z + Fr::one())
        ));
        assert!(!verify_proof_impl(
            &OPEN_KEY,
            &opening.commitment,
            &random_point(),
            &opening.y,
            &opening.z
        ));
    }

    #[test]
    fn test_verify_proof_at_domain_points() {
        let polynomial = random_blob().to_polynomial().unwrap();
        let commitment = KZG_INSTANCE
            .commit_polynomial(&polynomial, &COMMIT_KEY)
            .unwrap();
        let mut rng = rand::thread_rng();

        for _ in 0..4 {
            let index = rng.gen_range(0..FIELD_ELEMENTS_PER_BLOB);
            let z = KZG_INSTANCE.domain().roots_of_unity()[index];
            let (y, proof) = KZG_INSTANCE
                .compute_proof(&polynomial, &z, &COMMIT_KEY)
                .unwrap();
            assert!(verify_proof_impl(&OPEN_KEY, &commitment, &proof, &y, &z));

            // Same proof claimed at a neighbouring root must fail.
            let other = KZG_INSTANCE.domain().roots_of_unity()[(index + 1) % FIELD_ELEMENTS_PER_BLOB];
            assert!(!verify_proof_impl(&OPEN_KEY, &commitment, &proof, &y, &other));
        }
    }

    #[test]
    fn test_verify_proof_bytes() {
        let opening = random_opening();
        let commitment = opening.commitment.to_compressed_bytes().unwrap();
        let proof = opening.proof.to_compressed_bytes().unwrap();
        let z = opening.z.to_bytes_le();
        let y = opening.y.to_bytes_le();

        assert_eq!(verify_proof(&OPEN_KEY, &commitment, &z, &y, &proof), Ok(true));
        assert_eq!(verify_proof(&OPEN_KEY, &commitment, &y, &z, &proof), Ok(false));

        match verify_proof(&OPEN_KEY, &commitment, &[0xff; 32], &y, &proof) {
            Err(KzgError::NonCanonicalValue(_)) => {},
            other => panic!("expected NonCanonicalValue, got {:?}", other),
        }
        match verify_proof(&OPEN_KEY, &[0xff; 48], &z, &y, &proof) {
            Err(KzgError::InvalidPointEncoding(_)) => {},
            other => panic!("expected InvalidPointEncoding, got {:?}", other),
        }
    }

    #[test]
    fn test_verify_blob_kzg_proof() {
        let blob = random_blob();
        let blob_proof = KZG_INSTANCE.compute_blob_proof(&blob, &COMMIT_KEY).unwrap();
        let commitment = blob_proof.commitment.to_compressed_bytes().unwrap();
        let proof = blob_proof.proof.to_compressed_bytes().unwrap();

        assert_eq!(
            verify_blob_kzg_proof(KZG_INSTANCE.domain(), &OPEN_KEY, blob.data(), &commitment, &proof),
            Ok(true)
        );
        assert_eq!(
            verify_blob_kzg_proof_impl(
                KZG_INSTANCE.domain(),
                &OPEN_KEY,
                &blob,
                &blob_proof.commitment,
                &blob_proof.proof
            ),
            Ok(true)
        );

        // A proof for a different blob does not carry over.
        let other_blob = random_blob();
        assert_eq!(
            verify_blob_kzg_proof(
                KZG_INSTANCE.domain(),
                &OPEN_KEY,
                other_blob.data(),
                &commitment,
                &proof
            ),
            Ok(false)
        );
    }

    #[test]
    fn test_verify_blob_kzg_proof_identity_proof_fails() {
        let blob = random_blob();
        let blob_proof = KZG_INSTANCE.compute_blob_proof(&blob, &COMMIT_KEY).unwrap();
        let commitment = blob_proof.commitment.to_compressed_bytes().unwrap();
        let identity = G1Affine::zero().to_compressed_bytes().unwrap();

        assert_eq!(
            verify_blob_kzg_proof(KZG_INSTANCE.domain(), &OPEN_KEY, blob.data(), &commitment, &identity),
            Ok(false)
        );
    }

    #[test]
    fn test_verify_blob_kzg_proof_decode_errors() {
        let blob = random_blob();
        let blob_proof = KZG_INSTANCE.compute_blob_proof(&blob, &COMMIT_KEY).unwrap();
        let commitment = blob_proof.commitment.to_compressed_bytes().unwrap();
        let proof = blob_proof.proof.to_compressed_bytes().unwrap();

        assert_eq!(
            verify_blob_kzg_proof(
                KZG_INSTANCE.domain(),
                &OPEN_KEY,
                &blob.data()[1..],
                &commitment,
                &proof
            ),
            Err(KzgError::DecodeLengthMismatch {
                expected: FIELD_ELEMENTS_PER_BLOB * 32,
                got: FIELD_ELEMENTS_PER_BLOB * 32 - 1
            })
        );

        let mut non_canonical = blob.data().to_vec();
        non_canonical[..32].copy_from_slice(&[0xff; 32]);
        match verify_blob_kzg_proof(
            KZG_INSTANCE.domain(),
            &OPEN_KEY,
            &non_canonical,
            &commitment,
            &proof,
        ) {
            Err(KzgError::NonCanonicalValue(_)) => {},
            other => panic!("expected NonCanonicalValue, got {:?}", other),
        }
    }

    #[test]
    fn test_verify_kzg_proof_batch() {
        let openings: Vec<Opening> = (0..5).map(|_| random_opening()).collect();
        let commitments: Vec<G1Affine> = openings.iter().map(|o| o.commitment).collect();
        let zs: Vec<Fr> = openings.iter().map(|o| o.z).collect();
        let ys: Vec<Fr> = openings.iter().map(|o| o.y).collect();
        let proofs: Vec<G1Affine> = openings.iter().map(|o| o.proof).collect();

        assert_eq!(
            verify_kzg_proof_batch_impl(&OPEN_KEY, &commitments, &zs, &ys, &proofs),
            Ok(true)
        );

        let r = Fr::from(3u64);
        assert_eq!(
            verify_kzg_proof_batch_with_randomness(&OPEN_KEY, &commitments, &zs, &ys, &proofs, &r),
            Ok(true)
        );

        let mut bad_ys = ys.clone();
        bad_ys[2] += Fr::one();
        assert_eq!(
            verify_kzg_proof_batch_impl(&OPEN_KEY, &commitments, &zs, &bad_ys, &proofs),
            Ok(false)
        );

        match verify_kzg_proof_batch_impl(&OPEN_KEY, &commitments, &zs[..4], &ys, &proofs) {
            Err(KzgError::LengthMismatch(_)) => {},
            other => panic!("expected LengthMismatch, got {:?}", other),
        }

        assert_eq!(
            verify_kzg_proof_batch_impl(&OPEN_KEY, &[], &[], &[], &[]),
            Ok(true)
        );
    }

    #[test]
    fn test_verify_blob_kzg_proof_batch() {
        let blobs: Vec<Blob> = (0..4).map(|_| random_blob()).collect();
        let mut commitments = Vec::new();
        let mut proofs = Vec::new();
        for blob in &blobs {
            let blob_proof = KZG_INSTANCE.compute_blob_proof(blob, &COMMIT_KEY).unwrap();
            commitments.push(blob_proof.commitment);
            proofs.push(blob_proof.proof);
        }

        assert_eq!(
            verify_blob_kzg_proof_batch_impl(
                KZG_INSTANCE.domain(),
                &OPEN_KEY,
                &blobs,
                &commitments,
                &proofs
            ),
            Ok(true)
        );

        let blob_bytes: Vec<Vec<u8>> = blobs.iter().map(|b| b.data().to_vec()).collect();
        let commitment_bytes: Vec<[u8; 48]> = commitments
            .iter()
            .map(|c| c.to_compressed_bytes().unwrap())
            .collect();
        let proof_bytes: Vec<[u8; 48]> = proofs
            .iter()
            .map(|p| p.to_compressed_bytes().unwrap())
            .collect();
        assert_eq!(
            verify_blob_kzg_proof_batch(
                KZG_INSTANCE.domain(),
                &OPEN_KEY,
                &blob_bytes,
                &commitment_bytes,
                &proof_bytes
            ),
            Ok(true)
        );

        // Swap in a valid proof that belongs to another blob.
        let mut swapped_proofs = proof_bytes.clone();
        swapped_proofs.swap(0, 1);
        assert_eq!(
            verify_blob_kzg_proof_batch(
                KZG_INSTANCE.domain(),
                &OPEN_KEY,
                &blob_bytes,
                &commitment_bytes,
                &swapped_proofs
            ),
            Ok(false)
        );

        // An unrelated but valid commitment.
        let mut replaced_commitments = commitment_bytes.clone();
        replaced_commitments[3] = (G1Projective::generator() * Fr::from(5u64))
            .into_affine()
            .to_compressed_bytes()
            .unwrap();
        assert_eq!(
            verify_blob_kzg_proof_batch(
                KZG_INSTANCE.domain(),
                &OPEN_KEY,
                &blob_bytes,
                &replaced_commitments,
                &proof_bytes
            ),
            Ok(false)
        );

        match verify_blob_kzg_proof_batch(
            KZG_INSTANCE.domain(),
            &OPEN_KEY,
            &blob_bytes[..3],
            &commitment_bytes,
            &proof_bytes,
        ) {
            Err(KzgError::LengthMismatch(_)) => {},
            other => panic!("expected LengthMismatch, got {:?}", other),
        }
    }
}
