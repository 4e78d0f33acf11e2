mod common;

use claimtree::{verify_claim, Commitment, Keccak256Hasher};
use quickcheck::{QuickCheck, TestResult};

#[test]
fn claims_verify_across_sizes() {
    for n in 1..=17 {
        let identities = common::identities(n);
        let flags: Vec<u8> = (0..n).map(|i| (i % 3) as u8).collect();
        let commitment =
            Commitment::<Keccak256Hasher>::build(identities, Some(flags)).unwrap();
        let root = commitment.root();
        for i in 0..n {
            let claim = commitment.claim(i).unwrap();
            assert!(claim.verify::<Keccak256Hasher>(root), "index {i} of {n}");
            assert!(commitment.verify(i, &claim.proof, root).unwrap());
        }
    }
}

#[test]
fn singleton_claim_has_empty_proof() {
    let commitment = Commitment::<Keccak256Hasher>::build(common::identities(1), None).unwrap();
    let claim = commitment.claim(0).unwrap();
    assert!(claim.proof.is_empty());
    assert!(claim.verify::<Keccak256Hasher>(commitment.root()));
}

#[test]
fn out_of_range_index_is_an_error() {
    let commitment = Commitment::<Keccak256Hasher>::build(common::identities(3), None).unwrap();
    assert!(commitment.claim(3).is_err());
    assert!(commitment.proof(4).is_err());
    assert!(commitment.hex_proof(3).is_err());
    let proof = commitment.proof(0).unwrap();
    assert!(commitment.verify(5, &proof, commitment.root()).is_err());
}

#[test]
fn empty_and_misaligned_lists_rejected() {
    assert!(Commitment::<Keccak256Hasher>::build(vec![], None).is_err());
    assert!(
        Commitment::<Keccak256Hasher>::build(common::identities(2), Some(vec![0x00])).is_err()
    );
}

#[test]
fn hex_encodings_match_binary() {
    let commitment = Commitment::<Keccak256Hasher>::build(common::identities(6), None).unwrap();
    assert_eq!(commitment.hex_root(), hex::encode(commitment.root()));

    let proof = commitment.proof(1).unwrap();
    let hex_proof = commitment.hex_proof(1).unwrap();
    assert_eq!(hex_proof.len(), proof.len());
    for (encoded, element) in hex_proof.iter().zip(&proof.0) {
        assert_eq!(*encoded, hex::encode(element));
    }
}

#[test]
fn static_verifier_agrees_with_commitment_verifier() {
    let identities = common::identities(7);
    let commitment = Commitment::<Keccak256Hasher>::build(identities.clone(), None).unwrap();
    let root = commitment.root();
    for (i, identity) in identities.iter().enumerate() {
        let proof = commitment.proof(i).unwrap();
        assert!(verify_claim::<Keccak256Hasher>(identity, &proof, root));
        assert!(commitment.verify(i, &proof, root).unwrap());
    }
}

#[test]
fn arbitrary_lists_round_trip() {
    fn prop(entries: Vec<(Vec<u8>, u8)>) -> TestResult {
        if entries.is_empty() {
            return TestResult::discard();
        }
        let (identities, flags): (Vec<_>, Vec<_>) = entries.into_iter().unzip();
        let commitment =
            Commitment::<Keccak256Hasher>::build(identities, Some(flags)).unwrap();
        let root = commitment.root();
        for i in 0..commitment.leaf_count() {
            if !commitment.claim(i).unwrap().verify::<Keccak256Hasher>(root) {
                return TestResult::failed();
            }
        }
        TestResult::passed()
    }

    QuickCheck::new()
        .tests(50)
        .quickcheck(prop as fn(Vec<(Vec<u8>, u8)>) -> TestResult);
}
