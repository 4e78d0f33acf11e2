#![cfg(feature = "borsh")]

mod common;

use borsh::BorshDeserialize;
use claimtree::{Claim, Commitment, Keccak256Hasher};

#[test]
fn claim_round_trips_through_borsh() {
    let flags = vec![0x00, 0x02, 0x03, 0x00, 0x04];
    let commitment =
        Commitment::<Keccak256Hasher>::build(common::identities(5), Some(flags)).unwrap();
    let claim = commitment.claim(2).unwrap();

    let bytes = borsh::to_vec(&claim).unwrap();
    let decoded = Claim::try_from_slice(&bytes).unwrap();
    assert_eq!(decoded, claim);
    assert!(decoded.verify::<Keccak256Hasher>(commitment.root()));
}
