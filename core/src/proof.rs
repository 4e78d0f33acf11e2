//! Proving and verifying membership of a leaf in a published commitment.

use crate::hasher::NodeHasher;
use crate::tree::{Node, DEFAULT_FLAG};

use alloc::string::String;
use alloc::vec::Vec;

/// Sibling digests needed to recompute the root from one leaf, ordered from
/// the leaf layer upward.
///
/// A proof carries no positional information: internal combination sorts the
/// two children before hashing, so the verifier folds siblings in without
/// tracking left or right.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(
    feature = "borsh",
    derive(borsh::BorshDeserialize, borsh::BorshSerialize)
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Proof(pub Vec<Node>);

impl Proof {
    /// Check this proof against a claimed root for the given identity and
    /// flag.
    ///
    /// Recomputes the leaf hash and folds every sibling in, then compares
    /// the result to `root` for exact equality. A wrong identity, flag,
    /// sibling, or root yields `false`; this never errors.
    pub fn verify<H: NodeHasher>(&self, identity: &[u8], flag: u8, root: Node) -> bool {
        let mut pair = H::hash_leaf(identity, flag);
        for sibling in &self.0 {
            pair = H::hash_internal(&pair, sibling);
        }
        pair == root
    }

    /// The number of sibling digests.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the proof carries no siblings, as for a single-leaf
    /// commitment.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Lowercase hex encodings of the sibling digests, for transport.
    pub fn to_hex(&self) -> Vec<String> {
        self.0.iter().map(hex::encode).collect()
    }
}

/// Verify a claim whose leaf was committed with [`DEFAULT_FLAG`].
///
/// Agrees with [`Proof::verify`] for every tree built without explicit
/// flags. Any party holding the identity bytes, the proof, and the
/// published root can call this without access to the original leaf set.
pub fn verify_claim<H: NodeHasher>(identity: &[u8], proof: &Proof, root: Node) -> bool {
    proof.verify::<H>(identity, DEFAULT_FLAG, root)
}
