//! Merkle commitment trees for airdrop eligibility claims.
//!
//! An off-chain collaborator assembles an ordered list of raw byte
//! identities (for example mint addresses), optionally pairs each with a
//! one-byte permission flag, and commits to the whole list with
//! [`Commitment::build`]. The resulting 32-byte root is published; each
//! eligible party later receives a [`Claim`] carrying its identity bytes,
//! its flag, and the sibling digests needed to fold back up to the root.
//! Any verifier holding only the root checks membership with
//! `O(log n)` data instead of the full list.
//!
//! The engine itself lives in `claimtree-core`; this crate owns the list,
//! bounds-checks indices at the caller boundary, and produces the
//! transport-ready hex and [`Claim`] encodings.

use std::marker::PhantomData;

use anyhow::{bail, Context as _};

use claimtree_core::hasher::NodeHasher;
use claimtree_core::tree::CommitmentTree;

pub use claimtree_core::hasher;
pub use claimtree_core::{verify_claim, BuildError, Node, Proof, DEFAULT_FLAG};

#[cfg(feature = "keccak-hasher")]
pub use claimtree_core::hasher::Keccak256Hasher;

#[cfg(feature = "blake3-hasher")]
pub use claimtree_core::hasher::Blake3Hasher;

#[cfg(feature = "sha2-hasher")]
pub use claimtree_core::hasher::Sha2Hasher;

/// An eligibility list committed to a single root digest.
///
/// Owns the identities and flags it was built from, so it can assemble
/// transport-ready [`Claim`]s and re-verify proofs by index. The underlying
/// tree is immutable and every query is a pure read; a `Commitment` is safe
/// to share read-only across threads.
pub struct Commitment<H> {
    identities: Vec<Vec<u8>>,
    flags: Option<Vec<u8>>,
    tree: CommitmentTree,
    _hasher: PhantomData<H>,
}

impl<H: NodeHasher> Commitment<H> {
    /// Commit to `identities` in order, pairing each with the flag at the
    /// same index.
    ///
    /// Flags default to `0x00` for every leaf when omitted. Rejects an
    /// empty list and a flag sequence whose length differs from the
    /// identity count.
    pub fn build(identities: Vec<Vec<u8>>, flags: Option<Vec<u8>>) -> anyhow::Result<Self> {
        let tree = CommitmentTree::build::<H>(&identities, flags.as_deref())
            .context("building commitment tree")?;
        Ok(Commitment {
            identities,
            flags,
            tree,
            _hasher: PhantomData,
        })
    }

    /// The root digest committing to the whole list.
    pub fn root(&self) -> Node {
        self.tree.root()
    }

    /// Lowercase hex encoding of the root, for transport or display.
    pub fn hex_root(&self) -> String {
        self.tree.hex_root()
    }

    /// The number of committed identities.
    pub fn leaf_count(&self) -> usize {
        self.tree.leaf_count()
    }

    /// The inclusion proof for the identity at `index`.
    pub fn proof(&self, index: usize) -> anyhow::Result<Proof> {
        self.check_index(index)?;
        Ok(self.tree.proof(index))
    }

    /// Lowercase hex encodings of the proof elements for the identity at
    /// `index`.
    pub fn hex_proof(&self, index: usize) -> anyhow::Result<Vec<String>> {
        self.check_index(index)?;
        Ok(self.tree.hex_proof(index))
    }

    /// Assemble the envelope handed to the party claiming `index`.
    pub fn claim(&self, index: usize) -> anyhow::Result<Claim> {
        self.check_index(index)?;
        Ok(Claim {
            identity: self.identities[index].clone(),
            flag: self.flag(index),
            proof: self.tree.proof(index),
        })
    }

    /// Re-check a proof for the identity at `index` against a claimed root.
    ///
    /// A failed match is `Ok(false)`; only an out-of-range index is an
    /// error.
    pub fn verify(&self, index: usize, proof: &Proof, root: Node) -> anyhow::Result<bool> {
        self.check_index(index)?;
        Ok(proof.verify::<H>(&self.identities[index], self.flag(index), root))
    }

    fn flag(&self, index: usize) -> u8 {
        self.flags.as_ref().map_or(DEFAULT_FLAG, |flags| flags[index])
    }

    fn check_index(&self, index: usize) -> anyhow::Result<()> {
        let count = self.leaf_count();
        if index >= count {
            bail!("claim index {index} out of range for {count} leaves");
        }
        Ok(())
    }
}

/// Everything a remote verifier needs alongside a published root.
///
/// Expected to be serializable.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(
    feature = "borsh",
    derive(borsh::BorshDeserialize, borsh::BorshSerialize)
)]
pub struct Claim {
    /// The raw identity bytes committed at the claimed position.
    pub identity: Vec<u8>,
    /// The permission flag committed alongside the identity.
    pub flag: u8,
    /// Sibling digests from the leaf layer upward.
    pub proof: Proof,
}

impl Claim {
    /// Check this claim against a published root. Never errors; a mismatch
    /// is `false`.
    pub fn verify<H: NodeHasher>(&self, root: Node) -> bool {
        self.proof.verify::<H>(&self.identity, self.flag, root)
    }
}
