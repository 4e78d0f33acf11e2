//! This module defines the layered commitment tree over an ordered leaf set.
//!
//! All nodes are 256 bits. Layer 0 holds the hashed leaves: each leaf is an
//! arbitrary-length identity tagged with a one-byte flag, hashed as
//! `H(flag ++ identity)`. Every higher layer is built by combining adjacent
//! digests pairwise with `H(0x01 ++ min ++ max)`; an unpaired trailing digest
//! is carried up unchanged. The final single-digest layer is the root, the
//! public commitment to the whole set.
//!
//! Leaf position is significant: a leaf's index determines which sibling
//! digests make up its inclusion proof.

use crate::hasher::NodeHasher;
use crate::proof::Proof;

use alloc::string::String;
use alloc::vec::Vec;

/// A node in the commitment tree. Always 256 bits: the hash of either a
/// flag-tagged leaf or a sorted pair of child digests, or a carried-through
/// copy of a lower node.
pub type Node = [u8; 32];

/// The flag committed for every leaf when the caller supplies none.
pub const DEFAULT_FLAG: u8 = 0x00;

/// The tag byte leading every internal-node preimage. Distinguishes
/// internal preimages from leaf preimages, which lead with the leaf's flag.
pub const INTERNAL_TAG: u8 = 0x01;

/// Inputs rejected at construction time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BuildError {
    /// The root of an empty leaf set is undefined.
    EmptyLeafSet,
    /// A supplied flag sequence must be index-aligned with the leaves.
    FlagCountMismatch {
        /// Number of leaves supplied.
        leaves: usize,
        /// Number of flags supplied.
        flags: usize,
    },
}

impl core::fmt::Display for BuildError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            BuildError::EmptyLeafSet => write!(f, "cannot commit to an empty leaf set"),
            BuildError::FlagCountMismatch { leaves, flags } => write!(
                f,
                "flag count {} does not match leaf count {}",
                flags, leaves
            ),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for BuildError {}

/// An immutable layered digest structure committing to an ordered leaf set.
///
/// Built once from a finalized list of identities (and optional per-leaf
/// flags) and never mutated; [`root`][Self::root] and
/// [`proof`][Self::proof] are pure reads. Committing to a different set
/// means building a new tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommitmentTree {
    /// All layers, leaves first. The last layer holds exactly the root.
    layers: Vec<Vec<Node>>,
}

impl CommitmentTree {
    /// Build a tree over `leaves`, committing `flags[i]` alongside leaf `i`.
    ///
    /// When `flags` is `None`, every leaf is committed with
    /// [`DEFAULT_FLAG`]. An empty leaf set or a flag sequence whose length
    /// differs from the leaf count is rejected; flags are never silently
    /// truncated or padded.
    pub fn build<H: NodeHasher>(
        leaves: &[impl AsRef<[u8]>],
        flags: Option<&[u8]>,
    ) -> Result<Self, BuildError> {
        if leaves.is_empty() {
            return Err(BuildError::EmptyLeafSet);
        }
        if let Some(flags) = flags {
            if flags.len() != leaves.len() {
                return Err(BuildError::FlagCountMismatch {
                    leaves: leaves.len(),
                    flags: flags.len(),
                });
            }
        }

        let mut layer: Vec<Node> = leaves
            .iter()
            .enumerate()
            .map(|(i, leaf)| {
                let flag = flags.map_or(DEFAULT_FLAG, |flags| flags[i]);
                H::hash_leaf(leaf.as_ref(), flag)
            })
            .collect();

        let mut layers = Vec::new();
        while layer.len() > 1 {
            let next = layer
                .chunks(2)
                .map(|pair| match pair {
                    [left, right] => H::hash_internal(left, right),
                    // odd carry-through: an unpaired digest moves up unhashed.
                    [lone] => *lone,
                    _ => unreachable!(),
                })
                .collect();
            layers.push(layer);
            layer = next;
        }
        layers.push(layer);

        Ok(CommitmentTree { layers })
    }

    /// The root digest: the public commitment to the whole leaf set.
    pub fn root(&self) -> Node {
        // construction guarantees a final single-digest layer.
        self.layers[self.layers.len() - 1][0]
    }

    /// Lowercase hex encoding of the root, for transport or display.
    pub fn hex_root(&self) -> String {
        hex::encode(self.root())
    }

    /// The number of committed leaves.
    pub fn leaf_count(&self) -> usize {
        self.layers[0].len()
    }

    /// The inclusion proof for the leaf at `index`: sibling digests ordered
    /// from the leaf layer upward. A layer in which the leaf's ancestor had
    /// no sibling contributes no element, so proofs can be shorter than
    /// `ceil(log2(leaf_count))`.
    ///
    /// `index` must be within `[0, leaf_count())`; bounds are not checked
    /// here.
    pub fn proof(&self, mut index: usize) -> Proof {
        let mut siblings = Vec::new();
        for layer in &self.layers[..self.layers.len() - 1] {
            let sibling = index ^ 1;
            if sibling < layer.len() {
                siblings.push(layer[sibling]);
            }
            index /= 2;
        }
        Proof(siblings)
    }

    /// Lowercase hex encodings of the proof elements for the leaf at
    /// `index`. Same bounds contract as [`proof`][Self::proof].
    pub fn hex_proof(&self, index: usize) -> Vec<String> {
        self.proof(index).to_hex()
    }
}
