//! Hashers (feature-gated) and utilities for implementing them.

use crate::tree::{Node, INTERNAL_TAG};

use alloc::vec::Vec;

/// A hash function specialized to the two preimage domains of the commitment
/// tree.
///
/// A node hasher must domain-separate leaf and internal hashes in some
/// specific way. The scheme used here tags every preimage with a leading
/// byte: the leaf's flag byte for the leaf layer, [`INTERNAL_TAG`] for
/// internal nodes. Callers choosing leaf flags should avoid
/// [`INTERNAL_TAG`] for identities that are exactly 64 bytes long, as those
/// preimages would fall into the internal-node domain.
pub trait NodeHasher {
    /// Hash a leaf. The flag byte doubles as the committed permission bit
    /// and the leaf-domain tag: identical identity bytes committed under
    /// different flags must hash differently.
    fn hash_leaf(identity: &[u8], flag: u8) -> Node;

    /// Hash an internal node from two child digests. Combination is
    /// order-independent: implementations sort the pair before hashing.
    fn hash_internal(left: &Node, right: &Node) -> Node;
}

/// A simple trait for representing binary hash functions.
pub trait BinaryHash {
    /// Given a byte-string, produce a 32-byte hash.
    fn hash(input: &[u8]) -> [u8; 32];

    /// An optional specialization of `hash` where a single tag byte precedes
    /// the input.
    fn hash_tagged(tag: u8, input: &[u8]) -> [u8; 32] {
        let mut buf = Vec::with_capacity(1 + input.len());
        buf.push(tag);
        buf.extend_from_slice(input);
        Self::hash(&buf)
    }

    /// An optional specialization of `hash` where a tag byte precedes two
    /// 32-byte inputs.
    fn hash_tagged_pair(tag: u8, a: &[u8; 32], b: &[u8; 32]) -> [u8; 32] {
        let mut buf = [0u8; 65];
        buf[0] = tag;
        buf[1..33].copy_from_slice(a);
        buf[33..65].copy_from_slice(b);
        Self::hash(&buf)
    }
}

/// A node hasher constructed from a simple binary hasher.
///
/// This implements a [`NodeHasher`] where leaves hash as
/// `H(flag ++ identity)` and internal nodes as `H(0x01 ++ min ++ max)`, the
/// two children sorted lexicographically before hashing. An internal
/// preimage is always exactly 65 bytes of tag and child digests, so a
/// carried-through leaf digest appearing at a higher layer cannot be
/// reinterpreted as an internal node.
///
/// The binary hash wrapped by this structure must behave approximately like
/// a random oracle over the space 2^256. Functions like Keccak/Sha2/Blake3
/// all meet these criteria.
pub struct TaggedHasher<H>(core::marker::PhantomData<H>);

impl<H: BinaryHash> NodeHasher for TaggedHasher<H> {
    fn hash_leaf(identity: &[u8], flag: u8) -> Node {
        H::hash_tagged(flag, identity)
    }

    fn hash_internal(left: &Node, right: &Node) -> Node {
        let (min, max) = if left <= right {
            (left, right)
        } else {
            (right, left)
        };
        H::hash_tagged_pair(INTERNAL_TAG, min, max)
    }
}

/// Blanket implementation for all implementations of `Digest`
impl<H: digest::Digest<OutputSize = digest::typenum::U32> + Send + Sync> BinaryHash for H {
    fn hash(input: &[u8]) -> [u8; 32] {
        H::digest(input).into()
    }
}

#[cfg(any(feature = "keccak-hasher", test))]
pub use keccak::Keccak256Hasher;

/// A node hasher making use of keccak-256, the hash the reference
/// eligibility lists are committed with.
#[cfg(any(feature = "keccak-hasher", test))]
pub mod keccak {
    use super::{BinaryHash, TaggedHasher};
    use sha3::{Digest, Keccak256};

    /// A [`BinaryHash`] implementation for keccak-256.
    pub struct Keccak256BinaryHasher;

    /// A wrapper around keccak-256 for use in claimtree.
    pub type Keccak256Hasher = TaggedHasher<Keccak256BinaryHasher>;

    impl BinaryHash for Keccak256BinaryHasher {
        fn hash(input: &[u8]) -> [u8; 32] {
            let mut hasher = Keccak256::new();
            hasher.update(input);
            hasher.finalize().into()
        }

        fn hash_tagged(tag: u8, input: &[u8]) -> [u8; 32] {
            let mut hasher = Keccak256::new();
            hasher.update([tag]);
            hasher.update(input);
            hasher.finalize().into()
        }

        fn hash_tagged_pair(tag: u8, a: &[u8; 32], b: &[u8; 32]) -> [u8; 32] {
            let mut hasher = Keccak256::new();
            hasher.update([tag]);
            hasher.update(a);
            hasher.update(b);
            hasher.finalize().into()
        }
    }
}

#[cfg(feature = "blake3-hasher")]
pub use blake3::Blake3Hasher;

/// A node hasher making use of blake3.
#[cfg(feature = "blake3-hasher")]
pub mod blake3 {
    use super::{BinaryHash, TaggedHasher};

    /// A [`BinaryHash`] implementation for Blake3.
    pub struct Blake3BinaryHasher;

    /// A wrapper around Blake3 for use in claimtree.
    pub type Blake3Hasher = TaggedHasher<Blake3BinaryHasher>;

    impl BinaryHash for Blake3BinaryHasher {
        fn hash(input: &[u8]) -> [u8; 32] {
            blake3::hash(input).into()
        }

        fn hash_tagged(tag: u8, input: &[u8]) -> [u8; 32] {
            let mut hasher = blake3::Hasher::new();
            hasher.update(&[tag]);
            hasher.update(input);
            hasher.finalize().into()
        }

        fn hash_tagged_pair(tag: u8, a: &[u8; 32], b: &[u8; 32]) -> [u8; 32] {
            let mut hasher = blake3::Hasher::new();
            hasher.update(&[tag]);
            hasher.update(a);
            hasher.update(b);
            hasher.finalize().into()
        }
    }
}

#[cfg(feature = "sha2-hasher")]
pub use sha2::Sha2Hasher;

/// A node hasher making use of sha2-256.
#[cfg(feature = "sha2-hasher")]
pub mod sha2 {
    use super::{BinaryHash, TaggedHasher};
    use sha2::{Digest, Sha256};

    /// A [`BinaryHash`] implementation for Sha2.
    pub struct Sha2BinaryHasher;

    /// A wrapper around sha2-256 for use in claimtree.
    pub type Sha2Hasher = TaggedHasher<Sha2BinaryHasher>;

    impl BinaryHash for Sha2BinaryHasher {
        fn hash(input: &[u8]) -> [u8; 32] {
            let mut hasher = Sha256::new();
            hasher.update(input);
            hasher.finalize().into()
        }

        fn hash_tagged(tag: u8, input: &[u8]) -> [u8; 32] {
            let mut hasher = Sha256::new();
            hasher.update([tag]);
            hasher.update(input);
            hasher.finalize().into()
        }

        fn hash_tagged_pair(tag: u8, a: &[u8; 32], b: &[u8; 32]) -> [u8; 32] {
            let mut hasher = Sha256::new();
            hasher.update([tag]);
            hasher.update(a);
            hasher.update(b);
            hasher.finalize().into()
        }
    }
}
