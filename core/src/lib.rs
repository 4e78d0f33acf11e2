//! Core operations and types of the claimtree commitment scheme.
//!
//! This crate defines leaf hashing, layered tree construction, proof
//! extraction, and proof verification in a hash-agnostic manner. A built
//! [`tree::CommitmentTree`] is a plain immutable value; every query is a pure
//! read, so a tree can be shared freely across threads.
//!
//! The verification routines of this crate do not require the standard
//! library, but do require Rust's alloc crate.

#![cfg_attr(all(not(feature = "std"), not(test)), no_std)]

extern crate alloc;

pub mod hasher;
pub mod proof;
pub mod tree;

pub use proof::{verify_claim, Proof};
pub use tree::{BuildError, CommitmentTree, Node, DEFAULT_FLAG, INTERNAL_TAG};
