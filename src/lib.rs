// Copyright (c) The Art Tree Contributors
// SPDX-License-Identifier: Apache-2.0

//! An in-memory Adaptive Radix Tree (ART): an ordered mapping from byte-string keys to
//! byte-string values, optimized for cache efficiency and low memory overhead by letting each
//! internal node ([`node::InnerNode`]) adapt its fan-out representation between four
//! capacity-indexed tiers ([`NodeKind::Node4`] through [`NodeKind::Node256`]) to the number of
//! children it actually holds.
//!
//! ```
//! use art_tree::Tree;
//!
//! let mut tree = Tree::new();
//! tree.insert(b"abc", b"1");
//! tree.insert(b"abcd", b"2");
//!
//! assert_eq!(tree.search(b"abc"), Some(b"1".as_slice()));
//! assert_eq!(tree.search(b"abcd"), Some(b"2".as_slice()));
//! assert_eq!(tree.search(b"ab"), None);
//! ```
//!
//! This crate does not implement deletion, range scans, prefix-bounded iteration, persistence, or
//! thread safety; it is a single-threaded, purely in-memory index.

pub mod error;
pub mod node;
mod tree;

#[cfg(test)]
mod tests;

pub use error::ArtError;
pub use node::NodeKind;
pub use tree::Tree;

/// Maximum number of bytes a single [`node::Prefix`] compresses before the remainder falls back
/// to ordinary one-edge-per-byte internal nodes.
pub const MAX_PREFIX_LEN: usize = 16;
