// Copyright (c) The Art Tree Contributors
// SPDX-License-Identifier: Apache-2.0

//! Error types surfaced at the crate's fallible boundaries.
//!
//! [`Tree::insert`](crate::Tree::insert) and [`Tree::search`](crate::Tree::search) are infallible
//! by contract: insert always succeeds and search reports a miss as `None`, never as an error.
//! The only typed failure in this crate belongs to [`Prefix::try_exact`](crate::node::Prefix::try_exact),
//! a strict alternative to the tree's own (silently truncating) prefix construction, offered for
//! callers that want a hard guarantee instead of truncation.

use thiserror::Error;

/// Errors produced by this crate's fallible constructors.
#[derive(Debug, Error, Eq, PartialEq)]
pub enum ArtError {
    /// A caller asked for an exact (non-truncating) prefix longer than [`MAX_PREFIX_LEN`](crate::MAX_PREFIX_LEN).
    #[error("prefix of {len} bytes exceeds the {max}-byte compressed prefix limit")]
    PrefixTooLong { len: usize, max: usize },
}
