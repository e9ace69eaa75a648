// Copyright (c) The Art Tree Contributors
// SPDX-License-Identifier: Apache-2.0

//! [`Tree`], the ordered byte-string map built on the adaptive node layouts in [`crate::node`].

use crate::node::{InnerNode, Node, Prefix};
use crate::MAX_PREFIX_LEN;

/// An in-memory Adaptive Radix Tree mapping byte-string keys to byte-string values.
///
/// `Tree` is single-threaded and non-reentrant: it implements no internal synchronization and
/// makes no promise of `Send`/`Sync`. Callers serialize access externally if they need it from
/// more than one thread.
#[derive(Debug, Default)]
pub struct Tree {
    root: Option<Node>,
    len: usize,
}

impl Tree {
    /// Creates an empty tree.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of distinct keys currently stored.
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Associates `value` with `key`, replacing any prior association.
    ///
    /// Always returns `true`. The return value exists for interface symmetry with a fallible
    /// variant, not because insertion here can fail.
    pub fn insert(&mut self, key: &[u8], value: &[u8]) -> bool {
        let span = tracing::trace_span!("art_insert", key_len = key.len(), value_len = value.len());
        let _enter = span.enter();
        match &mut self.root {
            None => {
                self.root = Some(Node::new_leaf(key.to_vec(), value.to_vec()));
                self.len += 1;
                tracing::debug!("inserted first key into empty tree");
            }
            Some(root) => {
                if insert_at(root, key, value, 0) {
                    self.len += 1;
                }
            }
        }
        true
    }

    /// Looks up `key`, returning the stored value on a hit or `None` on a miss.
    pub fn search(&self, key: &[u8]) -> Option<&[u8]> {
        let span = tracing::trace_span!("art_search", key_len = key.len());
        let _enter = span.enter();

        let mut cur = self.root.as_ref()?;
        let mut depth = 0;
        loop {
            match cur {
                Node::Leaf(leaf) => {
                    return if leaf.matches(key) { Some(leaf.value()) } else { None };
                }
                Node::Inner(inner) => {
                    let prefix_len = inner.prefix().len();
                    if inner.check_prefix(key, depth) != prefix_len {
                        return None;
                    }
                    depth += prefix_len;
                    cur = if depth == key.len() {
                        inner.terminal_child()?
                    } else {
                        inner.find_child(key[depth])?
                    };
                    depth += 1;
                }
            }
        }
    }
}

/// Recursive insert, operating on an existing node in place.
///
/// Returns `true` if this call added a brand new key to the tree (so the caller should bump
/// `Tree::len`), `false` if it only replaced an existing leaf's value.
fn insert_at(node: &mut Node, key: &[u8], value: &[u8], depth: usize) -> bool {
    match node {
        Node::Leaf(leaf) => {
            if leaf.matches(key) {
                leaf.set_value(value.to_vec());
                tracing::debug!(depth, "replaced value of existing leaf");
                return false;
            }

            let old_key = leaf.key().to_vec();
            // Capped at MAX_PREFIX_LEN: the new node's prefix can only store this many bytes, so
            // the split point must agree with what Prefix::new will actually keep.
            let lcp = longest_common_prefix(key, &old_key, depth).min(MAX_PREFIX_LEN);
            let split_at = depth + lcp;
            tracing::debug!(depth, split_at, "splitting leaf into new inner node");

            let old_node = std::mem::take(node);
            let mut inner = InnerNode::new(Prefix::new(&key[depth..split_at]));
            install_leaf(&mut inner, &old_key, split_at, old_node);
            *node = Node::Inner(Box::new(inner));

            // Re-enter at `depth`, not `split_at`: `node` now holds the inner node just built in
            // place at tree-depth `depth`, whose prefix is `key[depth..split_at]`. The common run
            // may have been longer than MAX_PREFIX_LEN let this node compress, in which case
            // `old_node` now sits at the edge byte `key[split_at]` too; re-entering Case C at
            // `depth` walks this same node again, matches its prefix, and continues from there,
            // chaining another compressed-prefix node below it rather than colliding the two keys
            // on the same edge.
            insert_at(node, key, value, depth)
        }
        Node::Inner(inner) => {
            let prefix_len = inner.prefix().len();
            let common = inner.check_prefix(key, depth);

            if common < prefix_len {
                // The key diverges partway through this node's compressed prefix: split it.
                let split_point = depth + common;
                let mismatch_byte = inner.prefix().as_slice()[common];
                let new_prefix = Prefix::new(&inner.prefix().as_slice()[..common]);
                inner.prefix_mut().drop_front(common + 1);
                tracing::debug!(depth, common, "prefix mismatch, splitting inner node");

                let old_node = std::mem::take(node);
                let mut new_parent = InnerNode::new(new_prefix);
                new_parent.add_child(mismatch_byte, old_node);
                install_leaf(
                    &mut new_parent,
                    key,
                    split_point,
                    Node::new_leaf(key.to_vec(), value.to_vec()),
                );
                *node = Node::Inner(Box::new(new_parent));
                return true;
            }

            let next_depth = depth + prefix_len;
            if next_depth == key.len() {
                match inner.terminal_child_mut() {
                    Some(child) => insert_at(child, key, value, next_depth + 1),
                    None => {
                        inner.set_terminal_child(Node::new_leaf(key.to_vec(), value.to_vec()));
                        true
                    }
                }
            } else {
                let byte = key[next_depth];
                if let Some(child) = inner.find_child_mut(byte) {
                    insert_at(child, key, value, next_depth + 1)
                } else {
                    if inner.is_full() {
                        tracing::debug!(from = ?inner.kind(), "growing inner node");
                        inner.grow();
                    }
                    inner.add_child(byte, Node::new_leaf(key.to_vec(), value.to_vec()));
                    true
                }
            }
        }
    }
}

/// Installs `leaf` on `inner` at the edge `full_key` takes from `depth`: the dedicated terminal
/// slot if `full_key` ends exactly there, otherwise the byte-indexed slot for `full_key[depth]`.
fn install_leaf(inner: &mut InnerNode, full_key: &[u8], depth: usize, leaf: Node) {
    if depth == full_key.len() {
        inner.set_terminal_child(leaf);
    } else {
        inner.add_child(full_key[depth], leaf);
    }
}

/// Counts matching bytes between `a[depth..]` and `b[depth..]`.
fn longest_common_prefix(a: &[u8], b: &[u8], depth: usize) -> usize {
    a[depth..]
        .iter()
        .zip(b[depth..].iter())
        .take_while(|(x, y)| x == y)
        .count()
}
