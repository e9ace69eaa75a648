// Copyright (c) The Art Tree Contributors
// SPDX-License-Identifier: Apache-2.0

//! Node representations of the tree: the compressed path [`Prefix`], the [`LeafNode`] key/value
//! pair, and the four capacity-indexed byte-indexed layouts ([`Inner4Node`], [`Inner16Node`],
//! [`Inner48Node`], [`Inner256Node`]) that a growing [`InnerNode`] adapts between.

use crate::error::ArtError;
use crate::MAX_PREFIX_LEN;

/// A compressed path prefix, capped at [`MAX_PREFIX_LEN`] bytes.
///
/// Any shared run longer than the cap is simply not compressed beyond the cap: the remaining
/// bytes surface as ordinary one-edge-per-byte internal nodes further down the tree. This keeps
/// `prefix_len` bounded by construction rather than requiring the optimistic verification the
/// canonical ART paper uses for uncapped prefixes.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct Prefix {
    buf: [u8; MAX_PREFIX_LEN],
    len: usize,
}

impl Prefix {
    /// Builds a prefix from `bytes`, silently truncating to [`MAX_PREFIX_LEN`].
    pub fn new(bytes: &[u8]) -> Self {
        let len = bytes.len().min(MAX_PREFIX_LEN);
        let mut buf = [0u8; MAX_PREFIX_LEN];
        buf[..len].copy_from_slice(&bytes[..len]);
        Self { buf, len }
    }

    /// Builds a prefix from `bytes`, failing instead of truncating when `bytes` overflows the cap.
    pub fn try_exact(bytes: &[u8]) -> Result<Self, ArtError> {
        if bytes.len() > MAX_PREFIX_LEN {
            return Err(ArtError::PrefixTooLong {
                len: bytes.len(),
                max: MAX_PREFIX_LEN,
            });
        }
        Ok(Self::new(bytes))
    }

    pub fn as_slice(&self) -> &[u8] {
        &self.buf[..self.len]
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Longest common prefix between this prefix and `key[depth..]`, bounded by `self.len()`.
    pub(crate) fn check(&self, key: &[u8], depth: usize) -> usize {
        self.as_slice()
            .iter()
            .zip(key[depth..].iter())
            .take_while(|(a, b)| a == b)
            .count()
    }

    /// Drops the first `n` bytes (used when a split consumes the prefix up through the mismatch
    /// point and the edge byte right after it).
    pub(crate) fn drop_front(&mut self, n: usize) {
        let remaining = self.len - n;
        self.buf.copy_within(n..self.len, 0);
        self.len = remaining;
    }
}

/// A leaf: one owned (key, value) byte-string pair.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct LeafNode {
    key: Vec<u8>,
    value: Vec<u8>,
}

impl LeafNode {
    pub fn new(key: Vec<u8>, value: Vec<u8>) -> Self {
        Self { key, value }
    }

    pub fn key(&self) -> &[u8] {
        &self.key
    }

    pub fn value(&self) -> &[u8] {
        &self.value
    }

    pub(crate) fn matches(&self, key: &[u8]) -> bool {
        self.key == key
    }

    pub(crate) fn set_value(&mut self, value: Vec<u8>) {
        self.value = value;
    }
}

/// A tree node: either a leaf or a boxed inner node.
///
/// `Inner` is boxed so that `Node` stays small enough to live inline in the byte-indexed slot
/// arrays below without every slot paying for the largest inner layout's size.
#[derive(Debug)]
pub enum Node {
    Leaf(LeafNode),
    Inner(Box<InnerNode>),
}

impl Default for Node {
    /// An empty placeholder, used only transiently while a node is being replaced in place via
    /// `std::mem::take`. Never observable from outside a single `insert` call.
    fn default() -> Self {
        Node::Leaf(LeafNode::new(Vec::new(), Vec::new()))
    }
}

impl Node {
    pub fn new_leaf(key: Vec<u8>, value: Vec<u8>) -> Self {
        Node::Leaf(LeafNode::new(key, value))
    }

    pub(crate) fn new_inner(prefix: Prefix) -> Self {
        Node::Inner(Box::new(InnerNode::new(prefix)))
    }

    pub fn as_leaf(&self) -> Option<&LeafNode> {
        match self {
            Node::Leaf(leaf) => Some(leaf),
            Node::Inner(_) => None,
        }
    }

    pub fn as_inner(&self) -> Option<&InnerNode> {
        match self {
            Node::Inner(inner) => Some(inner),
            Node::Leaf(_) => None,
        }
    }

    #[cfg(test)]
    pub(crate) fn as_inner_mut(&mut self) -> Option<&mut InnerNode> {
        match self {
            Node::Inner(inner) => Some(inner),
            Node::Leaf(_) => None,
        }
    }
}

/// The byte-indexed body of an [`InnerNode`]: one of the four adaptive capacity tiers.
#[derive(Debug)]
pub(crate) enum InnerBody {
    Node4(Inner4Node),
    Node16(Inner16Node),
    Node48(Inner48Node),
    Node256(Inner256Node),
}

/// A kind tag, exposed for callers (and tests) that want to observe which layout a node
/// currently wears without reaching into the private body.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum NodeKind {
    Node4,
    Node16,
    Node48,
    Node256,
}

/// An internal node: a compressed prefix plus an adaptive byte-indexed body and one dedicated
/// slot for a child reached when the key ends exactly at this node's depth. The dedicated slot
/// keeps a stored `0x00` byte and "key ends here" distinguishable no matter which body tier is
/// active.
#[derive(Debug)]
pub struct InnerNode {
    prefix: Prefix,
    terminal_child: Option<Box<Node>>,
    body: InnerBody,
}

impl InnerNode {
    pub(crate) fn new(prefix: Prefix) -> Self {
        Self {
            prefix,
            terminal_child: None,
            body: InnerBody::Node4(Inner4Node::new()),
        }
    }

    pub fn prefix(&self) -> &Prefix {
        &self.prefix
    }

    pub(crate) fn prefix_mut(&mut self) -> &mut Prefix {
        &mut self.prefix
    }

    pub fn kind(&self) -> NodeKind {
        match &self.body {
            InnerBody::Node4(_) => NodeKind::Node4,
            InnerBody::Node16(_) => NodeKind::Node16,
            InnerBody::Node48(_) => NodeKind::Node48,
            InnerBody::Node256(_) => NodeKind::Node256,
        }
    }

    /// Longest common prefix between `self.prefix` and `key[depth..]`, bounded by `prefix.len()`.
    pub(crate) fn check_prefix(&self, key: &[u8], depth: usize) -> usize {
        self.prefix.check(key, depth)
    }

    pub(crate) fn terminal_child(&self) -> Option<&Node> {
        self.terminal_child.as_deref()
    }

    pub(crate) fn terminal_child_mut(&mut self) -> Option<&mut Node> {
        self.terminal_child.as_deref_mut()
    }

    pub(crate) fn set_terminal_child(&mut self, node: Node) {
        debug_assert!(self.terminal_child.is_none(), "terminal child already set");
        self.terminal_child = Some(Box::new(node));
    }

    pub(crate) fn find_child(&self, byte: u8) -> Option<&Node> {
        match &self.body {
            InnerBody::Node4(n) => n.find(byte),
            InnerBody::Node16(n) => n.find(byte),
            InnerBody::Node48(n) => n.find(byte),
            InnerBody::Node256(n) => n.find(byte),
        }
    }

    pub(crate) fn find_child_mut(&mut self, byte: u8) -> Option<&mut Node> {
        match &mut self.body {
            InnerBody::Node4(n) => n.find_mut(byte),
            InnerBody::Node16(n) => n.find_mut(byte),
            InnerBody::Node48(n) => n.find_mut(byte),
            InnerBody::Node256(n) => n.find_mut(byte),
        }
    }

    /// Whether the byte-indexed body is at capacity. `terminal_child` never affects this: it
    /// lives outside every byte-indexed layout.
    pub(crate) fn is_full(&self) -> bool {
        match &self.body {
            InnerBody::Node4(n) => n.is_full(),
            InnerBody::Node16(n) => n.is_full(),
            InnerBody::Node48(n) => n.is_full(),
            InnerBody::Node256(_) => false,
        }
    }

    /// Adds `child` at `byte`. The caller must have already grown the node if `is_full()`: a full
    /// body is the growth protocol's cue, not a condition this method reports to its caller. A
    /// call that arrives full anyway is a bug upstream and halts rather than silently dropping
    /// the child.
    pub(crate) fn add_child(&mut self, byte: u8, child: Node) {
        let placed = match &mut self.body {
            InnerBody::Node4(n) => n.add(byte, child),
            InnerBody::Node16(n) => n.add(byte, child),
            InnerBody::Node48(n) => n.add(byte, child),
            InnerBody::Node256(n) => n.add(byte, child),
        };
        assert!(placed, "add_child called on a full node without growing first");
    }

    /// Promotes the byte-indexed body to the next capacity tier, preserving the mapping from
    /// byte to child. `terminal_child` is untouched: it is not part of any byte-indexed layout.
    ///
    /// The Inner-48 to Inner-256 transition installs each child at the byte value recorded in
    /// the 256-entry index table, not at its compact-array slot number. The compact slot number
    /// carries no byte identity of its own.
    pub(crate) fn grow(&mut self) {
        self.body = match &mut self.body {
            InnerBody::Node4(n) => {
                let old = std::mem::replace(n, Inner4Node::new());
                let mut grown = Inner16Node::new();
                for (byte, child) in old.into_entries() {
                    grown.add(byte, child);
                }
                InnerBody::Node16(grown)
            }
            InnerBody::Node16(n) => {
                let old = std::mem::replace(n, Inner16Node::new());
                let mut grown = Inner48Node::new();
                for (byte, child) in old.into_entries() {
                    grown.add(byte, child);
                }
                InnerBody::Node48(grown)
            }
            InnerBody::Node48(n) => {
                let old = std::mem::replace(n, Inner48Node::new());
                let mut grown = Inner256Node::new();
                for (byte, child) in old.into_entries() {
                    grown.add(byte, child);
                }
                InnerBody::Node256(grown)
            }
            InnerBody::Node256(_) => unreachable!("Inner-256 has no further capacity tier to grow into"),
        };
    }
}

const EMPTY_SLOT: u8 = 0xFF;

/// Up to 4 (byte, child) pairs, filled low-to-high in insertion order.
#[derive(Debug)]
pub(crate) struct Inner4Node {
    keys: [u8; 4],
    children: [Option<Box<Node>>; 4],
    len: u8,
}

impl Inner4Node {
    fn new() -> Self {
        Self {
            keys: [0; 4],
            children: std::array::from_fn(|_| None),
            len: 0,
        }
    }

    fn is_full(&self) -> bool {
        self.len as usize == self.keys.len()
    }

    fn find(&self, byte: u8) -> Option<&Node> {
        (0..self.len as usize)
            .find(|&i| self.keys[i] == byte)
            .map(|i| self.children[i].as_deref().expect("occupied slot"))
    }

    fn find_mut(&mut self, byte: u8) -> Option<&mut Node> {
        let idx = (0..self.len as usize).find(|&i| self.keys[i] == byte)?;
        Some(self.children[idx].as_deref_mut().expect("occupied slot"))
    }

    fn add(&mut self, byte: u8, child: Node) -> bool {
        if self.is_full() {
            return false;
        }
        let idx = self.len as usize;
        self.keys[idx] = byte;
        self.children[idx] = Some(Box::new(child));
        self.len += 1;
        true
    }

    fn into_entries(self) -> Vec<(u8, Node)> {
        let len = self.len as usize;
        self.keys[..len]
            .iter()
            .copied()
            .zip(self.children)
            .filter_map(|(byte, child)| child.map(|c| (byte, *c)))
            .collect()
    }
}

/// Up to 16 (byte, child) pairs, filled low-to-high in insertion order.
#[derive(Debug)]
pub(crate) struct Inner16Node {
    keys: [u8; 16],
    children: [Option<Box<Node>>; 16],
    len: u8,
}

impl Inner16Node {
    fn new() -> Self {
        Self {
            keys: [0; 16],
            children: std::array::from_fn(|_| None),
            len: 0,
        }
    }

    fn is_full(&self) -> bool {
        self.len as usize == self.keys.len()
    }

    fn find(&self, byte: u8) -> Option<&Node> {
        (0..self.len as usize)
            .find(|&i| self.keys[i] == byte)
            .map(|i| self.children[i].as_deref().expect("occupied slot"))
    }

    fn find_mut(&mut self, byte: u8) -> Option<&mut Node> {
        let idx = (0..self.len as usize).find(|&i| self.keys[i] == byte)?;
        Some(self.children[idx].as_deref_mut().expect("occupied slot"))
    }

    fn add(&mut self, byte: u8, child: Node) -> bool {
        if self.is_full() {
            return false;
        }
        let idx = self.len as usize;
        self.keys[idx] = byte;
        self.children[idx] = Some(Box::new(child));
        self.len += 1;
        true
    }

    fn into_entries(self) -> Vec<(u8, Node)> {
        let len = self.len as usize;
        self.keys[..len]
            .iter()
            .copied()
            .zip(self.children)
            .filter_map(|(byte, child)| child.map(|c| (byte, *c)))
            .collect()
    }
}

/// Up to 48 children in a compact array, addressed through a 256-entry byte-to-slot index.
#[derive(Debug)]
pub(crate) struct Inner48Node {
    index: [u8; 256],
    children: [Option<Box<Node>>; 48],
    len: u8,
}

impl Inner48Node {
    fn new() -> Self {
        Self {
            index: [EMPTY_SLOT; 256],
            children: std::array::from_fn(|_| None),
            len: 0,
        }
    }

    fn is_full(&self) -> bool {
        self.len as usize == self.children.len()
    }

    fn find(&self, byte: u8) -> Option<&Node> {
        let slot = self.index[byte as usize];
        if slot == EMPTY_SLOT {
            return None;
        }
        self.children[slot as usize].as_deref()
    }

    fn find_mut(&mut self, byte: u8) -> Option<&mut Node> {
        let slot = self.index[byte as usize];
        if slot == EMPTY_SLOT {
            return None;
        }
        self.children[slot as usize].as_deref_mut()
    }

    fn add(&mut self, byte: u8, child: Node) -> bool {
        if self.is_full() {
            return false;
        }
        let slot = (0..self.children.len())
            .find(|&i| self.children[i].is_none())
            .expect("len tracks occupied slots, a free slot must exist");
        self.children[slot] = Some(Box::new(child));
        self.index[byte as usize] = slot as u8;
        self.len += 1;
        true
    }

    /// Consumes the node, yielding `(byte, child)` pairs in ascending byte order by scanning the
    /// index table. The index is the sole authority for byte identity, not the compact slot
    /// number a child happens to occupy.
    fn into_entries(self) -> Vec<(u8, Node)> {
        let Self { index, mut children, .. } = self;
        (0u16..256)
            .filter_map(|b| {
                let slot = index[b as usize];
                if slot == EMPTY_SLOT {
                    return None;
                }
                children[slot as usize].take().map(|c| (b as u8, *c))
            })
            .collect()
    }
}

/// Up to 256 children, direct-mapped by byte.
#[derive(Debug)]
pub(crate) struct Inner256Node {
    children: [Option<Box<Node>>; 256],
}

impl Inner256Node {
    fn new() -> Self {
        Self {
            children: std::array::from_fn(|_| None),
        }
    }

    fn find(&self, byte: u8) -> Option<&Node> {
        self.children[byte as usize].as_deref()
    }

    fn find_mut(&mut self, byte: u8) -> Option<&mut Node> {
        self.children[byte as usize].as_deref_mut()
    }

    fn add(&mut self, byte: u8, child: Node) -> bool {
        if self.children[byte as usize].is_some() {
            return false;
        }
        self.children[byte as usize] = Some(Box::new(child));
        true
    }
}
