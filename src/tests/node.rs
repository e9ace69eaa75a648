use crate::error::ArtError;
use crate::node::{InnerNode, Node, NodeKind, Prefix};
use crate::MAX_PREFIX_LEN;

#[test]
fn prefix_new_truncates_past_the_cap() {
    let long = vec![7u8; MAX_PREFIX_LEN + 5];
    let prefix = Prefix::new(&long);
    assert_eq!(prefix.len(), MAX_PREFIX_LEN);
    assert_eq!(prefix.as_slice(), &long[..MAX_PREFIX_LEN]);
}

#[test]
fn prefix_try_exact_rejects_overflow() {
    let long = vec![1u8; MAX_PREFIX_LEN + 1];
    let err = Prefix::try_exact(&long).unwrap_err();
    assert_eq!(
        err,
        ArtError::PrefixTooLong {
            len: MAX_PREFIX_LEN + 1,
            max: MAX_PREFIX_LEN,
        }
    );
}

#[test]
fn prefix_try_exact_accepts_boundary() {
    let exact = vec![2u8; MAX_PREFIX_LEN];
    assert!(Prefix::try_exact(&exact).is_ok());
}

#[test]
fn prefix_check_counts_matching_run() {
    let prefix = Prefix::new(b"abcd");
    assert_eq!(prefix.check(b"abcx", 0), 3);
    assert_eq!(prefix.check(b"xbcd", 0), 0);
    assert_eq!(prefix.check(b"zzabcd", 2), 4);
}

#[test]
fn prefix_drop_front_shifts_remaining_bytes() {
    let mut prefix = Prefix::new(b"abcdef");
    prefix.drop_front(3);
    assert_eq!(prefix.as_slice(), b"def");
}

#[test]
fn node_leaf_and_inner_accessors_are_disjoint() {
    let leaf = Node::new_leaf(b"k".to_vec(), b"v".to_vec());
    assert!(leaf.as_leaf().is_some());
    assert!(leaf.as_inner().is_none());

    let inner = Node::new_inner(Prefix::new(b""));
    assert!(inner.as_leaf().is_none());
    assert!(inner.as_inner().is_some());
}

#[test]
fn inner_node_starts_as_node4_and_grows_by_tier() {
    let mut inner = InnerNode::new(Prefix::new(b""));
    assert_eq!(inner.kind(), NodeKind::Node4);

    for b in 0..4u8 {
        inner.add_child(b, Node::new_leaf(vec![b], vec![b]));
    }
    assert!(inner.is_full());
    inner.grow();
    assert_eq!(inner.kind(), NodeKind::Node16);
    for b in 0..4u8 {
        assert_eq!(inner.find_child(b).unwrap().as_leaf().unwrap().value(), &[b]);
    }

    for b in 4..16u8 {
        inner.add_child(b, Node::new_leaf(vec![b], vec![b]));
    }
    assert!(inner.is_full());
    inner.grow();
    assert_eq!(inner.kind(), NodeKind::Node48);
    for b in 0..16u8 {
        assert_eq!(inner.find_child(b).unwrap().as_leaf().unwrap().value(), &[b]);
    }

    for b in 16..48u8 {
        inner.add_child(b, Node::new_leaf(vec![b], vec![b]));
    }
    assert!(inner.is_full());
    inner.grow();
    assert_eq!(inner.kind(), NodeKind::Node256);
    for b in 0..48u8 {
        assert_eq!(inner.find_child(b).unwrap().as_leaf().unwrap().value(), &[b]);
    }
    assert!(!inner.is_full());
}

#[test]
fn terminal_child_is_disjoint_from_byte_indexed_slot_zero() {
    let mut inner = InnerNode::new(Prefix::new(b""));
    inner.add_child(0, Node::new_leaf(b"byte-zero".to_vec(), b"a".to_vec()));
    inner.set_terminal_child(Node::new_leaf(b"terminal".to_vec(), b"b".to_vec()));

    assert_eq!(inner.find_child(0).unwrap().as_leaf().unwrap().key(), b"byte-zero");
    assert_eq!(inner.terminal_child().unwrap().as_leaf().unwrap().key(), b"terminal");
}

#[test]
#[should_panic(expected = "terminal child already set")]
fn setting_terminal_child_twice_panics() {
    let mut inner = InnerNode::new(Prefix::new(b""));
    inner.set_terminal_child(Node::new_leaf(b"a".to_vec(), b"1".to_vec()));
    inner.set_terminal_child(Node::new_leaf(b"b".to_vec(), b"2".to_vec()));
}

#[test]
#[should_panic(expected = "add_child called on a full node without growing first")]
fn add_child_on_full_node_without_growing_panics() {
    let mut inner = InnerNode::new(Prefix::new(b""));
    for b in 0..4u8 {
        inner.add_child(b, Node::new_leaf(vec![b], vec![b]));
    }
    inner.add_child(4, Node::new_leaf(vec![4], vec![4]));
}
