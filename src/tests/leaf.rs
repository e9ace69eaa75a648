use crate::node::LeafNode;

#[test]
fn stores_key_and_value() {
    let leaf = LeafNode::new(b"hello".to_vec(), b"world".to_vec());
    assert_eq!(leaf.key(), b"hello");
    assert_eq!(leaf.value(), b"world");
}

#[test]
fn matches_only_its_own_key() {
    let leaf = LeafNode::new(b"abc".to_vec(), b"1".to_vec());
    assert!(leaf.matches(b"abc"));
    assert!(!leaf.matches(b"abcd"));
    assert!(!leaf.matches(b"ab"));
    assert!(!leaf.matches(b""));
}

#[test]
fn set_value_replaces_in_place() {
    let mut leaf = LeafNode::new(b"k".to_vec(), b"old".to_vec());
    leaf.set_value(b"new".to_vec());
    assert_eq!(leaf.value(), b"new");
    assert_eq!(leaf.key(), b"k");
}

#[test]
fn empty_key_and_value_are_valid() {
    let leaf = LeafNode::new(Vec::new(), Vec::new());
    assert!(leaf.matches(b""));
    assert_eq!(leaf.value(), b"");
}
