use sidenote_core::host::memory::ParentMap;
use sidenote_core::TreeValidator;

fn chain() -> ParentMap {
    // a -> b -> c: c's parent is b, b's parent is a.
    let mut tree = ParentMap::new();
    tree.insert("a", None);
    tree.insert("b", Some("a".to_string()));
    tree.insert("c", Some("b".to_string()));
    tree
}

#[test]
fn is_descendant_is_transitive_over_the_chain() {
    let tree = chain();
    let validator = TreeValidator::new();

    assert!(validator.is_descendant(&tree, &"a".to_string(), &"b".to_string()));
    assert!(validator.is_descendant(&tree, &"b".to_string(), &"c".to_string()));
    assert!(validator.is_descendant(&tree, &"a".to_string(), &"c".to_string()));
}

#[test]
fn is_descendant_rejects_unrelated_and_inverted_pairs() {
    let mut tree = chain();
    tree.insert("x", None);

    let validator = TreeValidator::new();
    assert!(!validator.is_descendant(&tree, &"x".to_string(), &"c".to_string()));
    assert!(!validator.is_descendant(&tree, &"c".to_string(), &"a".to_string()));
    // A node is not its own descendant under the upward walk.
    assert!(!validator.is_descendant(&tree, &"a".to_string(), &"a".to_string()));
}

#[test]
fn validate_move_rejects_self_and_descendants() {
    let tree = chain();
    let validator = TreeValidator::new();

    let err = validator
        .validate_move(&tree, &"a".to_string(), &"c".to_string())
        .unwrap_err();
    assert_eq!(err.node, "a");
    assert_eq!(err.new_parent, "c");

    assert!(validator
        .validate_move(&tree, &"a".to_string(), &"a".to_string())
        .is_err());
    assert!(validator
        .validate_move(&tree, &"a".to_string(), &"b".to_string())
        .is_err());
}

#[test]
fn validate_move_accepts_non_descendant_parents() {
    let mut tree = chain();
    tree.insert("x", None);
    let validator = TreeValidator::new();

    assert!(validator
        .validate_move(&tree, &"c".to_string(), &"a".to_string())
        .is_ok());
    assert!(validator
        .validate_move(&tree, &"b".to_string(), &"x".to_string())
        .is_ok());
}

#[test]
fn deep_trees_validate_up_to_the_walk_cap() {
    let mut tree = ParentMap::new();
    tree.insert("f0", None);
    for depth in 1..90 {
        tree.insert(format!("f{depth}"), Some(format!("f{}", depth - 1)));
    }

    let validator = TreeValidator::new();
    // Moving the root under the deepest leaf closes a 90-level cycle.
    assert!(validator
        .validate_move(&tree, &"f0".to_string(), &"f89".to_string())
        .is_err());
    assert!(validator
        .validate_move(&tree, &"f89".to_string(), &"f0".to_string())
        .is_ok());
}
