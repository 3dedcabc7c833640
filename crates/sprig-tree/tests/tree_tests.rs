//! Tests for template tree construction and traversal.

use sprig_tree::{ComponentData, NodeId, NodeType, TemplateTree, fmt_tree};

/// Helper to create a component node and return its NodeId.
fn alloc_component(tree: &mut TemplateTree, name: &str) -> NodeId {
    tree.alloc(NodeType::Component(ComponentData {
        tag_name: name.to_string(),
        attributes: Vec::new(),
    }))
}

/// Helper to create a text node and return its NodeId.
fn alloc_text(tree: &mut TemplateTree, data: &str) -> NodeId {
    tree.alloc(NodeType::Text(data.to_string()))
}

// ========== construction ==========

#[test]
fn test_new_tree_has_only_root() {
    let tree = TemplateTree::new();
    assert_eq!(tree.len(), 1);
    assert!(!tree.is_empty());
    assert_eq!(tree.root(), NodeId::ROOT);
    assert!(matches!(
        tree.get(NodeId::ROOT).unwrap().node_type,
        NodeType::Root
    ));
}

#[test]
fn test_alloc_does_not_attach() {
    let mut tree = TemplateTree::new();
    let node = alloc_text(&mut tree, "floating");
    assert_eq!(tree.parent(node), None);
    assert_eq!(tree.children(NodeId::ROOT), &[]);
}

// ========== append_child ==========

#[test]
fn test_append_child_sets_all_links() {
    let mut tree = TemplateTree::new();
    let a = alloc_text(&mut tree, "a");
    let b = alloc_component(&mut tree, "User_Card");
    let c = alloc_text(&mut tree, "c");
    tree.append_child(NodeId::ROOT, a);
    tree.append_child(NodeId::ROOT, b);
    tree.append_child(NodeId::ROOT, c);

    assert_eq!(tree.children(NodeId::ROOT), &[a, b, c]);
    assert_eq!(tree.parent(b), Some(NodeId::ROOT));
    assert_eq!(tree.first_child(NodeId::ROOT), Some(a));
    assert_eq!(tree.last_child(NodeId::ROOT), Some(c));
    assert_eq!(tree.next_sibling(a), Some(b));
    assert_eq!(tree.next_sibling(b), Some(c));
    assert_eq!(tree.next_sibling(c), None);
    assert_eq!(tree.prev_sibling(a), None);
    assert_eq!(tree.prev_sibling(b), Some(a));
}

#[test]
fn test_nested_children() {
    let mut tree = TemplateTree::new();
    let outer = alloc_component(&mut tree, "User_Card");
    let inner = alloc_component(&mut tree, "Alert_Box");
    let text = alloc_text(&mut tree, "hi");
    tree.append_child(NodeId::ROOT, outer);
    tree.append_child(outer, inner);
    tree.append_child(inner, text);

    assert_eq!(tree.parent(text), Some(inner));
    assert_eq!(tree.parent(inner), Some(outer));
    assert_eq!(tree.children(outer), &[inner]);
}

// ========== demote_to_text ==========

#[test]
fn test_demote_replaces_content_keeping_links() {
    let mut tree = TemplateTree::new();
    let node = alloc_component(&mut tree, "User_Card");
    tree.append_child(NodeId::ROOT, node);

    tree.demote_to_text(node, "<User_Card>".to_string());

    match &tree.get(node).unwrap().node_type {
        NodeType::Text(raw) => assert_eq!(raw, "<User_Card>"),
        other => panic!("expected text node, got {other:?}"),
    }
    assert_eq!(tree.parent(node), Some(NodeId::ROOT));
    assert_eq!(tree.children(NodeId::ROOT), &[node]);
}

// ========== fmt_tree ==========

#[test]
fn test_fmt_tree_indents_by_depth() {
    let mut tree = TemplateTree::new();
    let outer = alloc_component(&mut tree, "User_Card");
    let text = alloc_text(&mut tree, "hi");
    tree.append_child(NodeId::ROOT, outer);
    tree.append_child(outer, text);

    let dump = fmt_tree(&tree, tree.root(), 0);
    assert_eq!(dump, "Root\n  Component User_Card\n    Text \"hi\"\n");
}

#[test]
fn test_fmt_tree_missing_node_is_empty() {
    let tree = TemplateTree::new();
    assert_eq!(fmt_tree(&tree, NodeId(99), 0), "");
}
