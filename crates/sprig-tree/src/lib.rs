//! Template tree for the Sprig component precompiler.
//!
//! The scanner splits template source into segments, and the tree builder
//! pairs component open/close tags into this intermediate tree. The emitter
//! then rewrites each component node into its hydration placeholder while
//! text nodes pass through byte-for-byte.
//!
//! # Design
//!
//! The tree uses arena allocation with [`NodeId`] indices for all
//! relationships, providing O(1) access and traversal without borrow checker
//! issues.

use core::fmt::Write as _;

/// A type-safe index into the template tree.
///
/// `NodeId` provides O(1) access to any node in the tree without borrowing
/// issues.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(pub usize);

impl NodeId {
    /// The root node is always at index 0.
    pub const ROOT: NodeId = NodeId(0);
}

/// One attribute token as scanned off a component tag, before classification.
///
/// The name keeps any `:` / `$` prefix the author wrote; the value is `None`
/// for a bare boolean-flag token (`disabled` with no `=`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TagAttribute {
    /// Attribute name, prefix included.
    pub name: String,
    /// Raw attribute value, unescaped; `None` when no `=value` was written.
    pub value: Option<String>,
}

impl TagAttribute {
    /// Create a new attribute with the given name and optional value.
    #[must_use]
    pub const fn new(name: String, value: Option<String>) -> Self {
        Self { name, value }
    }
}

/// Component-specific data carried by a component node.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComponentData {
    /// The component tag name, verbatim (e.g. `User_Card`).
    pub tag_name: String,
    /// Scanned attributes in source order.
    pub attributes: Vec<TagAttribute>,
}

/// The kind of content a node holds.
#[derive(Debug, Clone)]
pub enum NodeType {
    /// The synthetic root holding a template's top-level content.
    Root,
    /// Literal template text, emitted byte-for-byte.
    Text(String),
    /// A recognized component tag, rewritten to a placeholder on emission.
    Component(ComponentData),
}

/// A node in the template tree.
///
/// Stores indices for parent/child/sibling relationships, enabling O(1)
/// traversal in any direction.
#[derive(Debug, Clone)]
pub struct Node {
    /// What this node holds.
    pub node_type: NodeType,
    /// Parent node, `None` for the root.
    pub parent: Option<NodeId>,
    /// Children in document order.
    pub children: Vec<NodeId>,
    /// The node immediately following this one in its parent's children.
    pub next_sibling: Option<NodeId>,
    /// The node immediately preceding this one in its parent's children.
    pub prev_sibling: Option<NodeId>,
}

/// Arena-based template tree with O(1) node access and traversal.
///
/// All nodes live in a contiguous vector, using indices for all
/// relationships:
/// - O(1) access to any node by [`NodeId`]
/// - O(1) parent/sibling traversal
/// - No borrowing issues (indices instead of references)
#[derive(Debug, Clone)]
pub struct TemplateTree {
    /// All nodes in the tree, indexed by `NodeId`.
    /// The Root node is always at index 0 (`NodeId::ROOT`).
    nodes: Vec<Node>,
}

impl TemplateTree {
    /// Create a new tree with just the root node.
    #[must_use]
    pub fn new() -> Self {
        let root = Node {
            node_type: NodeType::Root,
            parent: None,
            children: Vec::new(),
            next_sibling: None,
            prev_sibling: None,
        };
        TemplateTree { nodes: vec![root] }
    }

    /// Get the root node ID.
    #[must_use]
    pub const fn root(&self) -> NodeId {
        NodeId::ROOT
    }

    /// Get a node by its ID.
    #[must_use]
    pub fn get(&self, id: NodeId) -> Option<&Node> {
        self.nodes.get(id.0)
    }

    /// Get a mutable reference to a node by its ID.
    pub fn get_mut(&mut self, id: NodeId) -> Option<&mut Node> {
        self.nodes.get_mut(id.0)
    }

    /// Get the number of nodes in the tree.
    #[must_use]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Check if the tree is empty (should always have at least the root).
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Allocate a new node and return its ID.
    /// The node is not yet attached to the tree.
    pub fn alloc(&mut self, node_type: NodeType) -> NodeId {
        let id = NodeId(self.nodes.len());
        self.nodes.push(Node {
            node_type,
            parent: None,
            children: Vec::new(),
            next_sibling: None,
            prev_sibling: None,
        });
        id
    }

    /// Append `child` as the last child of `parent`, updating all
    /// relationships.
    ///
    /// # Panics
    ///
    /// Panics if either ID is out of bounds, indicating a builder bug.
    pub fn append_child(&mut self, parent: NodeId, child: NodeId) {
        // Get the current last child of parent (if any) to set up sibling links
        let prev_last_child = self.nodes[parent.0].children.last().copied();

        // Update parent's children list
        self.nodes[parent.0].children.push(child);

        // Set child's parent
        self.nodes[child.0].parent = Some(parent);

        // Set up sibling links
        if let Some(prev_id) = prev_last_child {
            self.nodes[prev_id.0].next_sibling = Some(child);
            self.nodes[child.0].prev_sibling = Some(prev_id);
        }
    }

    /// Replace a node's content with literal text.
    ///
    /// The tree builder uses this to restore an unpaired component tag to
    /// its raw source form so the output carries it byte-for-byte.
    ///
    /// # Panics
    ///
    /// Panics if the ID is out of bounds, indicating a builder bug.
    pub fn demote_to_text(&mut self, id: NodeId, raw: String) {
        self.nodes[id.0].node_type = NodeType::Text(raw);
    }

    /// Get the parent of a node.
    #[must_use]
    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.get(id).and_then(|n| n.parent)
    }

    /// Get all children of a node.
    #[must_use]
    pub fn children(&self, id: NodeId) -> &[NodeId] {
        self.get(id).map(|n| n.children.as_slice()).unwrap_or(&[])
    }

    /// Get the first child of a node.
    #[must_use]
    pub fn first_child(&self, id: NodeId) -> Option<NodeId> {
        self.get(id).and_then(|n| n.children.first().copied())
    }

    /// Get the last child of a node.
    #[must_use]
    pub fn last_child(&self, id: NodeId) -> Option<NodeId> {
        self.get(id).and_then(|n| n.children.last().copied())
    }

    /// Get the next sibling of a node.
    #[must_use]
    pub fn next_sibling(&self, id: NodeId) -> Option<NodeId> {
        self.get(id).and_then(|n| n.next_sibling)
    }

    /// Get the previous sibling of a node.
    #[must_use]
    pub fn prev_sibling(&self, id: NodeId) -> Option<NodeId> {
        self.get(id).and_then(|n| n.prev_sibling)
    }
}

impl Default for TemplateTree {
    fn default() -> Self {
        Self::new()
    }
}

/// Render an indented debug dump of the tree rooted at `id`.
///
/// Text content is shown with `{:?}` so whitespace is visible.
#[must_use]
pub fn fmt_tree(tree: &TemplateTree, id: NodeId, depth: usize) -> String {
    let mut out = String::new();
    let Some(node) = tree.get(id) else {
        return out;
    };
    let indent = "  ".repeat(depth);
    match &node.node_type {
        NodeType::Root => {
            let _ = writeln!(out, "{indent}Root");
        }
        NodeType::Text(data) => {
            let _ = writeln!(out, "{indent}Text {data:?}");
        }
        NodeType::Component(data) => {
            let _ = write!(out, "{indent}Component {}", data.tag_name);
            for attr in &data.attributes {
                match &attr.value {
                    Some(value) => {
                        let _ = write!(out, " {}={value:?}", attr.name);
                    }
                    None => {
                        let _ = write!(out, " {}", attr.name);
                    }
                }
            }
            out.push('\n');
        }
    }
    for child in tree.children(id) {
        out.push_str(&fmt_tree(tree, *child, depth + 1));
    }
    out
}
