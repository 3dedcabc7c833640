//! Tree builder: pairs the scanner's flat segment stream into a
//! [`TemplateTree`] using a stack of open component frames.
//!
//! Pairing is strictly LIFO. A close tag matching the innermost open frame
//! closes it normally; mismatches degrade gracefully instead of failing:
//! - A close tag matching a deeper frame first degrades every frame above
//!   it back to literal text (their children are spliced up a level).
//! - A close tag matching no open frame becomes literal text itself.
//! - Frames still open at end of input degrade to literal text.
//!
//! The only fatal condition is component nesting deeper than the configured
//! limit, which aborts the whole compile with
//! [`CompileError::NestingTooDeep`].

use sprig_common::warning::warn_once;
use sprig_tree::{ComponentData, NodeId, NodeType, TemplateTree};

use crate::error::CompileError;
use crate::scanner::Segment;

/// Default limit on component nesting depth.
pub const DEFAULT_MAX_DEPTH: usize = 64;

/// One open component tag awaiting its close.
///
/// Children are collected here and only attached to the tree when the frame
/// closes; a degraded frame splices them into its parent instead.
struct OpenFrame {
    /// The component node allocated for this open tag.
    node: NodeId,
    /// The tag name, used to match the close tag.
    name: String,
    /// The exact source slice of the open tag, restored on degradation.
    raw: String,
    /// Children collected so far, in document order.
    children: Vec<NodeId>,
}

/// Builds a [`TemplateTree`] from a segment stream.
pub struct TreeBuilder {
    segments: Vec<Segment>,
    max_depth: usize,
}

impl TreeBuilder {
    /// Create a builder with the default nesting limit.
    #[must_use]
    pub const fn new(segments: Vec<Segment>) -> Self {
        TreeBuilder {
            segments,
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }

    /// Override the nesting limit.
    #[must_use]
    pub const fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    /// Consume the segment stream and build the tree.
    ///
    /// # Errors
    ///
    /// Returns [`CompileError::NestingTooDeep`] when an open tag would nest
    /// components deeper than the configured limit.
    pub fn build(self) -> Result<TemplateTree, CompileError> {
        let mut tree = TemplateTree::new();
        let mut stack: Vec<OpenFrame> = Vec::new();
        let mut root_children: Vec<NodeId> = Vec::new();

        for segment in self.segments {
            match segment {
                Segment::Text { data } => {
                    let node = tree.alloc(NodeType::Text(data));
                    Self::current_children(&mut stack, &mut root_children).push(node);
                }
                Segment::OpenTag {
                    name,
                    attributes,
                    self_closing,
                    raw,
                } => {
                    let node = tree.alloc(NodeType::Component(ComponentData {
                        tag_name: name.clone(),
                        attributes,
                    }));
                    if self_closing {
                        Self::current_children(&mut stack, &mut root_children).push(node);
                    } else {
                        if stack.len() >= self.max_depth {
                            return Err(CompileError::NestingTooDeep {
                                limit: self.max_depth,
                            });
                        }
                        stack.push(OpenFrame {
                            node,
                            name,
                            raw,
                            children: Vec::new(),
                        });
                    }
                }
                Segment::CloseTag { name, raw } => {
                    if stack.iter().any(|frame| frame.name == name) {
                        // Degrade everything inside the matching frame that
                        // was left open.
                        while stack
                            .last()
                            .is_some_and(|frame| frame.name != name)
                        {
                            Self::degrade_top(&mut tree, &mut stack, &mut root_children);
                        }
                        if let Some(frame) = stack.pop() {
                            for child in &frame.children {
                                tree.append_child(frame.node, *child);
                            }
                            Self::current_children(&mut stack, &mut root_children)
                                .push(frame.node);
                        }
                    } else {
                        warn_once(
                            "Builder",
                            &format!("close tag </{name}> matches no open component tag"),
                        );
                        let node = tree.alloc(NodeType::Text(raw));
                        Self::current_children(&mut stack, &mut root_children).push(node);
                    }
                }
            }
        }

        // Anything still open at end of input was never closed.
        while !stack.is_empty() {
            Self::degrade_top(&mut tree, &mut stack, &mut root_children);
        }

        let root = tree.root();
        for child in root_children {
            tree.append_child(root, child);
        }
        Ok(tree)
    }

    /// The child list currently receiving nodes: the innermost open frame's,
    /// or the root's when no frame is open.
    fn current_children<'a>(
        stack: &'a mut Vec<OpenFrame>,
        root_children: &'a mut Vec<NodeId>,
    ) -> &'a mut Vec<NodeId> {
        stack
            .last_mut()
            .map_or(root_children, |frame| &mut frame.children)
    }

    /// Degrade the innermost open frame: its node becomes the raw open-tag
    /// text and its children are spliced after it, one level up.
    fn degrade_top(
        tree: &mut TemplateTree,
        stack: &mut Vec<OpenFrame>,
        root_children: &mut Vec<NodeId>,
    ) {
        let Some(frame) = stack.pop() else {
            return;
        };
        warn_once(
            "Builder",
            &format!(
                "open tag <{}> has no matching close tag, left as literal text",
                frame.name
            ),
        );
        tree.demote_to_text(frame.node, frame.raw);
        let receiving = Self::current_children(stack, root_children);
        receiving.push(frame.node);
        receiving.extend(frame.children);
    }
}
