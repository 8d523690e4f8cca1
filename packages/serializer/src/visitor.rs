use crate::node::{Child, TreeNode};

/// Visitor pattern for traversing rendered trees immutably
///
/// The default implementation walks every element child in order. Text
/// children are not visited.
pub trait NodeVisitor<'a>: Sized {
    fn visit_node(&mut self, node: &'a TreeNode) {
        walk_node(self, node);
    }
}

/// Mutable counterpart of [`NodeVisitor`]
pub trait NodeVisitorMut: Sized {
    fn visit_node_mut(&mut self, node: &mut TreeNode) {
        walk_node_mut(self, node);
    }
}

pub fn walk_node<'a, V: NodeVisitor<'a>>(visitor: &mut V, node: &'a TreeNode) {
    for child in node.child_nodes() {
        visitor.visit_node(child);
    }
}

pub fn walk_node_mut<V: NodeVisitorMut>(visitor: &mut V, node: &mut TreeNode) {
    if let Some(children) = node.children.as_mut() {
        for child in children.iter_mut() {
            if let Child::Node(child) = child {
                visitor.visit_node_mut(child);
            }
        }
    }
}

struct Flatten<'a> {
    nodes: Vec<&'a TreeNode>,
}

impl<'a> NodeVisitor<'a> for Flatten<'a> {
    fn visit_node(&mut self, node: &'a TreeNode) {
        self.nodes.push(node);
        walk_node(self, node);
    }
}

struct MarkProcessed {
    marked: usize,
}

impl NodeVisitorMut for MarkProcessed {
    fn visit_node_mut(&mut self, node: &mut TreeNode) {
        node.processed = true;
        self.marked += 1;
        walk_node_mut(self, node);
    }
}

/// All nodes of the tree in pre-order, root first
pub fn flatten(root: &TreeNode) -> Vec<&TreeNode> {
    let mut flatten = Flatten { nodes: Vec::new() };
    flatten.visit_node(root);
    flatten.nodes
}

/// Mark the root and every descendant as processed. Returns the number of
/// nodes marked.
pub fn mark_processed(root: &mut TreeNode) -> usize {
    let mut marker = MarkProcessed { marked: 0 };
    marker.visit_node_mut(root);
    marker.marked
}
