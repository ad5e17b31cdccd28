//! # Outline Engine
//!
//! Structural editing of a [`Forest`] addressed by [`NodeId`].
//!
//! Every operation takes the current forest by reference and hands back a new
//! one inside an [`Edit`]; the input is never touched. That makes "did anything
//! change?" a plain equality check for callers deciding whether to persist.
//!
//! ## Addressing
//!
//! Ids are the only handle that survives an edit. Each operation re-derives the
//! node's [`Path`] (child indexes from the root sequence) with a depth-first
//! search, uses it once, and throws it away.
//!
//! An id that is not in the forest is not an error: the operation logs it and
//! returns the input unchanged. Stale ids are routine when edits race with
//! whatever is displaying the outline.
//!
//! ## Linearization
//!
//! [`flatten`] is the canonical pre-order walk. It drives indentation when the
//! outline is displayed, the 1-based positions used by the CLI, and the focus
//! successor after a deletion.

use crate::model::{Forest, NodeId, TodoNode};
use tracing::debug;

/// Child indexes from the root sequence down to a node.
pub type Path = Vec<usize>;

/// A node seen through the pre-order linearization.
#[derive(Debug, Clone, PartialEq)]
pub struct FlatNode<'a> {
    pub node: &'a TodoNode,
    pub depth: usize,
    pub path: Path,
}

/// Result of a structural operation.
#[derive(Debug, Clone, PartialEq)]
pub struct Edit {
    pub forest: Forest,
    /// The node that should receive input focus next, if the operation moved it.
    pub focus: Option<NodeId>,
}

impl Edit {
    fn unchanged(forest: &[TodoNode]) -> Self {
        Self {
            forest: forest.to_vec(),
            focus: None,
        }
    }

    fn new(forest: Forest, focus: Option<NodeId>) -> Self {
        Self { forest, focus }
    }
}

pub fn flatten(forest: &[TodoNode]) -> Vec<FlatNode<'_>> {
    let mut out = Vec::new();
    flatten_into(forest, 0, &mut Vec::new(), &mut out);
    out
}

fn flatten_into<'a>(
    nodes: &'a [TodoNode],
    depth: usize,
    prefix: &mut Path,
    out: &mut Vec<FlatNode<'a>>,
) {
    for (i, node) in nodes.iter().enumerate() {
        prefix.push(i);
        out.push(FlatNode {
            node,
            depth,
            path: prefix.clone(),
        });
        flatten_into(&node.children, depth + 1, prefix, out);
        prefix.pop();
    }
}

/// Total number of nodes at every depth.
pub fn count(forest: &[TodoNode]) -> usize {
    forest.iter().map(|n| 1 + count(&n.children)).sum()
}

pub fn find_path(forest: &[TodoNode], id: &NodeId) -> Option<Path> {
    for (i, node) in forest.iter().enumerate() {
        if &node.id == id {
            return Some(vec![i]);
        }
        if let Some(mut rest) = find_path(&node.children, id) {
            rest.insert(0, i);
            return Some(rest);
        }
    }
    None
}

pub fn node_at<'a>(forest: &'a [TodoNode], path: &[usize]) -> Option<&'a TodoNode> {
    let (first, rest) = path.split_first()?;
    let mut node = forest.get(*first)?;
    for &i in rest {
        node = node.children.get(i)?;
    }
    Some(node)
}

fn node_at_mut<'a>(forest: &'a mut [TodoNode], path: &[usize]) -> Option<&'a mut TodoNode> {
    let (first, rest) = path.split_first()?;
    let mut node = forest.get_mut(*first)?;
    for &i in rest {
        node = node.children.get_mut(i)?;
    }
    Some(node)
}

/// The sibling list a node lives in, given its parent's path (empty for roots).
fn siblings_mut<'a>(forest: &'a mut Forest, parent: &[usize]) -> Option<&'a mut Forest> {
    if parent.is_empty() {
        return Some(forest);
    }
    node_at_mut(forest, parent).map(|n| &mut n.children)
}

fn locate(forest: &[TodoNode], id: &NodeId, op: &str) -> Option<Path> {
    let path = find_path(forest, id);
    if path.is_none() {
        debug!(%id, op, "node not found, ignoring");
    }
    path
}

pub fn read_content<'a>(forest: &'a [TodoNode], id: &NodeId) -> Option<&'a str> {
    let path = locate(forest, id, "read")?;
    node_at(forest, &path).map(|n| n.content.as_str())
}

pub fn set_content(forest: &[TodoNode], id: &NodeId, text: &str) -> Edit {
    let Some(path) = locate(forest, id, "set_content") else {
        return Edit::unchanged(forest);
    };
    let mut next = forest.to_vec();
    if let Some(node) = node_at_mut(&mut next, &path) {
        node.content = text.to_string();
    }
    Edit::new(next, None)
}

/// Removes the node together with its whole subtree.
///
/// Focus moves to the first node after the removed subtree in pre-order,
/// falling back to the node just before it.
pub fn delete(forest: &[TodoNode], id: &NodeId) -> Edit {
    let flat = flatten(forest);
    let Some(pos) = flat.iter().position(|f| &f.node.id == id) else {
        debug!(%id, op = "delete", "node not found, ignoring");
        return Edit::unchanged(forest);
    };

    let depth = flat[pos].depth;
    let focus = flat[pos + 1..]
        .iter()
        .find(|f| f.depth <= depth)
        .or_else(|| pos.checked_sub(1).and_then(|p| flat.get(p)))
        .map(|f| f.node.id.clone());
    let path = flat[pos].path.clone();

    let mut next = forest.to_vec();
    if let Some((idx, parent)) = path.split_last() {
        if let Some(siblings) = siblings_mut(&mut next, parent) {
            siblings.remove(*idx);
        }
    }
    Edit::new(next, focus)
}

/// Makes the node the last child of its preceding sibling.
pub fn indent(forest: &[TodoNode], id: &NodeId) -> Edit {
    let Some(path) = locate(forest, id, "indent") else {
        return Edit::unchanged(forest);
    };
    let Some((&idx, parent)) = path.split_last() else {
        return Edit::unchanged(forest);
    };
    if idx == 0 {
        return Edit::unchanged(forest);
    }

    let mut next = forest.to_vec();
    if let Some(siblings) = siblings_mut(&mut next, parent) {
        let item = siblings.remove(idx);
        siblings[idx - 1].children.push(item);
    }
    Edit::new(next, None)
}

/// Moves the node into its grandparent's list, right after its former parent.
pub fn outdent(forest: &[TodoNode], id: &NodeId) -> Edit {
    let Some(path) = locate(forest, id, "outdent") else {
        return Edit::unchanged(forest);
    };
    if path.len() < 2 {
        return Edit::unchanged(forest);
    }

    let idx = path[path.len() - 1];
    let parent_idx = path[path.len() - 2];
    let parent_path = &path[..path.len() - 1];
    let grandparent_path = &path[..path.len() - 2];

    let mut next = forest.to_vec();
    let item = match siblings_mut(&mut next, parent_path) {
        Some(siblings) => siblings.remove(idx),
        None => return Edit::unchanged(forest),
    };
    if let Some(siblings) = siblings_mut(&mut next, grandparent_path) {
        siblings.insert(parent_idx + 1, item);
    }
    Edit::new(next, None)
}

pub fn insert_sibling_after(forest: &[TodoNode], id: &NodeId) -> Edit {
    let Some(path) = locate(forest, id, "insert_sibling_after") else {
        return Edit::unchanged(forest);
    };
    let Some((&idx, parent)) = path.split_last() else {
        return Edit::unchanged(forest);
    };

    let node = TodoNode::empty();
    let focus = node.id.clone();
    let mut next = forest.to_vec();
    if let Some(siblings) = siblings_mut(&mut next, parent) {
        siblings.insert(idx + 1, node);
    }
    Edit::new(next, Some(focus))
}

pub fn append(forest: &[TodoNode]) -> Edit {
    let node = TodoNode::empty();
    let focus = node.id.clone();
    let mut next = forest.to_vec();
    next.push(node);
    Edit::new(next, Some(focus))
}
