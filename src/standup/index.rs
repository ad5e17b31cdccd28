//! # Positions
//!
//! Node ids are UUIDs, which nobody wants to type. The CLI instead shows every
//! node with its 1-based position in the pre-order walk of its section:
//!
//! ```text
//! Today
//!   1. Ship release
//!     2. write notes
//!     3. tag
//!   4. Review PRs
//! ```
//!
//! A position is only meaningful against the forest it was computed from, so
//! it is resolved to a [`NodeId`] once, right before the edit, and the engine
//! works on the id from there on.

use crate::model::{NodeId, TodoNode};
use crate::outline::flatten;
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Position(usize);

impl Position {
    pub fn new(n: usize) -> Option<Self> {
        (n > 0).then_some(Self(n))
    }

    pub fn get(&self) -> usize {
        self.0
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for Position {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim()
            .trim_end_matches('.')
            .parse::<usize>()
            .ok()
            .and_then(Position::new)
            .ok_or_else(|| format!("Invalid position: {} (expected 1, 2, 3...)", s))
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct IndexedNode<'a> {
    pub position: Position,
    pub depth: usize,
    pub node: &'a TodoNode,
}

pub fn index_nodes(forest: &[TodoNode]) -> Vec<IndexedNode<'_>> {
    flatten(forest)
        .into_iter()
        .enumerate()
        .map(|(i, flat)| IndexedNode {
            position: Position(i + 1),
            depth: flat.depth,
            node: flat.node,
        })
        .collect()
}

pub fn resolve(forest: &[TodoNode], position: Position) -> Option<NodeId> {
    flatten(forest)
        .get(position.get() - 1)
        .map(|flat| flat.node.id.clone())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn forest() -> Vec<TodoNode> {
        vec![
            TodoNode::new("a").with_children(vec![TodoNode::new("a1")]),
            TodoNode::new("b"),
        ]
    }

    #[test]
    fn positions_follow_pre_order() {
        let forest = forest();
        let indexed = index_nodes(&forest);
        let seen: Vec<_> = indexed
            .iter()
            .map(|n| (n.position.get(), n.depth, n.node.content.as_str()))
            .collect();
        assert_eq!(seen, vec![(1, 0, "a"), (2, 1, "a1"), (3, 0, "b")]);
    }

    #[test]
    fn resolve_maps_position_to_id() {
        let forest = forest();
        let pos: Position = "2".parse().unwrap();
        assert_eq!(resolve(&forest, pos), Some(forest[0].children[0].id.clone()));
        assert_eq!(resolve(&forest, Position::new(4).unwrap()), None);
    }

    #[test]
    fn parse_rejects_zero_and_garbage() {
        assert!("0".parse::<Position>().is_err());
        assert!("x".parse::<Position>().is_err());
        assert_eq!("3.".parse::<Position>().unwrap().get(), 3);
    }
}
