//! Flat node list with parent/child adjacency.

use super::{Node, NodeKind};
use std::collections::HashMap;

/// Every node of one tenant, in fetch order with the tenant root last.
///
/// Built once by [`crate::processing::build_node_table`]; read-only afterwards.
#[derive(Debug)]
pub struct NodeTable {
    nodes: Vec<Node>,
    index: HashMap<String, usize>,
}

impl NodeTable {
    pub(crate) fn new(nodes: Vec<Node>, index: HashMap<String, usize>) -> NodeTable {
        NodeTable { nodes, index }
    }

    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Table index of `id` (last occurrence if ids repeat).
    pub fn index_of(&self, id: &str) -> Option<usize> {
        self.index.get(id).copied()
    }

    pub fn get(&self, id: &str) -> Option<&Node> {
        self.index_of(id).map(|i| &self.nodes[i])
    }

    /// Management group nodes in table order.
    pub fn groups(&self) -> impl Iterator<Item = &Node> {
        self.nodes.iter().filter(|n| n.is_group())
    }

    pub fn child_groups<'a>(&'a self, node: &'a Node) -> impl Iterator<Item = &'a Node> {
        node.child_groups.iter().map(move |&i| &self.nodes[i])
    }

    pub fn child_subscriptions<'a>(&'a self, node: &'a Node) -> impl Iterator<Item = &'a Node> {
        node.child_subscriptions.iter().map(move |&i| &self.nodes[i])
    }

    /// Returns (groups, subscriptions, other) counts.
    pub fn count_by_kind(&self) -> (usize, usize, usize) {
        self.nodes
            .iter()
            .fold((0, 0, 0), |(g, s, o), n| match n.kind {
                NodeKind::Group => (g + 1, s, o),
                NodeKind::Subscription => (g, s + 1, o),
                NodeKind::Other(_) => (g, s, o + 1),
            })
    }
}
