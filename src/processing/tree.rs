//! Tree construction.
//!
//! The API returns a flat list where each record only knows its parent.
//! This turns it into per-node child lists.

use crate::models::{Descendant, Node, NodeKind, NodeTable};
use colored::Colorize;
use std::collections::HashMap;

/// Build the node table from the descendants list plus a synthetic tenant root.
///
/// # Arguments
/// * `descendants` - Records in fetch order
/// * `tenant_id` - Used to construct the root id
///
/// # Returns
/// The frozen [`NodeTable`]. Duplicate ids overwrite earlier lookups, records of
/// unknown type and records whose parent is not in the table are never
/// attached as children. No error is raised for any of these.
pub fn build_node_table(descendants: Vec<Descendant>, tenant_id: &str) -> NodeTable {
    let mut nodes: Vec<Node> = descendants.into_iter().map(Node::from).collect();
    nodes.push(Node::tenant_root(tenant_id));

    let mut index: HashMap<String, usize> = HashMap::with_capacity(nodes.len());
    let mut child_groups: HashMap<String, Vec<usize>> = HashMap::new();
    let mut child_subscriptions: HashMap<String, Vec<usize>> = HashMap::new();

    for (i, node) in nodes.iter().enumerate() {
        if let Some(prev) = index.insert(node.id.clone(), i) {
            log::warn!(
                "duplicate id {id} at index {prev} and {i}, keeping {i}",
                id = node.id.yellow()
            );
        }
        if node.parent_id.is_empty() {
            continue;
        }
        match node.kind {
            NodeKind::Group => child_groups
                .entry(node.parent_id.clone())
                .or_default()
                .push(i),
            NodeKind::Subscription => child_subscriptions
                .entry(node.parent_id.clone())
                .or_default()
                .push(i),
            NodeKind::Other(ref t) => {
                log::debug!("ignoring {id} of unknown type '{t}'", id = node.id)
            }
        }
    }

    for node in nodes.iter_mut() {
        node.child_groups = child_groups.get(&node.id).cloned().unwrap_or_default();
        node.child_subscriptions = child_subscriptions
            .get(&node.id)
            .cloned()
            .unwrap_or_default();
    }

    for (parent, children) in child_groups.iter().chain(child_subscriptions.iter()) {
        if !index.contains_key(parent) {
            log::debug!(
                "dropping {} child(ren) of unknown parent {parent}",
                children.len()
            );
        }
    }

    NodeTable::new(nodes, index)
}
