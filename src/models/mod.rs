//! Domain models for the management group tree.
//!
//! - [`Descendant`] and friends - records as returned by the Management Groups API
//! - [`Node`] and [`NodeKind`] - one management group or subscription
//! - [`NodeTable`] - every node plus the parent/child index

mod descendant;
mod node;
mod node_table;

pub use descendant::{Descendant, DescendantProperties, DescendantsResponse, ParentRef};
pub use node::{
    Node, NodeKind, MGMT_GROUP_ID_PREFIX, TENANT_ROOT_DISPLAY_NAME, TYPE_MANAGEMENT_GROUPS,
    TYPE_SUBSCRIPTIONS,
};
pub use node_table::NodeTable;
