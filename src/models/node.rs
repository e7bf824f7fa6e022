//! Management group / subscription node.

use super::Descendant;
use std::fmt;

pub const TYPE_MANAGEMENT_GROUPS: &str = "Microsoft.Management/managementGroups";
pub const TYPE_SUBSCRIPTIONS: &str = "Microsoft.Management/managementGroups/subscriptions";

/// Id prefix shared by every management group, including the tenant root.
pub const MGMT_GROUP_ID_PREFIX: &str = "/providers/Microsoft.Management/managementGroups/";
pub const TENANT_ROOT_DISPLAY_NAME: &str = "TENANT_ROOT";

/// Kind of a node, taken from the wire `type` field.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum NodeKind {
    Group,
    Subscription,
    /// Any unrecognised `type`; keeps its table slot but never becomes a child.
    Other(String),
}

impl From<&str> for NodeKind {
    fn from(s: &str) -> Self {
        match s {
            TYPE_MANAGEMENT_GROUPS => NodeKind::Group,
            TYPE_SUBSCRIPTIONS => NodeKind::Subscription,
            other => NodeKind::Other(other.to_string()),
        }
    }
}

impl fmt::Display for NodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NodeKind::Group => write!(f, "group"),
            NodeKind::Subscription => write!(f, "subscription"),
            NodeKind::Other(t) => write!(f, "other({t})"),
        }
    }
}

/// One entry of the [`NodeTable`](super::NodeTable).
#[derive(Debug, Clone, PartialEq)]
pub struct Node {
    /// Full resource id, e.g. `/subscriptions/<guid>`.
    pub id: String,
    pub name: String,
    pub kind: NodeKind,
    pub display_name: String,
    /// Empty for the tenant root.
    pub parent_id: String,
    /// Table indices of child management groups, in table order.
    pub child_groups: Vec<usize>,
    /// Table indices of child subscriptions, in table order.
    pub child_subscriptions: Vec<usize>,
}

impl Node {
    /// Synthetic tenant root; the API never returns it as a descendant.
    pub fn tenant_root(tenant_id: &str) -> Node {
        Node {
            id: format!("{MGMT_GROUP_ID_PREFIX}{tenant_id}"),
            name: tenant_id.to_string(),
            kind: NodeKind::Group,
            display_name: TENANT_ROOT_DISPLAY_NAME.to_string(),
            parent_id: String::new(),
            child_groups: vec![],
            child_subscriptions: vec![],
        }
    }

    pub fn is_group(&self) -> bool {
        self.kind == NodeKind::Group
    }
}

impl From<Descendant> for Node {
    fn from(d: Descendant) -> Self {
        Node {
            parent_id: d.parent_id().to_string(),
            display_name: d.display_name().to_string(),
            kind: NodeKind::from(d.kind.as_str()),
            id: d.id,
            name: d.name,
            child_groups: vec![],
            child_subscriptions: vec![],
        }
    }
}
