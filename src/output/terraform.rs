//! Terraform HCL output for Prisma Cloud account groups.

use super::names::{format_list, sanitize_display_name, sanitize_id};
use crate::models::{Node, NodeTable};
use std::io::{self, Write};

pub const RESOURCE_TYPE: &str = "prismacloud_account_group";
pub const RESOURCE_DESCRIPTION: &str = "Made by Terraform";

/// `<display name>---<id>`, used both as resource label and `name`.
pub fn resource_name(node: &Node) -> String {
    format!(
        "{}---{}",
        sanitize_display_name(&node.display_name),
        sanitize_id(&node.id)
    )
}

/// Write one `prismacloud_account_group` block for `node`.
pub fn render_account_group<W: Write>(
    out: &mut W,
    table: &NodeTable,
    node: &Node,
) -> io::Result<()> {
    let name = resource_name(node);
    let account_ids = format_list(table.child_subscriptions(node).map(|s| sanitize_id(&s.id)));
    let child_group_ids = format_list(table.child_groups(node).map(resource_name));

    writeln!(out, "resource \"{RESOURCE_TYPE}\" \"{name}\" {{")?;
    writeln!(out, "\tname = \"{name}\"")?;
    writeln!(out, "\tdescription = \"{RESOURCE_DESCRIPTION}\"")?;
    writeln!(out, "\taccount_ids = [{account_ids}]")?;
    writeln!(out, "\tchild_group_ids = [{child_group_ids}]")?;
    writeln!(out, "}}")
}

/// Write a block for every management group, in table order.
///
/// Subscriptions only appear inside their parent's `account_ids`.
///
/// # Returns
/// Number of blocks written.
pub fn render_account_groups<W: Write>(out: &mut W, table: &NodeTable) -> io::Result<usize> {
    let mut count = 0;
    for node in table.groups() {
        render_account_group(out, table, node)?;
        count += 1;
    }
    log::debug!("rendered {count} account group(s)");
    Ok(count)
}
