//! Output formatting for the management group tree.
//!
//! - [`terraform`] - `prismacloud_account_group` HCL blocks
//! - [`names`] - id and display name sanitization

mod names;
mod terraform;

pub use names::{format_list, sanitize_display_name, sanitize_id, DISPLAY_NAME_PREFIX};
pub use terraform::{
    render_account_group, render_account_groups, resource_name, RESOURCE_DESCRIPTION,
    RESOURCE_TYPE,
};
