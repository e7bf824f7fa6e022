//! Convert an Azure Management Group hierarchy into Terraform
//! `prismacloud_account_group` resources.
//!
//! Pipeline: [`azure::load_descendants`] -> [`processing::build_node_table`]
//! -> [`output::render_account_groups`].

pub mod azure;
pub mod config;
pub mod logging;
pub mod models;
pub mod output;
pub mod processing;

use config::Config;
use models::{Descendant, NodeTable};
use std::error::Error;
use std::io::Write;

/// Build the node table and log its size.
pub fn get_node_table(descendants: Vec<Descendant>, config: &Config) -> NodeTable {
    let table = processing::build_node_table(descendants, &config.tenant_id);
    log::info!("There are {} groups and subscriptions", table.len());
    let (groups, subscriptions, other) = table.count_by_kind();
    log::debug!("groups={groups} subscriptions={subscriptions} other={other}");
    table
}

/// Write the Terraform for every management group to `out`.
pub fn write_terraform<W: Write>(table: &NodeTable, out: &mut W) -> Result<usize, Box<dyn Error>> {
    let count = output::render_account_groups(out, table)
        .map_err(|e| format!("Error writing terraform output: {e}"))?;
    out.flush()?;
    Ok(count)
}

/// Fetch, build and print to stdout.
pub async fn run(config: &Config) -> Result<(), Box<dyn Error>> {
    log::debug!("{config:?}");
    let descendants = azure::load_descendants(config).await?;
    let table = get_node_table(descendants, config);

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    let count = write_terraform(&table, &mut out)?;
    log::info!("Wrote {count} account group resource(s)");
    Ok(())
}
