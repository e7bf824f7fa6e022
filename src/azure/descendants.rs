//! Loading and parsing the descendants response.

use super::fetch::fetch_descendants;
use crate::config::Config;
use crate::models::{Descendant, DescendantsResponse};
use std::error::Error;
use std::path::Path;

/// Read a previously saved descendants response body.
pub fn read_descendants_file(file: &str) -> Result<String, Box<dyn Error>> {
    if !Path::new(file).exists() {
        return Err(format!("Descendants file does not exist: {file}").into());
    }
    log::info!("Reading descendants from file: {file}");
    let body = std::fs::read_to_string(file)
        .map_err(|e| format!("Error reading descendants file {file}: {e}"))?;
    Ok(body)
}

/// Parse a response body into descendant records.
///
/// A body that does not parse is logged and treated as empty, the run
/// continues with only the tenant root. A single record that does not parse
/// is logged and skipped; the rest of the list is kept.
pub fn parse_descendants(body: &str) -> Vec<Descendant> {
    let mut deserializer = serde_json::Deserializer::from_str(body);
    let parsed: Result<DescendantsResponse, _> =
        serde_path_to_error::deserialize(&mut deserializer);
    match parsed {
        Ok(response) => response
            .value
            .into_iter()
            .enumerate()
            .filter_map(|(i, record)| {
                let descendant: Result<Descendant, _> = serde_path_to_error::deserialize(record);
                descendant
                    .map_err(|e| {
                        log::error!(
                            "Skipping descendant #{i}: path={} error={}",
                            e.path(),
                            e
                        )
                    })
                    .ok()
            })
            .collect(),
        Err(e) => {
            log::error!(
                "Error parsing descendants JSON: path={} error={}",
                e.path(),
                e
            );
            log::debug!("BODY START:\n\n{body}\n\nBODY END\n");
            Vec::new()
        }
    }
}

/// Get the descendants list from the saved file if configured, else from Azure.
pub async fn load_descendants(config: &Config) -> Result<Vec<Descendant>, Box<dyn Error>> {
    let body = match &config.mgmt_groups_file {
        Some(file) => read_descendants_file(file)?,
        None => fetch_descendants(config).await?,
    };
    Ok(parse_descendants(&body))
}
