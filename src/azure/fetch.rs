//! Management Groups REST call.

use crate::config::Config;
use colored::Colorize;
use std::error::Error;

/// GET every descendant of the tenant root management group.
///
/// Sends one request with the pre-fetched bearer token. No retry and no
/// pagination.
///
/// # Returns
/// * `Ok(String)` - The raw response body
/// * `Err` - If the request cannot be sent or the body cannot be read
pub async fn fetch_descendants(config: &Config) -> Result<String, Box<dyn Error>> {
    let url = config.descendants_url();
    get_with_bearer(&reqwest::Client::new(), &url, &config.access_token).await
}

/// GET `url` with an `Authorization: Bearer` header and return the body.
///
/// A non-success status is logged but the body is still returned.
async fn get_with_bearer(
    client: &reqwest::Client,
    url: &str,
    token: &str,
) -> Result<String, Box<dyn Error>> {
    log::info!("GET {url}", url = url.on_blue());

    let response = client
        .get(url)
        .bearer_auth(token)
        .send()
        .await
        .map_err(|e| format!("Error requesting {url}: {e}"))?;

    let status = response.status();
    let body = response
        .text()
        .await
        .map_err(|e| format!("Error reading response body from {url}: {e}"))?;

    if status.is_success() {
        log::debug!("status={status} body.len()={}", body.len());
    } else {
        // An error payload simply carries no nodes.
        log::warn!(
            "{failed} status={status} body=\n{body}",
            failed = "failed".on_red()
        );
    }

    Ok(body)
}
