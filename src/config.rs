//! Runtime configuration read from the environment.

use std::error::Error;

pub const ENV_SUBSCRIPTION_ID: &str = "AZURE_SUBSCRIPTION_ID";
pub const ENV_TENANT_ID: &str = "AZURE_TENANT_ID";
pub const ENV_ACCESS_TOKEN: &str = "AZURE_ACCESS_TOKEN";
/// Optional: read the descendants response from this file instead of the API.
pub const ENV_MGMT_GROUPS_FILE: &str = "AZURE_MGMT_GROUPS_FILE";

pub const MANAGEMENT_API_BASE: &str = "https://management.azure.com";
pub const MANAGEMENT_API_VERSION: &str = "2021-04-01";

/// Settings needed to fetch and render the management group tree.
#[derive(Clone)]
pub struct Config {
    pub subscription_id: String,
    pub tenant_id: String,
    pub access_token: String,
    pub mgmt_groups_file: Option<String>,
}

impl Config {
    /// Build the config from process environment variables.
    pub fn from_env() -> Result<Config, Box<dyn Error>> {
        Config::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build the config from any key lookup.
    ///
    /// All three Azure values are required and must be non-empty.
    pub fn from_lookup<F>(lookup: F) -> Result<Config, Box<dyn Error>>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).unwrap_or_default();

        let subscription_id = get(ENV_SUBSCRIPTION_ID);
        let tenant_id = get(ENV_TENANT_ID);
        let access_token = get(ENV_ACCESS_TOKEN);

        let missing: Vec<&str> = [
            (ENV_SUBSCRIPTION_ID, &subscription_id),
            (ENV_TENANT_ID, &tenant_id),
            (ENV_ACCESS_TOKEN, &access_token),
        ]
        .iter()
        .filter(|(_, value)| value.is_empty())
        .map(|(key, _)| *key)
        .collect();

        if !missing.is_empty() {
            return Err(format!(
                "must specify environment variables: {ENV_SUBSCRIPTION_ID}, {ENV_TENANT_ID}, and {ENV_ACCESS_TOKEN} (missing: {}). \
                 Use command `az account get-access-token` to get this info.",
                missing.join(", ")
            )
            .into());
        }

        let mgmt_groups_file = lookup(ENV_MGMT_GROUPS_FILE).filter(|f| !f.is_empty());

        Ok(Config {
            subscription_id,
            tenant_id,
            access_token,
            mgmt_groups_file,
        })
    }

    /// URL listing every descendant of the tenant root group.
    pub fn descendants_url(&self) -> String {
        format!(
            "{MANAGEMENT_API_BASE}/providers/Microsoft.Management/managementGroups/{tenant}/descendants?api-version={MANAGEMENT_API_VERSION}",
            tenant = self.tenant_id
        )
    }
}

// Keep the bearer token out of debug logs.
impl std::fmt::Debug for Config {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Config")
            .field("subscription_id", &self.subscription_id)
            .field("tenant_id", &self.tenant_id)
            .field("access_token", &"***")
            .field("mgmt_groups_file", &self.mgmt_groups_file)
            .finish()
    }
}
