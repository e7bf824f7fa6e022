//! Name and id sanitization for Terraform identifiers.

use crate::models::MGMT_GROUP_ID_PREFIX;
use itertools::Itertools;

/// Naming prefix stripped from display names (compared case-insensitively).
pub const DISPLAY_NAME_PREFIX: &str = "az-ps-";

const SUBSCRIPTION_ID_PREFIX: &str = "/subscriptions/";

/// Replace spaces with `_` and drop a leading `az-ps-` prefix.
///
/// The prefix is only dropped when something remains after it.
pub fn sanitize_display_name(display_name: &str) -> String {
    let s = display_name.replace(' ', "_");
    let prefix_len = DISPLAY_NAME_PREFIX.len();
    let has_prefix = s
        .get(..prefix_len)
        .is_some_and(|head| head.eq_ignore_ascii_case(DISPLAY_NAME_PREFIX));
    if has_prefix && s.len() > prefix_len {
        s[prefix_len..].to_string()
    } else {
        s
    }
}

/// Strip the management group and subscription id prefixes, then turn
/// remaining `/` into `__`.
///
/// ```
/// use azure_mgmt_group_tf::output::sanitize_id;
/// assert_eq!(sanitize_id("/providers/Microsoft.Management/managementGroups/tenant123"), "tenant123");
/// assert_eq!(sanitize_id("/subscriptions/0000-1111"), "0000-1111");
/// ```
pub fn sanitize_id(id: &str) -> String {
    id.replace(MGMT_GROUP_ID_PREFIX, "")
        .replace(SUBSCRIPTION_ID_PREFIX, "")
        .replace('/', "__")
}

/// Quote each entry and join with `" , "`. Empty input gives an empty string.
pub fn format_list<I, S>(entries: I) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    entries
        .into_iter()
        .map(|e| format!("\"{}\"", e.as_ref()))
        .join(" , ")
}
