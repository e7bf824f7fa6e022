//! Wire records of the `managementGroups/{id}/descendants` response.
//!
//! Only the fields the converter reads are modelled. Every field defaults
//! when absent or `null` and unknown fields are ignored.

use serde::{Deserialize, Deserializer, Serialize};

/// Top level response body.
///
/// Elements stay raw so one malformed record can be skipped on its own.
#[derive(Serialize, Deserialize, Debug, Default)]
pub struct DescendantsResponse {
    #[serde(default, deserialize_with = "null_as_default")]
    pub value: Vec<serde_json::Value>,
}

/// Deserialize `null` as the type's default value.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// One management group or subscription below the tenant root.
#[derive(Serialize, Deserialize, Debug, Default, Clone)]
pub struct Descendant {
    #[serde(default, deserialize_with = "null_as_default")]
    pub id: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
    /// `Microsoft.Management/managementGroups` or `.../subscriptions`.
    #[serde(rename = "type", default, deserialize_with = "null_as_default")]
    pub kind: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub properties: DescendantProperties,
}

#[derive(Serialize, Deserialize, Debug, Default, Clone)]
#[serde(rename_all = "camelCase")]
pub struct DescendantProperties {
    #[serde(default)]
    pub display_name: Option<String>,
    #[serde(default)]
    pub parent: Option<ParentRef>,
}

#[derive(Serialize, Deserialize, Debug, Default, Clone)]
pub struct ParentRef {
    #[serde(default)]
    pub id: Option<String>,
}

impl Descendant {
    /// Parent id, empty when the record has none.
    pub fn parent_id(&self) -> &str {
        self.properties
            .parent
            .as_ref()
            .and_then(|p| p.id.as_deref())
            .unwrap_or("")
    }

    pub fn display_name(&self) -> &str {
        self.properties.display_name.as_deref().unwrap_or("")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_group() {
        let json = r#"{
            "id": "/providers/Microsoft.Management/managementGroups/finance",
            "name": "finance",
            "type": "Microsoft.Management/managementGroups",
            "properties": {
                "displayName": "az-ps-Finance Team",
                "inheritedPermissions": "view",
                "parent": { "id": "/providers/Microsoft.Management/managementGroups/tenant123" }
            }
        }"#;
        let d: Descendant = serde_json::from_str(json).expect("valid descendant");
        assert_eq!(d.name, "finance");
        assert_eq!(d.kind, "Microsoft.Management/managementGroups");
        assert_eq!(d.display_name(), "az-ps-Finance Team");
        assert_eq!(
            d.parent_id(),
            "/providers/Microsoft.Management/managementGroups/tenant123"
        );
    }

    #[test]
    fn test_deserialize_missing_fields() {
        let d: Descendant =
            serde_json::from_str(r#"{"id": "/subscriptions/abc", "properties": {"parent": null}}"#)
                .expect("partial descendant");
        assert_eq!(d.kind, "");
        assert_eq!(d.display_name(), "");
        assert_eq!(d.parent_id(), "");
    }

    #[test]
    fn test_deserialize_null_fields() {
        let d: Descendant = serde_json::from_str(
            r#"{"id": "/subscriptions/abc", "name": null, "type": null, "properties": null}"#,
        )
        .expect("null fields fall back to defaults");
        assert_eq!(d.id, "/subscriptions/abc");
        assert_eq!(d.name, "");
        assert_eq!(d.kind, "");
        assert_eq!(d.parent_id(), "");
    }

    #[test]
    fn test_deserialize_response_null_value() {
        let r: DescendantsResponse =
            serde_json::from_str(r#"{"value": null}"#).expect("null value parses");
        assert!(r.value.is_empty());
    }

    #[test]
    fn test_deserialize_response_without_value() {
        let r: DescendantsResponse =
            serde_json::from_str(r#"{"error": {"code": "AuthorizationFailed"}}"#)
                .expect("error body still parses");
        assert!(r.value.is_empty());
    }
}
