use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::jsonapi::{Relationship, TypedResource};

/// An organization (community) owning servers and ban lists.
#[derive(Debug, Clone)]
pub struct Organization {
    /// Resource identifier.
    pub id: String,
    /// Typed attribute schema.
    pub attributes: OrganizationAttributes,
    /// References to related resources (`servers`, `games`, `owner`, ...).
    pub relationships: HashMap<String, Relationship>,
}

impl TypedResource for Organization {
    const TYPE: &'static str = "organization";
    type Attributes = OrganizationAttributes;

    fn from_resource(
        id: String,
        attributes: Self::Attributes,
        relationships: HashMap<String, Relationship>,
    ) -> Self {
        Self {
            id,
            attributes,
            relationships,
        }
    }
}

/// Attributes of an [`Organization`] resource.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrganizationAttributes {
    /// Display name.
    pub name: String,

    #[serde(default)]
    pub active: bool,

    #[serde(default)]
    pub locale: Option<String>,

    /// IANA timezone of the organization.
    #[serde(default)]
    pub tz: Option<String>,

    /// Subscription plan, visible to members only.
    #[serde(default)]
    pub plan: Option<String>,

    #[serde(default)]
    pub discoverable: bool,

    #[serde(default)]
    pub discoverable_rank: Option<u32>,

    /// Template prefilling the ban form.
    #[serde(default)]
    pub ban_template: Option<String>,

    #[serde(default)]
    pub mfa_required: bool,

    #[serde(default, rename = "consentAPIKeysRequired")]
    pub consent_api_keys_required: bool,

    #[serde(default, rename = "consentGeoIPRequired")]
    pub consent_geo_ip_required: bool,

    #[serde(default)]
    pub consent_organizations_required: bool,

    #[serde(default)]
    pub data_sharing_enabled: bool,

    /// Fields this crate does not model, preserved as-is.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_deserialize_organization_attributes() {
        let attributes: OrganizationAttributes = serde_json::from_value(json!({
            "name": "Rustafied",
            "active": true,
            "locale": "en",
            "tz": "America/Chicago",
            "plan": null,
            "discoverable": true,
            "discoverableRank": 12,
            "banTemplate": "{{reason}} - appeal at example.com",
            "mfaRequired": false,
            "consentAPIKeysRequired": true,
            "consentGeoIPRequired": false,
            "consentOrganizationsRequired": false,
            "dataSharingEnabled": true
        }))
        .unwrap();

        assert_eq!(attributes.name, "Rustafied");
        assert!(attributes.consent_api_keys_required);
        assert!(attributes.data_sharing_enabled);
        assert_eq!(attributes.discoverable_rank, Some(12));
    }
}
