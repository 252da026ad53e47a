//! The asset data model.
//!
//! [`Asset`] is the root entity of the catalog client: one struct shared
//! by every concrete type, distinguished by its immutable `type_name`
//! and driven by the type's descriptor in the registry. Per-type
//! attributes beyond the common set live in a wire-named attribute map.
//!
//! # Identity
//!
//! Every persistable asset has at least one identifying key populated,
//! checked in a fixed precedence order: `guid` first, then the
//! top-level `qualified_name`, then the nested
//! `unique_attributes.qualified_name` (the fallback used when an asset
//! arrived embedded in a relationship payload rather than from a direct
//! fetch).

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use stele_core::{Guid, QualifiedName};

/// Lifecycle state of a catalog asset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AssetStatus {
    /// The asset is live.
    #[default]
    Active,
    /// The asset has been soft-deleted.
    Archived,
}

/// Fallback identity holder for assets that arrived from a relationship
/// payload rather than a direct fetch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct UniqueAttributes {
    /// The qualified name, when known.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub qualified_name: Option<QualifiedName>,
}

/// A catalog asset.
///
/// All fields other than `type_name` are optional or defaultable: a
/// freshly built update payload carries only its required fields, and
/// an asset embedded in a relationship may carry nothing but its
/// `unique_attributes`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Asset {
    /// The concrete catalog type. Immutable after construction.
    type_name: String,

    /// Server-assigned GUID, or a negative placeholder for assets not
    /// yet created.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub guid: Option<Guid>,

    /// Globally unique hierarchical identifier.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub qualified_name: Option<QualifiedName>,

    /// Short human-readable name; not required to be unique.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// Fallback identity from relationship payloads.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unique_attributes: Option<UniqueAttributes>,

    /// Live or soft-deleted.
    #[serde(default)]
    pub status: AssetStatus,

    /// Human-readable description.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Asset owners (user names or emails).
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub owners: Vec<String>,

    /// Attached classification tags.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<String>,

    /// Linked glossary terms.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub terms: Vec<String>,

    /// Creation timestamp, server-assigned.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,

    /// Last-update timestamp, server-assigned.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,

    /// Per-type attributes beyond the common set, keyed by wire name.
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub attributes: BTreeMap<String, Value>,
}

impl Asset {
    /// Creates an empty asset shell of the given concrete type.
    #[must_use]
    pub fn of(type_name: impl Into<String>) -> Self {
        Self {
            type_name: type_name.into(),
            guid: None,
            qualified_name: None,
            name: None,
            unique_attributes: None,
            status: AssetStatus::default(),
            description: None,
            owners: Vec::new(),
            tags: Vec::new(),
            terms: Vec::new(),
            created_at: None,
            updated_at: None,
            attributes: BTreeMap::new(),
        }
    }

    /// Returns the concrete catalog type name.
    #[must_use]
    pub fn type_name(&self) -> &str {
        &self.type_name
    }

    /// Returns `true` if the asset is live (not soft-deleted).
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.status == AssetStatus::Active
    }

    /// Returns the best available qualified name: the top-level field
    /// first, falling back to `unique_attributes`.
    #[must_use]
    pub fn effective_qualified_name(&self) -> Option<&QualifiedName> {
        self.qualified_name.as_ref().or_else(|| {
            self.unique_attributes
                .as_ref()
                .and_then(|ua| ua.qualified_name.as_ref())
        })
    }

    /// Returns a per-type attribute by wire name, if present and
    /// non-null.
    #[must_use]
    pub fn attribute(&self, field: &str) -> Option<&Value> {
        self.attributes.get(field).filter(|v| !v.is_null())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn effective_qualified_name_prefers_top_level() {
        let mut asset = Asset::of("ObjectStoreBucket");
        asset.qualified_name = Some("conn/aws/b1".into());
        asset.unique_attributes = Some(UniqueAttributes {
            qualified_name: Some("conn/aws/other".into()),
        });
        assert_eq!(
            asset.effective_qualified_name().unwrap().as_str(),
            "conn/aws/b1"
        );
    }

    #[test]
    fn effective_qualified_name_falls_back_to_unique_attributes() {
        let mut asset = Asset::of("ObjectStoreBucket");
        asset.unique_attributes = Some(UniqueAttributes {
            qualified_name: Some("conn/aws/b1".into()),
        });
        assert_eq!(
            asset.effective_qualified_name().unwrap().as_str(),
            "conn/aws/b1"
        );
    }

    #[test]
    fn serializes_camel_case_and_skips_empty() {
        let mut asset = Asset::of("Connection");
        asset.qualified_name = Some("conn/aws".into());
        let json = serde_json::to_value(&asset).unwrap();
        assert_eq!(json["typeName"], "Connection");
        assert_eq!(json["qualifiedName"], "conn/aws");
        assert!(json.get("guid").is_none());
        assert!(json.get("tags").is_none());
    }

    #[test]
    fn null_attributes_are_treated_as_absent() {
        let mut asset = Asset::of("Purpose");
        asset.attributes
            .insert("isAccessControlEnabled".into(), Value::Null);
        assert!(asset.attribute("isAccessControlEnabled").is_none());
        asset.attributes
            .insert("isAccessControlEnabled".into(), Value::Bool(true));
        assert!(asset.attribute("isAccessControlEnabled").is_some());
    }
}
