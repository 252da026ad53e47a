//! Relationship references: minimal pointer payloads.
//!
//! A [`Reference`] points at an asset from another asset's relationship
//! collection without embedding the full object. It carries the target
//! type, exactly one identifier (GUID or qualified name), and a save
//! semantic telling the server how to merge it into the existing
//! collection. References are built on demand by trimming a full asset
//! and discarded once the containing save request completes.

use serde::{Deserialize, Serialize};

use stele_core::{Error, Guid, QualifiedName, Result};

use crate::asset::{Asset, UniqueAttributes};

/// How the server should merge a reference into a relationship
/// collection on save.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SaveSemantic {
    /// Replace the existing collection with the supplied references.
    #[default]
    Replace,
    /// Add the supplied references to the existing collection.
    Append,
    /// Remove the supplied references from the existing collection.
    Remove,
}

/// The single identifier a reference carries.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ReferenceId {
    /// Point at the target by server GUID.
    Guid(Guid),
    /// Point at the target by qualified name, nested the way
    /// relationship payloads carry it.
    UniqueAttributes(UniqueAttributes),
}

/// A lightweight projection of an asset: type, one identifier, and a
/// merge semantic. Never persisted independently.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Reference {
    /// The target's concrete type.
    pub type_name: String,
    /// Exactly one identifier for the target.
    #[serde(flatten)]
    pub id: ReferenceId,
    /// How to merge this reference on save.
    pub semantic: SaveSemantic,
}

impl Reference {
    /// Returns the target GUID, if this reference is by GUID.
    #[must_use]
    pub fn guid(&self) -> Option<&Guid> {
        match &self.id {
            ReferenceId::Guid(guid) => Some(guid),
            ReferenceId::UniqueAttributes(_) => None,
        }
    }

    /// Returns the target qualified name, if this reference is by
    /// qualified name.
    #[must_use]
    pub fn qualified_name(&self) -> Option<&QualifiedName> {
        match &self.id {
            ReferenceId::Guid(_) => None,
            ReferenceId::UniqueAttributes(ua) => ua.qualified_name.as_ref(),
        }
    }
}

impl Asset {
    /// Reduces this asset to the minimal payload needed to point at it
    /// from another asset's relationship collection.
    ///
    /// Identifier precedence: `guid`, then `qualified_name`, then
    /// `unique_attributes.qualified_name`. The input asset is not
    /// mutated.
    ///
    /// # Errors
    ///
    /// Returns [`Error::MissingRequiredRelationshipParam`] naming both
    /// candidate fields when none of the three are populated.
    pub fn trim_to_reference(&self, semantic: SaveSemantic) -> Result<Reference> {
        if let Some(guid) = &self.guid {
            return Ok(Reference {
                type_name: self.type_name().to_string(),
                id: ReferenceId::Guid(guid.clone()),
                semantic,
            });
        }
        if let Some(qn) = self.effective_qualified_name() {
            return Ok(Reference {
                type_name: self.type_name().to_string(),
                id: ReferenceId::UniqueAttributes(UniqueAttributes {
                    qualified_name: Some(qn.clone()),
                }),
                semantic,
            });
        }
        Err(Error::MissingRequiredRelationshipParam {
            type_name: self.type_name().to_string(),
            candidates: vec!["guid".into(), "qualifiedName".into()],
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn guid_takes_precedence() {
        let mut asset = Asset::of("ObjectStoreBucket");
        asset.guid = Some(Guid::new("9c5a42a1-7d8e-4f1a-9d2b-3e4f5a6b7c8d"));
        asset.qualified_name = Some("conn/aws/b1".into());

        let reference = asset.trim_to_reference(SaveSemantic::Replace).unwrap();
        assert_eq!(
            reference.guid().unwrap().as_str(),
            "9c5a42a1-7d8e-4f1a-9d2b-3e4f5a6b7c8d"
        );
        assert!(reference.qualified_name().is_none());
    }

    #[test]
    fn qualified_name_only() {
        let mut asset = Asset::of("ObjectStoreBucket");
        asset.qualified_name = Some("conn/aws/b1".into());

        let reference = asset.trim_to_reference(SaveSemantic::Append).unwrap();
        assert!(reference.guid().is_none());
        assert_eq!(reference.qualified_name().unwrap().as_str(), "conn/aws/b1");
        assert_eq!(reference.semantic, SaveSemantic::Append);
    }

    #[test]
    fn unique_attributes_fallback() {
        let mut asset = Asset::of("MessageTopic");
        asset.unique_attributes = Some(UniqueAttributes {
            qualified_name: Some("conn/aws/topic/t1".into()),
        });

        let reference = asset.trim_to_reference(SaveSemantic::Remove).unwrap();
        assert_eq!(
            reference.qualified_name().unwrap().as_str(),
            "conn/aws/topic/t1"
        );
    }

    #[test]
    fn bare_asset_fails_naming_candidates() {
        let mut asset = Asset::of("ObjectStoreBucket");
        asset.name = Some("b1".into());

        let err = asset.trim_to_reference(SaveSemantic::Replace).unwrap_err();
        match err {
            Error::MissingRequiredRelationshipParam {
                type_name,
                candidates,
            } => {
                assert_eq!(type_name, "ObjectStoreBucket");
                assert_eq!(candidates, vec!["guid", "qualifiedName"]);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn trimming_does_not_mutate_the_input() {
        let mut asset = Asset::of("ObjectStoreBucket");
        asset.guid = Some(Guid::new("abc"));
        asset.description = Some("a bucket".into());
        let before = asset.clone();

        let _ = asset.trim_to_reference(SaveSemantic::Replace).unwrap();
        assert_eq!(asset, before);
    }

    #[test]
    fn reference_wire_shape() {
        let mut asset = Asset::of("ObjectStoreBucket");
        asset.qualified_name = Some("conn/aws/b1".into());
        let reference = asset.trim_to_reference(SaveSemantic::Append).unwrap();

        let json = serde_json::to_value(&reference).unwrap();
        assert_eq!(json["typeName"], "ObjectStoreBucket");
        assert_eq!(json["semantic"], "APPEND");
        assert_eq!(json["uniqueAttributes"]["qualifiedName"], "conn/aws/b1");
        assert!(json.get("guid").is_none());
    }
}
