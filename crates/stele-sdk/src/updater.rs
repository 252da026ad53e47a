//! Builders for create and update payloads.
//!
//! An [`Updater`] is a transient accumulator for a partial-update
//! payload. It requires at minimum the asset's `qualifiedName` and
//! `name` (plus any extra required fields declared by the type's
//! descriptor) and reports the *whole* missing set in one failure at
//! build time, so a caller never needs multiple round trips to discover
//! every validation error.
//!
//! Creators derive the new asset's qualified name from its parent via
//! the type's composition rule and seed a fresh placeholder GUID.

use std::collections::BTreeMap;

use serde_json::Value;

use stele_core::typedef::{FIELD_NAME, FIELD_QUALIFIED_NAME};
use stele_core::{Error, Guid, QualifiedName, Result, TypeDef};

use crate::asset::Asset;

/// Transient accumulator for a minimal create/update payload.
#[derive(Debug, Clone)]
pub struct Updater {
    type_def: &'static TypeDef,
    guid: Guid,
    qualified_name: Option<QualifiedName>,
    name: Option<String>,
    attributes: BTreeMap<String, Value>,
}

impl Updater {
    /// Creates an empty updater for the given type with a fresh
    /// placeholder GUID.
    #[must_use]
    pub fn new(type_def: &'static TypeDef) -> Self {
        Self {
            type_def,
            guid: Guid::placeholder(),
            qualified_name: None,
            name: None,
            attributes: BTreeMap::new(),
        }
    }

    /// Starts a creation payload: derives the qualified name from the
    /// parent via the type's composition rule and sets the short name.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidInput`] for process-rule types, which
    /// derive their name from input/output sets instead; use
    /// [`Updater::process_creator`].
    pub fn creator(
        type_def: &'static TypeDef,
        name: impl Into<String>,
        parent: &QualifiedName,
    ) -> Result<Self> {
        let name = name.into();
        let qualified_name = type_def.qualified_name_for(parent, &name)?;
        Ok(Self::new(type_def)
            .qualified_name(qualified_name)
            .name(name))
    }

    /// Starts a creation payload for a lineage process, deriving the
    /// idempotent qualified name from the process id and the
    /// canonicalized input/output identifier sets.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidInput`] for non-process types.
    pub fn process_creator(
        type_def: &'static TypeDef,
        name: impl Into<String>,
        parent: &QualifiedName,
        process_id: &str,
        inputs: &[String],
        outputs: &[String],
    ) -> Result<Self> {
        let qualified_name =
            type_def.process_qualified_name(parent, process_id, inputs, outputs)?;
        Ok(Self::new(type_def)
            .qualified_name(qualified_name)
            .name(name.into()))
    }

    /// Sets the qualified name.
    #[must_use]
    pub fn qualified_name(mut self, qn: impl Into<QualifiedName>) -> Self {
        self.qualified_name = Some(qn.into());
        self
    }

    /// Sets the short name.
    #[must_use]
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Sets a per-type attribute by wire name.
    #[must_use]
    pub fn attribute(mut self, field: impl Into<String>, value: Value) -> Self {
        self.attributes.insert(field.into(), value);
        self
    }

    /// Finalizes the payload.
    ///
    /// # Errors
    ///
    /// Returns [`Error::MissingRequiredUpdateParam`] naming every
    /// required field that is still null or empty.
    pub fn build(self) -> Result<Asset> {
        let mut missing = Vec::new();
        if self
            .qualified_name
            .as_ref()
            .is_none_or(|qn| qn.as_str().is_empty())
        {
            missing.push(FIELD_QUALIFIED_NAME.to_string());
        }
        if self.name.as_ref().is_none_or(|name| name.is_empty()) {
            missing.push(FIELD_NAME.to_string());
        }
        for field in self.type_def.extra_required_fields {
            if !is_populated(self.attributes.get(*field)) {
                missing.push((*field).to_string());
            }
        }
        if !missing.is_empty() {
            return Err(Error::MissingRequiredUpdateParam {
                type_name: self.type_def.type_name.to_string(),
                fields: missing,
            });
        }

        let mut asset = Asset::of(self.type_def.type_name);
        asset.guid = Some(self.guid);
        asset.qualified_name = self.qualified_name;
        asset.name = self.name;
        asset.attributes = self.attributes;
        Ok(asset)
    }
}

/// A required attribute counts as populated when present, non-null, and
/// (for strings) non-empty.
fn is_populated(value: Option<&Value>) -> bool {
    match value {
        None | Some(Value::Null) => false,
        Some(Value::String(s)) => !s.is_empty(),
        Some(_) => true,
    }
}

impl Asset {
    /// Reduces this asset to the minimal builder needed to submit an
    /// update for it.
    ///
    /// Only the type's required fields are carried over; every other
    /// populated attribute is intentionally discarded to keep the
    /// update payload minimal. The returned builder holds a freshly
    /// generated placeholder GUID.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidInput`] if the asset's type is not in
    /// the registry, or [`Error::MissingRequiredUpdateParam`] naming
    /// the whole set of required fields that are null or empty.
    pub fn trim_to_required(&self) -> Result<Updater> {
        let type_def = TypeDef::lookup(self.type_name()).ok_or_else(|| {
            Error::invalid_input(format!("unknown asset type: {}", self.type_name()))
        })?;

        let mut updater = Updater::new(type_def);
        if let Some(qn) = &self.qualified_name {
            updater = updater.qualified_name(qn.clone());
        }
        if let Some(name) = &self.name {
            updater = updater.name(name.clone());
        }
        for field in type_def.extra_required_fields {
            if let Some(value) = self.attributes.get(*field) {
                updater = updater.attribute(*field, value.clone());
            }
        }

        // Validate eagerly so the caller learns the full missing set
        // before attempting any network call.
        updater.clone().build()?;
        Ok(updater)
    }
}
