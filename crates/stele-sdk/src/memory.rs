//! In-memory catalog implementation for testing.
//!
//! [`InMemoryCatalog`] is a simple, thread-safe implementation of the
//! [`CatalogClient`] trait over a `RwLock`-guarded map. Search executes
//! query filters directly against stored assets.
//!
//! Not suitable for production: no durability, single process only.

use std::collections::HashMap;
use std::sync::{PoisonError, RwLock};

use chrono::Utc;
use uuid::Uuid;

use stele_core::{Error, Guid, Result};

use crate::asset::Asset;
use crate::client::{CatalogClient, SearchResults};
use crate::search::SearchQuery;

/// In-memory catalog for tests, keyed by GUID string.
#[derive(Debug, Default)]
pub struct InMemoryCatalog {
    assets: RwLock<HashMap<String, Asset>>,
}

/// Converts a lock poison error to an internal error.
fn poison_err<T>(_: PoisonError<T>) -> Error {
    Error::internal("lock poisoned")
}

impl InMemoryCatalog {
    /// Creates an empty in-memory catalog.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the number of stored assets.
    ///
    /// # Errors
    ///
    /// Returns an internal error if the lock is poisoned.
    pub fn len(&self) -> Result<usize> {
        Ok(self.assets.read().map_err(poison_err)?.len())
    }

    /// Returns `true` if the catalog holds no assets.
    ///
    /// # Errors
    ///
    /// Returns an internal error if the lock is poisoned.
    pub fn is_empty(&self) -> Result<bool> {
        Ok(self.len()? == 0)
    }
}

impl CatalogClient for InMemoryCatalog {
    fn fetch_by_guid(&self, guid: &str, _include_relationships: bool) -> Result<Option<Asset>> {
        let assets = self.assets.read().map_err(poison_err)?;
        Ok(assets.get(guid).cloned())
    }

    fn fetch_by_qualified_name(
        &self,
        type_name: &str,
        qualified_name: &str,
        _include_relationships: bool,
    ) -> Result<Option<Asset>> {
        let assets = self.assets.read().map_err(poison_err)?;
        Ok(assets
            .values()
            .find(|asset| {
                asset.type_name() == type_name
                    && asset
                        .effective_qualified_name()
                        .is_some_and(|qn| qn.as_str() == qualified_name)
            })
            .cloned())
    }

    fn search(&self, query: &SearchQuery) -> Result<SearchResults<'_>> {
        let assets = self.assets.read().map_err(poison_err)?;
        let mut hits: Vec<Asset> = assets
            .values()
            .filter(|asset| query.matches(asset))
            .cloned()
            .collect();
        // Deterministic order for callers that take the first hit.
        hits.sort_by(|a, b| {
            a.effective_qualified_name()
                .cmp(&b.effective_qualified_name())
        });
        if let Some(limit) = query.limit {
            hits.truncate(limit);
        }
        Ok(Box::new(hits.into_iter().map(Ok)))
    }

    fn save(&self, asset: &Asset) -> Result<Asset> {
        let mut stored = asset.clone();
        let mut assets = self.assets.write().map_err(poison_err)?;

        // Equal qualified names are one logical asset: a repeated
        // creator or trim-to-required payload upserts under the
        // existing GUID instead of minting a duplicate.
        let existing = stored.effective_qualified_name().and_then(|qn| {
            assets
                .values()
                .find(|candidate| {
                    candidate.type_name() == stored.type_name()
                        && candidate.effective_qualified_name() == Some(qn)
                })
                .cloned()
        });

        let now = Utc::now();
        if let Some(existing) = existing {
            stored.guid = existing.guid;
            stored.created_at = existing.created_at;
        } else {
            // Placeholder GUIDs are replaced by a server-style assignment.
            if stored.guid.as_ref().is_none_or(Guid::is_placeholder) {
                stored.guid = Some(Guid::new(Uuid::new_v4().to_string()));
            }
            stored.created_at = Some(now);
        }
        stored.updated_at = Some(now);

        let key = stored
            .guid
            .as_ref()
            .map(|g| g.as_str().to_string())
            .ok_or_else(|| Error::internal("saved asset has no GUID"))?;

        assets.insert(key, stored.clone());
        Ok(stored)
    }
}
