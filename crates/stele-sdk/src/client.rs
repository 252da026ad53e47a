//! The catalog service boundary and the generic operations built on it.
//!
//! [`CatalogClient`] is the capability trait this layer consumes: one
//! blocking request/response per call, implemented by the real HTTP
//! transport elsewhere and by [`crate::memory::InMemoryCatalog`] in
//! tests. Everything on top of the trait is generic over the type
//! registry; there are no per-type client methods.
//!
//! # Resolution
//!
//! [`get`] accepts either identifier form. The identifier is classified
//! by string shape (full UUID grammar means GUID, anything else means
//! qualified name) and the lookup is dispatched accordingly. The three
//! failure conditions stay distinguishable: not found by GUID, not
//! found by qualified name, and found-but-wrong-type.

use tracing::debug;

use stele_core::{Error, IdKind, Result};

use crate::asset::Asset;
use crate::search::SearchQuery;

/// A lazy sequence of search results.
pub type SearchResults<'a> = Box<dyn Iterator<Item = Result<Asset>> + 'a>;

/// Blocking capability boundary to the catalog service.
///
/// Fetches return `Ok(None)` for absence; mapping absence onto the
/// typed not-found taxonomy is this layer's job, because only this
/// layer knows which concrete type the caller asked for.
pub trait CatalogClient {
    /// Fetches an asset by server GUID.
    ///
    /// # Errors
    ///
    /// Returns transport-level failures only; absence is `Ok(None)`.
    fn fetch_by_guid(&self, guid: &str, include_relationships: bool) -> Result<Option<Asset>>;

    /// Fetches an asset by concrete type and qualified name.
    ///
    /// # Errors
    ///
    /// Returns transport-level failures only; absence is `Ok(None)`.
    fn fetch_by_qualified_name(
        &self,
        type_name: &str,
        qualified_name: &str,
        include_relationships: bool,
    ) -> Result<Option<Asset>>;

    /// Executes a search query, returning a lazy sequence of results.
    ///
    /// # Errors
    ///
    /// Returns transport-level failures.
    fn search(&self, query: &SearchQuery) -> Result<SearchResults<'_>>;

    /// Creates or updates an asset, returning the stored version.
    ///
    /// # Errors
    ///
    /// Returns transport-level failures.
    fn save(&self, asset: &Asset) -> Result<Asset>;
}

/// Retrieves an asset of the requested type by either identifier form,
/// with relationships included.
///
/// # Errors
///
/// [`Error::NotFoundByGuid`] or [`Error::NotFoundByQualifiedName`]
/// depending on how the identifier classified, or
/// [`Error::WrongTypeRequested`] when the identifier resolved to a
/// different concrete type.
pub fn get<C: CatalogClient>(client: &C, type_name: &str, id: &str) -> Result<Asset> {
    get_with(client, type_name, id, true)
}

/// [`get`] with control over relationship inclusion.
///
/// # Errors
///
/// Same conditions as [`get`].
pub fn get_with<C: CatalogClient>(
    client: &C,
    type_name: &str,
    id: &str,
    include_relationships: bool,
) -> Result<Asset> {
    let asset = match IdKind::classify(id) {
        IdKind::Guid => {
            debug!(type_name, guid = id, "resolving asset by GUID");
            client
                .fetch_by_guid(id, include_relationships)?
                .ok_or_else(|| Error::not_found_by_guid(type_name, id))?
        }
        IdKind::QualifiedName => {
            debug!(type_name, qualified_name = id, "resolving asset by qualified name");
            client
                .fetch_by_qualified_name(type_name, id, include_relationships)?
                .ok_or_else(|| Error::not_found_by_qualified_name(type_name, id))?
        }
    };
    expect_type(asset, type_name, id)
}

/// Retrieves a single asset of the requested type via the search path,
/// projecting the requested attributes.
///
/// Composes typed scoping with a page size of one, then applies the
/// same type-check semantics as direct resolution.
///
/// # Errors
///
/// [`Error::NotFoundByQualifiedName`] when the search returns nothing,
/// or [`Error::WrongTypeRequested`] on a type mismatch.
pub fn get_by_search<C: CatalogClient>(
    client: &C,
    type_name: &str,
    qualified_name: &str,
    attributes: &[&str],
) -> Result<Asset> {
    let mut query = SearchQuery::select_type(type_name, false)
        .with_qualified_name(qualified_name)
        .with_limit(1);
    for attribute in attributes {
        query = query.with_attribute(*attribute);
    }

    let mut results = client.search(&query)?;
    match results.next() {
        Some(asset) => expect_type(asset?, type_name, qualified_name),
        None => Err(Error::not_found_by_qualified_name(
            type_name,
            qualified_name,
        )),
    }
}

fn expect_type(asset: Asset, requested: &str, id: &str) -> Result<Asset> {
    if asset.type_name() == requested {
        Ok(asset)
    } else {
        Err(Error::wrong_type(requested, asset.type_name(), id))
    }
}

/// Appends tags to an asset by fetching it, merging, and saving.
///
/// # Errors
///
/// Resolution failures from the fetch, or transport failures from the
/// save.
#[deprecated(
    note = "read-modify-write without a concurrency token; concurrent appenders can race and drop each other's additions"
)]
pub fn append_tags<C: CatalogClient>(
    client: &C,
    type_name: &str,
    qualified_name: &str,
    tags: &[&str],
) -> Result<Asset> {
    let mut asset = get(client, type_name, qualified_name)?;
    for tag in tags {
        if !asset.tags.iter().any(|existing| existing == tag) {
            asset.tags.push((*tag).to_string());
        }
    }
    debug!(type_name, qualified_name, count = tags.len(), "appending tags");
    client.save(&asset)
}

/// Removes one tag from an asset by fetching it, filtering, and saving.
///
/// # Errors
///
/// Resolution failures from the fetch, or transport failures from the
/// save.
#[deprecated(
    note = "read-modify-write without a concurrency token; concurrent mutators can race"
)]
pub fn remove_tag<C: CatalogClient>(
    client: &C,
    type_name: &str,
    qualified_name: &str,
    tag: &str,
) -> Result<Asset> {
    let mut asset = get(client, type_name, qualified_name)?;
    asset.tags.retain(|existing| existing != tag);
    client.save(&asset)
}

/// Appends glossary terms to an asset by fetching it, merging, and
/// saving.
///
/// # Errors
///
/// Resolution failures from the fetch, or transport failures from the
/// save.
#[deprecated(
    note = "read-modify-write without a concurrency token; concurrent appenders can race and drop each other's additions"
)]
pub fn append_terms<C: CatalogClient>(
    client: &C,
    type_name: &str,
    qualified_name: &str,
    terms: &[&str],
) -> Result<Asset> {
    let mut asset = get(client, type_name, qualified_name)?;
    for term in terms {
        if !asset.terms.iter().any(|existing| existing == term) {
            asset.terms.push((*term).to_string());
        }
    }
    client.save(&asset)
}

/// Removes one glossary term from an asset by fetching it, filtering,
/// and saving.
///
/// # Errors
///
/// Resolution failures from the fetch, or transport failures from the
/// save.
#[deprecated(
    note = "read-modify-write without a concurrency token; concurrent mutators can race"
)]
pub fn remove_term<C: CatalogClient>(
    client: &C,
    type_name: &str,
    qualified_name: &str,
    term: &str,
) -> Result<Asset> {
    let mut asset = get(client, type_name, qualified_name)?;
    asset.terms.retain(|existing| existing != term);
    client.save(&asset)
}
