//! Typed search scoping.
//!
//! [`SearchQuery`] is a pure query value: building one performs no I/O.
//! Execution and pagination belong to the catalog collaborator behind
//! [`crate::client::CatalogClient`]. The one piece of logic this layer
//! owns is *scoping*: narrowing the generic multi-type search to
//! exactly one concrete type, optionally including archived
//! (soft-deleted) instances.

use serde::{Deserialize, Serialize};

use crate::asset::{Asset, AssetStatus};

/// A single equality filter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "field", content = "value", rename_all = "camelCase")]
pub enum Filter {
    /// Match assets of exactly this concrete type.
    TypeName(String),
    /// Match assets in this lifecycle state.
    Status(AssetStatus),
    /// Match the asset with this qualified name.
    QualifiedName(String),
}

/// A search query scoped by equality filters, with optional result
/// limit and attribute projection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct SearchQuery {
    /// Equality filters, all of which must match.
    pub filters: Vec<Filter>,

    /// Maximum number of results to return.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<usize>,

    /// Attribute wire names to project into results. Empty means the
    /// server default set.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub attributes: Vec<String>,
}

impl SearchQuery {
    /// Scopes a query to exactly one concrete type.
    ///
    /// Always filters on the type name; unless `include_archived` is
    /// set, additionally filters to active instances.
    #[must_use]
    pub fn select_type(type_name: impl Into<String>, include_archived: bool) -> Self {
        let mut filters = vec![Filter::TypeName(type_name.into())];
        if !include_archived {
            filters.push(Filter::Status(AssetStatus::Active));
        }
        Self {
            filters,
            limit: None,
            attributes: Vec::new(),
        }
    }

    /// Adds a qualified-name equality filter.
    #[must_use]
    pub fn with_qualified_name(mut self, qn: impl Into<String>) -> Self {
        self.filters.push(Filter::QualifiedName(qn.into()));
        self
    }

    /// Caps the number of results.
    #[must_use]
    pub fn with_limit(mut self, limit: usize) -> Self {
        self.limit = Some(limit);
        self
    }

    /// Requests an attribute projection by wire name.
    #[must_use]
    pub fn with_attribute(mut self, field: impl Into<String>) -> Self {
        self.attributes.push(field.into());
        self
    }

    /// Evaluates the query's filters against one asset.
    ///
    /// Used by in-process executors (the in-memory catalog); the real
    /// server evaluates the same semantics in its search index.
    #[must_use]
    pub fn matches(&self, asset: &Asset) -> bool {
        self.filters.iter().all(|filter| match filter {
            Filter::TypeName(tn) => asset.type_name() == tn,
            Filter::Status(status) => asset.status == *status,
            Filter::QualifiedName(qn) => asset
                .effective_qualified_name()
                .is_some_and(|actual| actual.as_str() == qn),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bucket(qn: &str, status: AssetStatus) -> Asset {
        let mut asset = Asset::of("ObjectStoreBucket");
        asset.qualified_name = Some(qn.into());
        asset.status = status;
        asset
    }

    #[test]
    fn select_type_filters_to_active_by_default() {
        let query = SearchQuery::select_type("ObjectStoreBucket", false);
        assert!(query.matches(&bucket("conn/aws/b1", AssetStatus::Active)));
        assert!(!query.matches(&bucket("conn/aws/b1", AssetStatus::Archived)));
    }

    #[test]
    fn include_archived_drops_the_state_filter_only() {
        let query = SearchQuery::select_type("ObjectStoreBucket", true);
        assert!(query.matches(&bucket("conn/aws/b1", AssetStatus::Active)));
        assert!(query.matches(&bucket("conn/aws/b1", AssetStatus::Archived)));
        // The type filter is retained.
        assert!(!query.matches(&Asset::of("MessageTopic")));
    }

    #[test]
    fn wrong_type_never_matches() {
        let query = SearchQuery::select_type("MessageTopic", false);
        assert!(!query.matches(&bucket("conn/aws/b1", AssetStatus::Active)));
    }

    #[test]
    fn qualified_name_filter() {
        let query = SearchQuery::select_type("ObjectStoreBucket", false)
            .with_qualified_name("conn/aws/b1");
        assert!(query.matches(&bucket("conn/aws/b1", AssetStatus::Active)));
        assert!(!query.matches(&bucket("conn/aws/b2", AssetStatus::Active)));
    }

    #[test]
    fn query_wire_shape() {
        let query = SearchQuery::select_type("ObjectStoreBucket", false)
            .with_limit(1)
            .with_attribute("name");
        let json = serde_json::to_value(&query).unwrap();
        assert_eq!(json["filters"][0]["field"], "typeName");
        assert_eq!(json["filters"][0]["value"], "ObjectStoreBucket");
        assert_eq!(json["filters"][1]["field"], "status");
        assert_eq!(json["filters"][1]["value"], "ACTIVE");
        assert_eq!(json["limit"], 1);
    }
}
