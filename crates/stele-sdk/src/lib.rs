//! # stele-sdk
//!
//! Typed client-side data model for the stele metadata catalog:
//!
//! - **Asset Model**: one [`asset::Asset`] struct shared by every
//!   concrete type, driven by the type registry in `stele-core`
//! - **Reference Trimming**: reducing a populated asset to the minimal
//!   payload needed to point at it ([`asset::Asset::trim_to_reference`])
//!   or update it ([`asset::Asset::trim_to_required`])
//! - **Typed Search Scoping**: constraining the generic search to one
//!   concrete type and lifecycle state
//! - **Service Boundary**: the [`client::CatalogClient`] capability
//!   trait, generic `get` resolution over both identifier forms, and
//!   the deprecated fetch-merge-save tag/term helpers
//! - **Caches**: memoizing name-to-id lookups for users, groups, and
//!   custom metadata
//!
//! This layer is synchronous and stateless: every operation is either a
//! pure computation or a single blocking call through the client trait.
//! Pure operations are safe from any number of concurrent threads.

#![forbid(unsafe_code)]
#![deny(missing_docs)]
#![deny(rust_2018_idioms)]
#![warn(clippy::pedantic)]

pub mod asset;
pub mod cache;
pub mod client;
pub mod memory;
pub mod policy;
pub mod reference;
pub mod search;
pub mod updater;

pub use asset::{Asset, AssetStatus, UniqueAttributes};
pub use client::CatalogClient;
pub use memory::InMemoryCatalog;
pub use reference::{Reference, ReferenceId, SaveSemantic};
pub use search::{Filter, SearchQuery};
pub use updater::Updater;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::asset::{Asset, AssetStatus, UniqueAttributes};
    pub use crate::client::CatalogClient;
    pub use crate::reference::{Reference, ReferenceId, SaveSemantic};
    pub use crate::search::SearchQuery;
    pub use crate::updater::Updater;
    pub use stele_core::prelude::*;
}
