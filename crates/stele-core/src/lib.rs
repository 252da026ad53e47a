//! # stele-core
//!
//! Core primitives for the stele metadata-catalog client:
//!
//! - **Identifiers**: opaque GUIDs with a negative-placeholder sentinel
//!   for not-yet-created assets
//! - **Qualified Names**: the hierarchical naming scheme every asset
//!   type shares, with per-category composition rules
//! - **Type Descriptors**: the per-type metadata table (capabilities,
//!   required fields, naming rule) that drives the generic client
//! - **Errors**: the shared failure taxonomy for resolution and
//!   validation
//!
//! This crate is pure computation: no I/O, no shared mutable state.
//! Everything here is safe to call from any number of concurrent
//! threads.

#![forbid(unsafe_code)]
#![deny(missing_docs)]
#![deny(rust_2018_idioms)]
#![warn(clippy::pedantic)]

pub mod error;
pub mod guid;
pub mod qname;
pub mod typedef;

pub use error::{Error, Result};
pub use guid::Guid;
pub use qname::{IdKind, QualifiedName};
pub use typedef::{Capability, QnameRule, TypeDef};

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::error::{Error, Result};
    pub use crate::guid::Guid;
    pub use crate::qname::{IdKind, QualifiedName};
    pub use crate::typedef::{Capability, QnameRule, TypeDef};
}
