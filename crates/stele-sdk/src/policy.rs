//! Access-control policy payloads for purposes.
//!
//! A purpose's metadata or data policy must target at least one of:
//! specific groups, specific users, or all users. Building a policy
//! with no target fails before any network call is attempted.

use serde::{Deserialize, Serialize};

use stele_core::typedef::PURPOSE;
use stele_core::{Error, Result};

/// The targets a purpose policy applies to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PolicyTargets {
    /// Group names the policy applies to.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub groups: Vec<String>,

    /// User names the policy applies to.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub users: Vec<String>,

    /// Whether the policy applies to all users.
    #[serde(default)]
    pub all_users: bool,
}

/// Accumulator for a purpose policy's targets.
#[derive(Debug, Clone, Default)]
pub struct PolicyBuilder {
    groups: Vec<String>,
    users: Vec<String>,
    all_users: bool,
}

impl PolicyBuilder {
    /// Creates an empty policy builder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Targets a group by name.
    #[must_use]
    pub fn group(mut self, name: impl Into<String>) -> Self {
        self.groups.push(name.into());
        self
    }

    /// Targets a user by name.
    #[must_use]
    pub fn user(mut self, name: impl Into<String>) -> Self {
        self.users.push(name.into());
        self
    }

    /// Targets all users.
    #[must_use]
    pub fn all_users(mut self) -> Self {
        self.all_users = true;
        self
    }

    /// Finalizes the targets.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NoValidTargetForPolicy`] when no group, user,
    /// or all-users target was supplied.
    pub fn build(self) -> Result<PolicyTargets> {
        if self.groups.is_empty() && self.users.is_empty() && !self.all_users {
            return Err(Error::NoValidTargetForPolicy {
                type_name: PURPOSE.type_name.to_string(),
            });
        }
        Ok(PolicyTargets {
            groups: self.groups,
            users: self.users,
            all_users: self.all_users,
        })
    }
}
