//! Error types and result aliases for the stele client.
//!
//! Every failure carries the asset type name and the identifier(s)
//! attempted so callers can diagnose a failed lookup or validation
//! without inspecting internal state. Validation failures are raised
//! locally before any network call; lookup failures are raised only
//! after the catalog collaborator returns empty.

/// The result type used throughout the stele client.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in stele client operations.
///
/// The first three variants form the resolution taxonomy: callers can
/// react differently to a missing GUID (retry), a missing qualified
/// name (hard fail), and a type mismatch (log and investigate).
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// No asset with the requested GUID exists in the catalog.
    #[error("{type_name} not found by GUID: {guid}")]
    NotFoundByGuid {
        /// The asset type that was requested.
        type_name: String,
        /// The GUID that was looked up.
        guid: String,
    },

    /// No asset with the requested qualified name exists in the catalog.
    #[error("{type_name} not found by qualified name: {qualified_name}")]
    NotFoundByQualifiedName {
        /// The asset type that was requested.
        type_name: String,
        /// The qualified name that was looked up.
        qualified_name: String,
    },

    /// The identifier resolved to an asset of a different concrete type.
    #[error("requested {requested} but {id} is a {actual}")]
    WrongTypeRequested {
        /// The type the caller asked for.
        requested: String,
        /// The type the catalog actually holds under this identifier.
        actual: String,
        /// The identifier that was resolved.
        id: String,
    },

    /// An asset could not be reduced to a relationship reference because
    /// none of its identifying fields are populated.
    #[error(
        "missing required relationship parameter for {type_name}: one of [{}] must be set",
        .candidates.join(", ")
    )]
    MissingRequiredRelationshipParam {
        /// The asset type being referenced.
        type_name: String,
        /// All candidate identifying fields, none of which were set.
        candidates: Vec<String>,
    },

    /// An asset is missing one or more fields required to build an
    /// update payload. The whole missing set is reported at once.
    #[error(
        "missing required update parameter(s) for {type_name}: [{}]",
        .fields.join(", ")
    )]
    MissingRequiredUpdateParam {
        /// The asset type being updated.
        type_name: String,
        /// Every required field that was null or empty.
        fields: Vec<String>,
    },

    /// A policy was built without any valid target.
    #[error("no valid target for {type_name} policy: at least one of groups, users, or all-users is required")]
    NoValidTargetForPolicy {
        /// The access-control type the policy belongs to.
        type_name: String,
    },

    /// Invalid input was provided.
    #[error("invalid input: {message}")]
    InvalidInput {
        /// Description of what made the input invalid.
        message: String,
    },

    /// An internal error occurred that should not happen in normal operation.
    #[error("internal error: {message}")]
    Internal {
        /// Description of the internal error.
        message: String,
    },
}

impl Error {
    /// Creates a not-found-by-GUID error.
    #[must_use]
    pub fn not_found_by_guid(type_name: impl Into<String>, guid: impl Into<String>) -> Self {
        Self::NotFoundByGuid {
            type_name: type_name.into(),
            guid: guid.into(),
        }
    }

    /// Creates a not-found-by-qualified-name error.
    #[must_use]
    pub fn not_found_by_qualified_name(
        type_name: impl Into<String>,
        qualified_name: impl Into<String>,
    ) -> Self {
        Self::NotFoundByQualifiedName {
            type_name: type_name.into(),
            qualified_name: qualified_name.into(),
        }
    }

    /// Creates a wrong-type error for an identifier that resolved to an
    /// unexpected concrete type.
    #[must_use]
    pub fn wrong_type(
        requested: impl Into<String>,
        actual: impl Into<String>,
        id: impl Into<String>,
    ) -> Self {
        Self::WrongTypeRequested {
            requested: requested.into(),
            actual: actual.into(),
            id: id.into(),
        }
    }

    /// Creates an invalid-input error with the given message.
    #[must_use]
    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::InvalidInput {
            message: message.into(),
        }
    }

    /// Creates an internal error with the given message.
    #[must_use]
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal {
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_update_params_reports_whole_set() {
        let err = Error::MissingRequiredUpdateParam {
            type_name: "Purpose".into(),
            fields: vec!["qualifiedName".into(), "name".into()],
        };
        let msg = err.to_string();
        assert!(msg.contains("Purpose"));
        assert!(msg.contains("qualifiedName"));
        assert!(msg.contains("name"));
    }

    #[test]
    fn relationship_param_names_both_candidates() {
        let err = Error::MissingRequiredRelationshipParam {
            type_name: "Bucket".into(),
            candidates: vec!["guid".into(), "qualifiedName".into()],
        };
        let msg = err.to_string();
        assert!(msg.contains("guid"));
        assert!(msg.contains("qualifiedName"));
    }

    #[test]
    fn invalid_input_carries_message() {
        let err = Error::invalid_input("bad segment");
        assert!(matches!(&err, Error::InvalidInput { message } if message == "bad segment"));
        assert_eq!(err.to_string(), "invalid input: bad segment");
    }

    #[test]
    fn wrong_type_names_both_types_and_id() {
        let err = Error::wrong_type("Bucket", "Topic", "abc-123");
        let msg = err.to_string();
        assert!(msg.contains("Bucket"));
        assert!(msg.contains("Topic"));
        assert!(msg.contains("abc-123"));
    }
}
