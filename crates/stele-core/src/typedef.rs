//! Type descriptors: the per-type metadata table driving the client.
//!
//! The catalog exposes hundreds of concrete asset types. Rather than
//! one hand-written module per type, the client is a single generic
//! engine parametrized by a [`TypeDef`]: the type name, its capability
//! set, the fields an update payload must carry, and the rule used to
//! compose its qualified name. "Does this asset have capability X" is a
//! set-membership query, not an inheritance walk.

use crate::qname::QualifiedName;

/// Wire name of the qualified-name attribute.
pub const FIELD_QUALIFIED_NAME: &str = "qualifiedName";

/// Wire name of the short-name attribute.
pub const FIELD_NAME: &str = "name";

/// A capability a concrete asset type may carry.
///
/// Capabilities replace the source model's deep marker-interface
/// hierarchies with a flat set attached to each type descriptor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Capability {
    /// Lives in a cloud provider account.
    Cloud,
    /// Object-store container or object.
    ObjectStore,
    /// Part of the data catalog proper (tables, views, schemas).
    Catalog,
    /// Participates in the lineage graph.
    Lineage,
    /// Access-control construct (purposes, personas, policies).
    AccessControl,
    /// Message-bus resource (topics, subscriptions).
    MessageBus,
    /// BI-tool resource (reports, dashboards).
    Bi,
}

/// How a type composes its qualified name from its parent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QnameRule {
    /// `{parent}/{name}` — accounts, buckets, namespaces.
    Container,
    /// `{parent}/{kind}/{name}` — sub-resources with a declared kind
    /// segment.
    Kinded(&'static str),
    /// `{parent}/{hash}` over the process id and sorted input/output
    /// sets — lineage processes.
    Process,
}

/// Static descriptor for one concrete asset type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TypeDef {
    /// The catalog type name, fixed per concrete type.
    pub type_name: &'static str,
    /// Capabilities carried by this type.
    pub capabilities: &'static [Capability],
    /// Required update fields *beyond* `qualifiedName` and `name`,
    /// by wire name. Values live in the asset's attribute map.
    pub extra_required_fields: &'static [&'static str],
    /// Qualified-name composition rule.
    pub qname_rule: QnameRule,
}

impl TypeDef {
    /// Returns `true` if this type carries the given capability.
    #[must_use]
    pub fn has_capability(&self, cap: Capability) -> bool {
        self.capabilities.contains(&cap)
    }

    /// Returns every required update field by wire name, intrinsic
    /// fields first.
    #[must_use]
    pub fn required_fields(&self) -> Vec<&'static str> {
        let mut fields = vec![FIELD_QUALIFIED_NAME, FIELD_NAME];
        fields.extend_from_slice(self.extra_required_fields);
        fields
    }

    /// Composes the qualified name for a new asset of this type under
    /// the given parent.
    ///
    /// Process-rule types derive their name from input/output sets
    /// instead; use [`TypeDef::process_qualified_name`] for those.
    /// Calling this on a process type is a programming error reported
    /// as invalid input.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::InvalidInput`] for process-rule types.
    pub fn qualified_name_for(
        &self,
        parent: &QualifiedName,
        name: &str,
    ) -> crate::Result<QualifiedName> {
        match self.qname_rule {
            QnameRule::Container => Ok(parent.child(name)),
            QnameRule::Kinded(kind) => Ok(parent.kinded_child(kind, name)),
            QnameRule::Process => Err(crate::Error::invalid_input(format!(
                "{} derives its qualified name from input/output sets; use process_qualified_name",
                self.type_name
            ))),
        }
    }

    /// Composes the idempotent qualified name for a lineage process of
    /// this type.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::InvalidInput`] for non-process types.
    pub fn process_qualified_name(
        &self,
        parent: &QualifiedName,
        process_id: &str,
        inputs: &[String],
        outputs: &[String],
    ) -> crate::Result<QualifiedName> {
        if self.qname_rule != QnameRule::Process {
            return Err(crate::Error::invalid_input(format!(
                "{} is not a process type",
                self.type_name
            )));
        }
        Ok(parent.process(process_id, inputs, outputs))
    }

    /// Looks up a type descriptor by catalog type name.
    #[must_use]
    pub fn lookup(type_name: &str) -> Option<&'static Self> {
        REGISTRY.iter().find(|td| td.type_name == type_name)
    }

    /// Returns the full registry.
    #[must_use]
    pub fn all() -> &'static [Self] {
        REGISTRY
    }
}

/// Connections root the qualified-name hierarchy.
pub const CONNECTION: TypeDef = TypeDef {
    type_name: "Connection",
    capabilities: &[Capability::Catalog],
    extra_required_fields: &[],
    qname_rule: QnameRule::Container,
};

/// Object-store bucket.
pub const OBJECT_STORE_BUCKET: TypeDef = TypeDef {
    type_name: "ObjectStoreBucket",
    capabilities: &[Capability::Cloud, Capability::ObjectStore, Capability::Catalog],
    extra_required_fields: &[],
    qname_rule: QnameRule::Container,
};

/// Object-store object within a bucket.
pub const OBJECT_STORE_OBJECT: TypeDef = TypeDef {
    type_name: "ObjectStoreObject",
    capabilities: &[Capability::Cloud, Capability::ObjectStore, Capability::Catalog],
    extra_required_fields: &[],
    qname_rule: QnameRule::Container,
};

/// Message-bus topic; carries a declared kind segment in its name.
pub const MESSAGE_TOPIC: TypeDef = TypeDef {
    type_name: "MessageTopic",
    capabilities: &[Capability::Cloud, Capability::MessageBus],
    extra_required_fields: &[],
    qname_rule: QnameRule::Kinded("topic"),
};

/// BI report.
pub const BI_REPORT: TypeDef = TypeDef {
    type_name: "BiReport",
    capabilities: &[Capability::Bi, Capability::Catalog],
    extra_required_fields: &[],
    qname_rule: QnameRule::Container,
};

/// Lineage process; qualified name is an idempotent upsert key.
pub const LINEAGE_PROCESS: TypeDef = TypeDef {
    type_name: "LineageProcess",
    capabilities: &[Capability::Lineage],
    extra_required_fields: &[],
    qname_rule: QnameRule::Process,
};

/// Access-control purpose; updates additionally require the enabled flag.
pub const PURPOSE: TypeDef = TypeDef {
    type_name: "Purpose",
    capabilities: &[Capability::AccessControl],
    extra_required_fields: &["isAccessControlEnabled"],
    qname_rule: QnameRule::Container,
};

static REGISTRY: &[TypeDef] = &[
    CONNECTION,
    OBJECT_STORE_BUCKET,
    OBJECT_STORE_OBJECT,
    MESSAGE_TOPIC,
    BI_REPORT,
    LINEAGE_PROCESS,
    PURPOSE,
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookup_by_type_name() {
        let td = TypeDef::lookup("ObjectStoreBucket").unwrap();
        assert_eq!(td.type_name, "ObjectStoreBucket");
        assert!(TypeDef::lookup("NoSuchType").is_none());
    }

    #[test]
    fn capability_is_set_membership() {
        assert!(OBJECT_STORE_BUCKET.has_capability(Capability::ObjectStore));
        assert!(OBJECT_STORE_BUCKET.has_capability(Capability::Cloud));
        assert!(!OBJECT_STORE_BUCKET.has_capability(Capability::AccessControl));
    }

    #[test]
    fn required_fields_include_intrinsics_first() {
        assert_eq!(PURPOSE.required_fields(), vec![
            FIELD_QUALIFIED_NAME,
            FIELD_NAME,
            "isAccessControlEnabled",
        ]);
        assert_eq!(CONNECTION.required_fields(), vec![
            FIELD_QUALIFIED_NAME,
            FIELD_NAME,
        ]);
    }

    #[test]
    fn container_and_kinded_composition() {
        let conn = QualifiedName::new("conn/aws");
        assert_eq!(
            OBJECT_STORE_BUCKET
                .qualified_name_for(&conn, "bucket1")
                .unwrap()
                .as_str(),
            "conn/aws/bucket1"
        );
        assert_eq!(
            MESSAGE_TOPIC
                .qualified_name_for(&conn, "t1")
                .unwrap()
                .as_str(),
            "conn/aws/topic/t1"
        );
    }

    #[test]
    fn process_rule_rejects_plain_composition() {
        let conn = QualifiedName::new("conn/aws");
        assert!(LINEAGE_PROCESS.qualified_name_for(&conn, "p").is_err());
        assert!(LINEAGE_PROCESS
            .process_qualified_name(&conn, "p", &[], &[])
            .is_ok());
        assert!(CONNECTION
            .process_qualified_name(&conn, "p", &[], &[])
            .is_err());
    }

    #[test]
    fn registry_type_names_are_unique() {
        let mut names: Vec<_> = TypeDef::all().iter().map(|td| td.type_name).collect();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), TypeDef::all().len());
    }
}
