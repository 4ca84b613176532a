//! # Contract Types — Source of Truth for Generation
//!
//! A `Contract` is the neutral description of one data entity: a name, an
//! ordered list of typed fields, and generation modifiers. One contract
//! produces exactly one family of artifacts, and field declaration order
//! determines wire tag assignment, so order is part of the contract's
//! identity.
//!
//! ## Invariants
//!
//! - `property_key` values are unique within a contract (validated by the
//!   constructor and by [`Contract::validate`] for deserialized input).
//! - Contracts are immutable once compilation begins; the compiler takes
//!   `&[Contract]` and never mutates it.

use serde::{Deserialize, Serialize};

use crate::error::CompileError;
use crate::field_type::FieldType;

/// A neutral entity description driving all artifact generation.
///
/// Constructed once by the upstream collector. The field list is ordered;
/// appending a field must not disturb the wire tags of existing fields.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct Contract {
    /// Unique contract name; also the root of the generated namespace.
    pub name: String,

    /// Optional wire package grouping.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub package_name: Option<String>,

    /// Ordered field list. Order determines default tag assignment.
    pub fields: Vec<Field>,

    /// Suppresses generation of the list-wrapper message when true.
    #[serde(default)]
    pub direct_message: bool,

    /// External namespaces consumed verbatim by downstream generators.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub imports: Vec<String>,
}

impl Contract {
    /// Create a validated contract.
    ///
    /// # Errors
    ///
    /// Returns `CompileError::EmptyContractName` if `name` is empty,
    /// `CompileError::DuplicateField` if two fields share a property key,
    /// and `CompileError::ReservedFieldName` for a field named `id`.
    pub fn new(name: impl Into<String>, fields: Vec<Field>) -> Result<Self, CompileError> {
        let contract = Self {
            name: name.into(),
            package_name: None,
            fields,
            direct_message: false,
            imports: Vec::new(),
        };
        contract.validate()?;
        Ok(contract)
    }

    /// Set the wire package name.
    pub fn with_package(mut self, package: impl Into<String>) -> Self {
        self.package_name = Some(package.into());
        self
    }

    /// Mark the contract as direct (no list-wrapper message).
    pub fn with_direct_message(mut self, direct: bool) -> Self {
        self.direct_message = direct;
        self
    }

    /// Attach external namespace imports.
    pub fn with_imports(mut self, imports: Vec<String>) -> Self {
        self.imports = imports;
        self
    }

    /// Re-check the contract invariants.
    ///
    /// Deserialization bypasses [`Contract::new`], so loaders must call this
    /// on every contract they admit into the compiler.
    pub fn validate(&self) -> Result<(), CompileError> {
        if self.name.is_empty() {
            return Err(CompileError::EmptyContractName);
        }
        let mut seen = std::collections::HashSet::new();
        for field in &self.fields {
            // "id" is synthesized into the primary message at tag 1.
            if field.property_key == "id" {
                return Err(CompileError::ReservedFieldName {
                    contract: self.name.clone(),
                    field: field.property_key.clone(),
                });
            }
            if !seen.insert(field.property_key.as_str()) {
                return Err(CompileError::DuplicateField {
                    contract: self.name.clone(),
                    field: field.property_key.clone(),
                });
            }
        }
        Ok(())
    }
}

/// A single typed field within a contract.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct Field {
    /// Field identifier, unique within its contract.
    pub property_key: String,

    /// Neutral type tag, resolved through the mapping tables per target.
    pub proto_type: FieldType,

    /// Whether the field is a repeated sequence.
    #[serde(default)]
    pub repeated: bool,

    /// Advisory uniqueness constraint; carried but not consumed here.
    #[serde(default)]
    pub unique: bool,

    /// Advisory index hint; carried but not consumed here.
    #[serde(default)]
    pub index: bool,

    /// Optional opaque default value.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_value: Option<serde_json::Value>,
}

impl Field {
    /// Create a plain field with the given key and type.
    pub fn new(property_key: impl Into<String>, proto_type: FieldType) -> Self {
        Self {
            property_key: property_key.into(),
            proto_type,
            repeated: false,
            unique: false,
            index: false,
            default_value: None,
        }
    }

    /// Mark the field as repeated.
    pub fn repeated(mut self) -> Self {
        self.repeated = true;
        self
    }

    /// Mark the field as unique (advisory).
    pub fn unique(mut self) -> Self {
        self.unique = true;
        self
    }

    /// Mark the field as indexed (advisory).
    pub fn indexed(mut self) -> Self {
        self.index = true;
        self
    }

    /// Attach an opaque default value.
    pub fn with_default(mut self, value: serde_json::Value) -> Self {
        self.default_value = Some(value);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn task_contract() -> Contract {
        Contract::new(
            "Task",
            vec![
                Field::new("label", FieldType::String),
                Field::new("checked", FieldType::Bool),
                Field::new("removed", FieldType::Bool),
            ],
        )
        .expect("valid contract")
    }

    #[test]
    fn test_create_contract() {
        let contract = task_contract();
        assert_eq!(contract.name, "Task");
        assert_eq!(contract.fields.len(), 3);
        assert!(!contract.direct_message);
        assert!(contract.package_name.is_none());
    }

    #[test]
    fn test_builder_modifiers() {
        let contract = task_contract()
            .with_package("task")
            .with_direct_message(true)
            .with_imports(vec!["crypto".to_string()]);
        assert_eq!(contract.package_name.as_deref(), Some("task"));
        assert!(contract.direct_message);
        assert_eq!(contract.imports, vec!["crypto"]);
    }

    #[test]
    fn test_duplicate_field_rejected() {
        let err = Contract::new(
            "Task",
            vec![
                Field::new("label", FieldType::String),
                Field::new("label", FieldType::Text),
            ],
        )
        .unwrap_err();
        match err {
            CompileError::DuplicateField { contract, field } => {
                assert_eq!(contract, "Task");
                assert_eq!(field, "label");
            }
            other => panic!("expected DuplicateField, got: {other}"),
        }
    }

    #[test]
    fn test_reserved_id_field_rejected() {
        let err = Contract::new("Task", vec![Field::new("id", FieldType::Int32)]).unwrap_err();
        assert!(matches!(err, CompileError::ReservedFieldName { .. }));
    }

    #[test]
    fn test_empty_name_rejected() {
        let err = Contract::new("", vec![]).unwrap_err();
        assert!(matches!(err, CompileError::EmptyContractName));
    }

    #[test]
    fn test_field_builders() {
        let field = Field::new("tags", FieldType::String)
            .repeated()
            .unique()
            .indexed()
            .with_default(serde_json::json!([]));
        assert!(field.repeated);
        assert!(field.unique);
        assert!(field.index);
        assert_eq!(field.default_value, Some(serde_json::json!([])));
    }

    #[test]
    fn test_manifest_yaml_round_trip() {
        let yaml = r#"
name: Task
packageName: task
fields:
  - propertyKey: label
    protoType: string
  - propertyKey: checked
    protoType: bool
    unique: true
"#;
        let contract: Contract = serde_yaml::from_str(yaml).unwrap();
        contract.validate().unwrap();
        assert_eq!(contract.name, "Task");
        assert_eq!(contract.fields[0].proto_type, FieldType::String);
        assert!(contract.fields[1].unique);

        let back = serde_yaml::to_string(&contract).unwrap();
        let again: Contract = serde_yaml::from_str(&back).unwrap();
        assert_eq!(contract, again);
    }

    #[test]
    fn test_manifest_unknown_key_rejected() {
        let yaml = "name: Task\nfields: []\nbogus: 1\n";
        assert!(serde_yaml::from_str::<Contract>(yaml).is_err());
    }

    #[test]
    fn test_deserialized_duplicate_caught_by_validate() {
        let json = r#"{"name":"T","fields":[
            {"propertyKey":"a","protoType":"string"},
            {"propertyKey":"a","protoType":"bool"}]}"#;
        let contract: Contract = serde_json::from_str(json).unwrap();
        assert!(contract.validate().is_err());
    }
}
