//! # Schema Snapshot — Authoritative Intermediate Form
//!
//! Converts a [`MessageLayout`] into the structured document that is cached
//! per contract and consumed by the registry packer. The snapshot carries
//! the layout's full semantic content (messages, fields, tags, service
//! operations) in representation-neutral primitives: strings, integers,
//! booleans, and ordered sequences.
//!
//! The IDL and typed-declaration texts are lossy projections of the same
//! layout; they are never re-parsed to reconstruct schema information —
//! the snapshot is the only form that travels forward in the pipeline.
//!
//! ## Determinism
//!
//! Serialization uses compact JSON whose key order comes from struct
//! declaration order and whose sequence order comes from `Vec` ordering.
//! There is no map with environment-dependent iteration order anywhere in
//! the model, so the cache file is byte-for-byte reproducible.

use serde::{Deserialize, Serialize};

use crate::layout::{FieldRef, MessageLayout};
use crate::typemap;

/// Serialized schema for one contract.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct SchemaSnapshot {
    /// The contract name.
    pub contract: String,

    /// Optional wire package.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub package: Option<String>,

    /// Whether the list wrapper was suppressed.
    pub direct_message: bool,

    /// External namespaces consumed verbatim.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub imports: Vec<String>,

    /// All message definitions in declaration order.
    pub messages: Vec<MessageSchema>,

    /// The CRUD service.
    pub service: ServiceSchema,
}

/// One message definition in a snapshot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct MessageSchema {
    /// Message name.
    pub name: String,
    /// Ordered fields.
    pub fields: Vec<FieldSchema>,
}

/// One field of a snapshot message.
///
/// `type` holds either a wire primitive (`"string"`, `"int32"`, ...) or
/// the name of another message in the same snapshot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FieldSchema {
    /// Field name.
    pub name: String,
    /// Wire type or message reference.
    #[serde(rename = "type")]
    pub type_name: String,
    /// Wire tag.
    pub tag: u32,
    /// Whether the field is repeated.
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub repeated: bool,
}

/// The service declaration in a snapshot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ServiceSchema {
    /// Service name.
    pub name: String,
    /// The CRUD operations in declaration order.
    pub rpcs: Vec<RpcSchema>,
}

/// One RPC operation in a snapshot service.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RpcSchema {
    /// Operation name.
    pub name: String,
    /// Request message name.
    pub request: String,
    /// Response message name.
    pub response: String,
}

impl SchemaSnapshot {
    /// Project a layout into its snapshot form.
    pub fn from_layout(layout: &MessageLayout) -> Self {
        Self {
            contract: layout.contract_name.clone(),
            package: layout.package.clone(),
            direct_message: layout.direct_message,
            imports: layout.imports.clone(),
            messages: layout
                .messages
                .iter()
                .map(|message| MessageSchema {
                    name: message.name.clone(),
                    fields: message
                        .fields
                        .iter()
                        .map(|field| FieldSchema {
                            name: field.name.clone(),
                            type_name: match &field.ty {
                                FieldRef::Tag(tag) => typemap::wire_type(tag).to_string(),
                                FieldRef::Message(name) => name.clone(),
                            },
                            tag: field.tag,
                            repeated: field.repeated,
                        })
                        .collect(),
                })
                .collect(),
            service: ServiceSchema {
                name: layout.service.name.clone(),
                rpcs: layout
                    .service
                    .rpcs
                    .iter()
                    .map(|rpc| RpcSchema {
                        name: rpc.name.clone(),
                        request: rpc.request.clone(),
                        response: rpc.response.clone(),
                    })
                    .collect(),
            },
        }
    }

    /// Serialize to compact JSON.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    /// Parse a snapshot from its cached JSON form.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}
