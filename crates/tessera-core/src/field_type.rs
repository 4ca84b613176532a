//! # Field Type Taxonomy — Single Source of Truth
//!
//! Defines the `FieldType` enum covering every neutral type tag a contract
//! field may carry. This is the ONE definition used across the entire
//! pipeline; both mapping tables `match` on it exhaustively, so adding a tag
//! forces every target representation to handle it at compile time.
//!
//! ## Leniency Invariant
//!
//! Parsing a type tag never fails. Tags outside the known set are captured
//! losslessly as [`FieldType::Custom`] and resolve through documented
//! fallback mappings downstream. An unknown tag in a contract must never
//! fail a build.

use std::convert::Infallible;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// A neutral field type tag.
///
/// The serialized form is the camelCase tag string used by contract
/// manifests and schema snapshots (`"string"`, `"simpleArray"`, ...).
/// The legacy aliases `boolean` and `int` are accepted on input and
/// normalize to `Bool` and `Int32`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum FieldType {
    /// UTF-8 string.
    String,
    /// Boolean flag.
    Bool,
    /// 32-bit signed integer.
    Int32,
    /// 64-bit signed integer.
    Int64,
    /// 32-bit float.
    Float,
    /// 64-bit float.
    Double,
    /// Raw byte string.
    Bytes,
    /// Calendar date, carried as a string on the wire.
    Date,
    /// Instant in time, carried as a string on the wire.
    Timestamp,
    /// Long-form text.
    Text,
    /// JSON document.
    Json,
    /// Binary JSON document (storage-layer distinction only).
    Jsonb,
    /// UUID, carried as a string on the wire.
    Uuid,
    /// Time of day, carried as a string on the wire.
    Time,
    /// Delimited scalar array (storage-layer convenience type).
    SimpleArray,
    /// Loose JSON object (storage-layer convenience type).
    SimpleJson,
    /// Arbitrary-precision integer.
    BigInt,
    /// 32-bit unsigned integer.
    Uint32,
    /// 64-bit unsigned integer.
    Uint64,
    /// 32-bit zigzag-encoded signed integer.
    Sint32,
    /// 64-bit zigzag-encoded signed integer.
    Sint64,
    /// 32-bit fixed-width unsigned integer.
    Fixed32,
    /// 64-bit fixed-width unsigned integer.
    Fixed64,
    /// 32-bit fixed-width signed integer.
    Sfixed32,
    /// 64-bit fixed-width signed integer.
    Sfixed64,
    /// Dynamically typed container (well-known Any on the wire).
    Any,
    /// Any tag outside the known set, preserved verbatim.
    Custom(String),
}

impl FieldType {
    /// The canonical tag string for this type.
    pub fn as_tag(&self) -> &str {
        match self {
            Self::String => "string",
            Self::Bool => "bool",
            Self::Int32 => "int32",
            Self::Int64 => "int64",
            Self::Float => "float",
            Self::Double => "double",
            Self::Bytes => "bytes",
            Self::Date => "date",
            Self::Timestamp => "timestamp",
            Self::Text => "text",
            Self::Json => "json",
            Self::Jsonb => "jsonb",
            Self::Uuid => "uuid",
            Self::Time => "time",
            Self::SimpleArray => "simpleArray",
            Self::SimpleJson => "simpleJson",
            Self::BigInt => "bigint",
            Self::Uint32 => "uint32",
            Self::Uint64 => "uint64",
            Self::Sint32 => "sint32",
            Self::Sint64 => "sint64",
            Self::Fixed32 => "fixed32",
            Self::Fixed64 => "fixed64",
            Self::Sfixed32 => "sfixed32",
            Self::Sfixed64 => "sfixed64",
            Self::Any => "any",
            Self::Custom(tag) => tag,
        }
    }

    /// Whether this tag is outside the known taxonomy.
    pub fn is_custom(&self) -> bool {
        matches!(self, Self::Custom(_))
    }

    /// Parse a tag string. Never fails: unknown tags become `Custom`.
    pub fn parse(tag: &str) -> Self {
        match tag {
            "string" => Self::String,
            "bool" | "boolean" => Self::Bool,
            "int32" | "int" => Self::Int32,
            "int64" => Self::Int64,
            "float" => Self::Float,
            "double" => Self::Double,
            "bytes" => Self::Bytes,
            "date" => Self::Date,
            "timestamp" => Self::Timestamp,
            "text" => Self::Text,
            "json" => Self::Json,
            "jsonb" => Self::Jsonb,
            "uuid" => Self::Uuid,
            "time" => Self::Time,
            "simpleArray" => Self::SimpleArray,
            "simpleJson" => Self::SimpleJson,
            "bigint" => Self::BigInt,
            "uint32" => Self::Uint32,
            "uint64" => Self::Uint64,
            "sint32" => Self::Sint32,
            "sint64" => Self::Sint64,
            "fixed32" => Self::Fixed32,
            "fixed64" => Self::Fixed64,
            "sfixed32" => Self::Sfixed32,
            "sfixed64" => Self::Sfixed64,
            "any" => Self::Any,
            other => Self::Custom(other.to_string()),
        }
    }
}

impl FromStr for FieldType {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::parse(s))
    }
}

impl From<String> for FieldType {
    fn from(tag: String) -> Self {
        Self::parse(&tag)
    }
}

impl From<FieldType> for String {
    fn from(ty: FieldType) -> Self {
        ty.as_tag().to_string()
    }
}

impl std::fmt::Display for FieldType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_tag())
    }
}
