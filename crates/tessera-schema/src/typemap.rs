//! # Type Mapping Tables
//!
//! Pure functions mapping the neutral [`FieldType`] taxonomy to each target
//! representation's primitive vocabulary. The tables are allowed to diverge
//! per target: `bytes` is a wire byte string but a fixed-size binary buffer
//! in the typed declarations; `any` is the well-known wire Any container but
//! an unconstrained type in the declarations.
//!
//! ## Fallback Policy
//!
//! Unknown tags never fail. They resolve to `string` on the wire and `any`
//! in the typed declarations. This is deliberate leniency, not an error
//! path; the layout engine emits a diagnostic when it applies.

use tessera_core::FieldType;

/// Wire IDL type for the well-known Any container.
pub const WIRE_ANY: &str = "google.protobuf.Any";

/// Map a neutral type tag to its wire IDL primitive type.
///
/// Storage-layer convenience tags (`date`, `json`, `uuid`, ...) all travel
/// as strings on the wire; a separate codec interprets them. Unknown tags
/// fall back to `string`.
pub fn wire_type(ty: &FieldType) -> &'static str {
    match ty {
        FieldType::String => "string",
        FieldType::Bool => "bool",
        FieldType::Int32 => "int32",
        FieldType::Int64 => "int64",
        FieldType::Float => "float",
        FieldType::Double => "double",
        FieldType::Bytes => "bytes",
        FieldType::Date
        | FieldType::Timestamp
        | FieldType::Text
        | FieldType::Json
        | FieldType::Jsonb
        | FieldType::Uuid
        | FieldType::Time
        | FieldType::SimpleArray
        | FieldType::SimpleJson => "string",
        FieldType::BigInt => "int64",
        FieldType::Uint32 => "uint32",
        FieldType::Uint64 => "uint64",
        FieldType::Sint32 => "sint32",
        FieldType::Sint64 => "sint64",
        FieldType::Fixed32 => "fixed32",
        FieldType::Fixed64 => "fixed64",
        FieldType::Sfixed32 => "sfixed32",
        FieldType::Sfixed64 => "sfixed64",
        FieldType::Any => WIRE_ANY,
        FieldType::Custom(_) => "string",
    }
}

/// Map a neutral type tag to its typed-declaration (TypeScript) type.
///
/// All integer and float families collapse to `number` except `bigint`,
/// which has a native representation. Unknown tags fall back to `any`.
pub fn declaration_type(ty: &FieldType) -> &'static str {
    match ty {
        FieldType::String => "string",
        FieldType::Bool => "boolean",
        FieldType::Int32
        | FieldType::Int64
        | FieldType::Float
        | FieldType::Double
        | FieldType::Uint32
        | FieldType::Uint64
        | FieldType::Sint32
        | FieldType::Sint64
        | FieldType::Fixed32
        | FieldType::Fixed64
        | FieldType::Sfixed32
        | FieldType::Sfixed64 => "number",
        FieldType::Bytes => "Uint8Array",
        FieldType::Date
        | FieldType::Timestamp
        | FieldType::Text
        | FieldType::Uuid
        | FieldType::Time => "string",
        FieldType::Json | FieldType::Jsonb | FieldType::SimpleJson => "any",
        FieldType::SimpleArray => "string[]",
        FieldType::BigInt => "bigint",
        FieldType::Any => "any",
        FieldType::Custom(_) => "any",
    }
}
