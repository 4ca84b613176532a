//! # tessera-schema — Layout Derivation & Snapshot Model
//!
//! Turns a [`Contract`](tessera_core::Contract) into the typed intermediate
//! representation every emitter renders from.
//!
//! ## Modules
//!
//! - [`typemap`] — pure mapping tables from neutral type tags to the wire
//!   IDL and typed-declaration primitive vocabularies, with documented
//!   fallbacks for unknown tags.
//! - [`layout`] — the message layout engine: primary entity message,
//!   optional list wrapper, eight synthesized CRUD messages, and the CRUD
//!   service, with stable wire tag assignment.
//! - [`snapshot`] — the schema snapshot: the single authoritative
//!   serialized form of a layout, cached per contract and consumed by the
//!   registry packer.
//!
//! ## Consistency Guarantee
//!
//! The layout is derived exactly once per contract; the IDL text, the typed
//! declarations, and the snapshot are all pure renderings of that one
//! structure. Two artifacts for the same contract can therefore only differ
//! in surface syntax, never in field identity, ordering, or tags.

pub mod layout;
pub mod snapshot;
pub mod typemap;

pub use layout::{FieldRef, Message, MessageField, MessageLayout, Rpc, Service};
pub use snapshot::{FieldSchema, MessageSchema, RpcSchema, SchemaSnapshot, ServiceSchema};
