//! # tessera-core — Foundational Types for the Tessera Schema Compiler
//!
//! This crate is the bedrock of the Tessera workspace. It defines the
//! source-of-truth contract description that drives every generated artifact,
//! the neutral field-type taxonomy, and the structured error hierarchy shared
//! by the whole pipeline. Every other crate in the workspace depends on
//! `tessera-core`; it depends on nothing internal.
//!
//! ## Key Design Principles
//!
//! 1. **Contracts are immutable input.** A [`Contract`] is constructed once by
//!    the upstream collector, validated up front, and never mutated during
//!    compilation. There is no process-wide contract registry; the full set is
//!    passed explicitly to the compiler entry point.
//!
//! 2. **Single `FieldType` taxonomy.** One enum covers every neutral type tag.
//!    Unrecognized tags are captured losslessly as `FieldType::Custom` rather
//!    than rejected — the mapping tables downstream resolve them to documented
//!    fallback types, so an unknown tag can never fail a build.
//!
//! 3. **Deterministic artifacts, digest-checked.** Compilation must be
//!    byte-for-byte reproducible, so nothing in this crate produces timestamps
//!    or random identifiers. [`ContentDigest`] gives artifact writers a cheap
//!    way to detect that regenerated output is unchanged.
//!
//! ## Crate Policy
//!
//! - No dependencies on other `tessera-*` crates (this is the leaf of the DAG).
//! - No `unsafe` code.
//! - No `panic!()` or `.unwrap()` outside tests.
//! - All public types derive `Debug` and `Clone`, and the contract surface
//!   implements `Serialize`/`Deserialize` with camelCase field names so that
//!   manifests and snapshots share one spelling of every key.

pub mod contract;
pub mod digest;
pub mod error;
pub mod field_type;

pub use contract::{Contract, Field};
pub use digest::ContentDigest;
pub use error::CompileError;
pub use field_type::FieldType;
