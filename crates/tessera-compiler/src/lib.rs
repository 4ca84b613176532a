//! # tessera-compiler — Pipeline Orchestration
//!
//! Drives the whole compilation: for every contract, derive the layout and
//! write the three per-contract artifacts (wire IDL, typed declarations,
//! schema snapshot); then read every snapshot back from its cache file,
//! pack the registry, and write the bootstrap artifact last.
//!
//! ## Failure Policy
//!
//! - A failure in one contract never blocks the others; every contract is
//!   attempted.
//! - The packing stage requires the complete set. If any contract failed,
//!   packing is skipped and [`compile`] returns
//!   [`CompileError::PackAborted`](tessera_core::CompileError::PackAborted)
//!   naming the failures — slot assignment over a partial set would
//!   silently renumber every other contract.
//! - Artifact writes are atomic (sibling temp file, flushed, renamed), so a
//!   concurrent reader never observes a partially written artifact and a
//!   failed compile never corrupts artifacts written earlier.

pub mod artifact;
pub mod pipeline;

pub use artifact::{write_artifact, WriteOutcome};
pub use pipeline::{compile, pack_registry, CompileOptions, CompileSummary, REGISTRY_FILE};
