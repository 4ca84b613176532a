//! # tessera-emit — Pure Artifact Renderers
//!
//! Renders a derived [`MessageLayout`](tessera_schema::MessageLayout) into
//! artifact text. Two targets:
//!
//! - [`proto`] — proto3 wire IDL source.
//! - [`dts`] — TypeScript declaration source.
//!
//! ## Crate Policy
//!
//! - Emitters are pure functions `&MessageLayout -> String`. They never
//!   consult the original contract, never assign tags, and never perform IO.
//!   Everything they render was decided by the layout engine, which is what
//!   keeps the artifacts congruent with each other and with the snapshot.
//! - Output is deterministic text with `\n` line endings and a trailing
//!   newline; re-rendering an unchanged layout is byte-identical.

pub mod dts;
pub mod proto;

pub use dts::render_dts;
pub use proto::render_proto;
