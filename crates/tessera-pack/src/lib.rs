//! # tessera-pack — Registry Packing & Runtime Bootstrap
//!
//! The final two stages of the pipeline:
//!
//! - [`registry`] — merges every contract's schema snapshot into one
//!   indexed structure: a stable integer slot per contract and a stable
//!   integer sub-slot per nested message type, plus the full snapshot
//!   payload. The result is consumable by a non-reflective runtime without
//!   any parsing at load time.
//! - [`bootstrap`] — wraps the packed payload in a minimal self-registering
//!   loader snippet, minified, with a catch-and-log guard around the
//!   registration hand-off.
//!
//! ## Crate Policy
//!
//! - Slot and typeIndex values are process-local: they are only stable
//!   across runs when the input contract set and its enumeration order are
//!   identical. Callers must not persist these integers without the exact
//!   snapshots they were derived from.
//! - Packing never silently omits a contract; the compiler stage feeding
//!   this crate treats a missing snapshot as fatal to the whole step.

pub mod bootstrap;
pub mod registry;

pub use bootstrap::render_bootstrap;
pub use registry::{pack, PackedRegistry, RegistryEntry};
