//! # Runtime Bootstrap Emitter
//!
//! Wraps the packed registry payload in a self-registering loader for a
//! non-reflective JS host. On load the snippet hands the payload to the
//! well-known `tessera.addContracts` entry point; any failure during the
//! hand-off is caught and reported on the host console, never propagated
//! into the host's own control flow.
//!
//! The snippet is emitted minified by construction: one line, compact JSON,
//! no insignificant whitespace. There is no post-hoc minification pass to
//! preserve the semantics of.

use crate::registry::PackedRegistry;

/// Opening half of the bootstrap envelope, up to the payload.
pub const BOOTSTRAP_PREFIX: &str = "(function(global){try{global.tessera.addContracts(";

/// Closing half of the bootstrap envelope, after the payload.
pub const BOOTSTRAP_SUFFIX: &str =
    ");}catch(e){console.error(\"Error loading contracts:\",e);}})(typeof window!==\"undefined\"?window:global);";

/// Render the minified bootstrap snippet for a packed registry.
pub fn render_bootstrap(registry: &PackedRegistry) -> Result<String, serde_json::Error> {
    let payload = registry.to_json()?;
    Ok(format!("{BOOTSTRAP_PREFIX}{payload}{BOOTSTRAP_SUFFIX}"))
}
