//! # Pack Subcommand
//!
//! Re-packs the runtime registry from existing snapshot caches without
//! recompiling any contract. Useful when only the registry artifact was
//! lost or when slot order must be re-derived for an explicit contract
//! sequence. A missing snapshot fails the whole step.

use std::path::PathBuf;

use clap::Args;

use tessera_compiler::CompileOptions;

/// Arguments for the pack subcommand.
#[derive(Args, Debug)]
pub struct PackArgs {
    /// Directory holding the per-contract snapshot caches.
    #[arg(long, value_name = "DIR")]
    pub out: PathBuf,

    /// Override the packed registry artifact path.
    #[arg(long, value_name = "FILE")]
    pub registry: Option<PathBuf>,

    /// Contract names in slot-assignment order.
    #[arg(value_name = "CONTRACT", required = true)]
    pub names: Vec<String>,
}

/// Run the pack subcommand.
pub fn run(args: &PackArgs) -> anyhow::Result<()> {
    let mut options = CompileOptions::new(&args.out);
    if let Some(path) = &args.registry {
        options = options.with_registry_path(path);
    }

    let (path, outcome) = tessera_compiler::pack_registry(&args.names, &options)?;
    tracing::info!(
        contracts = args.names.len(),
        registry = %path.display(),
        digest = %outcome.digest(),
        rewritten = outcome.is_written(),
        "registry packed"
    );
    Ok(())
}
