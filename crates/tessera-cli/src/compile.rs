//! # Compile Subcommand
//!
//! Full pipeline: load manifests, emit per-contract artifacts, pack the
//! runtime registry.

use std::path::PathBuf;

use clap::Args;

use tessera_compiler::CompileOptions;

use crate::manifest;

/// Arguments for the compile subcommand.
#[derive(Args, Debug)]
pub struct CompileArgs {
    /// Directory containing `*.contract.yaml` / `*.contract.json` manifests.
    #[arg(long, value_name = "DIR")]
    pub contracts: PathBuf,

    /// Output directory for generated artifacts.
    #[arg(long, value_name = "DIR")]
    pub out: PathBuf,

    /// Override the packed registry artifact path.
    #[arg(long, value_name = "FILE")]
    pub registry: Option<PathBuf>,
}

/// Run the compile subcommand.
pub fn run(args: &CompileArgs) -> anyhow::Result<()> {
    let contracts = manifest::load_contracts(&args.contracts)?;
    if contracts.is_empty() {
        tracing::warn!(dir = %args.contracts.display(), "no contract manifests found");
    }

    let mut options = CompileOptions::new(&args.out);
    if let Some(path) = &args.registry {
        options = options.with_registry_path(path);
    }

    let summary = tessera_compiler::compile(&contracts, &options)?;
    tracing::info!(
        contracts = summary.contracts,
        written = summary.artifacts_written,
        unchanged = summary.artifacts_unchanged,
        registry = %summary.registry_path.display(),
        digest = %summary.registry_digest,
        "compilation complete"
    );
    Ok(())
}
