//! # tessera CLI Entry Point
//!
//! Assembles subcommands and dispatches to handler modules.

use clap::Parser;

/// Tessera — contract-driven schema compiler.
///
/// Compiles neutral contract descriptions into coupled artifacts: proto3
/// wire IDL, TypeScript declarations, schema snapshots, and a packed
/// runtime registry.
#[derive(Parser, Debug)]
#[command(name = "tessera", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(clap::Subcommand, Debug)]
enum Commands {
    /// Compile contract manifests into the full artifact family.
    Compile(tessera_cli::compile::CompileArgs),
    /// Re-pack the runtime registry from cached snapshots.
    Pack(tessera_cli::pack::PackArgs),
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Compile(args) => tessera_cli::compile::run(&args),
        Commands::Pack(args) => tessera_cli::pack::run(&args),
    }
}
