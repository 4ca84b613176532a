//! # Compilation Pipeline
//!
//! The `compile()` entry point and the pack stage it gates. Control flow:
//!
//! 1. Per contract: derive the layout once, render the wire IDL, the typed
//!    declarations, and the schema snapshot from it, and write all three.
//! 2. After every contract has been attempted: read the snapshots back from
//!    their cache files (the packer consumes the durable form, not the
//!    in-memory one), pack the registry in contract order, and write the
//!    bootstrap artifact last.
//!
//! The registry artifact is always regenerated in full — slot and typeIndex
//! numbering is computed over the complete contract set, so there is no
//! incremental patching.

use std::collections::HashSet;
use std::fs;
use std::path::PathBuf;

use tessera_core::{CompileError, Contract, ContentDigest};
use tessera_emit::{render_dts, render_proto};
use tessera_pack::{pack, render_bootstrap};
use tessera_schema::{MessageLayout, SchemaSnapshot};

use crate::artifact::write_artifact;

/// Well-known file name of the packed registry artifact.
pub const REGISTRY_FILE: &str = "contracts.min.js";

/// Output configuration for one compilation run.
#[derive(Debug, Clone)]
pub struct CompileOptions {
    /// Directory receiving the per-contract artifacts.
    pub out_dir: PathBuf,
    /// Override for the packed registry artifact path.
    pub registry_path: Option<PathBuf>,
}

impl CompileOptions {
    /// Options writing everything under `out_dir`.
    pub fn new(out_dir: impl Into<PathBuf>) -> Self {
        Self {
            out_dir: out_dir.into(),
            registry_path: None,
        }
    }

    /// Write the packed registry artifact to a custom path.
    pub fn with_registry_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.registry_path = Some(path.into());
        self
    }

    /// Path of a contract's wire IDL artifact.
    pub fn proto_path(&self, contract: &str) -> PathBuf {
        self.out_dir.join(format!("{contract}.proto"))
    }

    /// Path of a contract's typed-declaration artifact.
    pub fn dts_path(&self, contract: &str) -> PathBuf {
        self.out_dir.join(format!("{contract}.d.ts"))
    }

    /// Path of a contract's schema snapshot cache file.
    pub fn snapshot_path(&self, contract: &str) -> PathBuf {
        self.out_dir.join(format!("{contract}.json"))
    }

    /// Path of the packed registry artifact.
    pub fn registry_path(&self) -> PathBuf {
        self.registry_path
            .clone()
            .unwrap_or_else(|| self.out_dir.join(REGISTRY_FILE))
    }
}

/// Outcome report of a successful compilation run.
#[derive(Debug, Clone)]
pub struct CompileSummary {
    /// Number of contracts compiled.
    pub contracts: usize,
    /// Artifacts whose bytes changed on disk (registry included).
    pub artifacts_written: usize,
    /// Artifacts skipped because on-disk content already matched.
    pub artifacts_unchanged: usize,
    /// Where the packed registry artifact lives.
    pub registry_path: PathBuf,
    /// Content digest of the packed registry artifact.
    pub registry_digest: ContentDigest,
}

/// Compile the full contract set and pack the runtime registry.
///
/// Every contract is attempted even when earlier ones fail; packing only
/// runs when all of them succeeded.
///
/// # Errors
///
/// - `CompileError::DuplicateContract` if the input set repeats a name.
/// - `CompileError::PackAborted` if any contract failed compilation; the
///   individual failures are logged as they happen.
/// - Pack-stage errors (`MissingSnapshot`, `SnapshotParse`, write errors)
///   pass through unchanged.
pub fn compile(
    contracts: &[Contract],
    options: &CompileOptions,
) -> Result<CompileSummary, CompileError> {
    let mut names = HashSet::new();
    for contract in contracts {
        if !names.insert(contract.name.as_str()) {
            return Err(CompileError::DuplicateContract {
                name: contract.name.clone(),
            });
        }
    }

    let mut written = 0usize;
    let mut unchanged = 0usize;
    let mut failed: Vec<String> = Vec::new();

    for contract in contracts {
        match emit_contract(contract, options) {
            Ok((w, u)) => {
                written += w;
                unchanged += u;
            }
            Err(error) => {
                tracing::error!(
                    contract = %contract.name,
                    %error,
                    "contract compilation failed"
                );
                failed.push(contract.name.clone());
            }
        }
    }

    if !failed.is_empty() {
        return Err(CompileError::PackAborted { failed });
    }

    let names: Vec<&str> = contracts.iter().map(|c| c.name.as_str()).collect();
    let (registry_path, outcome) = pack_registry(&names, options)?;
    if outcome.is_written() {
        written += 1;
    } else {
        unchanged += 1;
    }

    Ok(CompileSummary {
        contracts: contracts.len(),
        artifacts_written: written,
        artifacts_unchanged: unchanged,
        registry_path,
        registry_digest: outcome.digest(),
    })
}

/// Pack the registry from cached snapshots and write the bootstrap artifact.
///
/// Snapshots are loaded from the per-contract cache files in the given
/// order, which fixes slot assignment. A missing or unparseable snapshot is
/// fatal to the whole step — omitting one contract would renumber all the
/// others.
pub fn pack_registry<S: AsRef<str>>(
    names: &[S],
    options: &CompileOptions,
) -> Result<(PathBuf, crate::artifact::WriteOutcome), CompileError> {
    let mut snapshots = Vec::with_capacity(names.len());
    for name in names {
        snapshots.push(load_snapshot(name.as_ref(), options)?);
    }

    let registry = pack(&snapshots)?;
    let bootstrap = render_bootstrap(&registry)?;
    let path = options.registry_path();
    let outcome = write_artifact(&path, bootstrap.as_bytes())?;
    tracing::info!(
        contracts = snapshots.len(),
        registry = %path.display(),
        "registry packed"
    );
    Ok((path, outcome))
}

fn load_snapshot(name: &str, options: &CompileOptions) -> Result<SchemaSnapshot, CompileError> {
    let path = options.snapshot_path(name);
    let json = match fs::read_to_string(&path) {
        Ok(json) => json,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            return Err(CompileError::MissingSnapshot {
                contract: name.to_string(),
                path,
            });
        }
        Err(e) => return Err(CompileError::Io(e)),
    };
    let snapshot =
        SchemaSnapshot::from_json(&json).map_err(|e| CompileError::SnapshotParse {
            contract: name.to_string(),
            reason: e.to_string(),
        })?;
    if snapshot.contract != name {
        return Err(CompileError::SnapshotParse {
            contract: name.to_string(),
            reason: format!("cache file declares contract '{}'", snapshot.contract),
        });
    }
    Ok(snapshot)
}

/// Emit the three per-contract artifacts. Returns (written, unchanged).
fn emit_contract(contract: &Contract, options: &CompileOptions) -> Result<(usize, usize), CompileError> {
    contract.validate()?;
    let layout = MessageLayout::build(contract);

    let proto = render_proto(&layout);
    let dts = render_dts(&layout);
    let snapshot_json = SchemaSnapshot::from_layout(&layout).to_json()?;

    let artifacts: [(PathBuf, &[u8]); 3] = [
        (options.proto_path(&contract.name), proto.as_bytes()),
        (options.dts_path(&contract.name), dts.as_bytes()),
        (options.snapshot_path(&contract.name), snapshot_json.as_bytes()),
    ];

    let mut written = 0usize;
    let mut unchanged = 0usize;
    for (path, content) in artifacts {
        if write_artifact(&path, content)?.is_written() {
            written += 1;
        } else {
            unchanged += 1;
        }
    }
    tracing::debug!(contract = %contract.name, written, unchanged, "contract artifacts emitted");
    Ok((written, unchanged))
}
