//! # Contract Manifests
//!
//! Loads contract descriptors from disk. A manifest is a YAML or JSON file
//! named `<anything>.contract.yaml` / `.contract.yml` / `.contract.json`
//! whose body deserializes to a [`Contract`]. Unknown keys are rejected so
//! a typo in a manifest fails loudly instead of silently dropping a
//! modifier.
//!
//! Discovery order is lexicographic by filename. The registry packer
//! assigns slots in enumeration order, so this ordering is part of the
//! observable output and must stay stable.

use std::path::{Path, PathBuf};

use thiserror::Error;

use tessera_core::{CompileError, Contract};

/// Recognized manifest filename suffixes.
pub const MANIFEST_SUFFIXES: [&str; 3] = [".contract.yaml", ".contract.yml", ".contract.json"];

/// Error loading contract manifests.
#[derive(Error, Debug)]
pub enum ManifestError {
    /// The manifest directory could not be read.
    #[error("cannot read contract directory {path}: {source}")]
    ReadDir {
        /// The directory that failed to enumerate.
        path: PathBuf,
        /// Underlying IO failure.
        #[source]
        source: std::io::Error,
    },

    /// A manifest file could not be read.
    #[error("cannot read manifest {path}: {source}")]
    ReadFile {
        /// The manifest that failed to read.
        path: PathBuf,
        /// Underlying IO failure.
        #[source]
        source: std::io::Error,
    },

    /// A manifest file is not a valid contract document.
    #[error("manifest {path} is not a valid contract: {reason}")]
    Parse {
        /// The offending manifest.
        path: PathBuf,
        /// Parser diagnostic.
        reason: String,
    },

    /// A deserialized contract violates a contract invariant.
    #[error(transparent)]
    Invalid(#[from] CompileError),
}

/// Load every contract manifest under `dir`, in lexicographic filename
/// order, validating each contract's invariants.
pub fn load_contracts(dir: &Path) -> Result<Vec<Contract>, ManifestError> {
    let entries = std::fs::read_dir(dir).map_err(|source| ManifestError::ReadDir {
        path: dir.to_path_buf(),
        source,
    })?;

    let mut paths: Vec<PathBuf> = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|source| ManifestError::ReadDir {
            path: dir.to_path_buf(),
            source,
        })?;
        let path = entry.path();
        if path.is_file() && is_manifest(&path) {
            paths.push(path);
        }
    }
    paths.sort();

    let mut contracts = Vec::with_capacity(paths.len());
    for path in paths {
        contracts.push(load_manifest(&path)?);
    }
    tracing::debug!(count = contracts.len(), dir = %dir.display(), "contracts loaded");
    Ok(contracts)
}

fn is_manifest(path: &Path) -> bool {
    path.file_name()
        .and_then(|n| n.to_str())
        .is_some_and(|name| MANIFEST_SUFFIXES.iter().any(|s| name.ends_with(s)))
}

fn load_manifest(path: &Path) -> Result<Contract, ManifestError> {
    let content = std::fs::read_to_string(path).map_err(|source| ManifestError::ReadFile {
        path: path.to_path_buf(),
        source,
    })?;

    let is_json = path
        .extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| e.eq_ignore_ascii_case("json"));

    let contract: Contract = if is_json {
        serde_json::from_str(&content).map_err(|e| ManifestError::Parse {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?
    } else {
        serde_yaml::from_str(&content).map_err(|e| ManifestError::Parse {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?
    };

    contract.validate()?;
    Ok(contract)
}
