//! # Error Types — Structured Compiler Errors
//!
//! Defines the error hierarchy for the Tessera pipeline. All errors use
//! `thiserror` for derive-based `Display` and `Error` implementations.
//!
//! ## Design
//!
//! - Per-contract failures carry the contract name so the compiler can
//!   isolate them without losing context.
//! - Artifact write failures carry the path; a failed write aborts the
//!   remaining artifacts of that contract only.
//! - Registry packing requires the complete contract set, so a missing or
//!   unparseable snapshot is fatal to the whole packing step — the packer
//!   never silently omits a contract, since slot numbers for every other
//!   contract would shift.

use std::path::PathBuf;

use thiserror::Error;

/// Top-level error type for the Tessera schema compiler.
#[derive(Error, Debug)]
pub enum CompileError {
    /// A contract was constructed without a name.
    #[error("contract name must not be empty")]
    EmptyContractName,

    /// A contract declares the same property key twice.
    #[error("contract '{contract}' declares field '{field}' more than once")]
    DuplicateField {
        /// Name of the offending contract.
        contract: String,
        /// The repeated property key.
        field: String,
    },

    /// A contract declares a field whose name is reserved for synthesis.
    #[error("contract '{contract}' declares reserved field name '{field}'")]
    ReservedFieldName {
        /// Name of the offending contract.
        contract: String,
        /// The reserved property key.
        field: String,
    },

    /// Two contracts in the input set share a name.
    #[error("duplicate contract name '{name}' in input set")]
    DuplicateContract {
        /// The colliding contract name.
        name: String,
    },

    /// An artifact could not be written to disk.
    #[error("failed to write artifact {path}: {source}")]
    ArtifactWrite {
        /// Destination path of the artifact.
        path: PathBuf,
        /// Underlying IO failure.
        #[source]
        source: std::io::Error,
    },

    /// A contract expected at pack time has no cached snapshot.
    #[error("no schema snapshot for contract '{contract}' at {path}")]
    MissingSnapshot {
        /// The contract whose snapshot is missing.
        contract: String,
        /// Where the snapshot was expected.
        path: PathBuf,
    },

    /// A cached snapshot exists but is not a valid schema document.
    #[error("snapshot for contract '{contract}' could not be parsed: {reason}")]
    SnapshotParse {
        /// The contract whose snapshot is corrupt.
        contract: String,
        /// Parser diagnostic.
        reason: String,
    },

    /// Registry packing was skipped because some contracts failed to compile.
    #[error("registry packing aborted; failed contracts: {}", failed.join(", "))]
    PackAborted {
        /// Names of the contracts that failed compilation.
        failed: Vec<String>,
    },

    /// JSON serialization error.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// IO error.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_duplicate_field_message() {
        let err = CompileError::DuplicateField {
            contract: "Task".to_string(),
            field: "label".to_string(),
        };
        let msg = err.to_string();
        assert!(msg.contains("Task"));
        assert!(msg.contains("label"));
    }

    #[test]
    fn test_pack_aborted_lists_contracts() {
        let err = CompileError::PackAborted {
            failed: vec!["A".to_string(), "B".to_string()],
        };
        assert!(err.to_string().contains("A, B"));
    }

    #[test]
    fn test_io_error_converts() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "gone");
        let err: CompileError = io.into();
        assert!(matches!(err, CompileError::Io(_)));
    }
}
