//! # Artifact Writer
//!
//! Atomic, idempotent artifact writes. Content is written to a sibling
//! temp file, flushed to disk, and renamed over the destination, so every
//! exit path leaves either the old artifact or the complete new one —
//! never a partial write. When the regenerated bytes match what is already
//! on disk the write is skipped entirely, which keeps re-compilation of
//! unchanged contracts from churning mtimes.

use std::fs::{self, File};
use std::io::Write as _;
use std::path::{Path, PathBuf};

use tessera_core::{CompileError, ContentDigest};

/// Result of an artifact write.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteOutcome {
    /// The artifact was (re)written with the given content digest.
    Written(ContentDigest),
    /// On-disk content already matched; nothing was written.
    Unchanged(ContentDigest),
}

impl WriteOutcome {
    /// The digest of the artifact content.
    pub fn digest(&self) -> ContentDigest {
        match self {
            Self::Written(d) | Self::Unchanged(d) => *d,
        }
    }

    /// Whether bytes actually hit the disk.
    pub fn is_written(&self) -> bool {
        matches!(self, Self::Written(_))
    }
}

/// Write an artifact atomically, skipping the write if content is unchanged.
///
/// Parent directories are created as needed.
///
/// # Errors
///
/// Returns `CompileError::ArtifactWrite` carrying the destination path on
/// any IO failure. The destination is left untouched in that case.
pub fn write_artifact(path: &Path, content: &[u8]) -> Result<WriteOutcome, CompileError> {
    let digest = ContentDigest::of(content);

    if let Ok(existing) = fs::read(path) {
        if existing == content {
            tracing::debug!(path = %path.display(), %digest, "artifact unchanged");
            return Ok(WriteOutcome::Unchanged(digest));
        }
    }

    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent).map_err(|source| CompileError::ArtifactWrite {
                path: path.to_path_buf(),
                source,
            })?;
        }
    }

    let tmp = temp_path(path);
    let write = (|| -> std::io::Result<()> {
        let mut file = File::create(&tmp)?;
        file.write_all(content)?;
        file.sync_all()?;
        fs::rename(&tmp, path)
    })();

    if let Err(source) = write {
        let _ = fs::remove_file(&tmp);
        return Err(CompileError::ArtifactWrite {
            path: path.to_path_buf(),
            source,
        });
    }

    tracing::info!(path = %path.display(), %digest, "artifact written");
    Ok(WriteOutcome::Written(digest))
}

/// Sibling temp path, so the final rename stays on one filesystem.
fn temp_path(path: &Path) -> PathBuf {
    let mut name = std::ffi::OsString::from(".");
    if let Some(file_name) = path.file_name() {
        name.push(file_name);
    }
    name.push(".tmp");
    path.with_file_name(name)
}
