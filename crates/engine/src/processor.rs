use crate::codec::SourceEncoding;
use crate::config::Config;
use crate::error::{EngineError, Result};
use crate::normalizer::{Normalized, Normalizer};
use crate::persistence;
use crate::report::{FileReport, Outcome};
use std::path::{Path, PathBuf};

/// One file as read from disk.
#[derive(Debug, Clone)]
pub struct FileRecord {
    pub path: PathBuf,
    pub bytes: Vec<u8>,
    /// Filled in once a normalizer has decoded the content.
    pub encoding: Option<SourceEncoding>,
}

impl FileRecord {
    /// Read the whole file; the handle is closed before returning.
    ///
    /// # Errors
    /// Returns `EngineError::FileRead` if the file cannot be read.
    pub fn read(path: PathBuf) -> Result<Self> {
        let bytes = persistence::read_all(&path).map_err(|e| EngineError::FileRead {
            path: path.clone(),
            source: e,
        })?;
        Ok(Self {
            path,
            bytes,
            encoding: None,
        })
    }
}

/// Normalize a single file in place.
///
/// # Errors
/// Returns an error if the file cannot be read or the replacement cannot be
/// written. Undecodable content is not an error; it is reported in the outcome.
pub fn process_file<N>(path: PathBuf, normalizer: &N, config: &Config) -> Result<FileReport>
where
    N: Normalizer + ?Sized,
{
    let mut record = FileRecord::read(path)?;
    log::debug!(
        "[{}] read {} ({} bytes)",
        normalizer.name(),
        record.path.display(),
        record.bytes.len()
    );

    let (outcome, line_breaks) = match normalizer.normalize(&record.bytes) {
        Normalized::AlreadyNormalized(enc) => {
            record.encoding = Some(enc);
            log::debug!("already normalized: {}", record.path.display());
            (Outcome::AlreadyNormalized, None)
        }
        Normalized::Undecodable => {
            log::warn!("cannot decode, left untouched: {}", record.path.display());
            (Outcome::Undecodable, None)
        }
        Normalized::Rewrite {
            bytes,
            from,
            line_breaks,
        } => {
            record.encoding = Some(from);
            if bytes == record.bytes {
                (Outcome::Unchanged, line_breaks)
            } else {
                if !config.dry_run {
                    write_back(&record.path, &bytes)?;
                }
                log::info!(
                    "[{}] {} -> rewritten: {}",
                    normalizer.name(),
                    from,
                    record.path.display()
                );
                (Outcome::Rewritten, line_breaks)
            }
        }
    };

    Ok(FileReport {
        path: record.path,
        outcome,
        encoding: record.encoding,
        line_breaks,
        dry_run: config.dry_run,
    })
}

/// Writes through symlinks so the link itself survives the rename.
fn write_back(path: &Path, bytes: &[u8]) -> Result<()> {
    let map_err = |e| EngineError::FileWrite {
        path: path.to_path_buf(),
        source: e,
    };
    let target = if path.is_symlink() {
        path.canonicalize().map_err(map_err)?
    } else {
        path.to_path_buf()
    };
    persistence::atomic_replace(&target, bytes).map_err(map_err)
}
