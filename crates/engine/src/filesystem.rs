use crate::config::WalkOptions;
use crate::error::{EngineError, Result};
use ignore::WalkBuilder;
use std::path::{Path, PathBuf};

/// Sequential recursive walk yielding target files under `options.root`.
///
/// Hidden files and ignore files are not special-cased; only the configured
/// exclusion substrings prune directories. Per-entry errors are yielded
/// in place so the caller can report them and keep going.
///
/// Symlinks to files are always yielded. Symlinked directories are only
/// descended into with `follow_links`.
///
/// # Errors
/// Returns an error if the root fails validation.
pub fn walk(options: &WalkOptions) -> Result<impl Iterator<Item = Result<PathBuf>>> {
    validate_root(&options.root)?;

    let mut builder = WalkBuilder::new(&options.root);
    builder
        .standard_filters(false)
        .follow_links(options.follow_links);

    let prune = options.clone();
    builder.filter_entry(move |entry| {
        if entry.file_type().is_some_and(|ft| ft.is_dir()) {
            let rel = relative_dir(&prune.root, entry.path());
            if prune.is_excluded(&rel) {
                log::debug!("skipping excluded directory {}", entry.path().display());
                return false;
            }
        }
        true
    });

    let select = options.clone();
    Ok(builder.build().filter_map(move |entry| match entry {
        Ok(entry) => {
            let is_file = entry.file_type().is_some_and(|ft| {
                ft.is_file() || (ft.is_symlink() && entry.path().is_file())
            });
            if !is_file {
                return None;
            }
            let path = entry.into_path();
            let wanted = path
                .extension()
                .and_then(|s| s.to_str())
                .is_some_and(|ext| select.matches_extension(ext));
            wanted.then_some(Ok(path))
        }
        Err(e) => {
            log::warn!("walk error: {e}");
            Some(Err(EngineError::Walk(e)))
        }
    }))
}

/// Check that `root` is usable as a walk root.
///
/// # Errors
/// Returns `EngineError::Config` if the path contains NUL bytes, cannot be
/// resolved, or is not a directory.
pub fn validate_root(root: &Path) -> Result<PathBuf> {
    if root.to_string_lossy().contains('\0') {
        return Err(EngineError::Config("Path contains null bytes".into()));
    }

    let canonical = root.canonicalize().map_err(|e| {
        EngineError::Config(format!(
            "Failed to resolve root '{}': {e}",
            root.display()
        ))
    })?;

    if !canonical.is_dir() {
        return Err(EngineError::Config(format!(
            "Root is not a directory: {}",
            root.display()
        )));
    }

    Ok(canonical)
}

/// Root-relative path of a directory with `/` separators; empty for the root.
fn relative_dir(root: &Path, dir: &Path) -> String {
    let rel = dir.strip_prefix(root).unwrap_or(dir);
    let s = rel.to_string_lossy();
    if std::path::MAIN_SEPARATOR == '/' {
        s.into_owned()
    } else {
        s.replace(std::path::MAIN_SEPARATOR, "/")
    }
}
