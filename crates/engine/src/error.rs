use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum EngineError {
    #[error("Failed to read file '{path}': {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write file '{path}': {source}")]
    FileWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Walk error: {0}")]
    Walk(#[from] ignore::Error),

    #[error("Invalid configuration: {0}")]
    Config(String),
}

impl EngineError {
    /// File or directory the error is about, if known.
    #[must_use]
    pub fn path(&self) -> Option<&Path> {
        match self {
            Self::FileRead { path, .. } | Self::FileWrite { path, .. } => Some(path),
            Self::Walk(err) => walk_error_path(err),
            Self::Config(_) => None,
        }
    }
}

fn walk_error_path(err: &ignore::Error) -> Option<&Path> {
    match err {
        ignore::Error::WithPath { path, .. } => Some(path),
        ignore::Error::Loop { child, .. } => Some(child),
        ignore::Error::WithDepth { err, .. } | ignore::Error::WithLineNumber { err, .. } => {
            walk_error_path(err)
        }
        ignore::Error::Partial(errs) => errs.iter().find_map(walk_error_path),
        _ => None,
    }
}

pub type Result<T> = std::result::Result<T, EngineError>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    fn denied() -> Box<ignore::Error> {
        Box::new(ignore::Error::Io(io::Error::new(
            io::ErrorKind::PermissionDenied,
            "denied",
        )))
    }

    #[test]
    fn test_walk_error_keeps_entry_path() {
        let err = EngineError::Walk(ignore::Error::WithDepth {
            depth: 2,
            err: Box::new(ignore::Error::WithPath {
                path: PathBuf::from("src/locked"),
                err: denied(),
            }),
        });
        assert_eq!(err.path(), Some(Path::new("src/locked")));
    }

    #[test]
    fn test_walk_error_without_path() {
        assert_eq!(EngineError::Walk(*denied()).path(), None);
        assert_eq!(EngineError::Config("bad".into()).path(), None);
    }

    #[test]
    fn test_file_errors_carry_path() {
        let err = EngineError::FileWrite {
            path: PathBuf::from("a.c"),
            source: io::Error::other("disk full"),
        };
        assert_eq!(err.path(), Some(Path::new("a.c")));
    }
}
