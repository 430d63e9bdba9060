// crates/engine/src/lib.rs
use std::path::{Path, PathBuf};

pub mod codec;
pub mod config;
pub mod error;
pub mod filesystem;
pub mod normalizer;
pub mod options;
pub mod persistence;
pub mod processor;
pub mod report;

use crate::config::Config;
use crate::error::{EngineError, Result};
use crate::normalizer::Normalizer;
use crate::report::{FileReport, RunResult};

/// Per-file notification emitted by [`run`], in walk order.
#[derive(Debug)]
pub enum Event<'a> {
    Processed(&'a FileReport),
    Failed(&'a Path, &'a EngineError),
}

/// Walk `config.walk.root` and apply `normalizer` to every target file.
///
/// The tree is listed first, then files are handled strictly one after
/// another; each is read, transformed and written back before the next is
/// opened.
///
/// # Errors
///
/// Returns an error if the root is invalid, or, in strict mode, on the first
/// per-file failure. Otherwise failures are collected in `RunResult::errors`.
pub fn run<N, F>(config: &Config, normalizer: &N, mut on_event: F) -> Result<RunResult>
where
    N: Normalizer + ?Sized,
    F: FnMut(Event<'_>),
{
    let mut result = RunResult::default();

    // Replacing a file adds a fresh directory entry; finish listing before
    // writing so a rewritten file is never yielded twice.
    let targets: Vec<_> = filesystem::walk(&config.walk)?.collect();
    log::debug!("[{}] {} candidate entries", normalizer.name(), targets.len());

    for entry in targets {
        let path = match entry {
            Ok(path) => path,
            Err(e) => {
                if config.strict {
                    return Err(e);
                }
                // 走査エラーはファイル数に含めない
                let path = e.path().map_or_else(|| PathBuf::from("<walk>"), Path::to_path_buf);
                on_event(Event::Failed(&path, &e));
                result.errors.push((path, e));
                continue;
            }
        };

        match processor::process_file(path.clone(), normalizer, config) {
            Ok(report) => {
                result.summary.record(&report);
                on_event(Event::Processed(&report));
            }
            Err(e) => {
                if config.strict {
                    return Err(e);
                }
                result.summary.record_failure();
                on_event(Event::Failed(&path, &e));
                result.errors.push((path, e));
            }
        }
    }

    log::debug!("[{}] run finished: {:?}", normalizer.name(), result.summary);
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::WalkOptions;
    use crate::normalizer::{EncodingNormalizer, NewlineNormalizer};
    use crate::report::Outcome;
    use std::fs;
    use tempfile::TempDir;

    fn config_for(root: &Path, walk: WalkOptions) -> Config {
        Config {
            walk: WalkOptions {
                root: root.to_path_buf(),
                ..walk
            },
            ..Config::default()
        }
    }

    #[test]
    fn test_run_counts_and_events() {
        let temp = TempDir::new().unwrap();
        let root = temp.path();
        fs::write(root.join("a.cpp"), b"int a;\n").unwrap();
        fs::write(root.join("b.h"), b"\xEF\xBB\xBF#pragma once\n").unwrap();
        fs::write(root.join("c.c"), [0xFF, 0xFE]).unwrap();
        fs::write(root.join("notes.txt"), b"plain").unwrap();

        let config = config_for(root, WalkOptions::encoding_preset());
        let mut seen = Vec::new();
        let result = run(&config, &EncodingNormalizer, |event| {
            if let Event::Processed(report) = event {
                seen.push(report.outcome);
            }
        })
        .unwrap();

        assert_eq!(result.summary.scanned, 3);
        assert_eq!(result.summary.rewritten, 1);
        assert_eq!(result.summary.unchanged, 1);
        assert_eq!(result.summary.undecodable, 1);
        assert!(result.errors.is_empty());
        seen.sort_by_key(|o| format!("{o:?}"));
        assert_eq!(
            seen,
            vec![Outcome::AlreadyNormalized, Outcome::Rewritten, Outcome::Undecodable]
        );
        assert_eq!(fs::read(root.join("notes.txt")).unwrap(), b"plain");
    }

    #[test]
    fn test_run_twice_is_stable() {
        let temp = TempDir::new().unwrap();
        let root = temp.path();
        fs::write(root.join("m.mm"), b"a\rb\r\nc\n").unwrap();

        let config = config_for(root, WalkOptions::newline_preset());
        let normalizer = NewlineNormalizer::default();

        let first = run(&config, &normalizer, |_| {}).unwrap();
        let after_first = fs::read(root.join("m.mm")).unwrap();
        let second = run(&config, &normalizer, |_| {}).unwrap();

        assert_eq!(first.summary.rewritten, 1);
        assert_eq!(second.summary.rewritten, 0);
        assert_eq!(fs::read(root.join("m.mm")).unwrap(), after_first);
        assert_eq!(after_first, b"\xEF\xBB\xBFa\r\nb\r\nc\r\n");
    }

    #[test]
    fn test_run_rejects_missing_root() {
        let temp = TempDir::new().unwrap();
        let config = config_for(&temp.path().join("nope"), WalkOptions::encoding_preset());
        assert!(matches!(
            run(&config, &EncodingNormalizer, |_| {}),
            Err(EngineError::Config(_))
        ));
    }

    #[cfg(unix)]
    #[test]
    fn test_unreadable_file_is_collected_not_fatal() {
        use std::os::unix::fs::PermissionsExt;

        let temp = TempDir::new().unwrap();
        let root = temp.path();
        let locked = root.join("locked.c");
        fs::write(&locked, b"x").unwrap();
        fs::set_permissions(&locked, fs::Permissions::from_mode(0o000)).unwrap();
        fs::write(root.join("open.c"), b"y").unwrap();

        // root ignores permission bits
        if fs::read(&locked).is_ok() {
            return;
        }

        let config = config_for(root, WalkOptions::encoding_preset());
        let result = run(&config, &EncodingNormalizer, |_| {}).unwrap();
        assert_eq!(result.summary.failed, 1);
        assert_eq!(result.summary.rewritten, 1);
        assert_eq!(result.errors.len(), 1);

        let strict = Config {
            strict: true,
            ..config
        };
        fs::write(root.join("open.c"), b"y").unwrap();
        assert!(run(&strict, &EncodingNormalizer, |_| {}).is_err());
    }

    #[cfg(unix)]
    #[test]
    fn test_walk_error_is_reported_under_its_directory() {
        use std::os::unix::fs::PermissionsExt;

        let temp = TempDir::new().unwrap();
        let root = temp.path();
        let locked = root.join("locked");
        fs::create_dir(&locked).unwrap();
        fs::write(locked.join("a.c"), b"x").unwrap();
        fs::set_permissions(&locked, fs::Permissions::from_mode(0o000)).unwrap();

        let readable = fs::read_dir(&locked).is_ok();
        let result = (!readable).then(|| {
            run(&config_for(root, WalkOptions::encoding_preset()), &EncodingNormalizer, |_| {})
        });
        fs::set_permissions(&locked, fs::Permissions::from_mode(0o755)).unwrap();

        // root ignores permission bits
        let Some(result) = result else {
            return;
        };
        let result = result.unwrap();
        assert_eq!(result.summary.failed, 0);
        assert_eq!(result.errors.len(), 1);
        assert_eq!(result.errors[0].0, locked);
    }

    #[cfg(unix)]
    #[test]
    fn test_symlinked_source_is_rewritten_through_link() {
        use std::os::unix::fs::symlink;

        let outside = TempDir::new().unwrap();
        let real = outside.path().join("real.cpp");
        fs::write(&real, b"int x;").unwrap();

        let temp = TempDir::new().unwrap();
        let link = temp.path().join("link.cpp");
        symlink(&real, &link).unwrap();

        let config = config_for(temp.path(), WalkOptions::encoding_preset());
        let result = run(&config, &EncodingNormalizer, |_| {}).unwrap();

        assert_eq!(result.summary.scanned, 1);
        assert_eq!(result.summary.rewritten, 1);
        assert!(link.is_symlink());
        assert_eq!(fs::read(&real).unwrap(), b"\xEF\xBB\xBFint x;");
    }
}
