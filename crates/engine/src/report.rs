// crates/engine/src/report.rs
use crate::codec::SourceEncoding;
use crate::error::EngineError;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// What happened to one target file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Outcome {
    /// New bytes were written (or would be, in dry-run mode).
    Rewritten,
    /// The normalized bytes equal the original; nothing written.
    Unchanged,
    /// Already in the target form; skipped without transforming.
    AlreadyNormalized,
    /// No decoder accepted the content; file left untouched.
    Undecodable,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileReport {
    pub path: PathBuf,
    pub outcome: Outcome,
    pub encoding: Option<SourceEncoding>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub line_breaks: Option<usize>,
    #[serde(skip_serializing_if = "std::ops::Not::not", default)]
    pub dry_run: bool,
}

impl FileReport {
    #[must_use]
    pub const fn new(path: PathBuf, outcome: Outcome) -> Self {
        Self {
            path,
            outcome,
            encoding: None,
            line_breaks: None,
            dry_run: false,
        }
    }
}

/// Per-run counters.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunSummary {
    pub scanned: usize,
    pub rewritten: usize,
    pub unchanged: usize,
    pub undecodable: usize,
    pub failed: usize,
}

impl RunSummary {
    pub fn record(&mut self, report: &FileReport) {
        self.scanned += 1;
        match report.outcome {
            Outcome::Rewritten => self.rewritten += 1,
            Outcome::Unchanged | Outcome::AlreadyNormalized => self.unchanged += 1,
            Outcome::Undecodable => self.undecodable += 1,
        }
    }

    pub fn record_failure(&mut self) {
        self.scanned += 1;
        self.failed += 1;
    }
}

/// Result of a whole run: counters plus the per-file errors that did not abort it.
#[derive(Debug, Default)]
pub struct RunResult {
    pub summary: RunSummary,
    pub errors: Vec<(PathBuf, EngineError)>,
}
