// crates/engine/src/normalizer.rs
pub mod encoding;
pub mod newline;

pub use encoding::EncodingNormalizer;
pub use newline::NewlineNormalizer;

use crate::codec::SourceEncoding;

/// Result of running a normalizer over one file's bytes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Normalized {
    /// Skipped without decoding, e.g. a file that already carries a BOM.
    AlreadyNormalized(SourceEncoding),
    /// Normalized content. Callers write it only if it differs from the input.
    Rewrite {
        bytes: Vec<u8>,
        from: SourceEncoding,
        /// Number of line breaks in `bytes`, when the normalizer tracks them.
        line_breaks: Option<usize>,
    },
    /// No candidate encoding accepted the bytes; the file must be left as is.
    Undecodable,
}

/// A pure byte-to-byte transform applied to every target file.
pub trait Normalizer {
    /// Short name used in logs.
    fn name(&self) -> &'static str;

    fn normalize(&self, raw: &[u8]) -> Normalized;
}
