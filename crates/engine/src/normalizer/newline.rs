// crates/engine/src/normalizer/newline.rs
use super::{Normalized, Normalizer};
use crate::codec::{SourceEncoding, decode_legacy, decode_utf8_sig, encode_utf8_bom};
use crate::options::LineEnding;
use std::borrow::Cow;

/// Rewrites every line break as `eol` and re-encodes as UTF-8 with a BOM.
#[derive(Debug, Clone, Copy, Default)]
pub struct NewlineNormalizer {
    pub eol: LineEnding,
}

impl NewlineNormalizer {
    /// Legacy fallback tried after UTF-8 (with or without BOM).
    pub const FALLBACK: SourceEncoding = SourceEncoding::Gbk;

    #[must_use]
    pub const fn new(eol: LineEnding) -> Self {
        Self { eol }
    }
}

impl Normalizer for NewlineNormalizer {
    fn name(&self) -> &'static str {
        "newline"
    }

    fn normalize(&self, raw: &[u8]) -> Normalized {
        let (text, from) = match decode_utf8_sig(raw) {
            Some((text, from)) => (Cow::Borrowed(text), from),
            None => match decode_legacy(raw, Self::FALLBACK) {
                Some(text) => (text, Self::FALLBACK),
                None => return Normalized::Undecodable,
            },
        };

        let collapsed = collapse_line_breaks(&text);
        let line_breaks = bytecount::count(collapsed.as_bytes(), b'\n');
        Normalized::Rewrite {
            bytes: encode_utf8_bom(&expand_line_breaks(&collapsed, self.eol)),
            from,
            line_breaks: Some(line_breaks),
        }
    }
}

/// Collapses CRLF, then any remaining lone CR, into `\n`.
///
/// CRLF must go first so that a `\r\n` pair yields one break, not two.
#[must_use]
pub fn collapse_line_breaks(text: &str) -> Cow<'_, str> {
    if !text.contains('\r') {
        return Cow::Borrowed(text);
    }
    Cow::Owned(text.replace("\r\n", "\n").replace('\r', "\n"))
}

/// Expands every `\n` of collapsed text into `eol`.
#[must_use]
pub fn expand_line_breaks(text: &str, eol: LineEnding) -> Cow<'_, str> {
    match eol {
        LineEnding::Lf => Cow::Borrowed(text),
        LineEnding::Crlf => Cow::Owned(text.replace('\n', eol.as_str())),
    }
}
