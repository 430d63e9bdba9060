// crates/engine/src/normalizer/encoding.rs
use super::{Normalized, Normalizer};
use crate::codec::{SourceEncoding, decode_legacy, decode_utf8, encode_utf8_bom, has_utf8_bom};

/// Converts UTF-8 (no BOM) and GB18030 text to UTF-8 with a BOM.
#[derive(Debug, Clone, Copy, Default)]
pub struct EncodingNormalizer;

impl EncodingNormalizer {
    /// Legacy fallback tried after strict UTF-8.
    pub const FALLBACK: SourceEncoding = SourceEncoding::Gb18030;
}

impl Normalizer for EncodingNormalizer {
    fn name(&self) -> &'static str {
        "encoding"
    }

    fn normalize(&self, raw: &[u8]) -> Normalized {
        if has_utf8_bom(raw) {
            return Normalized::AlreadyNormalized(SourceEncoding::Utf8Bom);
        }

        if let Some(text) = decode_utf8(raw) {
            return Normalized::Rewrite {
                bytes: encode_utf8_bom(text),
                from: SourceEncoding::Utf8,
                line_breaks: None,
            };
        }

        match decode_legacy(raw, Self::FALLBACK) {
            Some(text) => Normalized::Rewrite {
                bytes: encode_utf8_bom(&text),
                from: Self::FALLBACK,
                line_breaks: None,
            },
            None => Normalized::Undecodable,
        }
    }
}
