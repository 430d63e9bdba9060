// crates/engine/src/codec.rs
//! Strict text decoding and UTF-8 BOM encoding.
//!
//! Decoders never substitute replacement characters: a byte sequence that is
//! malformed for an encoding is reported as `None` so the caller can try the
//! next candidate or leave the file alone.

use encoding_rs::Encoding;
use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::fmt;

/// UTF-8 byte-order marker.
pub const UTF8_BOM: &[u8; 3] = b"\xEF\xBB\xBF";

/// Encoding a file was decoded from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SourceEncoding {
    #[serde(rename = "utf-8-bom")]
    Utf8Bom,
    #[serde(rename = "utf-8")]
    Utf8,
    #[serde(rename = "gb18030")]
    Gb18030,
    #[serde(rename = "gbk")]
    Gbk,
}

impl SourceEncoding {
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Utf8Bom => "utf-8-bom",
            Self::Utf8 => "utf-8",
            Self::Gb18030 => "gb18030",
            Self::Gbk => "gbk",
        }
    }

    fn legacy(self) -> Option<&'static Encoding> {
        match self {
            Self::Gb18030 => Some(encoding_rs::GB18030),
            Self::Gbk => Some(encoding_rs::GBK),
            Self::Utf8Bom | Self::Utf8 => None,
        }
    }
}

impl fmt::Display for SourceEncoding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[must_use]
pub fn has_utf8_bom(bytes: &[u8]) -> bool {
    bytes.starts_with(UTF8_BOM)
}

/// Strict UTF-8 decode of the whole buffer, BOM included if present.
#[must_use]
pub fn decode_utf8(bytes: &[u8]) -> Option<&str> {
    std::str::from_utf8(bytes).ok()
}

/// UTF-8 decode that strips a leading BOM first.
#[must_use]
pub fn decode_utf8_sig(bytes: &[u8]) -> Option<(&str, SourceEncoding)> {
    match bytes.strip_prefix(UTF8_BOM.as_slice()) {
        Some(rest) => decode_utf8(rest).map(|s| (s, SourceEncoding::Utf8Bom)),
        None => decode_utf8(bytes).map(|s| (s, SourceEncoding::Utf8)),
    }
}

/// Strict decode with a legacy multi-byte encoding.
///
/// The WHATWG decoders in `encoding_rs` map a lone `0x80` to `€` and let GBK
/// read four-byte sequences. Both are rejected here: the bytes must be the
/// canonical GB18030 form of the decoded text, and GBK text must not need
/// any four-byte sequence.
///
/// Returns `None` for the UTF-8 variants; use [`decode_utf8`] for those.
#[must_use]
pub fn decode_legacy(bytes: &[u8], encoding: SourceEncoding) -> Option<Cow<'_, str>> {
    let text = encoding
        .legacy()?
        .decode_without_bom_handling_and_without_replacement(bytes)?;

    let (canonical, _, unmappable) = encoding_rs::GB18030.encode(&text);
    if unmappable || canonical.as_ref() != bytes {
        return None;
    }
    if encoding == SourceEncoding::Gbk {
        // two-byte repertoire only
        let (_, _, unmappable) = encoding_rs::GBK.encode(&text);
        if unmappable {
            return None;
        }
    }
    Some(text)
}

/// Encode `text` as UTF-8 with a leading BOM.
#[must_use]
pub fn encode_utf8_bom(text: &str) -> Vec<u8> {
    let mut out = Vec::with_capacity(UTF8_BOM.len() + text.len());
    out.extend_from_slice(UTF8_BOM);
    out.extend_from_slice(text.as_bytes());
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    // "中文" in GBK / GB18030
    const ZHONGWEN_GBK: &[u8] = &[0xD6, 0xD0, 0xCE, 0xC4];

    #[test]
    fn test_bom_detection() {
        assert!(has_utf8_bom(b"\xEF\xBB\xBFint x;"));
        assert!(!has_utf8_bom(b"int x;"));
        assert!(!has_utf8_bom(b"\xEF\xBB"));
    }

    #[test]
    fn test_decode_utf8_sig_strips_marker() {
        let (text, enc) = decode_utf8_sig(b"\xEF\xBB\xBFabc").unwrap();
        assert_eq!(text, "abc");
        assert_eq!(enc, SourceEncoding::Utf8Bom);

        let (text, enc) = decode_utf8_sig(b"abc").unwrap();
        assert_eq!(text, "abc");
        assert_eq!(enc, SourceEncoding::Utf8);
    }

    #[test]
    fn test_gbk_bytes_are_not_utf8() {
        assert!(decode_utf8(ZHONGWEN_GBK).is_none());
        assert_eq!(
            decode_legacy(ZHONGWEN_GBK, SourceEncoding::Gb18030).as_deref(),
            Some("中文")
        );
        assert_eq!(
            decode_legacy(ZHONGWEN_GBK, SourceEncoding::Gbk).as_deref(),
            Some("中文")
        );
    }

    #[test]
    fn test_decode_legacy_is_strict() {
        // truncated two-byte sequence
        assert!(decode_legacy(&[0x61, 0xD6], SourceEncoding::Gb18030).is_none());
        assert!(decode_legacy(b"abc", SourceEncoding::Utf8).is_none());
    }

    #[test]
    fn test_lone_0x80_is_rejected() {
        assert!(decode_legacy(b"price \x80 5", SourceEncoding::Gb18030).is_none());
        assert!(decode_legacy(b"price \x80 5", SourceEncoding::Gbk).is_none());
        assert_eq!(
            decode_legacy(&[0xA2, 0xE3], SourceEncoding::Gb18030).as_deref(),
            Some("€")
        );
        // 0x80 as a trail byte is fine
        assert!(decode_legacy(&[0x81, 0x80], SourceEncoding::Gbk).is_some());
    }

    #[test]
    fn test_four_byte_sequences_are_gb18030_only() {
        let four = b"a\x81\x30\x81\x30\n";
        assert_eq!(
            decode_legacy(four, SourceEncoding::Gb18030).as_deref(),
            Some("a\u{80}\n")
        );
        assert!(decode_legacy(four, SourceEncoding::Gbk).is_none());
    }

    #[test]
    fn test_encode_utf8_bom() {
        assert_eq!(encode_utf8_bom(""), UTF8_BOM.to_vec());
        assert_eq!(encode_utf8_bom("中"), b"\xEF\xBB\xBF\xE4\xB8\xAD".to_vec());
        assert_eq!(SourceEncoding::Gb18030.to_string(), "gb18030");
    }
}
