//! Best-effort encoding detection and decoding of the input novel.

use anyhow::{bail, Context, Result};
use encoding_rs::{Encoding, BIG5, GB18030, GBK, SHIFT_JIS, UTF_8};
use std::fs;
use std::path::Path;

/// Candidate encodings tried in order during detection. UTF-8 first, then
/// the East-Asian legacy encodings novels in the wild commonly use.
const CANDIDATES: &[&Encoding] = &[UTF_8, GBK, GB18030, BIG5, SHIFT_JIS];

/// The decoded novel plus the encoding it was read with.
pub struct Document {
    pub text: String,
    pub encoding: &'static Encoding,
}

/// Read and decode a novel file.
///
/// `label` overrides detection with an explicit encoding name. In lossy
/// mode (the default) undecodable byte sequences become U+FFFD; with
/// `strict` they are a hard error.
pub fn read_document(path: &Path, label: Option<&str>, strict: bool) -> Result<Document> {
    let bytes =
        fs::read(path).with_context(|| format!("Failed to read input: {}", path.display()))?;

    let encoding = match label {
        Some(label) => resolve(label)?,
        None => detect(&bytes),
    };

    let text = decode(&bytes, encoding, strict)?;
    Ok(Document { text, encoding })
}

/// Return the first candidate encoding that decodes `bytes` without error,
/// falling back to UTF-8 when none does. Deterministic: the candidate
/// order is fixed.
pub fn detect(bytes: &[u8]) -> &'static Encoding {
    for encoding in CANDIDATES {
        if encoding
            .decode_without_bom_handling_and_without_replacement(bytes)
            .is_some()
        {
            return encoding;
        }
    }
    UTF_8
}

/// Decode `bytes` as `encoding`, honoring a BOM if one is present.
pub fn decode(bytes: &[u8], encoding: &'static Encoding, strict: bool) -> Result<String> {
    let (text, actual, had_errors) = encoding.decode(bytes);
    if had_errors && strict {
        bail!("input contains byte sequences invalid for {}", actual.name());
    }
    Ok(text.into_owned())
}

/// Map a user-supplied encoding label (e.g. "gbk", "gb2312") to an encoding.
pub fn resolve(label: &str) -> Result<&'static Encoding> {
    Encoding::for_label(label.trim().as_bytes())
        .with_context(|| format!("Unknown encoding label: {label}"))
}
