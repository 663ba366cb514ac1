//! File decoding

use crate::scanner::error::{ScanError, ScanResult};
use once_cell::sync::Lazy;
use regex::bytes::Regex;
use std::fs;
use std::path::Path;

/// Bytes sampled from the start of a file to judge whether it is binary
const BINARY_SAMPLE: usize = 512;

/// Share of text-like bytes a sample needs to count as text, in percent
const TEXT_THRESHOLD: usize = 80;

static TEXT_LIKE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?-u)[\w\t \(\)\.=!'\+\-\*\\]").expect("text-like byte pattern is valid")
});

/// Read a file and decode it to text
///
/// Binary files decode to their ASCII bytes only.
pub fn read_file(path: &Path) -> ScanResult<String> {
    let bytes = fs::read(path).map_err(|e| ScanError::io(path, e))?;
    if let Some(content) = decode(&bytes) {
        return Ok(content);
    }
    if is_binary(&bytes) {
        log::trace!("Treating '{}' as binary", path.display());
        return Ok(bytes.iter().filter(|b| b.is_ascii()).map(|&b| b as char).collect());
    }
    Err(ScanError::UnreadableFile {
        path: path.to_path_buf(),
    })
}

/// Decode as UTF-8, falling back to ISO-8859-15
pub fn decode(bytes: &[u8]) -> Option<String> {
    match std::str::from_utf8(bytes) {
        Ok(text) => Some(text.to_string()),
        Err(_) => decode_latin9(bytes),
    }
}

/// Decode ISO-8859-15 text
///
/// C0 controls other than whitespace and escape only occur in binary data
/// and are rejected. The C1 range decodes to U+0080..U+009F, so Windows-1252
/// punctuation survives as control characters.
pub fn decode_latin9(bytes: &[u8]) -> Option<String> {
    bytes.iter().map(|&b| latin9_char(b)).collect()
}

fn latin9_char(byte: u8) -> Option<char> {
    let c = match byte {
        0x00..=0x08 | 0x0E..=0x1A | 0x1C..=0x1F => return None,
        0xA4 => '\u{20AC}',
        0xA6 => '\u{0160}',
        0xA8 => '\u{0161}',
        0xB4 => '\u{017D}',
        0xB8 => '\u{017E}',
        0xBC => '\u{0152}',
        0xBD => '\u{0153}',
        0xBE => '\u{0178}',
        other => char::from(other),
    };
    Some(c)
}

/// Whether the start of the data looks binary
///
/// An empty sample is binary.
pub fn is_binary(bytes: &[u8]) -> bool {
    let sample = &bytes[..bytes.len().min(BINARY_SAMPLE)];
    if sample.is_empty() {
        return true;
    }
    let text_like = TEXT_LIKE.find_iter(sample).count();
    text_like * 100 < sample.len() * TEXT_THRESHOLD
}
