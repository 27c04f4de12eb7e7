//! The clown serialization grammar.
//!
//! `[<fileName>].[<key1>]:[<val1>].[<key2>]:[<val2>]…` — every key and value
//! wrapped in one bracket pair, entries joined with '.'. An encrypted blob is
//! the whole assembled string run through the cipher wrapper and JSON-quoted.

use std::sync::LazyLock;

use cc_cipher::CipherParams;
use cc_core::{ClownError, Result};
use regex::Regex;

use crate::record::ClownRecord;

const DELIM_ENTRY: &str = "].[";
const DELIM_KV: &str = "]:[";

// Double quotes are accepted because encrypted blobs are JSON-quoted hex.
static RE_HEX: LazyLock<Regex> = LazyLock::new(|| Regex::new("^[0-9a-fA-F\"]+$").unwrap());

/// Heuristic ciphertext detection: every character a hex digit or a double
/// quote. Hex-looking plaintext is indistinguishable by construction; this is
/// a documented limitation of the format, not something to paper over.
pub fn is_hex(text: &str) -> bool {
    !text.is_empty() && RE_HEX.is_match(text)
}

fn check_segment(segment: &str) -> Result<()> {
    if segment.contains(DELIM_ENTRY) || segment.contains(DELIM_KV) {
        return Err(ClownError::GrammarParseError(format!(
            "segment {segment:?} contains a reserved delimiter"
        )));
    }
    Ok(())
}

/// Serialize a record; with cipher params the whole blob is encrypted to hex
/// and JSON-quoted.
pub fn serialize(record: &ClownRecord, crypt: Option<&CipherParams>) -> Result<String> {
    check_segment(record.file_name())?;
    let mut out = format!("[{}]", record.file_name());
    for (key, value) in record.defined() {
        check_segment(key)?;
        check_segment(value)?;
        out.push_str(".[");
        out.push_str(key);
        out.push_str("]:[");
        out.push_str(value);
        out.push(']');
    }

    match crypt {
        Some(params) => Ok(serde_json::to_string(&params.encrypt(&out)?)?),
        None => Ok(out),
    }
}

/// Parse serialized text back into a record; with cipher params, hex-looking
/// input is decrypted first.
pub fn deserialize(text: &str, crypt: Option<&CipherParams>) -> Result<ClownRecord> {
    let mut content = text.to_string();
    if let Some(params) = crypt {
        if is_hex(&content) {
            let unquoted: String = if content.contains('"') {
                serde_json::from_str(&content)?
            } else {
                content
            };
            content = params.decrypt(&unquoted)?;
        }
    }
    parse(&content)
}

fn parse(content: &str) -> Result<ClownRecord> {
    let inner = content
        .strip_prefix('[')
        .and_then(|rest| rest.strip_suffix(']'))
        .ok_or_else(|| {
            ClownError::GrammarParseError("content is not bracket-delimited".into())
        })?;

    let mut segments = inner.split(DELIM_ENTRY);
    let file_name = segments.next().unwrap_or_default();
    let mut record = ClownRecord::new(file_name);

    for segment in segments {
        let (key, value) = segment.split_once(DELIM_KV).ok_or_else(|| {
            ClownError::GrammarParseError(format!(
                "entry {segment:?} is missing a key/value delimiter"
            ))
        })?;
        record.set(key, value);
    }

    Ok(record)
}
