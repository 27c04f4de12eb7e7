use serde::{Deserialize, Serialize};

/// What the source alphabet of a charset is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CharsetKind {
    /// Maps arbitrary text characters one-to-one.
    Literal,
    /// Maps the binary-encoding alphabet (digits and punctuation).
    Binary,
}

/// How a binary charset treats the bit stream.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CharsetMode {
    /// Raw 8-bit groups, two glyphs.
    Normal,
    /// Condensed bit stream, full digit/punctuation alphabet.
    Efficient,
}

/// A high-frequency bit pattern and the single symbol that stands in for it
/// in condensed output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommonReplacer {
    pub pattern: String,
    pub symbol: char,
}

impl CommonReplacer {
    pub fn new(pattern: impl Into<String>, symbol: char) -> Self {
        Self { pattern: pattern.into(), symbol }
    }
}

/// The stock replacer pairs: `100 -> _` and `110 -> +`.
pub fn default_replacers() -> Vec<CommonReplacer> {
    vec![CommonReplacer::new("100", '_'), CommonReplacer::new("110", '+')]
}
