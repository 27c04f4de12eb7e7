//! Validated bidirectional source/glyph mapping.

use std::collections::HashMap;
use std::sync::LazyLock;

use cc_core::{CharsetKind, CharsetMode, ClownError, CommonReplacer, Result};
use regex::Regex;
use serde::{Deserialize, Serialize};

/// Glyphs for a plain binary charset: one per bit digit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BinaryGlyphs {
    pub zero: String,
    pub one: String,
}

/// Glyphs for an efficient binary charset: the full condensed alphabet.
/// The two replacer slots cover the common-replacer symbols.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EfficientBinaryGlyphs {
    pub digits: [String; 10],
    pub dot: String,
    pub colon: String,
    pub replacer1: String,
    pub replacer2: String,
}

/// Glyphs for a literal charset. `space` and `tab` are dedicated slots that
/// win over a literal pair for the same character; `unknown` is the optional
/// fallback glyph for unmapped input.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LiteralGlyphs {
    pub pairs: Vec<(char, String)>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub space: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tab: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unknown: Option<String>,
}

/// Tagged charset definition. The variant carries the discriminant; nothing
/// is inferred from which keys happen to be present.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "glyphs", rename_all = "kebab-case")]
pub enum CharsetDefinition {
    Binary(BinaryGlyphs),
    EfficientBinary(EfficientBinaryGlyphs),
    Literal(LiteralGlyphs),
}

impl CharsetDefinition {
    pub fn kind(&self) -> CharsetKind {
        match self {
            Self::Literal(_) => CharsetKind::Literal,
            Self::Binary(_) | Self::EfficientBinary(_) => CharsetKind::Binary,
        }
    }

    pub fn mode(&self) -> CharsetMode {
        match self {
            Self::EfficientBinary(_) => CharsetMode::Efficient,
            Self::Binary(_) | Self::Literal(_) => CharsetMode::Normal,
        }
    }
}

// Code points allowed inside a multi-code-point glyph cluster: joiners,
// variation selector, keycap, and the symbol/emoji blocks.
static RE_SYMBOL_CLUSTER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        "^[\u{200D}\u{FE0F}\u{20E3}\
          \u{2011}-\u{27BF}\u{2B00}-\u{2BFF}\
          \u{E000}-\u{F8FF}\u{1F000}-\u{1FAFF}]+$",
    )
    .unwrap()
});

/// One code point, or a cluster made entirely of symbol/emoji code points.
pub fn is_single_glyph(glyph: &str) -> bool {
    let mut chars = glyph.chars();
    match (chars.next(), chars.next()) {
        (Some(_), None) => true,
        (Some(_), Some(_)) => RE_SYMBOL_CLUSTER.is_match(glyph),
        _ => false,
    }
}

/// Immutable bidirectional mapping between source symbols and glyphs.
///
/// Both directions are total injections over their domains; this is checked
/// once at construction and never again. Shareable across threads read-only.
#[derive(Debug, Clone)]
pub struct CharsetTable {
    kind: CharsetKind,
    mode: CharsetMode,
    forward: HashMap<char, String>,
    inverse: HashMap<String, char>,
    /// Distinct glyph lengths in code points, longest first.
    glyph_lens: Vec<usize>,
    unknown: Option<String>,
}

impl CharsetTable {
    pub fn new(definition: &CharsetDefinition, replacers: &[CommonReplacer]) -> Result<Self> {
        let mut table = Self {
            kind: definition.kind(),
            mode: definition.mode(),
            forward: HashMap::new(),
            inverse: HashMap::new(),
            glyph_lens: Vec::new(),
            unknown: None,
        };

        match definition {
            CharsetDefinition::Binary(glyphs) => {
                table.insert('0', &glyphs.zero)?;
                table.insert('1', &glyphs.one)?;
            }
            CharsetDefinition::EfficientBinary(glyphs) => {
                if replacers.len() < 2 {
                    return Err(ClownError::InvalidCharsetDefinition(
                        "efficient binary charset needs two common replacers".into(),
                    ));
                }
                for (digit, glyph) in ('0'..='9').zip(glyphs.digits.iter()) {
                    table.insert(digit, glyph)?;
                }
                table.insert('.', &glyphs.dot)?;
                table.insert(':', &glyphs.colon)?;
                table.insert(replacers[0].symbol, &glyphs.replacer1)?;
                table.insert(replacers[1].symbol, &glyphs.replacer2)?;
            }
            CharsetDefinition::Literal(glyphs) => {
                for (ch, glyph) in &glyphs.pairs {
                    table.insert(*ch, glyph)?;
                }
                if let Some(glyph) = &glyphs.space {
                    table.insert_priority(' ', glyph)?;
                }
                if let Some(glyph) = &glyphs.tab {
                    table.insert_priority('\t', glyph)?;
                }
                if let Some(glyph) = &glyphs.unknown {
                    table.check_glyph(glyph)?;
                    // the original character is unrecoverable by design
                    table.inverse.insert(glyph.clone(), '\u{FFFD}');
                    table.unknown = Some(glyph.clone());
                }
            }
        }

        let mut lens: Vec<usize> = table.inverse.keys().map(|g| g.chars().count()).collect();
        lens.sort_unstable_by(|a, b| b.cmp(a));
        lens.dedup();
        table.glyph_lens = lens;

        Ok(table)
    }

    fn check_glyph(&self, glyph: &str) -> Result<()> {
        if !is_single_glyph(glyph) {
            return Err(ClownError::InvalidCharsetDefinition(format!(
                "glyph {glyph:?} is not a single symbol"
            )));
        }
        if self.inverse.contains_key(glyph) {
            return Err(ClownError::InvalidCharsetDefinition(format!(
                "glyph {glyph:?} is already in the charset"
            )));
        }
        Ok(())
    }

    fn insert(&mut self, source: char, glyph: &str) -> Result<()> {
        self.check_glyph(glyph)?;
        if self.forward.contains_key(&source) {
            return Err(ClownError::InvalidCharsetDefinition(format!(
                "source symbol {source:?} is already in the charset"
            )));
        }
        self.forward.insert(source, glyph.to_string());
        self.inverse.insert(glyph.to_string(), source);
        Ok(())
    }

    /// Insert a dedicated-slot mapping. The slot glyph wins on encode; a
    /// displaced pair glyph stays decodable back to the same character.
    fn insert_priority(&mut self, source: char, glyph: &str) -> Result<()> {
        self.check_glyph(glyph)?;
        self.forward.insert(source, glyph.to_string());
        self.inverse.insert(glyph.to_string(), source);
        Ok(())
    }

    pub fn kind(&self) -> CharsetKind {
        self.kind
    }

    pub fn mode(&self) -> CharsetMode {
        self.mode
    }

    pub fn glyph_for(&self, source: char) -> Option<&str> {
        self.forward.get(&source).map(String::as_str)
    }

    pub fn source_for(&self, glyph: &str) -> Option<char> {
        self.inverse.get(glyph).copied()
    }

    pub fn unknown_glyph(&self) -> Option<&str> {
        self.unknown.as_deref()
    }

    pub fn glyph_lens(&self) -> &[usize] {
        &self.glyph_lens
    }

    pub fn len(&self) -> usize {
        self.forward.len()
    }

    pub fn is_empty(&self) -> bool {
        self.forward.is_empty()
    }
}
