//! Transliteration between the base alphabet and the glyph alphabet.

use cc_condenser::BinaryCondenser;
use cc_core::{CharsetKind, CharsetMode, ClownError, CommonReplacer, Result};

use crate::bits;
use crate::table::{CharsetDefinition, CharsetTable};

/// Bidirectional charset codec.
///
/// Literal charsets map input characters straight to glyphs. Binary charsets
/// turn the input's UTF-8 bytes into zero-padded 8-bit groups first, condense
/// them in Efficient mode, and transliterate the resulting digit/punctuation
/// string through the same glyph table.
#[derive(Debug, Clone)]
pub struct CharsetCodec {
    table: CharsetTable,
    condenser: BinaryCondenser,
}

impl CharsetCodec {
    pub fn new(definition: &CharsetDefinition, replacers: Vec<CommonReplacer>) -> Result<Self> {
        let table = CharsetTable::new(definition, &replacers)?;
        Ok(Self { table, condenser: BinaryCondenser::new(replacers) })
    }

    pub fn with_default_replacers(definition: &CharsetDefinition) -> Result<Self> {
        Self::new(definition, cc_core::default_replacers())
    }

    pub fn kind(&self) -> CharsetKind {
        self.table.kind()
    }

    pub fn mode(&self) -> CharsetMode {
        self.table.mode()
    }

    pub fn table(&self) -> &CharsetTable {
        &self.table
    }

    pub fn replacers(&self) -> &[CommonReplacer] {
        self.condenser.replacers()
    }

    /// Encode text into the glyph alphabet.
    pub fn encode(&self, text: &str) -> Result<String> {
        match self.table.kind() {
            CharsetKind::Literal => self.encode_literal(text),
            CharsetKind::Binary => self.encode_binary(text),
        }
    }

    /// Decode a glyph string back into text.
    pub fn decode(&self, glyphs: &str) -> Result<String> {
        match self.table.kind() {
            CharsetKind::Literal => self.decode_literal(glyphs),
            CharsetKind::Binary => self.decode_binary(glyphs),
        }
    }

    /// Whether the whole input transliterates through the inverse table.
    pub fn valid_glyphs(&self, text: &str) -> bool {
        self.decode_literal(text).is_ok()
    }

    fn encode_literal(&self, text: &str) -> Result<String> {
        let mut out = String::with_capacity(text.len());
        for (index, ch) in text.chars().enumerate() {
            match self.table.glyph_for(ch) {
                Some(glyph) => out.push_str(glyph),
                None => match self.table.unknown_glyph() {
                    Some(glyph) => {
                        tracing::warn!(
                            character = %ch,
                            index,
                            "no glyph for character, substituting unknown marker"
                        );
                        out.push_str(glyph);
                    }
                    None => return Err(ClownError::UnmappedCharacter { ch, index }),
                },
            }
        }
        Ok(out)
    }

    fn decode_literal(&self, glyphs: &str) -> Result<String> {
        let chars: Vec<char> = glyphs.chars().collect();
        let mut out = String::with_capacity(chars.len());
        let mut i = 0;

        // longest match first: glyph clusters span several code points
        while i < chars.len() {
            let mut matched = false;
            for &len in self.table.glyph_lens() {
                if i + len > chars.len() {
                    continue;
                }
                let candidate: String = chars[i..i + len].iter().collect();
                if let Some(source) = self.table.source_for(&candidate) {
                    out.push(source);
                    i += len;
                    matched = true;
                    break;
                }
            }
            if !matched {
                return Err(ClownError::UnmappedGlyph { glyph: chars[i].to_string(), index: i });
            }
        }

        Ok(out)
    }

    fn encode_binary(&self, text: &str) -> Result<String> {
        let raw = bits::to_bits(text);
        let digits = match self.table.mode() {
            CharsetMode::Efficient => self.condenser.encode(&raw),
            CharsetMode::Normal => raw,
        };
        self.encode_literal(&digits)
    }

    fn decode_binary(&self, glyphs: &str) -> Result<String> {
        let digits = self.decode_literal(glyphs)?;
        let raw = match self.table.mode() {
            CharsetMode::Efficient => self.condenser.decode(&digits),
            CharsetMode::Normal => digits,
        };
        bits::from_bits(&raw)
    }
}
