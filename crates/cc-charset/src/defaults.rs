//! Built-in clown charsets and the named-charset wrapper.

use cc_core::{CommonReplacer, Result};

use crate::codec::CharsetCodec;
use crate::table::{BinaryGlyphs, CharsetDefinition, EfficientBinaryGlyphs, LiteralGlyphs};

/// A charset with a canonical name and lookup aliases, ready to register.
#[derive(Debug, Clone)]
pub struct NamedCharset {
    name: String,
    aliases: Vec<String>,
    definition: CharsetDefinition,
    codec: CharsetCodec,
}

impl NamedCharset {
    pub fn new(
        name: &str,
        definition: CharsetDefinition,
        aliases: Vec<String>,
    ) -> Result<Self> {
        Self::with_replacers(name, definition, aliases, cc_core::default_replacers())
    }

    pub fn with_replacers(
        name: &str,
        definition: CharsetDefinition,
        aliases: Vec<String>,
        replacers: Vec<CommonReplacer>,
    ) -> Result<Self> {
        let codec = CharsetCodec::new(&definition, replacers)?;
        Ok(Self {
            name: name.trim().to_lowercase(),
            aliases: aliases.into_iter().map(|a| a.trim().to_lowercase()).collect(),
            definition,
            codec,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn aliases(&self) -> &[String] {
        &self.aliases
    }

    pub fn definition(&self) -> &CharsetDefinition {
        &self.definition
    }

    pub fn codec(&self) -> &CharsetCodec {
        &self.codec
    }

    pub fn encode(&self, text: &str) -> Result<String> {
        self.codec.encode(text)
    }

    pub fn decode(&self, glyphs: &str) -> Result<String> {
        self.codec.decode(glyphs)
    }
}

/// The default binary charset: one clown per bit.
pub fn default_binary() -> NamedCharset {
    let definition = CharsetDefinition::Binary(BinaryGlyphs {
        zero: "🤡".into(),
        one: "🤠".into(),
    });
    NamedCharset::new("clown-binary", definition, vec!["binary".into(), "cb".into()])
        .expect("built-in binary charset definition is valid")
}

/// The default efficient binary charset: full condensed alphabet.
pub fn default_efficient_binary() -> NamedCharset {
    let digits: [String; 10] = [
        "🤡".into(),
        "🤠".into(),
        "🎪".into(),
        "🎠".into(),
        "🎡".into(),
        "🎢".into(),
        "🃏".into(),
        "🎭".into(),
        "🤹".into(),
        "🎈".into(),
    ];
    let definition = CharsetDefinition::EfficientBinary(EfficientBinaryGlyphs {
        digits,
        dot: "🎉".into(),
        colon: "🎊".into(),
        replacer1: "🪄".into(),
        replacer2: "🎺".into(),
    });
    NamedCharset::new(
        "clown-efficient-binary",
        definition,
        vec!["eb".into(), "efficient".into(), "efficient-binary".into()],
    )
    .expect("built-in efficient binary charset definition is valid")
}

/// The default literal charset, covering lowercase hex.
pub fn default_literal() -> NamedCharset {
    let pairs = vec![
        ('a', "🥸".to_string()),
        ('b', "🎯".to_string()),
        ('c', "🎲".to_string()),
        ('d', "🎳".to_string()),
        ('e', "🪀".to_string()),
        ('f', "🪁".to_string()),
        ('0', "🤡".to_string()),
        ('1', "🤠".to_string()),
        ('2', "🎪".to_string()),
        ('3', "🎠".to_string()),
        ('4', "🎡".to_string()),
        ('5', "🎢".to_string()),
        ('6', "🃏".to_string()),
        ('7', "🎭".to_string()),
        ('8', "🤹".to_string()),
        ('9', "🎈".to_string()),
    ];
    let definition = CharsetDefinition::Literal(LiteralGlyphs {
        pairs,
        space: None,
        tab: None,
        unknown: None,
    });
    NamedCharset::new("clown-literal", definition, vec!["literal".into(), "hex".into()])
        .expect("built-in literal charset definition is valid")
}
