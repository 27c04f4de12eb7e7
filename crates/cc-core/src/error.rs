use thiserror::Error;

#[derive(Error, Debug)]
pub enum ClownError {
    #[error("No glyph for character {ch:?} at index {index}")]
    UnmappedCharacter { ch: char, index: usize },
    #[error("Unrecognized glyph {glyph:?} at index {index}")]
    UnmappedGlyph { glyph: String, index: usize },
    #[error("Decoded bit count {len} is not a multiple of 8")]
    MalformedBinaryLength { len: usize },
    #[error("Character {ch:?} is not a binary digit")]
    InvalidBitDigit { ch: char },
    #[error("Decoded bytes are not valid UTF-8")]
    InvalidUtf8(#[from] std::string::FromUtf8Error),
    #[error("Invalid charset definition: {0}")]
    InvalidCharsetDefinition(String),
    #[error("Grammar parse error: {0}")]
    GrammarParseError(String),
    #[error("Charset not found: {name}")]
    CharsetNotFound { name: String },
    #[error("Cipher error: {0}")]
    Cipher(String),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

pub type Result<T> = std::result::Result<T, ClownError>;
