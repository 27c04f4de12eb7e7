//! Charset tables, codecs, built-in charsets, and the charset registry.

mod bits;
pub mod codec;
pub mod defaults;
pub mod registry;
pub mod table;

pub use codec::CharsetCodec;
pub use defaults::{default_binary, default_efficient_binary, default_literal, NamedCharset};
pub use registry::CharsetRegistry;
pub use table::{
    is_single_glyph, BinaryGlyphs, CharsetDefinition, CharsetTable, EfficientBinaryGlyphs,
    LiteralGlyphs,
};
