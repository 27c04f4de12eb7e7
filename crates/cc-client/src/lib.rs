//! ClownCrypt client — the top of the pipeline.
//!
//! Message path: AES-CBC ciphertext (hex) disguised as charset glyphs, and
//! back. File path: key/value records through the clown grammar, optionally
//! encrypted and/or glyph-encoded, persisted as `.clown` or `.json`.

pub mod client;
pub mod export;

pub use client::{CallOverrides, ClownClient, ClownOptions};
pub use export::{ConfigExportOptions, ExportOptions, ExportStyle};
