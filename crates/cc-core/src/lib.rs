//! Shared error and value types for ClownCrypt.

pub mod error;
pub mod types;

pub use error::{ClownError, Result};
pub use types::{default_replacers, CharsetKind, CharsetMode, CommonReplacer};
