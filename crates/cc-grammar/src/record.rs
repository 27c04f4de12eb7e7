//! The ordered key/value record behind the clown grammar.

use cc_core::Result;
use serde::Serialize;

/// Well-known record field names.
pub mod field {
    pub const KEY: &str = "key";
    pub const IV: &str = "iv";
    pub const ALGORITHM: &str = "algorithm";
    pub const SALT: &str = "salt";
    pub const CHARSET: &str = "charset";
    pub const COMMON_REPLACERS: &str = "commonReplacers";
    pub const MESSAGE: &str = "message";
}

/// An ordered mapping from keys to optional string values, carrying the
/// reserved file-name identity.
///
/// Keys with `None` values are dropped on serialization and therefore absent
/// after a round-trip — an accepted lossy edge, not a defect.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClownRecord {
    file_name: String,
    fields: Vec<(String, Option<String>)>,
}

impl ClownRecord {
    pub fn new(file_name: impl Into<String>) -> Self {
        Self { file_name: file_name.into(), fields: Vec::new() }
    }

    pub fn file_name(&self) -> &str {
        &self.file_name
    }

    /// Set a key to a value, replacing in place so insertion order is stable.
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<String>) -> &mut Self {
        self.set_optional(key, Some(value.into()))
    }

    pub fn set_optional(&mut self, key: impl Into<String>, value: Option<String>) -> &mut Self {
        let key = key.into();
        match self.fields.iter_mut().find(|(existing, _)| *existing == key) {
            Some((_, slot)) => *slot = value,
            None => self.fields.push((key, value)),
        }
        self
    }

    /// Set a key to a serde-serializable value: plain strings stay bare,
    /// everything else becomes JSON text.
    pub fn set_stringified<T: Serialize>(&mut self, key: impl Into<String>, value: &T) -> Result<&mut Self> {
        let stringified = match serde_json::to_value(value)? {
            serde_json::Value::String(s) => s,
            other => other.to_string(),
        };
        Ok(self.set(key, stringified))
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|(existing, _)| existing == key)
            .and_then(|(_, value)| value.as_deref())
    }

    pub fn contains(&self, key: &str) -> bool {
        self.fields.iter().any(|(existing, _)| existing == key)
    }

    /// All fields in insertion order, `None` values included.
    pub fn iter(&self) -> impl Iterator<Item = (&str, Option<&str>)> {
        self.fields.iter().map(|(key, value)| (key.as_str(), value.as_deref()))
    }

    /// Only the fields with defined values, in insertion order.
    pub fn defined(&self) -> impl Iterator<Item = (&str, &str)> {
        self.fields
            .iter()
            .filter_map(|(key, value)| value.as_deref().map(|v| (key.as_str(), v)))
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}
