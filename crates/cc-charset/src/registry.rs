//! Explicit charset registry — passed by reference, no process-wide state.

use std::collections::HashMap;
use std::sync::Arc;

use cc_core::{ClownError, Result};

use crate::defaults;
use crate::NamedCharset;

/// Name/alias lookup over registered charsets. Lookups are case-insensitive
/// and whitespace-trimmed.
#[derive(Debug, Clone, Default)]
pub struct CharsetRegistry {
    charsets: HashMap<String, Arc<NamedCharset>>,
}

impl CharsetRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// A registry seeded with the built-in charsets.
    pub fn with_defaults() -> Self {
        let mut registry = Self::new();
        registry.register(defaults::default_binary());
        registry.register(defaults::default_efficient_binary());
        registry.register(defaults::default_literal());
        registry
    }

    pub fn register(&mut self, charset: NamedCharset) {
        self.charsets.insert(charset.name().to_string(), Arc::new(charset));
    }

    pub fn get(&self, name: &str) -> Option<Arc<NamedCharset>> {
        let needle = name.trim().to_lowercase();
        if let Some(charset) = self.charsets.get(&needle) {
            return Some(Arc::clone(charset));
        }
        self.charsets
            .values()
            .find(|charset| charset.aliases().iter().any(|alias| *alias == needle))
            .cloned()
    }

    /// Like [`get`](Self::get) but failing with `CharsetNotFound`.
    pub fn resolve(&self, name: &str) -> Result<Arc<NamedCharset>> {
        self.get(name).ok_or_else(|| ClownError::CharsetNotFound { name: name.to_string() })
    }

    pub fn remove(&mut self, name: &str) -> bool {
        self.charsets.remove(&name.trim().to_lowercase()).is_some()
    }

    pub fn names(&self) -> Vec<&str> {
        self.charsets.keys().map(String::as_str).collect()
    }

    pub fn len(&self) -> usize {
        self.charsets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.charsets.is_empty()
    }
}
