//! File export and import for messages and client configuration.
//!
//! A file body is the grammar-serialized record, optionally encrypted
//! (hex, JSON-quoted) and optionally transliterated through the client's
//! charset. Import peels those layers in reverse.

use std::fs;
use std::path::{Path, PathBuf};

use cc_core::{ClownError, Result};
use cc_grammar::{field, ClownRecord};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::client::{ClownClient, ClownOptions};
use cc_charset::CharsetRegistry;

/// On-disk representation of an export.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExportStyle {
    #[default]
    Clown,
    Json,
}

impl ExportStyle {
    pub fn extension(self) -> &'static str {
        match self {
            Self::Clown => "clown",
            Self::Json => "json",
        }
    }
}

/// Options for exporting a message file. Parameter fields are only written
/// when the matching `include_*` flag is set.
#[derive(Debug, Clone, Default)]
pub struct ExportOptions {
    pub style: ExportStyle,
    /// File-level encryption key; the blob is encrypted when set.
    pub encrypt_file: Option<String>,
    /// Transliterate the final blob through the client charset.
    pub encode_in_clown: bool,
    pub include_key: bool,
    pub include_iv: bool,
    pub include_algorithm: bool,
    pub include_salt: bool,
    pub include_charset: bool,
    pub include_replacers: bool,
}

/// Options for exporting client configuration. Everything except the key
/// material toggles default to included.
#[derive(Debug, Clone)]
pub struct ConfigExportOptions {
    pub style: ExportStyle,
    pub encrypt_file: Option<String>,
    pub include_algorithm: bool,
    pub include_salt: bool,
    pub include_charset: bool,
    pub include_replacers: bool,
}

impl Default for ConfigExportOptions {
    fn default() -> Self {
        Self {
            style: ExportStyle::Clown,
            encrypt_file: None,
            include_algorithm: true,
            include_salt: true,
            include_charset: true,
            include_replacers: true,
        }
    }
}

impl ClownClient {
    /// Write an already-encrypted message to `<dir>/<file_name>.<ext>`.
    pub fn export_message(
        &self,
        message: &str,
        dir: &Path,
        file_name: &str,
        options: &ExportOptions,
    ) -> Result<PathBuf> {
        let mut record = ClownRecord::new(file_name);
        if options.include_key {
            record.set(field::KEY, self.key());
        }
        if options.include_iv {
            record.set(field::IV, self.iv());
        }
        if options.include_algorithm {
            record.set(field::ALGORITHM, self.algorithm().name());
        }
        if options.include_salt {
            record.set(field::SALT, self.salt());
        }
        if options.include_charset {
            record.set_stringified(field::CHARSET, self.charset().definition())?;
        }
        if options.include_replacers {
            record.set_stringified(field::COMMON_REPLACERS, &self.replacers().to_vec())?;
        }
        record.set(field::MESSAGE, message);

        self.write_record(&record, dir, file_name, options.style, options.encrypt_file.as_deref(), options.encode_in_clown)
    }

    /// Read a message file written by [`export_message`](Self::export_message).
    pub fn import_message(&self, path: &Path, file_key: Option<&str>) -> Result<ClownRecord> {
        let content = fs::read_to_string(path)?;
        self.parse_import(&content, file_key)
    }

    /// Write this client's configuration (no message).
    pub fn export_config(
        &self,
        dir: &Path,
        file_name: &str,
        options: &ConfigExportOptions,
    ) -> Result<PathBuf> {
        let mut record = ClownRecord::new(file_name);
        record.set(field::KEY, self.key());
        record.set(field::IV, self.iv());
        if options.include_algorithm {
            record.set(field::ALGORITHM, self.algorithm().name());
        }
        if options.include_salt {
            record.set(field::SALT, self.salt());
        }
        if options.include_charset {
            record.set_stringified(field::CHARSET, self.charset().definition())?;
        }
        if options.include_replacers {
            record.set_stringified(field::COMMON_REPLACERS, &self.replacers().to_vec())?;
        }

        self.write_record(&record, dir, file_name, options.style, options.encrypt_file.as_deref(), false)
    }

    /// Rebuild a client from an imported configuration file.
    pub fn import_config(
        &self,
        path: &Path,
        file_key: Option<&str>,
        registry: &CharsetRegistry,
    ) -> Result<ClownClient> {
        let record = self.import_message(path, file_key)?;
        ClownClient::from_record(&record, registry)
    }

    /// Build a client from a configuration record. `key` and `iv` are
    /// required; `algorithm` and `salt` apply when present.
    pub fn from_record(record: &ClownRecord, registry: &CharsetRegistry) -> Result<ClownClient> {
        let key = record.get(field::KEY).ok_or_else(|| {
            ClownError::GrammarParseError("config record is missing the key field".into())
        })?;
        let iv = record.get(field::IV).ok_or_else(|| {
            ClownError::GrammarParseError("config record is missing the iv field".into())
        })?;

        let mut options = ClownOptions::new(key, iv);
        if let Some(algorithm) = record.get(field::ALGORITHM) {
            options = options.with_algorithm(algorithm);
        }
        if let Some(salt) = record.get(field::SALT) {
            options = options.with_salt(salt);
        }
        ClownClient::new(options, registry)
    }

    fn write_record(
        &self,
        record: &ClownRecord,
        dir: &Path,
        file_name: &str,
        style: ExportStyle,
        file_key: Option<&str>,
        encode: bool,
    ) -> Result<PathBuf> {
        let crypt = file_key.map(|key| self.file_params(key));
        let mut content = match style {
            ExportStyle::Clown => cc_grammar::serialize(record, crypt.as_ref())?,
            ExportStyle::Json => {
                let json = record_to_json(record)?;
                match crypt.as_ref() {
                    Some(params) => serde_json::to_string(&params.encrypt(&json)?)?,
                    None => json,
                }
            }
        };
        if encode {
            content = self.charset().encode(&content)?;
        }

        let path = dir.join(format!("{file_name}.{}", style.extension()));
        tracing::debug!(path = %path.display(), style = ?style, "writing export");
        fs::write(&path, content)?;
        Ok(path)
    }

    fn parse_import(&self, content: &str, file_key: Option<&str>) -> Result<ClownRecord> {
        let mut content = content.trim().to_string();

        if !content.is_empty() && self.charset().codec().valid_glyphs(&content) {
            content = self.charset().decode(&content)?;
        }

        if let Some(key) = file_key {
            if cc_grammar::is_hex(&content) {
                let unquoted: String = if content.contains('"') {
                    serde_json::from_str(&content)?
                } else {
                    content.clone()
                };
                content = self.file_params(key).decrypt(&unquoted)?;
            }
        }

        if content.starts_with('{') {
            return record_from_json(&content);
        }
        cc_grammar::deserialize(&content, None)
    }
}

const FILE_NAME_KEY: &str = "fileName";

fn record_to_json(record: &ClownRecord) -> Result<String> {
    let mut map = serde_json::Map::new();
    map.insert(FILE_NAME_KEY.to_string(), Value::String(record.file_name().to_string()));
    for (key, value) in record.defined() {
        map.insert(key.to_string(), Value::String(value.to_string()));
    }
    Ok(serde_json::to_string_pretty(&Value::Object(map))?)
}

fn record_from_json(content: &str) -> Result<ClownRecord> {
    let map: serde_json::Map<String, Value> = serde_json::from_str(content)?;
    let file_name = map
        .get(FILE_NAME_KEY)
        .and_then(Value::as_str)
        .unwrap_or_default()
        .to_string();
    let mut record = ClownRecord::new(file_name);
    for (key, value) in &map {
        if key == FILE_NAME_KEY {
            continue;
        }
        match value {
            Value::String(s) => record.set(key.clone(), s.clone()),
            other => record.set(key.clone(), other.to_string()),
        };
    }
    Ok(record)
}
