//! The ClownCrypt client — cipher and codec composed into one pipeline.

use std::sync::Arc;

use cc_charset::{CharsetRegistry, NamedCharset};
use cc_cipher::{aes_decrypt, aes_encrypt, Algorithm, CipherParams, DEFAULT_SALT};
use cc_core::{default_replacers, CommonReplacer, Result};

/// Construction options. Only `key` and `iv` are required; the rest fall back
/// to salt `pepper`, charset `eb`, and `aes192`.
#[derive(Debug, Clone)]
pub struct ClownOptions {
    pub key: String,
    pub iv: String,
    pub salt: Option<String>,
    pub charset: Option<String>,
    pub algorithm: Option<String>,
    pub replacers: Option<Vec<CommonReplacer>>,
}

impl ClownOptions {
    pub fn new(key: impl Into<String>, iv: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            iv: iv.into(),
            salt: None,
            charset: None,
            algorithm: None,
            replacers: None,
        }
    }

    pub fn with_salt(mut self, salt: impl Into<String>) -> Self {
        self.salt = Some(salt.into());
        self
    }

    pub fn with_charset(mut self, charset: impl Into<String>) -> Self {
        self.charset = Some(charset.into());
        self
    }

    pub fn with_algorithm(mut self, algorithm: impl Into<String>) -> Self {
        self.algorithm = Some(algorithm.into());
        self
    }

    pub fn with_replacers(mut self, replacers: Vec<CommonReplacer>) -> Self {
        self.replacers = Some(replacers);
        self
    }
}

/// Per-call overrides for [`ClownClient::encrypt_with`] and
/// [`ClownClient::decrypt_with`].
#[derive(Debug, Clone, Copy, Default)]
pub struct CallOverrides<'a> {
    pub key: Option<&'a str>,
    pub iv: Option<&'a str>,
    pub salt: Option<&'a str>,
    pub algorithm: Option<Algorithm>,
    pub charset: Option<&'a NamedCharset>,
}

/// Message pipeline: AES on the way in, charset glyphs on the way out.
///
/// Instances are immutable; the key is private and only readable through its
/// accessor.
#[derive(Debug, Clone)]
pub struct ClownClient {
    key: String,
    iv: String,
    salt: String,
    algorithm: Algorithm,
    charset: Arc<NamedCharset>,
    replacers: Vec<CommonReplacer>,
}

impl ClownClient {
    pub fn new(options: ClownOptions, registry: &CharsetRegistry) -> Result<Self> {
        let charset = registry.resolve(options.charset.as_deref().unwrap_or("eb"))?;
        let algorithm = match options.algorithm.as_deref() {
            Some(name) => Algorithm::parse(name)?,
            None => Algorithm::Aes192,
        };
        Ok(Self {
            key: options.key,
            iv: options.iv,
            salt: options.salt.unwrap_or_else(|| DEFAULT_SALT.to_string()),
            algorithm,
            charset,
            replacers: options.replacers.unwrap_or_else(default_replacers),
        })
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn iv(&self) -> &str {
        &self.iv
    }

    pub fn salt(&self) -> &str {
        &self.salt
    }

    pub fn algorithm(&self) -> Algorithm {
        self.algorithm
    }

    pub fn charset(&self) -> &Arc<NamedCharset> {
        &self.charset
    }

    pub fn replacers(&self) -> &[CommonReplacer] {
        &self.replacers
    }

    /// Encrypt a message and disguise the ciphertext as glyphs.
    pub fn encrypt(&self, message: &str) -> Result<String> {
        self.encrypt_with(message, &CallOverrides::default())
    }

    /// Undo [`encrypt`](Self::encrypt): glyphs back to hex, hex back to text.
    pub fn decrypt(&self, message: &str) -> Result<String> {
        self.decrypt_with(message, &CallOverrides::default())
    }

    pub fn encrypt_with(&self, message: &str, overrides: &CallOverrides<'_>) -> Result<String> {
        let hex_ciphertext = aes_encrypt(
            message,
            overrides.key.unwrap_or(&self.key),
            overrides.iv.unwrap_or(&self.iv),
            overrides.algorithm.unwrap_or(self.algorithm),
            overrides.salt.unwrap_or(&self.salt),
        )?;
        let charset = overrides.charset.unwrap_or(self.charset.as_ref());
        charset.encode(&hex_ciphertext)
    }

    pub fn decrypt_with(&self, message: &str, overrides: &CallOverrides<'_>) -> Result<String> {
        let charset = overrides.charset.unwrap_or(self.charset.as_ref());
        let hex_ciphertext = charset.decode(message)?;
        aes_decrypt(
            &hex_ciphertext,
            overrides.key.unwrap_or(&self.key),
            overrides.iv.unwrap_or(&self.iv),
            overrides.algorithm.unwrap_or(self.algorithm),
            overrides.salt.unwrap_or(&self.salt),
        )
    }

    /// Cipher params for file-level encryption with `file_key`, sharing the
    /// instance iv, algorithm, and salt.
    pub(crate) fn file_params(&self, file_key: &str) -> CipherParams {
        CipherParams {
            key: file_key.to_string(),
            iv: self.iv.clone(),
            algorithm: self.algorithm,
            salt: self.salt.clone(),
        }
    }
}
