//! Thin AES-CBC wrapper — the external cipher collaborator.
//!
//! Keys are derived with scrypt (N = 2^14, r = 8, p = 1) from a passphrase
//! and salt; the 16-byte IV buffer is filled by repeating the IV string's
//! bytes. Ciphertext travels as lowercase hex. Nothing here is authenticated;
//! the layer above provides obfuscation, not integrity.

use aes::cipher::block_padding::Pkcs7;
use aes::cipher::{BlockDecryptMut, BlockEncryptMut, KeyIvInit};
use cc_core::{ClownError, Result};
use serde::{Deserialize, Serialize};

/// Default salt, matching the client's option default.
pub const DEFAULT_SALT: &str = "pepper";

/// Supported AES key sizes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Algorithm {
    Aes128,
    Aes192,
    Aes256,
}

impl Algorithm {
    /// Parse from names like `aes192` or `aes-192-cbc`; the digits decide.
    pub fn parse(name: &str) -> Result<Self> {
        let digits: String = name.chars().filter(char::is_ascii_digit).collect();
        match digits.as_str() {
            "128" => Ok(Self::Aes128),
            "192" => Ok(Self::Aes192),
            "256" => Ok(Self::Aes256),
            _ => Err(ClownError::Cipher(format!("unknown algorithm {name:?}"))),
        }
    }

    pub fn key_bits(self) -> usize {
        match self {
            Self::Aes128 => 128,
            Self::Aes192 => 192,
            Self::Aes256 => 256,
        }
    }

    pub fn key_len(self) -> usize {
        self.key_bits() / 8
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::Aes128 => "aes128",
            Self::Aes192 => "aes192",
            Self::Aes256 => "aes256",
        }
    }
}

impl std::fmt::Display for Algorithm {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Everything the wrapper needs for one encrypt or decrypt call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CipherParams {
    pub key: String,
    pub iv: String,
    pub algorithm: Algorithm,
    pub salt: String,
}

impl CipherParams {
    pub fn new(key: impl Into<String>, iv: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            iv: iv.into(),
            algorithm: Algorithm::Aes192,
            salt: DEFAULT_SALT.to_string(),
        }
    }

    pub fn with_algorithm(mut self, algorithm: Algorithm) -> Self {
        self.algorithm = algorithm;
        self
    }

    pub fn with_salt(mut self, salt: impl Into<String>) -> Self {
        self.salt = salt.into();
        self
    }

    pub fn encrypt(&self, plaintext: &str) -> Result<String> {
        aes_encrypt(plaintext, &self.key, &self.iv, self.algorithm, &self.salt)
    }

    pub fn decrypt(&self, hex_ciphertext: &str) -> Result<String> {
        aes_decrypt(hex_ciphertext, &self.key, &self.iv, self.algorithm, &self.salt)
    }
}

fn derive_key(key: &str, salt: &str, len: usize) -> Result<Vec<u8>> {
    let params = scrypt::Params::new(14, 8, 1, len)
        .map_err(|e| ClownError::Cipher(format!("bad scrypt params: {e}")))?;
    let mut derived = vec![0u8; len];
    scrypt::scrypt(key.as_bytes(), salt.as_bytes(), &params, &mut derived)
        .map_err(|e| ClownError::Cipher(format!("key derivation failed: {e}")))?;
    Ok(derived)
}

fn fill_iv(iv: &str) -> [u8; 16] {
    let mut buf = [0u8; 16];
    let bytes = iv.as_bytes();
    if bytes.is_empty() {
        return buf;
    }
    for (i, slot) in buf.iter_mut().enumerate() {
        *slot = bytes[i % bytes.len()];
    }
    buf
}

fn encrypt_blocks<E>(key: &[u8], iv: &[u8], msg: &[u8]) -> Result<Vec<u8>>
where
    E: KeyIvInit + BlockEncryptMut,
{
    let encryptor = E::new_from_slices(key, iv)
        .map_err(|e| ClownError::Cipher(format!("bad key/iv length: {e}")))?;
    Ok(encryptor.encrypt_padded_vec_mut::<Pkcs7>(msg))
}

fn decrypt_blocks<D>(key: &[u8], iv: &[u8], ciphertext: &[u8]) -> Result<Vec<u8>>
where
    D: KeyIvInit + BlockDecryptMut,
{
    let decryptor = D::new_from_slices(key, iv)
        .map_err(|e| ClownError::Cipher(format!("bad key/iv length: {e}")))?;
    decryptor
        .decrypt_padded_vec_mut::<Pkcs7>(ciphertext)
        .map_err(|e| ClownError::Cipher(format!("decryption failed: {e}")))
}

/// Encrypt `plaintext`, returning lowercase hex ciphertext.
pub fn aes_encrypt(
    plaintext: &str,
    key: &str,
    iv: &str,
    algorithm: Algorithm,
    salt: &str,
) -> Result<String> {
    let derived = derive_key(key, salt, algorithm.key_len())?;
    let iv = fill_iv(iv);
    let ciphertext = match algorithm {
        Algorithm::Aes128 => {
            encrypt_blocks::<cbc::Encryptor<aes::Aes128>>(&derived, &iv, plaintext.as_bytes())?
        }
        Algorithm::Aes192 => {
            encrypt_blocks::<cbc::Encryptor<aes::Aes192>>(&derived, &iv, plaintext.as_bytes())?
        }
        Algorithm::Aes256 => {
            encrypt_blocks::<cbc::Encryptor<aes::Aes256>>(&derived, &iv, plaintext.as_bytes())?
        }
    };
    Ok(hex::encode(ciphertext))
}

/// Decrypt hex ciphertext produced by [`aes_encrypt`].
pub fn aes_decrypt(
    hex_ciphertext: &str,
    key: &str,
    iv: &str,
    algorithm: Algorithm,
    salt: &str,
) -> Result<String> {
    let ciphertext = hex::decode(hex_ciphertext)
        .map_err(|e| ClownError::Cipher(format!("ciphertext is not hex: {e}")))?;
    let derived = derive_key(key, salt, algorithm.key_len())?;
    let iv = fill_iv(iv);
    let plaintext = match algorithm {
        Algorithm::Aes128 => {
            decrypt_blocks::<cbc::Decryptor<aes::Aes128>>(&derived, &iv, &ciphertext)?
        }
        Algorithm::Aes192 => {
            decrypt_blocks::<cbc::Decryptor<aes::Aes192>>(&derived, &iv, &ciphertext)?
        }
        Algorithm::Aes256 => {
            decrypt_blocks::<cbc::Decryptor<aes::Aes256>>(&derived, &iv, &ciphertext)?
        }
    };
    Ok(String::from_utf8(plaintext)?)
}
