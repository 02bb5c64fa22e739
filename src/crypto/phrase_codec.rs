//! Password-based envelope encryption for the identity backup phrase.
//!
//! Envelope layout: `salt(16) || nonce(12) || AES-256-GCM ciphertext`, with
//! the key derived from the password via Argon2id. Every decrypt failure
//! maps to the single [`OnboardingError::Decryption`] value so a wrong
//! password cannot be told apart from a malformed blob.

use aes_gcm::aead::{Aead, KeyInit};
use aes_gcm::{Aes256Gcm, Nonce};
use bip39::{Language, Mnemonic};
use rand::rngs::OsRng;
use rand::RngCore;
use tracing::debug;
use zeroize::Zeroizing;

use crate::core::config::{KdfConfig, OnboardingConfig};
use crate::core::errors::OnboardingError;
use crate::crypto::kdf;
use crate::security::{vec_to_secret, SecretVec};

pub const SALT_LEN: usize = 16;
pub const NONCE_LEN: usize = 12;

/// Outcome of mnemonic validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PhraseValidity {
    pub is_valid: bool,
    /// Present when `is_valid` is false.
    pub reason: Option<String>,
}

/// Encrypts, decrypts, validates, and generates backup phrases.
#[derive(Debug, Clone)]
pub struct BackupPhraseCodec {
    kdf: KdfConfig,
    phrase_words: usize,
}

impl BackupPhraseCodec {
    pub fn new(config: &OnboardingConfig) -> Self {
        Self { kdf: config.kdf.clone(), phrase_words: config.phrase_words }
    }

    /// Check `phrase` against the BIP-39 English grammar and checksum.
    pub fn validate(phrase: &str) -> PhraseValidity {
        match Mnemonic::parse_in_normalized(Language::English, phrase) {
            Ok(_) => PhraseValidity { is_valid: true, reason: None },
            Err(e) => PhraseValidity { is_valid: false, reason: Some(e.to_string()) },
        }
    }

    /// Seal `plaintext` under a key derived from `password`.
    ///
    /// Fresh random salt and nonce per call; two encryptions of the same
    /// input never produce the same envelope.
    pub fn encrypt(&self, plaintext: &[u8], password: &str) -> Result<Vec<u8>, OnboardingError> {
        let mut salt = [0u8; SALT_LEN];
        OsRng.fill_bytes(&mut salt);
        let key = kdf::derive_key(password, &salt, &self.kdf)?;

        let cipher = Aes256Gcm::new_from_slice(&key[..])
            .map_err(|_| OnboardingError::Encryption("invalid key length".to_string()))?;
        let mut nonce_bytes = [0u8; NONCE_LEN];
        OsRng.fill_bytes(&mut nonce_bytes);
        let nonce = Nonce::from_slice(&nonce_bytes);

        let ciphertext = cipher
            .encrypt(nonce, plaintext)
            .map_err(|_| OnboardingError::Encryption("encryption failed".to_string()))?;

        let mut envelope = Vec::with_capacity(SALT_LEN + NONCE_LEN + ciphertext.len());
        envelope.extend_from_slice(&salt);
        envelope.extend_from_slice(&nonce_bytes);
        envelope.extend_from_slice(&ciphertext);
        Ok(envelope)
    }

    /// Open an envelope produced by [`encrypt`](Self::encrypt).
    ///
    /// All failure modes return the same error value.
    pub async fn decrypt(
        &self,
        ciphertext: &[u8],
        password: &str,
    ) -> Result<SecretVec, OnboardingError> {
        if ciphertext.len() < SALT_LEN + NONCE_LEN {
            return Err(OnboardingError::Decryption);
        }
        let (salt, rest) = ciphertext.split_at(SALT_LEN);
        let (nonce_bytes, body) = rest.split_at(NONCE_LEN);

        let key =
            kdf::derive_key(password, salt, &self.kdf).map_err(|_| OnboardingError::Decryption)?;
        let cipher =
            Aes256Gcm::new_from_slice(&key[..]).map_err(|_| OnboardingError::Decryption)?;
        let nonce = Nonce::from_slice(nonce_bytes);

        let plaintext = cipher.decrypt(nonce, body).map_err(|_| OnboardingError::Decryption)?;
        Ok(vec_to_secret(plaintext))
    }

    /// Seal and hex-encode, matching the store's persisted blob form.
    pub fn encrypt_hex(&self, plaintext: &[u8], password: &str) -> Result<String, OnboardingError> {
        Ok(hex::encode(self.encrypt(plaintext, password)?))
    }

    /// Open a hex-encoded envelope. Bad hex fails like any other decrypt.
    pub async fn decrypt_hex(
        &self,
        ciphertext_hex: &str,
        password: &str,
    ) -> Result<SecretVec, OnboardingError> {
        let bytes = hex::decode(ciphertext_hex).map_err(|_| OnboardingError::Decryption)?;
        self.decrypt(&bytes, password).await
    }

    /// Generate a fresh backup phrase from OS entropy.
    pub fn generate_phrase(&self) -> Result<Zeroizing<String>, OnboardingError> {
        let entropy_len = match self.phrase_words {
            12 => 16,
            15 => 20,
            18 => 24,
            21 => 28,
            24 => 32,
            other => {
                return Err(OnboardingError::Config(format!(
                    "unsupported phrase word count: {}",
                    other
                )))
            }
        };
        let mut entropy = Zeroizing::new(vec![0u8; entropy_len]);
        OsRng.fill_bytes(&mut entropy);
        let mnemonic = Mnemonic::from_entropy_in(Language::English, &entropy)
            .map_err(|e| OnboardingError::Mnemonic(e.to_string()))?;
        debug!("generated {}-word backup phrase", self.phrase_words);
        Ok(Zeroizing::new(mnemonic.to_string()))
    }
}

impl Default for BackupPhraseCodec {
    fn default() -> Self {
        Self::new(&OnboardingConfig::default())
    }
}
