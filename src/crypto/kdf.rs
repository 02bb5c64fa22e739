//! Password-to-key derivation for the backup phrase envelope.

use argon2::{Algorithm, Argon2, Params, Version};
use zeroize::Zeroizing;

use crate::core::config::KdfConfig;
use crate::core::errors::OnboardingError;

/// Envelope keys are always 256-bit AES keys.
pub const KEY_LEN: usize = 32;

/// Derive a 256-bit envelope key from `password` with Argon2id.
///
/// Deterministic for a given `(password, salt, config)`; the salt must come
/// from the envelope being sealed or opened.
pub fn derive_key(
    password: &str,
    salt: &[u8],
    config: &KdfConfig,
) -> Result<Zeroizing<[u8; KEY_LEN]>, OnboardingError> {
    if salt.len() < 8 {
        return Err(OnboardingError::KeyDerivation("salt must be at least 8 bytes".to_string()));
    }

    let params = Params::new(config.memory_kib, config.iterations, config.parallelism, Some(KEY_LEN))
        .map_err(|e| OnboardingError::KeyDerivation(e.to_string()))?;
    let argon2 = Argon2::new(Algorithm::Argon2id, Version::V0x13, params);

    let mut key = Zeroizing::new([0u8; KEY_LEN]);
    argon2
        .hash_password_into(password.as_bytes(), salt, &mut key[..])
        .map_err(|e| OnboardingError::KeyDerivation(e.to_string()))?;
    Ok(key)
}
