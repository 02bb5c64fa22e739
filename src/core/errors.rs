//! Error type for the onboarding core.

/// Errors produced by onboarding operations.
///
/// Validation errors surface on the alert channel and never transition the
/// wizard past the current page. Nothing here is fatal to the process.
#[derive(Debug, thiserror::Error)]
pub enum OnboardingError {
    /// Password and its confirmation differ. No provisioning call is made.
    #[error("password confirmation does not match the password")]
    PasswordMismatch,
    /// Backup phrase failed mnemonic validation.
    #[error("invalid backup phrase: {reason}")]
    InvalidBackupPhrase { reason: String },
    /// Password-to-key derivation failed.
    #[error("key derivation failed: {0}")]
    KeyDerivation(String),
    /// Encrypting the backup phrase failed.
    #[error("encryption failed: {0}")]
    Encryption(String),
    /// Decrypting the backup phrase failed. Wrong password and malformed
    /// ciphertext are deliberately indistinguishable.
    #[error("cannot decrypt backup phrase with this password")]
    Decryption,
    /// Mnemonic generation or parsing failed.
    #[error("mnemonic error: {0}")]
    Mnemonic(String),
    /// Configuration errors.
    #[error("configuration error: {0}")]
    Config(String),
    /// An external gateway call failed. Surfacing these is the store's job.
    #[error("gateway error: {0}")]
    Gateway(String),
}

impl OnboardingError {
    /// True for locally recoverable input errors that belong on the alert
    /// channel.
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::PasswordMismatch | Self::InvalidBackupPhrase { .. })
    }

    /// User-facing message shown on the alert channel for validation errors.
    pub fn user_message(&self) -> String {
        match self {
            Self::PasswordMismatch => {
                "The password confirmation does not match the password you entered.".to_string()
            }
            Self::InvalidBackupPhrase { .. } => {
                "The identity key you entered is not valid.".to_string()
            }
            other => other.to_string(),
        }
    }
}
