//! Account creation and restoration orchestration.

use std::sync::Arc;

use tracing::{debug, error};

use crate::core::errors::OnboardingError;
use crate::core::gateway::AccountGateway;
use crate::crypto::phrase_codec::BackupPhraseCodec;

/// Validates onboarding input and issues wallet-initialization calls.
///
/// Both operations resolve as soon as the call has been issued; account
/// readiness is reported later through the store, not here.
pub struct AccountProvisioner {
    gateway: Arc<dyn AccountGateway>,
}

impl AccountProvisioner {
    pub fn new(gateway: Arc<dyn AccountGateway>) -> Self {
        Self { gateway }
    }

    /// Check the password pair for account creation. Pure.
    pub fn validate_create(password: &str, confirmation: &str) -> Result<(), OnboardingError> {
        if password != confirmation {
            error!("create_account: password and confirmation do not match");
            return Err(OnboardingError::PasswordMismatch);
        }
        Ok(())
    }

    /// Check the phrase and password pair for restoration. Pure. The phrase
    /// is checked first; a mismatched password is only reported for a phrase
    /// that already parses.
    pub fn validate_restore(
        backup_phrase: &str,
        password: &str,
        confirmation: &str,
    ) -> Result<(), OnboardingError> {
        let validity = BackupPhraseCodec::validate(backup_phrase);
        if !validity.is_valid {
            error!("restore_account: invalid backup phrase entered");
            return Err(OnboardingError::InvalidBackupPhrase {
                reason: validity.reason.unwrap_or_else(|| "unknown".to_string()),
            });
        }
        if password != confirmation {
            error!("restore_account: password and confirmation do not match");
            return Err(OnboardingError::PasswordMismatch);
        }
        Ok(())
    }

    /// Create a brand-new identity protected by `password`. On a validation
    /// failure no external call is made.
    pub async fn create_account(
        &self,
        password: &str,
        confirmation: &str,
    ) -> Result<(), OnboardingError> {
        Self::validate_create(password, confirmation)?;
        debug!("initializing wallet for a new identity");
        self.gateway.initialize_wallet(password, None).await
    }

    /// Restore an identity from an existing backup phrase. On a validation
    /// failure no external call is made.
    pub async fn restore_account(
        &self,
        backup_phrase: &str,
        password: &str,
        confirmation: &str,
    ) -> Result<(), OnboardingError> {
        Self::validate_restore(backup_phrase, password, confirmation)?;
        debug!("initializing wallet from a restored backup phrase");
        self.gateway.initialize_wallet(password, Some(backup_phrase)).await
    }

    pub fn gateway(&self) -> &Arc<dyn AccountGateway> {
        &self.gateway
    }
}
