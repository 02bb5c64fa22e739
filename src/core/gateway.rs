//! Seam to the external wallet layer.

use async_trait::async_trait;

use crate::core::errors::OnboardingError;

/// External account capabilities consumed by the wizard.
///
/// `initialize_wallet` is fire-and-forget from the wizard's point of view:
/// its completion is observed through later [`StoreSnapshot`] updates
/// (`account_created`, `encrypted_backup_phrase`), never through the return
/// value.
///
/// [`StoreSnapshot`]: crate::core::store::StoreSnapshot
#[async_trait]
pub trait AccountGateway: Send + Sync {
    /// Derive keychains and persist account state. `backup_phrase` of `None`
    /// means "generate a new identity"; `Some` means "restore from phrase".
    async fn initialize_wallet(
        &self,
        password: &str,
        backup_phrase: Option<&str>,
    ) -> Result<(), OnboardingError>;

    /// Mail the encrypted keychain blob to the user (page 7).
    async fn email_keychain_backup(
        &self,
        email: &str,
        encrypted_backup_phrase: &str,
    ) -> Result<(), OnboardingError>;

    /// Acknowledge the email prompt without sending anything (page 7).
    async fn skip_email_backup(&self) -> Result<(), OnboardingError>;
}
