//! The onboarding wizard state machine.
//!
//! Owns the page sequence, delegates submissions to the
//! [`AccountProvisioner`], and reacts to external store updates: the
//! `account_created` false-to-true edge triggers the decrypt-on-reload
//! recovery transition, and the fully confirmed store closes the wizard and
//! wipes the session secrets.

use std::sync::Arc;

use secrecy::{ExposeSecret, SecretString};
use tracing::{debug, error};
use zeroize::Zeroizing;

use crate::core::alert::{Alert, AlertSeverity};
use crate::core::errors::OnboardingError;
use crate::core::gateway::AccountGateway;
use crate::core::page::{PathChoice, WizardPage};
use crate::core::provisioner::AccountProvisioner;
use crate::core::session::WizardSession;
use crate::core::store::StoreSnapshot;
use crate::crypto::phrase_codec::BackupPhraseCodec;

pub struct OnboardingWizard {
    session: WizardSession,
    provisioner: AccountProvisioner,
    codec: BackupPhraseCodec,
    /// Last observed store state; the edge detector compares against it.
    store: StoreSnapshot,
}

impl OnboardingWizard {
    pub fn new(
        gateway: Arc<dyn AccountGateway>,
        codec: BackupPhraseCodec,
        initial_store: StoreSnapshot,
    ) -> Self {
        if initial_store.account_created {
            // The account exists but this session holds no secrets yet: the
            // user refreshed mid-onboarding.
            error!("wizard mounted with account already created");
        }
        Self {
            session: WizardSession::new(),
            provisioner: AccountProvisioner::new(gateway),
            codec,
            store: initial_store,
        }
    }

    // ---- read-only projections -------------------------------------------

    pub fn current_page(&self) -> WizardPage {
        self.session.page()
    }

    pub fn current_alert(&self) -> Option<&Alert> {
        self.session.alert()
    }

    pub fn path_choice(&self) -> PathChoice {
        self.session.path_choice()
    }

    pub fn backup_phrase(&self) -> Option<&str> {
        self.session.backup_phrase()
    }

    pub fn has_password(&self) -> bool {
        self.session.has_password()
    }

    pub fn store(&self) -> &StoreSnapshot {
        &self.store
    }

    /// The modal stays open until the store confirms account creation,
    /// storage, core connectivity, and the email prompt, all at once.
    pub fn is_modal_open(&self) -> bool {
        !self.store.all_confirmed()
    }

    // ---- user-driven transitions ------------------------------------------

    /// Move to the next page. No-op past the email page.
    pub fn advance(&mut self) {
        let next = self.session.page().next();
        self.session.set_page(next);
    }

    /// Direct jump. Always clears the pending alert.
    pub fn set_page(&mut self, page: WizardPage) {
        self.session.set_page(page);
    }

    pub fn choose_create_path(&mut self) {
        self.session.set_path_choice(PathChoice::Create);
        self.session.set_page(WizardPage::ChoosePath);
    }

    pub fn choose_restore_path(&mut self) {
        self.session.set_path_choice(PathChoice::Restore);
        self.session.set_page(WizardPage::ChoosePath);
    }

    /// Back to the start; the path choice resets to the create default.
    pub fn jump_to_landing(&mut self) {
        self.session.set_path_choice(PathChoice::Create);
        self.session.set_page(WizardPage::Landing);
    }

    // ---- provisioning submissions -----------------------------------------

    /// Verify the password pair and ask the wallet layer to generate a new
    /// identity. The password is retained in the session before the call so
    /// the recovery transition can decrypt the persisted phrase later.
    pub async fn submit_create_password(
        &mut self,
        password: &str,
        confirmation: &str,
    ) -> Result<(), OnboardingError> {
        if let Err(err) = AccountProvisioner::validate_create(password, confirmation) {
            self.surface(&err);
            return Err(err);
        }
        self.session.set_password(SecretString::new(password.to_string()));
        self.provisioner.create_account(password, confirmation).await
    }

    /// Validate the phrase and password pair, retain both, and ask the
    /// wallet layer to restore from the phrase.
    pub async fn submit_restore(
        &mut self,
        backup_phrase: &str,
        password: &str,
        confirmation: &str,
    ) -> Result<(), OnboardingError> {
        if let Err(err) = AccountProvisioner::validate_restore(backup_phrase, password, confirmation)
        {
            self.surface(&err);
            return Err(err);
        }
        self.session.set_backup_phrase(Zeroizing::new(backup_phrase.to_string()));
        self.session.set_password(SecretString::new(password.to_string()));
        self.provisioner.restore_account(backup_phrase, password, confirmation).await
    }

    // ---- store-driven transitions -----------------------------------------

    /// Ingest an external store update. Last-write-wins: a stale update
    /// arriving after user navigation is applied as-is.
    pub async fn observe_store(&mut self, next: StoreSnapshot) {
        let prev = std::mem::replace(&mut self.store, next);
        if self.store.all_confirmed() {
            debug!("onboarding confirmed on all fronts, wiping session secrets");
            self.session.wipe_secrets();
            return;
        }
        let account_created = self.store.account_created;
        self.on_account_created_edge(prev.account_created, account_created).await;
    }

    /// Explicit recovery event for the `account_created` false-to-true edge,
    /// callable from any binding layer.
    ///
    /// The wallet layer has persisted the encrypted backup phrase; if this
    /// session still holds the password, decrypt it and resume at identity
    /// creation. Otherwise the session was remounted after a reload, the
    /// secrets are gone, and the user restarts from the landing page. The
    /// fallback is silent: a stale session is expected, not a user error.
    pub async fn on_account_created_edge(&mut self, prev: bool, now: bool) {
        if prev || !now {
            return;
        }
        debug!("account created, checking for a usable password in session state");
        match self.try_recover_phrase().await {
            Ok(phrase) => {
                debug!("backup phrase decrypted, resuming at identity creation");
                self.session.set_backup_phrase(phrase);
                self.session.set_page(WizardPage::CreateIdentity);
            }
            Err(_) => {
                debug!("backup phrase not recoverable, restarting onboarding");
                self.session.set_page(WizardPage::Landing);
            }
        }
    }

    async fn try_recover_phrase(&self) -> Result<Zeroizing<String>, OnboardingError> {
        let ciphertext = self
            .store
            .encrypted_backup_phrase
            .as_deref()
            .ok_or(OnboardingError::Decryption)?;
        let password = self.session.password().ok_or(OnboardingError::Decryption)?;
        let plaintext = self.codec.decrypt_hex(ciphertext, password.expose_secret()).await?;
        let phrase =
            String::from_utf8(plaintext.to_vec()).map_err(|_| OnboardingError::Decryption)?;
        Ok(Zeroizing::new(phrase))
    }

    // ---- page-7 passthroughs ----------------------------------------------

    /// Mail the store's encrypted keychain blob to `email`.
    pub async fn email_keychain_backup(&self, email: &str) -> Result<(), OnboardingError> {
        let blob = self.store.encrypted_backup_phrase.as_deref().ok_or_else(|| {
            OnboardingError::Gateway("no encrypted backup phrase available".to_string())
        })?;
        self.provisioner.gateway().email_keychain_backup(email, blob).await
    }

    pub async fn skip_email_backup(&self) -> Result<(), OnboardingError> {
        self.provisioner.gateway().skip_email_backup().await
    }

    // ------------------------------------------------------------------------

    /// Put a validation error on the alert channel. Gateway and crypto
    /// failures are not alerted here; the store owns their surfacing.
    fn surface(&mut self, err: &OnboardingError) {
        if err.is_validation() {
            self.session.set_alert(AlertSeverity::Danger, err.user_message());
        }
    }
}
