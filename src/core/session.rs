//! Volatile onboarding session state.

use secrecy::SecretString;
use zeroize::Zeroizing;

use crate::core::alert::{Alert, AlertSeverity};
use crate::core::page::{PathChoice, WizardPage};

/// In-memory wizard state. The password and backup phrase live only here,
/// are never serialized or logged, and are wiped when the wizard reaches the
/// closed terminal state. Intentionally no `Debug`/`Serialize`.
pub struct WizardSession {
    page: WizardPage,
    path_choice: PathChoice,
    password: Option<SecretString>,
    backup_phrase: Option<Zeroizing<String>>,
    alert: Option<Alert>,
}

impl WizardSession {
    pub fn new() -> Self {
        Self {
            page: WizardPage::Landing,
            path_choice: PathChoice::default(),
            password: None,
            backup_phrase: None,
            alert: None,
        }
    }

    pub fn page(&self) -> WizardPage {
        self.page
    }

    /// Move to `page`. Every page transition drops the pending alert.
    pub fn set_page(&mut self, page: WizardPage) {
        self.page = page;
        self.alert = None;
    }

    pub fn path_choice(&self) -> PathChoice {
        self.path_choice
    }

    pub fn set_path_choice(&mut self, choice: PathChoice) {
        self.path_choice = choice;
    }

    pub fn alert(&self) -> Option<&Alert> {
        self.alert.as_ref()
    }

    /// Replace the pending alert. One alert at a time, no queueing.
    pub fn set_alert(&mut self, severity: AlertSeverity, message: impl Into<String>) {
        self.alert = Some(Alert::new(severity, message));
    }

    pub fn clear_alert(&mut self) {
        self.alert = None;
    }

    pub fn password(&self) -> Option<&SecretString> {
        self.password.as_ref()
    }

    pub fn set_password(&mut self, password: SecretString) {
        self.password = Some(password);
    }

    pub fn has_password(&self) -> bool {
        self.password.is_some()
    }

    pub fn backup_phrase(&self) -> Option<&str> {
        self.backup_phrase.as_deref().map(String::as_str)
    }

    pub fn set_backup_phrase(&mut self, phrase: Zeroizing<String>) {
        self.backup_phrase = Some(phrase);
    }

    /// Drop all session secrets. Called when the wizard closes for good.
    pub fn wipe_secrets(&mut self) {
        self.password = None;
        self.backup_phrase = None;
    }
}

impl Default for WizardSession {
    fn default() -> Self {
        Self::new()
    }
}
