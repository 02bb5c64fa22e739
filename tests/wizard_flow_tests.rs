//! End-to-end tests for the onboarding wizard: page transitions, alert
//! propagation, provisioning submissions, and the decrypt-on-reload
//! recovery transition.

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use pretty_assertions::assert_eq;

use identity_onboarding::core::{
    AccountGateway, AlertSeverity, KdfConfig, OnboardingConfig, OnboardingError, OnboardingWizard,
    PathChoice, StoreSnapshot, WizardPage,
};
use identity_onboarding::crypto::BackupPhraseCodec;

const VALID_PHRASE: &str =
    "abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon about";

#[derive(Debug, Clone, PartialEq, Eq)]
enum GatewayCall {
    InitializeWallet { password: String, backup_phrase: Option<String> },
    EmailKeychainBackup { email: String, blob: String },
    SkipEmailBackup,
}

/// Records every gateway call; lets tests assert that validation failures
/// never reach the wallet layer.
#[derive(Default)]
struct RecordingGateway {
    calls: Mutex<Vec<GatewayCall>>,
}

impl RecordingGateway {
    fn calls(&self) -> Vec<GatewayCall> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl AccountGateway for RecordingGateway {
    async fn initialize_wallet(
        &self,
        password: &str,
        backup_phrase: Option<&str>,
    ) -> Result<(), OnboardingError> {
        self.calls.lock().unwrap().push(GatewayCall::InitializeWallet {
            password: password.to_string(),
            backup_phrase: backup_phrase.map(str::to_string),
        });
        Ok(())
    }

    async fn email_keychain_backup(
        &self,
        email: &str,
        encrypted_backup_phrase: &str,
    ) -> Result<(), OnboardingError> {
        self.calls.lock().unwrap().push(GatewayCall::EmailKeychainBackup {
            email: email.to_string(),
            blob: encrypted_backup_phrase.to_string(),
        });
        Ok(())
    }

    async fn skip_email_backup(&self) -> Result<(), OnboardingError> {
        self.calls.lock().unwrap().push(GatewayCall::SkipEmailBackup);
        Ok(())
    }
}

fn test_codec() -> BackupPhraseCodec {
    // Light KDF parameters to keep the suite fast.
    let config = OnboardingConfig {
        kdf: KdfConfig { memory_kib: 1024, iterations: 1, parallelism: 1 },
        phrase_words: 12,
    };
    BackupPhraseCodec::new(&config)
}

fn new_wizard() -> (Arc<RecordingGateway>, OnboardingWizard) {
    init_tracing();
    let gateway = Arc::new(RecordingGateway::default());
    let wizard =
        OnboardingWizard::new(gateway.clone(), test_codec(), StoreSnapshot::default());
    (gateway, wizard)
}

fn init_tracing() {
    let _ = tracing_subscriber::fmt().with_env_filter("identity_onboarding=debug").try_init();
}

#[test]
fn fresh_session_starts_at_landing() {
    let (_, wizard) = new_wizard();
    assert_eq!(wizard.current_page(), WizardPage::Landing);
    assert_eq!(wizard.path_choice(), PathChoice::Create);
    assert!(wizard.current_alert().is_none());
    assert!(!wizard.has_password());
    assert!(wizard.is_modal_open());
}

// The restore branch renders as a sub-view of the numeric page 1.
#[test]
fn restore_path_keeps_numeric_page() {
    let (_, mut wizard) = new_wizard();
    wizard.choose_restore_path();
    assert_eq!(wizard.current_page(), WizardPage::ChoosePath);
    assert_eq!(wizard.current_page().index(), 1);
    assert_eq!(wizard.path_choice(), PathChoice::Restore);

    wizard.choose_create_path();
    assert_eq!(wizard.current_page().index(), 1);
    assert_eq!(wizard.path_choice(), PathChoice::Create);
}

// The account-created edge decrypts the persisted phrase with the
// retained password and resumes at identity creation.
#[tokio::test]
async fn recovery_resumes_at_identity_creation() {
    let (gateway, mut wizard) = new_wizard();
    let blob = test_codec().encrypt_hex(VALID_PHRASE.as_bytes(), "correct-pw").unwrap();

    wizard.set_page(WizardPage::EnterPassword);
    wizard.submit_create_password("correct-pw", "correct-pw").await.unwrap();
    assert_eq!(
        gateway.calls(),
        vec![GatewayCall::InitializeWallet {
            password: "correct-pw".to_string(),
            backup_phrase: None
        }]
    );

    wizard
        .observe_store(StoreSnapshot {
            account_created: true,
            encrypted_backup_phrase: Some(blob),
            ..StoreSnapshot::default()
        })
        .await;

    assert_eq!(wizard.current_page(), WizardPage::CreateIdentity);
    assert_eq!(wizard.backup_phrase(), Some(VALID_PHRASE));
    assert!(wizard.current_alert().is_none());
}

// After a reload the password is gone, so the edge falls back to
// the landing page, silently.
#[tokio::test]
async fn reload_falls_back_to_landing() {
    let (_, mut wizard) = new_wizard();
    let blob = test_codec().encrypt_hex(VALID_PHRASE.as_bytes(), "correct-pw").unwrap();

    wizard.set_page(WizardPage::DataControl);
    wizard
        .observe_store(StoreSnapshot {
            account_created: true,
            encrypted_backup_phrase: Some(blob),
            ..StoreSnapshot::default()
        })
        .await;

    assert_eq!(wizard.current_page(), WizardPage::Landing);
    assert!(wizard.current_alert().is_none());
    assert!(wizard.backup_phrase().is_none());
}

// A wrong retained password behaves exactly like a missing one.
#[tokio::test]
async fn recovery_with_wrong_password_falls_back_to_landing() {
    let (_, mut wizard) = new_wizard();
    let blob = test_codec().encrypt_hex(VALID_PHRASE.as_bytes(), "correct-pw").unwrap();

    wizard.submit_create_password("other-pw", "other-pw").await.unwrap();
    wizard
        .observe_store(StoreSnapshot {
            account_created: true,
            encrypted_backup_phrase: Some(blob),
            ..StoreSnapshot::default()
        })
        .await;

    assert_eq!(wizard.current_page(), WizardPage::Landing);
    assert!(wizard.current_alert().is_none());
}

// Password mismatch never reaches the wallet layer.
#[tokio::test]
async fn password_mismatch_alerts_without_provisioning() {
    let (gateway, mut wizard) = new_wizard();

    let err = wizard.submit_create_password("abc", "xyz").await.unwrap_err();
    assert!(matches!(err, OnboardingError::PasswordMismatch));

    let alert = wizard.current_alert().expect("mismatch should raise an alert");
    assert_eq!(alert.severity, AlertSeverity::Danger);
    assert!(alert.message.contains("does not match"));
    assert_eq!(gateway.calls(), vec![]);
    assert!(!wizard.has_password());
}

#[tokio::test]
async fn restore_with_invalid_phrase_alerts_without_provisioning() {
    let (gateway, mut wizard) = new_wizard();

    let err = wizard.submit_restore("definitely not a mnemonic", "pw", "pw").await.unwrap_err();
    assert!(matches!(err, OnboardingError::InvalidBackupPhrase { .. }));

    let alert = wizard.current_alert().unwrap();
    assert_eq!(alert.severity, AlertSeverity::Danger);
    assert!(alert.message.contains("not valid"));
    assert_eq!(gateway.calls(), vec![]);
    assert!(wizard.backup_phrase().is_none());
}

#[tokio::test]
async fn restore_passes_validated_phrase_to_gateway() {
    let (gateway, mut wizard) = new_wizard();

    wizard.submit_restore(VALID_PHRASE, "pw", "pw").await.unwrap();
    assert_eq!(
        gateway.calls(),
        vec![GatewayCall::InitializeWallet {
            password: "pw".to_string(),
            backup_phrase: Some(VALID_PHRASE.to_string())
        }]
    );
    assert_eq!(wizard.backup_phrase(), Some(VALID_PHRASE));
    assert!(wizard.has_password());
}

// The modal closes exactly when all four confirmations hold, and
// reopens if any flips back.
#[tokio::test]
async fn modal_visibility_tracks_confirmations() {
    let (_, mut wizard) = new_wizard();
    let confirmed = StoreSnapshot {
        account_created: true,
        storage_connected: true,
        core_connected: true,
        prompted_for_email: true,
        encrypted_backup_phrase: None,
    };

    wizard.observe_store(confirmed.clone()).await;
    assert!(!wizard.is_modal_open());

    for flip in 0..4 {
        let mut snapshot = confirmed.clone();
        match flip {
            0 => snapshot.account_created = false,
            1 => snapshot.storage_connected = false,
            2 => snapshot.core_connected = false,
            _ => snapshot.prompted_for_email = false,
        }
        wizard.observe_store(snapshot).await;
        assert!(wizard.is_modal_open());
        wizard.observe_store(confirmed.clone()).await;
        assert!(!wizard.is_modal_open());
    }
}

#[tokio::test]
async fn closing_the_wizard_wipes_session_secrets() {
    let (_, mut wizard) = new_wizard();
    wizard.submit_create_password("hunter22", "hunter22").await.unwrap();
    assert!(wizard.has_password());

    wizard
        .observe_store(StoreSnapshot {
            account_created: true,
            storage_connected: true,
            core_connected: true,
            prompted_for_email: true,
            encrypted_backup_phrase: None,
        })
        .await;

    assert!(!wizard.has_password());
    assert!(wizard.backup_phrase().is_none());
}

#[tokio::test]
async fn edge_fires_only_on_false_to_true() {
    let (_, mut wizard) = new_wizard();
    wizard.set_page(WizardPage::WriteDownKey);

    // False to true is an edge; with no password it lands back at the start.
    wizard
        .observe_store(StoreSnapshot { account_created: true, ..StoreSnapshot::default() })
        .await;
    assert_eq!(wizard.current_page(), WizardPage::Landing);

    // Already-true to true is not an edge.
    wizard.set_page(WizardPage::WriteDownKey);
    wizard
        .observe_store(StoreSnapshot { account_created: true, ..StoreSnapshot::default() })
        .await;
    assert_eq!(wizard.current_page(), WizardPage::WriteDownKey);

    // Nor is true back to false.
    wizard
        .observe_store(StoreSnapshot { account_created: false, ..StoreSnapshot::default() })
        .await;
    assert_eq!(wizard.current_page(), WizardPage::WriteDownKey);
}

#[test]
fn advance_and_set_page_clear_the_alert() {
    let (_, mut wizard) = new_wizard();

    // Raise an alert, then transition in each of the supported ways.
    futures_block(async {
        let _ = wizard.submit_create_password("a", "b").await;
    });
    assert!(wizard.current_alert().is_some());
    wizard.advance();
    assert!(wizard.current_alert().is_none());

    futures_block(async {
        let _ = wizard.submit_create_password("a", "b").await;
    });
    wizard.set_page(WizardPage::ConfirmKey);
    assert!(wizard.current_alert().is_none());

    futures_block(async {
        let _ = wizard.submit_create_password("a", "b").await;
    });
    wizard.jump_to_landing();
    assert!(wizard.current_alert().is_none());
    assert_eq!(wizard.current_page(), WizardPage::Landing);
    assert_eq!(wizard.path_choice(), PathChoice::Create);
}

#[test]
fn advance_saturates_on_last_page() {
    let (_, mut wizard) = new_wizard();
    wizard.set_page(WizardPage::EnterEmail);
    wizard.advance();
    assert_eq!(wizard.current_page(), WizardPage::EnterEmail);
}

#[tokio::test]
async fn email_backup_forwards_the_stored_blob() {
    let (gateway, mut wizard) = new_wizard();
    wizard
        .observe_store(StoreSnapshot {
            encrypted_backup_phrase: Some("deadbeef".to_string()),
            ..StoreSnapshot::default()
        })
        .await;

    wizard.email_keychain_backup("user@example.com").await.unwrap();
    wizard.skip_email_backup().await.unwrap();

    assert_eq!(
        gateway.calls(),
        vec![
            GatewayCall::EmailKeychainBackup {
                email: "user@example.com".to_string(),
                blob: "deadbeef".to_string()
            },
            GatewayCall::SkipEmailBackup,
        ]
    );
}

#[tokio::test]
async fn email_backup_without_blob_is_a_gateway_error() {
    let (gateway, wizard) = new_wizard();
    let err = wizard.email_keychain_backup("user@example.com").await.unwrap_err();
    assert!(matches!(err, OnboardingError::Gateway(_)));
    assert_eq!(gateway.calls(), vec![]);
}

/// Run a short future to completion on a throwaway runtime; used by the
/// synchronous transition tests that also need one async submission.
fn futures_block<F: std::future::Future<Output = ()>>(fut: F) {
    tokio::runtime::Builder::new_current_thread().build().unwrap().block_on(fut);
}
