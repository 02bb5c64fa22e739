pub mod alert;
pub mod config;
pub mod errors;
pub mod gateway;
pub mod page;
pub mod provisioner;
pub mod session;
pub mod store;
pub mod wizard;

pub use alert::{Alert, AlertSeverity};
pub use config::{KdfConfig, OnboardingConfig};
pub use errors::OnboardingError;
pub use gateway::AccountGateway;
pub use page::{PathChoice, WizardPage};
pub use provisioner::AccountProvisioner;
pub use session::WizardSession;
pub use store::StoreSnapshot;
pub use wizard::OnboardingWizard;
