//! Read model pushed by the external account store.

/// Snapshot of the externally owned account state, delivered to the wizard
/// on every store update.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StoreSnapshot {
    pub account_created: bool,
    pub storage_connected: bool,
    pub core_connected: bool,
    pub prompted_for_email: bool,
    /// Hex-encoded encrypted backup phrase blob. The format is owned by the
    /// wallet layer; the wizard only hands it to the codec.
    pub encrypted_backup_phrase: Option<String>,
}

impl StoreSnapshot {
    /// True when every confirmation required to close the wizard holds.
    pub fn all_confirmed(&self) -> bool {
        self.account_created
            && self.storage_connected
            && self.core_connected
            && self.prompted_for_email
    }
}
