//! Single-slot alert channel for the current wizard page.
//!
//! At most one alert is pending at a time; setting a new one replaces the
//! old, and every page transition clears it. There is no queueing.

use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AlertSeverity {
    Danger,
    Warning,
    Info,
    Success,
}

impl AlertSeverity {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Danger => "danger",
            Self::Warning => "warning",
            Self::Info => "info",
            Self::Success => "success",
        }
    }
}

impl fmt::Display for AlertSeverity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A pending status message for the current page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alert {
    pub severity: AlertSeverity,
    pub message: String,
}

impl Alert {
    pub fn new(severity: AlertSeverity, message: impl Into<String>) -> Self {
        Self { severity, message: message.into() }
    }

    pub fn danger(message: impl Into<String>) -> Self {
        Self::new(AlertSeverity::Danger, message)
    }
}
