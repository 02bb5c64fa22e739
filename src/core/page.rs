//! Page model for the onboarding wizard.
//!
//! The original flow addressed pages by bare integers; here each page is an
//! explicit enum variant so an out-of-range page is unrepresentable.

/// The eight pages of the onboarding wizard, in forward order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum WizardPage {
    Landing = 0,
    ChoosePath = 1,
    DataControl = 2,
    EnterPassword = 3,
    CreateIdentity = 4,
    WriteDownKey = 5,
    ConfirmKey = 6,
    EnterEmail = 7,
}

impl WizardPage {
    /// Numeric index of the page in the forward sequence.
    pub fn index(self) -> u8 {
        self as u8
    }

    pub fn from_index(index: u8) -> Option<Self> {
        match index {
            0 => Some(Self::Landing),
            1 => Some(Self::ChoosePath),
            2 => Some(Self::DataControl),
            3 => Some(Self::EnterPassword),
            4 => Some(Self::CreateIdentity),
            5 => Some(Self::WriteDownKey),
            6 => Some(Self::ConfirmKey),
            7 => Some(Self::EnterEmail),
            _ => None,
        }
    }

    /// Next page in the forward sequence. The email page is terminal for the
    /// forward progression; closing the wizard is driven by the store.
    pub fn next(self) -> Self {
        match self {
            Self::Landing => Self::ChoosePath,
            Self::ChoosePath => Self::DataControl,
            Self::DataControl => Self::EnterPassword,
            Self::EnterPassword => Self::CreateIdentity,
            Self::CreateIdentity => Self::WriteDownKey,
            Self::WriteDownKey => Self::ConfirmKey,
            Self::ConfirmKey => Self::EnterEmail,
            Self::EnterEmail => Self::EnterEmail,
        }
    }
}

/// Which branch the user picked on the choose-path page. The page keeps a
/// single numeric position; only its sub-rendering is keyed by this choice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PathChoice {
    /// Create a brand-new identity (the default branch).
    #[default]
    Create,
    /// Restore an identity from an existing backup phrase.
    Restore,
}
