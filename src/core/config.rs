use serde::{Deserialize, Serialize};

use crate::core::errors::OnboardingError;

/// Argon2id parameters for the password-derived envelope key.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct KdfConfig {
    /// Memory cost in KiB.
    #[serde(default = "KdfConfig::default_memory_kib")]
    pub memory_kib: u32,

    /// Iteration count (time cost).
    #[serde(default = "KdfConfig::default_iterations")]
    pub iterations: u32,

    /// Degree of parallelism.
    #[serde(default = "KdfConfig::default_parallelism")]
    pub parallelism: u32,
}

impl KdfConfig {
    fn default_memory_kib() -> u32 {
        19_456
    }
    fn default_iterations() -> u32 {
        2
    }
    fn default_parallelism() -> u32 {
        1
    }
}

impl Default for KdfConfig {
    fn default() -> Self {
        Self {
            memory_kib: Self::default_memory_kib(),
            iterations: Self::default_iterations(),
            parallelism: Self::default_parallelism(),
        }
    }
}

/// Onboarding configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OnboardingConfig {
    /// Key-derivation parameters for the backup phrase codec.
    #[serde(default)]
    pub kdf: KdfConfig,

    /// Word count for generated backup phrases.
    #[serde(default = "OnboardingConfig::default_phrase_words")]
    pub phrase_words: usize,
}

impl OnboardingConfig {
    fn default_phrase_words() -> usize {
        12
    }

    pub fn from_toml_str(raw: &str) -> Result<Self, OnboardingError> {
        toml::from_str(raw).map_err(|e| OnboardingError::Config(e.to_string()))
    }
}

impl Default for OnboardingConfig {
    fn default() -> Self {
        Self { kdf: KdfConfig::default(), phrase_words: Self::default_phrase_words() }
    }
}
