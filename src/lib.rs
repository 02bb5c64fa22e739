//! Onboarding and account-provisioning core for a cryptographic identity
//! keychain.
//!
//! Models the onboarding wizard of an identity browser: an eight-page flow
//! that creates or restores an identity keychain, protects its backup phrase
//! with a password-derived encryption key, and recovers an interrupted
//! session by decrypting the persisted phrase once the external store
//! reports the account as created.
//!
//! Rendering, routing, keychain derivation math, and persistence live in the
//! host application and are consumed through [`core::AccountGateway`] and
//! [`core::StoreSnapshot`].

pub mod core;
pub mod crypto;
pub mod security;
