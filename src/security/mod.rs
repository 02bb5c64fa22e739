pub mod secret;

pub use secret::{string_to_secret, vec_to_secret, SecretVec};
