pub mod kdf;
pub mod phrase_codec;

pub use self::kdf::derive_key;
pub use self::phrase_codec::{BackupPhraseCodec, PhraseValidity, NONCE_LEN, SALT_LEN};
