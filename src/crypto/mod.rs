//! Cryptographic primitives for pman.
//!
//! This module provides:
//! - PBKDF2-HMAC-SHA256 key derivation and salt generation (`kdf`)
//! - AES-256-GCM encryption and decryption (`encryption`)
//! - The zeroize-on-drop `VaultKey` wrapper (`keys`)

pub mod encryption;
pub mod kdf;
pub mod keys;

// Re-export the most commonly used items so callers can write:
//   use crate::crypto::{encrypt, decrypt, derive_key, make_salt};
pub use encryption::{decrypt, encrypt};
pub use kdf::{derive_key, make_salt, Salt, KDF_ITERATIONS, SALT_LEN};
pub use keys::VaultKey;
