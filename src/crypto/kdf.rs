//! Password-based key derivation using PBKDF2-HMAC-SHA256.
//!
//! The iteration count is deliberately high so every passphrase guess
//! costs an attacker the same ~2M HMAC rounds it costs us.  The count is
//! not stored in the vault file, so it is a constant rather than a
//! setting: changing it would make existing vaults unreadable.

use pbkdf2::pbkdf2_hmac;
use rand::RngCore;
use sha2::Sha256;

use super::keys::{VaultKey, KEY_LEN};
use crate::errors::{PmanError, Result};

/// Length of the per-vault salt in bytes.
pub const SALT_LEN: usize = 18;

/// PBKDF2 rounds applied to every vault passphrase.
pub const KDF_ITERATIONS: u32 = 2_000_000;

/// A per-vault random salt.
pub type Salt = [u8; SALT_LEN];

/// Derive the vault key from a passphrase and salt.
///
/// The same passphrase + salt always produce the same key.
pub fn derive_key(passphrase: &[u8], salt: &[u8]) -> Result<VaultKey> {
    derive_key_with_iterations(passphrase, salt, KDF_ITERATIONS)
}

/// Derive a key with an explicit round count.
pub(crate) fn derive_key_with_iterations(
    passphrase: &[u8],
    salt: &[u8],
    iterations: u32,
) -> Result<VaultKey> {
    if iterations < 1 {
        return Err(PmanError::KeyDerivationFailed(
            "PBKDF2 iterations must be at least 1".into(),
        ));
    }
    if salt.is_empty() {
        return Err(PmanError::KeyDerivationFailed("salt cannot be empty".into()));
    }

    tracing::debug!(iterations, salt_len = salt.len(), "deriving vault key");

    let mut key = [0u8; KEY_LEN];
    pbkdf2_hmac::<Sha256>(passphrase, salt, iterations, &mut key);

    tracing::debug!("vault key derived");
    Ok(VaultKey::new(key))
}

/// Generate a cryptographically random salt.
pub fn make_salt() -> Salt {
    let mut salt = [0u8; SALT_LEN];
    rand::rng().fill_bytes(&mut salt);
    salt
}
