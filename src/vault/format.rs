//! Binary vault container and the byte-level open/save pipeline.
//!
//! A vault file has this layout:
//!
//! ```text
//! [salt: 18 bytes][nonce: 12 bytes][AES-256-GCM ciphertext + 16-byte tag]
//! ```
//!
//! There is no magic, version or length prefix.  The salt length is fixed
//! and everything after it is the ciphertext produced by
//! `crypto::encrypt`.  Integrity comes solely from the GCM tag.
//!
//! Opening:  `unpack` -> `derive_key` -> `decrypt` -> `Vault::deserialize`
//! Saving:   `Vault::serialize` -> `encrypt` -> `pack`

use zeroize::Zeroizing;

use super::store::Vault;
use crate::crypto::{decrypt, derive_key, encrypt, make_salt, Salt, VaultKey, SALT_LEN};
use crate::errors::{PmanError, Result};

/// Join a salt and ciphertext into file bytes.
pub fn pack(salt: &Salt, ciphertext: &[u8]) -> Vec<u8> {
    let mut buf = Vec::with_capacity(SALT_LEN + ciphertext.len());
    buf.extend_from_slice(salt);
    buf.extend_from_slice(ciphertext);
    tracing::debug!(bytes = buf.len(), "packed vault container");
    buf
}

/// Split file bytes into salt and ciphertext.
///
/// Only the length is checked here; the ciphertext is verified by
/// `decrypt`.
pub fn unpack(bytes: &[u8]) -> Result<(Salt, &[u8])> {
    if bytes.len() < SALT_LEN {
        return Err(PmanError::InvalidFormat(format!(
            "file too small to be a vault ({} bytes, need at least {SALT_LEN})",
            bytes.len()
        )));
    }

    let (salt_bytes, ciphertext) = bytes.split_at(SALT_LEN);
    let mut salt = [0u8; SALT_LEN];
    salt.copy_from_slice(salt_bytes);

    tracing::debug!(ciphertext_bytes = ciphertext.len(), "unpacked vault container");
    Ok((salt, ciphertext))
}

/// Create a new, empty vault.
pub fn create_vault() -> Vault {
    Vault::new()
}

/// Decrypt and decode vault file bytes.
pub fn open_vault(file_bytes: &[u8], passphrase: &[u8]) -> Result<Vault> {
    unlock(file_bytes, passphrase).map(|unlocked| unlocked.vault)
}

/// Encrypt `vault` under a key derived from `passphrase` and `salt`.
pub fn save_vault(vault: &Vault, passphrase: &[u8], salt: &Salt) -> Result<Vec<u8>> {
    let key = derive_key(passphrase, salt)?;
    seal(vault, &key, salt)
}

/// Re-encrypt `vault` under a fresh salt and a new passphrase.
///
/// Returns the new salt and the file bytes; the vault is not touched.
pub fn rekey(vault: &Vault, new_passphrase: &[u8]) -> Result<(Salt, Vec<u8>)> {
    let salt = make_salt();
    let bytes = save_vault(vault, new_passphrase, &salt)?;
    Ok((salt, bytes))
}

/// A decrypted vault along with the salt and key that opened it.
pub(crate) struct Unlocked {
    pub vault: Vault,
    pub salt: Salt,
    pub key: VaultKey,
}

/// `open_vault`, keeping the salt and derived key for later saves.
pub(crate) fn unlock(file_bytes: &[u8], passphrase: &[u8]) -> Result<Unlocked> {
    let (salt, ciphertext) = unpack(file_bytes)?;
    let key = derive_key(passphrase, &salt)?;
    let plaintext = Zeroizing::new(decrypt(&key, ciphertext)?);
    let vault = Vault::deserialize(&plaintext)?;
    Ok(Unlocked { vault, salt, key })
}

/// Encrypt with an already-derived key.
pub(crate) fn seal(vault: &Vault, key: &VaultKey, salt: &Salt) -> Result<Vec<u8>> {
    let plaintext = vault.serialize()?;
    let ciphertext = encrypt(key, &plaintext)?;
    Ok(pack(salt, &ciphertext))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unpack_rejects_short_input() {
        for len in [0, 1, SALT_LEN - 1] {
            let buf = vec![0u8; len];
            let result = unpack(&buf);
            assert!(matches!(result, Err(PmanError::InvalidFormat(_))), "len {len}");
        }
    }

    #[test]
    fn unpack_exact_salt_length_gives_empty_ciphertext() {
        let (salt, ct) = unpack(&[9u8; SALT_LEN]).unwrap();
        assert_eq!(salt, [9u8; SALT_LEN]);
        assert!(ct.is_empty());
    }

    #[test]
    fn pack_then_unpack() {
        let salt = [0x5a; SALT_LEN];
        let packed = pack(&salt, b"ciphertext");
        assert_eq!(&packed[..SALT_LEN], &salt);
        let (s, ct) = unpack(&packed).unwrap();
        assert_eq!(s, salt);
        assert_eq!(ct, b"ciphertext");
    }

    #[test]
    fn seal_uses_given_salt() {
        let key = VaultKey::new([1u8; 32]);
        let salt = [2u8; SALT_LEN];
        let bytes = seal(&Vault::new(), &key, &salt).unwrap();
        assert_eq!(&bytes[..SALT_LEN], &salt);
    }

    #[test]
    fn create_vault_is_empty() {
        assert!(create_vault().is_empty());
    }
}
