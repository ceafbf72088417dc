//! In-memory holder for the derived vault key.

use zeroize::{Zeroize, ZeroizeOnDrop};

/// Length of the derived vault key (256 bits, for AES-256).
pub const KEY_LEN: usize = 32;

/// A 32-byte vault key that zeroes its memory when dropped.
///
/// Returned by `derive_key` and cached by `VaultFile` so saving does not
/// have to re-run the KDF.
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct VaultKey {
    bytes: [u8; KEY_LEN],
}

impl VaultKey {
    /// Create a new `VaultKey` from raw bytes.
    pub fn new(bytes: [u8; KEY_LEN]) -> Self {
        Self { bytes }
    }

    /// Access the raw key bytes (e.g. to pass to the cipher).
    pub fn as_bytes(&self) -> &[u8; KEY_LEN] {
        &self.bytes
    }
}

impl std::fmt::Debug for VaultKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("VaultKey(..)")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn debug_does_not_leak_key_bytes() {
        let key = VaultKey::new([0xAB; KEY_LEN]);
        let shown = format!("{key:?}");
        assert_eq!(shown, "VaultKey(..)");
        assert!(!shown.contains("171"));
    }
}
