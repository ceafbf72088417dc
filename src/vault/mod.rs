//! Vault module — credentials, merge, and encrypted persistence.
//!
//! This module provides:
//! - `Credential` records and `Timestamp`s (`credential`)
//! - The in-memory `Vault` with CRUD, search and serialization (`store`)
//! - Last-modified-wins reconciliation of two vaults (`merge`)
//! - The salt + ciphertext container and open/save pipeline (`format`)
//! - `VaultFile`, a vault bound to a file on disk (`file`)

pub mod credential;
pub mod file;
pub mod format;
pub mod merge;
pub mod store;

// Re-export the most commonly used items.
pub use credential::{Credential, CredentialFields, Timestamp};
pub use file::VaultFile;
pub use format::{create_vault, open_vault, pack, rekey, save_vault, unpack};
pub use merge::{merge, MergeAction};
pub use store::Vault;
