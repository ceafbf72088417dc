use std::path::PathBuf;
use thiserror::Error;

/// All errors that can occur in pman.
#[derive(Debug, Error)]
pub enum PmanError {
    // --- Crypto errors ---
    #[error("Encryption failed: {0}")]
    EncryptionFailed(String),

    /// Wrong passphrase and tampered ciphertext are deliberately the same error.
    #[error("Authentication failed — wrong passphrase or corrupted vault")]
    AuthenticationFailed,

    #[error("Key derivation failed: {0}")]
    KeyDerivationFailed(String),

    // --- Vault errors ---
    #[error("Vault not found at {0}")]
    VaultNotFound(PathBuf),

    #[error("Vault already exists at {0}")]
    VaultAlreadyExists(PathBuf),

    #[error("Invalid vault format: {0}")]
    InvalidFormat(String),

    #[error("Credential '{0}' not found")]
    CredentialNotFound(String),

    #[error("Invalid credential name: {0}")]
    InvalidCredentialName(String),

    #[error("No vault selected — set PMAN_VAULT, pass --vault, or set `vault` in the config file")]
    VaultPathNotSet,

    // --- Config errors ---
    #[error("Config file error: {0}")]
    ConfigError(String),

    // --- IO errors ---
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    // --- CLI errors ---
    #[error("Command failed: {0}")]
    CommandFailed(String),

    #[error("Cancelled")]
    UserCancelled,
}

/// Convenience type alias for pman results.
pub type Result<T> = std::result::Result<T, PmanError>;
