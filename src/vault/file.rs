//! On-disk vault handling.
//!
//! `VaultFile` owns the decrypted `Vault` for one file together with the
//! salt and derived key, so edits can be saved without re-running the KDF.

use std::fs::{self, OpenOptions};
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};

use super::format::{self, Unlocked};
use super::store::Vault;
use crate::crypto::{derive_key, make_salt, Salt, VaultKey};
use crate::errors::{PmanError, Result};

/// An open vault file.
pub struct VaultFile {
    /// Path to the vault file on disk.
    path: PathBuf,

    /// Salt stored at the front of the file.
    salt: Salt,

    /// Key derived from the passphrase and `salt` (zeroized on drop).
    key: VaultKey,

    /// Decrypted credentials.
    vault: Vault,
}

impl VaultFile {
    // ------------------------------------------------------------------
    // Construction
    // ------------------------------------------------------------------

    /// Create a new, empty vault file at `path`.
    ///
    /// Fails with `VaultAlreadyExists` if anything is already there.
    pub fn create(path: &Path, passphrase: &[u8]) -> Result<Self> {
        if path.exists() {
            return Err(PmanError::VaultAlreadyExists(path.to_path_buf()));
        }

        let salt = make_salt();
        let key = derive_key(passphrase, &salt)?;
        let vault = format::create_vault();

        let bytes = format::seal(&vault, &key, &salt)?;
        create_vault_file(path, &bytes)?;

        Ok(Self {
            path: path.to_path_buf(),
            salt,
            key,
            vault,
        })
    }

    /// Open and decrypt an existing vault file.
    pub fn open(path: &Path, passphrase: &[u8]) -> Result<Self> {
        let bytes = read_vault_file(path)?;
        let Unlocked { vault, salt, key } = format::unlock(&bytes, passphrase)?;

        tracing::debug!(path = %path.display(), credentials = vault.len(), "opened vault");
        Ok(Self {
            path: path.to_path_buf(),
            salt,
            key,
            vault,
        })
    }

    // ------------------------------------------------------------------
    // Persistence
    // ------------------------------------------------------------------

    /// Encrypt the current contents and write them atomically.
    pub fn save(&self) -> Result<()> {
        let bytes = format::seal(&self.vault, &self.key, &self.salt)?;
        write_vault_file(&self.path, &bytes)
    }

    /// Switch to a new passphrase and a fresh salt, rewriting the file.
    ///
    /// The handle is only updated once the new file is on disk.
    pub fn rekey(&mut self, new_passphrase: &[u8]) -> Result<()> {
        let salt = make_salt();
        let key = derive_key(new_passphrase, &salt)?;
        let bytes = format::seal(&self.vault, &key, &salt)?;
        write_vault_file(&self.path, &bytes)?;

        self.salt = salt;
        self.key = key;
        Ok(())
    }

    // ------------------------------------------------------------------
    // Accessors
    // ------------------------------------------------------------------

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn salt(&self) -> &Salt {
        &self.salt
    }

    pub fn vault(&self) -> &Vault {
        &self.vault
    }

    /// Mutable access to the credentials; call `save` to persist.
    pub fn vault_mut(&mut self) -> &mut Vault {
        &mut self.vault
    }
}

// ---------------------------------------------------------------------------
// Raw file I/O
// ---------------------------------------------------------------------------

/// Read a vault file's bytes.
pub fn read_vault_file(path: &Path) -> Result<Vec<u8>> {
    match fs::read(path) {
        Ok(bytes) => Ok(bytes),
        Err(e) if e.kind() == ErrorKind::NotFound => {
            Err(PmanError::VaultNotFound(path.to_path_buf()))
        }
        Err(e) => Err(e.into()),
    }
}

/// Write a vault file **atomically**.
///
/// The bytes go to a temp file in the same directory which is then
/// renamed over `path`, so readers never see a half-written vault.
pub fn write_vault_file(path: &Path, bytes: &[u8]) -> Result<()> {
    let parent = match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    };
    let tmp_path = parent.join(format!(
        ".{}.tmp",
        path.file_name().unwrap_or_default().to_string_lossy()
    ));

    let mut file = owner_only_options().create(true).truncate(true).open(&tmp_path)?;
    file.write_all(bytes)?;
    file.sync_all()?;
    drop(file);

    fs::rename(&tmp_path, path)?;
    tracing::debug!(path = %path.display(), bytes = bytes.len(), "wrote vault file");
    Ok(())
}

/// Write a vault file that must not exist yet.
pub fn create_vault_file(path: &Path, bytes: &[u8]) -> Result<()> {
    let mut file = match owner_only_options().create_new(true).open(path) {
        Ok(f) => f,
        Err(e) if e.kind() == ErrorKind::AlreadyExists => {
            return Err(PmanError::VaultAlreadyExists(path.to_path_buf()));
        }
        Err(e) => return Err(e.into()),
    };
    file.write_all(bytes)?;
    file.sync_all()?;
    tracing::debug!(path = %path.display(), bytes = bytes.len(), "created vault file");
    Ok(())
}

/// Write-only options; on Unix new files are created with mode 0600.
fn owner_only_options() -> OpenOptions {
    let mut opts = OpenOptions::new();
    opts.write(true);
    #[cfg(unix)]
    {
        use std::os::unix::fs::OpenOptionsExt;
        opts.mode(0o600);
    }
    opts
}
