//! `pman init` — create a new, empty vault file.

use std::path::Path;

use crate::cli::output;
use crate::cli::{load_settings, prompt_new_password, Cli, PASSWORD_ENV};
use crate::errors::{PmanError, Result};
use crate::vault::VaultFile;

/// Execute the `init` command.
pub fn execute(cli: &Cli, path: &Path) -> Result<()> {
    // 1. Refuse early so the user isn't asked for a passphrase for nothing.
    if path.exists() {
        return Err(PmanError::VaultAlreadyExists(path.to_path_buf()));
    }

    // 2. Choose a passphrase (with confirmation).
    let settings = load_settings(cli)?;
    let password = prompt_new_password(
        "Choose vault passphrase",
        PASSWORD_ENV,
        settings.min_password_len,
    )?;

    // 3. Create the vault file (exclusive create, fresh salt).
    let store = VaultFile::create(path, password.as_bytes())?;
    output::success(&format!("Initialized new vault: {}", store.path().display()));

    // 4. Tell the user how to point pman at it.
    let full_path = std::fs::canonicalize(path)?;
    output::tip(&format!(
        "You will want: export PMAN_VAULT={}",
        full_path.display()
    ));

    Ok(())
}
