//! `pman rekey` — change the vault passphrase.
//!
//! Opens the vault with the current passphrase, generates a new salt,
//! derives a new key from the new passphrase, and rewrites the file
//! atomically.  The credentials themselves are unchanged.

use crate::cli::output;
use crate::cli::{load_settings, open_vault, prompt_new_password, Cli, NEW_PASSWORD_ENV};
use crate::errors::Result;

/// Execute the `rekey` command.
pub fn execute(cli: &Cli) -> Result<()> {
    let settings = load_settings(cli)?;

    // 1. Open the vault with the current passphrase.
    output::info("Enter your current vault passphrase.");
    let mut store = open_vault(cli, &settings)?;

    // 2. Choose the new passphrase.
    output::info("Choose your new vault passphrase.");
    let new_password = prompt_new_password(
        "New vault passphrase",
        NEW_PASSWORD_ENV,
        settings.min_password_len,
    )?;

    // 3. Fresh salt, new key, atomic rewrite.
    store.rekey(new_password.as_bytes())?;

    output::success(&format!(
        "Vault key changed for {} ({} credentials)",
        store.path().display(),
        store.vault().len()
    ));

    Ok(())
}
