//! `pman remove` — delete a credential from the vault.

use dialoguer::Confirm;

use crate::cli::output;
use crate::cli::{load_settings, open_vault, prompt_failed, Cli};
use crate::errors::Result;

/// Execute the `remove` command.
pub fn execute(cli: &Cli, name: &str, force: bool) -> Result<()> {
    let settings = load_settings(cli)?;
    let mut store = open_vault(cli, &settings)?;

    // Fail on a missing name before asking anything.
    let modified = store.vault().get(name)?.modified();

    if !force {
        let confirmed = Confirm::new()
            .with_prompt(format!("Remove '{name}' (last modified {modified})?"))
            .default(false)
            .interact()
            .map_err(prompt_failed)?;

        if !confirmed {
            output::info("Cancelled.");
            return Ok(());
        }
    }

    store.vault_mut().remove(name)?;
    store.save()?;

    output::success(&format!(
        "Removed '{name}' ({} remaining)",
        store.vault().len()
    ));

    Ok(())
}
