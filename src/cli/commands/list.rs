//! `pman list` — display all credentials in a table.

use crate::cli::output;
use crate::cli::{load_settings, open_vault, Cli};
use crate::errors::Result;

/// Execute the `list` command.
pub fn execute(cli: &Cli) -> Result<()> {
    let settings = load_settings(cli)?;
    let store = open_vault(cli, &settings)?;

    let names = store.vault().list();
    output::info(&format!("{} credential(s)", names.len()));
    output::print_credentials_table(store.vault(), &names, settings.show_age);

    if names.is_empty() {
        output::tip("Run `pman set <NAME>` to add your first credential.");
    }

    Ok(())
}
