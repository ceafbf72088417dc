//! `pman search` — list credentials whose name contains a substring.

use crate::cli::output;
use crate::cli::{load_settings, open_vault, Cli};
use crate::errors::Result;

/// Execute the `search` command.
pub fn execute(cli: &Cli, substr: &str) -> Result<()> {
    let settings = load_settings(cli)?;
    let store = open_vault(cli, &settings)?;

    let names = store.vault().search(substr);
    output::info(&format!("{} match(es) for '{substr}'", names.len()));
    output::print_credentials_table(store.vault(), &names, settings.show_age);

    Ok(())
}
