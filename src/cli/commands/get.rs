//! `pman get` — print one credential, password included.

use crate::cli::output;
use crate::cli::{load_settings, open_vault, Cli};
use crate::errors::Result;

/// Execute the `get` command.
pub fn execute(cli: &Cli, name: &str) -> Result<()> {
    let settings = load_settings(cli)?;
    let store = open_vault(cli, &settings)?;

    let cred = store.vault().get(name)?;
    output::print_credential(name, cred);

    Ok(())
}
