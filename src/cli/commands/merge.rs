//! `pman merge` — pull entries from another vault, newest wins.

use std::path::Path;

use crate::cli::output;
use crate::cli::{load_settings, open_vault, prompt_password, Cli, SOURCE_PASSWORD_ENV};
use crate::errors::Result;
use crate::vault::{merge, MergeAction, VaultFile};

/// Execute the `merge` command.
pub fn execute(cli: &Cli, other: &Path) -> Result<()> {
    let settings = load_settings(cli)?;
    let mut store = open_vault(cli, &settings)?;

    // The other vault has its own passphrase.
    let other_password = prompt_password("Second vault passphrase", SOURCE_PASSWORD_ENV)?;
    let source = VaultFile::open(other, other_password.as_bytes())?;

    let actions = merge(store.vault_mut(), source.vault())?;

    for action in &actions {
        output::print_merge_action(action);
    }

    let changed = actions
        .iter()
        .filter(|a| !matches!(a, MergeAction::Skip { .. }))
        .count();
    let skipped = actions.len() - changed;

    if changed > 0 {
        store.save()?;
        output::success(&format!(
            "Merged {changed} credential(s) from {} ({skipped} skipped)",
            other.display()
        ));
    } else {
        output::info(&format!("Nothing to merge ({skipped} skipped)"));
    }

    Ok(())
}
