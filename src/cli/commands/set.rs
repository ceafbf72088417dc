//! `pman set` — add or replace a credential.

use std::io::{self, IsTerminal, Read};

use dialoguer::{Input, Password};
use zeroize::Zeroizing;

use crate::cli::output;
use crate::cli::{load_settings, open_vault, prompt_failed, Cli};
use crate::errors::Result;
use crate::vault::CredentialFields;

/// Execute the `set` command.
pub fn execute(
    cli: &Cli,
    name: &str,
    username: Option<&str>,
    description: Option<&str>,
    extra: &[(String, String)],
) -> Result<()> {
    let settings = load_settings(cli)?;
    let mut store = open_vault(cli, &settings)?;
    let interactive = io::stdin().is_terminal();

    // Username and description: flag, else prompt, else empty.
    let username = match username {
        Some(u) => u.to_string(),
        None if interactive => ask("username", "")?,
        None => String::new(),
    };

    // Password: hidden prompt with confirmation, or piped on stdin.
    let password = if interactive {
        Zeroizing::new(
            Password::new()
                .with_prompt("password")
                .with_confirmation("password (again)", "Passwords do not match, try again")
                .allow_empty_password(true)
                .interact()
                .map_err(prompt_failed)?,
        )
    } else {
        let mut buf = Zeroizing::new(String::new());
        io::stdin().read_to_string(&mut buf)?;
        let trimmed = buf.trim_end_matches(['\r', '\n']).len();
        buf.truncate(trimmed);
        buf
    };

    let description = match description {
        Some(d) => d.to_string(),
        None if interactive => ask("description", "")?,
        None => String::new(),
    };

    let mut fields = CredentialFields::new();
    for (key, value) in extra {
        fields.insert(key.clone(), value.clone());
    }
    fields.insert("username".into(), username);
    fields.insert("password".into(), (*password).clone());
    fields.insert("description".into(), description);

    if let Ok(existing) = store.vault().get(name) {
        output::info(&format!(
            "Replacing '{name}' (created {}, last modified {})",
            existing.created(),
            existing.modified()
        ));
    }

    store.vault_mut().set(name, fields)?;
    store.save()?;

    output::success(&format!(
        "Saved '{name}' ({} total)",
        store.vault().len()
    ));

    Ok(())
}

fn ask(prompt: &str, default: &str) -> Result<String> {
    Input::<String>::new()
        .with_prompt(prompt)
        .default(default.to_string())
        .show_default(false)
        .allow_empty(true)
        .interact_text()
        .map_err(prompt_failed)
}
