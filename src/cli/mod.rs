//! CLI module — Clap argument parser, output helpers, and command implementations.

pub mod commands;
pub mod hardening;
pub mod output;

use std::io::ErrorKind;
use std::path::PathBuf;

use clap::Parser;
use zeroize::Zeroizing;

use crate::config::Settings;
use crate::errors::{PmanError, Result};
use crate::vault::VaultFile;

/// Env var holding the vault passphrase for scripted use.
pub const PASSWORD_ENV: &str = "PMAN_PASSWORD";

/// Env var holding the new passphrase for `rekey`.
pub const NEW_PASSWORD_ENV: &str = "PMAN_NEW_PASSWORD";

/// Env var holding the second vault's passphrase for `merge`.
pub const SOURCE_PASSWORD_ENV: &str = "PMAN_SOURCE_PASSWORD";

/// pman: a single-file encrypted credential store.
#[derive(Parser)]
#[command(name = "pman", about = "Encrypted single-file credential store", version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Vault file to operate on
    #[arg(long, env = "PMAN_VAULT", global = true)]
    pub vault: Option<PathBuf>,

    /// Config file (default: ~/.pman.toml)
    #[arg(long, env = "PMAN_CONFIG", global = true)]
    pub config: Option<PathBuf>,

    /// Print debug logs to stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

/// All available subcommands.
#[derive(clap::Subcommand)]
pub enum Commands {
    /// Create a new empty vault file
    Init {
        /// Where to create the vault
        path: PathBuf,
    },

    /// List all credentials
    List,

    /// Add or replace a credential
    Set {
        /// Credential name (e.g. github)
        name: String,

        /// Username (prompted if omitted)
        #[arg(short, long)]
        username: Option<String>,

        /// Description (prompted if omitted)
        #[arg(short, long)]
        description: Option<String>,

        /// Extra field, may be repeated
        #[arg(short = 'f', long = "field", value_name = "KEY=VALUE", value_parser = parse_field)]
        fields: Vec<(String, String)>,
    },

    /// Show a credential, including its password
    Get {
        /// Credential name
        name: String,
    },

    /// Search credential names (case-insensitive substring)
    Search {
        /// Text to look for; empty matches everything
        substr: String,
    },

    /// Remove a credential
    Remove {
        /// Credential name
        name: String,
        /// Skip confirmation prompt
        #[arg(long)]
        force: bool,
    },

    /// Change the vault passphrase (also generates a new salt)
    Rekey,

    /// Merge another vault into this one, newest entry wins
    Merge {
        /// The other vault file
        other: PathBuf,
    },
}

/// Parse a `KEY=VALUE` argument.
fn parse_field(s: &str) -> std::result::Result<(String, String), String> {
    let (key, value) = s
        .split_once('=')
        .ok_or_else(|| format!("expected KEY=VALUE, got '{s}'"))?;
    if key.is_empty() {
        return Err("field name cannot be empty".into());
    }
    if matches!(key, "created" | "modified") {
        return Err(format!("'{key}' is managed by pman and cannot be set"));
    }
    Ok((key.to_string(), value.to_string()))
}

// ---------------------------------------------------------------------------
// Shared helpers used by multiple commands
// ---------------------------------------------------------------------------

/// Load settings from `--config` / `PMAN_CONFIG`, else `~/.pman.toml`.
pub fn load_settings(cli: &Cli) -> Result<Settings> {
    match &cli.config {
        Some(path) => Settings::load(path),
        None => Settings::load_default(),
    }
}

/// Resolve the vault path: `--vault` / `PMAN_VAULT`, then the config file.
pub fn vault_path(cli: &Cli, settings: &Settings) -> Result<PathBuf> {
    cli.vault
        .clone()
        .or_else(|| settings.vault.clone())
        .ok_or(PmanError::VaultPathNotSet)
}

/// Get an existing vault passphrase: `env_var` if set, else prompt.
///
/// Returns `Zeroizing<String>` so the passphrase is wiped from memory on drop.
pub fn prompt_password(prompt: &str, env_var: &str) -> Result<Zeroizing<String>> {
    if let Ok(pw) = std::env::var(env_var) {
        if !pw.is_empty() {
            return Ok(Zeroizing::new(pw));
        }
    }

    let pw = dialoguer::Password::new()
        .with_prompt(prompt)
        .allow_empty_password(true)
        .interact()
        .map_err(prompt_failed)?;
    Ok(Zeroizing::new(pw))
}

/// Choose a new passphrase, with confirmation and a minimum length.
///
/// Also respects `env_var` for scripted use.
pub fn prompt_new_password(
    prompt: &str,
    env_var: &str,
    min_len: usize,
) -> Result<Zeroizing<String>> {
    if let Ok(pw) = std::env::var(env_var) {
        if !pw.is_empty() {
            if pw.chars().count() < min_len {
                return Err(PmanError::CommandFailed(format!(
                    "passphrase must be at least {min_len} characters"
                )));
            }
            return Ok(Zeroizing::new(pw));
        }
    }

    loop {
        let password = dialoguer::Password::new()
            .with_prompt(prompt)
            .with_confirmation("Confirm passphrase", "Passphrases do not match, try again")
            .interact()
            .map_err(prompt_failed)?;

        if password.chars().count() < min_len {
            output::warning(&format!(
                "Passphrase must be at least {min_len} characters. Try again."
            ));
            continue;
        }

        return Ok(Zeroizing::new(password));
    }
}

/// Resolve the vault path, ask for its passphrase and open it.
pub fn open_vault(cli: &Cli, settings: &Settings) -> Result<VaultFile> {
    let path = vault_path(cli, settings)?;
    let password = prompt_password("Vault passphrase", PASSWORD_ENV)?;
    VaultFile::open(&path, password.as_bytes())
}

/// Map a prompt failure; an interrupted prompt means the user cancelled.
pub(crate) fn prompt_failed(e: dialoguer::Error) -> PmanError {
    match e {
        dialoguer::Error::IO(io) if io.kind() == ErrorKind::Interrupted => PmanError::UserCancelled,
        other => PmanError::CommandFailed(format!("prompt: {other}")),
    }
}
