//! Colored terminal output helpers.
//!
//! All user-facing output goes through these functions so we get
//! consistent styling across every command.

use comfy_table::{ContentArrangement, Table};
use console::style;

use crate::vault::{Credential, MergeAction, Timestamp, Vault};

/// Print a green success message: "check_mark {msg}"
pub fn success(msg: &str) {
    println!("{} {}", style("\u{2713}").green().bold(), msg);
}

/// Print a red error message: "x_mark {msg}"
pub fn error(msg: &str) {
    eprintln!("{} {}", style("\u{2717}").red().bold(), msg);
}

/// Print a yellow warning: "warning_sign {msg}"
pub fn warning(msg: &str) {
    eprintln!("{} {}", style("\u{26a0}").yellow().bold(), msg);
}

/// Print a blue info message: "info_sign {msg}"
pub fn info(msg: &str) {
    println!("{} {}", style("\u{2139}").blue().bold(), msg);
}

/// Print a dim tip/hint: "arrow {msg}"
pub fn tip(msg: &str) {
    println!("{} {}", style("\u{2192}").dim(), style(msg).dim());
}

/// Print a table of credentials (Name, Username, Description, Age).
///
/// Passwords are never shown here.
pub fn print_credentials_table(vault: &Vault, names: &[String], show_age: bool) {
    if names.is_empty() {
        info("No matching credentials.");
        return;
    }

    let now = Timestamp::now();
    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    if show_age {
        table.set_header(vec!["Name", "Username", "Description", "Age (days)"]);
    } else {
        table.set_header(vec!["Name", "Username", "Description"]);
    }

    for name in names {
        let Ok(cred) = vault.get(name) else {
            continue;
        };
        let mut row = vec![
            name.clone(),
            cred.username().to_string(),
            cred.description().to_string(),
        ];
        if show_age {
            row.push(cred.modified().age_days(now).to_string());
        }
        table.add_row(row);
    }

    println!("{table}");
}

/// Print every field of one credential, password included.
pub fn print_credential(name: &str, cred: &Credential) {
    println!("{}", style(name).bold());
    println!("  {:<12} {}", style("username:").dim(), cred.username());
    println!("  {:<12} {}", style("password:").dim(), cred.password());
    println!("  {:<12} {}", style("description:").dim(), cred.description());
    for (key, value) in cred.extra_fields() {
        println!("  {:<12} {}", style(format!("{key}:")).dim(), value);
    }
    println!("  {:<12} {}", style("created:").dim(), cred.created());
    println!("  {:<12} {}", style("modified:").dim(), cred.modified());
}

/// Print one merge decision.
pub fn print_merge_action(action: &MergeAction) {
    let label = match action {
        MergeAction::Add { .. } => style("add ").green().bold(),
        MergeAction::Update { .. } => style("pull").cyan().bold(),
        MergeAction::Skip { .. } => style("skip").dim(),
    };
    match action.timestamps() {
        None => println!("  {label} {}", action.name()),
        Some((local, other)) => println!(
            "  {label} {} {}",
            action.name(),
            style(format!("[local={local}, other={other}]")).dim()
        ),
    }
}
