use clap::Parser;
use pman::cli::{Cli, Commands};

fn main() {
    let cli = Cli::parse();

    pman::logging::init(cli.verbose);

    // No core dumps: they would contain decrypted credentials.
    if let Err(e) = pman::cli::hardening::disable_core_dumps() {
        pman::cli::output::warning(&format!("could not disable core dumps: {e}"));
    }

    let result = match cli.command {
        Commands::Init { ref path } => pman::cli::commands::init::execute(&cli, path),
        Commands::List => pman::cli::commands::list::execute(&cli),
        Commands::Set {
            ref name,
            ref username,
            ref description,
            ref fields,
        } => pman::cli::commands::set::execute(
            &cli,
            name,
            username.as_deref(),
            description.as_deref(),
            fields,
        ),
        Commands::Get { ref name } => pman::cli::commands::get::execute(&cli, name),
        Commands::Search { ref substr } => pman::cli::commands::search::execute(&cli, substr),
        Commands::Remove { ref name, force } => {
            pman::cli::commands::remove::execute(&cli, name, force)
        }
        Commands::Rekey => pman::cli::commands::rekey::execute(&cli),
        Commands::Merge { ref other } => pman::cli::commands::merge::execute(&cli, other),
    };

    if let Err(e) = result {
        pman::cli::output::error(&e.to_string());
        std::process::exit(1);
    }
}
