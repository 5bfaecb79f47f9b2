use clap::Parser;
use keystash::cli::{Cli, Commands};

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Enroll { ref provider } => {
            keystash::cli::commands::enroll::execute(&cli, provider)
        }
        Commands::Set {
            ref provider,
            ref value,
        } => keystash::cli::commands::set::execute(&cli, provider, value.as_deref()),
        Commands::Get { ref provider } => keystash::cli::commands::get::execute(&cli, provider),
        Commands::List => keystash::cli::commands::list::execute(&cli),
        Commands::Delete {
            ref provider,
            force,
        } => keystash::cli::commands::delete::execute(&cli, provider, force),
        Commands::Status => keystash::cli::commands::status::execute(&cli),
        Commands::Completions { ref shell } => {
            keystash::cli::commands::completions::execute(shell)
        }
    };

    if let Err(e) = result {
        keystash::cli::output::error(&e.to_string());
        std::process::exit(1);
    }
}
