use anyhow::{Context, Result};
use clap::Parser;
use std::io;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use hackbright::cli::{Cli, Commands};
use hackbright::commands::configure::handle_config_command;
use hackbright::config::Config;
use hackbright::storage::Database;
use hackbright::utils::output::print_success;
use hackbright::utils::{AppError, logging, report_error};
use hackbright::Session;

fn main() -> ExitCode {
    let cli = Cli::parse();
    logging::init(cli.debug);

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            match err.downcast_ref::<AppError>() {
                Some(app_err) => report_error(app_err),
                None => eprintln!("{:#}", err),
            }
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<()> {
    // Ensure configuration exists and resolve its path
    let config_path = match &cli.config {
        Some(path) => path.clone(),
        None => {
            Config::ensure_config_exists()?;
            Config::config_file_path()
        }
    };

    match cli.command.unwrap_or(Commands::Repl) {
        // Does not load the config first, so `config reset` works on a broken file
        Commands::Config(args) => {
            handle_config_command(&config_path, cli.database, args.command)?;
        }
        Commands::Init => {
            let config = load_config(&config_path, cli.database)?;
            let db = Database::open(&config.database.path)?;
            db.init_schema()?;
            db.close()?;
            print_success(&format!(
                "Database ready: {}",
                config.database.path.display()
            ));
        }
        Commands::Exec(args) => {
            let config = load_config(&config_path, cli.database)?;
            let db = open_database(&config)?;
            Session::from_config(&config).exec(db, &args.tokens, &mut io::stdout())?;
        }
        Commands::Repl => {
            let config = load_config(&config_path, cli.database)?;
            let db = open_database(&config)?;
            let result = Session::from_config(&config).run(&db, io::stdin().lock(), io::stdout());
            let closed = db.close();
            result?;
            closed?;
        }
    }

    Ok(())
}

fn load_config(config_path: &Path, database: Option<PathBuf>) -> Result<Config> {
    Ok(Config::load_custom(config_path)?.with_overrides(database))
}

fn open_database(config: &Config) -> Result<Database> {
    let db = Database::open(&config.database.path)?;
    if config.database.create_schema {
        db.init_schema()
            .with_context(|| format!("Failed to prepare {}", config.database.path.display()))?;
    }
    Ok(db)
}
