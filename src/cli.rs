use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "hackbright")]
#[command(about = "A front end for the Hackbright students, projects and grades database")]
#[command(version)]
pub struct Cli {
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    #[arg(long, value_name = "PATH", help = "Database file to use instead of the configured one")]
    pub database: Option<PathBuf>,

    #[arg(short, long)]
    pub debug: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Start the interactive prompt (default)
    Repl,

    /// Run a single console command and exit
    Exec(ExecArgs),

    /// Create the students, projects and grades tables
    Init,

    /// Configuration management
    Config(ConfigArgs),
}

#[derive(Args)]
pub struct ExecArgs {
    #[arg(
        required = true,
        trailing_var_arg = true,
        allow_hyphen_values = true,
        help = "Command and arguments, e.g. `student ada123`"
    )]
    pub tokens: Vec<String>,
}

#[derive(Args)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: Option<ConfigCommands>,
}

#[derive(Subcommand, Clone)]
pub enum ConfigCommands {
    /// Show current configuration
    Show,

    /// Reset configuration to defaults
    Reset,
}
