//! Copywatch CLI - cw command

use anyhow::Result;
use clap::{Parser, Subcommand};
use cli_lib::{logging, system_config};
use std::path::PathBuf;

mod cmd;

/// Copywatch - copy files to another directory whenever they change
#[derive(Parser)]
#[command(name = "cw")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Config file (default: $COPYWATCH_CONFIG, then the user config directory)
    #[arg(long, global = true, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Add files through prompts, then start watching (default)
    Interactive,
    /// Watch files given on the command line or in watch lists
    Watch {
        /// Watch list to load (repeatable)
        #[arg(long = "list", value_name = "FILE")]
        lists: Vec<PathBuf>,
        /// Source file to watch; pair each with a --dest (repeatable)
        #[arg(long = "file", value_name = "SOURCE")]
        files: Vec<PathBuf>,
        /// Destination directory for the matching --file (repeatable)
        #[arg(long = "dest", value_name = "DIR")]
        dests: Vec<PathBuf>,
        /// Run a single poll cycle and exit
        #[arg(long)]
        once: bool,
        /// Poll interval in milliseconds (overrides config)
        #[arg(long, value_name = "MS")]
        interval_ms: Option<u64>,
    },
    /// View and edit configuration
    Config {
        /// List all values (default)
        #[arg(long)]
        list: bool,
        /// Print one value
        #[arg(long, value_name = "KEY")]
        get: Option<String>,
        /// Set one value
        #[arg(long, num_args = 2, value_names = ["KEY", "VALUE"])]
        set: Option<Vec<String>>,
        /// Print the config file path
        #[arg(long)]
        path: bool,
        /// With --path, write a default config if none exists
        #[arg(long, requires = "path")]
        create: bool,
        /// Print an annotated example config
        #[arg(long)]
        example: bool,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let config_path = system_config::resolve_path(cli.config.as_deref())?;
    let config = system_config::load_from(&config_path)?;

    // Initialize tracing
    let _log_guard = logging::init(&config.logging, cli.verbose)?;

    match cli.command.unwrap_or(Commands::Interactive) {
        Commands::Interactive => cmd::interactive::run(&config).await,
        Commands::Watch { lists, files, dests, once, interval_ms } => {
            let options = cmd::watch::WatchOptions {
                lists,
                files,
                dests,
                once,
                interval_ms,
            };
            cmd::watch::run(&config, options).await
        }
        Commands::Config { list: _, get, set, path, create, example } => {
            if let Some(key) = get {
                cmd::config::run_get(&config, &key)
            } else if let Some(pair) = set {
                cmd::config::run_set(&config, &config_path, &pair[0], &pair[1])
            } else if path {
                cmd::config::run_path(&config_path, create)
            } else if example {
                cmd::config::run_example()
            } else {
                cmd::config::run_list(&config, &config_path)
            }
        }
    }
}
