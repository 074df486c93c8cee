#![forbid(unsafe_code)]

//! Maester CLI
//!
//! Command-line directory of the houses and characters of Westeros,
//! backed by the public Ice and Fire API.

use clap::{Parser, Subcommand};

use maester_cli::{commands, MaesterConfig};
use maester_core::{CharacterId, Page};

/// A directory of the houses and characters of Westeros.
#[derive(Parser, Debug)]
#[command(name = "maester")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Configuration file path
    #[arg(short, long, global = true, env = "MAESTER_CONFIG")]
    config: Option<String>,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List a page of houses with their sworn members
    Houses {
        /// 1-based page number (values below 1 are treated as 1)
        #[arg(short, long, default_value_t = 1)]
        page: u32,
    },
    /// Show a character's full record
    Character {
        /// Numeric character id, as shown on house member lines
        id: u64,
    },
    /// Configuration file operations
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand, Debug)]
enum ConfigAction {
    /// Show the resolved config file path
    Path,
    /// Create a default configuration file
    Init {
        /// Target file (defaults to the platform config path)
        #[arg(short, long)]
        file: Option<String>,
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

#[tokio::main]
async fn main() {
    let args = Args::parse();
    init_tracing(args.verbose);

    if let Err(e) = run(args).await {
        // Single user-facing error surface; messages pass through verbatim.
        eprintln!("Something went wrong: {e}");
        std::process::exit(1);
    }
}

async fn run(args: Args) -> maester_core::Result<()> {
    match args.command {
        Command::Houses { page } => {
            let config = MaesterConfig::load(args.config.as_deref())?;
            commands::houses(&config, Page::new(page)).await
        }
        Command::Character { id } => {
            let config = MaesterConfig::load(args.config.as_deref())?;
            commands::character(&config, CharacterId::new(id)).await
        }
        Command::Config { action } => match action {
            ConfigAction::Path => commands::config_path(args.config.as_deref()),
            ConfigAction::Init { file, force } => {
                commands::config_init(file.as_deref(), force)
            }
        },
    }
}
