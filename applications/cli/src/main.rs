/// Reel - command-driven video library
use clap::{Parser, Subcommand};
use reel_cli::{
    build_session,
    config::{OutputFormat, ReelConfig},
    shell::{Mode, Shell},
};
use std::{
    fs::File,
    io::{self, BufReader},
    path::PathBuf,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "reel")]
#[command(about = "Command-driven video library and playlist manager", long_about = None)]
struct Cli {
    /// Configuration file path
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Catalog file (`title | id | tags` per line)
    #[arg(long, global = true)]
    catalog: Option<PathBuf>,

    /// Seed for random play
    #[arg(long, global = true)]
    seed: Option<u64>,

    /// Emit one JSON object per command instead of text
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the interactive shell (default)
    Shell,
    /// Execute commands from a file, one per line
    Run {
        /// Script path
        script: PathBuf,
    },
    /// Print the effective configuration as TOML
    PrintConfig,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let mut config = ReelConfig::load(cli.config.as_deref())?;
    if let Some(catalog) = cli.catalog {
        config.catalog.path = Some(catalog);
    }
    if let Some(seed) = cli.seed {
        config.session.random_seed = Some(seed);
    }
    if cli.json {
        config.output.format = OutputFormat::Json;
    }

    // Initialize tracing (stderr keeps stdout for rendered output)
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| config.log.filter.clone().into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    match cli.command.unwrap_or(Commands::Shell) {
        Commands::Shell => {
            let session = build_session(&config)?;
            let mut shell = Shell::new(session, config.output.format, Mode::Interactive);
            shell.run(io::stdin().lock(), io::stdout().lock())?;
        }
        Commands::Run { script } => {
            let session = build_session(&config)?;
            let input = BufReader::new(File::open(&script)?);
            tracing::info!("Running script {}", script.display());
            let mut shell = Shell::new(session, config.output.format, Mode::Script);
            shell.run(input, io::stdout().lock())?;
        }
        Commands::PrintConfig => {
            print!("{}", config.to_toml()?);
        }
    }

    Ok(())
}
