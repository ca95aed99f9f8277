use anyhow::Result;
use clap::{Parser, Subcommand};

mod migrate;

/// ecoclean - Community cleanup coordination
#[derive(Parser)]
#[command(name = "ecoclean")]
#[command(about = "Community cleanup events, volunteers and impact reports", long_about = None)]
struct Cli {
    /// Path to configuration file
    #[arg(long, global = true)]
    config: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the HTTP server
    Serve {
        /// Server host address (overrides config file)
        #[arg(long)]
        host: Option<String>,

        /// Server port (overrides config file)
        #[arg(long)]
        port: Option<u16>,
    },
    /// Run database migrations
    Migrate,
    /// Drop database if exists and recreate with migrations
    Reset,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Load configuration
    let config = ecoclean::Config::load(cli.config.clone())?;
    config.validate().map_err(|e| anyhow::anyhow!(e))?;

    // Initialize observability (tracing + logging)
    ecoclean::observability::init_observability(
        "ecoclean",
        env!("CARGO_PKG_VERSION"),
        &config.observability.log_level,
        config.observability.json,
    )?;

    match cli.command {
        Commands::Serve { host, port } => ecoclean::serve(config, host, port).await,
        Commands::Migrate => migrate::migrate(&config).await,
        Commands::Reset => migrate::reset(&config).await,
    }
}
