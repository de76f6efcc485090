use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

mod commands;

#[derive(Parser)]
#[command(name = "vchat")]
#[command(about = "vchat CLI - open shared video chat sessions", long_about = None)]
struct Cli {
    /// Config file (defaults to ./vchat.toml, then the user config dir)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Backend base address, overrides the config file
    #[arg(long, global = true)]
    http_url: Option<String>,

    /// Real-time socket address, overrides the config file
    #[arg(long, global = true)]
    socket_url: Option<String>,

    /// Log swallowed failures and raise the log level to debug
    #[arg(long, global = true)]
    debug: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the client route table
    Routes,
    /// Resolve a client path and open its view
    Open {
        /// Client path, e.g. /share/<session-id>
        path: String,
        /// Seconds to wait for the background fetches before printing
        #[arg(long, default_value_t = 10)]
        wait_secs: u64,
    },
}

fn init_logging(debug: bool) {
    let level = if debug { "debug" } else { "info" };
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(format!(
            "vchat={level},vchat_cli={level},vchat_application={level},vchat_interaction={level}"
        ))
    });

    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .try_init()
        .ok();
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.debug);

    match cli.command {
        Commands::Routes => commands::routes::list(),
        Commands::Open { path, wait_secs } => {
            let overrides = commands::config::Overrides {
                config_path: cli.config,
                http_url: cli.http_url,
                socket_url: cli.socket_url,
                debug: cli.debug,
            };
            commands::open::run(&path, overrides, wait_secs).await?
        }
    }

    Ok(())
}
