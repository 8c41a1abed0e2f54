use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use memsim_core::MemsimConfig;
use memsim_core::config::LogConfig;
use tracing_subscriber::EnvFilter;

mod commands;

#[derive(Parser)]
#[command(
    name = "memsim",
    about = "memsim — fixed-partition memory allocation simulator",
    version,
    propagate_version = true,
)]
struct Cli {
    /// Path to memsim.toml (defaults are used when omitted)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Allocate processes into partitions and print the result.
    ///
    /// Sizes are comma-separated, e.g. `--processes 234,417,322,122`.
    Allocate {
        /// Process sizes, in arrival order
        #[arg(short, long, value_delimiter = ',')]
        processes: Vec<u64>,
        /// Partition capacities, in caller order
        #[arg(short = 'P', long, value_delimiter = ',')]
        partitions: Vec<u64>,
        /// First-Fit, Best-Fit or Worst-Fit (default from config)
        #[arg(short, long, conflicts_with = "all")]
        algorithm: Option<String>,
        /// Run all three algorithms
        #[arg(long)]
        all: bool,
        /// Output format
        #[arg(short, long, value_enum, default_value = "text")]
        format: OutputFormat,
    },
    /// Serve the allocation HTTP API.
    Serve {
        /// Bind address (overrides [server].host)
        #[arg(long)]
        host: Option<String>,
        /// Port (overrides [server].port)
        #[arg(long)]
        port: Option<u16>,
    },
}

#[derive(Clone, Copy, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let mut config = MemsimConfig::load(cli.config.as_deref())?;

    init_tracing(&config.log)?;

    match cli.command {
        Commands::Allocate {
            processes,
            partitions,
            algorithm,
            all,
            format,
        } => {
            let request = commands::allocate::Request {
                processes: &processes,
                partitions: &partitions,
                algorithm: algorithm.as_deref(),
                all,
            };
            let out = commands::allocate::run(&request, &config.defaults, format)?;
            print!("{out}");
            Ok(())
        }
        Commands::Serve { host, port } => {
            if let Some(host) = host {
                config.server.host = host;
            }
            if let Some(port) = port {
                config.server.port = port;
            }
            commands::serve::serve(&config.server).await
        }
    }
}

/// Logs go to stderr so `--format json` output stays clean on stdout.
fn init_tracing(log: &LogConfig) -> anyhow::Result<()> {
    let filter = EnvFilter::try_from_default_env().or_else(|_| EnvFilter::try_new(&log.filter))?;
    let builder = tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(filter);

    if log.json {
        builder.json().init();
    } else {
        builder.init();
    }
    Ok(())
}
