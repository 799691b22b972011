//! labcoach CLI — the user-facing command-line interface.

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};

mod commands;

#[derive(Parser)]
#[command(name = "labcoach", version, about = "Science procedure feedback assistant")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Get feedback on a written experimental procedure
    Feedback {
        /// Experiment id (light, carbon-dioxide, chlorophyll)
        #[arg(long)]
        experiment: String,

        /// Read the procedure from a file instead of stdin
        #[arg(long)]
        file: Option<PathBuf>,

        /// Config file path
        #[arg(long)]
        config: Option<PathBuf>,

        /// Print the parsed feedback as JSON
        #[arg(long)]
        json: bool,
    },

    /// List the available experiments
    Experiments,

    /// Show the thinking hints for an experiment
    Hints {
        /// Experiment id (light, carbon-dioxide, chlorophyll)
        #[arg(long)]
        experiment: String,
    },

    /// Create a starter config file
    Init,
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("labcoach=info".parse().unwrap()),
        )
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Feedback {
            experiment,
            file,
            config,
            json,
        } => commands::feedback::execute(experiment, file, config, json).await,
        Commands::Experiments => commands::experiments::execute(),
        Commands::Hints { experiment } => commands::hints::execute(experiment),
        Commands::Init => commands::init::execute(),
    };

    if let Err(e) = result {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}
