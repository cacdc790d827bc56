mod cmd;
mod output;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "signup",
    about = "Mergington High School activity signups — serve the API and inspect the directory",
    version,
    propagate_version = true
)]
struct Cli {
    /// YAML or JSON file replacing the built-in activity seed
    #[arg(long, global = true, env = "SIGNUP_SEED")]
    seed: Option<PathBuf>,

    /// Output as JSON
    #[arg(long, global = true, short = 'j')]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the HTTP server
    Serve {
        /// Interface to bind
        #[arg(long, default_value = "0.0.0.0", env = "SIGNUP_HOST")]
        host: String,

        /// Port to listen on (0 = OS-assigned)
        #[arg(long, default_value = "8000", env = "SIGNUP_PORT")]
        port: u16,

        /// Serve /static from this directory instead of the embedded frontend
        #[arg(long, env = "SIGNUP_STATIC_DIR")]
        static_dir: Option<PathBuf>,

        /// Open the browser once the server is listening
        #[arg(long)]
        open: bool,
    },

    /// Print the activities the server would start with
    Activities,
}

fn main() {
    let cli = Cli::parse();

    let default_level = match &cli.command {
        Commands::Serve { .. } => tracing::Level::INFO,
        Commands::Activities => tracing::Level::WARN,
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env().add_directive(default_level.into()),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let seed = cli.seed.as_deref();

    let result = match cli.command {
        Commands::Serve {
            host,
            port,
            static_dir,
            open,
        } => cmd::serve::run(seed, &host, port, static_dir, open),
        Commands::Activities => cmd::activities::run(seed, cli.json),
    };

    if let Err(e) = result {
        // Print the full error chain (anyhow's alternate Display)
        eprintln!("error: {e:#}");
        std::process::exit(1);
    }
}
