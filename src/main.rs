use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use mealmate_grocery::ExportFormat;

/// mealmate - Grocery lists from your meal plan
#[derive(Parser)]
#[command(name = "mealmate")]
#[command(about = "Aisle-grouped grocery lists from planned meals", long_about = None)]
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
    /// Build a grocery list from a request JSON file and print it
    Generate {
        /// Request JSON file, reads stdin when omitted
        #[arg(long)]
        input: Option<PathBuf>,

        /// Output format: text, csv, json or share
        #[arg(long, default_value = "text")]
        format: ExportFormat,

        /// Title printed above the list
        #[arg(long, default_value = "Grocery List")]
        title: String,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Load configuration
    let config = mealmate::Config::load(cli.config.clone())?;
    config.validate().map_err(|e| anyhow::anyhow!(e))?;

    mealmate::observability::init_observability(
        "mealmate",
        env!("CARGO_PKG_VERSION"),
        &config.logging,
    )?;

    match cli.command {
        Commands::Serve { host, port } => mealmate::cli::server::serve(config, host, port).await,
        Commands::Generate {
            input,
            format,
            title,
        } => {
            let output = mealmate::cli::generate::generate(&config, input.as_deref(), format, &title)?;
            println!("{output}");
            Ok(())
        }
    }
}
