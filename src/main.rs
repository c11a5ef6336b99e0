use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::sync::Arc;

use plantdesk::api::{normalize_error, ApiClient};
use plantdesk::commands::{ConfigCommand, MaterialCommand, ProductCommand, SuggestCommand};
use plantdesk::config::Config;
use plantdesk::store::AppState;

#[derive(Parser)]
#[command(name = "plantdesk")]
#[command(version)]
#[command(about = "Console for the production-management API", long_about = None)]
struct Cli {
    /// Path to config file
    #[arg(long, short, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Manage raw materials
    Material(MaterialCommand),

    /// Manage products
    Product(ProductCommand),

    /// Fetch the production-suggestion report
    Suggest(SuggestCommand),

    /// Manage configuration
    Config(ConfigCommand),
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    if let Err(e) = run().await {
        eprintln!("Error: {}", normalize_error(e.as_ref()));
        std::process::exit(1);
    }
}

async fn run() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let config = Config::load(cli.config.clone())?;

    match cli.command {
        Some(Commands::Material(cmd)) => {
            let mut state = app_state(&config);
            cmd.run(&mut state).await
        }
        Some(Commands::Product(cmd)) => {
            let mut state = app_state(&config);
            cmd.run(&mut state).await
        }
        Some(Commands::Suggest(cmd)) => {
            let mut state = app_state(&config);
            cmd.run(&mut state).await
        }
        Some(Commands::Config(cmd)) => cmd.run(&config),
        None => {
            println!("Use --help to see available commands");
            Ok(())
        }
    }
}

fn app_state(config: &Config) -> AppState {
    AppState::new(Arc::new(ApiClient::new(config.api_url.clone())))
}
