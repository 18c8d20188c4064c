//! apps/browser/src/bin/browser.rs

use browser_lib::{
    adapters::FileStore,
    config::Config,
    error::AppError,
    ui::{render, AppState, Shell},
};
use clap::Parser;
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Browse the demo recipe catalog from the terminal.
#[derive(Parser)]
#[command(name = "browser")]
struct Cli {
    /// Preselect the diet filter before the first fetch.
    #[arg(long)]
    diet: Option<String>,

    /// Open one recipe's detail view and exit.
    #[arg(long)]
    recipe: Option<u32>,
}

#[tokio::main]
async fn main() -> Result<(), AppError> {
    let cli = Cli::parse();

    // --- 1. Load Configuration & Set Up Logging ---
    let config = Arc::new(Config::from_env()?);
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(config.log_level.to_string()))
        .with(tracing_subscriber::fmt::layer())
        .init();
    info!("Configuration loaded. Starting the recipe browser...");

    // --- 2. Open the Key-Value Store ---
    info!(path = %config.store_path.display(), "Opening store");
    let store = Arc::new(
        FileStore::open(&config.store_path)
            .await
            .map_err(recipe_browser_core::Error::from)?,
    );

    // --- 3. Build the Shared AppState ---
    let state = AppState::new(config.clone(), store);

    // --- 4. One-Shot Detail View or Interactive Shell ---
    if let Some(id) = cli.recipe {
        match state.browser.recipe(id).await {
            Ok(recipe) => {
                let reviews = state.reviews.list(id).await?;
                println!("{}", render::detail(&recipe, &reviews));
            }
            Err(err) => println!("Error: {err}"),
        }
        return Ok(());
    }

    let mut shell = Shell::new(state);
    if let Some(diet) = cli.diet.as_deref() {
        shell.preset_diet(diet);
    }
    shell.run().await
}
