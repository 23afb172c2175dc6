//! Run with: cargo run --bin migrate-logos

use std::process::ExitCode;

use anyhow::Context;
use tracing_subscriber::EnvFilter;

use tabarnam_migrate::config::cosmos::CosmosConfig;
use tabarnam_migrate::config::database;
use tabarnam_migrate::modules::company::crud::CompanyCrud;
use tabarnam_migrate::modules::migration::prompt::StdinConfirm;
use tabarnam_migrate::modules::migration::report;
use tabarnam_migrate::modules::migration::runner::MigrationRunner;

#[tokio::main]
async fn main() -> ExitCode {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .init();

    let config = match CosmosConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            println!("✗ Error: {e}");
            return ExitCode::FAILURE;
        }
    };

    match run(config).await {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(e) => {
            println!("✗ Error: {e:#}\n");
            ExitCode::FAILURE
        }
    }
}

async fn run(config: CosmosConfig) -> anyhow::Result<bool> {
    println!("Connecting to Cosmos DB...");
    println!("Endpoint: {}", report::preview(&config.endpoint, 40));
    println!("Database: {}", config.database);
    println!("Container: {}\n", config.container);

    let db = database::connect(&config)
        .await
        .context("failed to connect to the document store")?;
    let crud = CompanyCrud::new(&db, &config.container);

    let mut runner = MigrationRunner::new(crud, StdinConfirm);
    let outcome = runner.run().await?;
    Ok(outcome.succeeded())
}
