//! Run with: cargo run --bin check-connection

use std::process::ExitCode;

use anyhow::Context;
use bson::{doc, Document};
use futures::TryStreamExt;
use tracing_subscriber::EnvFilter;

use tabarnam_migrate::config::cosmos::CosmosConfig;
use tabarnam_migrate::config::database;
use tabarnam_migrate::modules::migration::report;

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
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            println!("✗ Error: {e:#}\n");
            ExitCode::FAILURE
        }
    }
}

async fn run(config: CosmosConfig) -> anyhow::Result<()> {
    println!("Cosmos DB Connection Test");
    println!("=========================");
    println!("Endpoint: {}", config.endpoint);
    println!("Key: {}", report::preview(&config.key, 20));
    println!("Database: {}", config.database);
    println!("Container: {}\n", config.container);

    let db = database::connect(&config)
        .await
        .context("failed to create client")?;
    println!("✓ Client created");

    let collection = db.collection::<Document>(&config.container);

    let sample: Vec<Document> = collection
        .find(doc! {})
        .limit(5)
        .await
        .context("sample query failed")?
        .try_collect()
        .await
        .context("sample query failed")?;

    println!("✓ Query successful - sampled {} companies", sample.len());
    for company in &sample {
        println!("  - {}", company.get_str("company_name").unwrap_or("Unknown"));
    }

    let total = collection
        .count_documents(doc! {})
        .await
        .context("count failed")?;
    println!("\n✓ Container holds {total} documents");

    Ok(())
}
