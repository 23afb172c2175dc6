use mongodb::{Client, Database};

use crate::config::cosmos::CosmosConfig;

pub async fn connect(config: &CosmosConfig) -> mongodb::error::Result<Database> {
    tracing::info!(database = %config.database, "connecting to document store");

    let client = Client::with_uri_str(config.connection_uri()).await?;
    Ok(client.database(&config.database))
}
