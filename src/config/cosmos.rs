use std::env;
use thiserror::Error;

pub const DEFAULT_DATABASE: &str = "tabarnam";
pub const DEFAULT_CONTAINER: &str = "companies";

const COSMOS_MONGO_PORT: u16 = 10255;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("missing Cosmos endpoint: set VITE_COSMOS_ENDPOINT or COSMOS_ENDPOINT")]
    MissingEndpoint,
    #[error("missing Cosmos account key: set VITE_COSMOS_KEY or COSMOS_KEY")]
    MissingKey,
}

#[derive(Debug, Clone)]
pub struct CosmosConfig {
    pub endpoint: String,
    pub key: String,
    pub database: String,
    pub container: String,
}

impl CosmosConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::resolve(|name| env::var(name).ok())
    }

    /// Resolves the connection parameters once, from whatever lookup is
    /// supplied. Endpoint and key are required; database and container
    /// fall back to the production defaults.
    pub fn resolve(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let first = |names: &[&str]| {
            names.iter().copied().find_map(|name| {
                lookup(name)
                    .map(|value| value.trim().to_string())
                    .filter(|value| !value.is_empty())
            })
        };

        let endpoint = first(&["VITE_COSMOS_ENDPOINT", "COSMOS_ENDPOINT"])
            .ok_or(ConfigError::MissingEndpoint)?;
        let key = first(&["VITE_COSMOS_KEY", "COSMOS_KEY"]).ok_or(ConfigError::MissingKey)?;
        let database = first(&["COSMOS_DB"]).unwrap_or_else(|| DEFAULT_DATABASE.to_string());
        let container = first(&["COSMOS_CONTAINER"]).unwrap_or_else(|| DEFAULT_CONTAINER.to_string());

        Ok(Self {
            endpoint,
            key,
            database,
            container,
        })
    }

    /// Connection string for the account's MongoDB API. Endpoints already
    /// given in `mongodb://` form are passed through untouched.
    pub fn connection_uri(&self) -> String {
        if self.endpoint.starts_with("mongodb://") || self.endpoint.starts_with("mongodb+srv://") {
            return self.endpoint.trim_end_matches('/').to_string();
        }

        let host = self.mongo_host();
        let account = host.split('.').next().unwrap_or(&host);
        format!(
            "mongodb://{account}:{key}@{host}:{port}/?ssl=true&replicaSet=globaldb&retrywrites=false&maxIdleTimeMS=120000&appName=@{account}@",
            key = urlencoding::encode(&self.key),
            port = COSMOS_MONGO_PORT,
        )
    }

    // Core (SQL) endpoints like https://acct.documents.azure.com:443/ map
    // to the account's Mongo API host, acct.mongo.cosmos.azure.com.
    fn mongo_host(&self) -> String {
        let mut host = self.endpoint.as_str();
        if let Some((_, rest)) = host.split_once("://") {
            host = rest;
        }
        let host = host.split(|c| c == '/' || c == ':').next().unwrap_or(host);
        match host.strip_suffix(".documents.azure.com") {
            Some(account) => format!("{account}.mongo.cosmos.azure.com"),
            None => host.to_string(),
        }
    }
}
