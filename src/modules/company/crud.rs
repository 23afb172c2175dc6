use bson::doc;
use futures::TryStreamExt;
use mongodb::{Collection, Database};
use thiserror::Error;

use crate::modules::company::model::CompanyRecord;

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("document store error: {0}")]
    Database(#[from] mongodb::error::Error),
    #[error("{0}")]
    Other(String),
}

#[allow(async_fn_in_trait)]
pub trait CompanyStore {
    async fn find_blob_logos(&self) -> Result<Vec<CompanyRecord>, StoreError>;
    async fn upsert(&self, record: &CompanyRecord) -> Result<(), StoreError>;
}

pub struct CompanyCrud {
    collection: Collection<CompanyRecord>,
}

impl CompanyCrud {
    pub fn new(db: &Database, container: &str) -> Self {
        Self {
            collection: db.collection(container),
        }
    }

    pub async fn find_sas_logos(
        &self,
        limit: Option<i64>,
    ) -> Result<Vec<CompanyRecord>, StoreError> {
        let mut find = self
            .collection
            .find(doc! { "logo_url": { "$regex": "[?&](sv|sig|se)=" } });
        if let Some(limit) = limit {
            find = find.limit(limit);
        }

        let records: Vec<CompanyRecord> = find.await?.try_collect().await?;
        tracing::debug!(matched = records.len(), "SAS logo query complete");
        Ok(records)
    }
}

impl CompanyStore for CompanyCrud {
    async fn find_blob_logos(&self) -> Result<Vec<CompanyRecord>, StoreError> {
        let cursor = self
            .collection
            .find(doc! { "logo_url": { "$regex": "^blob:" } })
            .await?;

        // Matched sets are expected to stay small; drain the cursor whole.
        let records: Vec<CompanyRecord> = cursor.try_collect().await?;
        tracing::debug!(matched = records.len(), "blob logo query complete");
        Ok(records)
    }

    async fn upsert(&self, record: &CompanyRecord) -> Result<(), StoreError> {
        self.collection
            .replace_one(doc! { "_id": &record.id }, record)
            .upsert(true)
            .await?;
        Ok(())
    }
}
