use std::io;

use thiserror::Error;

use crate::modules::company::crud::{CompanyStore, StoreError};
use crate::modules::migration::prompt::Confirm;
use crate::modules::migration::report;

#[derive(Error, Debug)]
pub enum RunError {
    #[error(transparent)]
    Store(#[from] StoreError),
    #[error("failed to read confirmation: {0}")]
    Prompt(#[from] io::Error),
}

#[derive(Debug)]
pub struct RecordError {
    pub company_id: String,
    pub message: String,
}

#[derive(Debug, Default)]
pub struct RunSummary {
    pub updated: usize,
    pub errors: Vec<RecordError>,
}

impl RunSummary {
    pub fn total(&self) -> usize {
        self.updated + self.errors.len()
    }
}

#[derive(Debug)]
pub enum RunOutcome {
    /// Nothing matched; no prompt, no writes.
    Clean,
    /// The confirmation gate was declined; no writes.
    Cancelled,
    Completed(RunSummary),
}

impl RunOutcome {
    pub fn succeeded(&self) -> bool {
        match self {
            RunOutcome::Clean => true,
            RunOutcome::Cancelled => false,
            RunOutcome::Completed(summary) => summary.errors.is_empty(),
        }
    }
}

pub struct MigrationRunner<S, C> {
    store: S,
    confirm: C,
}

impl<S: CompanyStore, C: Confirm> MigrationRunner<S, C> {
    pub fn new(store: S, confirm: C) -> Self {
        Self { store, confirm }
    }

    pub async fn run(&mut self) -> Result<RunOutcome, RunError> {
        let mut records = self.store.find_blob_logos().await?;

        println!(
            "✓ Found {} companies with invalid blob: URLs\n",
            records.len()
        );

        if records.is_empty() {
            println!("✓ No migration needed - all logo URLs are valid!");
            return Ok(RunOutcome::Clean);
        }

        report::print_dry_run(&records);

        if !self.confirm.confirm("Proceed with migration? (yes/no): ")? {
            println!("Migration cancelled.");
            return Ok(RunOutcome::Cancelled);
        }

        println!("\n{}", "=".repeat(70));
        println!("EXECUTING MIGRATION...");
        println!("{}\n", "=".repeat(70));

        let mut summary = RunSummary::default();
        for record in &mut records {
            record.logo_url = None;
            match self.store.upsert(record).await {
                Ok(()) => {
                    summary.updated += 1;
                    println!(
                        "✓ Updated: {} ({})",
                        record.display_name(),
                        record.business_id()
                    );
                }
                Err(e) => {
                    // One failing record must never abort the batch.
                    println!("✗ Error updating {}: {}", record.business_id(), e);
                    summary.errors.push(RecordError {
                        company_id: record.business_id().to_string(),
                        message: e.to_string(),
                    });
                }
            }
        }

        report::print_summary(&summary);
        Ok(RunOutcome::Completed(summary))
    }
}
