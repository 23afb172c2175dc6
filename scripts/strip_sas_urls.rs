//! Rewrites SAS-signed company logo URLs to their stable form (the same
//! URL with the query string removed).
//!
//! Usage:
//!   cargo run --bin strip-sas-urls             # dry run (no writes)
//!   cargo run --bin strip-sas-urls -- --apply  # write changes
//!
//! Optional:
//!   --max=<n>   stop after n matching documents

use std::process::ExitCode;

use anyhow::{bail, Context};
use tracing_subscriber::EnvFilter;

use tabarnam_migrate::config::cosmos::CosmosConfig;
use tabarnam_migrate::config::database;
use tabarnam_migrate::modules::company::crud::{CompanyCrud, CompanyStore};
use tabarnam_migrate::modules::migration::report;
use tabarnam_migrate::modules::migration::sas;

struct Args {
    apply: bool,
    max: Option<i64>,
}

fn parse_args() -> anyhow::Result<Args> {
    let mut args = Args {
        apply: false,
        max: None,
    };

    for raw in std::env::args().skip(1) {
        if raw == "--apply" {
            args.apply = true;
            continue;
        }
        if let Some(value) = raw.strip_prefix("--max=") {
            let n: i64 = value.parse().context("--max expects a positive number")?;
            if n <= 0 {
                bail!("--max expects a positive number");
            }
            args.max = Some(n);
            continue;
        }
        bail!("unknown argument: {raw}");
    }

    Ok(args)
}

#[tokio::main]
async fn main() -> ExitCode {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .init();

    let args = match parse_args() {
        Ok(args) => args,
        Err(e) => {
            println!("✗ Error: {e}");
            return ExitCode::FAILURE;
        }
    };

    let config = match CosmosConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            println!("✗ Error: {e}");
            return ExitCode::FAILURE;
        }
    };

    match run(config, args).await {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(e) => {
            println!("✗ Error: {e:#}\n");
            ExitCode::FAILURE
        }
    }
}

async fn run(config: CosmosConfig, args: Args) -> anyhow::Result<bool> {
    println!(
        "Scanning {}/{} for SAS-signed logo URLs...\n",
        config.database, config.container
    );

    let db = database::connect(&config)
        .await
        .context("failed to connect to the document store")?;
    let crud = CompanyCrud::new(&db, &config.container);

    let records = crud.find_sas_logos(args.max).await?;

    if records.is_empty() {
        println!("✓ No SAS-signed logo URLs found.");
        return Ok(true);
    }

    let mut shown = 0usize;
    let mut updated = 0usize;
    let mut skipped = 0usize;
    let mut errors = 0usize;

    for mut record in records {
        let stable = record.logo_url.as_deref().and_then(sas::stable_url);
        let Some(stable) = stable else {
            skipped += 1;
            continue;
        };

        shown += 1;
        println!(
            "{}. {} ({})",
            shown,
            record.display_name(),
            record.business_id()
        );
        println!(
            "   {} -> {}",
            report::preview(record.logo_url.as_deref().unwrap_or_default(), 60),
            stable
        );

        if !args.apply {
            continue;
        }

        record.logo_url = Some(stable);
        match crud.upsert(&record).await {
            Ok(()) => updated += 1,
            Err(e) => {
                errors += 1;
                println!("   ✗ Error updating {}: {}", record.business_id(), e);
            }
        }
    }

    if args.apply {
        println!("\n✓ Updated: {updated}  Skipped: {skipped}  Errors: {errors}");
    } else {
        println!(
            "\nDry run: {} URLs would be rewritten ({} skipped). Re-run with --apply to write changes.",
            shown, skipped
        );
    }

    Ok(errors == 0)
}
