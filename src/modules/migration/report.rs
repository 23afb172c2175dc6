use crate::modules::company::model::CompanyRecord;
use crate::modules::migration::runner::RunSummary;

pub const LOGO_PREVIEW_LEN: usize = 60;

/// First `max` characters of `value`, followed by an ellipsis marker.
/// The marker is appended even when the value is already short.
pub fn preview(value: &str, max: usize) -> String {
    let head: String = value.chars().take(max).collect();
    format!("{head}...")
}

pub fn logo_preview(logo_url: Option<&str>) -> String {
    preview(logo_url.unwrap_or("N/A"), LOGO_PREVIEW_LEN)
}

pub fn print_dry_run(records: &[CompanyRecord]) {
    println!("{}", "=".repeat(70));
    println!("DRY RUN: The following companies would be updated:");
    println!("{}", "=".repeat(70));

    for (index, record) in records.iter().enumerate() {
        println!("{}. {}", index + 1, record.display_name());
        println!("   ID: {}", record.business_id());
        println!("   Current: {}", logo_preview(record.logo_url.as_deref()));
        println!("   Action: Set logo_url to null\n");
    }
}

pub fn print_summary(summary: &RunSummary) {
    println!("\n{}", "=".repeat(70));
    println!("MIGRATION COMPLETE");
    println!("{}", "=".repeat(70));
    println!("✓ Successfully updated: {} companies", summary.updated);
    if !summary.errors.is_empty() {
        println!("✗ Errors: {} companies", summary.errors.len());
    }
    println!("Total processed: {} companies\n", summary.total());
}
