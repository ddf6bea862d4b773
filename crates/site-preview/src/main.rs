//! Design-review CLI
//!
//! Runs ROI projections and template catalog queries from the terminal so
//! copy and numbers can be checked without building the site.

mod cli;
mod report;

use anyhow::{bail, Context};
use clap::Parser;
use serde_json::json;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use site_core::catalog::{template_catalog, CatalogQuery, CategoryFilter, SortKey};
use site_core::roi::{self, RawRoiInputs, RoiField, RoiInputs};

use crate::cli::{Cli, Commands, OutputFormat, RoiArgs};

fn main() -> anyhow::Result<()> {
    // Load environment
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info".into()),
        ))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();
    tracing::debug!(?cli, "parsed arguments");

    match cli.command {
        Commands::Roi(args) => run_roi(&args, cli.format),
        Commands::Catalog { query, category, sort } => run_catalog(query, &category, &sort, cli.format),
        Commands::Counts => run_counts(cli.format),
    }
}

fn raw_inputs(args: &RoiArgs) -> RawRoiInputs {
    let mut raw = RawRoiInputs::default();
    let supplied = [
        (RoiField::Employees, &args.employees),
        (RoiField::Locations, &args.locations),
        (RoiField::HourlyRate, &args.hourly_rate),
        (RoiField::TasksPerWeek, &args.tasks_per_week),
        (RoiField::MinutesPerTask, &args.minutes_per_task),
        (RoiField::AuditFrequency, &args.audit_frequency),
        (RoiField::HoursPerAudit, &args.hours_per_audit),
    ];
    for (field, text) in supplied {
        if let Some(text) = text {
            raw.set_text(field, text);
        }
    }
    raw
}

fn run_roi(args: &RoiArgs, format: OutputFormat) -> anyhow::Result<()> {
    let raw = raw_inputs(args);
    let validation = roi::validate(&raw);

    if !validation.is_valid() {
        tracing::warn!(count = validation.errors().len(), "invalid calculator inputs");
        match format {
            OutputFormat::Text => eprint!("{}", report::errors_text(validation.errors())),
            OutputFormat::Json => println!(
                "{}",
                serde_json::to_string_pretty(&json!({ "errors": validation.errors() }))?
            ),
        }
        bail!("invalid calculator inputs");
    }

    let inputs = RoiInputs::try_from(raw).context("cannot project savings")?;
    let outputs = roi::calculate(&inputs);
    let summary = outputs.summary();
    tracing::info!(
        annual_savings = %summary.annual_savings,
        roi = %summary.roi_percentage,
        "projection complete"
    );

    match format {
        OutputFormat::Text => print!("{}", report::roi_text(&summary)),
        OutputFormat::Json => println!(
            "{}",
            serde_json::to_string_pretty(&json!({
                "inputs": inputs,
                "outputs": outputs,
                "summary": summary,
            }))?
        ),
    }
    Ok(())
}

fn run_catalog(text: String, category: &str, sort: &str, format: OutputFormat) -> anyhow::Result<()> {
    let key: SortKey = sort.parse()?;
    let query = CatalogQuery {
        text,
        category: CategoryFilter::parse(category),
    };
    if let CategoryFilter::Unknown(name) = &query.category {
        tracing::warn!(category = %name, "unknown category; no templates will match");
    }

    let catalog = template_catalog();
    let results = catalog.query(&query, key);
    tracing::info!(results = results.len(), total = catalog.len(), "catalog query");

    match format {
        OutputFormat::Text => print!("{}", report::catalog_text(&results)),
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&results)?),
    }
    Ok(())
}

fn run_counts(format: OutputFormat) -> anyhow::Result<()> {
    let counts = template_catalog().counts();

    match format {
        OutputFormat::Text => print!("{}", report::counts_text(&counts)),
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&counts)?),
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use site_core::roi::Violation;

    #[test]
    fn test_raw_inputs_overlay_defaults() {
        let args = RoiArgs {
            locations: Some("5".into()),
            hourly_rate: Some("abc".into()),
            ..RoiArgs::default()
        };
        let raw = raw_inputs(&args);

        assert_eq!(raw.locations, 5.0);
        assert!(raw.hourly_rate.is_nan());
        assert_eq!(raw.employees, RawRoiInputs::default().employees);
    }

    #[test]
    fn test_negative_flag_reaches_validation() {
        let cli = Cli::try_parse_from(["site-preview", "roi", "--locations", "-1"]).unwrap();
        let Commands::Roi(args) = cli.command else {
            panic!("expected roi command");
        };

        let validation = roi::validate(&raw_inputs(&args));
        let err = validation.error_for(RoiField::Locations).unwrap();
        assert_eq!(err.violation, Violation::BelowMin);
        assert_eq!(err.message, "Number of locations must be at least 1");
    }

    #[test]
    fn test_invalid_inputs_fail_once() {
        let args = RoiArgs {
            employees: Some("0".into()),
            ..RoiArgs::default()
        };
        let err = run_roi(&args, OutputFormat::Json).unwrap_err();

        assert_eq!(err.to_string(), "invalid calculator inputs");
        assert_eq!(err.chain().count(), 1);
    }

    #[test]
    fn test_unknown_sort_key_fails() {
        let err = run_catalog(String::new(), "all", "newest", OutputFormat::Text).unwrap_err();
        assert!(err.to_string().contains("Unknown sort key"));
    }
}
