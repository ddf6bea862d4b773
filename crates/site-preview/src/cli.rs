//! Command-Line Interface

use clap::{Parser, Subcommand, ValueEnum};

#[derive(Debug, Parser)]
#[command(name = "site-preview", version, about = "Preview ROI projections and the template catalog")]
pub struct Cli {
    /// Output format
    #[arg(long, global = true, value_enum, env = "SITE_PREVIEW_FORMAT", default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Validate calculator inputs and print the savings projection
    Roi(RoiArgs),

    /// Search and sort the template catalog
    Catalog {
        /// Case-insensitive text matched against title, category, and description
        #[arg(short, long, default_value = "")]
        query: String,

        /// Category slug, or "all"
        #[arg(short, long, default_value = "all")]
        category: String,

        /// title-asc, title-desc, or category-asc
        #[arg(short, long, default_value = "title-asc")]
        sort: String,
    },

    /// Entry counts per category
    Counts,
}

/// Calculator fields as form text; omitted fields keep the calculator defaults
#[derive(Debug, Default, clap::Args)]
pub struct RoiArgs {
    #[arg(long, allow_negative_numbers = true)]
    pub employees: Option<String>,

    #[arg(long, allow_negative_numbers = true)]
    pub locations: Option<String>,

    #[arg(long, allow_negative_numbers = true)]
    pub hourly_rate: Option<String>,

    #[arg(long, allow_negative_numbers = true)]
    pub tasks_per_week: Option<String>,

    #[arg(long, allow_negative_numbers = true)]
    pub minutes_per_task: Option<String>,

    #[arg(long, allow_negative_numbers = true)]
    pub audit_frequency: Option<String>,

    #[arg(long, allow_negative_numbers = true)]
    pub hours_per_audit: Option<String>,
}
