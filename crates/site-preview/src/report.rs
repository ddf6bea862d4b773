//! Text Reports

use std::fmt::Write;

use site_core::catalog::{Category, CategoryCounts, TemplateEntry};
use site_core::roi::{format_currency, format_months, format_percent, FieldError, RoiSummary};

pub fn roi_text(summary: &RoiSummary) -> String {
    let rows = [
        ("Current weekly labor cost", format_currency(summary.current_weekly_cost)),
        ("Projected weekly cost", format_currency(summary.improved_weekly_cost)),
        ("Weekly savings", format_currency(summary.weekly_savings)),
        ("Annual savings", format_currency(summary.annual_savings)),
        ("Annual subscription", format_currency(summary.annual_cost)),
        ("ROI", format_percent(summary.roi_percentage)),
        ("Payback period", format_months(summary.payback_months)),
    ];

    let mut out = format!("{}\n\n", summary.headline());
    for (label, value) in rows {
        let _ = writeln!(out, "  {label:<28}{value:>14}");
    }
    out
}

pub fn errors_text(errors: &[FieldError]) -> String {
    let mut out = String::new();
    for e in errors {
        let _ = writeln!(out, "  {:<18}{}", e.field.id(), e.message);
    }
    out
}

pub fn catalog_text(entries: &[&TemplateEntry]) -> String {
    if entries.is_empty() {
        return "No templates match.\n".to_string();
    }

    let mut out = String::new();
    for e in entries {
        let _ = writeln!(
            out,
            "  {:>3}  {:<12} {:<28} {}",
            e.id,
            e.category.slug(),
            e.title,
            e.description
        );
    }
    let _ = writeln!(out, "\n{} template(s)", entries.len());
    out
}

pub fn counts_text(counts: &CategoryCounts) -> String {
    let mut out = format!("  {:<14}{:>4}\n", "all", counts.total);
    for category in Category::ALL {
        let _ = writeln!(out, "  {:<14}{:>4}", category.slug(), counts.count(category));
    }
    out
}
