//! End-of-run statistics
//!
//! Formats the per-category counts of a `CrawlReport` for the terminal. This
//! is observability output only; none of it goes into the JSON document.

use crate::crawler::CrawlReport;

/// Formats run statistics as plain text
pub fn format_statistics(report: &CrawlReport) -> String {
    let mut out = String::new();

    out.push_str("=== Crawl Statistics ===\n\n");

    for category in &report.categories {
        out.push_str(&format!("{}:\n", capitalize(category.category.as_str())));
        out.push_str(&format!(
            "  State pages discovered: {}\n",
            category.pages_discovered
        ));
        out.push_str(&format!("  State pages scraped: {}\n", category.pages_scraped));
        out.push_str(&format!("  State pages failed: {}\n", category.pages_failed()));
        out.push_str(&format!("  Candidates: {}\n", category.candidates));
        out.push('\n');
    }

    let failures: Vec<_> = report
        .categories
        .iter()
        .flat_map(|c| c.failures.iter().map(move |f| (c.category, f)))
        .collect();

    if !failures.is_empty() {
        out.push_str(&format!("Failed Pages ({}):\n", failures.len()));
        for (category, failure) in failures {
            out.push_str(&format!(
                "  - [{}] {}: {}\n",
                category, failure.url, failure.message
            ));
        }
        out.push('\n');
    }

    out.push_str(&format!(
        "Total candidates: {} in {} seconds\n",
        report.result.len(),
        report.duration_seconds()
    ));

    out
}

/// Prints statistics to stdout
pub fn print_statistics(report: &CrawlReport) {
    print!("{}", format_statistics(report));
}

fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
