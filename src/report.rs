//! Output formatting for analysis and review results.
//!
//! Two formats:
//! - Pretty: colored terminal output for human readability
//! - JSON: structured output for programmatic consumption

use colored::*;

use crate::analysis::Report;
use crate::review::FileReview;

/// Write the finalized analysis report as pretty-printed JSON to stdout.
pub fn write_analysis_json(report: &Report) -> anyhow::Result<()> {
    let json = serde_json::to_string_pretty(report)?;
    println!("{}", json);
    Ok(())
}

/// Write a batch of review results as pretty-printed JSON to stdout.
pub fn write_reviews_json(reviews: &[FileReview]) -> anyhow::Result<()> {
    let json = serde_json::to_string_pretty(reviews)?;
    println!("{}", json);
    Ok(())
}

/// Print the banner shown before an analysis run.
pub fn write_analysis_banner(project: &str, language: &str) {
    println!();
    print!("  ");
    print!("{}", "promptforge".cyan().bold());
    println!(" v{}", env!("CARGO_PKG_VERSION"));
    println!();
    print!("  {}", "Analyzing: ".dimmed());
    print!("{}", project);
    println!(" ({})", language);
    println!();
}

/// Print the post-analysis summary.
pub fn write_analysis_summary(report: &Report, files_scanned: usize, output: Option<&str>) {
    println!("  {}", "Summary:".bold());
    println!("    Files analyzed:  {}", files_scanned);
    println!("    Types found:     {}", report.naming.types.len());
    println!("    Functions found: {}", report.naming.functions.len());
    if !report.frameworks.is_empty() {
        println!("    Frameworks:      {}", report.frameworks.join(", "));
    }
    println!();

    if let Some(path) = output {
        print!("  {}", "Prompt written: ".dimmed());
        println!("{}", path.green());
        println!();
    }
}

/// Print one review result as a text block.
pub fn write_review_pretty(result: &FileReview) {
    println!();
    println!("{}", "=".repeat(60).dimmed());
    print!("  {}", "File: ".dimmed());
    println!("{}", result.file.blue());

    if let Some(error) = &result.error {
        print!("  {}", "Error: ".dimmed());
        println!("{}", error.red());
    } else {
        print!("  {}", "Language: ".dimmed());
        println!("{}", result.language.as_deref().unwrap_or("unknown"));
        println!("{}", "-".repeat(60).dimmed());
        println!("{}", result.review.as_deref().unwrap_or("No review generated"));
    }

    println!("{}", "=".repeat(60).dimmed());
}

/// Print the footer after a multi-file review run.
pub fn write_review_summary(count: usize) {
    println!();
    let plural = if count != 1 { "s" } else { "" };
    println!("  {} {} file{}", "Reviewed".green(), count, plural);
    println!();
}
