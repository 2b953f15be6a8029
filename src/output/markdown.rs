//! Markdown summary generation
//!
//! This module generates a human-readable markdown summary of a hydration
//! pass: per-section record tables, content origin, and refresh times. It
//! stands in for the site renderer on the command line.

use crate::output::{HydrationSummary, OutputResult, SectionSummary};
use crate::ContentKind;
use chrono::Utc;
use std::fs::File;
use std::io::Write;
use std::path::Path;

/// Generates a markdown summary file from a hydration snapshot
///
/// # Arguments
///
/// * `summary` - The hydration summary data
/// * `output_path` - Path where the markdown file should be written
///
/// # Returns
///
/// * `Ok(())` - Successfully wrote markdown summary
/// * `Err(OutputError)` - Failed to write summary
pub fn generate_markdown_summary(
    summary: &HydrationSummary,
    output_path: &Path,
) -> OutputResult<()> {
    let markdown = format_markdown_summary(summary);

    let mut file = File::create(output_path)?;
    file.write_all(markdown.as_bytes())?;

    Ok(())
}

/// Formats a hydration summary as markdown
pub fn format_markdown_summary(summary: &HydrationSummary) -> String {
    let mut md = String::new();

    // Title
    md.push_str("# Folio-Loom Hydration Summary\n\n");
    md.push_str(&format!("- **Generated**: {}\n", Utc::now().to_rfc3339()));
    md.push_str(&format!("- **Sections**: {}\n", summary.sections.len()));
    md.push_str(&format!("- **Total Records**: {}\n", summary.total_records()));
    md.push_str(&format!(
        "- **Sections On Fallback**: {}\n\n",
        summary.fallback_sections()
    ));

    for section in &summary.sections {
        md.push_str(&format_section(section));
    }

    md
}

/// Formats one section's records
fn format_section(section: &SectionSummary) -> String {
    let mut md = String::new();

    md.push_str(&format!("## {}\n\n", section.kind));
    md.push_str(&format!("- **Origin**: {}\n", section.origin));
    md.push_str(&format!(
        "- **Refreshed**: {}\n",
        section.refreshed_at.to_rfc3339()
    ));
    md.push_str(&format!("- **Records**: {}\n\n", section.records.len()));

    md.push_str("| Id | Entry | Year |\n");
    md.push_str("|----|-------|------|\n");
    for record in &section.records {
        let label_key = match section.kind {
            ContentKind::Timeline | ContentKind::Projects => "title",
            ContentKind::Education => "degree",
        };
        md.push_str(&format!(
            "| {} | {} | {} |\n",
            record.id(),
            record.scalar(label_key).unwrap_or("-"),
            record.scalar("year").unwrap_or("-")
        ));
    }
    md.push('\n');

    for record in &section.records {
        for (key, items) in record.lists() {
            if !items.is_empty() {
                md.push_str(&format!(
                    "- **{} / {}**: {}\n",
                    record.id(),
                    key,
                    items.join(", ")
                ));
            }
        }
    }
    md.push('\n');

    md
}

/// Prints a hydration summary to stdout
pub fn print_summary(summary: &HydrationSummary) {
    println!("=== Hydration Summary ===\n");

    for section in &summary.sections {
        println!(
            "{}: {} records ({})",
            section.kind,
            section.records.len(),
            section.origin
        );
    }

    println!(
        "\nTotal: {} records across {} sections, {} on fallback",
        summary.total_records(),
        summary.sections.len(),
        summary.fallback_sections()
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::fallback_records;
    use crate::hydrate::ContentOrigin;

    fn create_test_summary() -> HydrationSummary {
        HydrationSummary {
            sections: vec![
                SectionSummary {
                    kind: ContentKind::Timeline,
                    records: fallback_records(ContentKind::Timeline),
                    origin: ContentOrigin::Live,
                    refreshed_at: Utc::now(),
                },
                SectionSummary {
                    kind: ContentKind::Projects,
                    records: fallback_records(ContentKind::Projects),
                    origin: ContentOrigin::Fallback,
                    refreshed_at: Utc::now(),
                },
            ],
        }
    }

    #[test]
    fn test_format_includes_sections() {
        let md = format_markdown_summary(&create_test_summary());
        assert!(md.contains("## timeline"));
        assert!(md.contains("## projects"));
        assert!(md.contains("Senior Frontend Developer"));
        assert!(md.contains("Legendary Portfolio"));
    }

    #[test]
    fn test_format_reports_origins() {
        let md = format_markdown_summary(&create_test_summary());
        assert!(md.contains("- **Origin**: live"));
        assert!(md.contains("- **Origin**: fallback"));
        assert!(md.contains("- **Sections On Fallback**: 1"));
    }

    #[test]
    fn test_format_lists_list_fields() {
        let md = format_markdown_summary(&create_test_summary());
        assert!(md.contains("React, TypeScript, Next.js"));
    }

    #[test]
    fn test_generate_writes_file() {
        use tempfile::NamedTempFile;

        let file = NamedTempFile::new().unwrap();
        let summary = create_test_summary();

        generate_markdown_summary(&summary, file.path()).unwrap();

        let written = std::fs::read_to_string(file.path()).unwrap();
        assert!(written.starts_with("# Folio-Loom Hydration Summary"));
    }

    #[test]
    fn test_empty_summary() {
        let summary = HydrationSummary { sections: vec![] };
        let md = format_markdown_summary(&summary);
        assert!(md.contains("- **Total Records**: 0"));
    }
}
