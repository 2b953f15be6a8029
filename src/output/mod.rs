//! Output module
//!
//! This module renders hydration results for consumers outside the core:
//! the document writer that re-emits record lists in the content grammar,
//! and the markdown summary export that stands in for the site renderer.

mod document;
mod markdown;

use crate::content::Record;
use crate::hydrate::{ContentOrigin, Hydrator};
use crate::ContentKind;
use chrono::{DateTime, Utc};
use thiserror::Error;

pub use document::write_document;
pub use markdown::{format_markdown_summary, generate_markdown_summary, print_summary};

/// Errors that can occur during output operations
#[derive(Debug, Error)]
pub enum OutputError {
    #[error("Failed to write output: {0}")]
    Write(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for output operations
pub type OutputResult<T> = Result<T, OutputError>;

/// One section's published content, captured for reporting
#[derive(Debug, Clone)]
pub struct SectionSummary {
    /// The content kind
    pub kind: ContentKind,

    /// The published records
    pub records: Vec<Record>,

    /// Whether the records are live content or the fallback
    pub origin: ContentOrigin,

    /// When the section's list was committed
    pub refreshed_at: DateTime<Utc>,
}

/// Snapshot of every hydrated section
#[derive(Debug, Clone)]
pub struct HydrationSummary {
    /// Per-section summaries, in kind order; sections that never completed
    /// a cycle are absent
    pub sections: Vec<SectionSummary>,
}

impl HydrationSummary {
    /// Captures the currently published list of every section
    pub fn from_hydrator(hydrator: &Hydrator) -> Self {
        let sections = ContentKind::all_kinds()
            .into_iter()
            .filter_map(|kind| {
                hydrator.published(kind).map(|published| SectionSummary {
                    kind,
                    records: published.records,
                    origin: published.origin,
                    refreshed_at: published.refreshed_at,
                })
            })
            .collect();

        Self { sections }
    }

    /// Total records across all sections
    pub fn total_records(&self) -> usize {
        self.sections.iter().map(|s| s.records.len()).sum()
    }

    /// Number of sections rendering fallback content
    pub fn fallback_sections(&self) -> usize {
        self.sections
            .iter()
            .filter(|s| s.origin == ContentOrigin::Fallback)
            .count()
    }
}
