//! Content data model
//!
//! This module defines what the rest of the crate operates on:
//!
//! - `Schema`: the recognized line keys for one content kind
//! - `Record`: one decoded entity (scalar fields + list fields)
//! - `ContentKind`: the site's sections and their built-in schemas
//! - typed views (`TimelineEntry`, `EducationEntry`, `ProjectEntry`)
//! - the fixed fallback lists substituted when live content is unavailable

mod fallback;
mod kinds;
mod record;
mod schema;

// Re-export main types
pub use fallback::fallback_records;
pub use kinds::{ContentKind, EducationEntry, ProjectEntry, TimelineEntry};
pub use record::Record;
pub use schema::{Schema, ScalarField, DEFAULT_ANCHOR_KEY};
