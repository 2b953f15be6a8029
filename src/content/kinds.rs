//! Content kinds and their typed record views
//!
//! Each section of the site hydrates one content kind. A kind carries its
//! built-in schema and a typed view struct that maps the generic [`Record`]
//! into named fields for rendering.

use crate::content::record::Record;
use crate::content::schema::Schema;
use std::fmt;

/// The content kinds the site hydrates
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ContentKind {
    /// Work experience timeline entries
    Timeline,

    /// Education history entries
    Education,

    /// Project gallery entries
    Projects,
}

impl ContentKind {
    /// Converts the kind to its document/CLI string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Timeline => "timeline",
            Self::Education => "education",
            Self::Projects => "projects",
        }
    }

    /// Parses a kind from its string representation
    ///
    /// Returns None if the string doesn't match any known kind.
    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "timeline" => Some(Self::Timeline),
            "education" => Some(Self::Education),
            "projects" => Some(Self::Projects),
            _ => None,
        }
    }

    /// Returns all content kinds
    pub fn all_kinds() -> Vec<Self> {
        vec![Self::Timeline, Self::Education, Self::Projects]
    }

    /// Builds the schema for this content kind
    ///
    /// The schema's root key matches the kind name, the anchor key is `id`,
    /// and the field sets mirror the content documents the site serves.
    pub fn schema(&self) -> Schema {
        match self {
            Self::Timeline => Schema::new("timeline")
                .scalar("year")
                .scalar("title")
                .scalar("company")
                .scalar("location")
                .scalar("duration")
                .scalar("description")
                .scalar("type")
                .list("technologies")
                .list("achievements"),

            Self::Education => Schema::new("education")
                .scalar("degree")
                .scalar("institution")
                .scalar("year")
                .scalar("location")
                .scalar("description")
                .optional_scalar("logo")
                .optional_scalar("gpa")
                .list("achievements")
                .list("technologies"),

            Self::Projects => Schema::new("projects")
                .scalar("title")
                .scalar("year")
                .scalar("description")
                .scalar("liveUrl")
                .scalar("repoUrl")
                .scalar("previewGif")
                .list("stack"),
        }
    }
}

impl fmt::Display for ContentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// One entry on the experience timeline
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimelineEntry {
    pub id: i64,
    pub year: String,
    pub title: String,
    pub company: String,
    pub location: String,
    pub duration: String,
    pub description: String,
    /// Either "work" or "education"
    pub category: String,
    pub technologies: Vec<String>,
    pub achievements: Vec<String>,
}

impl TimelineEntry {
    /// Maps a parsed record into a typed timeline entry
    ///
    /// Returns None if any required field is missing.
    pub fn from_record(record: &Record) -> Option<Self> {
        Some(Self {
            id: record.id(),
            year: record.scalar("year")?.to_string(),
            title: record.scalar("title")?.to_string(),
            company: record.scalar("company")?.to_string(),
            location: record.scalar("location")?.to_string(),
            duration: record.scalar("duration")?.to_string(),
            description: record.scalar("description")?.to_string(),
            category: record.scalar("type")?.to_string(),
            technologies: record.list("technologies").unwrap_or_default().to_vec(),
            achievements: record.list("achievements").unwrap_or_default().to_vec(),
        })
    }
}

/// One entry in the education history
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EducationEntry {
    pub id: i64,
    pub degree: String,
    pub institution: String,
    pub year: String,
    pub location: String,
    pub description: String,
    /// Path to the institution logo, empty if not supplied
    pub logo: String,
    /// Grade point average, empty if not supplied
    pub gpa: String,
    pub achievements: Vec<String>,
    pub technologies: Vec<String>,
}

impl EducationEntry {
    /// Maps a parsed record into a typed education entry
    ///
    /// Returns None if any required field is missing; `logo` and `gpa`
    /// default to empty strings.
    pub fn from_record(record: &Record) -> Option<Self> {
        Some(Self {
            id: record.id(),
            degree: record.scalar("degree")?.to_string(),
            institution: record.scalar("institution")?.to_string(),
            year: record.scalar("year")?.to_string(),
            location: record.scalar("location")?.to_string(),
            description: record.scalar("description")?.to_string(),
            logo: record.scalar("logo").unwrap_or_default().to_string(),
            gpa: record.scalar("gpa").unwrap_or_default().to_string(),
            achievements: record.list("achievements").unwrap_or_default().to_vec(),
            technologies: record.list("technologies").unwrap_or_default().to_vec(),
        })
    }
}

/// One entry in the project gallery
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectEntry {
    pub id: i64,
    pub title: String,
    pub year: String,
    pub description: String,
    pub live_url: String,
    pub repo_url: String,
    pub preview_gif: String,
    pub stack: Vec<String>,
}

impl ProjectEntry {
    /// Maps a parsed record into a typed project entry
    ///
    /// Returns None if any required field is missing.
    pub fn from_record(record: &Record) -> Option<Self> {
        Some(Self {
            id: record.id(),
            title: record.scalar("title")?.to_string(),
            year: record.scalar("year")?.to_string(),
            description: record.scalar("description")?.to_string(),
            live_url: record.scalar("liveUrl")?.to_string(),
            repo_url: record.scalar("repoUrl")?.to_string(),
            preview_gif: record.scalar("previewGif")?.to_string(),
            stack: record.list("stack").unwrap_or_default().to_vec(),
        })
    }
}
