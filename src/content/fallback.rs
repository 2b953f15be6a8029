//! Built-in fallback content
//!
//! When live content cannot be fetched, or parsing yields no valid records,
//! the hydrator substitutes these fixed lists so a section always has
//! something to render. One entry per kind, matching the site's built-in
//! placeholder content.

use crate::content::kinds::ContentKind;
use crate::content::record::Record;

/// Returns the fixed fallback record list for a content kind
///
/// The returned list is never empty and every record satisfies the kind's
/// schema.
pub fn fallback_records(kind: ContentKind) -> Vec<Record> {
    match kind {
        ContentKind::Timeline => vec![fallback_timeline_entry()],
        ContentKind::Education => vec![fallback_education_entry()],
        ContentKind::Projects => vec![fallback_project_entry()],
    }
}

fn fallback_timeline_entry() -> Record {
    let mut record = Record::new(1);
    record.set_scalar("year", "2024");
    record.set_scalar("title", "Senior Frontend Developer");
    record.set_scalar("company", "TechCorp Solutions");
    record.set_scalar("location", "San Francisco, CA");
    record.set_scalar("duration", "Present");
    record.set_scalar(
        "description",
        "Leading frontend development for enterprise applications.",
    );
    record.set_scalar("type", "work");
    record.set_list(
        "technologies",
        vec![
            "React".to_string(),
            "TypeScript".to_string(),
            "Next.js".to_string(),
        ],
    );
    record.set_list(
        "achievements",
        vec![
            "Reduced bundle size by 40%".to_string(),
            "Implemented design system".to_string(),
        ],
    );
    record
}

fn fallback_education_entry() -> Record {
    let mut record = Record::new(1);
    record.set_scalar("degree", "Master of Science in Computer Science");
    record.set_scalar("institution", "Stanford University");
    record.set_scalar("year", "2022-2024");
    record.set_scalar("location", "Stanford, CA");
    record.set_scalar(
        "description",
        "Specialized in Artificial Intelligence and Machine Learning.",
    );
    record.set_scalar("logo", "/logos/stanford.svg");
    record.set_scalar("gpa", "3.9/4.0");
    record.set_list(
        "achievements",
        vec![
            "Graduate Teaching Assistant".to_string(),
            "Published 3 papers".to_string(),
        ],
    );
    record.set_list(
        "technologies",
        vec![
            "Python".to_string(),
            "TensorFlow".to_string(),
            "PyTorch".to_string(),
        ],
    );
    record
}

fn fallback_project_entry() -> Record {
    let mut record = Record::new(1);
    record.set_scalar("title", "Legendary Portfolio");
    record.set_scalar("year", "2024");
    record.set_scalar(
        "description",
        "A modern, interactive portfolio showcasing my skills.",
    );
    record.set_scalar("liveUrl", "https://legendary-portfolio.vercel.app");
    record.set_scalar("repoUrl", "https://github.com/username/legendary-portfolio");
    record.set_scalar("previewGif", "/previews/legendary-portfolio.gif");
    record.set_list(
        "stack",
        vec![
            "Next.js".to_string(),
            "TypeScript".to_string(),
            "Tailwind CSS".to_string(),
        ],
    );
    record
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::kinds::{EducationEntry, ProjectEntry, TimelineEntry};

    #[test]
    fn test_fallback_never_empty() {
        for kind in ContentKind::all_kinds() {
            assert!(
                !fallback_records(kind).is_empty(),
                "Fallback for {} is empty",
                kind
            );
        }
    }

    #[test]
    fn test_fallback_satisfies_required_fields() {
        for kind in ContentKind::all_kinds() {
            let schema = kind.schema();
            for record in fallback_records(kind) {
                for name in schema.required_scalar_names() {
                    let value = record.scalar(name).unwrap_or("");
                    assert!(
                        !value.is_empty(),
                        "Fallback record for {} missing required field '{}'",
                        kind,
                        name
                    );
                }
            }
        }
    }

    #[test]
    fn test_fallback_maps_to_typed_views() {
        for record in fallback_records(ContentKind::Timeline) {
            assert!(TimelineEntry::from_record(&record).is_some());
        }
        for record in fallback_records(ContentKind::Education) {
            assert!(EducationEntry::from_record(&record).is_some());
        }
        for record in fallback_records(ContentKind::Projects) {
            assert!(ProjectEntry::from_record(&record).is_some());
        }
    }

    #[test]
    fn test_fallback_timeline_content() {
        let records = fallback_records(ContentKind::Timeline);
        assert_eq!(records[0].scalar("company"), Some("TechCorp Solutions"));
        assert_eq!(records[0].list("technologies").unwrap().len(), 3);
    }
}
