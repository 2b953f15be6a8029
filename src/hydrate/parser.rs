//! Content document parser
//!
//! This module parses the restricted line-oriented text format the site's
//! content documents use into [`Record`]s. One generic state machine,
//! parameterized by a [`Schema`], serves every content kind.
//!
//! The parser never fails: unparseable lines are skipped so newer documents
//! with unknown fields still hydrate on older builds, and records missing
//! required fields are dropped rather than aborting the scan.
//!
//! # Line forms
//!
//! Evaluated in this priority order (lines are trimmed first):
//!
//! 1. Root line `<rootKey>:` enters document scope; everything before it
//!    is ignored.
//! 2. Anchor line `- id: <int>` flushes the record being assembled and
//!    starts a new one. A non-numeric id skips the line, not the document.
//! 3. Scalar line `<key>: <value>` assigns a scalar on the current record;
//!    surrounding double quotes are stripped, no escape processing.
//! 4. List-open line `<key>:` begins accumulating items for `<key>`.
//! 5. List item `- <value>` appends to the open accumulator.
//! 6. Blank line while accumulating commits the accumulator.
//! 7. Anything else is ignored.
//!
//! An accumulator still open at end of input is committed unconditionally,
//! so a trailing list field with no final blank line is never lost.

use crate::content::{Record, Schema};

/// Parser mode within the document
#[derive(Debug)]
enum Mode {
    /// Before the root line; every line is ignored
    SeekingRoot,

    /// Inside document scope, assigning scalars to the current record
    InRecord,

    /// Accumulating items for one list field of the current record
    InList { key: String, items: Vec<String> },
}

/// The full parse state folded over the line sequence
#[derive(Debug)]
struct ParseState {
    mode: Mode,
    current: Option<Record>,
    records: Vec<Record>,
}

/// Parses a content document into records under the given schema
///
/// Records are returned in document order (first appearance of their anchor
/// line). The function is a pure fold over the input lines: identical input
/// yields structurally identical output.
///
/// # Arguments
///
/// * `text` - The raw document text
/// * `schema` - The schema declaring recognized keys for this content kind
///
/// # Example
///
/// ```
/// use folio_loom::content::ContentKind;
/// use folio_loom::hydrate::parse;
///
/// let text = "projects:\n- id: 1\ntitle: \"Demo\"\nyear: \"2024\"\n\
///             description: \"A demo.\"\nliveUrl: \"https://e.com\"\n\
///             repoUrl: \"https://e.com/r\"\npreviewGif: \"/p.gif\"\n";
/// let records = parse(text, &ContentKind::Projects.schema());
/// assert_eq!(records.len(), 1);
/// assert_eq!(records[0].scalar("title"), Some("Demo"));
/// ```
pub fn parse(text: &str, schema: &Schema) -> Vec<Record> {
    let mut state = ParseState::new();
    for line in text.lines() {
        state.step(line.trim(), schema);
    }
    state.finish(schema)
}

impl ParseState {
    fn new() -> Self {
        Self {
            mode: Mode::SeekingRoot,
            current: None,
            records: Vec::new(),
        }
    }

    /// Consumes one trimmed line
    fn step(&mut self, line: &str, schema: &Schema) {
        // Before the root line nothing else is recognized
        if matches!(self.mode, Mode::SeekingRoot) {
            if is_root_line(line, schema) {
                self.mode = Mode::InRecord;
            }
            return;
        }

        // Anchor candidate: a dashed anchor-key line, even while accumulating
        if let Some(id_text) = anchor_value(line, schema) {
            match id_text.parse::<i64>() {
                Ok(id) => {
                    self.flush(schema);
                    self.current = Some(Record::new(id));
                    self.mode = Mode::InRecord;
                }
                Err(_) => {
                    // Skip this anchor, keep scanning for the next one
                    tracing::debug!("Skipping anchor line with non-numeric id: '{}'", id_text);
                }
            }
            return;
        }

        // Blank line commits an open accumulator
        if line.is_empty() {
            self.commit_open_list();
            return;
        }

        // List item, only while accumulating
        if let Some(item) = line.strip_prefix("- ") {
            if let Mode::InList { items, .. } = &mut self.mode {
                items.push(strip_quotes(item.trim()).to_string());
            }
            return;
        }

        // Scalar assignment or list-open
        if let Some((key, value)) = line.split_once(':') {
            let key = key.trim();
            let value = value.trim();

            if self.current.is_none() {
                return;
            }

            if schema.is_scalar(key) && !value.is_empty() {
                // Assigning a scalar does not disturb an open accumulator
                if let Some(record) = self.current.as_mut() {
                    record.set_scalar(key, strip_quotes(value));
                }
            } else if schema.is_list(key) && value.is_empty() {
                // A new list field closes the previous accumulator first
                self.commit_open_list();
                self.mode = Mode::InList {
                    key: key.to_string(),
                    items: Vec::new(),
                };
            }
        }
    }

    /// Finishes the document: commits any open accumulator, flushes the
    /// final record, and returns everything emitted
    fn finish(mut self, schema: &Schema) -> Vec<Record> {
        self.flush(schema);
        self.records
    }

    /// Commits the open list accumulator onto the current record, if any
    fn commit_open_list(&mut self) {
        if let Mode::InList { key, items } =
            std::mem::replace(&mut self.mode, Mode::InRecord)
        {
            if let Some(record) = self.current.as_mut() {
                record.set_list(&key, items);
            }
        }
    }

    /// Closes the record being assembled and emits it if valid
    ///
    /// Any open accumulator is committed first. The record is emitted only
    /// if every schema-required scalar is non-empty; absent list fields
    /// default to empty sequences.
    fn flush(&mut self, schema: &Schema) {
        self.commit_open_list();

        let mut record = match self.current.take() {
            Some(record) => record,
            None => return,
        };

        let missing: Vec<&str> = schema
            .required_scalar_names()
            .filter(|name| record.scalar(name).map_or(true, str::is_empty))
            .collect();

        if !missing.is_empty() {
            tracing::debug!(
                "Dropping record {}: missing required fields {:?}",
                record.id(),
                missing
            );
            return;
        }

        for name in schema.list_names() {
            if record.list(name).is_none() {
                record.set_list(name, Vec::new());
            }
        }

        self.records.push(record);
    }
}

/// Returns true if the line opens document scope for this schema
fn is_root_line(line: &str, schema: &Schema) -> bool {
    line.strip_suffix(':')
        .map_or(false, |key| key.trim() == schema.root_key())
}

/// Extracts the id text from an anchor line (`- id: <text>`), if the line
/// has the anchor form
fn anchor_value<'a>(line: &'a str, schema: &Schema) -> Option<&'a str> {
    let rest = line.strip_prefix("- ")?;
    let (key, value) = rest.split_once(':')?;
    if key.trim() == schema.anchor_key() {
        Some(value.trim())
    } else {
        None
    }
}

/// Strips one pair of surrounding double quotes, leaving interior quotes
/// untouched
fn strip_quotes(value: &str) -> &str {
    if value.len() >= 2 && value.starts_with('"') && value.ends_with('"') {
        &value[1..value.len() - 1]
    } else {
        value
    }
}
