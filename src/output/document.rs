//! Content document writer
//!
//! Re-emits a record list in the same line-oriented grammar the parser
//! reads, such that parsing the output reproduces every scalar and list
//! field exactly, in order.

use crate::content::{Record, Schema};

/// Serializes records into a content document under the given schema
///
/// Scalar values and list items are emitted quoted; each list field is
/// followed by a blank line that commits it on re-parse.
///
/// # Arguments
///
/// * `records` - The records to serialize
/// * `schema` - The schema providing the root and anchor keys
///
/// # Returns
///
/// The document text
pub fn write_document(records: &[Record], schema: &Schema) -> String {
    let mut out = String::new();

    out.push_str(schema.root_key());
    out.push_str(":\n");

    for record in records {
        out.push_str(&format!("- {}: {}\n", schema.anchor_key(), record.id()));

        for (key, value) in record.scalars() {
            out.push_str(&format!("{}: \"{}\"\n", key, value));
        }

        for (key, items) in record.lists() {
            out.push_str(&format!("{}:\n", key));
            for item in items {
                out.push_str(&format!("- \"{}\"\n", item));
            }
            out.push('\n');
        }
    }

    out
}
