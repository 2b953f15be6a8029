//! Decoded content records
//!
//! A record is one structured entity decoded from a content document: an
//! integer anchor id, an ordered scalar-field mapping, and an ordered
//! list-field mapping. Ordering follows first assignment, so records
//! round-trip through the document writer without reshuffling fields.

/// One structured content entity decoded from a document
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    id: i64,
    scalars: Vec<(String, String)>,
    lists: Vec<(String, Vec<String>)>,
}

impl Record {
    /// Creates an empty record with the given anchor id
    pub fn new(id: i64) -> Self {
        Self {
            id,
            scalars: Vec::new(),
            lists: Vec::new(),
        }
    }

    /// The integer parsed from the record's anchor line
    pub fn id(&self) -> i64 {
        self.id
    }

    /// Looks up a scalar field value
    pub fn scalar(&self, key: &str) -> Option<&str> {
        self.scalars
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// Assigns a scalar field, overwriting in place if the key already exists
    pub fn set_scalar(&mut self, key: &str, value: &str) {
        if let Some(entry) = self.scalars.iter_mut().find(|(k, _)| k == key) {
            entry.1 = value.to_string();
        } else {
            self.scalars.push((key.to_string(), value.to_string()));
        }
    }

    /// Looks up a list field
    pub fn list(&self, key: &str) -> Option<&[String]> {
        self.lists
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_slice())
    }

    /// Assigns a list field, overwriting in place if the key already exists
    pub fn set_list(&mut self, key: &str, items: Vec<String>) {
        if let Some(entry) = self.lists.iter_mut().find(|(k, _)| k == key) {
            entry.1 = items;
        } else {
            self.lists.push((key.to_string(), items));
        }
    }

    /// All scalar fields in assignment order
    pub fn scalars(&self) -> impl Iterator<Item = (&str, &str)> {
        self.scalars.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// All list fields in assignment order
    pub fn lists(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.lists.iter().map(|(k, v)| (k.as_str(), v.as_slice()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_record_is_empty() {
        let record = Record::new(7);
        assert_eq!(record.id(), 7);
        assert_eq!(record.scalars().count(), 0);
        assert_eq!(record.lists().count(), 0);
    }

    #[test]
    fn test_scalar_lookup() {
        let mut record = Record::new(1);
        record.set_scalar("year", "2024");

        assert_eq!(record.scalar("year"), Some("2024"));
        assert_eq!(record.scalar("title"), None);
    }

    #[test]
    fn test_scalar_overwrite_keeps_position() {
        let mut record = Record::new(1);
        record.set_scalar("year", "2023");
        record.set_scalar("title", "Engineer");
        record.set_scalar("year", "2024");

        assert_eq!(record.scalar("year"), Some("2024"));
        let keys: Vec<&str> = record.scalars().map(|(k, _)| k).collect();
        assert_eq!(keys, vec!["year", "title"]);
    }

    #[test]
    fn test_list_assignment() {
        let mut record = Record::new(1);
        record.set_list(
            "technologies",
            vec!["React".to_string(), "TypeScript".to_string()],
        );

        assert_eq!(
            record.list("technologies"),
            Some(&["React".to_string(), "TypeScript".to_string()][..])
        );
        assert_eq!(record.list("achievements"), None);
    }

    #[test]
    fn test_list_overwrite() {
        let mut record = Record::new(1);
        record.set_list("stack", vec!["Rust".to_string()]);
        record.set_list("stack", vec!["Rust".to_string(), "Tokio".to_string()]);

        assert_eq!(record.list("stack").unwrap().len(), 2);
        assert_eq!(record.lists().count(), 1);
    }

    #[test]
    fn test_field_order_follows_first_assignment() {
        let mut record = Record::new(1);
        record.set_scalar("title", "Engineer");
        record.set_scalar("year", "2024");
        record.set_list("achievements", vec![]);
        record.set_list("technologies", vec!["Rust".to_string()]);

        let scalar_keys: Vec<&str> = record.scalars().map(|(k, _)| k).collect();
        assert_eq!(scalar_keys, vec!["title", "year"]);

        let list_keys: Vec<&str> = record.lists().map(|(k, _)| k).collect();
        assert_eq!(list_keys, vec!["achievements", "technologies"]);
    }
}
