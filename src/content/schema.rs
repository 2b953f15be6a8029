//! Schema declarations for content kinds
//!
//! A schema names the line keys the parser recognizes for one content kind:
//! the root key that opens document scope, the anchor key that starts a new
//! record, the scalar fields (required or optional), and the list fields.

/// Default anchor key observed across all content documents
pub const DEFAULT_ANCHOR_KEY: &str = "id";

/// A scalar field declaration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScalarField {
    /// The line key this field is assigned from
    pub name: String,

    /// Whether a record missing this field is dropped at flush
    pub required: bool,
}

/// Per content-kind declaration of recognized line keys
///
/// Built via chained calls:
///
/// ```
/// use folio_loom::content::Schema;
///
/// let schema = Schema::new("timeline")
///     .scalar("year")
///     .optional_scalar("note")
///     .list("technologies");
/// assert!(schema.is_scalar("year"));
/// assert!(schema.is_list("technologies"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Schema {
    root_key: String,
    anchor_key: String,
    scalars: Vec<ScalarField>,
    lists: Vec<String>,
}

impl Schema {
    /// Creates an empty schema with the given root key and the default anchor key
    pub fn new(root_key: &str) -> Self {
        Self {
            root_key: root_key.to_string(),
            anchor_key: DEFAULT_ANCHOR_KEY.to_string(),
            scalars: Vec::new(),
            lists: Vec::new(),
        }
    }

    /// Overrides the anchor key
    pub fn anchor(mut self, key: &str) -> Self {
        self.anchor_key = key.to_string();
        self
    }

    /// Adds a required scalar field
    pub fn scalar(mut self, name: &str) -> Self {
        self.scalars.push(ScalarField {
            name: name.to_string(),
            required: true,
        });
        self
    }

    /// Adds an optional scalar field
    pub fn optional_scalar(mut self, name: &str) -> Self {
        self.scalars.push(ScalarField {
            name: name.to_string(),
            required: false,
        });
        self
    }

    /// Adds a list field
    pub fn list(mut self, name: &str) -> Self {
        self.lists.push(name.to_string());
        self
    }

    /// The key that opens document scope (e.g., `timeline`)
    pub fn root_key(&self) -> &str {
        &self.root_key
    }

    /// The key whose dashed line starts a new record (e.g., `id`)
    pub fn anchor_key(&self) -> &str {
        &self.anchor_key
    }

    /// Returns true if the key names a recognized scalar field
    pub fn is_scalar(&self, key: &str) -> bool {
        self.scalars.iter().any(|f| f.name == key)
    }

    /// Returns true if the key names a recognized list field
    pub fn is_list(&self, key: &str) -> bool {
        self.lists.iter().any(|l| l == key)
    }

    /// All declared scalar fields, in declaration order
    pub fn scalar_fields(&self) -> &[ScalarField] {
        &self.scalars
    }

    /// All declared list field names, in declaration order
    pub fn list_names(&self) -> &[String] {
        &self.lists
    }

    /// Names of the scalar fields a record must carry non-empty to be emitted
    pub fn required_scalar_names(&self) -> impl Iterator<Item = &str> {
        self.scalars
            .iter()
            .filter(|f| f.required)
            .map(|f| f.name.as_str())
    }
}
