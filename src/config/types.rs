use serde::Deserialize;

/// Main configuration structure for Folio-Loom
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub site: SiteConfig,
    pub client: ClientConfig,
    pub documents: DocumentsConfig,
    pub output: OutputConfig,
}

/// Site-level configuration
#[derive(Debug, Clone, Deserialize)]
pub struct SiteConfig {
    /// Base URL that document paths are resolved against
    #[serde(rename = "base-url")]
    pub base_url: String,

    /// Language used when a hydrate call does not name one
    #[serde(rename = "default-language")]
    pub default_language: Option<String>,
}

/// HTTP client identification configuration
#[derive(Debug, Clone, Deserialize)]
pub struct ClientConfig {
    /// Name sent in the User-Agent header
    #[serde(rename = "agent-name")]
    pub agent_name: String,

    /// Version sent in the User-Agent header
    #[serde(rename = "agent-version")]
    pub agent_version: String,
}

/// Per-kind document resource paths
///
/// Paths are relative to the site base URL and may contain a `{lang}`
/// placeholder, substituted from the requested or default language.
#[derive(Debug, Clone, Deserialize)]
pub struct DocumentsConfig {
    /// Resource path for the experience timeline document
    pub timeline: String,

    /// Resource path for the education document
    pub education: String,

    /// Resource path for the project gallery document
    pub projects: String,
}

/// Output configuration
#[derive(Debug, Clone, Deserialize)]
pub struct OutputConfig {
    /// Path to the markdown summary file
    #[serde(rename = "summary-path")]
    pub summary_path: String,
}
