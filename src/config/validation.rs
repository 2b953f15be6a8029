use crate::config::types::{ClientConfig, Config, DocumentsConfig, OutputConfig, SiteConfig};
use crate::ConfigError;
use url::Url;

/// Validates the entire configuration
pub fn validate(config: &Config) -> Result<(), ConfigError> {
    validate_site_config(&config.site)?;
    validate_client_config(&config.client)?;
    validate_documents_config(&config.documents, &config.site)?;
    validate_output_config(&config.output)?;
    Ok(())
}

/// Validates site configuration
fn validate_site_config(config: &SiteConfig) -> Result<(), ConfigError> {
    let url = Url::parse(&config.base_url)
        .map_err(|e| ConfigError::InvalidUrl(format!("Invalid base_url: {}", e)))?;

    if url.scheme() != "http" && url.scheme() != "https" {
        return Err(ConfigError::Validation(format!(
            "base_url must use http or https scheme, got '{}'",
            url.scheme()
        )));
    }

    if let Some(language) = &config.default_language {
        validate_language(language)?;
    }

    Ok(())
}

/// Validates client identification configuration
fn validate_client_config(config: &ClientConfig) -> Result<(), ConfigError> {
    // Validate agent name: non-empty, alphanumeric + hyphens only
    if config.agent_name.is_empty() {
        return Err(ConfigError::Validation(
            "agent_name cannot be empty".to_string(),
        ));
    }

    if !config
        .agent_name
        .chars()
        .all(|c| c.is_alphanumeric() || c == '-')
    {
        return Err(ConfigError::Validation(format!(
            "agent_name must contain only alphanumeric characters and hyphens, got '{}'",
            config.agent_name
        )));
    }

    if config.agent_version.is_empty() {
        return Err(ConfigError::Validation(
            "agent_version cannot be empty".to_string(),
        ));
    }

    Ok(())
}

/// Validates the per-kind document paths
fn validate_documents_config(
    config: &DocumentsConfig,
    site: &SiteConfig,
) -> Result<(), ConfigError> {
    validate_document_path("timeline", &config.timeline, site)?;
    validate_document_path("education", &config.education, site)?;
    validate_document_path("projects", &config.projects, site)?;
    Ok(())
}

/// Validates a single document resource path
fn validate_document_path(name: &str, path: &str, site: &SiteConfig) -> Result<(), ConfigError> {
    if path.is_empty() {
        return Err(ConfigError::Validation(format!(
            "Document path for '{}' cannot be empty",
            name
        )));
    }

    if path.starts_with('/') {
        return Err(ConfigError::Validation(format!(
            "Document path for '{}' must be relative to base_url, got '{}'",
            name, path
        )));
    }

    // A {lang} placeholder is only resolvable when a default language exists
    // or the caller always supplies one; require the default so the CLI's
    // no-argument path cannot produce an unresolvable URL.
    if path.contains("{lang}") && site.default_language.is_none() {
        return Err(ConfigError::Validation(format!(
            "Document path for '{}' uses {{lang}} but no default-language is set",
            name
        )));
    }

    Ok(())
}

/// Validates output configuration
fn validate_output_config(config: &OutputConfig) -> Result<(), ConfigError> {
    if config.summary_path.is_empty() {
        return Err(ConfigError::Validation(
            "summary_path cannot be empty".to_string(),
        ));
    }

    Ok(())
}

/// Validates a language tag (e.g., "en", "en-US")
fn validate_language(language: &str) -> Result<(), ConfigError> {
    if language.is_empty() {
        return Err(ConfigError::Validation(
            "default_language cannot be empty".to_string(),
        ));
    }

    if !language
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || c == '-')
    {
        return Err(ConfigError::Validation(format!(
            "default_language must contain only ASCII alphanumerics and hyphens, got '{}'",
            language
        )));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn site(base_url: &str, language: Option<&str>) -> SiteConfig {
        SiteConfig {
            base_url: base_url.to_string(),
            default_language: language.map(|l| l.to_string()),
        }
    }

    #[test]
    fn test_validate_site_config() {
        assert!(validate_site_config(&site("https://example.com/", None)).is_ok());
        assert!(validate_site_config(&site("http://localhost:8080/", None)).is_ok());

        assert!(validate_site_config(&site("ftp://example.com/", None)).is_err());
        assert!(validate_site_config(&site("not a url", None)).is_err());
    }

    #[test]
    fn test_validate_language() {
        assert!(validate_language("en").is_ok());
        assert!(validate_language("en-US").is_ok());

        assert!(validate_language("").is_err());
        assert!(validate_language("en_US").is_err());
    }

    #[test]
    fn test_validate_client_config() {
        let valid = ClientConfig {
            agent_name: "folio-loom".to_string(),
            agent_version: "1.0".to_string(),
        };
        assert!(validate_client_config(&valid).is_ok());

        let empty_name = ClientConfig {
            agent_name: String::new(),
            agent_version: "1.0".to_string(),
        };
        assert!(validate_client_config(&empty_name).is_err());

        let bad_name = ClientConfig {
            agent_name: "folio loom!".to_string(),
            agent_version: "1.0".to_string(),
        };
        assert!(validate_client_config(&bad_name).is_err());

        let empty_version = ClientConfig {
            agent_name: "folio-loom".to_string(),
            agent_version: String::new(),
        };
        assert!(validate_client_config(&empty_version).is_err());
    }

    #[test]
    fn test_validate_document_path() {
        let plain = site("https://example.com/", None);
        assert!(validate_document_path("timeline", "data/experience.yml", &plain).is_ok());
        assert!(validate_document_path("timeline", "", &plain).is_err());
        assert!(validate_document_path("timeline", "/data/experience.yml", &plain).is_err());
    }

    #[test]
    fn test_lang_placeholder_requires_default_language() {
        let without = site("https://example.com/", None);
        assert!(validate_document_path("timeline", "data/{lang}/experience.yml", &without).is_err());

        let with = site("https://example.com/", Some("en"));
        assert!(validate_document_path("timeline", "data/{lang}/experience.yml", &with).is_ok());
    }

    #[test]
    fn test_validate_output_config() {
        let valid = OutputConfig {
            summary_path: "./summary.md".to_string(),
        };
        assert!(validate_output_config(&valid).is_ok());

        let empty = OutputConfig {
            summary_path: String::new(),
        };
        assert!(validate_output_config(&empty).is_err());
    }
}
