//! Hydration orchestration
//!
//! This module contains the hydrator that drives each section's content
//! cycle: resolve the document URL, fetch, parse, substitute the fallback
//! when anything goes wrong, and publish the result through the section's
//! generation guard.
//!
//! The hydrator never surfaces an error to its caller: every cycle produces
//! a non-empty, renderable record list. Failure reasons are logged for
//! diagnostics only.

use crate::config::Config;
use crate::content::{fallback_records, ContentKind, Record};
use crate::hydrate::cell::{ContentOrigin, PublishedList, SectionCell};
use crate::hydrate::fetcher::{build_http_client, fetch_document, FetchOutcome};
use crate::hydrate::parser::parse;
use crate::{LoomError, Result};
use reqwest::Client;
use std::sync::Arc;
use url::Url;

/// Drives hydrate cycles and owns each section's published record list
pub struct Hydrator {
    config: Arc<Config>,
    client: Client,
    timeline: SectionCell,
    education: SectionCell,
    projects: SectionCell,
}

impl Hydrator {
    /// Creates a hydrator from a validated configuration
    ///
    /// # Arguments
    ///
    /// * `config` - The loaded configuration
    ///
    /// # Returns
    ///
    /// * `Ok(Hydrator)` - Ready to hydrate
    /// * `Err(LoomError)` - Failed to build the HTTP client
    pub fn new(config: Config) -> Result<Self> {
        let client = build_http_client(&config.client)?;

        Ok(Self {
            config: Arc::new(config),
            client,
            timeline: SectionCell::new(),
            education: SectionCell::new(),
            projects: SectionCell::new(),
        })
    }

    /// The section cell for a content kind
    fn cell(&self, kind: ContentKind) -> &SectionCell {
        match kind {
            ContentKind::Timeline => &self.timeline,
            ContentKind::Education => &self.education,
            ContentKind::Projects => &self.projects,
        }
    }

    /// Resolves a content kind's logical document id to a concrete URL
    ///
    /// The configured path is joined onto the site base URL after
    /// substituting any `{lang}` placeholder from the requested language,
    /// falling back to the configured default language.
    pub fn resolve_document_url(
        &self,
        kind: ContentKind,
        language: Option<&str>,
    ) -> Result<Url> {
        let template = match kind {
            ContentKind::Timeline => &self.config.documents.timeline,
            ContentKind::Education => &self.config.documents.education,
            ContentKind::Projects => &self.config.documents.projects,
        };

        let path = if template.contains("{lang}") {
            let language = language
                .or(self.config.site.default_language.as_deref())
                .ok_or_else(|| LoomError::MissingDocument(kind.to_string()))?;
            template.replace("{lang}", language)
        } else {
            template.clone()
        };

        let base = Url::parse(&self.config.site.base_url)?;
        Ok(base.join(&path)?)
    }

    /// Runs one hydrate cycle for a section
    ///
    /// Fetches and parses the section's document, substituting the fixed
    /// fallback list on fetch failure or when parsing yields no valid
    /// records. The result is committed to the section cell only if this
    /// cycle is still the newest begun for it; a stale cycle's result is
    /// discarded rather than overwriting fresher content.
    ///
    /// # Arguments
    ///
    /// * `kind` - The content kind to hydrate
    /// * `language` - Language for `{lang}` document paths; None uses the
    ///   configured default
    ///
    /// # Returns
    ///
    /// The cycle's record list, never empty
    pub async fn hydrate(&self, kind: ContentKind, language: Option<&str>) -> Vec<Record> {
        let cell = self.cell(kind);
        let generation = cell.begin_cycle();
        let schema = kind.schema();

        let (records, origin) = match self.resolve_document_url(kind, language) {
            Ok(url) => match fetch_document(&self.client, url.as_str()).await {
                FetchOutcome::Success {
                    text, content_hash, ..
                } => {
                    tracing::debug!(
                        "Fetched {} document: {} bytes, sha256 {}",
                        kind,
                        text.len(),
                        &content_hash[..8]
                    );

                    let parsed = parse(&text, &schema);
                    if parsed.is_empty() {
                        tracing::info!(
                            "Document for {} yielded no valid records, substituting fallback",
                            kind
                        );
                        (fallback_records(kind), ContentOrigin::Fallback)
                    } else {
                        (parsed, ContentOrigin::Live)
                    }
                }
                FetchOutcome::Failure { reason } => {
                    tracing::warn!(
                        "Fetch failed for {} document ({}), substituting fallback",
                        kind,
                        reason
                    );
                    (fallback_records(kind), ContentOrigin::Fallback)
                }
            },
            Err(e) => {
                tracing::warn!(
                    "Could not resolve {} document URL ({}), substituting fallback",
                    kind,
                    e
                );
                (fallback_records(kind), ContentOrigin::Fallback)
            }
        };

        if !cell.commit(generation, records.clone(), origin) {
            tracing::debug!(
                "Discarding stale {} hydrate cycle (generation {})",
                kind,
                generation
            );
        }

        records
    }

    /// Hydrates every content kind in turn
    ///
    /// # Arguments
    ///
    /// * `language` - Language passed to each cycle
    ///
    /// # Returns
    ///
    /// One `(kind, records)` pair per content kind, in kind order
    pub async fn hydrate_all(&self, language: Option<&str>) -> Vec<(ContentKind, Vec<Record>)> {
        let mut results = Vec::new();
        for kind in ContentKind::all_kinds() {
            let records = self.hydrate(kind, language).await;
            results.push((kind, records));
        }
        results
    }

    /// The currently published list for a section, if a cycle has completed
    pub fn published(&self, kind: ContentKind) -> Option<PublishedList> {
        self.cell(kind).snapshot()
    }

    /// The configuration this hydrator was built from
    pub fn config(&self) -> &Config {
        &self.config
    }
}
