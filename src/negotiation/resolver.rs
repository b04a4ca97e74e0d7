use std::sync::Arc;

use tracing::{debug, warn};

use super::method::MethodDefinition;
use super::prefix::{decode_path, split_path, CountryLangPrefix};
use super::rewriter::process_inbound;
use crate::config::DEFAULT_COUNTRY_CODE_FIELD;
use crate::error::NegotiationError;
use crate::languages::{LanguageManager, LanguageRecord};
use crate::storage::TermStorage;

/// Negotiates the language from a `country-language` path prefix.
///
/// The language half must be a configured language code and the country
/// half must match the country code field of at least one stored term.
#[derive(Clone)]
pub struct LanguageNegotiationCountry {
    language_manager: Option<Arc<dyn LanguageManager>>,
    term_storage: Arc<dyn TermStorage>,
    country_code_field: String,
}

impl LanguageNegotiationCountry {
    /// Create a negotiator reading country codes from `term_storage`.
    ///
    /// No language manager is attached yet, so `langcode` negotiates nothing
    /// until one is set with `with_language_manager`.
    pub fn new(term_storage: Arc<dyn TermStorage>) -> Self {
        Self {
            language_manager: None,
            term_storage,
            country_code_field: DEFAULT_COUNTRY_CODE_FIELD.to_string(),
        }
    }

    pub fn with_language_manager(mut self, language_manager: Arc<dyn LanguageManager>) -> Self {
        self.language_manager = Some(language_manager);
        self
    }

    pub fn with_country_code_field(mut self, field: impl Into<String>) -> Self {
        self.country_code_field = field.into();
        self
    }

    pub fn country_code_field(&self) -> &str {
        &self.country_code_field
    }

    pub fn definition() -> MethodDefinition {
        MethodDefinition::country()
    }

    /// Languages a prefix can negotiate; empty without a language manager.
    pub fn languages(&self) -> Vec<LanguageRecord> {
        self.language_manager
            .as_ref()
            .map(|manager| manager.languages())
            .unwrap_or_default()
    }

    /// Resolve the language code for a request path.
    ///
    /// # Returns
    /// * `Ok(Some(langcode))` when both the country and the language resolve
    /// * `Ok(None)` when there is no path, no language manager, or the first
    ///   segment is not a `country-language` prefix
    /// * `Err(NegotiationError::NotFound)` when the prefix is well-formed but
    ///   either half is unknown
    pub async fn langcode(
        &self,
        request_path: Option<&str>,
    ) -> Result<Option<String>, NegotiationError> {
        let (Some(request_path), Some(language_manager)) =
            (request_path, self.language_manager.as_ref())
        else {
            return Ok(None);
        };

        let decoded = decode_path(request_path.trim_matches('/'));
        let (segment, _) = split_path(&decoded);
        let Some(prefix) = CountryLangPrefix::parse_segment(segment) else {
            return Ok(None);
        };

        let language = language_manager
            .languages()
            .into_iter()
            .find(|language| language.id == prefix.langcode);

        let countries = self
            .term_storage
            .load_by_properties(&[(self.country_code_field.as_str(), prefix.country_code)])
            .await;

        match language {
            Some(language) if !countries.is_empty() => {
                debug!(
                    "Negotiated language '{}' for country '{}' ({} matching terms)",
                    language.id,
                    prefix.country_code,
                    countries.len()
                );
                Ok(Some(language.id))
            }
            language => {
                warn!(
                    "Unresolvable prefix '{}': language known = {}, country known = {}",
                    segment,
                    language.is_some(),
                    !countries.is_empty()
                );
                Err(NegotiationError::not_found(
                    prefix.country_code,
                    prefix.langcode,
                ))
            }
        }
    }

    /// Strip the `country-language` prefix from an inbound path.
    pub fn process_inbound(&self, path: &str) -> String {
        process_inbound(path)
    }
}
