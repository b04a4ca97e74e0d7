use anyhow::{Context, Result};

use crate::languages::LanguageRecord;

/// Field the country code is stored under on taxonomy terms.
pub const DEFAULT_COUNTRY_CODE_FIELD: &str = "field_country_code";

#[derive(Debug, Clone)]
pub struct Config {
    // Server
    pub port: u16,

    // Language manager
    pub languages: Vec<LanguageRecord>,

    // Term storage
    pub country_codes: Vec<String>,
    pub country_code_field: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        Ok(Self {
            port: std::env::var("PORT")
                .ok()
                .map(|v| v.parse().context("PORT must be a valid port number"))
                .transpose()?
                .unwrap_or(8080),

            languages: parse_languages(
                &std::env::var("LANGUAGES").unwrap_or_else(|_| "en".to_string()),
            ),

            country_codes: parse_list(
                &std::env::var("COUNTRY_CODES").unwrap_or_else(|_| "us".to_string()),
            ),
            country_code_field: std::env::var("COUNTRY_CODE_FIELD")
                .ok()
                .filter(|v| !v.trim().is_empty())
                .unwrap_or_else(|| DEFAULT_COUNTRY_CODE_FIELD.to_string()),
        })
    }
}

/// Split a comma separated list, dropping blank entries.
fn parse_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .collect()
}

/// Parse `code` or `code:Name` entries. A bare code is its own name.
fn parse_languages(raw: &str) -> Vec<LanguageRecord> {
    parse_list(raw)
        .into_iter()
        .filter_map(|entry| {
            let (id, name) = match entry.split_once(':') {
                Some((id, name)) => (id.trim(), name.trim()),
                None => (entry.as_str(), entry.as_str()),
            };
            (!id.is_empty()).then(|| LanguageRecord::new(id, if name.is_empty() { id } else { name }))
        })
        .collect()
}
