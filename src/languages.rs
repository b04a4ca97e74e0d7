//! Language manager: the set of languages a prefix may negotiate.
//!
//! The resolver only needs the list of configured languages, so the host's
//! language manager is reduced to a single trait method. `ConfiguredLanguages`
//! is the in-memory implementation built from configuration.

use serde::Serialize;

/// A configured language.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LanguageRecord {
    /// Language code (e.g., "en", "es"), unique within a manager
    pub id: String,

    /// Human readable name (e.g., "English", "Español")
    pub name: String,
}

impl LanguageRecord {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
        }
    }
}

/// Read-only access to the host's configured languages.
pub trait LanguageManager: Send + Sync {
    /// All configured languages, in configuration order.
    fn languages(&self) -> Vec<LanguageRecord>;
}

/// Language manager backed by an in-memory list.
#[derive(Debug, Clone, Default)]
pub struct ConfiguredLanguages {
    languages: Vec<LanguageRecord>,
}

impl ConfiguredLanguages {
    /// Build a manager from a list of languages.
    ///
    /// Language codes are unique: when a code appears more than once, the
    /// first record wins and later ones are dropped.
    pub fn new(languages: impl IntoIterator<Item = LanguageRecord>) -> Self {
        let mut unique: Vec<LanguageRecord> = Vec::new();
        for language in languages {
            if unique.iter().any(|l| l.id == language.id) {
                continue;
            }
            unique.push(language);
        }
        Self { languages: unique }
    }

    /// Get a language by its code.
    pub fn get_by_id(&self, id: &str) -> Option<&LanguageRecord> {
        self.languages.iter().find(|lang| lang.id == id)
    }
}

impl LanguageManager for ConfiguredLanguages {
    fn languages(&self) -> Vec<LanguageRecord> {
        self.languages.clone()
    }
}
