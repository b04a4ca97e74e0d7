//! Term storage: generic entity lookup by field values.

use async_trait::async_trait;
use std::collections::BTreeMap;

/// A stored taxonomy term and its field values.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Term {
    pub id: u64,
    pub fields: BTreeMap<String, String>,
}

impl Term {
    pub fn field(&self, name: &str) -> Option<&str> {
        self.fields.get(name).map(String::as_str)
    }
}

/// Read-only lookup over stored terms.
#[async_trait]
pub trait TermStorage: Send + Sync {
    /// Load every term whose fields equal all of `properties`.
    async fn load_by_properties(&self, properties: &[(&str, &str)]) -> Vec<Term>;
}

/// Term storage held in memory.
#[derive(Debug, Clone, Default)]
pub struct InMemoryTermStorage {
    terms: Vec<Term>,
}

impl InMemoryTermStorage {
    pub fn new(terms: Vec<Term>) -> Self {
        Self { terms }
    }

    /// Seed one term per country code, stored under `field`.
    pub fn with_country_codes<I, S>(field: &str, codes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let terms = codes
            .into_iter()
            .zip(1u64..)
            .map(|(code, id)| Term {
                id,
                fields: BTreeMap::from([(field.to_string(), code.into())]),
            })
            .collect();
        Self { terms }
    }
}

#[async_trait]
impl TermStorage for InMemoryTermStorage {
    async fn load_by_properties(&self, properties: &[(&str, &str)]) -> Vec<Term> {
        self.terms
            .iter()
            .filter(|term| {
                properties
                    .iter()
                    .all(|(name, value)| term.field(name) == Some(*value))
            })
            .cloned()
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const FIELD: &str = "field_country_code";

    #[tokio::test]
    async fn test_load_by_properties_match() {
        let storage = InMemoryTermStorage::with_country_codes(FIELD, ["us", "pe"]);
        let terms = storage.load_by_properties(&[(FIELD, "pe")]).await;

        assert_eq!(terms.len(), 1);
        assert_eq!(terms[0].id, 2);
        assert_eq!(terms[0].field(FIELD), Some("pe"));
    }

    #[tokio::test]
    async fn test_load_by_properties_no_match() {
        let storage = InMemoryTermStorage::with_country_codes(FIELD, ["us"]);
        assert!(storage.load_by_properties(&[(FIELD, "US")]).await.is_empty());
        assert!(storage.load_by_properties(&[("field_other", "us")]).await.is_empty());
    }

    #[tokio::test]
    async fn test_load_by_properties_returns_all_duplicates() {
        let storage = InMemoryTermStorage::with_country_codes(FIELD, ["us", "us", "mx"]);
        let terms = storage.load_by_properties(&[(FIELD, "us")]).await;

        assert_eq!(terms.iter().map(|t| t.id).collect::<Vec<_>>(), vec![1, 2]);
    }

    #[tokio::test]
    async fn test_load_by_properties_requires_every_property() {
        let term = Term {
            id: 7,
            fields: BTreeMap::from([
                (FIELD.to_string(), "us".to_string()),
                ("name".to_string(), "United States".to_string()),
            ]),
        };
        let storage = InMemoryTermStorage::new(vec![term]);

        assert_eq!(
            storage
                .load_by_properties(&[(FIELD, "us"), ("name", "United States")])
                .await
                .len(),
            1
        );
        assert!(storage
            .load_by_properties(&[(FIELD, "us"), ("name", "Peru")])
            .await
            .is_empty());
    }

    #[tokio::test]
    async fn test_empty_properties_match_everything() {
        let storage = InMemoryTermStorage::with_country_codes(FIELD, ["us", "pe"]);
        assert_eq!(storage.load_by_properties(&[]).await.len(), 2);
    }
}
