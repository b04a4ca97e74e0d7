use serde::Serialize;

/// Identifier of the country negotiation method.
pub const METHOD_ID: &str = "language-country";

/// Language types a negotiation method can decide.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum LanguageType {
    #[serde(rename = "language_interface")]
    Interface,
    #[serde(rename = "language_content")]
    Content,
    #[serde(rename = "language_url")]
    Url,
}

/// Description of a negotiation method, as shown to site administrators.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MethodDefinition {
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub types: Vec<LanguageType>,
}

impl MethodDefinition {
    pub(crate) fn country() -> Self {
        Self {
            id: METHOD_ID,
            name: "Country",
            description: "Language from the URL by country",
            types: vec![LanguageType::Interface, LanguageType::Content, LanguageType::Url],
        }
    }
}
