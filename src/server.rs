use std::sync::Arc;

use axum::{
    extract::{Request, State},
    middleware::from_fn_with_state,
    routing::get,
    Extension, Json, Router,
};
use serde::Serialize;
use tower::Layer;
use tower_http::trace::TraceLayer;

use crate::config::Config;
use crate::languages::{ConfiguredLanguages, LanguageRecord};
use crate::middleware::{negotiate_country_language, NegotiatedLanguage};
use crate::negotiation::{LanguageNegotiationCountry, MethodDefinition};
use crate::storage::InMemoryTermStorage;

/// Build the negotiator from configuration, with in-memory collaborators.
pub fn negotiator_from_config(config: &Config) -> LanguageNegotiationCountry {
    let languages = ConfiguredLanguages::new(config.languages.clone());
    let storage = InMemoryTermStorage::with_country_codes(
        &config.country_code_field,
        config.country_codes.iter().cloned(),
    );

    LanguageNegotiationCountry::new(Arc::new(storage))
        .with_language_manager(Arc::new(languages))
        .with_country_code_field(config.country_code_field.clone())
}

#[derive(Debug, Serialize)]
pub struct PageResponse {
    pub path: String,
    pub langcode: Option<String>,
}

/// The negotiation method together with the languages it can negotiate.
#[derive(Debug, Serialize)]
pub struct NegotiationInfo {
    #[serde(flatten)]
    pub method: MethodDefinition,
    pub languages: Vec<LanguageRecord>,
}

/// Build the demo application.
///
/// The router sits behind the negotiation middleware, which in turn is the
/// fallback of an empty outer router, so requests are rewritten before the
/// inner router matches them.
pub fn build_app(negotiator: LanguageNegotiationCountry) -> Router {
    let negotiator = Arc::new(negotiator);

    let router = Router::new()
        .route("/health", get(health))
        .route("/negotiation", get(definition))
        .fallback(page)
        .with_state(Arc::clone(&negotiator));

    let negotiated = from_fn_with_state(negotiator, negotiate_country_language).layer(router);

    Router::new()
        .fallback_service(negotiated)
        .layer(TraceLayer::new_for_http())
}

async fn health() -> &'static str {
    "OK"
}

async fn definition(
    State(negotiator): State<Arc<LanguageNegotiationCountry>>,
) -> Json<NegotiationInfo> {
    Json(NegotiationInfo {
        method: LanguageNegotiationCountry::definition(),
        languages: negotiator.languages(),
    })
}

async fn page(language: Option<Extension<NegotiatedLanguage>>, req: Request) -> Json<PageResponse> {
    Json(PageResponse {
        path: req.uri().path().to_string(),
        langcode: language.map(|Extension(NegotiatedLanguage(code))| code),
    })
}
