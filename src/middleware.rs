//! Country/language negotiation middleware
//!
//! Resolves the language from the request path, stores it in the request
//! extensions and rewrites the URI so routing sees the path without the
//! `country-language` prefix. The prefix is detected on the decoded path,
//! so an encoded prefix such as `us%2Den` is both negotiated and stripped.
//! It must wrap the router rather than be added
//! with `Router::layer`, otherwise routing happens before the rewrite.

use std::sync::Arc;

use axum::{
    extract::{Request, State},
    http::{uri::PathAndQuery, Uri},
    middleware::Next,
    response::{IntoResponse, Response},
};
use tracing::{debug, warn};

use crate::negotiation::{decode_path, split_path, CountryLangPrefix, LanguageNegotiationCountry};

/// Language negotiated for the current request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NegotiatedLanguage(pub String);

/// Middleware negotiating the language and stripping the path prefix.
pub async fn negotiate_country_language(
    State(negotiator): State<Arc<LanguageNegotiationCountry>>,
    mut req: Request,
    next: Next,
) -> Response {
    let path = req.uri().path().to_string();

    match negotiator.langcode(Some(path.as_str())).await {
        Ok(Some(langcode)) => {
            req.extensions_mut().insert(NegotiatedLanguage(langcode));
        }
        Ok(None) => {}
        Err(err) => return err.into_response(),
    }

    let rewritten = strip_encoded_prefix(&path);
    if rewritten != path {
        debug!("Rewrote inbound path '{}' to '{}'", path, rewritten);
        *req.uri_mut() = replace_path(req.uri(), &rewritten);
    }

    next.run(req).await
}

/// Drop the `country-language` prefix from a percent-encoded URI path.
///
/// The prefix is detected on the decoded path, as the resolver sees it, and
/// the remaining segments are encoded again. A path without a prefix is
/// returned untouched.
fn strip_encoded_prefix(raw: &str) -> String {
    let decoded = decode_path(raw.trim_matches('/'));
    let (prefix, tail) = split_path(&decoded);
    if CountryLangPrefix::parse_segment(prefix).is_none() {
        return raw.to_string();
    }

    let tail: Vec<_> = tail.into_iter().map(urlencoding::encode).collect();
    format!("/{}", tail.join("/"))
}

/// Swap the path of `uri`, keeping its scheme, authority and query.
fn replace_path(uri: &Uri, path: &str) -> Uri {
    let path_and_query = match uri.query() {
        Some(query) => format!("{}?{}", path, query),
        None => path.to_string(),
    };

    let mut parts = uri.clone().into_parts();
    match path_and_query.parse::<PathAndQuery>() {
        Ok(pq) => parts.path_and_query = Some(pq),
        Err(err) => {
            warn!("Keeping '{}': rewritten path '{}' is invalid: {}", uri, path, err);
            return uri.clone();
        }
    }
    Uri::from_parts(parts).unwrap_or_else(|err| {
        warn!("Keeping '{}': cannot rebuild with path '{}': {}", uri, path, err);
        uri.clone()
    })
}
