//! Language negotiation from a `country-language` URL prefix.
//!
//! A request for `/us-en/products` negotiates the language `en` for the
//! country `us`, and the router dispatches on `/products`.
//!
//! - `negotiation`: the resolver and the inbound path rewriter
//! - `languages`: the language manager the resolver reads from
//! - `storage`: the term storage holding country codes
//! - `middleware` / `server`: the axum host used by the binary

pub mod config;
pub mod error;
pub mod languages;
pub mod middleware;
pub mod negotiation;
pub mod server;
pub mod storage;
