//! Country/language negotiation from the first path segment.
//!
//! A path such as `/us-en/products` carries a `country-language` prefix.
//! The resolver validates both halves against the language manager and the
//! term storage; the rewriter only checks the prefix shape and drops it so
//! the router sees `/products`.
//!
//! The two operations are independent. The rewriter strips any well-formed
//! prefix, including ones the resolver rejects as not found.

mod method;
mod prefix;
mod resolver;
mod rewriter;

pub use method::{LanguageType, MethodDefinition, METHOD_ID};
pub use prefix::{decode_path, split_path, CountryLangPrefix};
pub use resolver::LanguageNegotiationCountry;
pub use rewriter::process_inbound;
