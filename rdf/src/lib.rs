//! Vocabulary specification parsing engine.
//!
//! The `as-rdf` crate walks a JSON-LD-flavored vocabulary specification
//! document and produces the typed model in [`as_vocabulary`]. The engine
//! itself knows only generic JSON-LD structure: it resolves the document's
//! `@context` against a [`Registry`] to assemble an ordered list of pluggable
//! ontology nodes, then drives a depth-first traversal that offers every key
//! to those nodes in priority order. All vocabulary-specific interpretation
//! lives in the [`RdfNode`] implementations; they mutate the entity in scope
//! through its capability traits and may temporarily seize dispatch for one
//! key or for the rest of the document.
//!
//! One parse owns one [`ParsingContext`] exclusively. Parsing the same
//! document from several threads requires one context per parse; the registry
//! is read-only during a parse and safe to share.
//!
//! # Example
//!
//! ```
//! use std::sync::Arc;
//!
//! use as_rdf::{parse_vocabulary, JsonLd, ParseError, Registry, RdfNode};
//!
//! /// Knows one ontology and attaches no nodes to it.
//! struct BareRegistry;
//!
//! impl Registry for BareRegistry {
//!     fn for_name(&self, name: &str) -> Result<Vec<Arc<dyn RdfNode>>, ParseError> {
//!         if name == "https://www.w3.org/ns/activitystreams" {
//!             Ok(Vec::new())
//!         } else {
//!             Err(ParseError::UnresolvableReference(name.to_owned()))
//!         }
//!     }
//!
//!     fn for_alias(&self, alias: &str, _name: &str) -> Result<Vec<Arc<dyn RdfNode>>, ParseError> {
//!         Err(ParseError::UnresolvableReference(alias.to_owned()))
//!     }
//!
//!     fn for_aliased_object(
//!         &self,
//!         alias: &str,
//!         _spec: &JsonLd,
//!     ) -> Result<Vec<Arc<dyn RdfNode>>, ParseError> {
//!         Err(ParseError::UnresolvableReference(alias.to_owned()))
//!     }
//! }
//!
//! let document = serde_json::json!({
//!     "@context": "https://www.w3.org/ns/activitystreams"
//! });
//! let input: JsonLd = match document {
//!     serde_json::Value::Object(map) => map,
//!     _ => unreachable!(),
//! };
//! let parsed = parse_vocabulary(&BareRegistry, &input)?;
//! assert!(parsed.vocab.types.is_empty());
//! # Ok::<(), as_rdf::ParseError>(())
//! ```

#![deny(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    missing_docs,
    clippy::missing_errors_doc
)]

pub mod context;
pub mod error;
pub mod node;
pub mod registry;
pub mod resolve;
pub mod well_known;

mod parse;

pub use context::ParsingContext;
pub use error::ParseError;
pub use node::{JsonLd, RdfNode, JSON_LD_CONTEXT, JSON_LD_TYPE, JSON_LD_TYPE_ALIAS};
pub use parse::parse_vocabulary;
pub use registry::Registry;
pub use resolve::resolve_context;
