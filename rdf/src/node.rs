//! The pluggable ontology node contract.

use serde_json::{Map, Value};

use crate::context::ParsingContext;
use crate::error::ParseError;

/// The `@context` key, consumed during resolution and skipped during
/// traversal.
pub const JSON_LD_CONTEXT: &str = "@context";
/// The `@type` key, dispatched ahead of its sibling keys.
pub const JSON_LD_TYPE: &str = "@type";
/// The bare `type` alias, dispatched like `@type` when `@type` is absent.
pub const JSON_LD_TYPE_ALIAS: &str = "type";

/// The generic string-keyed object tree a vocabulary document is parsed from,
/// equivalent to one level of decoded JSON.
pub type JsonLd = Map<String, Value>;

/// A pluggable interpreter for one ontology's keys.
///
/// The engine offers every key to the active nodes in priority order and stops
/// at the first node that reports it handled the call. A node decides for
/// itself whether a key belongs to its ontology and returns `Ok(false)`
/// otherwise; it must not assume unrelated keys are routed elsewhere. Nodes
/// mutate the parse through the [`ParsingContext`] — the entity in scope, the
/// scope stack, the result, and the two dispatch overrides.
///
/// When a node has seized whole-document dispatch it is called through
/// [`apply`](RdfNode::apply) with an empty key and the entire remaining value.
pub trait RdfNode: std::fmt::Debug {
    /// Called when traversal descends into an object or array element under
    /// `key`. Returns whether this node handled the descent.
    ///
    /// # Errors
    ///
    /// Any error aborts the parse.
    fn enter(&self, key: &str, ctx: &mut ParsingContext) -> Result<bool, ParseError>;

    /// Called when traversal leaves an object or array element under `key`.
    /// Returns whether this node handled the ascent.
    ///
    /// # Errors
    ///
    /// Any error aborts the parse.
    fn exit(&self, key: &str, ctx: &mut ParsingContext) -> Result<bool, ParseError>;

    /// Called with a scalar value for `key`, or with the whole remaining
    /// document when this node holds the whole-document override. Returns
    /// whether this node handled the value.
    ///
    /// # Errors
    ///
    /// Any error aborts the parse.
    fn apply(&self, key: &str, value: &Value, ctx: &mut ParsingContext) -> Result<bool, ParseError>;
}
