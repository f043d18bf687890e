//! Parse failure taxonomy.
//!
//! The engine performs no local recovery: the first failure from context
//! resolution, dispatch, or a capability invocation aborts the parse and is
//! returned to the caller with the offending key, value, or name attached.
//! A failed parse yields no partial result.

use serde_json::Value;

use as_vocabulary::ModelError;

/// Errors that abort a vocabulary parse.
#[derive(Debug, thiserror::Error)]
pub enum ParseError {
    /// The document has no `@context`, so no ontology nodes can be resolved
    /// and the parse never starts.
    #[error("document has no @context")]
    MissingContext,

    /// The `@context` value has an unrecognized shape. The message describes
    /// the shape that was found.
    #[error("malformed @context: {0}")]
    MalformedContext(String),

    /// The registry does not know the named ontology or alias found in
    /// `@context`.
    #[error("no ontology registered for {0:?}")]
    UnresolvableReference(String),

    /// No active node claimed a key during structural traversal. This is the
    /// primary failure mode for malformed or under-specified documents.
    #[error("no node recognizes key {key:?}")]
    UnrecognizedKey {
        /// The unclaimed key; empty when a whole-document override node
        /// declined the remaining document.
        key: String,
        /// The value being applied, when the failure came from an apply
        /// dispatch.
        value: Option<Value>,
    },

    /// A vocabulary-model invariant was violated: a duplicate entity name or
    /// a string that does not parse as a URI.
    #[error(transparent)]
    Model(#[from] ModelError),

    /// An ontology node failed internally. Opaque to the engine and
    /// propagated immediately.
    #[error(transparent)]
    Node(#[from] anyhow::Error),
}
