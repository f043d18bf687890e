//! The ontology registry contract.

use std::sync::Arc;

use crate::error::ParseError;
use crate::node::{JsonLd, RdfNode};

/// Resolves `@context` entries to the nodes that interpret an ontology's keys.
///
/// The registry is the one long-lived collaborator of a parse. It is queried
/// once, while `@context` is resolved, and treated as read-only afterwards;
/// the node lists it returns are in dispatch-priority order.
pub trait Registry {
    /// Returns the nodes for the ontology known as `name` (typically its
    /// canonical URI).
    ///
    /// # Errors
    ///
    /// Returns [`ParseError::UnresolvableReference`] if `name` is unknown.
    fn for_name(&self, name: &str) -> Result<Vec<Arc<dyn RdfNode>>, ParseError>;

    /// Returns the nodes for the ontology `name` bound under `alias`.
    ///
    /// # Errors
    ///
    /// Returns [`ParseError::UnresolvableReference`] if the alias or name is
    /// unknown.
    fn for_alias(&self, alias: &str, name: &str) -> Result<Vec<Arc<dyn RdfNode>>, ParseError>;

    /// Returns the nodes for an alias bound to a term-refinement object (an
    /// alias whose `@context` value carries structural detail such as a
    /// container restriction).
    ///
    /// # Errors
    ///
    /// Returns [`ParseError::UnresolvableReference`] if the alias or the
    /// object's target is unknown.
    fn for_aliased_object(
        &self,
        alias: &str,
        spec: &JsonLd,
    ) -> Result<Vec<Arc<dyn RdfNode>>, ParseError>;
}
