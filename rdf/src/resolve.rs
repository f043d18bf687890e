//! `@context` resolution.
//!
//! Before structural traversal starts, the document's `@context` value is
//! interpreted to assemble the ordered ontology node list for the rest of the
//! parse. Sequence order is dispatch-priority order: nodes resolved from an
//! earlier element win ties against nodes from a later one.

use std::sync::Arc;

use serde_json::Value;

use crate::error::ParseError;
use crate::node::{JsonLd, RdfNode, JSON_LD_CONTEXT};
use crate::registry::Registry;

/// Resolves the document's `@context` into the ordered ontology node list.
///
/// The value may be a single ontology name, an ordered sequence of names and
/// alias objects, or one alias object. Alias objects map each alias either to
/// an ontology name or to a term-refinement object; both forms go to the
/// registry with the alias attached.
///
/// # Errors
///
/// [`ParseError::MissingContext`] if the document has no `@context`;
/// [`ParseError::MalformedContext`] for any other value shape; any error the
/// registry returns for an unknown name or alias.
pub fn resolve_context(
    registry: &dyn Registry,
    input: &JsonLd,
) -> Result<Vec<Arc<dyn RdfNode>>, ParseError> {
    let context = input.get(JSON_LD_CONTEXT).ok_or(ParseError::MissingContext)?;
    match context {
        Value::String(name) => registry.for_name(name),
        Value::Array(elements) => {
            let mut nodes = Vec::new();
            for element in elements {
                match element {
                    Value::String(name) => nodes.extend(registry.for_name(name)?),
                    Value::Object(aliases) => nodes.extend(resolve_aliases(registry, aliases)?),
                    other => {
                        return Err(ParseError::MalformedContext(format!(
                            "array element {other} is neither an object nor a string"
                        )))
                    }
                }
            }
            Ok(nodes)
        }
        Value::Object(aliases) => resolve_aliases(registry, aliases),
        other => Err(ParseError::MalformedContext(format!(
            "value {other} is not a string, array, or object"
        ))),
    }
}

fn resolve_aliases(
    registry: &dyn Registry,
    aliases: &JsonLd,
) -> Result<Vec<Arc<dyn RdfNode>>, ParseError> {
    let mut nodes = Vec::new();
    for (alias, value) in aliases {
        match value {
            Value::String(name) => nodes.extend(registry.for_alias(alias, name)?),
            Value::Object(spec) => nodes.extend(registry.for_aliased_object(alias, spec)?),
            other => {
                return Err(ParseError::MalformedContext(format!(
                    "alias {alias:?} is bound to {other}, which is neither an object nor a string"
                )))
            }
        }
    }
    Ok(nodes)
}
