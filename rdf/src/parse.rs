//! The recursive traversal engine.
//!
//! [`parse_vocabulary`] resolves `@context` into the ordered node list, then
//! walks the rest of the document depth-first. At each object level the
//! `@type`/`type` key is dispatched before its siblings, so a node handling a
//! later key can rely on the entity's type already being known. Every dispatch
//! offers the key to the active nodes in priority order and stops at the first
//! one that reports it handled the call; if none does, the parse fails with
//! the offending key.

use std::sync::Arc;

use serde_json::Value;

use as_vocabulary::ParsedVocabulary;

use crate::context::ParsingContext;
use crate::error::ParseError;
use crate::node::{JsonLd, RdfNode, JSON_LD_CONTEXT, JSON_LD_TYPE, JSON_LD_TYPE_ALIAS};
use crate::registry::Registry;
use crate::resolve::resolve_context;
use crate::well_known;

/// Parses a vocabulary specification document into a [`ParsedVocabulary`].
///
/// `input` is the decoded document. Its `@context` is resolved against
/// `registry` to assemble the ontology node list; the built-in structural
/// nodes are prepended ahead of it. The registry is not consulted again after
/// resolution.
///
/// # Errors
///
/// Any failure from `@context` resolution, key dispatch, or a node aborts the
/// parse immediately; no partial result is returned.
pub fn parse_vocabulary(
    registry: &dyn Registry,
    input: &JsonLd,
) -> Result<ParsedVocabulary, ParseError> {
    let ontology_nodes = resolve_context(registry, input)?;
    let mut nodes = well_known::json_ld_nodes();
    nodes.extend(ontology_nodes);
    let mut ctx = ParsingContext::new();
    traverse(&nodes, input, &mut ctx)?;
    Ok(ctx.result)
}

/// Processes one object level.
fn traverse(
    nodes: &[Arc<dyn RdfNode>],
    object: &JsonLd,
    ctx: &mut ParsingContext,
) -> Result<(), ParseError> {
    // A whole-document override bypasses structural traversal entirely: the
    // node receives the remaining value under an empty key.
    if let Some(node) = ctx.document_node() {
        let remaining = Value::Object(object.clone());
        if node.apply("", &remaining, ctx)? {
            return Ok(());
        }
        return Err(ParseError::UnrecognizedKey {
            key: String::new(),
            value: Some(remaining),
        });
    }
    // Type pre-pass, so sibling dispatch can depend on the entity's type.
    if let Some(value) = object.get(JSON_LD_TYPE) {
        do_apply(nodes, JSON_LD_TYPE, value, ctx)?;
    } else if let Some(value) = object.get(JSON_LD_TYPE_ALIAS) {
        do_apply(nodes, JSON_LD_TYPE_ALIAS, value, ctx)?;
    }
    for (key, value) in object {
        if key == JSON_LD_CONTEXT || key == JSON_LD_TYPE || key == JSON_LD_TYPE_ALIAS {
            continue;
        }
        do_apply(nodes, key, value, ctx)?;
    }
    Ok(())
}

/// Dispatches one key/value pair, branching on the value's shape.
fn do_apply(
    nodes: &[Arc<dyn RdfNode>],
    key: &str,
    value: &Value,
    ctx: &mut ParsingContext,
) -> Result<(), ParseError> {
    // An armed next-level override claims the enter/apply/exit calls for this
    // one key; recursion below it always uses the full list.
    let exclusive = ctx.consume_next_level_node();
    let level_nodes: &[Arc<dyn RdfNode>] = match exclusive.as_ref() {
        Some(node) => std::slice::from_ref(node),
        None => nodes,
    };
    match value {
        Value::Object(object) => {
            enter_first(level_nodes, key, ctx)?;
            traverse(nodes, object, ctx)?;
            exit_first(level_nodes, key, ctx)?;
        }
        Value::Array(elements) => {
            // Enter and exit bracket every element individually, never the
            // array as a whole.
            for element in elements {
                enter_first(level_nodes, key, ctx)?;
                if let Value::Object(object) = element {
                    traverse(nodes, object, ctx)?;
                } else {
                    apply_first(level_nodes, key, element, ctx)?;
                }
                exit_first(level_nodes, key, ctx)?;
            }
        }
        scalar => apply_first(level_nodes, key, scalar, ctx)?,
    }
    Ok(())
}

fn enter_first(
    nodes: &[Arc<dyn RdfNode>],
    key: &str,
    ctx: &mut ParsingContext,
) -> Result<(), ParseError> {
    for node in nodes {
        if node.enter(key, ctx)? {
            return Ok(());
        }
    }
    Err(ParseError::UnrecognizedKey {
        key: key.to_owned(),
        value: None,
    })
}

fn exit_first(
    nodes: &[Arc<dyn RdfNode>],
    key: &str,
    ctx: &mut ParsingContext,
) -> Result<(), ParseError> {
    for node in nodes {
        if node.exit(key, ctx)? {
            return Ok(());
        }
    }
    Err(ParseError::UnrecognizedKey {
        key: key.to_owned(),
        value: None,
    })
}

fn apply_first(
    nodes: &[Arc<dyn RdfNode>],
    key: &str,
    value: &Value,
    ctx: &mut ParsingContext,
) -> Result<(), ParseError> {
    for node in nodes {
        if node.apply(key, value, ctx)? {
            return Ok(());
        }
    }
    Err(ParseError::UnrecognizedKey {
        key: key.to_owned(),
        value: Some(value.clone()),
    })
}
