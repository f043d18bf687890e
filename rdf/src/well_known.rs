//! Built-in structural nodes.
//!
//! These nodes handle JSON-LD scaffolding that no ontology may reinterpret.
//! [`crate::parse_vocabulary`] prepends them ahead of the nodes resolved from
//! `@context`, so ontology nodes can never shadow them.

use std::sync::Arc;

use serde_json::Value;

use crate::context::ParsingContext;
use crate::error::ParseError;
use crate::node::{RdfNode, JSON_LD_TYPE, JSON_LD_TYPE_ALIAS};

/// Returns the built-in structural nodes, in dispatch-priority order.
#[must_use]
pub fn json_ld_nodes() -> Vec<Arc<dyn RdfNode>> {
    vec![Arc::new(TypeKeywordNode)]
}

/// Consumes `@type`/`type` declarations whose value is itself a JSON-LD
/// keyword, such as the `"@type": "@id"` refinement inside an aliased term
/// object. Keyword types are traversal scaffolding, not vocabulary
/// definitions, so they are claimed without touching the parse state; real
/// type values pass through to the ontology nodes.
#[derive(Debug)]
struct TypeKeywordNode;

impl RdfNode for TypeKeywordNode {
    fn enter(&self, _key: &str, _ctx: &mut ParsingContext) -> Result<bool, ParseError> {
        Ok(false)
    }

    fn exit(&self, _key: &str, _ctx: &mut ParsingContext) -> Result<bool, ParseError> {
        Ok(false)
    }

    fn apply(
        &self,
        key: &str,
        value: &Value,
        _ctx: &mut ParsingContext,
    ) -> Result<bool, ParseError> {
        if key != JSON_LD_TYPE && key != JSON_LD_TYPE_ALIAS {
            return Ok(false);
        }
        Ok(value.as_str().is_some_and(|s| s.starts_with('@')))
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn keyword_type_values_are_consumed() {
        let node = TypeKeywordNode;
        let mut ctx = ParsingContext::new();
        assert!(node.apply("@type", &json!("@id"), &mut ctx).unwrap());
        assert!(node.apply("type", &json!("@id"), &mut ctx).unwrap());
        assert!(ctx.is_reset());
    }

    #[test]
    fn real_type_values_pass_through() {
        let node = TypeKeywordNode;
        let mut ctx = ParsingContext::new();
        assert!(!node.apply("@type", &json!("Object"), &mut ctx).unwrap());
        assert!(!node.apply("@type", &json!(7), &mut ctx).unwrap());
    }

    #[test]
    fn other_keys_pass_through() {
        let node = TypeKeywordNode;
        let mut ctx = ParsingContext::new();
        assert!(!node.apply("name", &json!("@id"), &mut ctx).unwrap());
        assert!(!node.enter("@type", &mut ctx).unwrap());
        assert!(!node.exit("@type", &mut ctx).unwrap());
    }
}
