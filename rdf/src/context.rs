//! Mutable state threaded through one parse operation.
//!
//! A [`ParsingContext`] belongs to exactly one parse. It carries the result
//! under construction, the entity currently being populated, a stack of
//! entities suspended by nested scopes, and the dispatch override state
//! machine. Sharing one context across concurrent parses is unsupported.

use std::sync::Arc;

use as_vocabulary::{Entity, ParsedVocabulary};

use crate::node::RdfNode;

/// How the next dispatch step selects its node set.
enum Dispatch {
    /// Full node list, priority order.
    Normal,
    /// One node receives the entire remaining document; structural traversal
    /// stops. Stays active until explicitly cleared.
    WholeDocument(Arc<dyn RdfNode>),
    /// One node exclusively handles the next dispatched key, then dispatch
    /// reverts to normal.
    NextLevel {
        node: Arc<dyn RdfNode>,
        consumed: bool,
    },
}

/// Parse state mutated by the engine and by ontology nodes.
pub struct ParsingContext {
    /// The vocabulary under construction.
    pub result: ParsedVocabulary,
    /// The entity presently being populated, if any.
    pub current: Option<Box<dyn Entity>>,
    /// Cached name of `current`, resynchronized when a scope is left.
    pub name: String,
    stack: Vec<Option<Box<dyn Entity>>>,
    dispatch: Dispatch,
}

impl Default for ParsingContext {
    fn default() -> Self {
        Self::new()
    }
}

impl ParsingContext {
    /// Creates the clean state for one parse.
    #[must_use]
    pub fn new() -> Self {
        ParsingContext {
            result: ParsedVocabulary::default(),
            current: None,
            name: String::new(),
            stack: Vec::new(),
            dispatch: Dispatch::Normal,
        }
    }

    /// Suspends the present entity (which may be absent) onto the scope stack
    /// and leaves the scope empty for a new entity.
    pub fn push(&mut self) {
        let suspended = self.current.take();
        self.stack.push(suspended);
    }

    /// Restores the most recently suspended entity. If it can read its own
    /// name, the cached name is refreshed from it. Popping with nothing
    /// suspended leaves the scope empty.
    pub fn pop(&mut self) {
        self.current = self.stack.pop().flatten();
        if let Some(reader) = self.current.as_ref().and_then(|e| e.as_name_readable()) {
            self.name = reader.name().to_owned();
        }
    }

    /// Clears the entity in scope and the cached name.
    pub fn reset(&mut self) {
        self.current = None;
        self.name.clear();
    }

    /// Whether no entity is in scope and no name is cached. Nodes use this to
    /// confirm a clean top-level state before starting a new entity.
    #[must_use]
    pub fn is_reset(&self) -> bool {
        self.current.is_none() && self.name.is_empty()
    }

    /// Routes the entire remaining document to `node` alone: every further
    /// object level delegates to its `apply` with an empty key, and no
    /// structural traversal happens beneath it. The override stays active
    /// until [`clear_document_node`](Self::clear_document_node) is called.
    pub fn set_document_node(&mut self, node: Arc<dyn RdfNode>) {
        self.dispatch = Dispatch::WholeDocument(node);
    }

    /// Ends a whole-document override. No-op if none is active.
    pub fn clear_document_node(&mut self) {
        if matches!(self.dispatch, Dispatch::WholeDocument(_)) {
            self.dispatch = Dispatch::Normal;
        }
    }

    /// The active whole-document override node, if any.
    #[must_use]
    pub fn document_node(&self) -> Option<Arc<dyn RdfNode>> {
        match &self.dispatch {
            Dispatch::WholeDocument(node) => Some(Arc::clone(node)),
            _ => None,
        }
    }

    /// Arms `node` to handle the next dispatched key exclusively — its
    /// enter, apply, and exit calls bypass the full node list once. Arming
    /// again re-arms for exactly one more key, even if the previous arming
    /// was already consumed.
    pub fn set_next_level_node(&mut self, node: Arc<dyn RdfNode>) {
        self.dispatch = Dispatch::NextLevel {
            node,
            consumed: false,
        };
    }

    /// Cancels an armed next-level override. No-op if none is armed.
    pub fn clear_next_level_node(&mut self) {
        if matches!(self.dispatch, Dispatch::NextLevel { .. }) {
            self.dispatch = Dispatch::Normal;
        }
    }

    /// Takes the armed next-level node, marking it consumed. Returns `None`
    /// once consumed, so all subsequent dispatch uses the full node list
    /// until the override is armed again.
    pub fn consume_next_level_node(&mut self) -> Option<Arc<dyn RdfNode>> {
        match &mut self.dispatch {
            Dispatch::NextLevel { node, consumed } if !*consumed => {
                *consumed = true;
                Some(Arc::clone(node))
            }
            _ => None,
        }
    }
}
