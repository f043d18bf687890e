//! Narrow, independently-checkable mutation capabilities.
//!
//! The traversal engine mutates whatever entity currently occupies the parsing
//! scope without knowing its concrete kind. Each mutation it may need is a
//! separate one-method trait, and the [`Entity`] umbrella trait lets the engine
//! (or a generic ontology node) ask at runtime which capabilities the entity in
//! scope exposes. An entity implements only the capabilities that make sense
//! for it: a value kind has a name and a URI but no notes, for example.

use std::any::Any;

use crate::error::ModelError;
use crate::model::VocabularyExample;

/// Accepts a string and stores it as the entity's name.
pub trait NameSettable {
    /// Assigns the entity's name.
    fn set_name(&mut self, name: &str);
}

/// Exposes the entity's current name, used to resync cached parse state after
/// leaving a scope.
pub trait NameReadable {
    /// Returns the entity's current name.
    fn name(&self) -> &str;
}

/// Accepts a string and stores it as the entity's URI.
pub trait UriSettable {
    /// Parses `raw` as a URI and stores it.
    ///
    /// # Errors
    ///
    /// Returns [`ModelError::MalformedUri`] if `raw` does not parse; the
    /// entity's URI is left unset in that case.
    fn set_uri(&mut self, raw: &str) -> Result<(), ModelError>;
}

/// Accepts free text and stores it as the entity's notes.
pub trait NotesSettable {
    /// Assigns the entity's free-text notes.
    fn set_notes(&mut self, notes: &str);
}

/// Accepts a usage example and appends it to the entity's example list.
pub trait ExampleAppendable {
    /// Appends one example.
    fn append_example(&mut self, example: VocabularyExample);
}

/// A vocabulary entity under construction during traversal.
///
/// The capability accessors default to `None`; each concrete entity overrides
/// exactly the ones it supports. The `Any` accessors allow ontology nodes to
/// recover the concrete entity when they need more than a generic capability,
/// e.g. to move a completed type into its vocabulary mapping.
pub trait Entity: Any {
    /// Borrows the entity as `Any` for concrete downcasts.
    fn as_any(&self) -> &dyn Any;

    /// Mutably borrows the entity as `Any` for concrete downcasts.
    fn as_any_mut(&mut self) -> &mut dyn Any;

    /// Consumes the boxed entity for a by-value downcast.
    fn into_any(self: Box<Self>) -> Box<dyn Any>;

    /// The entity's name-assignment capability, if it has one.
    fn as_name_settable(&mut self) -> Option<&mut dyn NameSettable> {
        None
    }

    /// The entity's name-read capability, if it has one.
    fn as_name_readable(&self) -> Option<&dyn NameReadable> {
        None
    }

    /// The entity's URI-assignment capability, if it has one.
    fn as_uri_settable(&mut self) -> Option<&mut dyn UriSettable> {
        None
    }

    /// The entity's notes-assignment capability, if it has one.
    fn as_notes_settable(&mut self) -> Option<&mut dyn NotesSettable> {
        None
    }

    /// The entity's example-append capability, if it has one.
    fn as_example_appendable(&mut self) -> Option<&mut dyn ExampleAppendable> {
        None
    }
}
