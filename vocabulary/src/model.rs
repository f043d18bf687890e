//! Core vocabulary model types.
//!
//! These types represent a parsed ActivityStreams-style vocabulary — type,
//! property, and value definitions plus cross-vocabulary references — as typed
//! Rust data. All entities are created empty and populated field by field as
//! the parser visits the document keys naming them. The parse result is a
//! [`ParsedVocabulary`]; it is not guaranteed to be semantically valid (e.g.
//! references may dangle), only that every ontological detail in the document
//! was resolved by some node.

use std::collections::HashMap;
use std::fmt;

use url::Url;

use crate::capability::{
    Entity, ExampleAppendable, NameReadable, NameSettable, NotesSettable, UriSettable,
};
use crate::error::ModelError;

fn parse_uri(raw: &str) -> Result<Url, ModelError> {
    Url::parse(raw).map_err(|source| ModelError::MalformedUri {
        input: raw.to_owned(),
        source,
    })
}

/// Which of a vocabulary's three mappings an entity belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum EntityKind {
    /// A type definition.
    Type,
    /// A property definition.
    Property,
    /// A value (data-type) definition.
    Value,
}

impl EntityKind {
    /// Returns the mapping name used in diagnostics.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            EntityKind::Type => "Types",
            EntityKind::Property => "Properties",
            EntityKind::Value => "Values",
        }
    }
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The complete result of parsing one vocabulary specification document.
///
/// `vocab` is the document's own namespace; `references` holds one vocabulary
/// per external ontology the document mentions, keyed by reference name.
/// Reference vocabularies are created on first touch and never removed.
#[derive(Debug, Clone, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct ParsedVocabulary {
    /// The document's own vocabulary.
    pub vocab: Vocabulary,
    /// External vocabularies referenced by the document, keyed by name.
    pub references: HashMap<String, Vocabulary>,
}

impl ParsedVocabulary {
    /// Returns the reference vocabulary for `name`, creating it empty if the
    /// document has not touched that ontology before.
    pub fn reference_mut(&mut self, name: &str) -> &mut Vocabulary {
        self.references.entry(name.to_owned()).or_default()
    }
}

impl fmt::Display for ParsedVocabulary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "vocab:\n{}", self.vocab)?;
        for (name, vocab) in &self.references {
            write!(f, "reference {name}:\n{vocab}")?;
        }
        Ok(())
    }
}

/// The type, property, and value definitions of a single vocabulary.
///
/// Entity names are unique within each mapping; the `add_*` methods reject
/// duplicates at insertion time.
#[derive(Debug, Clone, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Vocabulary {
    /// Type definitions, keyed by name.
    pub types: HashMap<String, VocabularyType>,
    /// Property definitions, keyed by name.
    pub properties: HashMap<String, VocabularyProperty>,
    /// Value definitions, keyed by name.
    pub values: HashMap<String, VocabularyValue>,
}

impl Vocabulary {
    /// Inserts a type definition under `name`.
    ///
    /// # Errors
    ///
    /// Returns [`ModelError::DuplicateName`] if a type named `name` already
    /// exists in this vocabulary.
    pub fn add_type(&mut self, name: &str, vocab_type: VocabularyType) -> Result<(), ModelError> {
        if self.types.contains_key(name) {
            return Err(ModelError::DuplicateName {
                kind: EntityKind::Type,
                name: name.to_owned(),
            });
        }
        self.types.insert(name.to_owned(), vocab_type);
        Ok(())
    }

    /// Inserts a property definition under `name`.
    ///
    /// # Errors
    ///
    /// Returns [`ModelError::DuplicateName`] if a property named `name`
    /// already exists in this vocabulary.
    pub fn add_property(
        &mut self,
        name: &str,
        property: VocabularyProperty,
    ) -> Result<(), ModelError> {
        if self.properties.contains_key(name) {
            return Err(ModelError::DuplicateName {
                kind: EntityKind::Property,
                name: name.to_owned(),
            });
        }
        self.properties.insert(name.to_owned(), property);
        Ok(())
    }

    /// Inserts a value definition under `name`.
    ///
    /// # Errors
    ///
    /// Returns [`ModelError::DuplicateName`] if a value named `name` already
    /// exists in this vocabulary.
    pub fn add_value(&mut self, name: &str, value: VocabularyValue) -> Result<(), ModelError> {
        if self.values.contains_key(name) {
            return Err(ModelError::DuplicateName {
                kind: EntityKind::Value,
                name: name.to_owned(),
            });
        }
        self.values.insert(name.to_owned(), value);
        Ok(())
    }
}

impl fmt::Display for Vocabulary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (name, t) in &self.types {
            writeln!(f, "  type {name}: {}", t.notes)?;
        }
        for (name, p) in &self.properties {
            writeln!(f, "  property {name}: {}", p.notes)?;
        }
        for (name, v) in &self.values {
            writeln!(f, "  value {name}: {}", v.definition_type)?;
        }
        Ok(())
    }
}

/// A single type definition in a vocabulary.
#[derive(Debug, Clone, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct VocabularyType {
    /// Entity name.
    pub name: String,
    /// Resolved URI, once assigned.
    pub uri: Option<Url>,
    /// Free-text notes.
    pub notes: String,
    /// Types this type is declared disjoint with.
    pub disjoint_with: Vec<VocabularyReference>,
    /// Types this type extends. Known-incomplete relative to the published
    /// ActivityStreams vocabulary; semantic validation is a downstream
    /// concern.
    pub extends: Vec<VocabularyReference>,
    /// Properties usable on this type.
    pub properties: Vec<VocabularyReference>,
    /// Properties explicitly excluded from this type. Known-incomplete for
    /// intransitive variants; kept as a plain list.
    pub without_properties: Vec<VocabularyReference>,
    /// Usage examples.
    pub examples: Vec<VocabularyExample>,
}

impl NameSettable for VocabularyType {
    fn set_name(&mut self, name: &str) {
        self.name = name.to_owned();
    }
}

impl NameReadable for VocabularyType {
    fn name(&self) -> &str {
        &self.name
    }
}

impl UriSettable for VocabularyType {
    fn set_uri(&mut self, raw: &str) -> Result<(), ModelError> {
        self.uri = Some(parse_uri(raw)?);
        Ok(())
    }
}

impl NotesSettable for VocabularyType {
    fn set_notes(&mut self, notes: &str) {
        self.notes = notes.to_owned();
    }
}

impl ExampleAppendable for VocabularyType {
    fn append_example(&mut self, example: VocabularyExample) {
        self.examples.push(example);
    }
}

impl Entity for VocabularyType {
    fn as_any(&self) -> &dyn std::any::Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn std::any::Any {
        self
    }

    fn into_any(self: Box<Self>) -> Box<dyn std::any::Any> {
        self
    }

    fn as_name_settable(&mut self) -> Option<&mut dyn NameSettable> {
        Some(self)
    }

    fn as_name_readable(&self) -> Option<&dyn NameReadable> {
        Some(self)
    }

    fn as_uri_settable(&mut self) -> Option<&mut dyn UriSettable> {
        Some(self)
    }

    fn as_notes_settable(&mut self) -> Option<&mut dyn NotesSettable> {
        Some(self)
    }

    fn as_example_appendable(&mut self) -> Option<&mut dyn ExampleAppendable> {
        Some(self)
    }
}

/// A single property definition in a vocabulary.
#[derive(Debug, Clone, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct VocabularyProperty {
    /// Entity name.
    pub name: String,
    /// Resolved URI, once assigned.
    pub uri: Option<Url>,
    /// Free-text notes.
    pub notes: String,
    /// Types this property may appear on.
    pub domain: Vec<VocabularyReference>,
    /// Types or values this property may hold.
    pub range: Vec<VocabularyReference>,
    /// Usage examples.
    pub examples: Vec<VocabularyExample>,
    /// The property this one specializes, if any. Must name a property.
    pub subproperty_of: Option<VocabularyReference>,
    /// Whether the property admits at most one value.
    pub functional: bool,
    /// Whether the value may be a language-tagged mapping instead of a
    /// scalar.
    pub natural_language_map: bool,
}

impl NameSettable for VocabularyProperty {
    fn set_name(&mut self, name: &str) {
        self.name = name.to_owned();
    }
}

impl NameReadable for VocabularyProperty {
    fn name(&self) -> &str {
        &self.name
    }
}

impl UriSettable for VocabularyProperty {
    fn set_uri(&mut self, raw: &str) -> Result<(), ModelError> {
        self.uri = Some(parse_uri(raw)?);
        Ok(())
    }
}

impl NotesSettable for VocabularyProperty {
    fn set_notes(&mut self, notes: &str) {
        self.notes = notes.to_owned();
    }
}

impl ExampleAppendable for VocabularyProperty {
    fn append_example(&mut self, example: VocabularyExample) {
        self.examples.push(example);
    }
}

impl Entity for VocabularyProperty {
    fn as_any(&self) -> &dyn std::any::Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn std::any::Any {
        self
    }

    fn into_any(self: Box<Self>) -> Box<dyn std::any::Any> {
        self
    }

    fn as_name_settable(&mut self) -> Option<&mut dyn NameSettable> {
        Some(self)
    }

    fn as_name_readable(&self) -> Option<&dyn NameReadable> {
        Some(self)
    }

    fn as_uri_settable(&mut self) -> Option<&mut dyn UriSettable> {
        Some(self)
    }

    fn as_notes_settable(&mut self) -> Option<&mut dyn NotesSettable> {
        Some(self)
    }

    fn as_example_appendable(&mut self) -> Option<&mut dyn ExampleAppendable> {
        Some(self)
    }
}

/// A value (data-type) definition: the kinds of literal a property can hold.
#[derive(Debug, Clone, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct VocabularyValue {
    /// Entity name.
    pub name: String,
    /// Resolved URI, once assigned.
    pub uri: Option<Url>,
    /// How this value kind is validated and represented downstream.
    pub definition_type: String,
    /// The literal used as this value kind's zero value.
    pub zero: String,
}

impl NameSettable for VocabularyValue {
    fn set_name(&mut self, name: &str) {
        self.name = name.to_owned();
    }
}

impl NameReadable for VocabularyValue {
    fn name(&self) -> &str {
        &self.name
    }
}

impl UriSettable for VocabularyValue {
    fn set_uri(&mut self, raw: &str) -> Result<(), ModelError> {
        self.uri = Some(parse_uri(raw)?);
        Ok(())
    }
}

impl Entity for VocabularyValue {
    fn as_any(&self) -> &dyn std::any::Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn std::any::Any {
        self
    }

    fn into_any(self: Box<Self>) -> Box<dyn std::any::Any> {
        self
    }

    fn as_name_settable(&mut self) -> Option<&mut dyn NameSettable> {
        Some(self)
    }

    fn as_name_readable(&self) -> Option<&dyn NameReadable> {
        Some(self)
    }

    fn as_uri_settable(&mut self) -> Option<&mut dyn UriSettable> {
        Some(self)
    }
}

/// A usage example attached to a type or property. The payload is arbitrary
/// document data and is not interpreted here.
#[derive(Debug, Clone, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct VocabularyExample {
    /// Example name.
    pub name: String,
    /// Resolved URI, once assigned.
    pub uri: Option<Url>,
    /// The opaque example payload.
    pub example: serde_json::Value,
}

impl NameSettable for VocabularyExample {
    fn set_name(&mut self, name: &str) {
        self.name = name.to_owned();
    }
}

impl NameReadable for VocabularyExample {
    fn name(&self) -> &str {
        &self.name
    }
}

impl UriSettable for VocabularyExample {
    fn set_uri(&mut self, raw: &str) -> Result<(), ModelError> {
        self.uri = Some(parse_uri(raw)?);
        Ok(())
    }
}

impl Entity for VocabularyExample {
    fn as_any(&self) -> &dyn std::any::Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn std::any::Any {
        self
    }

    fn into_any(self: Box<Self>) -> Box<dyn std::any::Any> {
        self
    }

    fn as_name_settable(&mut self) -> Option<&mut dyn NameSettable> {
        Some(self)
    }

    fn as_name_readable(&self) -> Option<&dyn NameReadable> {
        Some(self)
    }

    fn as_uri_settable(&mut self) -> Option<&mut dyn UriSettable> {
        Some(self)
    }
}

/// A name-based reference to a type, property, or value, possibly defined in
/// another vocabulary.
///
/// When `vocab` is present it must match a key in
/// [`ParsedVocabulary::references`]; the link is resolved by lookup downstream,
/// never validated during parsing.
#[derive(Debug, Clone, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct VocabularyReference {
    /// Referenced entity name.
    pub name: String,
    /// Resolved URI, once assigned.
    pub uri: Option<Url>,
    /// Name of the vocabulary the entity lives in, when not the document's
    /// own.
    pub vocab: Option<String>,
}

impl NameSettable for VocabularyReference {
    fn set_name(&mut self, name: &str) {
        self.name = name.to_owned();
    }
}

impl NameReadable for VocabularyReference {
    fn name(&self) -> &str {
        &self.name
    }
}

impl UriSettable for VocabularyReference {
    fn set_uri(&mut self, raw: &str) -> Result<(), ModelError> {
        self.uri = Some(parse_uri(raw)?);
        Ok(())
    }
}

impl Entity for VocabularyReference {
    fn as_any(&self) -> &dyn std::any::Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn std::any::Any {
        self
    }

    fn into_any(self: Box<Self>) -> Box<dyn std::any::Any> {
        self
    }

    fn as_name_settable(&mut self) -> Option<&mut dyn NameSettable> {
        Some(self)
    }

    fn as_name_readable(&self) -> Option<&dyn NameReadable> {
        Some(self)
    }

    fn as_uri_settable(&mut self) -> Option<&mut dyn UriSettable> {
        Some(self)
    }
}
