//! ActivityStreams vocabulary model as typed Rust data.
//!
//! The `as-vocabulary` crate holds the intermediate representation produced by
//! parsing a vocabulary specification document: one [`Vocabulary`] for the
//! document's own namespace plus one per external ontology it references,
//! bundled in a [`ParsedVocabulary`]. Entities start empty and are populated
//! field by field while the parser walks the document; the only invariant
//! enforced here is that entity names are unique within a single vocabulary,
//! checked at insertion time.
//!
//! Parser code never mutates a concrete entity directly. It probes the entity
//! in scope through the narrow [`capability`] traits (assign a name, assign a
//! URI, assign notes, append an example) and invokes only the capabilities the
//! entity actually exposes.
//!
//! # Example
//!
//! ```
//! use as_vocabulary::{Vocabulary, VocabularyType};
//!
//! let mut vocab = Vocabulary::default();
//! let mut object = VocabularyType::default();
//! object.name = "Object".to_owned();
//! vocab.add_type("Object", object)?;
//! assert!(vocab.types.contains_key("Object"));
//! # Ok::<(), as_vocabulary::ModelError>(())
//! ```

#![deny(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    missing_docs,
    clippy::missing_errors_doc
)]

pub mod capability;
pub mod error;
pub mod model;

pub use capability::{
    Entity, ExampleAppendable, NameReadable, NameSettable, NotesSettable, UriSettable,
};
pub use error::ModelError;
pub use model::{
    EntityKind, ParsedVocabulary, Vocabulary, VocabularyExample, VocabularyProperty,
    VocabularyReference, VocabularyType, VocabularyValue,
};
