//! Model-level failure conditions.

use crate::model::EntityKind;

/// Errors raised while populating the vocabulary model.
#[derive(Debug, thiserror::Error)]
pub enum ModelError {
    /// An entity was inserted under a name already present in its mapping.
    /// Entity names are unique within one vocabulary, enforced at insertion
    /// time rather than at the end of the parse.
    #[error("name {name:?} already exists for vocabulary {kind}")]
    DuplicateName {
        /// Which of the three mappings rejected the insertion.
        kind: EntityKind,
        /// The colliding entity name.
        name: String,
    },
    /// A URI-assignment capability received a string that does not parse as a
    /// URI. The entity's URI is left unset.
    #[error("cannot parse {input:?} as a URI")]
    MalformedUri {
        /// The string that failed to parse.
        input: String,
        /// The underlying parse failure.
        #[source]
        source: url::ParseError,
    },
}
