use serde::{Deserialize, Serialize};

use crate::macros::impls_for_iri_newtype;

/// IRI of a vocabulary (a named ontology).
#[derive(Debug, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
#[repr(transparent)]
pub struct VocabularyIri(String);

impls_for_iri_newtype!(VocabularyIri);
