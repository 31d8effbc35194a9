use serde::{Deserialize, Serialize};

use crate::macros::impls_for_iri_newtype;

/// IRI of a property type in an ontology.
#[derive(Debug, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
#[repr(transparent)]
pub struct PropertyTypeIri(String);

impls_for_iri_newtype!(PropertyTypeIri);
