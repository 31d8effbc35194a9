use serde::{Deserialize, Serialize};

use crate::macros::impls_for_iri_newtype;

/// IRI of the person owning a resource or value.
#[derive(Debug, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
#[repr(transparent)]
pub struct PersonIri(String);

impls_for_iri_newtype!(PersonIri);
