use serde::{Deserialize, Serialize};

use crate::macros::impls_for_iri_newtype;

/// IRI of the type of a value, e.g. a text or date value class.
#[derive(Debug, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
#[repr(transparent)]
pub struct ValueTypeIri(String);

impls_for_iri_newtype!(ValueTypeIri);
