use serde::{Deserialize, Serialize};

use crate::macros::impls_for_iri_newtype;

/// IRI of a value object attached to a resource.
#[derive(Debug, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
#[repr(transparent)]
pub struct ValueIri(String);

impls_for_iri_newtype!(ValueIri);
