use serde::{Deserialize, Serialize};

use crate::macros::impls_for_iri_newtype;

/// IRI of a resource instance.
#[derive(Debug, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
#[repr(transparent)]
pub struct ResourceIri(String);

impls_for_iri_newtype!(ResourceIri);
