use serde::{Deserialize, Serialize};

use crate::macros::impls_for_iri_newtype;

/// IRI of the project a resource or vocabulary belongs to.
#[derive(Debug, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
#[repr(transparent)]
pub struct ProjectIri(String);

impls_for_iri_newtype!(ProjectIri);
