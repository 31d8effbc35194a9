//! Label search over resources.

use serde::{Deserialize, Serialize};
use shared_types::ResourceIri;

use crate::v1::basic::BasicResponse;

#[cfg(test)]
mod test;

/// A resource whose label matched the search term.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct LabelSearchItem {
    pub id: ResourceIri,
    /// Values representing the retrieved resource.
    pub value: Vec<String>,
    /// The user's permissions on the retrieved resource.
    pub rights: i32,
}

/// Response to a label search.
///
/// `GET /v1/resources?searchstr={term}[&restype_id={iri}][&numprops={n}][&limit={n}]`
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct LabelSearchResponse {
    #[serde(flatten)]
    pub basic: BasicResponse,
    pub resources: Vec<LabelSearchItem>,
}
