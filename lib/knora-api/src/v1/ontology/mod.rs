//! Schema-level shapes: property types, resource classes and vocabularies,
//! independent of any particular resource instance.

use serde::{Deserialize, Serialize};
use serde_with::skip_serializing_none;
use shared_types::{ProjectIri, PropertyTypeIri, ResourceClassIri, ValueTypeIri, VocabularyIri};

use crate::v1::basic::BasicResponse;
use crate::v1::resource::Occurrence;

#[cfg(test)]
mod test;

/// Definition of a property type.
#[skip_serializing_none]
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PropertyDefinition {
    /// IRI of the property type.
    pub name: String,
    pub description: String,
    pub valuetype_id: ValueTypeIri,
    pub label: String,
    pub vocabulary: VocabularyIri,
    /// HTML attributes of the GUI element.
    pub attributes: String,
    /// Cardinality for the requested resource class. Absent when the
    /// property type was requested for a whole vocabulary.
    pub occurrence: Option<Occurrence>,
    pub id: PropertyTypeIri,
    pub gui_name: String,
}

/// Definition of a resource class.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ResourceTypeInfo {
    /// IRI of the resource class.
    pub name: String,
    pub description: String,
    pub label: String,
    /// Property types instances of the class may carry.
    pub properties: Vec<PropertyDefinition>,
    pub iconsrc: String,
}

/// A property type attached to a resource class.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct PropertyItem {
    pub id: PropertyTypeIri,
    pub label: String,
}

/// A resource class of a vocabulary.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct ResourceTypeItem {
    pub id: ResourceClassIri,
    pub label: String,
    pub properties: Vec<PropertyItem>,
}

/// A vocabulary (a named ontology).
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct VocabularyItem {
    pub shortname: String,
    pub description: String,
    pub uri: String,
    pub id: VocabularyIri,
    pub project_id: ProjectIri,
    pub longname: String,
    /// Whether this is the vocabulary of the user's own project.
    pub active: bool,
}

/// Response to a resource type request.
///
/// `GET /v1/resourcetypes/{resourceClassIri}`
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ResourceTypeResponse {
    #[serde(flatten)]
    pub basic: BasicResponse,
    pub restype_info: ResourceTypeInfo,
}

/// Response listing the resource classes of a vocabulary.
///
/// `GET /v1/resourcetypes?vocabulary={vocabularyIri}`
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct ResourceTypesInVocabularyResponse {
    #[serde(flatten)]
    pub basic: BasicResponse,
    pub resourcetypes: Vec<ResourceTypeItem>,
}

/// Response listing the property types of a resource class or vocabulary.
///
/// `GET /v1/propertylists?restype={resourceClassIri}` or
/// `GET /v1/propertylists?vocabulary={vocabularyIri}`
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PropertyTypesResponse {
    #[serde(flatten)]
    pub basic: BasicResponse,
    pub properties: Vec<PropertyDefinition>,
}

/// Response listing the available vocabularies.
///
/// `GET /v1/vocabularies`
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct VocabularyResponse {
    #[serde(flatten)]
    pub basic: BasicResponse,
    pub vocabularies: Vec<VocabularyItem>,
}
