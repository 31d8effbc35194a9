//! Shapes describing a single resource: its property values, regions,
//! class metadata and position in a compound hierarchy.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_repr::{Deserialize_repr, Serialize_repr};
use serde_with::skip_serializing_none;
use shared_types::{
    PersonIri, ProjectIri, PropertyTypeIri, ResourceClassIri, ResourceIri, ValueIri, ValueTypeIri,
};
use strum::Display;

use crate::v1::basic::{BasicResponse, KnoraValue, LocationItem};

pub mod validator;


/// A single value of a resource property.
#[skip_serializing_none]
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PropertyValue {
    /// Textual rendering of the value.
    pub textval: String,
    /// Owner of the value.
    pub person_id: Option<PersonIri>,
    /// Date of last modification.
    pub lastmod: Option<String>,
    pub id: ValueIri,
    pub comment: String,
    /// Date of last modification as UTC.
    pub lastmod_utc: Option<String>,
    /// Typed payload of the value.
    pub value: KnoraValue,
}

/// A property with its values, as returned by a properties request.
///
/// When the requested resource has no instance of the property type, only
/// the information about the property type itself is present and `values`
/// stays absent.
#[skip_serializing_none]
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PropertyDetail {
    /// Name of the value type, e.g. `textval`.
    pub valuetype: String,
    pub is_annotation: String,
    pub valuetype_id: ValueTypeIri,
    pub label: String,
    /// GUI element used to render the property.
    pub guielement: String,
    /// HTML attributes for the GUI element.
    pub attributes: String,
    pub pid: PropertyTypeIri,
    pub values: Option<Vec<PropertyValue>>,
}

/// Cardinality of a property type on a resource class.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize, Deserialize, Display)]
pub enum Occurrence {
    #[serde(rename = "1")]
    #[strum(serialize = "1")]
    One,
    #[serde(rename = "0-1")]
    #[strum(serialize = "0-1")]
    ZeroOrOne,
    #[serde(rename = "0-n")]
    #[strum(serialize = "0-n")]
    ZeroOrMore,
    #[serde(rename = "1-n")]
    #[strum(serialize = "1-n")]
    OneOrMore,
}

/// A property of a full resource response, in parallel-array form.
///
/// The Nth entry of each populated array describes the Nth value; all
/// populated arrays have the same length. `locations` is the exception: it
/// lists the quality levels of the attached binary representation and is
/// unrelated to the value arrays.
#[skip_serializing_none]
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Property {
    pub regular_property: i32,
    /// Class labels of the resources referred to, for link properties.
    pub value_restype: Option<Vec<String>>,
    /// Order of the property type in the GUI.
    pub guiorder: i32,
    /// Labels of the resources referred to, for link properties.
    pub value_firstprops: Option<Vec<String>>,
    pub is_annotation: String,
    pub valuetype_id: ValueTypeIri,
    pub label: String,
    /// Class icons of the resources referred to, for link properties.
    pub value_iconsrcs: Option<Vec<String>>,
    pub guielement: String,
    pub attributes: String,
    pub occurrence: Occurrence,
    /// IRIs of the value objects holding the values.
    pub value_ids: Option<Vec<ValueIri>>,
    /// The user's permissions on each value object.
    pub value_rights: Option<Vec<i32>>,
    pub pid: PropertyTypeIri,
    pub values: Option<Vec<KnoraValue>>,
    pub comments: Option<Vec<String>>,
    /// Quality levels of the binary representation attached to the resource.
    pub locations: Option<Vec<LocationItem>>,
}

/// Entry of a region map: property-type keys map to full properties, the
/// `res_id` and `iconsrc` entries are plain strings.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RegionEntry {
    Property(Box<PropertyDetail>),
    Text(String),
}

/// A region attached to a resource, keyed by property-type IRI.
pub type Region = IndexMap<String, RegionEntry>;

/// A permission granted to a user group.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct PermissionItem {
    pub permission: String,
    pub granted_to: String,
}

/// Parent linkage of a dependent resource: the parent's IRI, or a numeric
/// code when the resource does not depend on one.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ValueOf {
    Iri(ResourceIri),
    Code(i64),
}

/// Information about a resource and its class.
#[skip_serializing_none]
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ResourceInfo {
    /// Digital representations of the resource.
    pub locations: Vec<LocationItem>,
    pub restype_label: String,
    /// Whether the resource class carries a digital representation.
    pub resclass_has_location: bool,
    /// Thumbnail or icon of the resource.
    pub preview: LocationItem,
    pub person_id: PersonIri,
    pub value_of: ValueOf,
    /// The user's permissions on the resource.
    pub permissions: Vec<PermissionItem>,
    pub lastmod: String,
    pub resclass_name: String,
    pub regions: Option<Vec<Region>>,
    pub restype_description: String,
    pub project_id: ProjectIri,
    /// Full quality representation of the resource.
    pub locdata: LocationItem,
    pub restype_id: ResourceClassIri,
    /// The resource's label.
    pub firstproperty: String,
    pub restype_iconsrc: String,
    pub restype_name: ResourceClassIri,
}

/// Minimal identifying metadata of a resource.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ResourceData {
    pub res_id: ResourceIri,
    pub restype_name: ResourceClassIri,
    pub restype_label: String,
    pub iconsrc: String,
    /// The user's permissions on the resource.
    pub rights: i32,
}

/// Identifies a referring resource and the linking property.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct ExternalResourceId {
    pub id: ResourceIri,
    pub pid: PropertyTypeIri,
}

/// A resource referring to the requested resource.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct IncomingItem {
    pub ext_res_id: ExternalResourceId,
    pub resinfo: ResourceInfo,
    /// Label of the referring resource.
    pub value: String,
}

/// Position of a resource in a compound hierarchy.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize_repr, Deserialize_repr)]
#[repr(u8)]
pub enum ContextCode {
    /// Neither part of another resource nor compound itself.
    Standalone = 0,
    /// Part of a compound resource, e.g. a page of a book.
    PartOf = 1,
    /// A compound resource with parts, e.g. a book with pages.
    Compound = 2,
}

/// The context of a resource in a containment hierarchy.
///
/// The optional arrays describe the depending resources positionally, one
/// entry per depending resource.
#[skip_serializing_none]
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ResourceContext {
    pub context: ContextCode,
    pub canonical_res_id: ResourceIri,
    pub parent_res_id: Option<ResourceIri>,
    /// Present when the requested resource depends on the parent.
    pub parent_resinfo: Option<ResourceInfo>,
    /// Present when requested with `resinfo=true`.
    pub resinfo: Option<ResourceInfo>,
    /// Locations of the depending resources.
    pub locations: Option<Vec<Vec<LocationItem>>>,
    /// Preview locations of the depending resources.
    pub preview: Option<Vec<LocationItem>>,
    /// Labels of the depending resources.
    pub firstprop: Option<Vec<String>>,
    pub region: Option<Vec<String>>,
    pub resclass_name: Option<String>,
    /// IRIs of the depending resources.
    pub res_id: Option<Vec<ResourceIri>>,
}

/// Response to a full resource request.
///
/// `GET /v1/resources/{resourceIri}`
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ResourceFullResponse {
    #[serde(flatten)]
    pub basic: BasicResponse,
    pub resinfo: ResourceInfo,
    pub resdata: ResourceData,
    /// The resource's properties, keyed by property-type IRI.
    pub props: IndexMap<PropertyTypeIri, Property>,
    /// Resources referring to the requested resource.
    pub incoming: Vec<IncomingItem>,
    /// The user's permissions on the resource.
    pub access: String,
}

/// Response to a resource info request.
///
/// `GET /v1/resources/{resourceIri}?reqtype=info`
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ResourceInfoResponse {
    #[serde(flatten)]
    pub basic: BasicResponse,
    pub rights: i32,
    pub resource_info: ResourceInfo,
}

/// Response to a resource rights request.
///
/// `GET /v1/resources/{resourceIri}?reqtype=rights`
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct ResourceRightsResponse {
    #[serde(flatten)]
    pub basic: BasicResponse,
    pub rights: i32,
}

/// Response to a context request, with or without `resinfo=true`.
///
/// `GET /v1/resources/{resourceIri}?reqtype=context[&resinfo=true]`
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ResourceContextResponse {
    #[serde(flatten)]
    pub basic: BasicResponse,
    pub resource_context: ResourceContext,
}

/// Response to a properties request for a resource.
///
/// `GET /v1/properties/{resourceIri}`
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ResourcePropertiesResponse {
    #[serde(flatten)]
    pub basic: BasicResponse,
    /// The resource's properties, keyed by property-type IRI.
    pub properties: IndexMap<PropertyTypeIri, PropertyDetail>,
}
