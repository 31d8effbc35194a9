//! Identifier newtypes shared by the Knora API response models.
//!
//! Every identifier on the v1 wire format is an IRI transported as a plain
//! JSON string; the newtypes keep the different identifier kinds from being
//! mixed up in consuming code.

mod macros;

mod person_iri;
mod project_iri;
mod property_type_iri;
mod resource_class_iri;
mod resource_iri;
mod value_iri;
mod value_type_iri;
mod vocabulary_iri;

pub use person_iri::PersonIri;
pub use project_iri::ProjectIri;
pub use property_type_iri::PropertyTypeIri;
pub use resource_class_iri::ResourceClassIri;
pub use resource_iri::ResourceIri;
pub use value_iri::ValueIri;
pub use value_type_iri::ValueTypeIri;
pub use vocabulary_iri::VocabularyIri;
