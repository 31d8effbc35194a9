use serde_json::{Value, json};
use similar_asserts::assert_eq;

use super::{
    PropertyTypesResponse, ResourceTypeResponse, ResourceTypesInVocabularyResponse,
    VocabularyResponse,
};
use crate::v1::resource::Occurrence;

fn title_definition(occurrence: Option<&str>) -> Value {
    let mut definition = json!({
        "name": "http://www.knora.org/ontology/0803/incunabula#title",
        "description": "Titel",
        "valuetype_id": "http://www.knora.org/ontology/knora-base#TextValue",
        "label": "Titel",
        "vocabulary": "http://www.knora.org/ontology/0803/incunabula",
        "attributes": "size=80;maxlength=255",
        "id": "http://www.knora.org/ontology/0803/incunabula#title",
        "gui_name": "text"
    });
    if let Some(occurrence) = occurrence {
        definition
            .as_object_mut()
            .unwrap()
            .insert("occurrence".to_string(), json!(occurrence));
    }
    definition
}

#[test]
fn resource_type_response_round_trip() {
    let payload = json!({
        "status": 0,
        "restype_info": {
            "name": "http://www.knora.org/ontology/0803/incunabula#book",
            "description": "A book of the incunabula period.",
            "label": "Book",
            "properties": [
                title_definition(Some("1-n")),
                {
                    "name": "http://www.knora.org/ontology/0803/incunabula#pubdate",
                    "description": "Publication date",
                    "valuetype_id": "http://www.knora.org/ontology/knora-base#DateValue",
                    "label": "Datum der Herausgabe",
                    "vocabulary": "http://www.knora.org/ontology/0803/incunabula",
                    "attributes": "size=16;maxlength=32",
                    "occurrence": "0-1",
                    "id": "http://www.knora.org/ontology/0803/incunabula#pubdate",
                    "gui_name": "date"
                }
            ],
            "iconsrc": "http://localhost:3335/project-icons/incunabula/book.gif"
        }
    });

    let response: ResourceTypeResponse = serde_json::from_value(payload.clone()).unwrap();
    let info = &response.restype_info;

    assert_eq!("Book", info.label);
    assert_eq!(2, info.properties.len());
    assert_eq!(Some(Occurrence::OneOrMore), info.properties[0].occurrence);
    assert_eq!(Some(Occurrence::ZeroOrOne), info.properties[1].occurrence);
    assert_eq!(payload, serde_json::to_value(&response).unwrap());
}

#[test]
fn vocabulary_scoped_property_types_carry_no_occurrence() {
    let payload = json!({
        "status": 0,
        "properties": [title_definition(None)]
    });

    let response: PropertyTypesResponse = serde_json::from_value(payload.clone()).unwrap();

    assert!(response.properties[0].occurrence.is_none());
    // Absent stays absent on the way back out.
    assert_eq!(payload, serde_json::to_value(&response).unwrap());
}

#[test]
fn class_scoped_property_types_carry_an_occurrence() {
    let payload = json!({
        "status": 0,
        "properties": [title_definition(Some("0-n"))]
    });

    let response: PropertyTypesResponse = serde_json::from_value(payload.clone()).unwrap();

    assert_eq!(Some(Occurrence::ZeroOrMore), response.properties[0].occurrence);
    assert_eq!(payload, serde_json::to_value(&response).unwrap());
}

#[test]
fn resource_types_in_vocabulary_round_trip() {
    let payload = json!({
        "status": 0,
        "resourcetypes": [
            {
                "id": "http://www.knora.org/ontology/0803/incunabula#book",
                "label": "Book",
                "properties": [
                    {
                        "id": "http://www.knora.org/ontology/0803/incunabula#title",
                        "label": "Titel"
                    },
                    {
                        "id": "http://www.knora.org/ontology/0803/incunabula#pubdate",
                        "label": "Datum der Herausgabe"
                    }
                ]
            },
            {
                "id": "http://www.knora.org/ontology/0803/incunabula#page",
                "label": "Page",
                "properties": [
                    {
                        "id": "http://www.knora.org/ontology/0803/incunabula#pagenum",
                        "label": "Page identifier"
                    }
                ]
            }
        ]
    });

    let response: ResourceTypesInVocabularyResponse =
        serde_json::from_value(payload.clone()).unwrap();

    assert_eq!(2, response.resourcetypes.len());
    assert_eq!("Book", response.resourcetypes[0].label);
    assert_eq!(payload, serde_json::to_value(&response).unwrap());
}

#[test]
fn vocabulary_response_round_trip() {
    let payload = json!({
        "status": 0,
        "vocabularies": [
            {
                "shortname": "incunabula",
                "description": "Incunabula",
                "uri": "http://www.knora.org/ontology/0803/incunabula",
                "id": "http://rdfh.ch/vocabularies/0803",
                "project_id": "http://rdfh.ch/projects/0803",
                "longname": "Bilderfolgen Basler Frühdrucke",
                "active": true
            },
            {
                "shortname": "images",
                "description": "A demo project of a collection of images",
                "uri": "http://www.knora.org/ontology/00FF/images",
                "id": "http://rdfh.ch/vocabularies/00FF",
                "project_id": "http://rdfh.ch/projects/00FF",
                "longname": "Image Collection Demo",
                "active": false
            }
        ]
    });

    let response: VocabularyResponse = serde_json::from_value(payload.clone()).unwrap();

    assert!(response.vocabularies[0].active);
    assert!(!response.vocabularies[1].active);
    assert_eq!(payload, serde_json::to_value(&response).unwrap());
}
