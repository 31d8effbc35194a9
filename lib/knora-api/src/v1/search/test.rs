use serde_json::json;
use similar_asserts::assert_eq;

use super::LabelSearchResponse;

#[test]
fn label_search_response_round_trip() {
    let payload = json!({
        "status": 0,
        "resources": [
            {
                "id": "http://rdfh.ch/0803/c5058f3a",
                "value": ["Zeitglöcklein des Lebens und Leidens Christi"],
                "rights": 2
            },
            {
                "id": "http://rdfh.ch/0803/ff17e5ef9601",
                "value": ["Zeitglöcklein des Lebens und Leidens Christi", "Berthold, der Bruder"],
                "rights": 2
            }
        ]
    });

    let response: LabelSearchResponse = serde_json::from_value(payload.clone()).unwrap();

    assert!(response.basic.is_ok());
    assert_eq!(2, response.resources.len());
    assert_eq!(2, response.resources[1].value.len());
    assert_eq!(payload, serde_json::to_value(&response).unwrap());
}
