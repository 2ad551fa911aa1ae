use super::*;
use serde_json::json;

#[test]
fn test_request_discriminants() {
    let req = RelayRequest::describe(LatLng::new(1.0, 2.0), None);
    let json = serde_json::to_value(&req).unwrap();
    assert_eq!(json["type"], "GENERATE_CONTENT");
    assert!(json.get("address").is_none());

    let json = serde_json::to_value(&RelayRequest::GetSavedLocations).unwrap();
    assert_eq!(json, json!({"type": "GET_SAVED_LOCATIONS"}));

    let json = serde_json::to_value(&RelayRequest::GetMapsApiKey).unwrap();
    assert_eq!(json["type"], "GET_MAPS_API_KEY");
}

#[test]
fn test_type_name_matches_wire_tag() {
    let requests = vec![
        RelayRequest::describe(LatLng::new(0.0, 0.0), Some("addr".to_string())),
        RelayRequest::chat("hi", LatLng::new(0.0, 0.0), None),
        RelayRequest::SaveLocation {
            location: NewLocation::new("x", LatLng::new(0.0, 0.0)),
        },
        RelayRequest::GetSavedLocations,
        RelayRequest::DeleteLocation { index: 0 },
        RelayRequest::GetMapsApiKey,
    ];
    for req in requests {
        let json = serde_json::to_value(&req).unwrap();
        assert_eq!(json["type"], req.type_name());
        assert!(RelayRequest::TYPES.contains(&req.type_name()));
    }
}

#[test]
fn test_from_value_parses_chat() {
    let value = json!({
        "type": "GENERATE_CHAT_RESPONSE",
        "message": "What is here?",
        "lat": 48.85,
        "lng": 2.35,
        "address": "Paris"
    });
    let req = RelayRequest::from_value(value).unwrap();
    assert_eq!(
        req,
        RelayRequest::chat("What is here?", LatLng::new(48.85, 2.35), Some("Paris".to_string()))
    );
}

#[test]
fn test_from_value_accepts_null_address() {
    let value = json!({"type": "GENERATE_CONTENT", "lat": 1.0, "lng": 2.0, "address": null});
    let req = RelayRequest::from_value(value).unwrap();
    assert_eq!(req, RelayRequest::describe(LatLng::new(1.0, 2.0), None));
}

#[test]
fn test_from_value_aliases() {
    for tag in ["INJECT_MAPS_API", "PREPARE_GOOGLE_MAPS_LOADER"] {
        let req = RelayRequest::from_value(json!({"type": tag})).unwrap();
        assert_eq!(req, RelayRequest::GetMapsApiKey);
    }
}

#[test]
fn test_from_value_unknown_type_is_unhandled() {
    let err = RelayRequest::from_value(json!({"type": "API_KEYS_UPDATED"})).unwrap_err();
    assert!(matches!(err, RelayError::Unhandled(ref t) if t == "API_KEYS_UPDATED"));
}

#[test]
fn test_from_value_missing_type_is_validation() {
    let err = RelayRequest::from_value(json!({"lat": 1.0})).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Validation);
}

#[test]
fn test_from_value_bad_fields_is_validation() {
    let err = RelayRequest::from_value(json!({"type": "DELETE_LOCATION", "index": "first"}))
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Validation);
    assert!(err.to_string().contains("DELETE_LOCATION"));
}

#[test]
fn test_response_shapes() {
    let json = serde_json::to_value(RelayResponse::ok()).unwrap();
    assert_eq!(json, json!({"success": true}));

    let json = serde_json::to_value(RelayResponse::with_content("X")).unwrap();
    assert_eq!(json, json!({"success": true, "content": "X"}));

    let json = serde_json::to_value(RelayResponse::with_api_key("k")).unwrap();
    assert_eq!(json, json!({"success": true, "apiKey": "k"}));

    let json = serde_json::to_value(RelayResponse::with_locations(vec![])).unwrap();
    assert_eq!(json, json!({"success": true, "locations": []}));
}

#[test]
fn test_failure_shape() {
    let err = RelayError::Validation("Invalid location index".to_string());
    let json = serde_json::to_value(RelayResponse::failure(&err)).unwrap();
    assert_eq!(
        json,
        json!({"success": false, "error": "Invalid location index", "errorKind": "validation"})
    );
}

#[test]
fn test_into_result_round_trips_failure_kind() {
    let err = RelayError::MissingCredential("Gemini".to_string());
    let response = RelayResponse::failure(&err);
    let back = response.into_content().unwrap_err();
    assert_eq!(back.kind(), ErrorKind::Configuration);
    assert!(back.to_string().contains("Gemini API key not configured"));
}

#[test]
fn test_into_content_missing_payload() {
    let err = RelayResponse::ok().into_content().unwrap_err();
    assert_eq!(err.kind(), ErrorKind::MalformedResponse);
}

#[test]
fn test_into_locations_defaults_to_empty() {
    assert!(RelayResponse::ok().into_locations().unwrap().is_empty());
}
