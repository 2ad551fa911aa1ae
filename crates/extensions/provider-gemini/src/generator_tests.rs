use super::*;
use geoexplorer_protocols::ErrorKind;
use wiremock::{matchers, Mock, MockServer, ResponseTemplate};

const MODEL_PATH: &str = "/models/gemini-1.5-flash:generateContent";

fn generator(server: &MockServer) -> GeminiGenerator {
    GeminiGenerator::with_endpoint(server.uri(), DEFAULT_MODEL).unwrap()
}

#[test]
fn test_generator_identity() {
    let generator = GeminiGenerator::new().unwrap();
    assert_eq!(generator.id(), "gemini");
    assert_eq!(generator.display_name(), "Gemini");
    assert_eq!(generator.model(), "gemini-1.5-flash");
}

#[tokio::test]
async fn test_generate_returns_candidate_text() {
    let mock_server = MockServer::start().await;

    let response_body = serde_json::json!({
        "candidates": [{"content": {"parts": [{"text": "X"}]}}]
    });

    Mock::given(matchers::method("POST"))
        .and(matchers::path(MODEL_PATH))
        .and(matchers::query_param("key", "test-key"))
        .and(matchers::body_json(serde_json::json!({
            "contents": [{"parts": [{"text": "Describe the Mall"}]}]
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(&response_body))
        .expect(1)
        .mount(&mock_server)
        .await;

    let text = generator(&mock_server)
        .generate("test-key", "Describe the Mall")
        .await
        .unwrap();
    assert_eq!(text, "X");
}

#[tokio::test]
async fn test_generate_missing_candidates_is_malformed() {
    let mock_server = MockServer::start().await;

    Mock::given(matchers::method("POST"))
        .and(matchers::path(MODEL_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "promptFeedback": {"blockReason": "SAFETY"}
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let err = generator(&mock_server)
        .generate("test-key", "prompt")
        .await
        .unwrap_err();
    assert!(matches!(err, GenerationError::MalformedResponse(_)));
    assert_eq!(err.kind(), ErrorKind::MalformedResponse);
}

#[tokio::test]
async fn test_generate_invalid_json_is_malformed() {
    let mock_server = MockServer::start().await;

    Mock::given(matchers::method("POST"))
        .and(matchers::path(MODEL_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>oops</html>"))
        .expect(1)
        .mount(&mock_server)
        .await;

    let err = generator(&mock_server)
        .generate("test-key", "prompt")
        .await
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::MalformedResponse);
}

#[tokio::test]
async fn test_generate_api_error() {
    let mock_server = MockServer::start().await;

    let error_body = r#"{"error": {"code": 400, "message": "API key not valid", "status": "INVALID_ARGUMENT"}}"#;

    Mock::given(matchers::method("POST"))
        .and(matchers::path(MODEL_PATH))
        .respond_with(ResponseTemplate::new(400).set_body_string(error_body))
        .expect(1)
        .mount(&mock_server)
        .await;

    let err = generator(&mock_server)
        .generate("bad-key", "prompt")
        .await
        .unwrap_err();
    match err {
        GenerationError::ApiError { status, ref message } => {
            assert_eq!(status, 400);
            assert_eq!(message, "API key not valid");
        }
        other => panic!("unexpected error: {:?}", other),
    }
    assert_eq!(err.kind(), ErrorKind::Transport);
}

#[tokio::test]
async fn test_generate_server_error_plain_body() {
    let mock_server = MockServer::start().await;

    Mock::given(matchers::method("POST"))
        .and(matchers::path(MODEL_PATH))
        .respond_with(ResponseTemplate::new(503).set_body_string("Service Unavailable"))
        .expect(1)
        .mount(&mock_server)
        .await;

    let err = generator(&mock_server)
        .generate("test-key", "prompt")
        .await
        .unwrap_err();
    assert!(err.to_string().contains("Service Unavailable"));
}

#[tokio::test]
async fn test_generate_without_key_makes_no_request() {
    let mock_server = MockServer::start().await;

    Mock::given(matchers::any())
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&mock_server)
        .await;

    let err = generator(&mock_server)
        .generate("  ", "prompt")
        .await
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Configuration);
}

#[tokio::test]
async fn test_generate_network_error() {
    let generator = GeminiGenerator::with_endpoint("http://127.0.0.1:1", DEFAULT_MODEL).unwrap();
    let err = generator.generate("test-key", "prompt").await.unwrap_err();
    assert!(matches!(err, GenerationError::Network(_)));
}
