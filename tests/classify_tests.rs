// Classification and content normalization tests

use std::io::Write;

use classifai::{ClassifaiClient, ClassifaiError, ClassifyOptions, ClientConfig, ContentItem};
use mockito::Matcher;
use serde_json::json;

// base64 of b"fake_image_data"
const FAKE_IMAGE_B64: &str = "ZmFrZV9pbWFnZV9kYXRh";

fn client_for(server: &mockito::Server) -> ClassifaiClient {
    ClassifaiClient::new(ClientConfig::anonymous().base_url(server.url())).unwrap()
}

fn classify_response() -> serde_json::Value {
    json!({
        "label": "spam",
        "labels": {"spam": 0.9, "not_spam": 0.1},
        "detection_id": "det_1",
        "project_id": "proj_1",
        "labels_used": ["spam", "not_spam"],
        "ground_truth_url": "https://api.classifai.dev/ground_truth/det_1",
        "model_used": "test_model",
        "processing_time_ms": 100
    })
}

#[tokio::test]
async fn classify_simple_text() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("POST", "/classify")
        .match_body(Matcher::PartialJson(json!({
            "content": [{"type": "text", "content": "spam message"}],
            "labels": ["spam", "not_spam"]
        })))
        .with_status(200)
        .with_body(classify_response().to_string())
        .create_async()
        .await;

    let client = client_for(&server);
    let labels = vec!["spam".to_string(), "not_spam".to_string()];
    let result = client
        .classify("spam message", ClassifyOptions::labels(&labels))
        .await
        .unwrap();

    assert_eq!(result.label, "spam");
    assert_eq!(result.score("spam"), Some(0.9));
    assert_eq!(result.detection_id, "det_1");
    mock.assert_async().await;
}

#[tokio::test]
async fn classify_omits_unset_options() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("POST", "/classify")
        .match_body(Matcher::Json(json!({
            "content": [{"type": "text", "content": "The food was terrible"}],
            "description": "Restaurant reviews"
        })))
        .with_status(200)
        .with_body(classify_response().to_string())
        .create_async()
        .await;

    let client = client_for(&server);
    client
        .classify(
            "The food was terrible",
            ClassifyOptions::description("Restaurant reviews"),
        )
        .await
        .unwrap();
    mock.assert_async().await;
}

#[tokio::test]
async fn classify_multiple_texts_in_order() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("POST", "/classify")
        .match_body(Matcher::PartialJson(json!({
            "content": [
                {"type": "text", "content": "Great product!"},
                {"type": "text", "content": "Fast shipping"}
            ]
        })))
        .with_status(200)
        .with_body(classify_response().to_string())
        .create_async()
        .await;

    let client = client_for(&server);
    client
        .classify(
            vec!["Great product!", "Fast shipping"],
            ClassifyOptions::project("proj_1"),
        )
        .await
        .unwrap();
    mock.assert_async().await;
}

#[tokio::test]
async fn nonexistent_path_is_sent_as_text() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("POST", "/classify")
        .match_body(Matcher::PartialJson(json!({
            "content": [{"type": "text", "content": "a.jpg"}]
        })))
        .with_status(200)
        .with_body(classify_response().to_string())
        .create_async()
        .await;

    let client = client_for(&server);
    let labels = vec!["filename".to_string(), "other".to_string()];
    client
        .classify(vec!["a.jpg"], ClassifyOptions::labels(&labels))
        .await
        .unwrap();
    mock.assert_async().await;
}

#[tokio::test]
async fn local_file_is_read_and_encoded() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(b"fake_image_data").unwrap();
    let path = file.path().to_str().unwrap().to_string();

    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("POST", "/classify")
        .match_body(Matcher::PartialJson(json!({
            "content": [{"type": "image", "content": FAKE_IMAGE_B64}]
        })))
        .with_status(200)
        .with_body(classify_response().to_string())
        .create_async()
        .await;

    let client = client_for(&server);
    let labels = vec!["cat".to_string(), "dog".to_string()];
    client
        .classify(vec![path], ClassifyOptions::labels(&labels))
        .await
        .unwrap();
    mock.assert_async().await;
}

#[tokio::test]
async fn url_is_downloaded_and_encoded() {
    let mut server = mockito::Server::new_async().await;
    let download = server
        .mock("GET", "/photo.jpg")
        .with_status(200)
        .with_body(b"fake_image_data".to_vec())
        .create_async()
        .await;
    let mock = server
        .mock("POST", "/classify")
        .match_body(Matcher::PartialJson(json!({
            "content": [{"type": "image", "content": FAKE_IMAGE_B64}]
        })))
        .with_status(200)
        .with_body(classify_response().to_string())
        .create_async()
        .await;

    let client = client_for(&server);
    let labels = vec!["cat".to_string(), "dog".to_string()];
    client
        .classify(
            vec![format!("{}/photo.jpg", server.url())],
            ClassifyOptions::labels(&labels),
        )
        .await
        .unwrap();
    download.assert_async().await;
    mock.assert_async().await;
}

#[tokio::test]
async fn mixed_items_keep_input_order() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(b"fake_image_data").unwrap();
    let path = file.path().to_str().unwrap().to_string();

    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("POST", "/classify")
        .match_body(Matcher::PartialJson(json!({
            "content": [
                {"type": "text", "content": "Before:"},
                {"type": "image", "content": FAKE_IMAGE_B64},
                {"type": "text", "content": "After:"}
            ]
        })))
        .with_status(200)
        .with_body(classify_response().to_string())
        .create_async()
        .await;

    let client = client_for(&server);
    let labels = vec!["improvement".to_string(), "no_change".to_string()];
    client
        .classify(
            vec!["Before:".to_string(), path, "After:".to_string()],
            ClassifyOptions::labels(&labels),
        )
        .await
        .unwrap();
    mock.assert_async().await;
}

#[tokio::test]
async fn preformed_items_pass_through_unchanged() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("POST", "/classify")
        .match_body(Matcher::PartialJson(json!({
            "content": [{"type": "text", "content": "photo.jpg"}]
        })))
        .with_status(200)
        .with_body(classify_response().to_string())
        .create_async()
        .await;

    let client = client_for(&server);
    let labels = vec!["filename".to_string(), "other".to_string()];
    // Literal text that looks like a path must not be reclassified.
    client
        .classify(
            vec![ContentItem::text("photo.jpg")],
            ClassifyOptions::labels(&labels),
        )
        .await
        .unwrap();
    mock.assert_async().await;
}

#[tokio::test]
async fn failed_download_aborts_without_posting() {
    let mut server = mockito::Server::new_async().await;
    let download = server
        .mock("GET", "/missing.jpg")
        .with_status(404)
        .create_async()
        .await;
    let classify = server
        .mock("POST", "/classify")
        .expect(0)
        .create_async()
        .await;

    let client = client_for(&server);
    let labels = vec!["cat".to_string(), "dog".to_string()];
    let err = client
        .classify(
            vec![format!("{}/missing.jpg", server.url())],
            ClassifyOptions::labels(&labels),
        )
        .await
        .unwrap_err();

    assert!(matches!(err, ClassifaiError::Request(_)));
    assert_eq!(err.status_code(), None);
    download.assert_async().await;
    classify.assert_async().await;
}

#[tokio::test]
async fn api_key_header_sent_when_configured() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("POST", "/classify")
        .match_header("x-api-key", "test_key")
        .with_status(200)
        .with_body(classify_response().to_string())
        .create_async()
        .await;

    let client = ClassifaiClient::new(
        ClientConfig::with_api_key("test_key").base_url(server.url()),
    )
    .unwrap();
    let labels = vec!["spam".to_string(), "not_spam".to_string()];
    client
        .classify("test", ClassifyOptions::labels(&labels))
        .await
        .unwrap();
    mock.assert_async().await;
}

#[tokio::test]
async fn anonymous_client_sends_no_api_key() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("POST", "/classify")
        .match_header("x-api-key", Matcher::Missing)
        .with_status(200)
        .with_body(classify_response().to_string())
        .create_async()
        .await;

    let client = client_for(&server);
    let labels = vec!["spam".to_string(), "not_spam".to_string()];
    client
        .classify("test", ClassifyOptions::labels(&labels))
        .await
        .unwrap();
    mock.assert_async().await;
}

#[tokio::test]
async fn rate_limited_classify_maps_to_rate_limit_error() {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("POST", "/classify")
        .with_status(429)
        .with_body(r#"{"error": "Rate limit exceeded", "detail": "10 per minute"}"#)
        .create_async()
        .await;

    let client = client_for(&server);
    let labels = vec!["a".to_string(), "b".to_string()];
    let err = client
        .classify("test", ClassifyOptions::labels(&labels))
        .await
        .unwrap_err();

    assert!(err.is_rate_limit());
    assert_eq!(err.status_code(), Some(429));
    let message = err.to_string();
    assert!(message.contains("Rate limit exceeded"));
    assert!(message.contains("10 per minute"));
}

#[tokio::test]
async fn unauthorized_classify_maps_to_auth_error() {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("POST", "/classify")
        .with_status(401)
        .with_body(r#"{"error": "Invalid API key"}"#)
        .create_async()
        .await;

    let client = ClassifaiClient::new(
        ClientConfig::with_api_key("invalid_key").base_url(server.url()),
    )
    .unwrap();
    let labels = vec!["a".to_string(), "b".to_string()];
    let err = client
        .classify("test", ClassifyOptions::labels(&labels))
        .await
        .unwrap_err();

    assert!(matches!(err, ClassifaiError::Auth { .. }));
    assert_eq!(err.status_code(), Some(401));
    assert!(err.to_string().contains("Invalid API key"));
}
