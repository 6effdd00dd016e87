//! File upload tests, against both the mock transport and a wiremock
//! server exercising the real reqwest transport.

use crate::auth::AuthManager;
use crate::config::PinnacleConfigBuilder;
use crate::errors::PinnacleError;
use crate::mocks::{MockHttpTransport, MockResponse, RecordedRequest};
use crate::services::files::{FilesService, FilesServiceTrait, UploadRequest};
use serde_json::json;
use std::path::PathBuf;
use std::sync::Arc;
use wiremock::matchers::{body_string, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn mock_service(transport: Arc<MockHttpTransport>) -> FilesService {
    let config = Arc::new(
        PinnacleConfigBuilder::new()
            .api_key("pk-test")
            .build()
            .unwrap(),
    );
    let base_url = config.build_url("");
    FilesService::new(transport, AuthManager::new(config), base_url)
}

fn temp_file(name: &str, content: &[u8]) -> PathBuf {
    let path = std::env::temp_dir().join(format!("pinnacle-client-{}-{}", std::process::id(), name));
    std::fs::write(&path, content).unwrap();
    path
}

#[tokio::test]
async fn test_upload_from_path_puts_bytes_to_presigned_url() {
    let transport = Arc::new(MockHttpTransport::new());
    transport.push_response(MockResponse::json(&json!({
        "uploadUrl": "https://storage.example/put/key",
        "downloadUrl": "https://storage.example/get/key"
    })));
    transport.push_response(MockResponse::ok(""));

    let service = mock_service(transport.clone());
    let file = temp_file("photo.png", b"png bytes");

    let download_url = service.upload_from_path(file.clone(), None).await.unwrap();
    assert_eq!(download_url, "https://storage.example/get/key");

    let requests = transport.requests();
    assert_eq!(requests.len(), 2);
    match &requests[0] {
        RecordedRequest::Json { method, url, body } => {
            assert_eq!(method, "POST");
            assert!(url.ends_with("/tools/files/upload"));
            let body = body.as_ref().unwrap();
            assert_eq!(body["contentType"], "image/png");
            assert_eq!(body["size"], 9);
            assert_eq!(body["name"], json!(file.file_name().unwrap().to_str().unwrap()));
        }
        other => panic!("expected JSON request, got {other:?}"),
    }
    match &requests[1] {
        RecordedRequest::Put {
            url,
            content_type,
            body_len,
        } => {
            assert_eq!(url, "https://storage.example/put/key");
            assert_eq!(content_type, "image/png");
            assert_eq!(*body_len, 9);
        }
        other => panic!("expected PUT request, got {other:?}"),
    }

    std::fs::remove_file(file).ok();
}

#[tokio::test]
async fn test_upload_skips_put_when_no_upload_url() {
    let transport = Arc::new(MockHttpTransport::new());
    transport.push_response(MockResponse::json(&json!({
        "downloadUrl": "https://storage.example/get/hosted"
    })));

    let service = mock_service(transport.clone());
    let file = temp_file("hosted.pdf", b"%PDF-1.4");

    let download_url = service.upload_from_path(file.clone(), None).await.unwrap();
    assert_eq!(download_url, "https://storage.example/get/hosted");
    assert_eq!(transport.requests().len(), 1);

    std::fs::remove_file(file).ok();
}

#[tokio::test]
async fn test_upload_from_missing_path() {
    let service = mock_service(Arc::new(MockHttpTransport::new()));
    let err = service
        .upload_from_path(PathBuf::from("/nonexistent/file.png"), None)
        .await
        .unwrap_err();
    assert_eq!(err.http_status(), Some(404));
}

#[tokio::test]
async fn test_upload_from_directory() {
    let service = mock_service(Arc::new(MockHttpTransport::new()));
    let err = service
        .upload_from_path(std::env::temp_dir(), None)
        .await
        .unwrap_err();
    match err {
        PinnacleError::BadRequest { message } => {
            assert!(message.contains("directory"));
        }
        other => panic!("expected bad request, got {other:?}"),
    }
}

#[tokio::test]
async fn test_upload_propagates_api_error() {
    let transport = Arc::new(MockHttpTransport::new());
    transport.push_response(MockResponse::status(401, "invalid api key"));

    let service = mock_service(transport);
    let err = service
        .upload(UploadRequest::new("image/png", 10))
        .await
        .unwrap_err();
    assert!(matches!(err, PinnacleError::Unauthorized { .. }));
}

#[tokio::test]
async fn test_upload_end_to_end_against_wiremock() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/tools/files/upload"))
        .and(header("PINNACLE-API-KEY", "pk-wiremock"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "uploadUrl": format!("{}/storage/object-1", server.uri()),
            "downloadUrl": format!("{}/storage/object-1?download", server.uri())
        })))
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("PUT"))
        .and(path("/storage/object-1"))
        .and(header("content-type", "image/jpeg"))
        .and(body_string("jpeg bytes"))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;

    let config = PinnacleConfigBuilder::new()
        .api_key("pk-wiremock")
        .base_url(&server.uri())
        .unwrap()
        .build()
        .unwrap();
    let client = crate::PinnacleClient::new(config).unwrap();

    let file = temp_file("wiremock.jpg", b"jpeg bytes");
    let download_url = client
        .files()
        .upload_from_path(file.clone(), Some("renamed.jpg".to_string()))
        .await
        .unwrap();
    assert!(download_url.ends_with("/storage/object-1?download"));

    std::fs::remove_file(file).ok();
}

#[tokio::test]
async fn test_upload_put_failure_surfaces_server_error() {
    let transport = Arc::new(MockHttpTransport::new());
    transport.push_response(MockResponse::json(&json!({
        "uploadUrl": "https://storage.example/put/key",
        "downloadUrl": "https://storage.example/get/key"
    })));
    transport.push_response(MockResponse::status(503, ""));

    let service = mock_service(transport);
    let file = temp_file("failing.gif", b"gif");

    let err = service.upload_from_path(file.clone(), None).await.unwrap_err();
    match err {
        PinnacleError::Server { status, message } => {
            assert_eq!(status, 503);
            assert!(message.contains("failed to upload file"));
        }
        other => panic!("expected server error, got {other:?}"),
    }

    std::fs::remove_file(file).ok();
}
