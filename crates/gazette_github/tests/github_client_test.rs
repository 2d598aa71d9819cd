use gazette_error::GazetteErrorKind;
use gazette_github::{GitHubClient, PutContentsRequest};
use gazette_interface::ContentRepository;
use serde_json::json;
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

#[tokio::test]
async fn put_file_sends_base64_content_on_branch() {
    let server = MockServer::start().await;
    Mock::given(method("PUT"))
        .and(path("/repos/acme/blog/contents/_posts/2024-05-01-cozy-nooks.md"))
        .and(header("Authorization", "token secret"))
        .and(header("Accept", "application/vnd.github.v3+json"))
        .and(body_json(json!({
            "message": "Add new article: Cozy Nooks",
            "content": "aGVsbG8=",
            "branch": "main",
        })))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({"content": {}})))
        .expect(1)
        .mount(&server)
        .await;

    let client = GitHubClient::with_base_url("secret", "acme/blog", "main", server.uri()).unwrap();
    client
        .put_file(
            "_posts/2024-05-01-cozy-nooks.md",
            b"hello",
            "Add new article: Cozy Nooks",
        )
        .await
        .unwrap();
}

#[tokio::test]
async fn ok_status_also_counts_as_success() {
    let server = MockServer::start().await;
    Mock::given(method("PUT"))
        .respond_with(ResponseTemplate::new(200))
        .mount(&server)
        .await;

    let client = GitHubClient::with_base_url("t", "acme/blog", "main", server.uri()).unwrap();
    assert!(client.put_file("a.md", b"x", "m").await.is_ok());
}

#[tokio::test]
async fn conflict_422_is_rejected_with_status() {
    let server = MockServer::start().await;
    Mock::given(method("PUT"))
        .respond_with(
            ResponseTemplate::new(422).set_body_string(r#"{"message":"sha wasn't supplied"}"#),
        )
        .mount(&server)
        .await;

    let client = GitHubClient::with_base_url("t", "acme/blog", "main", server.uri()).unwrap();
    let err = client.put_file("a.md", b"x", "m").await.unwrap_err();

    match err.kind() {
        GazetteErrorKind::Repository(e) => {
            assert_eq!(e.kind.status_code(), Some(422));
            assert!(e.to_string().contains("sha wasn't supplied"));
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[tokio::test]
async fn location_names_repo_and_branch() {
    let client = GitHubClient::with_base_url("t", "acme/blog", "gh-pages", "http://localhost").unwrap();
    assert_eq!(client.location(), "acme/blog@gh-pages");
    assert_eq!(client.branch(), "gh-pages");
}

#[test]
fn missing_token_or_bad_repo_is_rejected() {
    assert!(GitHubClient::with_base_url("", "acme/blog", "main", "http://localhost").is_err());
    assert!(GitHubClient::with_base_url("t", "acme", "main", "http://localhost").is_err());
    assert!(GitHubClient::with_base_url("t", "/blog", "main", "http://localhost").is_err());
}

#[test]
fn request_body_encodes_bytes() {
    let body = PutContentsRequest::new("msg", &[0xFF, 0xD8, 0xFF], "main");
    assert_eq!(body.content(), "/9j/");
    assert_eq!(body.branch(), "main");
}
