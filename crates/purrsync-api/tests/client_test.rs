#![allow(clippy::unwrap_used)]
// Integration tests for `CatApiClient` using wiremock.

use secrecy::SecretString;
use serde_json::json;
use wiremock::matchers::{header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use purrsync_api::{CatApiClient, TransportConfig};

// ── Helpers ─────────────────────────────────────────────────────────

async fn setup() -> (MockServer, CatApiClient) {
    let server = MockServer::start().await;
    let key: SecretString = "test-key".to_string().into();
    let client =
        CatApiClient::from_api_key(&format!("{}/v1", server.uri()), &key, &TransportConfig::default())
            .unwrap();
    (server, client)
}

// ── Image search ────────────────────────────────────────────────────

#[tokio::test]
async fn test_search_images_sends_paging_and_key() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/v1/images/search"))
        .and(query_param("limit", "10"))
        .and(query_param("page", "2"))
        .and(query_param("order", "Asc"))
        .and(header("x-api-key", "test-key"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {
                "id": "abc",
                "url": "https://cdn2.thecatapi.com/images/abc.jpg",
                "width": 500,
                "height": 400,
                "breeds": [{ "id": "beng", "name": "Bengal" }]
            },
            {
                "id": "def",
                "url": "https://cdn2.thecatapi.com/images/def.jpg"
            }
        ])))
        .expect(1)
        .mount(&server)
        .await;

    let resp = client.search_images(2, 10).await.unwrap();

    assert_eq!(resp.status, 200);
    assert!(resp.message.is_none());
    let images = resp.body.unwrap();
    assert_eq!(images.len(), 2);
    assert_eq!(images[0].id, "abc");
    assert_eq!(images[0].breeds[0].name, "Bengal");
    assert_eq!(images[1].id, "def");
    assert!(images[1].breeds.is_empty());
}

#[tokio::test]
async fn test_search_images_empty_page() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/v1/images/search"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .mount(&server)
        .await;

    let resp = client.search_images(0, 10).await.unwrap();
    assert!(resp.is_success());
    assert_eq!(resp.body, Some(Vec::new()));
}

// ── Favourites ──────────────────────────────────────────────────────

#[tokio::test]
async fn test_list_favourites() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/v1/favourites"))
        .and(query_param("sub_id", "my-user57"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {
                "id": 100_038_507,
                "user_id": "4",
                "image_id": "img1",
                "sub_id": "my-user57",
                "created_at": "2023-10-19T10:10:10.000Z",
                "image": { "id": "img1", "url": "https://cdn2.thecatapi.com/images/img1.jpg" }
            }
        ])))
        .mount(&server)
        .await;

    let resp = client.list_favourites("my-user57").await.unwrap();
    let favs = resp.body.unwrap();

    assert_eq!(favs.len(), 1);
    assert_eq!(favs[0].id, 100_038_507);
    assert_eq!(favs[0].image_id, "img1");
    assert_eq!(
        favs[0].image.url.as_deref(),
        Some("https://cdn2.thecatapi.com/images/img1.jpg")
    );
}

#[tokio::test]
async fn test_error_status_keeps_message() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/v1/favourites"))
        .respond_with(ResponseTemplate::new(400).set_body_string("Error message"))
        .mount(&server)
        .await;

    let resp = client.list_favourites("u1").await.unwrap();

    assert_eq!(resp.status, 400);
    assert!(!resp.is_success());
    assert!(resp.body.is_none());
    assert_eq!(resp.message.as_deref(), Some("Error message"));
}

#[tokio::test]
async fn test_error_status_without_body_uses_reason() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/v1/images/search"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;

    let resp = client.search_images(0, 10).await.unwrap();
    assert_eq!(resp.status, 404);
    assert_eq!(resp.message.as_deref(), Some("Not Found"));
}

#[tokio::test]
async fn test_malformed_payload_is_reported() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/v1/favourites"))
        .respond_with(ResponseTemplate::new(200).set_body_string("{not json"))
        .mount(&server)
        .await;

    let resp = client.list_favourites("u1").await.unwrap();

    assert_eq!(resp.status, 200);
    assert!(resp.body.is_none());
    assert!(resp.message.unwrap().starts_with("malformed payload"));
}

#[tokio::test]
async fn test_empty_body_is_reported() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/v1/favourites"))
        .respond_with(ResponseTemplate::new(200))
        .mount(&server)
        .await;

    let resp = client.list_favourites("u1").await.unwrap();
    assert!(resp.body.is_none());
    assert_eq!(resp.message.as_deref(), Some("empty response body"));
}

// ── Transport ───────────────────────────────────────────────────────

#[tokio::test]
async fn test_connection_refused_is_transport_error() {
    // Bind an ephemeral port and release it so nothing is listening there.
    let port = {
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        listener.local_addr().unwrap().port()
    };

    let client = CatApiClient::from_reqwest(&format!("http://127.0.0.1:{port}/v1"), reqwest::Client::new())
        .unwrap();
    let err = client.search_images(0, 10).await.unwrap_err();

    assert!(
        matches!(err, purrsync_api::Error::Transport(_)),
        "expected Transport error, got: {err:?}"
    );
    assert!(err.is_connect());
    assert!(!err.is_timeout());
}

#[tokio::test]
async fn test_anonymous_client_sends_no_key() {
    let server = MockServer::start().await;
    let client =
        CatApiClient::anonymous(&format!("{}/v1", server.uri()), &TransportConfig::default()).unwrap();

    Mock::given(method("GET"))
        .and(path("/v1/images/search"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .mount(&server)
        .await;

    client.search_images(0, 10).await.unwrap();

    let requests = server.received_requests().await.unwrap();
    assert_eq!(requests.len(), 1);
    assert!(!requests[0].headers.contains_key("x-api-key"));
}
