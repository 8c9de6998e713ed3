//! Tests for dictionary lookup actions.

mod common;

use common::{error_response, json_response, mock_endpoint, setup_mock_server};
use kelime::{Error, KelimeClient};
use wiremock::matchers::{body_json, method, path};
use wiremock::Mock;

#[tokio::test]
async fn test_search_word() {
    let server = setup_mock_server().await;
    Mock::given(method("POST"))
        .and(path("/api/words/search"))
        .and(body_json(serde_json::json!({"word": "nasıl"})))
        .respond_with(json_response(serde_json::json!({
            "turkish_word": "nasıl",
            "translations": [
                {
                    "ukrainian": "як",
                    "example_turkish": "Nasılsın?",
                    "example_ukrainian": "Як справи?"
                }
            ]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = KelimeClient::builder().url(server.uri()).build();
    let draft = client.words().search("nasıl").await.unwrap();

    assert_eq!(draft.word, "nasıl");
    assert_eq!(draft.translations.len(), 1);
    assert_eq!(
        draft.translations[0].example_foreign.as_deref(),
        Some("Nasılsın?")
    );
}

#[tokio::test]
async fn test_search_word_failure() {
    let server = setup_mock_server().await;
    mock_endpoint(
        &server,
        "POST",
        "/api/words/search",
        error_response(500, "Failed to search for the word"),
    )
    .await;

    let client = KelimeClient::builder().url(server.uri()).build();
    let err = client.words().search("xyzzy").await.unwrap_err();

    match err {
        Error::Api { status, message } => {
            assert_eq!(status, 500);
            assert_eq!(message, "Failed to search for the word");
        }
        other => panic!("expected Error::Api, got {other:?}"),
    }
}
