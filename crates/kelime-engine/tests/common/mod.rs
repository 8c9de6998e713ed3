//! Common test utilities for session engine tests.

use kelime_engine::StudySession;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Start a new mock server for testing.
pub async fn setup_mock_server() -> MockServer {
    MockServer::start().await
}

/// Create a StudySession connected to the mock server.
pub fn session_for_mock(server: &MockServer) -> StudySession {
    let client = kelime_engine::ClientBuilder::new().url(server.uri()).build();
    StudySession::from_client(client)
}

/// A service-shaped card payload.
pub fn card_json(id: i64, word: &str) -> serde_json::Value {
    serde_json::json!({
        "id": id,
        "turkish_word": word,
        "translations": [
            {
                "ukrainian": "переклад",
                "example_turkish": format!("{word} ile bir örnek."),
                "example_ukrainian": "приклад речення"
            }
        ],
        "status": "learning",
        "correct_repetitions": 1
    })
}

/// Mount the review queue endpoint returning the given cards.
pub async fn mock_review_queue(server: &MockServer, cards: serde_json::Value) {
    Mock::given(method("GET"))
        .and(path("/api/cards/review"))
        .respond_with(ResponseTemplate::new(200).set_body_json(cards))
        .expect(1)
        .mount(server)
        .await;
}

/// A service-shaped feedback acknowledgement.
pub fn feedback_response(card_id: i64, word: &str, became_learned: bool) -> ResponseTemplate {
    ResponseTemplate::new(200).set_body_json(serde_json::json!({
        "id": card_id,
        "turkish_word": word,
        "translations": [],
        "status": if became_learned { "learned" } else { "learning" },
        "correct_repetitions": 2,
        "became_learned": became_learned
    }))
}

/// Mount the feedback endpoint for one card.
pub async fn mock_feedback(server: &MockServer, card_id: i64, response: ResponseTemplate) {
    Mock::given(method("PUT"))
        .and(path(format!("/api/cards/{card_id}/review")))
        .respond_with(response)
        .expect(1)
        .mount(server)
        .await;
}
