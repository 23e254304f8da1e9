//! Mock board backend for integration tests
//!
//! Wraps a `wiremock` server that speaks the two board endpoints.

use noteboard::board_app::{Config, HttpBoardApi};
use noteboard::shared::AppConfig;
use serde_json::{json, Value};
use std::time::Duration;
use wiremock::matchers::{body_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

pub const USER_KEY: &str = "owner-key";

/// Board with columns `[backlog, doing, done]` and note `N1` in `backlog`
pub fn board_json() -> Value {
    json!({
        "board": { "name": "Team board" },
        "users": [
            { "id": 1, "name": "Ada" },
            { "id": 2, "name": "Grace" }
        ],
        "columns": [
            { "id": "backlog", "name": "backlog" },
            { "id": "doing", "name": "doing" },
            { "id": "done", "name": "done" }
        ],
        "notes": [{
            "id": "N1",
            "title": "Write docs",
            "description": "README and guide",
            "board_column_fk": "backlog",
            "status": null
        }]
    })
}

pub fn moved_note_json(column: &str) -> Value {
    json!({
        "note": {
            "id": "N1",
            "title": "Write docs",
            "description": "README and guide",
            "board_column_fk": column
        }
    })
}

pub struct MockBoardServer {
    pub server: MockServer,
}

impl MockBoardServer {
    pub async fn start() -> Self {
        Self {
            server: MockServer::start().await,
        }
    }

    pub fn api(&self) -> HttpBoardApi {
        self.api_with_timeout(Duration::from_secs(5))
    }

    pub fn api_with_timeout(&self, timeout: Duration) -> HttpBoardApi {
        let config = Config::with_builder(
            AppConfig::builder()
                .server_url(self.server.uri())
                .request_timeout(timeout),
        )
        .expect("mock server URL is valid");
        HttpBoardApi::new(config).expect("client builds")
    }

    pub async fn serve_board(&self, status: u16, body: Value) {
        Mock::given(method("GET"))
            .and(path(format!("/api/board/{}", USER_KEY)))
            .respond_with(ResponseTemplate::new(status).set_body_json(body))
            .expect(1)
            .mount(&self.server)
            .await;
    }

    /// Answer the column update for `note_id`/`column` with `response`
    pub async fn serve_move(&self, note_id: &str, column: &str, response: ResponseTemplate) {
        Mock::given(method("PATCH"))
            .and(path(format!("/api/editNoteColumn/{}", note_id)))
            .and(body_json(json!({ "newColumnId": column })))
            .respond_with(response)
            .expect(1)
            .mount(&self.server)
            .await;
    }
}
