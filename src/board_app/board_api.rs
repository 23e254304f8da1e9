//! Board API Client
//!
//! The board client talks to exactly two backend endpoints: the board
//! snapshot read and the note column update. [`BoardApi`] is the seam the
//! rest of the client is written against; [`HttpBoardApi`] is the reqwest
//! implementation used in production.

use crate::board_app::config::Config;
use crate::shared::{
    BoardError, BoardSnapshot, ColumnId, EditNoteColumnRequest, EditNoteColumnResponse, NoteId,
};
use reqwest::{Client, RequestBuilder, Url};
use serde::de::DeserializeOwned;
use std::future::Future;

/// Remote operations the board client depends on
pub trait BoardApi {
    /// `GET /api/board/{userKey}`
    fn fetch_board(
        &self,
        user_key: &str,
    ) -> impl Future<Output = Result<BoardSnapshot, BoardError>> + Send;

    /// `PATCH /api/editNoteColumn/{noteId}`
    fn edit_note_column(
        &self,
        note_id: &NoteId,
        column: &ColumnId,
    ) -> impl Future<Output = Result<EditNoteColumnResponse, BoardError>> + Send;
}

/// Failure of a single HTTP exchange, before it is mapped onto a
/// [`BoardError`] variant by the caller
#[derive(Debug)]
struct HttpFailure {
    reason: String,
    status: Option<u16>,
}

/// reqwest-backed board API client
#[derive(Debug, Clone)]
pub struct HttpBoardApi {
    config: Config,
    client: Client,
}

impl HttpBoardApi {
    pub fn new(config: Config) -> Result<Self, BoardError> {
        let client = Client::builder()
            .timeout(config.request_timeout())
            .build()
            .map_err(|e| BoardError::load(format!("Failed to build HTTP client: {}", e), None))?;
        Ok(Self { config, client })
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Build `{base}{prefix}/{segment}` with the segment percent-encoded
    fn endpoint(&self, prefix: &str, segment: &str) -> Result<Url, String> {
        let mut url = Url::parse(&self.config.api_url(prefix))
            .map_err(|e| format!("Invalid URL: {}", e))?;
        url.path_segments_mut()
            .map_err(|_| "Backend URL cannot carry a path".to_string())?
            .push(segment);
        Ok(url)
    }

    async fn send_json<T: DeserializeOwned>(request: RequestBuilder) -> Result<T, HttpFailure> {
        let response = request.send().await.map_err(|e| HttpFailure {
            reason: format!("Network error: {}", e),
            status: None,
        })?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| status.to_string());
            return Err(HttpFailure {
                reason: format!("Request failed: {} - {}", status, error_text),
                status: Some(status.as_u16()),
            });
        }

        let body = response.bytes().await.map_err(|e| HttpFailure {
            reason: format!("Failed to read response: {}", e),
            status: Some(status.as_u16()),
        })?;
        serde_json::from_slice(&body).map_err(|e| HttpFailure {
            reason: format!("Failed to parse response: {}", e),
            status: Some(status.as_u16()),
        })
    }
}

impl BoardApi for HttpBoardApi {
    async fn fetch_board(&self, user_key: &str) -> Result<BoardSnapshot, BoardError> {
        let url = self
            .endpoint("/api/board", user_key)
            .map_err(|reason| BoardError::load(reason, None))?;
        tracing::debug!("[LOAD] GET {}", url);

        Self::send_json(self.client.get(url))
            .await
            .map_err(|f| BoardError::load(f.reason, f.status))
    }

    async fn edit_note_column(
        &self,
        note_id: &NoteId,
        column: &ColumnId,
    ) -> Result<EditNoteColumnResponse, BoardError> {
        let url = self
            .endpoint("/api/editNoteColumn", note_id.as_str())
            .map_err(|reason| BoardError::move_confirmation(note_id.clone(), reason, None))?;
        tracing::debug!("[DRAG] PATCH {} -> column {}", url, column);

        let body = EditNoteColumnRequest {
            new_column_id: column.clone(),
        };
        Self::send_json(self.client.patch(url).json(&body))
            .await
            .map_err(|f| BoardError::move_confirmation(note_id.clone(), f.reason, f.status))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoint_encodes_segment() {
        let api = HttpBoardApi::new(Config::new()).unwrap();
        let url = api.endpoint("/api/board", "a b/c").unwrap();
        assert_eq!(url.as_str(), "http://127.0.0.1:3000/api/board/a%20b%2Fc");
    }

    #[test]
    fn test_endpoint_plain_segment() {
        let api = HttpBoardApi::new(Config::new()).unwrap();
        let url = api.endpoint("/api/editNoteColumn", "17").unwrap();
        assert_eq!(url.as_str(), "http://127.0.0.1:3000/api/editNoteColumn/17");
    }
}
