//! HTTP access to the match host.
//!
//! [`LiveGameApi`] is the seam between the autoplay loop and the network.
//! Production goes through [`HttpLiveClient`] over reqwest; tests script
//! the trait directly and never open a socket.

use async_trait::async_trait;
use thiserror::Error;
use tracing::debug;

use crate::protocol::{LiveState, MoveRequest, StartRequest};

/// Transport-level failures. The agent retries these with its configured
/// delay; only the bounded retry loop turns them fatal.
#[derive(Error, Debug)]
pub enum ClientError {
    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("match host returned HTTP {status}: {body}")]
    Status { status: u16, body: String },
}

/// Async boundary to the live-game endpoints.
#[async_trait]
pub trait LiveGameApi: Send + Sync {
    /// `POST /api/live/start` against the hosted AI opponent.
    async fn create_game(&self) -> Result<LiveState, ClientError>;

    /// `GET /api/live/{id}`.
    async fn fetch_state(&self, id: &str) -> Result<LiveState, ClientError>;

    /// `POST /api/live/{id}/move` with a SAN or UCI move string.
    async fn submit_move(&self, id: &str, mv: &str) -> Result<LiveState, ClientError>;
}

/// Production client over reqwest.
pub struct HttpLiveClient {
    http: reqwest::Client,
    base_url: String,
}

impl HttpLiveClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    fn live_url(&self, tail: &str) -> String {
        format!("{}/api/live{tail}", self.base_url)
    }
}

async fn decode(response: reqwest::Response) -> Result<LiveState, ClientError> {
    let status = response.status();
    if !status.is_success() {
        let body = response.text().await.unwrap_or_default();
        return Err(ClientError::Status {
            status: status.as_u16(),
            body,
        });
    }
    Ok(response.json::<LiveState>().await?)
}

#[async_trait]
impl LiveGameApi for HttpLiveClient {
    async fn create_game(&self) -> Result<LiveState, ClientError> {
        let url = self.live_url("/start");
        debug!("[NET] POST {url}");
        let response = self.http.post(&url).json(&StartRequest::ai()).send().await?;
        decode(response).await
    }

    async fn fetch_state(&self, id: &str) -> Result<LiveState, ClientError> {
        let url = self.live_url(&format!("/{id}"));
        debug!("[NET] GET {url}");
        let response = self.http.get(&url).send().await?;
        decode(response).await
    }

    async fn submit_move(&self, id: &str, mv: &str) -> Result<LiveState, ClientError> {
        let url = self.live_url(&format!("/{id}/move"));
        debug!("[NET] POST {url} ({mv})");
        let response = self.http
            .post(&url)
            .json(&MoveRequest { mv: mv.to_string() })
            .send()
            .await?;
        decode(response).await
    }
}
