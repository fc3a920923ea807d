//! HTTP client for the backend REST API.
//!
//! The client normalizes every response through one decision function:
//! non-success statuses surface the backend's `error`/`message` field
//! (or a synthesized `HTTP error <status>` line), successful responses
//! with an empty or non-JSON body become a sentinel `Value::Null`.
//! Loading indicators are the router's business, not the client's.

use std::time::Duration;

use log::debug;
use reqwest::{Client, RequestBuilder, StatusCode};
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;
use thiserror::Error;

use flagdeck_model::routes::api;
use flagdeck_model::{
    ActionReply, CommandDescriptor, CompareResult, ExecuteReply, ExecuteRequest, Room, Stats,
    TeleportReply, TeleportRequest, UserDetail, UserSummary,
};

/// Failure classes surfaced to update handlers.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    /// The request never produced an HTTP response.
    #[error("network error: {0}")]
    Network(String),
    /// Non-2xx status, message taken from the payload when present.
    #[error("{message} (HTTP {status})")]
    Http { status: u16, message: String },
    /// The body claimed to be JSON but could not be used as such.
    #[error("invalid response payload: {0}")]
    Decode(String),
}

impl ApiError {
    /// HTTP status carried by the error, when there is one.
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Http { status, .. } => Some(*status),
            _ => None,
        }
    }
}

/// Thin wrapper over [`reqwest::Client`] bound to one backend.
#[derive(Debug, Clone)]
pub struct ApiClient {
    client: Client,
    base_url: String,
}

impl ApiClient {
    pub fn new(base_url: &str) -> Self {
        let client = Client::builder()
            .timeout(Duration::from_secs(30))
            .build()
            .expect("failed to create HTTP client");

        Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn build_url(&self, path: &str) -> String {
        format!("{}/api{}", self.base_url, path)
    }

    async fn execute(&self, request: RequestBuilder) -> Result<Value, ApiError> {
        let response = request
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;

        let status = response.status();
        let is_json = response
            .headers()
            .get(reqwest::header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .map(|v| v.contains("application/json"))
            .unwrap_or(false);
        let body = response
            .text()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;

        interpret_response(status, is_json, &body)
    }

    /// GET returning a typed payload.
    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let url = self.build_url(path);
        debug!("GET {url}");
        decode(self.execute(self.client.get(&url)).await?)
    }

    /// POST with a JSON body, returning a typed payload.
    pub async fn post<T: DeserializeOwned, B: Serialize>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, ApiError> {
        let url = self.build_url(path);
        debug!("POST {url}");
        decode(self.execute(self.client.post(&url).json(body)).await?)
    }

    /// POST without a body, for the bare maintenance triggers.
    pub async fn post_empty<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let url = self.build_url(path);
        debug!("POST {url}");
        decode(self.execute(self.client.post(&url)).await?)
    }
}

/// Typed endpoint surface consumed by the update handlers.
impl ApiClient {
    pub async fn stats(&self) -> Result<Stats, ApiError> {
        self.get(api::STATS).await
    }

    pub async fn users(&self) -> Result<Vec<UserSummary>, ApiError> {
        self.get(api::USERS).await
    }

    pub async fn user_detail(&self, username: &str) -> Result<UserDetail, ApiError> {
        let path = format!("{}/{}", api::USER, urlencoding::encode(username));
        self.get(&path).await
    }

    pub async fn compare(&self, user1: &str, user2: &str) -> Result<CompareResult, ApiError> {
        let path = format!(
            "{}?user1={}&user2={}",
            api::COMPARE,
            urlencoding::encode(user1),
            urlencoding::encode(user2)
        );
        self.get(&path).await
    }

    pub async fn sandbox_commands(&self) -> Result<Vec<CommandDescriptor>, ApiError> {
        self.get(api::SANDBOX_COMMANDS).await
    }

    pub async fn execute_command(&self, request: &ExecuteRequest) -> Result<ExecuteReply, ApiError> {
        self.post(api::SANDBOX_EXECUTE, request).await
    }

    pub async fn reachable_rooms(&self, world_id: &str) -> Result<Vec<Room>, ApiError> {
        let path = format!(
            "{}?world_id={}",
            api::REACHABLE_ROOMS,
            urlencoding::encode(world_id)
        );
        self.get(&path).await
    }

    pub async fn teleport(&self, request: &TeleportRequest) -> Result<TeleportReply, ApiError> {
        self.post(api::TELEPORT, request).await
    }

    pub async fn update_db(&self) -> Result<ActionReply, ApiError> {
        self.post_empty(api::UPDATE_DB).await
    }

    pub async fn update_worlds(&self) -> Result<ActionReply, ApiError> {
        self.post_empty(api::UPDATE_WORLDS).await
    }
}

fn decode<T: DeserializeOwned>(value: Value) -> Result<T, ApiError> {
    serde_json::from_value(value).map_err(|e| ApiError::Decode(e.to_string()))
}

/// Map (status, content type, body) to the normalized result.
///
/// JSON is parsed regardless of status, since error payloads carry
/// their message in the body. A JSON parse failure is only a
/// [`ApiError::Decode`] on success; on a non-success status the
/// synthesized HTTP message wins.
fn interpret_response(status: StatusCode, is_json: bool, body: &str) -> Result<Value, ApiError> {
    let payload = if is_json {
        match serde_json::from_str::<Value>(body) {
            Ok(value) => Some(value),
            Err(e) if status.is_success() => return Err(ApiError::Decode(e.to_string())),
            Err(_) => None,
        }
    } else {
        None
    };

    if !status.is_success() {
        let message = payload
            .as_ref()
            .and_then(payload_message)
            .unwrap_or_else(|| format!("HTTP error {}", status.as_u16()));
        return Err(ApiError::Http {
            status: status.as_u16(),
            message,
        });
    }

    // Sentinel success for empty or non-JSON bodies (e.g. 204).
    Ok(payload.unwrap_or(Value::Null))
}

fn payload_message(payload: &Value) -> Option<String> {
    payload
        .get("error")
        .or_else(|| payload.get("message"))
        .and_then(Value::as_str)
        .map(str::to_string)
}
