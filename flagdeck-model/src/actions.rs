//! Request and reply shapes for the backend's action endpoints.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::world::NewLocation;

/// Body for `POST /sandbox/execute`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExecuteRequest {
    pub method_name: String,
    pub params: Map<String, Value>,
}

/// Reply from `POST /sandbox/execute`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExecuteReply {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub result: Option<Value>,
    #[serde(default)]
    pub error: Option<String>,
}

/// Body for `POST /teleport`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TeleportRequest {
    pub world_id: String,
    pub target_room_id: String,
}

/// Reply from `POST /teleport`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TeleportReply {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub new_location: Option<NewLocation>,
    #[serde(default)]
    pub error: Option<String>,
}

/// Reply from the maintenance triggers (`/update-db`, `/update-worlds`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionReply {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub error: Option<String>,
}
