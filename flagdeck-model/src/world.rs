//! World and room records for the teleport utility.

use serde::{Deserialize, Serialize};

/// A room reachable from the current position in a world.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Room {
    pub id: String,
    #[serde(default)]
    pub name: Option<String>,
}

impl Room {
    /// Display label: the room name when the backend provides one,
    /// otherwise the raw id.
    pub fn label(&self) -> &str {
        self.name.as_deref().filter(|n| !n.is_empty()).unwrap_or(&self.id)
    }
}

/// Position reported back after a successful teleport.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewLocation {
    pub id: String,
    #[serde(default)]
    pub name: Option<String>,
}
