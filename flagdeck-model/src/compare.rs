//! Flag-base comparison between two users.

use serde::{Deserialize, Serialize};

/// Three-way set difference over two users' flag bases, produced per
/// comparison submission and discarded afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct CompareResult {
    #[serde(default)]
    pub user1: String,
    #[serde(default)]
    pub user2: String,
    /// Bases user1 has and user2 does not.
    #[serde(default)]
    pub ahead: Vec<String>,
    #[serde(default)]
    pub ahead_count: i64,
    /// Bases user2 has and user1 does not.
    #[serde(default)]
    pub behind: Vec<String>,
    #[serde(default)]
    pub behind_count: i64,
    /// Bases both users share.
    #[serde(default)]
    pub common: Vec<String>,
    #[serde(default)]
    pub common_count: i64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_backend_shape() {
        let raw = r#"{
            "user1": "alice", "user2": "bob",
            "ahead": ["web"], "ahead_count": 1,
            "behind": [], "behind_count": 0,
            "common": ["intro", "crypto"], "common_count": 2
        }"#;
        let result: CompareResult = serde_json::from_str(raw).unwrap();
        assert_eq!(result.ahead, vec!["web"]);
        assert_eq!(result.common_count, 2);
    }
}
