//! Dashboard counters.

use serde::{Deserialize, Serialize};

/// Global counters shown on the dashboard. Each field is optional so a
/// partially failing backend still renders, with `N/A` placeholders.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Stats {
    #[serde(default)]
    pub users: Option<i64>,
    #[serde(default)]
    pub worlds: Option<i64>,
    #[serde(default)]
    pub flags: Option<i64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_payload_is_accepted() {
        let stats: Stats = serde_json::from_str(r#"{"users": 42}"#).unwrap();
        assert_eq!(stats.users, Some(42));
        assert_eq!(stats.worlds, None);
    }
}
