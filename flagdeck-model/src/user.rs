//! User records as served by the backend.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// One row of the user list, including the aggregated flag count.
///
/// The list is fetched wholesale on navigation to the Users view and
/// replaced wholesale on re-fetch; the console never patches rows in
/// place.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserSummary {
    /// Unique key for the record.
    pub username: String,
    #[serde(default)]
    pub first_name: Option<String>,
    #[serde(default)]
    pub last_name: Option<String>,
    #[serde(default)]
    pub filiere: Option<String>,
    /// Number of captured flags; the backend coalesces missing joins to 0.
    #[serde(default)]
    pub flag_count: i64,
    /// Tri-state block status; SQLite serves this as 0/1/NULL.
    #[serde(default, deserialize_with = "lenient_bool")]
    pub blocked: Option<bool>,
}

/// Full profile record returned by the single-user endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserProfile {
    pub username: String,
    #[serde(default)]
    pub first_name: Option<String>,
    #[serde(default)]
    pub last_name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub profile: Option<String>,
    #[serde(default)]
    pub filiere: Option<String>,
    #[serde(default, deserialize_with = "lenient_bool")]
    pub blocked: Option<bool>,
    #[serde(default)]
    pub created_at: Option<String>,
}

/// A single captured flag with its capture timestamp.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FlagEntry {
    pub flag: String,
    #[serde(default)]
    pub date: Option<String>,
}

/// Last known position of a user inside a world.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LastPosition {
    /// The backend column (and therefore the wire key) is `world_ID`.
    #[serde(rename = "world_ID", default)]
    pub world_id: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub room: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
}

/// Everything the single-user endpoint returns. Discarded on
/// navigation away from the detail view.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserDetail {
    pub details: UserProfile,
    #[serde(default)]
    pub flags: Vec<FlagEntry>,
    #[serde(default)]
    pub last_position: Option<LastPosition>,
}

/// Accept booleans however the backend spells them: JSON booleans,
/// SQLite 0/1 integers, or null / placeholder strings for "unknown".
fn lenient_bool<'de, D>(deserializer: D) -> Result<Option<bool>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(match value {
        None | Some(Value::Null) => None,
        Some(Value::Bool(b)) => Some(b),
        Some(Value::Number(n)) => Some(n.as_i64().map(|i| i != 0).unwrap_or(false)),
        Some(Value::String(s)) => match s.as_str() {
            "" | "N/A" => None,
            "true" | "1" => Some(true),
            "false" | "0" => Some(false),
            _ => None,
        },
        Some(_) => None,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn summary_accepts_sqlite_scalars() {
        let raw = r#"{
            "username": "bob",
            "first_name": "Bob",
            "last_name": null,
            "filiere": "N/A",
            "flag_count": 5,
            "blocked": 1
        }"#;
        let user: UserSummary = serde_json::from_str(raw).unwrap();
        assert_eq!(user.username, "bob");
        assert_eq!(user.blocked, Some(true));
        assert_eq!(user.filiere.as_deref(), Some("N/A"));
    }

    #[test]
    fn summary_defaults_missing_fields() {
        let user: UserSummary = serde_json::from_str(r#"{"username":"ghost"}"#).unwrap();
        assert_eq!(user.flag_count, 0);
        assert_eq!(user.blocked, None);
        assert_eq!(user.first_name, None);
    }

    #[test]
    fn detail_reads_world_id_wire_key() {
        let raw = r#"{
            "details": {"username": "bob"},
            "flags": [{"flag": "intro:00", "date": "2024-01-01 10:00:00"}],
            "last_position": {"world_ID": "w-12", "location": "loc", "room": "spawn", "created_at": null}
        }"#;
        let detail: UserDetail = serde_json::from_str(raw).unwrap();
        assert_eq!(detail.last_position.unwrap().world_id.as_deref(), Some("w-12"));
        assert_eq!(detail.flags.len(), 1);
    }
}
