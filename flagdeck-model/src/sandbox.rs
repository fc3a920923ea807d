//! Sandbox command catalogue.

use serde::{Deserialize, Serialize};

/// One invokable backend command. Fetched once per Sandbox view and
/// used purely to drive form generation; never mutated client-side.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommandDescriptor {
    /// Unique command name, e.g. `users.block`.
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    /// Whether the command runs through the kerberized channel.
    #[serde(default)]
    pub kerberized: bool,
    #[serde(default)]
    pub params: Vec<ParamDescriptor>,
}

/// One declared parameter of a sandbox command.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParamDescriptor {
    pub name: String,
    /// Free-form type hint from the backend (`string`, `int`, `json`, ...).
    #[serde(rename = "type", default)]
    pub type_hint: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub required: bool,
}
