//! Client-side validation failures.
//!
//! These are raised before any network request is built; update
//! handlers render them inline and highlight the offending field.

use thiserror::Error;

/// A form input failed its type or requiredness check.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("required parameter '{0}' is empty")]
    RequiredParam(String),
    #[error("invalid numeric value for '{0}'")]
    InvalidNumber(String),
    #[error("invalid JSON for parameter '{0}'")]
    InvalidJson(String),
    #[error("invalid boolean value for '{0}'")]
    InvalidBool(String),
    #[error("select two valid users")]
    MissingSelection,
    #[error("select two different users")]
    IdenticalSelection,
    #[error("enter a world id")]
    MissingWorldId,
}

impl ValidationError {
    /// Name of the parameter the error refers to, when it targets one.
    pub fn field(&self) -> Option<&str> {
        match self {
            Self::RequiredParam(name)
            | Self::InvalidNumber(name)
            | Self::InvalidJson(name)
            | Self::InvalidBool(name) => Some(name),
            Self::MissingSelection | Self::IdenticalSelection | Self::MissingWorldId => None,
        }
    }
}
