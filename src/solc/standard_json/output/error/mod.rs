//!
//! The `solc --standard-json` output error.
//!

pub mod source_location;

use serde::Deserialize;
use serde::Serialize;

use self::source_location::SourceLocation;

///
/// The `solc --standard-json` output error.
///
/// Warnings and informational messages are reported in the same collection.
///
#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct Error {
    /// The component type.
    #[serde(default)]
    pub component: String,
    /// The error code.
    #[serde(default)]
    pub error_code: Option<String>,
    /// The formatted error message.
    #[serde(default)]
    pub formatted_message: Option<String>,
    /// The non-formatted error message.
    pub message: String,
    /// The error severity.
    #[serde(default)]
    pub severity: String,
    /// The error location data.
    #[serde(default)]
    pub source_location: Option<SourceLocation>,
    /// The error type.
    #[serde(default)]
    pub r#type: String,
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.formatted_message.as_deref() {
            Some(formatted_message) => write!(f, "{}", formatted_message.trim_end()),
            None if self.r#type.is_empty() => write!(f, "{}", self.message),
            None => write!(f, "{}: {}", self.r#type, self.message),
        }
    }
}
