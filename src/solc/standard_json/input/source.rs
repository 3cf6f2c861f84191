//!
//! The `solc --standard-json` input source representation.
//!

use std::path::Path;

use serde::Deserialize;
use serde::Serialize;

use crate::error::Error;

///
/// The `solc --standard-json` input source representation.
///
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Source {
    /// The source code file content.
    pub content: String,
}

impl From<String> for Source {
    fn from(content: String) -> Self {
        Self { content }
    }
}

impl TryFrom<&Path> for Source {
    type Error = Error;

    fn try_from(path: &Path) -> Result<Self, Self::Error> {
        let content = std::fs::read_to_string(path)
            .map_err(|error| Error::file_system(path, "reading", error))?;

        Ok(Self { content })
    }
}
