//!
//! The build driver error.
//!

use std::path::PathBuf;

use crate::solc::standard_json::output::error::Error as SolcError;

///
/// The build driver error.
///
/// Every variant is fatal: the run is aborted as soon as one is produced.
///
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The file system error.
    #[error("File {path:?} {action} error")]
    FileSystem {
        /// The affected path.
        path: PathBuf,
        /// The failed action, e.g. `reading`.
        action: &'static str,
        /// The underlying error.
        source: std::io::Error,
    },
    /// The `solc` subprocess error.
    #[error("solc error: {0}")]
    Solc(String),
    /// The `solc` output is not a valid standard JSON.
    #[error("solc output parsing error: {0}")]
    Output(#[from] serde_json::Error),
    /// The compiler reported diagnostics.
    #[error("Compilation errors:\n{}", Self::format_diagnostics(.0))]
    Compilation(Vec<SolcError>),
    /// The contract cannot be found.
    #[error("Contract `{name}` not found in output of `{file}`")]
    ContractNotFound {
        /// The source file identifier.
        file: String,
        /// The contract name.
        name: String,
    },
    /// The contract is found, but one of the requested artifacts is absent.
    #[error("Contract `{name}` has no `{field}` in output")]
    MissingArtifact {
        /// The contract name.
        name: String,
        /// The missing output field.
        field: &'static str,
    },
}

impl Error {
    ///
    /// A shortcut constructor.
    ///
    pub fn file_system(
        path: impl Into<PathBuf>,
        action: &'static str,
        source: std::io::Error,
    ) -> Self {
        Self::FileSystem {
            path: path.into(),
            action,
            source,
        }
    }

    fn format_diagnostics(diagnostics: &[SolcError]) -> String {
        diagnostics
            .iter()
            .map(|diagnostic| diagnostic.to_string())
            .collect::<Vec<String>>()
            .join("\n")
    }
}
