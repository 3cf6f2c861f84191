//!
//! The `solc --standard-json` expected output selection.
//!

use serde::Deserialize;
use serde::Serialize;

///
/// The `solc --standard-json` expected output selection.
///
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Hash)]
#[allow(clippy::upper_case_acronyms)]
pub enum Selection {
    /// The ABI JSON representation.
    #[serde(rename = "abi")]
    ABI,
    /// The EVM deployable bytecode.
    #[serde(rename = "evm.bytecode")]
    Bytecode,
}
