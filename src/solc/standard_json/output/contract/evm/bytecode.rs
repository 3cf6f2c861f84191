//!
//! The `solc --standard-json` output contract EVM bytecode.
//!

use serde::Deserialize;
use serde::Serialize;

///
/// The `solc --standard-json` output contract EVM bytecode.
///
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Bytecode {
    /// The hexadecimal bytecode, possibly with unlinked library placeholders.
    pub object: String,
}
