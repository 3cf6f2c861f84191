//!
//! The `solc --standard-json` output contract.
//!

pub mod evm;

use serde::Deserialize;
use serde::Serialize;

use crate::error::Error;

use self::evm::EVM;

///
/// The `solc --standard-json` output contract.
///
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Contract {
    /// The contract ABI.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub abi: Option<serde_json::Value>,
    /// The contract EVM data.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub evm: Option<EVM>,
}

impl Contract {
    ///
    /// Splits the contract into its ABI and deployable bytecode.
    ///
    pub fn into_artifacts(self, name: &str) -> Result<(serde_json::Value, String), Error> {
        let abi = self.abi.ok_or_else(|| Error::MissingArtifact {
            name: name.to_owned(),
            field: "abi",
        })?;
        let bytecode = self
            .evm
            .and_then(|evm| evm.bytecode)
            .map(|bytecode| bytecode.object)
            .ok_or_else(|| Error::MissingArtifact {
                name: name.to_owned(),
                field: "evm.bytecode.object",
            })?;

        Ok((abi, bytecode))
    }
}
