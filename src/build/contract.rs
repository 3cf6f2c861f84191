//!
//! The Solidity contract build.
//!

use std::path::Path;

use crate::error::Error;
use crate::solc::standard_json::output::contract::Contract as StandardJsonOutputContract;

///
/// The Solidity contract build.
///
#[derive(Debug, Clone)]
pub struct Contract {
    /// The contract name.
    pub name: String,
    /// The ABI descriptor list, as reported by the compiler.
    pub abi: serde_json::Value,
    /// The hexadecimal deployable bytecode, as reported by the compiler.
    pub bytecode: String,
}

impl Contract {
    ///
    /// A shortcut constructor.
    ///
    pub fn new(name: String, abi: serde_json::Value, bytecode: String) -> Self {
        Self {
            name,
            abi,
            bytecode,
        }
    }

    ///
    /// Extracts the artifacts from the `solc --standard-json` output contract.
    ///
    pub fn try_from_standard_json(
        name: String,
        contract: StandardJsonOutputContract,
    ) -> Result<Self, Error> {
        let (abi, bytecode) = contract.into_artifacts(name.as_str())?;
        Ok(Self::new(name, abi, bytecode))
    }

    ///
    /// Writes the ABI pretty-printed with two-space indentation.
    ///
    pub fn write_abi(&self, path: &Path) -> Result<(), Error> {
        let abi = serde_json::to_string_pretty(&self.abi).expect("Always valid");
        std::fs::write(path, abi).map_err(|error| Error::file_system(path, "writing", error))
    }

    ///
    /// Writes the bytecode verbatim.
    ///
    pub fn write_binary(&self, path: &Path) -> Result<(), Error> {
        std::fs::write(path, self.bytecode.as_bytes())
            .map_err(|error| Error::file_system(path, "writing", error))
    }
}
