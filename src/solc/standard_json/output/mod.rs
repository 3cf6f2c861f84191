//!
//! The `solc --standard-json` output representation.
//!

pub mod contract;
pub mod error;

use std::collections::HashMap;

use serde::Deserialize;
use serde::Serialize;

use crate::error::Error;

use self::contract::Contract;
use self::error::Error as SolcError;

///
/// The `solc --standard-json` output representation.
///
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Output {
    /// The file-contract hashmap.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub contracts: Option<HashMap<String, HashMap<String, Contract>>>,
    /// The compilation errors and warnings.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub errors: Option<Vec<SolcError>>,
}

impl Output {
    ///
    /// Fails if the compiler reported any diagnostics.
    ///
    /// Warnings are not distinguished from errors: any non-empty `errors` collection is fatal.
    ///
    pub fn check_errors(&mut self) -> Result<(), Error> {
        match self.errors.take() {
            Some(errors) if !errors.is_empty() => Err(Error::Compilation(errors)),
            _ => Ok(()),
        }
    }

    ///
    /// Removes the contract `name` of the file `file` from the output.
    ///
    pub fn take_contract(&mut self, file: &str, name: &str) -> Result<Contract, Error> {
        self.contracts
            .as_mut()
            .and_then(|files| files.get_mut(file))
            .and_then(|contracts| contracts.remove(name))
            .ok_or_else(|| Error::ContractNotFound {
                file: file.to_owned(),
                name: name.to_owned(),
            })
    }
}

impl std::str::FromStr for Output {
    type Err = Error;

    fn from_str(json: &str) -> Result<Self, Self::Err> {
        Ok(serde_json::from_str(json)?)
    }
}
