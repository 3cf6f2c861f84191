//!
//! The Solidity contract build.
//!

pub mod contract;

use std::path::PathBuf;

use crate::config::Config;
use crate::error::Error;

use self::contract::Contract;

///
/// The written contract artifacts.
///
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Build {
    /// The ABI file path.
    pub abi_path: PathBuf,
    /// The bytecode file path.
    pub binary_path: PathBuf,
}

impl Build {
    ///
    /// Writes the contract artifacts to the configured directory, creating it if missing.
    ///
    /// Existing files are overwritten. The two writes are independent.
    ///
    pub fn write(contract: &Contract, config: &Config) -> Result<Self, Error> {
        std::fs::create_dir_all(config.output_directory.as_path()).map_err(|error| {
            Error::file_system(config.output_directory.as_path(), "creating", error)
        })?;

        let abi_path = config.abi_path();
        contract.write_abi(abi_path.as_path())?;
        log::debug!("ABI written to {:?}", abi_path);

        let binary_path = config.binary_path();
        contract.write_binary(binary_path.as_path())?;
        log::debug!("Bytecode written to {:?}", binary_path);

        Ok(Self {
            abi_path,
            binary_path,
        })
    }
}
