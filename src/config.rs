//!
//! The build configuration.
//!

use std::path::PathBuf;

///
/// The build configuration.
///
/// The defaults address the counter contract of this repository.
///
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// The Solidity source file path.
    pub source_path: PathBuf,
    /// The source file identifier passed to the compiler.
    pub source_id: String,
    /// The name of the contract to extract.
    pub contract_name: String,
    /// The artifacts directory.
    pub output_directory: PathBuf,
    /// The ABI artifact file name.
    pub abi_file_name: String,
    /// The bytecode artifact file name.
    pub binary_file_name: String,
}

impl Config {
    /// The default source file path.
    pub const SOURCE_PATH: &'static str = "contracts/Counter.sol";
    /// The default source file identifier.
    pub const SOURCE_ID: &'static str = "Counter.sol";
    /// The default contract name.
    pub const CONTRACT_NAME: &'static str = "SimpleCounter";
    /// The default artifacts directory.
    pub const OUTPUT_DIRECTORY: &'static str = "contracts/build";
    /// The default ABI artifact file name.
    pub const ABI_FILE_NAME: &'static str = "Counter.abi";
    /// The default bytecode artifact file name.
    pub const BINARY_FILE_NAME: &'static str = "Counter.bin";

    ///
    /// The ABI artifact path.
    ///
    pub fn abi_path(&self) -> PathBuf {
        self.output_directory.join(self.abi_file_name.as_str())
    }

    ///
    /// The bytecode artifact path.
    ///
    pub fn binary_path(&self) -> PathBuf {
        self.output_directory.join(self.binary_file_name.as_str())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            source_path: PathBuf::from(Self::SOURCE_PATH),
            source_id: Self::SOURCE_ID.to_owned(),
            contract_name: Self::CONTRACT_NAME.to_owned(),
            output_directory: PathBuf::from(Self::OUTPUT_DIRECTORY),
            abi_file_name: Self::ABI_FILE_NAME.to_owned(),
            binary_file_name: Self::BINARY_FILE_NAME.to_owned(),
        }
    }
}
