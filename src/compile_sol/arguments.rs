//!
//! Solidity contract build driver arguments.
//!

use std::path::PathBuf;

use structopt::StructOpt;

use solc_build::Config;

///
/// Compiles the counter contract with `solc --standard-json` and writes its ABI and
/// bytecode to the build directory. Every option overrides a single default.
///
/// Example: compile-sol --contract SimpleCounter --output-dir './contracts/build/'
///
#[derive(Debug, StructOpt)]
#[structopt(name = "The Solidity contract build driver")]
pub struct Arguments {
    /// The Solidity source file path.
    #[structopt(long = "source", parse(from_os_str))]
    pub source_path: Option<PathBuf>,

    /// The source file identifier passed to `solc`.
    #[structopt(long = "source-id")]
    pub source_id: Option<String>,

    /// The name of the contract to extract.
    #[structopt(long = "contract")]
    pub contract_name: Option<String>,

    /// The directory to write the ABI and bytecode files to.
    #[structopt(short = "o", long = "output-dir", parse(from_os_str))]
    pub output_directory: Option<PathBuf>,

    /// Path to the `solc` executable.
    /// By default, the one in $PATH is used.
    #[structopt(long = "solc")]
    pub solc: Option<String>,
}

impl Arguments {
    ///
    /// A shortcut constructor.
    ///
    pub fn new() -> Self {
        Self::from_args()
    }

    ///
    /// Validates the arguments.
    ///
    pub fn validate(&self) -> anyhow::Result<()> {
        if let Some(source_id) = self.source_id.as_deref() {
            if source_id.is_empty() {
                anyhow::bail!("The source identifier must not be empty.");
            }
        }
        if let Some(contract_name) = self.contract_name.as_deref() {
            if contract_name.is_empty() {
                anyhow::bail!("The contract name must not be empty.");
            }
        }

        Ok(())
    }

    ///
    /// Applies the overrides to the default configuration.
    ///
    pub fn into_config(self) -> Config {
        let mut config = Config::default();
        if let Some(source_path) = self.source_path {
            config.source_path = source_path;
        }
        if let Some(source_id) = self.source_id {
            config.source_id = source_id;
        }
        if let Some(contract_name) = self.contract_name {
            config.contract_name = contract_name;
        }
        if let Some(output_directory) = self.output_directory {
            config.output_directory = output_directory;
        }
        config
    }
}

impl Default for Arguments {
    fn default() -> Self {
        Self::new()
    }
}
