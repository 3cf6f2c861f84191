//!
//! The Solidity contract ABI and bytecode build driver library.
//!

pub mod build;
pub mod config;
pub mod error;
pub mod solc;

#[cfg(test)]
mod tests;

pub use self::build::contract::Contract as BuildContract;
pub use self::build::Build;
pub use self::config::Config;
pub use self::error::Error;
pub use self::solc::standard_json::input::Input as SolcStandardJsonInput;
pub use self::solc::standard_json::output::Output as SolcStandardJsonOutput;
pub use self::solc::Compiler as SolcCompiler;
pub use self::solc::Oracle as SolcOracle;

use self::solc::standard_json::input::source::Source as SolcStandardJsonInputSource;

/// The process exit codes.
pub mod exit_code {
    /// The successful run.
    pub const SUCCESS: i32 = 0;
    /// Any fatal error.
    pub const FAILURE: i32 = 1;
}

///
/// Compiles the configured source and writes the ABI and bytecode of the configured contract.
///
/// Nothing is written unless the compiler reports no diagnostics and the contract is present.
///
pub fn run<O>(config: &Config, oracle: &O) -> Result<Build, Error>
where
    O: SolcOracle + ?Sized,
{
    let source = SolcStandardJsonInputSource::try_from(config.source_path.as_path())?;
    log::info!(
        "Read {} bytes from {:?}",
        source.content.len(),
        config.source_path
    );

    let input = SolcStandardJsonInput::from_source(config.source_id.clone(), source.content);
    let input_json = serde_json::to_string(&input).expect("Always valid");
    log::debug!("solc input: {}", input_json);

    let output_json = oracle.compile(input_json.as_str())?;
    let mut output: SolcStandardJsonOutput = output_json.parse()?;

    if let Some(errors) = output.errors.as_ref() {
        log::info!("solc reported {} diagnostics", errors.len());
    }
    output.check_errors()?;

    let contract = output.take_contract(config.source_id.as_str(), config.contract_name.as_str())?;
    let contract = BuildContract::try_from_standard_json(config.contract_name.clone(), contract)?;
    log::info!(
        "Contract `{}` compiled: {} ABI entries, {} bytecode characters",
        contract.name,
        contract.abi.as_array().map(Vec::len).unwrap_or_default(),
        contract.bytecode.len()
    );

    Build::write(&contract, config)
}
