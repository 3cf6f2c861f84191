//!
//! Solidity contract build driver binary.
//!

pub mod arguments;

use colored::Colorize;

use self::arguments::Arguments;

///
/// The application entry point.
///
fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    std::process::exit(match main_inner() {
        Ok(()) => solc_build::exit_code::SUCCESS,
        Err(error) => {
            eprintln!("{}", format!("{:?}", error).red());
            solc_build::exit_code::FAILURE
        }
    })
}

///
/// The auxiliary `main` function to facilitate the `?` error conversion operator.
///
fn main_inner() -> anyhow::Result<()> {
    let mut arguments = Arguments::new();
    arguments.validate()?;

    let solc = arguments
        .solc
        .take()
        .map(solc_build::SolcCompiler::new)
        .unwrap_or_default();
    log::info!("Using `{}`", solc.executable);

    let config = arguments.into_config();
    let build = solc_build::run(&config, &solc)?;

    println!("{}", "✅ Contract compiled successfully!".green());
    println!("📁 ABI saved to: {}", build.abi_path.display());
    println!("📁 Bytecode saved to: {}", build.binary_path.display());

    Ok(())
}
