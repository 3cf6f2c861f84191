//!
//! The Solidity compiler.
//!

pub mod standard_json;

use std::io::Write;

use crate::error::Error;

///
/// The compiler oracle.
///
/// Accepts the `--standard-json` input text and returns the `--standard-json` output text.
/// Implemented for plain closures, so that a stub can be injected instead of `solc`.
///
pub trait Oracle {
    ///
    /// Compiles the standard JSON input.
    ///
    fn compile(&self, input: &str) -> Result<String, Error>;
}

impl<F> Oracle for F
where
    F: Fn(&str) -> Result<String, Error>,
{
    fn compile(&self, input: &str) -> Result<String, Error> {
        self(input)
    }
}

///
/// The Solidity compiler.
///
#[derive(Debug, Clone)]
pub struct Compiler {
    /// The binary executable name.
    pub executable: String,
}

impl Compiler {
    /// The default executable name.
    pub const DEFAULT_EXECUTABLE: &'static str = "solc";

    ///
    /// A shortcut constructor.
    ///
    pub fn new(executable: String) -> Self {
        Self { executable }
    }
}

impl Default for Compiler {
    fn default() -> Self {
        Self::new(Self::DEFAULT_EXECUTABLE.to_owned())
    }
}

impl Oracle for Compiler {
    fn compile(&self, input: &str) -> Result<String, Error> {
        let mut solc_command = std::process::Command::new(self.executable.as_str());
        solc_command.stdin(std::process::Stdio::piped());
        solc_command.stdout(std::process::Stdio::piped());
        solc_command.stderr(std::process::Stdio::piped());
        solc_command.arg("--standard-json");

        let mut solc_process = solc_command
            .spawn()
            .map_err(|error| Error::Solc(format!("subprocess spawning error: {}", error)))?;
        {
            let mut stdin = solc_process
                .stdin
                .take()
                .ok_or_else(|| Error::Solc("stdin getting error".to_owned()))?;
            stdin
                .write_all(input.as_bytes())
                .map_err(|error| Error::Solc(format!("stdin writing error: {}", error)))?;
        }

        let solc_output = solc_process
            .wait_with_output()
            .map_err(|error| Error::Solc(format!("subprocess output error: {}", error)))?;
        if !solc_output.status.success() {
            return Err(Error::Solc(
                String::from_utf8_lossy(solc_output.stderr.as_slice()).to_string(),
            ));
        }

        String::from_utf8(solc_output.stdout)
            .map_err(|error| Error::Solc(format!("output is not UTF-8: {}", error)))
    }
}

#[cfg(test)]
mod tests {
    use super::Compiler;

    #[test]
    fn missing_executable() {
        use super::Oracle;

        let compiler = Compiler::new("solc-definitely-not-installed".to_owned());

        assert!(matches!(
            compiler.compile("{}"),
            Err(crate::error::Error::Solc(message)) if message.starts_with("subprocess spawning error")
        ));
    }
}
