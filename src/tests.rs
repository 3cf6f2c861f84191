//!
//! The build driver tests.
//!

use std::cell::Cell;
use std::path::Path;

use pretty_assertions::assert_eq;

use crate::config::Config;
use crate::error::Error;

const SOURCE: &str = r#"// SPDX-License-Identifier: MIT
pragma solidity ^0.8.0;

contract SimpleCounter {
    uint256 private count;

    function increment() public {
        count += 1;
    }
}
"#;

const BYTECODE: &str = "608060405234801561001057600080fd5b5060df8061001f6000396000f3fe";

fn abi() -> serde_json::Value {
    serde_json::json!([
        {
            "inputs": [],
            "name": "increment",
            "outputs": [],
            "stateMutability": "nonpayable",
            "type": "function"
        },
        {
            "anonymous": false,
            "type": "event",
            "name": "CountChanged",
            "inputs": [{ "indexed": false, "internalType": "uint256", "name": "newCount", "type": "uint256" }]
        }
    ])
}

fn successful_output() -> String {
    serde_json::json!({
        "contracts": {
            "Counter.sol": {
                "SimpleCounter": {
                    "abi": abi(),
                    "evm": { "bytecode": { "object": BYTECODE, "linkReferences": {} } }
                }
            }
        },
        "sources": { "Counter.sol": { "id": 0 } }
    })
    .to_string()
}

fn setup(directory: &Path) -> Config {
    let contracts = directory.join("contracts");
    std::fs::create_dir_all(contracts.as_path()).expect("Always valid");
    std::fs::write(contracts.join("Counter.sol"), SOURCE).expect("Always valid");

    Config {
        source_path: contracts.join("Counter.sol"),
        output_directory: contracts.join("build"),
        ..Config::default()
    }
}

#[test]
fn writes_artifacts_into_created_directory() {
    let directory = tempfile::tempdir().expect("Always valid");
    let config = setup(directory.path());
    assert!(!config.output_directory.exists());

    let build = crate::run(&config, &|_: &str| -> Result<String, Error> {
        Ok(successful_output())
    })
    .expect("Always valid");

    assert_eq!(build.abi_path, config.output_directory.join("Counter.abi"));
    assert_eq!(build.binary_path, config.output_directory.join("Counter.bin"));

    let written = std::fs::read_to_string(build.abi_path).expect("Always valid");
    let written: serde_json::Value =
        serde_json::from_str(written.as_str()).expect("Always valid");
    assert_eq!(written, abi());
    assert_eq!(
        std::fs::read_to_string(build.binary_path).expect("Always valid"),
        BYTECODE
    );
}

#[test]
fn abi_key_order_is_preserved() {
    let directory = tempfile::tempdir().expect("Always valid");
    let config = setup(directory.path());

    let build = crate::run(&config, &|_: &str| -> Result<String, Error> {
        Ok(successful_output())
    })
    .expect("Always valid");

    let written = std::fs::read_to_string(build.abi_path).expect("Always valid");
    assert_eq!(written, serde_json::to_string_pretty(&abi()).expect("Always valid"));
    let event_type = written.find("\"type\": \"event\"").expect("Always valid");
    let event_name = written.find("\"name\": \"CountChanged\"").expect("Always valid");
    assert!(event_type < event_name);
}

#[test]
fn is_idempotent() {
    let directory = tempfile::tempdir().expect("Always valid");
    let config = setup(directory.path());
    let oracle = |_: &str| -> Result<String, Error> { Ok(successful_output()) };

    crate::run(&config, &oracle).expect("Always valid");
    let abi_first = std::fs::read(config.abi_path()).expect("Always valid");
    let binary_first = std::fs::read(config.binary_path()).expect("Always valid");

    crate::run(&config, &oracle).expect("Always valid");
    assert_eq!(std::fs::read(config.abi_path()).expect("Always valid"), abi_first);
    assert_eq!(std::fs::read(config.binary_path()).expect("Always valid"), binary_first);
}

#[test]
fn sends_source_with_wildcard_selection() {
    let directory = tempfile::tempdir().expect("Always valid");
    let config = setup(directory.path());

    crate::run(&config, &|input: &str| -> Result<String, Error> {
        let input: serde_json::Value = serde_json::from_str(input).expect("Always valid");
        assert_eq!(input["language"], "Solidity");
        assert_eq!(input["sources"]["Counter.sol"]["content"], SOURCE);
        assert_eq!(
            input["settings"]["outputSelection"],
            serde_json::json!({ "*": { "*": ["abi", "evm.bytecode"] } })
        );
        Ok(successful_output())
    })
    .expect("Always valid");
}

#[test]
fn compilation_errors_abort_before_writing() {
    let directory = tempfile::tempdir().expect("Always valid");
    let config = setup(directory.path());
    let output = serde_json::json!({
        "errors": [
            {
                "component": "general",
                "errorCode": "2314",
                "formattedMessage": "ParserError: Expected ';' but got '}'\n --> Counter.sol:8:5:\n",
                "message": "Expected ';' but got '}'",
                "severity": "error",
                "sourceLocation": { "file": "Counter.sol", "start": 120, "end": 121 },
                "type": "ParserError"
            },
            {
                "component": "general",
                "message": "Unreachable code.",
                "severity": "warning",
                "type": "Warning"
            }
        ]
    })
    .to_string();

    let result = crate::run(&config, &|_: &str| -> Result<String, Error> { Ok(output.clone()) });

    match result {
        Err(error @ Error::Compilation(_)) => {
            let message = error.to_string();
            assert!(message.contains("ParserError: Expected ';' but got '}'"));
            assert!(message.contains("Warning: Unreachable code."));
        }
        other => panic!("Unexpected result: {:?}", other),
    }
    assert!(!config.output_directory.exists());
}

#[test]
fn stale_artifacts_survive_compilation_errors() {
    let directory = tempfile::tempdir().expect("Always valid");
    let config = setup(directory.path());
    std::fs::create_dir_all(config.output_directory.as_path()).expect("Always valid");
    std::fs::write(config.binary_path(), "stale").expect("Always valid");
    let output = serde_json::json!({
        "errors": [{ "message": "Unused variable.", "severity": "warning", "type": "Warning" }],
        "contracts": {
            "Counter.sol": { "SimpleCounter": { "abi": [], "evm": { "bytecode": { "object": "00" } } } }
        }
    })
    .to_string();

    let result = crate::run(&config, &|_: &str| -> Result<String, Error> { Ok(output.clone()) });

    assert!(matches!(result, Err(Error::Compilation(_))));
    assert_eq!(
        std::fs::read_to_string(config.binary_path()).expect("Always valid"),
        "stale"
    );
    assert!(!config.abi_path().exists());
}

#[test]
fn missing_contract_aborts_before_writing() {
    let directory = tempfile::tempdir().expect("Always valid");
    let config = Config {
        contract_name: "Counter".to_owned(),
        ..setup(directory.path())
    };

    let result = crate::run(&config, &|_: &str| -> Result<String, Error> {
        Ok(successful_output())
    });

    match result {
        Err(error @ Error::ContractNotFound { .. }) => {
            assert!(error.to_string().contains("`Counter`"));
        }
        other => panic!("Unexpected result: {:?}", other),
    }
    assert!(!config.output_directory.exists());
}

#[test]
fn missing_source_aborts_before_compiling() {
    let directory = tempfile::tempdir().expect("Always valid");
    let config = Config {
        source_path: directory.path().join("contracts").join("Missing.sol"),
        output_directory: directory.path().join("build"),
        ..Config::default()
    };
    let invoked = Cell::new(false);

    let result = crate::run(&config, &|_: &str| -> Result<String, Error> {
        invoked.set(true);
        Ok(successful_output())
    });

    assert!(matches!(result, Err(Error::FileSystem { action: "reading", .. })));
    assert!(!invoked.get());
    assert!(!config.output_directory.exists());
}

#[test]
fn oracle_failure_is_propagated() {
    let directory = tempfile::tempdir().expect("Always valid");
    let config = setup(directory.path());

    let result = crate::run(&config, &|_: &str| -> Result<String, Error> {
        Err(Error::Solc("killed".to_owned()))
    });

    assert!(matches!(result, Err(Error::Solc(message)) if message == "killed"));
    assert!(!config.output_directory.exists());
}

#[test]
fn unparsable_output_is_rejected() {
    let directory = tempfile::tempdir().expect("Always valid");
    let config = setup(directory.path());

    let result = crate::run(&config, &|_: &str| -> Result<String, Error> {
        Ok("Segmentation fault".to_owned())
    });

    assert!(matches!(result, Err(Error::Output(_))));
    assert!(!config.output_directory.exists());
}

#[test]
fn bare_diagnostic_is_a_compilation_error() {
    let directory = tempfile::tempdir().expect("Always valid");
    let config = setup(directory.path());

    let result = crate::run(&config, &|_: &str| -> Result<String, Error> {
        Ok(r#"{"errors":[{"message":"boom"}]}"#.to_owned())
    });

    match result {
        Err(Error::Compilation(errors)) => {
            assert_eq!(errors.len(), 1);
            assert_eq!(errors[0].to_string(), "boom");
        }
        other => panic!("Unexpected result: {:?}", other),
    }
    assert!(!config.output_directory.exists());
}

#[test]
fn missing_source_fails_before_spawning_solc() {
    let directory = tempfile::tempdir().expect("Always valid");
    let config = Config {
        source_path: directory.path().join("Missing.sol"),
        output_directory: directory.path().join("build"),
        ..Config::default()
    };
    let solc = crate::SolcCompiler::new("solc-definitely-not-installed".to_owned());

    let result = crate::run(&config, &solc);

    assert!(matches!(result, Err(Error::FileSystem { .. })));
}
