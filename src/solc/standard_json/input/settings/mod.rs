//!
//! The `solc --standard-json` input settings representation.
//!

pub mod selection;

use serde::Deserialize;
use serde::Serialize;

use self::selection::Selection;

///
/// The `solc --standard-json` input settings representation.
///
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Settings {
    /// The output selection filters.
    pub output_selection: serde_json::Value,
}

impl Settings {
    ///
    /// A shortcut constructor.
    ///
    pub fn new(output_selection: serde_json::Value) -> Self {
        Self { output_selection }
    }

    ///
    /// Generates the output selection pattern.
    ///
    /// The ABI and EVM bytecode are selected for every contract in every file.
    ///
    pub fn get_output_selection() -> serde_json::Value {
        serde_json::json!({
            "*": {
                "*": [Selection::ABI, Selection::Bytecode],
            },
        })
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::Settings;

    #[test]
    fn selection_is_wildcard() {
        let selection = Settings::get_output_selection();

        assert_eq!(
            selection,
            serde_json::json!({ "*": { "*": ["abi", "evm.bytecode"] } })
        );
    }
}
