//!
//! The `solc --standard-json` input representation.
//!

pub mod language;
pub mod settings;
pub mod source;

use std::collections::BTreeMap;

use serde::Deserialize;
use serde::Serialize;

use self::language::Language;
use self::settings::Settings;
use self::source::Source;

///
/// The `solc --standard-json` input representation.
///
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Input {
    /// The input language.
    pub language: Language,
    /// The input source code files map.
    pub sources: BTreeMap<String, Source>,
    /// The compiler settings.
    pub settings: Settings,
}

impl Input {
    ///
    /// A shortcut constructor for a single Solidity source.
    ///
    /// The ABI and EVM bytecode are requested for every contract in every file.
    ///
    pub fn from_source(source_id: String, content: String) -> Self {
        let mut sources = BTreeMap::new();
        sources.insert(source_id, Source::from(content));

        Self {
            language: Language::Solidity,
            sources,
            settings: Settings::new(Settings::get_output_selection()),
        }
    }
}
