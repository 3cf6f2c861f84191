//!
//! The `solc --standard-json` input and output.
//!

pub mod input;
pub mod output;
