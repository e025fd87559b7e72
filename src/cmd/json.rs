/*!
`json.rs`

Implements the `json` subcommand: decode an arbitrary JSON flag value.
A value starting with `@` is read from the named file.
*/

use anyhow::Result;
use clap::Args;
use serde_json::Value;

use super::output::{self, OutputFormat};
use crate::deserialize;

#[derive(Args, Debug)]
pub struct JsonArgs {
    /// Inline JSON, or @PATH to read it from a file
    #[arg(value_name = "VALUE", allow_hyphen_values = true)]
    pub value: String,

    /// Flag name reported in error messages
    #[arg(long, default_value = "json")]
    pub flag_name: String,

    /// Type label reported in error messages
    #[arg(long, default_value = "any object")]
    pub type_name: String,
}

pub fn execute_json(args: JsonArgs, format: OutputFormat) -> Result<()> {
    let decoded = decode_json(&args.value, &args.flag_name, &args.type_name)?;
    output::print(&decoded, format)
}

fn decode_json(raw: &str, flag_name: &str, type_name: &str) -> Result<Value> {
    Ok(deserialize::json(raw, flag_name, type_name)?)
}
