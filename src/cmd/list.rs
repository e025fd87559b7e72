/*!
`list.rs`

Implements the `list` subcommand: decode a list flag value.

Accepted input:
  - comma separated: `monday,tuesday` or `323,207,511`
  - a JSON array:    `["monday", "tuesday"]`
*/

use anyhow::Result;
use clap::Args;
use serde_json::Value;

use super::kind::ScalarKind;
use super::output::{self, OutputFormat};
use crate::deserialize;

#[derive(Args, Debug)]
pub struct ListArgs {
    /// Raw flag value (comma separated or JSON array)
    #[arg(value_name = "VALUE", allow_hyphen_values = true)]
    pub value: String,

    /// Element type of the list
    #[arg(long = "of", value_enum, default_value_t = ScalarKind::String)]
    pub kind: ScalarKind,

    /// Flag name reported in error messages
    #[arg(long, default_value = "list")]
    pub flag_name: String,
}

pub fn execute_list(args: ListArgs, format: OutputFormat) -> Result<()> {
    let decoded = decode_list(&args.value, args.kind, &args.flag_name)?;
    output::print(&decoded, format)
}

fn decode_list(raw: &str, kind: ScalarKind, flag_name: &str) -> Result<Value> {
    let label = kind.list_label();
    let value = match kind {
        ScalarKind::String => Value::from(deserialize::list::<String>(raw, flag_name, &label)?),
        ScalarKind::Integer => Value::from(deserialize::list::<i64>(raw, flag_name, &label)?),
        ScalarKind::Number => Value::from(deserialize::list::<f64>(raw, flag_name, &label)?),
        ScalarKind::Boolean => Value::from(deserialize::list::<bool>(raw, flag_name, &label)?),
    };
    Ok(value)
}
