/*!
`value.rs`

Implements the `value` subcommand: decode one scalar flag value.

  flag-decode value test                 -> "test"
  flag-decode value 10 --as integer      -> 10
  flag-decode value 10 --as string       -> parsing error (10 is a JSON number)
*/

use anyhow::Result;
use clap::Args;
use serde_json::Value;

use super::kind::ScalarKind;
use super::output::{self, OutputFormat};
use crate::deserialize;

#[derive(Args, Debug)]
pub struct ValueArgs {
    /// Raw flag value, exactly as a user would type it
    #[arg(value_name = "VALUE", allow_hyphen_values = true)]
    pub value: String,

    /// Type to decode the value into
    #[arg(long = "as", value_enum, default_value_t = ScalarKind::String)]
    pub kind: ScalarKind,

    /// Flag name reported in error messages
    #[arg(long, default_value = "value")]
    pub flag_name: String,
}

pub fn execute_value(args: ValueArgs, format: OutputFormat) -> Result<()> {
    let decoded = decode_value(&args.value, args.kind, &args.flag_name)?;
    output::print(&decoded, format)
}

fn decode_value(raw: &str, kind: ScalarKind, flag_name: &str) -> Result<Value> {
    let label = kind.label();
    let value = match kind {
        ScalarKind::String => Value::String(deserialize::single_value(raw, flag_name, label)?),
        ScalarKind::Integer => Value::from(deserialize::single_value::<i64>(raw, flag_name, label)?),
        ScalarKind::Number => Value::from(deserialize::single_value::<f64>(raw, flag_name, label)?),
        ScalarKind::Boolean => Value::Bool(deserialize::single_value(raw, flag_name, label)?),
    };
    Ok(value)
}
