/*!
`model.rs`

Implements the `model` subcommand: decode a service model flag value, the
way a service command decodes e.g. `--notifications` or `--resources`.

  flag-decode model notification-event '{"event": "e", "target": "t"}'
  flag-decode model resource --slice @resources.json
*/

use anyhow::Result;
use clap::Args;
use serde::Serialize;
use serde_json::Value;

use super::kind::ModelKind;
use super::output::{self, OutputFormat};
use crate::deserialize::{self, DecodableModel};
use crate::models;

#[derive(Args, Debug)]
pub struct ModelArgs {
    /// Model to decode into
    #[arg(value_enum)]
    pub model: ModelKind,

    /// Inline JSON object (array with --slice), or @PATH to read it from a file
    #[arg(value_name = "VALUE", allow_hyphen_values = true)]
    pub value: String,

    /// Decode a JSON array of models instead of a single object
    #[arg(long)]
    pub slice: bool,

    /// Flag name reported in error messages
    #[arg(long, default_value = "model")]
    pub flag_name: String,
}

pub fn execute_model(args: ModelArgs, format: OutputFormat) -> Result<()> {
    let decoded = decode_model(args.model, &args.value, &args.flag_name, args.slice)?;
    output::print(&decoded, format)
}

fn decode_model(kind: ModelKind, raw: &str, flag_name: &str, slice: bool) -> Result<Value> {
    match kind {
        ModelKind::NotificationEvent => {
            decode_as::<models::NotificationEvent>(raw, flag_name, kind, slice)
        }
        ModelKind::Resource => decode_as::<models::Resource>(raw, flag_name, kind, slice),
        ModelKind::InviteUser => decode_as::<models::InviteUser>(raw, flag_name, kind, slice),
        ModelKind::InviteUserIamPolicy => {
            decode_as::<models::InviteUserIamPolicy>(raw, flag_name, kind, slice)
        }
    }
}

fn decode_as<M>(raw: &str, flag_name: &str, kind: ModelKind, slice: bool) -> Result<Value>
where
    M: DecodableModel + Serialize,
{
    let name = kind.model_name();
    let value = if slice {
        serde_json::to_value(deserialize::model_slice::<M>(raw, flag_name, name)?)?
    } else {
        serde_json::to_value(deserialize::model::<M>(raw, flag_name, name)?)?
    };
    Ok(value)
}
