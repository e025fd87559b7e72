/*!
Subcommand modules.

  value.rs   scalar flags         -> execute_value
  list.rs    list flags           -> execute_list
  json.rs    JSON / @file flags   -> execute_json
  model.rs   service model flags  -> execute_model
  file.rs    streamed file flags  -> execute_file

Shared pieces:
  kind.rs    ScalarKind / ModelKind value enums
  output.rs  table / json / yaml rendering and failure reports

Conventions:
  - Each subcommand module exposes exactly one public `execute_*` function
    taking its clap `Args` struct plus the resolved `OutputFormat`, and
    returning `anyhow::Result<()>`.
  - Decode failures are propagated as `DecodeError` inside the anyhow error
    so `main` can report the message and pick the exit code.
*/

pub mod file;
pub mod json;
pub mod kind;
pub mod list;
pub mod model;
pub mod output;
pub mod value;

pub use file::{FileArgs, execute_file};
pub use json::{JsonArgs, execute_json};
pub use list::{ListArgs, execute_list};
pub use model::{ModelArgs, execute_model};
pub use value::{ValueArgs, execute_value};
