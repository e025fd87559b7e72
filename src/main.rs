use anyhow::Result;
use clap::{Parser, Subcommand};

mod cmd;
mod deserialize;
mod i18n;
mod models;
mod utils;

use cmd::output::{OUTPUT_ENV, OutputFormat};
use cmd::{FileArgs, JsonArgs, ListArgs, ModelArgs, ValueArgs};
use deserialize::DecodeError;

/// flag-decode - turn free-form CLI flag values into typed values and
/// cloud service models.
///
/// Command layout:
///   flag-decode value <VALUE> [--as string|integer|number|boolean]
///   flag-decode list  <VALUE> [--of string|integer|number|boolean]
///   flag-decode json  <VALUE|@PATH> [--type-name LABEL]
///   flag-decode model <MODEL> <VALUE|@PATH> [--slice]
///   flag-decode file  <PATH> [--out PATH]
///
/// Global flags / env:
///   -v / -vv            Increase verbosity (logs go to stderr)
///   -q / --quiet        Errors only
///   -o / --output       table | json | yaml (or FLAG_DECODE_OUTPUT env)
///   NO_COLOR            Disable ANSI color
///
/// Exit codes:
///   0 ok, 1 other failure, 2 parse error, 3 file error, 4 model error
///
/// Examples:
///   flag-decode list monday,tuesday,wednesday
///   flag-decode list 323,207,511 --of integer -o json
///   flag-decode json @tempdir/test.json
///   flag-decode model notification-event --slice '[{"event": "project.create.failed", "target": "234234324"}]'
#[derive(Parser, Debug)]
#[command(
    name = "flag-decode",
    version,
    author,
    about = "flag-decode - coerce free-form CLI flag values into typed values and service models",
    propagate_version = true,
    disable_help_subcommand = true
)]
pub struct Cli {
    /// Increase verbosity (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Silence all non-error output
    #[arg(short, long, global = true)]
    quiet: bool,

    /// Output format (falls back to FLAG_DECODE_OUTPUT, then table)
    #[arg(short = 'o', long = "output", value_enum, global = true, value_name = "FORMAT")]
    output: Option<OutputFormat>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Decode a scalar flag value
    Value(ValueArgs),

    /// Decode a list flag value (comma separated or JSON array)
    List(ListArgs),

    /// Decode a JSON flag value, inline or @file
    Json(JsonArgs),

    /// Decode a service model (or list of models) flag value
    Model(ModelArgs),

    /// Open a file flag value and stream its contents
    File(FileArgs),
}

fn main() {
    let cli = Cli::parse();

    // Initialize logging
    let level = utils::derive_level(cli.verbose, cli.quiet);
    utils::init_logging(level);

    // Output format (CLI flag > FLAG_DECODE_OUTPUT env > table)
    let env_format = std::env::var(OUTPUT_ENV).ok();
    let format = match OutputFormat::resolve(cli.output, env_format.as_deref()) {
        Ok(f) => f,
        Err(e) => {
            eprintln!("{e}");
            std::process::exit(OTHER_FAILURE);
        }
    };

    if let Err(err) = run(cli.command, format) {
        cmd::output::report_failure(&err, format);
        let code = exit_code(&err);
        crate::log_debug!("exiting with status {code}");
        std::process::exit(code);
    }
}

fn run(command: Commands, format: OutputFormat) -> Result<()> {
    match command {
        Commands::Value(args) => cmd::execute_value(args, format),
        Commands::List(args) => cmd::execute_list(args, format),
        Commands::Json(args) => cmd::execute_json(args, format),
        Commands::Model(args) => cmd::execute_model(args, format),
        Commands::File(args) => cmd::execute_file(args, format),
    }
}

const OTHER_FAILURE: i32 = 1;

fn exit_code(err: &anyhow::Error) -> i32 {
    err.downcast_ref::<DecodeError>()
        .map(DecodeError::exit_code)
        .unwrap_or(OTHER_FAILURE)
}
