/*!
`file.rs`

Implements the `file` subcommand: open a file the way a binary upload flag
does and stream it, to stdout or to `--out`.

The path is used as given (no `@` prefix). The handle is owned by this
command and closed when it goes out of scope. `--out` must not resolve to the
input file: creating the destination would truncate the source first.
*/

use anyhow::{Context, Result, bail};
use clap::Args;
use std::fs::File;
use std::io::{self, Read, Write};
use std::path::{Path, PathBuf};

use super::output::{self, OutputFormat};
use crate::deserialize;
use crate::i18n::translate;
use crate::log_info;

#[derive(Args, Debug)]
pub struct FileArgs {
    /// Path of the file to open
    #[arg(value_name = "PATH")]
    pub path: String,

    /// Write the contents here instead of stdout
    #[arg(long, value_name = "PATH")]
    pub out: Option<PathBuf>,
}

pub fn execute_file(args: FileArgs, format: OutputFormat) -> Result<()> {
    let mut handle = deserialize::file(&args.path)?;

    match &args.out {
        Some(out) => {
            ensure_distinct(Path::new(&args.path), out)?;
            let copied = copy_to_path(&mut handle, out)?;
            let summary = serde_json::json!({
                "file": args.path,
                "out": out.display().to_string(),
                "bytes": copied,
            });
            output::print(&summary, format)
        }
        None => {
            let mut stdout = io::stdout().lock();
            let copied = io::copy(&mut handle, &mut stdout).context("failed to write to stdout")?;
            stdout.flush()?;
            let bytes = copied.to_string();
            log_info!(
                "{}",
                translate("bytes-copied", &[("BYTES", &bytes), ("FILENAME", &args.path)])
            );
            Ok(())
        }
    }
}

fn ensure_distinct(src: &Path, out: &Path) -> Result<()> {
    // A destination that does not exist yet cannot be the source.
    let Ok(out_real) = out.canonicalize() else {
        return Ok(());
    };
    let src_real = src
        .canonicalize()
        .with_context(|| translate("file-opening-error", &[("FILENAME", &src.display().to_string())]))?;
    if src_real == out_real {
        bail!(translate("same-file-error", &[("FILENAME", &src.display().to_string())]));
    }
    Ok(())
}

fn copy_to_path(reader: &mut impl Read, out: &Path) -> Result<u64> {
    let writing_error = || translate("file-writing-error", &[("FILENAME", &out.display().to_string())]);
    let mut dest = File::create(out).with_context(writing_error)?;
    let copied = io::copy(reader, &mut dest).with_context(writing_error)?;
    dest.flush().with_context(writing_error)?;
    Ok(copied)
}
