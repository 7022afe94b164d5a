use crate::args::ExtractArgs;
use crate::exit_codes::{FAILURE, SUCCESS};
use anyhow::Context;
use gatekit_core::extract::extract_file;
use std::io::Write;

/// Extracts the payload and writes it to stdout.
///
/// Extraction failures are reported on stderr with exit code 1; a failing stdout write is
/// propagated as a fatal error.
pub fn run(args: ExtractArgs) -> anyhow::Result<i32> {
    let output = match extract_file(&args.input, &args.options()) {
        Ok(output) => output,
        Err(e) => {
            tracing::debug!(error = ?e, "extraction failed");
            eprintln!("{e}");
            return Ok(FAILURE);
        }
    };

    let mut stdout = std::io::stdout().lock();
    stdout
        .write_all(output.as_bytes())
        .and_then(|()| stdout.flush())
        .context("failed to write result to stdout")?;
    Ok(SUCCESS)
}
