use crate::args::CoverageArgs;
use crate::exit_codes::{SUCCESS, USAGE};
use anyhow::Context;
use gatekit_core::coverage::convert;

/// Converts the export and prints a confirmation line.
///
/// A missing input is a usage error (exit 2); read, parse and write faults propagate.
pub fn run(args: CoverageArgs) -> anyhow::Result<i32> {
    match convert(&args.src, &args.dst) {
        Ok(summary) => {
            println!("{}", summary.confirmation(&args.dst));
            Ok(SUCCESS)
        }
        Err(e) if e.is_missing_input() => {
            eprintln!("{e}");
            Ok(USAGE)
        }
        Err(e) => Err(e).with_context(|| {
            format!(
                "failed to convert {} to {}",
                args.src.display(),
                args.dst.display()
            )
        }),
    }
}
