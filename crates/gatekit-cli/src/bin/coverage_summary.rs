use clap::Parser;
use gatekit_cli::args::CoverageArgs;
use gatekit_cli::commands::coverage;
use gatekit_cli::exit_codes::FAILURE;
use gatekit_cli::logging;

fn main() {
    logging::init();
    let args = CoverageArgs::parse();
    let code = match coverage::run(args) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("fatal: {e:?}");
            FAILURE
        }
    };
    std::process::exit(code);
}
