use clap::Parser;
use gatekit_cli::args::ExtractArgs;
use gatekit_cli::commands::extract;
use gatekit_cli::exit_codes::FAILURE;
use gatekit_cli::logging;

fn main() {
    logging::init();
    let args = ExtractArgs::parse();
    let code = match extract::run(args) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("fatal: {e:?}");
            FAILURE
        }
    };
    std::process::exit(code);
}
