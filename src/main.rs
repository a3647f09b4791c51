use std::process::ExitCode;

use clap::Parser;
use trans_collect::cli::{Arguments, ExitStatus, report::print_error};

fn main() -> ExitCode {
    let args = Arguments::parse();
    let verbose = args.verbose();

    match trans_collect::cli::run_cli(args) {
        Ok(status) => status.into(),
        Err(err) => {
            if verbose {
                print_error(format!("{:?}", err));
            } else {
                print_error(format!("{:#}", err));
            }
            ExitStatus::Error.into()
        }
    }
}
