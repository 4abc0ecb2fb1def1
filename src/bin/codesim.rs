use clap::Parser;
use codesim_core::cli::{dispatch, Cli};
use codesim_core::exit::CodesimExit;
use codesim_core::logging;
use colored::Colorize;

fn main() -> CodesimExit {
    let cli = Cli::parse();
    logging::init_tracing(cli.verbose);

    match dispatch::execute(cli) {
        Ok(exit_code) => exit_code,
        Err(e) => {
            eprintln!("{} {e:#}", "error:".red().bold());
            CodesimExit::Error
        }
    }
}
