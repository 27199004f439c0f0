use clap::Parser;
use merge_supp_cli::{logging::init_logging, run, Cli};
use std::process::ExitCode;

fn main() -> ExitCode {
    let cli = Cli::parse();

    if let Err(e) = init_logging(cli.log_level, cli.quiet) {
        eprintln!("Error: {}", e);
        return ExitCode::from(e.exit_code());
    }

    match run(&cli) {
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::from(e.exit_code())
        }
    }
}
