mod cli;
mod exit_codes;
mod run;

use clap::Parser;

use crate::exit_codes::ExitCode;

fn main() {
    let cli = match cli::Cli::try_parse() {
        Ok(v) => v,
        Err(err) => {
            use clap::error::ErrorKind;
            let code = match err.kind() {
                ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => {
                    let _ = err.print();
                    ExitCode::Success
                }
                _ => {
                    // Usage problems go to stdout.
                    print!("{}", err.render());
                    ExitCode::InvalidInput
                }
            };
            std::process::exit(code.as_i32());
        }
    };

    let code = match run::run(&cli) {
        Ok(()) => ExitCode::Success,
        Err(err) => {
            eprintln!("{err:#}");
            ExitCode::RuntimeError
        }
    };

    std::process::exit(code.as_i32());
}
