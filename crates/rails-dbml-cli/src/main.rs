mod cli;
mod convert;
#[allow(unused_assignments)]
mod diagnostic;
mod error;
mod logging;
mod output;

use clap::Parser;

use error::ExitCode;

fn main() {
    let cli = match cli::Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            let _ = e.print();
            let code = if e.use_stderr() {
                ExitCode::InvalidArguments
            } else {
                ExitCode::Success
            };
            std::process::exit(code as i32);
        }
    };
    let output = output::OutputContext::from_global(&cli.global);
    logging::init(&cli.global, output.use_color);

    let result = cli
        .paths()
        .and_then(|(source, target)| convert::run(source, target, &output));

    match result {
        Ok(()) => std::process::exit(ExitCode::Success as i32),
        Err(e) => {
            output.print_error(&e);
            std::process::exit(e.exit_code() as i32);
        }
    }
}
