use std::{io, process::ExitCode};

mod cli;

pub fn main() -> ExitCode {
    let cli = cli::parse();

    tracing_subscriber::fmt()
        .pretty()
        .with_max_level(cli.log_level)
        // stdout carries prompts and the answer only.
        .with_writer(io::stderr)
        .init();

    match cli::run(&cli, &mut io::stdin().lock(), &mut io::stdout()) {
        Ok(_) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {}", err);
            ExitCode::FAILURE
        }
    }
}
