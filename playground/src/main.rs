use clap::Parser;
use playground::Args;
use std::process::ExitCode;
use termcolor::{ColorChoice, StandardStream};

fn main() -> anyhow::Result<ExitCode> {
    env_logger::init(); // log to stderr, e.g. with `RUST_LOG=debug`
    let args = Args::parse();
    let stdin = std::io::stdin();
    let mut input = stdin.lock();
    let mut output = StandardStream::stdout(ColorChoice::Auto);
    let all_passed = playground::run(&args, &mut input, &mut output)?;
    Ok(if all_passed {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}
