use std::io::{self, Write};
use std::process::ExitCode;

use clap::Parser;

use tallydemo::{greet, timing, Tally};

#[derive(Parser)]
#[command(version, about = "Prints a greeting and a short running-tally demo")]
struct Cli {
    /// String substituted verbatim into the greeting line
    name: String,
}

fn main() -> ExitCode {
    timing::init();
    let cli = Cli::parse();

    let _guard = timing::TimingGuard::new("greet");
    let mut tally = Tally::new();
    let stdout = io::stdout();
    let mut out = stdout.lock();
    if let Err(err) = greet(&mut tally, &cli.name, &mut out).and_then(|()| out.flush()) {
        eprintln!("tallydemo: failed to write output: {err}");
        return ExitCode::FAILURE;
    }
    ExitCode::SUCCESS
}
