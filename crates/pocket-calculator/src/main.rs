//! pocket-calc: command-line front end for the pocket calculator
//!
//! ## Usage
//!
//! ```bash
//! pocket-calc press "3 + 4 ="            # prints 7
//! pocket-calc press --json "5 - 3 = ="   # per-key transcript
//! pocket-calc --division-policy ieee press "6 / 0 ="
//! pocket-calc repl                       # one key line per stdin line
//! pocket-calc keypad                     # show the layout
//! ```

use clap::Parser;
use pocket_calculator::cli::{init_tracing, run, Cli, Verbosity};
use std::io;
use std::process::ExitCode;

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(Verbosity::from_flags(cli.verbose, cli.quiet));

    let stdin = io::stdin();
    let mut stdout = io::stdout().lock();
    match run(&cli, stdin.lock(), &mut stdout) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}
