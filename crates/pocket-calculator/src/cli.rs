//! Command-line front end
//!
//! A thin presentation layer: it turns key strings into button presses and
//! prints whatever the controller displays.

use clap::{Args, Parser, Subcommand, ValueEnum};
use std::io::{BufRead, Write};
use std::path::PathBuf;
use thiserror::Error;

use crate::config::CalculatorConfig;
use crate::controller::Controller;
use crate::core::{CalcError, DivisionPolicy};
use crate::driver::{CalculatorDriver, TranscriptDriver};
use crate::keypad::Keypad;

/// Result type for CLI operations
pub type CliResult<T> = Result<T, CliError>;

/// Errors that can occur in the CLI
#[derive(Debug, Error)]
pub enum CliError {
    /// Calculator or configuration error
    #[error(transparent)]
    Calc(#[from] CalcError),

    /// IO error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// pocket-calc: a four-function pocket calculator
#[derive(Parser, Debug)]
#[command(name = "pocket-calc")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Quiet mode (errors only)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// JSON configuration file
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Division by zero policy (overrides the configuration file)
    #[arg(long, env = "POCKET_CALC_DIVISION_POLICY", global = true)]
    pub division_policy: Option<PolicyArg>,

    /// Subcommand to run
    #[command(subcommand)]
    pub command: Commands,
}

/// CLI subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Press a key sequence and print the display
    Press(PressArgs),

    /// Read key sequences from stdin, one line at a time
    Repl,

    /// Print the keypad layout
    Keypad,
}

/// Arguments for `press`
#[derive(Args, Debug)]
pub struct PressArgs {
    /// Keys to press: 0-9 . + - * / = c (clear) n (sign) %
    #[arg(required = true, allow_hyphen_values = true)]
    pub keys: Vec<String>,

    /// Print every press and the resulting display as JSON
    #[arg(long)]
    pub json: bool,
}

/// Division policy argument for CLI
#[derive(ValueEnum, Clone, Copy, Debug)]
pub enum PolicyArg {
    /// Show `Error` on division by zero
    Error,
    /// IEEE-754 division: `inf`, `-inf` or `NaN`
    Ieee,
}

impl From<PolicyArg> for DivisionPolicy {
    fn from(arg: PolicyArg) -> Self {
        match arg {
            PolicyArg::Error => Self::Error,
            PolicyArg::Ieee => Self::Ieee,
        }
    }
}

/// CLI verbosity level
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Verbosity {
    /// Errors only
    Quiet,
    /// Warnings
    #[default]
    Normal,
    /// Engine transitions
    Verbose,
    /// Every keystroke
    Debug,
}

impl Verbosity {
    /// Derives the verbosity from the `-v` count and `-q` flag
    #[must_use]
    pub const fn from_flags(verbose: u8, quiet: bool) -> Self {
        if quiet {
            return Self::Quiet;
        }
        match verbose {
            0 => Self::Normal,
            1 => Self::Verbose,
            _ => Self::Debug,
        }
    }

    /// Default `tracing` filter directive for this level
    #[must_use]
    pub const fn filter(self) -> &'static str {
        match self {
            Self::Quiet => "error",
            Self::Normal => "warn",
            Self::Verbose => "debug",
            Self::Debug => "trace",
        }
    }
}

/// Installs the stderr log subscriber; `RUST_LOG` takes precedence
pub fn init_tracing(verbosity: Verbosity) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(verbosity.filter()));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

/// Builds the session configuration from the file and flags
pub fn build_config(cli: &Cli) -> CliResult<CalculatorConfig> {
    let mut config = match &cli.config {
        Some(path) => CalculatorConfig::load(path)?,
        None => CalculatorConfig::default(),
    };
    if let Some(policy) = cli.division_policy {
        config = config.with_division_policy(policy.into());
    }
    Ok(config)
}

/// Runs a parsed command line against the given streams
pub fn run<R: BufRead, W: Write>(cli: &Cli, input: R, output: &mut W) -> CliResult<()> {
    let config = build_config(cli)?;
    tracing::debug!(?config, command = ?cli.command, "starting");

    match &cli.command {
        Commands::Press(args) => run_press(&config, args, output),
        Commands::Repl => run_repl(&config, input, output),
        Commands::Keypad => {
            write!(output, "{}", Keypad::new().render())?;
            Ok(())
        }
    }
}

fn run_press<W: Write>(config: &CalculatorConfig, args: &PressArgs, output: &mut W) -> CliResult<()> {
    let mut driver = TranscriptDriver::with_config(config);
    driver.press_keys(&args.keys.join(" "))?;

    if args.json {
        writeln!(output, "{}", driver.to_json()?)?;
    } else {
        writeln!(output, "{}", driver.display())?;
    }
    Ok(())
}

fn run_repl<R: BufRead, W: Write>(
    config: &CalculatorConfig,
    input: R,
    output: &mut W,
) -> CliResult<()> {
    let mut controller = Controller::with_config(config);
    for line in input.lines() {
        let line = line?;
        match controller.press_keys(&line) {
            Ok(()) => writeln!(output, "{}", controller.display())?,
            Err(err) => {
                tracing::warn!(%err, line = %line, "line rejected");
                writeln!(output, "{err}")?;
            }
        }
    }
    Ok(())
}
