//! Command-line driver for the primality checker
//!
//! Checks each integer given on the command line, followed by those listed in an optional TOML
//! inputs file, and prints one verdict per line.

use std::{io::Write, path::PathBuf, process::ExitCode};

use anyhow::{Context, bail};
use clap::Parser;
use primality::{Inputs, PrimalityChecker};

#[derive(Debug, Parser)]
#[command(name = "is-prime")]
#[command(author, version, about = "Test integers for primality", long_about = None)]
struct Config {
    /// The integers to test for primality
    #[arg(value_name = "NUMBER", allow_negative_numbers = true)]
    numbers: Vec<i64>,
    /// Path to a TOML inputs file containing additional integers to test
    ///
    /// The file must contain an `[inputs]` table with a `numbers` array.
    #[arg(short = 'i', long, value_name = "FILE", env = "PRIMALITY_INPUTS")]
    inputs: Option<PathBuf>,
    /// Print nothing, and exit successfully only if every integer is prime
    #[arg(short = 'q', long)]
    quiet: bool,
}

impl Config {
    /// All integers to check, positional arguments first
    fn collect_numbers(&self) -> anyhow::Result<Vec<i64>> {
        let mut numbers = self.numbers.clone();
        if let Some(path) = self.inputs.as_deref() {
            let inputs = Inputs::load(path)
                .with_context(|| format!("could not load inputs from '{}'", path.display()))?;
            numbers.extend(inputs);
        }
        if numbers.is_empty() {
            bail!("no integers to check: pass at least one NUMBER or an --inputs file");
        }
        Ok(numbers)
    }
}

fn run(config: &Config, out: &mut impl Write) -> anyhow::Result<bool> {
    let numbers = config.collect_numbers()?;
    log::debug!(target: "primality", "checking {} integer(s)", numbers.len());

    let mut all_prime = true;
    for verdict in PrimalityChecker::new().check_all(numbers) {
        all_prime &= verdict.prime;
        if !config.quiet {
            writeln!(out, "{verdict}").context("failed to write verdict")?;
        }
    }
    Ok(all_prime)
}

/// Under `--quiet` the exit status carries the result, otherwise only success of the run
fn exit_code(config: &Config, all_prime: bool) -> ExitCode {
    if config.quiet && !all_prime {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}

fn main() -> anyhow::Result<ExitCode> {
    let mut builder = env_logger::Builder::from_env("PRIMALITY_LOG");
    builder.format_indent(Some(2));
    builder.format_timestamp(None);
    builder.init();

    let config = Config::parse();
    let all_prime = run(&config, &mut std::io::stdout().lock())?;
    Ok(exit_code(&config, all_prime))
}
