//! The fibcycles CLI tool

mod error;
mod util;

use std::hint::black_box;
use std::io::{self, Write};
use std::num::NonZeroUsize;

use clap::{CommandFactory, Parser};
use env_logger::{Builder, Target};
use log::LevelFilter;

use fibcycles_cycles::{measure_min, CounterKind, Measured};
use fibcycles_fibonacci::fibonacci;

use crate::error::Error;
use crate::util::parse_index;

#[derive(Parser)]
#[command(name = "fibcycles", author, version, about, long_about = None)]
struct Cli {
    #[arg(long, hide = true)]
    markdown_help: bool,

    /// Set log filter value [ off, error, warn, info, debug, trace ]
    #[arg(long)]
    #[arg(default_value_t = LevelFilter::Info)]
    log_level: LevelFilter,

    /// Index of the Fibonacci term to compute (0-based).
    #[arg(allow_hyphen_values = true)]
    index: Option<String>,

    /// The tick source to measure with.
    #[arg(long)]
    #[arg(default_value_t = CounterKind::Hardware)]
    #[arg(value_parser = clap_enum_variants!(CounterKind))]
    counter: CounterKind,

    /// Measure this many times and report the fastest run.
    #[arg(long)]
    #[arg(default_value_t = 1)]
    runs: usize,
}

fn main() -> Result<(), io::Error> {
    let args = Cli::parse();

    Builder::new()
        .filter_level(args.log_level)
        .parse_default_env()
        .target(Target::Stderr)
        .format(|buf, record| writeln!(buf, "[{}] {}", record.level(), record.args()))
        .init();

    if args.markdown_help {
        clap_markdown::print_help_markdown::<Cli>();
        Ok(())
    } else if let Some(index) = &args.index {
        run(index, args.counter, args.runs);
        Ok(())
    } else {
        Cli::command().print_help()
    }
}

#[allow(clippy::print_stderr)]
fn run(index: &str, counter: CounterKind, runs: usize) {
    match measure_fibonacci(index, counter, runs) {
        Ok(measured) => report(&measured),
        Err(error) => {
            eprintln!("{error}");
            std::process::exit(1);
        }
    }
}

fn measure_fibonacci(
    index: &str,
    counter: CounterKind,
    runs: usize,
) -> Result<Measured<u64>, Error> {
    let index = parse_index(index)?;
    let runs = NonZeroUsize::new(runs).ok_or(Error::NoRuns)?;

    let counter = counter.counter();
    log::debug!(
        "Computing fibonacci({index}) {runs} time(s), measured with {}",
        counter.name()
    );

    Ok(measure_min(counter.as_ref(), runs, || fibonacci(black_box(index))))
}

#[allow(clippy::print_stdout)]
fn report(measured: &Measured<u64>) {
    println!("Result: {}", measured.value);
    println!(" In {} cycles", measured.cycles);
}
