//! Command-line entry point for the Tally micro-benchmark.
//!
//! The binary takes no arguments and reads nothing at runtime. The summed
//! range comes from `tally.toml`, embedded at compile time; stdout carries
//! exactly one line (`total = <value>`) and stderr stays silent unless the
//! embedded config itself is broken. Time it externally:
//!
//! ```text
//! cargo build --release -p tally-cli
//! time ./target/release/tally
//! ```

use tally::{Error, config::Config, log, report, sum};

/// Baked in at compile time; parsed and validated at startup.
const EMBEDDED_CONFIG: &str = include_str!("../tally.toml");

fn main() {
    if let Err(err) = run() {
        log!(Error, "{err}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), Error> {
    Config::init_from_toml(EMBEDDED_CONFIG)?;
    let bound = Config::get()?.bound;

    let total = sum::sum_below(bound)?;
    println!("{}", report::total_line(total));

    Ok(())
}
