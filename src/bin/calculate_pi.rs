//! Computes pi to a chosen number of decimal digits using [`longnum::Number`].
//!
//! Grounded in `examples/original_source/src/calculate_pi.cpp`: the series
//! `pi = 2 + sum_{n>=1} 2*(2n)!!/(2n+1)!! * 2^-n`, accumulated as a running `term` that is
//! halved, multiplied by `2n`, and divided by `2n+1` on each iteration. The CLI surface
//! (`clap`) and logging (`tracing`) are additions this program didn't originally have; the
//! `clap::Parser` derive style follows the CLI in
//! `examples/other_examples/119947ab_zevorn-afcvt__src-main.rs.rs`.

use clap::Parser;
use longnum::Number;
use tracing::{debug, trace};

/// Compute pi to N decimal digits.
#[derive(Parser, Debug)]
#[command(author, version, about = "Computes pi using arbitrary-precision fixed-point arithmetic")]
struct Cli {
    /// Number of decimal digits of pi to print.
    #[arg(default_value_t = 100)]
    digits: u64,

    /// Increase log verbosity (-v for debug, -vv for trace).
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Base (2-16) to print the result in.
    #[arg(short, long, default_value_t = 10, value_parser = clap::value_parser!(u32).range(2..=16))]
    base: u32,
}

fn init_logging(verbosity: u8) {
    let level = match verbosity {
        0 => tracing::Level::WARN,
        1 => tracing::Level::DEBUG,
        _ => tracing::Level::TRACE,
    };
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(level.to_string()));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

/// The series `pi = 2 + sum term_n`, where `term_n = term_{n-1} * 2n / (2n+1) / 2`.
fn calculate_pi(precision: usize) -> Number {
    let mut result = Number::zero_with_precision(precision);
    let mut term = Number::from_i64_with_precision(2, precision);
    result += term.clone();

    for n in 1..=precision {
        term >>= 1;
        term *= Number::from_i64_with_precision((n * 2) as i64, term.precision());
        term /= Number::from_i64_with_precision((n * 2 + 1) as i64, term.precision());
        term.set_precision(precision - n + 2);
        result += term.clone();
        trace!(n, term_precision = term.precision(), "accumulated series term");
    }

    result.set_precision(precision);
    result
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let precision = ((cli.digits as f64 + 2.0) * 10f64.log2()).ceil() as usize;
    debug!(digits = cli.digits, precision, base = cli.base, "starting pi computation");

    let pi = calculate_pi(precision);
    let text = pi.to_string(cli.base);
    let truncated_len = (2 + cli.digits as usize).min(text.len());
    debug!(output_len = truncated_len, "truncating final digits");

    println!("{}", &text[..truncated_len]);
}
