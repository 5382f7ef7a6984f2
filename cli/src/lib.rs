//! # numkit
//!
//! Command-line front end for the numkit integer utilities.
//!
//! ## Usage
//! ```sh
//! numkit factorial 25
//! numkit factorial 21 --width u64   # fails: 21! does not fit in 64 bits
//! numkit prime 2147483647
//! numkit primes 100
//! ```
//!
//! Defaults for `--width` and `--test` are read from `NUMKIT_NUMERIC_WIDTH` and
//! `NUMKIT_NUMERIC_PRIMALITY`. Log verbosity is controlled with `RUST_LOG`.

use clap::Parser;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

pub mod command;

pub(crate) const LOG_TARGET: &str = "numkit-cli";

#[derive(Debug, Parser)]
#[command(name = "numkit", bin_name = "numkit")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: command::Command,
}

pub fn setup_logger() -> tracing::subscriber::DefaultGuard {
    let filter = EnvFilter::builder()
        .with_default_directive(LevelFilter::WARN.into())
        .from_env_lossy();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_timer(tracing_subscriber::fmt::time::ChronoLocal::rfc_3339())
                .with_ansi(std::io::IsTerminal::is_terminal(&std::io::stderr()))
                .with_writer(std::io::stderr)
                .pretty()
                .with_file(false)
                .with_line_number(false),
        )
        .with(filter)
        .set_default()
}

/// Default environment variables for numeric configuration.
const ENV: &str = r#"
NUMKIT_NUMERIC_WIDTH=big
NUMKIT_NUMERIC_PRIMALITY=trial
"#;
