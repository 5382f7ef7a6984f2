use clap::Args;

use numkit_core::config::{Config, PrimalityConfig, PrimalityTest};

use crate::LOG_TARGET;

#[derive(Debug, Args)]
pub struct PrimeArgs {
    /// Integer to test. Anything below 2 is not prime.
    #[arg(allow_negative_numbers = true)]
    pub n: i128,

    /// Primality test to use.
    #[arg(long, value_enum)]
    pub test: Option<PrimalityTest>,
}

#[derive(Debug, Args)]
pub struct PrimesArgs {
    /// Inclusive upper bound.
    pub limit: u64,
}

pub fn handle_command(args: PrimeArgs) -> anyhow::Result<()> {
    let config = PrimalityConfig::from_env()?;

    println!("{}", describe(&args, &config));
    Ok(())
}

pub fn handle_primes_command(args: PrimesArgs) -> anyhow::Result<()> {
    let _span = tracing::debug_span!(target: LOG_TARGET, "primes", limit = args.limit).entered();

    for p in numkit_core::primes_up_to(args.limit) {
        println!("{p}");
    }
    Ok(())
}

fn describe(args: &PrimeArgs, config: &PrimalityConfig) -> String {
    let n = args.n;
    let test = args.test.unwrap_or(config.primality);

    tracing::debug!(target: LOG_TARGET, %n, %test, "testing primality");

    if numkit_core::is_prime_with(n, test) {
        format!("{n} is prime")
    } else {
        format!("{n} is not prime")
    }
}
