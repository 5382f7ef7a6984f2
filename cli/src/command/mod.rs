use anyhow::Context;
use clap::Subcommand;

use super::ENV;

pub mod factorial;
pub mod prime;

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Compute the factorial of a non-negative integer.
    Factorial(factorial::FactorialArgs),
    /// Check whether an integer is prime.
    Prime(prime::PrimeArgs),
    /// List every prime up to a limit.
    Primes(prime::PrimesArgs),
}

pub fn handle_command(cmd: Command) -> anyhow::Result<()> {
    dotenvy::from_read(ENV.as_bytes()).context("default env must be valid")?;

    match cmd {
        Command::Factorial(args) => factorial::handle_command(args),
        Command::Prime(args) => prime::handle_command(args),
        Command::Primes(args) => prime::handle_primes_command(args),
    }
}
