//! Pure integer utilities: factorials and primality testing.
//!
//! Every function is deterministic and free of shared state, so it may be called
//! concurrently from any number of threads.

mod factorial;
mod prime;

/// Configurations
pub mod config {
    pub use numkit_config::{Config, FactorialConfig, PrimalityConfig, PrimalityTest, Width};
}

pub use numkit_common::{constants, error::ArithmeticError};

pub use factorial::{checked_factorial, factorial, factorial_in};
pub use prime::{is_prime, is_prime_exhaustive, is_prime_with, primes_up_to};

/// Result type for fallible arithmetic.
pub type Result<T, E = ArithmeticError> = std::result::Result<T, E>;

pub(crate) const LOG_TARGET: &str = "numkit";
