use anyhow::Context;
use clap::Args;
use num_bigint::BigUint;

use numkit_core::config::{Config, FactorialConfig, Width};

use crate::LOG_TARGET;

#[derive(Debug, Args)]
pub struct FactorialArgs {
    /// Input, must not be negative.
    #[arg(allow_negative_numbers = true)]
    pub n: i64,

    /// Integer width to compute in. Fixed widths fail on overflow.
    #[arg(long, value_enum)]
    pub width: Option<Width>,
}

pub fn handle_command(args: FactorialArgs) -> anyhow::Result<()> {
    let config = FactorialConfig::from_env()?;

    let value = compute(&args, &config)?;
    println!("{value}");

    Ok(())
}

fn compute(args: &FactorialArgs, config: &FactorialConfig) -> anyhow::Result<BigUint> {
    let n = args.n;
    let width = args.width.unwrap_or(config.width);

    tracing::debug!(target: LOG_TARGET, %n, %width, "computing factorial");

    numkit_core::factorial_in(n, width).with_context(|| format!("cannot compute {n}! as {width}"))
}

#[cfg(test)]
mod tests {
    use numkit_core::ArithmeticError;

    use super::*;

    const CONFIG: FactorialConfig = FactorialConfig { width: Width::U64 };

    #[test]
    fn width_defaults_to_config() {
        let args = FactorialArgs { n: 21, width: None };
        let err = compute(&args, &CONFIG).unwrap_err();
        assert_eq!(
            err.downcast_ref::<ArithmeticError>(),
            Some(&ArithmeticError::Overflow { n: 21, bits: 64 })
        );

        let args = FactorialArgs {
            n: 21,
            width: Some(Width::Big),
        };
        assert_eq!(
            compute(&args, &CONFIG).unwrap().to_string(),
            "51090942171709440000"
        );
    }

    #[test]
    fn negative_input_is_rejected() {
        let args = FactorialArgs {
            n: -1,
            width: Some(Width::Big),
        };
        let err = compute(&args, &CONFIG).unwrap_err();
        assert_eq!(
            err.downcast_ref::<ArithmeticError>(),
            Some(&ArithmeticError::InvalidArgument(-1))
        );
        assert_eq!(err.to_string(), "cannot compute -1! as big");
    }
}
