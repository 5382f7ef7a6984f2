use std::fmt;

use serde::Deserialize;

use super::Config;

/// Settings read by factorial computations, `NUMKIT_NUMERIC_WIDTH`.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Deserialize)]
pub struct FactorialConfig {
    /// Integer representation used for factorials.
    pub width: Width,
}

/// Settings read by primality checks, `NUMKIT_NUMERIC_PRIMALITY`.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Deserialize)]
pub struct PrimalityConfig {
    /// Default primality test.
    pub primality: PrimalityTest,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Deserialize)]
#[cfg_attr(feature = "clap_derive", derive(clap::ValueEnum))]
pub enum Width {
    #[serde(rename = "u32")]
    #[cfg_attr(feature = "clap_derive", value(name = "u32"))]
    U32,

    #[serde(rename = "u64")]
    #[cfg_attr(feature = "clap_derive", value(name = "u64"))]
    U64,

    #[serde(rename = "u128")]
    #[cfg_attr(feature = "clap_derive", value(name = "u128"))]
    U128,

    /// Arbitrary precision, never overflows.
    #[serde(rename = "big")]
    #[cfg_attr(feature = "clap_derive", value(name = "big"))]
    Big,
}

impl fmt::Display for Width {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Width::U32 => write!(f, "u32"),
            Width::U64 => write!(f, "u64"),
            Width::U128 => write!(f, "u128"),
            Width::Big => write!(f, "big"),
        }
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Deserialize)]
#[cfg_attr(feature = "clap_derive", derive(clap::ValueEnum))]
pub enum PrimalityTest {
    /// Trial division by candidates up to the square root.
    #[serde(rename = "trial")]
    #[cfg_attr(feature = "clap_derive", value(name = "trial"))]
    TrialDivision,

    /// Trial division by every candidate in `2..n`.
    #[serde(rename = "exhaustive")]
    #[cfg_attr(feature = "clap_derive", value(name = "exhaustive"))]
    Exhaustive,
}

impl fmt::Display for PrimalityTest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PrimalityTest::TrialDivision => write!(f, "trial"),
            PrimalityTest::Exhaustive => write!(f, "exhaustive"),
        }
    }
}

// Both share the `NUMERIC` prefix; each only deserializes its own field.
impl Config for FactorialConfig {
    const PREFIX: &'static str = "NUMERIC";
}

impl Config for PrimalityConfig {
    const PREFIX: &'static str = "NUMERIC";
}
