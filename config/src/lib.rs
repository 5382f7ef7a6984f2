//! Environment-driven configuration for numkit.
//!
//! Every config struct is read from variables named `NUMKIT_<PREFIX>_<FIELD>`. Values
//! may also come from an optional `.config.env` file next to this crate's manifest;
//! variables already set in the environment take precedence over the file.

use std::{
    io,
    path::{Path, PathBuf},
};

use serde::de::DeserializeOwned;

mod error;

pub mod numeric;

pub use error::Error;
pub use numeric::{FactorialConfig, PrimalityConfig, PrimalityTest, Width};

const CARGO_MANIFEST_DIR: &str = env!("CARGO_MANIFEST_DIR");
const CONFIG_ENV_PREFIX: &str = "NUMKIT";

pub trait Config: DeserializeOwned {
    const PREFIX: &'static str;

    fn from_env() -> Result<Self, Error> {
        load_env_file(&config_env_path())?;

        Self::from_vars(None)
    }

    /// Reads the config from `vars` instead of the process environment when given.
    ///
    /// Keys keep their full `NUMKIT_<PREFIX>_<FIELD>` form. Fields of other config
    /// structs sharing the prefix are ignored.
    fn from_vars(vars: Option<config::Map<String, String>>) -> Result<Self, Error> {
        let prefix = if Self::PREFIX.is_empty() {
            CONFIG_ENV_PREFIX.to_owned()
        } else {
            format!("{}_{}", CONFIG_ENV_PREFIX, Self::PREFIX)
        };

        Ok(config::Config::builder()
            .add_source(
                config::Environment::with_prefix(&prefix)
                    .separator("_")
                    .source(vars),
            )
            .build()?
            .try_deserialize()?)
    }
}

#[doc(hidden)]
pub fn config_env_path() -> PathBuf {
    Path::new(CARGO_MANIFEST_DIR).join(".config.env")
}

// A missing file is fine, variables may be set directly.
fn load_env_file(path: &Path) -> Result<(), Error> {
    match dotenvy::from_path(path) {
        Ok(()) => Ok(()),
        Err(dotenvy::Error::Io(err)) if err.kind() == io::ErrorKind::NotFound => Ok(()),
        Err(err) => Err(err.into()),
    }
}
