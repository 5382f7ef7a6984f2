use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("failed to read configuration: {0}")]
    Config(#[from] config::ConfigError),

    #[error("failed to load env file: {0}")]
    DotEnv(#[from] dotenvy::Error),
}
