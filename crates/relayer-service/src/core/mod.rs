use thiserror::Error;

pub mod context;

mod logging;
pub use logging::Fmt;

#[derive(Error, Debug)]
pub enum Error {
    #[error("configuration error {0}")]
    Configuration(#[from] relayer_configuration::Error),

    #[error("could not load environment file {0}")]
    Environment(#[from] dotenvy::Error),

    #[error("could not install tracing subscriber {0}")]
    Tracing(String),

    #[error("could not serialize configuration {0}")]
    Serialization(#[from] serde_json::Error),
}
