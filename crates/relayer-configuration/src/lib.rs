use thiserror::Error;

mod condition;
pub use condition::UpdateCondition;

mod configuration;
pub use configuration::{ResolvedConfiguration, DEFAULT_ADAPTER_CONTRACT_TYPE};

pub mod environment;
pub use environment::Variables;

pub mod manifest;
pub use manifest::Manifest;

mod provider;
pub use provider::{ConfigurationProvider, FilesystemConfigurationProvider};

mod reader;
pub use reader::{FileReader, Filesystem};

#[cfg(feature = "testing")]
pub mod mock;

pub use tracing;

#[macro_export]
macro_rules! log_if_error {
    ($e: expr) => {
        match $e {
            Ok(v) => Ok(v),
            Err(e) => {
                $crate::tracing::error!(message=%e);
                Err(e)
            },
        }
    };
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("missing environment variable {0}")]
    MissingEnvironmentVariable(String),

    #[error("invalid environment variable {0}")]
    InvalidEnvironmentVariable(String),

    #[error("file \"{path}\" could not be read: {reason}")]
    ManifestUnreadable { path: String, reason: String },

    #[error("file \"{path}\" does not contain a valid JSON manifest: {reason}")]
    InvalidManifestFormat { path: String, reason: String },
}
