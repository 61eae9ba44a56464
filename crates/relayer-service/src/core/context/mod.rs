use std::sync::Arc;

use relayer_configuration::{ConfigurationProvider, FileReader, FilesystemConfigurationProvider, ResolvedConfiguration, Variables};

use crate::core::Error;

mod verbosity;
pub use verbosity::VerbosityConfiguration;

/// Everything the relayer needs at startup. The configuration is shared read-only between the
/// components spawned afterwards.
#[derive(Clone, Debug)]
pub struct Context {
    pub configuration: Arc<ResolvedConfiguration>,
}

impl Context {
    pub fn new(configuration: ResolvedConfiguration) -> Self {
        Self {
            configuration: Arc::new(configuration),
        }
    }

    pub fn load<R: FileReader>(variables: Variables, files: R) -> Result<Self, Error> {
        let provider = FilesystemConfigurationProvider::with_reader(variables, files);

        Self::from_provider(&provider)
    }

    pub fn from_provider<P: ConfigurationProvider>(provider: &P) -> Result<Self, Error> {
        Ok(Self::new(provider.load()?))
    }

    /// Pretty JSON view of the configuration, without the private key
    pub fn summary(&self) -> Result<String, Error> {
        Ok(serde_json::to_string_pretty(self.configuration.as_ref())?)
    }
}

#[cfg(test)]
mod tests {
    use relayer_configuration::mock::{manifest_json, variables, MemoryFiles, MANIFEST_PATH};
    use relayer_configuration::Error as ConfigurationError;

    use super::Context;
    use crate::core::Error;

    #[test]
    fn context_is_loaded_from_variables_and_manifest() {
        let files = MemoryFiles::new().with_file(MANIFEST_PATH, manifest_json(r#"{ "deviationPercentage": 1 }"#));

        let context = Context::load(variables(), files).unwrap();
        assert_eq!(context.configuration.chain_name(), "ethereum");

        let copy = context.clone();
        assert!(std::sync::Arc::ptr_eq(&copy.configuration, &context.configuration));
    }

    #[test]
    fn summary_does_not_leak_private_key() {
        let files = MemoryFiles::new().with_file(MANIFEST_PATH, manifest_json("{}"));

        let summary = Context::load(variables(), files).unwrap().summary().unwrap();
        assert!(summary.contains("\"chainName\": \"ethereum\""));
        assert!(!summary.contains("0xdeadbeef"));
    }

    #[test]
    fn configuration_errors_are_propagated() {
        let mut variables = variables();
        variables.remove("PRIVATE_KEY");

        let result = Context::load(variables, MemoryFiles::new());
        assert!(matches!(
            result,
            Err(Error::Configuration(ConfigurationError::MissingEnvironmentVariable(name))) if name == "PRIVATE_KEY"
        ));
    }
}
