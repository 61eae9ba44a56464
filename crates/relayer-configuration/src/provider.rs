use std::path::Path;

use tracing::{debug, instrument};

use crate::configuration::ResolvedConfiguration;
use crate::environment::Variables;
use crate::manifest::Manifest;
use crate::reader::{FileReader, Filesystem};
use crate::{log_if_error, Error};

/// Source of the relayer configuration
pub trait ConfigurationProvider {
    fn load(&self) -> Result<ResolvedConfiguration, Error>;
}

/// Resolves the configuration from a snapshot of environment variables and a manifest file
/// whose path is given by `MANIFEST_FILE`.
#[derive(Debug, Clone)]
pub struct FilesystemConfigurationProvider<R: FileReader = Filesystem> {
    variables: Variables,
    files: R,
}

impl<R: FileReader> FilesystemConfigurationProvider<R> {
    pub fn with_reader(variables: Variables, files: R) -> Self {
        Self { variables, files }
    }

    fn read_manifest(&self, path: &str) -> Result<Manifest, Error> {
        let content = self.files.read_to_string(Path::new(path)).map_err(|e| Error::ManifestUnreadable {
            path: path.to_string(),
            reason: e.to_string(),
        })?;

        Manifest::from_json(path, &content)
    }
}

impl<R: FileReader> ConfigurationProvider for FilesystemConfigurationProvider<R> {
    #[instrument(name = "load_configuration", skip(self))]
    fn load(&self) -> Result<ResolvedConfiguration, Error> {
        let environment = log_if_error!(self.variables.resolve())?;
        let manifest = log_if_error!(self.read_manifest(&environment.manifest_file))?;

        debug!(path = %environment.manifest_file, chain = %manifest.chain.name, feeds = manifest.price_feeds.len(), "manifest loaded");

        let configuration = ResolvedConfiguration::assemble(environment, manifest);
        debug!(conditions = ?configuration.update_conditions(), "update conditions resolved");

        Ok(configuration)
    }
}
