use relayer_configuration::{Filesystem, Variables};
use tracing::{info, warn};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::Registry;

use crate::core::context::{Context, VerbosityConfiguration};
use crate::core::{Error, Fmt};

mod core;

fn main() -> Result<(), Error> {
    let dotenv = dotenvy::dotenv();

    let variables = Variables::from_env();
    let verbosity = VerbosityConfiguration::from_variables(&variables);

    let subscriber = Registry::default().with(Fmt::layer(&verbosity));
    tracing::subscriber::set_global_default(subscriber).map_err(|e| Error::Tracing(e.to_string()))?;

    match dotenv {
        Ok(path) => info!(path = %path.display(), "environment file loaded"),
        Err(e) if e.not_found() => warn!("no environment file found, using process environment only"),
        Err(e) => return Err(e.into()),
    }

    let context = Context::load(variables, Filesystem)?;
    info!(
        chain = context.configuration.chain_name(),
        chain_id = context.configuration.chain_id(),
        feeds = context.configuration.data_feeds().len(),
        "relayer configuration loaded"
    );

    println!("{}", context.summary()?);

    Ok(())
}
