use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::Layer;

use crate::core::context::VerbosityConfiguration;

pub struct Fmt;

impl Fmt {
    /// Compact, uncoloured output for the relayer logs, filtered at the configured level
    pub fn layer<S>(verbosity: &VerbosityConfiguration) -> impl Layer<S>
    where
        S: for<'span> tracing_subscriber::registry::LookupSpan<'span> + tracing::Subscriber,
    {
        tracing_subscriber::fmt::layer()
            .with_ansi(false)
            .with_target(false)
            .compact()
            .with_filter(verbosity.level_filter())
    }
}

impl VerbosityConfiguration {
    pub fn level_filter(&self) -> LevelFilter {
        match self {
            VerbosityConfiguration::Debug => LevelFilter::DEBUG,
            VerbosityConfiguration::Info => LevelFilter::INFO,
        }
    }
}
