use indexmap::IndexMap;
use serde::Deserialize;
use serde_json::Value;

use crate::Error;

/// Deployment descriptor of a relayer: target chain, adapter contract, feeds to relay and the
/// thresholds that should trigger an update.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Manifest {
    pub chain: ChainConfiguration,
    pub adapter_contract: String,
    pub data_service_id: String,

    /// Feed metadata is not interpreted, only the identifiers are used. Keys keep the order they
    /// have in the file.
    pub price_feeds: IndexMap<String, Value>,

    pub update_triggers: UpdateTriggers,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ChainConfiguration {
    pub name: String,
    pub id: u64,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateTriggers {
    #[serde(default)]
    time_since_last_update_in_milliseconds: Option<f64>,

    #[serde(default)]
    deviation_percentage: Option<f64>,
}

impl UpdateTriggers {
    pub fn new(time_since_last_update_in_milliseconds: Option<f64>, deviation_percentage: Option<f64>) -> Self {
        Self {
            time_since_last_update_in_milliseconds,
            deviation_percentage,
        }
    }

    /// Returns the time trigger, a value of zero means the trigger is disabled
    pub fn time_since_last_update_in_milliseconds(&self) -> Option<f64> {
        self.time_since_last_update_in_milliseconds.filter(|x| *x != 0.0)
    }

    /// Returns the deviation trigger, a value of zero means the trigger is disabled
    pub fn deviation_percentage(&self) -> Option<f64> {
        self.deviation_percentage.filter(|x| *x != 0.0)
    }
}

impl Manifest {
    /// Parse the manifest content read from `path`. Both syntax errors and content that does not
    /// match the manifest shape are rejected.
    pub fn from_json(path: &str, content: &str) -> Result<Self, Error> {
        serde_json::from_str(content).map_err(|e| Error::InvalidManifestFormat {
            path: path.to_string(),
            reason: e.to_string(),
        })
    }

    /// Identifiers of the feeds to relay, in manifest order
    pub fn data_feeds(&self) -> Vec<String> {
        self.price_feeds.keys().cloned().collect()
    }
}
