use std::collections::HashMap;
use std::env;

use serde::Deserialize;
use tracing::warn;

use crate::configuration::DEFAULT_ADAPTER_CONTRACT_TYPE;
use crate::Error;

/// Snapshot of environment variables. Names are case-insensitive and stored lowercase.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Variables(HashMap<String, String>);

impl Variables {
    pub fn empty() -> Self {
        Self::default()
    }

    /// Snapshot the process environment. Variables whose name or value is not valid unicode are
    /// skipped.
    pub fn from_env() -> Self {
        env::vars_os()
            .filter_map(|(name, value)| match (name.into_string(), value.into_string()) {
                (Ok(name), Ok(value)) => Some((name, value)),
                (name, _) => {
                    let name = name.unwrap_or_else(|x| x.to_string_lossy().into_owned());
                    warn!(variable = %name, "skipping environment variable that is not valid unicode");
                    None
                },
            })
            .collect()
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.0.get(&name.to_lowercase()).map(|x| x.as_str())
    }

    pub fn insert(&mut self, name: &str, value: &str) {
        self.0.insert(name.to_lowercase(), value.to_string());
    }

    pub fn remove(&mut self, name: &str) -> Option<String> {
        self.0.remove(&name.to_lowercase())
    }

    /// Deserialize the variables the relayer needs. Empty values are treated as unset.
    pub(crate) fn resolve(&self) -> Result<EnvironmentVariables, Error> {
        let variables = self
            .0
            .iter()
            .filter(|(_, value)| !value.is_empty())
            .map(|(name, value)| (name.clone(), value.clone()));

        envy::from_iter(variables).map_err(|e| match e {
            envy::Error::MissingValue(name) => Error::MissingEnvironmentVariable(name.to_uppercase()),
            envy::Error::Custom(message) => Error::InvalidEnvironmentVariable(Self::with_uppercase_name(message)),
        })
    }

    /// `envy` names the variable in lowercase at the end of its message, restore the environment
    /// spelling and move it to the front.
    fn with_uppercase_name(message: String) -> String {
        match message.rsplit_once(" provided by ") {
            Some((reason, name)) => format!("{}: {}", name.to_uppercase(), reason),
            None => message,
        }
    }
}

impl From<HashMap<String, String>> for Variables {
    fn from(map: HashMap<String, String>) -> Self {
        Self(map.into_iter().map(|(name, value)| (name.to_lowercase(), value)).collect())
    }
}

impl<K: AsRef<str>, V: Into<String>> FromIterator<(K, V)> for Variables {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(iter.into_iter().map(|(name, value)| (name.as_ref().to_lowercase(), value.into())).collect())
    }
}

/// Typed view of the environment. Field declaration order is the order in which missing
/// variables are reported.
#[derive(Debug, Clone, Deserialize)]
pub(crate) struct EnvironmentVariables {
    pub manifest_file: String,
    pub relayer_iteration_interval: f64,
    pub rpc_url: String,
    pub private_key: String,
    pub unique_signers_count: f64,
    pub gas_limit: u64,
    pub expected_tx_delivery_time_in_ms: f64,
    pub fallback_offset_in_minutes: i64,
    pub historical_packages_gateway: String,
    pub historical_packages_data_service_id: String,

    pub healthcheck_ping_url: Option<String>,

    #[serde(default = "default_adapter_contract_type")]
    pub adapter_contract_type: String,

    pub is_arbitrum_network: Option<String>,
}

impl EnvironmentVariables {
    /// Only the exact string `true` enables the flag
    pub fn is_arbitrum_network(&self) -> bool {
        self.is_arbitrum_network.as_deref() == Some("true")
    }
}

fn default_adapter_contract_type() -> String {
    DEFAULT_ADAPTER_CONTRACT_TYPE.to_string()
}

#[cfg(test)]
mod tests {
    use super::Variables;
    use crate::mock::{required_variables, variables};
    use crate::Error;

    #[test]
    fn names_are_case_insensitive() {
        let mut variables = Variables::from_iter([("Rpc_Url", "http://localhost:8545")]);
        assert_eq!(variables.get("RPC_URL"), Some("http://localhost:8545"));
        assert_eq!(variables.get("rpc_url"), Some("http://localhost:8545"));

        variables.insert("GAS_LIMIT", "42");
        assert_eq!(variables.remove("gas_limit"), Some("42".to_string()));
        assert_eq!(variables.get("GAS_LIMIT"), None);
    }

    #[test]
    fn every_missing_required_variable_is_reported() {
        for (name, _) in required_variables() {
            let mut variables = variables();
            variables.remove(name);

            let result = variables.resolve();
            assert_eq!(result.err(), Some(Error::MissingEnvironmentVariable(name.to_string())));
        }
    }

    #[test]
    fn empty_required_variable_is_missing() {
        let mut variables = variables();
        variables.insert("RPC_URL", "");

        assert_eq!(variables.resolve().err(), Some(Error::MissingEnvironmentVariable("RPC_URL".to_string())));
    }

    #[test]
    fn numeric_variables_are_coerced() {
        let mut variables = variables();
        variables.insert("FALLBACK_OFFSET_IN_MINUTES", "-3");

        let resolved = variables.resolve().unwrap();
        assert_eq!(resolved.relayer_iteration_interval, 10000.0);
        assert_eq!(resolved.unique_signers_count, 3.0);
        assert_eq!(resolved.gas_limit, 1000000);
        assert_eq!(resolved.expected_tx_delivery_time_in_ms, 12000.0);
        assert_eq!(resolved.fallback_offset_in_minutes, -3);
    }

    #[test]
    fn number_variables_accept_fractions() {
        let mut variables = variables();
        variables.insert("RELAYER_ITERATION_INTERVAL", "2500.25");
        variables.insert("EXPECTED_TX_DELIVERY_TIME_IN_MS", "1500.5");
        variables.insert("UNIQUE_SIGNERS_COUNT", "2e0");

        let resolved = variables.resolve().unwrap();
        assert_eq!(resolved.relayer_iteration_interval, 2500.25);
        assert_eq!(resolved.expected_tx_delivery_time_in_ms, 1500.5);
        assert_eq!(resolved.unique_signers_count, 2.0);
    }

    #[test]
    fn integer_variables_reject_fractions() {
        for name in ["GAS_LIMIT", "FALLBACK_OFFSET_IN_MINUTES"] {
            let mut variables = variables();
            variables.insert(name, "10.5");

            assert!(matches!(variables.resolve(), Err(Error::InvalidEnvironmentVariable(_))), "variable {}", name);
        }
    }

    #[test]
    fn invalid_numeric_variable_is_rejected() {
        let mut variables = variables();
        variables.insert("GAS_LIMIT", "a lot");

        match variables.resolve() {
            Err(Error::InvalidEnvironmentVariable(message)) => {
                assert!(message.starts_with("GAS_LIMIT: "), "message {}", message);
                assert!(message.contains("'a lot'"), "message {}", message);
            },
            other => panic!("unexpected result {:?}", other.err()),
        }
    }

    #[test]
    fn empty_adapter_contract_type_uses_default() {
        let mut variables = variables();
        variables.insert("ADAPTER_CONTRACT_TYPE", "");

        assert_eq!(variables.resolve().unwrap().adapter_contract_type, "price-feeds");
    }

    #[cfg(unix)]
    #[test]
    fn non_unicode_process_variables_are_skipped() {
        use std::ffi::OsStr;
        use std::os::unix::ffi::OsStrExt;

        std::env::set_var("RELAYER_CONFIGURATION_TEST_NON_UNICODE", OsStr::from_bytes(b"\xff\xfe"));
        std::env::set_var("RELAYER_CONFIGURATION_TEST_UNICODE", "present");

        let variables = Variables::from_env();

        std::env::remove_var("RELAYER_CONFIGURATION_TEST_NON_UNICODE");
        std::env::remove_var("RELAYER_CONFIGURATION_TEST_UNICODE");

        assert_eq!(variables.get("RELAYER_CONFIGURATION_TEST_NON_UNICODE"), None);
        assert_eq!(variables.get("RELAYER_CONFIGURATION_TEST_UNICODE"), Some("present"));
    }

    #[test]
    fn optional_variables_have_defaults() {
        let resolved = variables().resolve().unwrap();

        assert_eq!(resolved.healthcheck_ping_url, None);
        assert_eq!(resolved.adapter_contract_type, "price-feeds");
        assert!(!resolved.is_arbitrum_network());
    }

    #[test]
    fn arbitrum_flag_requires_literal_true() {
        for (value, expected) in [("true", true), ("false", false), ("yes", false), ("TRUE", false), ("1", false)] {
            let mut variables = variables();
            variables.insert("IS_ARBITRUM_NETWORK", value);

            assert_eq!(variables.resolve().unwrap().is_arbitrum_network(), expected, "value {}", value);
        }
    }
}
