use std::fmt::{Debug, Formatter};

use serde::Serialize;

use crate::condition::UpdateCondition;
use crate::environment::EnvironmentVariables;
use crate::manifest::Manifest;

pub const DEFAULT_ADAPTER_CONTRACT_TYPE: &str = "price-feeds";

/// Configuration of a relayer process, assembled once from the environment and the manifest.
///
/// Fields can only be read, a value is never modified after construction. Share it across
/// workers behind an [`std::sync::Arc`]. The private key is never serialized and is redacted
/// from the [`Debug`] representation.
#[derive(Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResolvedConfiguration {
    relayer_iteration_interval: f64,
    update_price_interval: Option<f64>,
    rpc_url: String,
    chain_name: String,
    chain_id: u64,

    #[serde(skip_serializing)]
    private_key: String,

    adapter_contract_address: String,
    data_service_id: String,
    unique_signers_count: f64,
    data_feeds: Vec<String>,
    gas_limit: u64,
    update_conditions: Vec<UpdateCondition>,
    min_deviation_percentage: Option<f64>,
    fallback_deviation_check_offset_in_minutes: i64,
    fallback_time_offset_in_minutes: i64,
    healthcheck_ping_url: Option<String>,
    adapter_contract_type: String,

    #[serde(rename = "expectedTxDeliveryTimeInMS")]
    expected_tx_delivery_time_in_ms: f64,

    is_arbitrum_network: bool,
    historical_packages_gateway: String,
    historical_packages_data_service_id: String,
}

impl ResolvedConfiguration {
    pub(crate) fn assemble(environment: EnvironmentVariables, manifest: Manifest) -> Self {
        let fallback_offset_in_minutes = environment.fallback_offset_in_minutes;
        let update_conditions = UpdateCondition::derive(&manifest.update_triggers, fallback_offset_in_minutes);
        let is_arbitrum_network = environment.is_arbitrum_network();
        let data_feeds = manifest.data_feeds();

        Self {
            relayer_iteration_interval: environment.relayer_iteration_interval,
            update_price_interval: manifest.update_triggers.time_since_last_update_in_milliseconds(),
            rpc_url: environment.rpc_url,
            chain_name: manifest.chain.name,
            chain_id: manifest.chain.id,
            private_key: environment.private_key,
            adapter_contract_address: manifest.adapter_contract,
            data_service_id: manifest.data_service_id,
            unique_signers_count: environment.unique_signers_count,
            data_feeds,
            gas_limit: environment.gas_limit,
            update_conditions,
            min_deviation_percentage: manifest.update_triggers.deviation_percentage(),
            fallback_deviation_check_offset_in_minutes: fallback_offset_in_minutes,
            fallback_time_offset_in_minutes: fallback_offset_in_minutes,
            healthcheck_ping_url: environment.healthcheck_ping_url,
            adapter_contract_type: environment.adapter_contract_type,
            expected_tx_delivery_time_in_ms: environment.expected_tx_delivery_time_in_ms,
            is_arbitrum_network,
            historical_packages_gateway: environment.historical_packages_gateway,
            historical_packages_data_service_id: environment.historical_packages_data_service_id,
        }
    }

    /// Delay between two relayer iterations, in milliseconds
    pub fn relayer_iteration_interval(&self) -> f64 {
        self.relayer_iteration_interval
    }

    /// Maximum time between two price updates in milliseconds, if the time trigger is enabled
    pub fn update_price_interval(&self) -> Option<f64> {
        self.update_price_interval
    }

    pub fn rpc_url(&self) -> &str {
        &self.rpc_url
    }

    pub fn chain_name(&self) -> &str {
        &self.chain_name
    }

    pub fn chain_id(&self) -> u64 {
        self.chain_id
    }

    pub fn private_key(&self) -> &str {
        &self.private_key
    }

    pub fn adapter_contract_address(&self) -> &str {
        &self.adapter_contract_address
    }

    pub fn data_service_id(&self) -> &str {
        &self.data_service_id
    }

    pub fn unique_signers_count(&self) -> f64 {
        self.unique_signers_count
    }

    pub fn data_feeds(&self) -> &[String] {
        &self.data_feeds
    }

    pub fn gas_limit(&self) -> u64 {
        self.gas_limit
    }

    pub fn update_conditions(&self) -> &[UpdateCondition] {
        &self.update_conditions
    }

    pub fn min_deviation_percentage(&self) -> Option<f64> {
        self.min_deviation_percentage
    }

    pub fn fallback_deviation_check_offset_in_minutes(&self) -> i64 {
        self.fallback_deviation_check_offset_in_minutes
    }

    pub fn fallback_time_offset_in_minutes(&self) -> i64 {
        self.fallback_time_offset_in_minutes
    }

    pub fn healthcheck_ping_url(&self) -> Option<&str> {
        self.healthcheck_ping_url.as_deref()
    }

    pub fn adapter_contract_type(&self) -> &str {
        &self.adapter_contract_type
    }

    pub fn expected_tx_delivery_time_in_ms(&self) -> f64 {
        self.expected_tx_delivery_time_in_ms
    }

    pub fn is_arbitrum_network(&self) -> bool {
        self.is_arbitrum_network
    }

    pub fn historical_packages_gateway(&self) -> &str {
        &self.historical_packages_gateway
    }

    pub fn historical_packages_data_service_id(&self) -> &str {
        &self.historical_packages_data_service_id
    }
}

impl Debug for ResolvedConfiguration {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ResolvedConfiguration")
            .field("relayer_iteration_interval", &self.relayer_iteration_interval)
            .field("update_price_interval", &self.update_price_interval)
            .field("rpc_url", &self.rpc_url)
            .field("chain_name", &self.chain_name)
            .field("chain_id", &self.chain_id)
            .field("private_key", &"<redacted>")
            .field("adapter_contract_address", &self.adapter_contract_address)
            .field("data_service_id", &self.data_service_id)
            .field("unique_signers_count", &self.unique_signers_count)
            .field("data_feeds", &self.data_feeds)
            .field("gas_limit", &self.gas_limit)
            .field("update_conditions", &self.update_conditions)
            .field("min_deviation_percentage", &self.min_deviation_percentage)
            .field("fallback_deviation_check_offset_in_minutes", &self.fallback_deviation_check_offset_in_minutes)
            .field("fallback_time_offset_in_minutes", &self.fallback_time_offset_in_minutes)
            .field("healthcheck_ping_url", &self.healthcheck_ping_url)
            .field("adapter_contract_type", &self.adapter_contract_type)
            .field("expected_tx_delivery_time_in_ms", &self.expected_tx_delivery_time_in_ms)
            .field("is_arbitrum_network", &self.is_arbitrum_network)
            .field("historical_packages_gateway", &self.historical_packages_gateway)
            .field("historical_packages_data_service_id", &self.historical_packages_data_service_id)
            .finish()
    }
}
