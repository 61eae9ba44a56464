use std::collections::HashMap;
use std::io;
use std::path::{Path, PathBuf};

use crate::environment::Variables;
use crate::reader::FileReader;

pub const MANIFEST_PATH: &str = "/relayer/manifests/ethereum.json";

/// In-memory file system, reads of unknown paths fail with [`io::ErrorKind::NotFound`]
#[derive(Debug, Clone, Default)]
pub struct MemoryFiles(HashMap<PathBuf, String>);

impl MemoryFiles {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_file(mut self, path: impl Into<PathBuf>, content: impl Into<String>) -> Self {
        self.0.insert(path.into(), content.into());
        self
    }
}

impl FileReader for MemoryFiles {
    fn read_to_string(&self, path: &Path) -> io::Result<String> {
        self.0
            .get(path)
            .cloned()
            .ok_or_else(|| io::Error::new(io::ErrorKind::NotFound, format!("{} not found", path.display())))
    }
}

/// Returns a manifest with three feeds and the given `updateTriggers` object
pub fn manifest_json(update_triggers: &str) -> String {
    format!(
        r#"{{
            "chain": {{ "name": "ethereum", "id": 1 }},
            "adapterContract": "0x1234567890abcdef1234567890abcdef12345678",
            "dataServiceId": "redstone-primary-prod",
            "priceFeeds": {{
                "ETH": {{ "priceFeedContract": "0x01" }},
                "BTC": {{ "priceFeedContract": "0x02" }},
                "USDC": {{}}
            }},
            "updateTriggers": {}
        }}"#,
        update_triggers
    )
}

/// Every required variable set to a valid value, the manifest pointing to [`MANIFEST_PATH`]
pub fn required_variables() -> Vec<(&'static str, &'static str)> {
    vec![
        ("MANIFEST_FILE", MANIFEST_PATH),
        ("RELAYER_ITERATION_INTERVAL", "10000"),
        ("RPC_URL", "https://rpc.example.org"),
        ("PRIVATE_KEY", "0xdeadbeef"),
        ("UNIQUE_SIGNERS_COUNT", "3"),
        ("GAS_LIMIT", "1000000"),
        ("EXPECTED_TX_DELIVERY_TIME_IN_MS", "12000"),
        ("FALLBACK_OFFSET_IN_MINUTES", "0"),
        ("HISTORICAL_PACKAGES_GATEWAY", "https://gateway.example.org"),
        ("HISTORICAL_PACKAGES_DATA_SERVICE_ID", "redstone-primary-prod"),
    ]
}

pub fn variables() -> Variables {
    Variables::from_iter(required_variables())
}
