//! Suspect ledger configuration.

use serde::{Deserialize, Serialize};

use crate::config::{ConfigResult, Validate};
use crate::data_structures::suspect_ledger::{SuspectLedgerConfig, DEFAULT_BUCKET_COUNT};
use crate::error::config::ConfigError;

fn default_bucket_count() -> usize {
    DEFAULT_BUCKET_COUNT
}

/// Configuration for the suspect ledger hash table.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LedgerConfig {
    /// Number of hash buckets. Fixed for the whole session; a prime spreads
    /// the checksum hash best.
    #[serde(default = "default_bucket_count")]
    pub bucket_count: usize,
}

impl Default for LedgerConfig {
    fn default() -> Self {
        Self {
            bucket_count: default_bucket_count(),
        }
    }
}

impl LedgerConfig {
    /// Translates the application-level settings into the structure-level
    /// configuration consumed by the ledger itself.
    pub fn to_structure_config(&self) -> SuspectLedgerConfig {
        SuspectLedgerConfig::new().with_bucket_count(self.bucket_count)
    }
}

fn is_prime(n: usize) -> bool {
    if n < 2 {
        return false;
    }
    let mut d = 2;
    while d * d <= n {
        if n % d == 0 {
            return false;
        }
        d += 1;
    }
    true
}

impl Validate for LedgerConfig {
    fn validate(&self) -> ConfigResult<()> {
        if self.bucket_count == 0 {
            return Err(ConfigError::ValueOutOfRange {
                key: "ledger.bucket_count".to_string(),
                message: "must be at least 1".to_string(),
            });
        }
        if !is_prime(self.bucket_count) {
            tracing::warn!(
                bucket_count = self.bucket_count,
                "ledger bucket count is not prime; the checksum hash will cluster more"
            );
        }
        Ok(())
    }
}
