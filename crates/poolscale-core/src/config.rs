//! Policy configuration parser.
//!
//! The five tunables as an explicit immutable struct, loadable from a TOML
//! file. The orchestrator constructs this once and hands it to the policy;
//! there are no process-global defaults.

use serde::{Deserialize, Serialize};
use std::path::Path;

/// Tunables for the scaling policy.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PolicyConfig {
    /// Floor on pool size; the policy scales up to reach it.
    pub min_workers: u32,
    /// Ceiling on pool size; scale-ups never exceed it.
    pub max_workers: u32,
    /// Busy-queue length strictly above which a scale-up is issued.
    pub max_queue_size: u32,
    /// Idle seconds after which a free worker becomes retire-eligible.
    pub max_idle_secs: u64,
    /// Workers added per queue-pressure scale-up.
    pub scale_up_step: u32,
}

impl Default for PolicyConfig {
    fn default() -> Self {
        Self {
            min_workers: 1,
            max_workers: 10,
            max_queue_size: 5,
            max_idle_secs: 120,
            scale_up_step: 1,
        }
    }
}

impl PolicyConfig {
    pub fn from_file(path: &Path) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: PolicyConfig = toml::from_str(&content)?;
        Ok(config)
    }

    pub fn to_toml_string(&self) -> anyhow::Result<String> {
        Ok(toml::to_string_pretty(self)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let config = PolicyConfig::default();
        assert_eq!(config.min_workers, 1);
        assert_eq!(config.max_workers, 10);
        assert_eq!(config.scale_up_step, 1);
    }

    #[test]
    fn test_parse_partial() {
        let toml_str = r#"
min_workers = 2
max_workers = 20
"#;
        let config: PolicyConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.min_workers, 2);
        assert_eq!(config.max_workers, 20);
        // Unspecified fields keep their defaults.
        assert_eq!(config.max_idle_secs, 120);
    }

    #[test]
    fn test_dump_roundtrip() {
        let config = PolicyConfig {
            max_queue_size: 3,
            ..Default::default()
        };
        let toml_str = config.to_toml_string().unwrap();
        assert!(toml_str.contains("max_queue_size = 3"));

        let back: PolicyConfig = toml::from_str(&toml_str).unwrap();
        assert_eq!(back, config);
    }
}
