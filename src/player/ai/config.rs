use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

const CONFIG_PATH: &str = "ai_config.json";

static CONFIG: Lazy<AIConfig> = Lazy::new(AIConfig::load_or_default);

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AIConfig {
    pub version: String,
    pub search: SearchConfig,
    pub selfplay: SelfPlaySettings,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchConfig {
    /// Wall-clock budget for one alpha-beta root search
    pub time_budget_ms: u64,
    /// Depth used by the custom player
    pub custom_ply: usize,
    /// Depth for minimax and alpha-beta players when none is given
    pub default_ply: usize,
    pub opening_book: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SelfPlaySettings {
    pub max_moves: usize,
}

impl AIConfig {
    pub fn load() -> anyhow::Result<Self> {
        Self::load_from(CONFIG_PATH)
    }

    pub fn load_from(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let config_str = std::fs::read_to_string(path)?;
        let config: AIConfig = serde_json::from_str(&config_str)?;
        Ok(config)
    }

    pub fn load_or_default() -> Self {
        match Self::load() {
            Ok(config) => {
                tracing::debug!(path = CONFIG_PATH, "loaded AI config");
                config
            }
            Err(err) => {
                tracing::debug!(path = CONFIG_PATH, %err, "using default AI config");
                Self::default()
            }
        }
    }

    /// Process-wide config, read once on first use.
    pub fn get() -> &'static AIConfig {
        &CONFIG
    }
}

impl SearchConfig {
    pub fn time_budget(&self) -> Duration {
        Duration::from_millis(self.time_budget_ms)
    }
}

impl Default for AIConfig {
    fn default() -> Self {
        AIConfig {
            version: "1.0".to_string(),
            search: SearchConfig::default(),
            selfplay: SelfPlaySettings::default(),
        }
    }
}

impl Default for SearchConfig {
    fn default() -> Self {
        SearchConfig {
            time_budget_ms: 10_000,
            custom_ply: 9,
            default_ply: 4,
            opening_book: true,
        }
    }
}

impl Default for SelfPlaySettings {
    fn default() -> Self {
        SelfPlaySettings { max_moves: 500 }
    }
}
