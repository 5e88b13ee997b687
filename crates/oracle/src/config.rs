use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OracleConfig {
    pub base_url: String,
    pub model: String,
    /// Pinned to the minimum so repeated calls with identical prompts are as
    /// reproducible as the model allows.
    pub temperature: f32,
}

impl Default for OracleConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:11434".to_string(),
            model: "llama3".to_string(),
            temperature: 0.0,
        }
    }
}

impl OracleConfig {
    /// Environment overrides for the entry point. Algorithmic components
    /// only ever see the resolved struct.
    pub fn from_env() -> Self {
        let mut config = Self::default();
        if let Ok(base_url) = std::env::var("ORACLE_BASE_URL") {
            config.base_url = base_url;
        }
        if let Ok(model) = std::env::var("ORACLE_MODEL") {
            config.model = model;
        }
        config
    }
}
