use serde::{Deserialize, Serialize};

/// Sampling budget for one kind of oracle request.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq)]
pub struct Sampling {
    pub temperature: f32,
    pub max_tokens: u32,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct OracleSettings {
    /// Chat-completions URL.
    pub endpoint: String,
    pub model: String,

    /// Environment variable holding the bearer key. Unset means no auth header.
    pub api_key_env: String,

    pub seed: Sampling,
    pub validate: Sampling,
    pub hint: Sampling,
    pub solve: Sampling,
}

impl Default for OracleSettings {
    fn default() -> Self {
        Self {
            endpoint: "https://api.openai.com/v1/chat/completions".into(),
            model: "gpt-4o-mini".into(),
            api_key_env: "OPENAI_API_KEY".into(),
            seed: Sampling {
                temperature: 0.8,
                max_tokens: 50,
            },
            validate: Sampling {
                temperature: 0.0,
                max_tokens: 100,
            },
            hint: Sampling {
                temperature: 0.7,
                max_tokens: 10,
            },
            solve: Sampling {
                temperature: 0.7,
                max_tokens: 200,
            },
        }
    }
}

impl OracleSettings {
    pub fn api_key(&self) -> Option<String> {
        std::env::var(&self.api_key_env)
            .ok()
            .filter(|key| !key.trim().is_empty())
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct GameSettings {
    /// Oracle attempts at a seed pair before using a built-in one.
    pub seed_attempts: u32,

    /// Fixed seed for picking built-in pairs; random when unset.
    pub rng_seed: Option<u64>,
}

impl Default for GameSettings {
    fn default() -> Self {
        Self {
            seed_attempts: 2,
            rng_seed: None,
        }
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Default)]
#[serde(default)]
pub struct Settings {
    pub oracle: OracleSettings,
    pub game: GameSettings,
}
