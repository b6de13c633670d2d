//! `[planner]` section.

use serde::{Deserialize, Serialize};

/// Chat completions planner configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlannerSection {
    #[serde(default = "default_api_url")]
    pub api_url: String,

    /// Usually `"${OPENAI_API_KEY}"`.
    #[serde(default)]
    pub api_key: Option<String>,

    /// Falls back to `$MODEL`.
    #[serde(default)]
    pub model: Option<String>,

    #[serde(default)]
    pub temperature: Option<f32>,

    /// Replaces the built-in instructions.
    #[serde(default)]
    pub system_prompt: Option<String>,
}

impl Default for PlannerSection {
    fn default() -> Self {
        Self {
            api_url: default_api_url(),
            api_key: None,
            model: None,
            temperature: None,
            system_prompt: None,
        }
    }
}

fn default_api_url() -> String {
    "https://api.openai.com/v1/chat/completions".to_string()
}
