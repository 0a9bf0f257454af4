use serde::{Deserialize, Serialize};

/// Root configuration container.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub ui: UiConfig,
    /// Quick links shown in the navigation header.
    #[serde(default = "default_pinned")]
    pub pinned: Vec<PinnedProfile>,
}

/// GitHub API endpoint settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Base URL of the REST API (scheme + host).
    #[serde(default = "default_base_url")]
    pub base_url: String,
}

/// UI loop settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UiConfig {
    /// Render tick interval in milliseconds (default: 250).
    #[serde(default = "default_tick_rate_ms")]
    pub tick_rate_ms: u64,
}

/// A profile pinned in the navigation header.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PinnedProfile {
    /// Display label in the header.
    pub label: String,
    /// Username the link navigates to.
    pub username: String,
}

fn default_base_url() -> String {
    "https://api.github.com".to_string()
}

fn default_tick_rate_ms() -> u64 {
    250
}

fn default_pinned() -> Vec<PinnedProfile> {
    vec![
        PinnedProfile {
            label: "James".to_string(),
            username: "jimmynono".to_string(),
        },
        PinnedProfile {
            label: "Chris".to_string(),
            username: "rainycitycoder".to_string(),
        },
    ]
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
        }
    }
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            tick_rate_ms: default_tick_rate_ms(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api: ApiConfig::default(),
            ui: UiConfig::default(),
            pinned: default_pinned(),
        }
    }
}
