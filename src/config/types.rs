use serde::{Deserialize, Serialize};

/// Root configuration container.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub api: ApiConfig,
}

/// Remote endpoint settings.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Address of the user listing (e.g., "https://jsonplaceholder.typicode.com/users").
    #[serde(default)]
    pub url: Option<String>,
}

impl Config {
    /// Config pointing at `url`.
    pub fn with_api_url(url: impl Into<String>) -> Self {
        Self {
            api: ApiConfig {
                url: Some(url.into()),
            },
        }
    }
}
