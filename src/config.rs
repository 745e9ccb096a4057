use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Base URL of Genius' public API.
pub const DEFAULT_API_URL: &str = "https://api.genius.com/";

/// Base URL of the API backing genius.com itself.
pub const DEFAULT_WEB_URL: &str = "https://genius.com/api/";

/// Per-request timeout used when the caller does not pick one.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(3);

/// Connection settings for a Genius client.
///
/// The library never reads or writes this on its own; it is serializable so
/// the embedding application can keep it wherever it keeps its settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClientConfig {
    /// Bearer token sent to the public API
    pub credential: String,
    /// Upper bound for each request
    #[serde(with = "duration_secs")]
    pub timeout: Duration,
    /// Base URL of the public API, ending in `/`
    pub api_base_url: String,
    /// Base URL of the web API, ending in `/`
    pub web_base_url: String,
}

impl ClientConfig {
    /// Create a config for `credential` with the default URLs and timeout.
    pub fn new(credential: impl Into<String>) -> Self {
        Self {
            credential: credential.into(),
            timeout: DEFAULT_TIMEOUT,
            api_base_url: DEFAULT_API_URL.to_string(),
            web_base_url: DEFAULT_WEB_URL.to_string(),
        }
    }

    /// Point both API surfaces somewhere else.
    ///
    /// This is useful for testing against a local fixture server.
    pub fn with_base_urls(
        mut self,
        api_base_url: impl Into<String>,
        web_base_url: impl Into<String>,
    ) -> Self {
        self.api_base_url = api_base_url.into();
        self.web_base_url = web_base_url.into();
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Serialize config to JSON string
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    /// Deserialize config from JSON string
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}

mod duration_secs {
    use serde::{Deserialize, Deserializer, Serializer};
    use std::time::Duration;

    pub fn serialize<S: Serializer>(value: &Duration, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_f64(value.as_secs_f64())
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Duration, D::Error> {
        let secs = f64::deserialize(deserializer)?;
        Duration::try_from_secs_f64(secs).map_err(serde::de::Error::custom)
    }
}
