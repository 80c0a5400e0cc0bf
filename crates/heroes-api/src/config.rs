//! Client configuration.

/// Configuration for the heroes API client.
#[derive(Debug, Clone)]
pub struct HeroApiConfig {
    /// Origin of the heroes web API (scheme, host, port — no trailing slash).
    /// The collection lives at `{base_url}/api/heroes`.
    pub base_url: String,

    /// Request timeout in seconds, applied at the transport level.
    pub timeout_seconds: u64,
}

impl Default for HeroApiConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:3000".to_string(),
            timeout_seconds: 30,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_points_at_local_server() {
        let config = HeroApiConfig::default();
        assert_eq!(config.base_url, "http://localhost:3000");
        assert_eq!(config.timeout_seconds, 30);
    }
}
