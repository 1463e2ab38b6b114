use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct GeneralConfig {
    #[serde(alias = "tick-rate-ms")]
    pub tick_rate_ms: u64,
    #[serde(alias = "refresh-interval-ms")]
    pub refresh_interval_ms: u64,
    #[serde(alias = "fetch-timeout-ms")]
    pub fetch_timeout_ms: u64,
    #[serde(alias = "default-view")]
    pub default_view: String,
    #[serde(alias = "show-all-containers")]
    pub show_all_containers: bool,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            tick_rate_ms: 250,
            refresh_interval_ms: 2000,
            fetch_timeout_ms: 5000,
            default_view: "containers".into(),
            show_all_containers: true,
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct DockerConfig {
    /// Empty means `DOCKER_HOST` or the platform socket.
    pub host: String,
}

impl DockerConfig {
    pub fn host(&self) -> Option<&str> {
        let host = self.host.trim();
        (!host.is_empty()).then_some(host)
    }
}
