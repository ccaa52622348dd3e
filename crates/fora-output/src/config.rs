//! Sink configuration.
//!
//! The pipeline itself never opens a connection; these values travel with
//! the rendered line protocol so the operator's writer knows where to send
//! it. Read from the same environment variables the original deployment
//! used, with its defaults.

/// Where the time-series writer should deliver the points.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SinkConfig {
    pub host: String,
    pub port: u16,
    pub org: String,
    pub bucket: String,
    /// API token, if the deployment requires one. Never logged.
    pub token: Option<String>,
}

impl Default for SinkConfig {
    fn default() -> Self {
        Self {
            host: "rock-4c-plus".to_string(),
            port: 8086,
            org: "info.pkern.health".to_string(),
            bucket: "blood_ifora_hm".to_string(),
            token: None,
        }
    }
}

impl SinkConfig {
    /// Build the configuration from the environment, falling back to the
    /// defaults for anything unset. An unparsable `INFLUXDB_PORT` falls back
    /// as well rather than failing a run that may never write.
    pub fn from_env() -> Self {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    fn from_lookup(get: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();
        Self {
            host: var_or(&get, "INFLUXDB_HOST", defaults.host),
            port: get("INFLUXDB_PORT")
                .and_then(|raw| raw.trim().parse().ok())
                .unwrap_or(defaults.port),
            org: var_or(&get, "INFLUXDB_ORG", defaults.org),
            bucket: var_or(&get, "INFLUX_BUCKET", defaults.bucket),
            token: get("INFLUXDB_TOKEN").filter(|t| !t.is_empty()),
        }
    }

    /// Base URL of the sink's HTTP API.
    pub fn url(&self) -> String {
        format!("http://{}:{}", self.host, self.port)
    }
}

fn var_or(get: &impl Fn(&str) -> Option<String>, name: &str, default: String) -> String {
    match get(name) {
        Some(value) if !value.trim().is_empty() => value,
        _ => default,
    }
}
