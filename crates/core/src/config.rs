use crate::error::{DashboardError, DashboardResult};
use serde::Deserialize;

/// Root application configuration. Loaded from an optional TOML file and
/// environment variables with the prefix `CAMPAIGN_DASHBOARD__`.
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    #[serde(default = "default_node_id")]
    pub node_id: String,
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub metrics: MetricsConfig,
    #[serde(default)]
    pub simulator: SimulatorConfig,
    #[serde(default)]
    pub report: ReportConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ApiConfig {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_http_port")]
    pub http_port: u16,
    #[serde(default = "default_max_upload_bytes")]
    pub max_upload_bytes: usize,
}

#[derive(Debug, Clone, Deserialize)]
pub struct MetricsConfig {
    #[serde(default = "default_metrics_enabled")]
    pub enabled: bool,
    #[serde(default = "default_metrics_port")]
    pub port: u16,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SimulatorConfig {
    /// Upper bound of the simulated-investment slider.
    #[serde(default = "default_max_investment")]
    pub max_investment: f64,
    /// Seed used when a request does not carry its own.
    #[serde(default)]
    pub seed: Option<u64>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ReportConfig {
    #[serde(default = "default_currency_symbol")]
    pub currency_symbol: String,
    #[serde(default = "default_csv_file_name")]
    pub csv_file_name: String,
    #[serde(default = "default_pdf_file_name")]
    pub pdf_file_name: String,
}

// Default functions
fn default_node_id() -> String {
    "dashboard-01".to_string()
}
fn default_host() -> String {
    "0.0.0.0".to_string()
}
fn default_http_port() -> u16 {
    8080
}
fn default_max_upload_bytes() -> usize {
    1024 * 1024
}
fn default_metrics_enabled() -> bool {
    true
}
fn default_metrics_port() -> u16 {
    9091
}
fn default_max_investment() -> f64 {
    10_000.0
}
fn default_currency_symbol() -> String {
    "R$".to_string()
}
fn default_csv_file_name() -> String {
    "relatorio_campanha.csv".to_string()
}
fn default_pdf_file_name() -> String {
    "relatorio.pdf".to_string()
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            http_port: default_http_port(),
            max_upload_bytes: default_max_upload_bytes(),
        }
    }
}

impl Default for MetricsConfig {
    fn default() -> Self {
        Self {
            enabled: default_metrics_enabled(),
            port: default_metrics_port(),
        }
    }
}

impl Default for SimulatorConfig {
    fn default() -> Self {
        Self {
            max_investment: default_max_investment(),
            seed: None,
        }
    }
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            currency_symbol: default_currency_symbol(),
            csv_file_name: default_csv_file_name(),
            pdf_file_name: default_pdf_file_name(),
        }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            node_id: default_node_id(),
            api: ApiConfig::default(),
            metrics: MetricsConfig::default(),
            simulator: SimulatorConfig::default(),
            report: ReportConfig::default(),
        }
    }
}

impl AppConfig {
    /// Load configuration from an optional config file, then environment
    /// variables. Environment values win.
    pub fn load_from(path: Option<&str>) -> Result<Self, config::ConfigError> {
        let mut builder = config::Config::builder();
        if let Some(path) = path {
            builder = builder.add_source(config::File::with_name(path).required(true));
        }
        let builder = builder.add_source(
            config::Environment::with_prefix("CAMPAIGN_DASHBOARD")
                .separator("__")
                .try_parsing(true),
        );

        let config = builder.build()?;
        config.try_deserialize()
    }

    /// Reject settings the server cannot run with.
    pub fn validate(&self) -> DashboardResult<()> {
        if !self.simulator.max_investment.is_finite() || self.simulator.max_investment < 0.0 {
            return Err(DashboardError::Config(
                "simulator.max_investment must be a non-negative number".into(),
            ));
        }
        if self.api.max_upload_bytes == 0 {
            return Err(DashboardError::Config(
                "api.max_upload_bytes must be greater than zero".into(),
            ));
        }
        if self.metrics.enabled && self.metrics.port == self.api.http_port {
            return Err(DashboardError::Config(
                "metrics.port must differ from api.http_port".into(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = AppConfig::default();
        assert_eq!(config.api.http_port, 8080);
        assert_eq!(config.simulator.max_investment, 10_000.0);
        assert_eq!(config.report.currency_symbol, "R$");
        assert_eq!(config.report.csv_file_name, "relatorio_campanha.csv");
        assert!(config.simulator.seed.is_none());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_empty_source_falls_back_to_defaults() {
        let config: AppConfig = config::Config::builder()
            .build()
            .unwrap()
            .try_deserialize()
            .unwrap();
        assert_eq!(config.node_id, "dashboard-01");
        assert_eq!(config.metrics.port, 9091);
    }

    #[test]
    fn test_partial_override() {
        let config: AppConfig = config::Config::builder()
            .set_override("simulator.seed", 42)
            .unwrap()
            .set_override("api.http_port", 3000)
            .unwrap()
            .build()
            .unwrap()
            .try_deserialize()
            .unwrap();
        assert_eq!(config.simulator.seed, Some(42));
        assert_eq!(config.api.http_port, 3000);
        assert_eq!(config.api.host, "0.0.0.0");
    }

    #[test]
    fn test_validate_rejects_port_clash() {
        let mut config = AppConfig::default();
        config.metrics.port = config.api.http_port;
        assert!(config.validate().is_err());

        config.metrics.enabled = false;
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_negative_slider_bound() {
        let mut config = AppConfig::default();
        config.simulator.max_investment = -1.0;
        assert!(config.validate().is_err());
    }
}
