//! Campaign Dashboard: advertising-campaign metrics service.
//!
//! Main entry point that loads configuration and starts the server.

use clap::Parser;
use dashboard_api::ApiServer;
use dashboard_core::config::AppConfig;
use tracing::{error, info, warn};

#[derive(Parser, Debug)]
#[command(name = "campaign-dashboard")]
#[command(about = "Advertising-campaign metrics dashboard service")]
#[command(version)]
struct Cli {
    /// Config file (TOML, YAML or JSON; extension optional)
    #[arg(long, env = "CAMPAIGN_DASHBOARD_CONFIG")]
    config: Option<String>,

    /// HTTP port (overrides config)
    #[arg(long, env = "CAMPAIGN_DASHBOARD__API__HTTP_PORT")]
    http_port: Option<u16>,

    /// Prometheus exporter port (overrides config)
    #[arg(long, env = "CAMPAIGN_DASHBOARD__METRICS__PORT")]
    metrics_port: Option<u16>,

    /// Default seed for scenario simulations (overrides config)
    #[arg(long, env = "CAMPAIGN_DASHBOARD__SIMULATOR__SEED")]
    seed: Option<u64>,

    /// Do not start the Prometheus exporter
    #[arg(long, default_value_t = false)]
    no_metrics: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                "campaign_dashboard=info,dashboard_api=info,tower_http=info".into()
            }),
        )
        .json()
        .init();

    let cli = Cli::parse();

    info!("Campaign Dashboard starting up");

    // Load configuration
    let mut config = match AppConfig::load_from(cli.config.as_deref()) {
        Ok(config) => config,
        Err(e) if cli.config.is_some() => {
            return Err(anyhow::anyhow!("failed to load config file: {e}"));
        }
        Err(e) => {
            warn!(error = %e, "Failed to load config, using defaults");
            AppConfig::default()
        }
    };

    // Apply CLI overrides
    if let Some(port) = cli.http_port {
        config.api.http_port = port;
    }
    if let Some(port) = cli.metrics_port {
        config.metrics.port = port;
    }
    if let Some(seed) = cli.seed {
        config.simulator.seed = Some(seed);
    }
    if cli.no_metrics {
        config.metrics.enabled = false;
    }
    config.validate()?;

    info!(
        node_id = %config.node_id,
        http_port = config.api.http_port,
        metrics_enabled = config.metrics.enabled,
        max_investment = config.simulator.max_investment,
        seeded = config.simulator.seed.is_some(),
        "Configuration loaded"
    );

    let api_server = ApiServer::new(config);

    // Start metrics exporter
    if let Err(e) = api_server.start_metrics().await {
        error!(error = %e, "Failed to start metrics exporter");
    }

    info!("Campaign Dashboard is ready to serve traffic");

    // Start HTTP server (blocks until shutdown)
    api_server.start_http().await?;

    Ok(())
}
