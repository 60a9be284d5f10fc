pub mod config;
pub mod document;
pub mod logging;
pub mod model;
pub mod model_gateway;
pub mod path;
pub mod prompt;
pub mod providers;
pub mod session;

use anyhow::{Context, Result};
use reqwest::Client;
use std::io;
use std::time::Duration;
use tracing::info;

use config::Config;
use model_gateway::HttpModelGateway;
use session::run_session;

pub async fn run() -> Result<()> {
    dotenvy::dotenv().ok();
    // Checked before logging so a missing key never touches the log file.
    let cfg = Config::from_env()?;

    let _log_guard = logging::init();
    info!(version = env!("CARGO_PKG_VERSION"), "starting docqa");
    info!(
        model = %cfg.model,
        model_base_url = %cfg.model_base_url,
        temperature = cfg.temperature,
        model_timeout_secs = ?cfg.model_timeout_secs,
        "loaded runtime configuration"
    );

    let client = build_client(&cfg)?;
    let gateway = HttpModelGateway::new(&client, &cfg);

    let stdin = io::stdin();
    let stdout = io::stdout();
    run_session(
        &mut stdin.lock(),
        &mut stdout.lock(),
        &gateway,
        &cfg.system_prompt,
    )
    .await
}

fn build_client(cfg: &Config) -> Result<Client> {
    let mut builder = Client::builder();
    if let Some(secs) = cfg.model_timeout_secs {
        builder = builder.timeout(Duration::from_secs(secs));
    }
    builder.build().context("Failed to initialize HTTP client")
}
