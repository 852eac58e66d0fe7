use polycopy::config::CopyConfig;
use polycopy::execution::copy_engine;
use polycopy::polymarket::{DataClient, GammaClient};

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();
    init_tracing();

    // Failures are reported and the process still exits normally; a copy
    // run has no state to unwind.
    if let Err(e) = run().await {
        tracing::error!(error = %format!("{e:#}"), "Copy run aborted");
    }
}

async fn run() -> anyhow::Result<()> {
    let config = CopyConfig::from_env()?;

    let http = reqwest::Client::new();
    let data = DataClient::new(http.clone(), config.data_api_url.clone());
    let gamma = GammaClient::new(http, config.gamma_api_url.clone());

    let outcome = copy_engine::run_copy(&config, &data, &gamma).await?;
    tracing::info!(outcome = %outcome, "Copy run finished");

    Ok(())
}

fn init_tracing() {
    use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(fmt::layer())
        .init();
}
