use anyhow::Context;
use rust_decimal::Decimal;
use std::env;

const DEFAULT_DATA_API_URL: &str = "https://data-api.polymarket.com";
const DEFAULT_CLOB_API_URL: &str = "https://clob.polymarket.com";
const DEFAULT_GAMMA_API_URL: &str = "https://gamma-api.polymarket.com";

/// Immutable configuration for a single copy run.
///
/// Loaded once in `main` and passed by reference into each component.
#[derive(Debug, Clone)]
pub struct CopyConfig {
    /// Wallet whose activity feed is copied.
    pub target_address: String,
    /// Account holding funds and positions on our side.
    pub funder_address: String,
    /// Hex signing key, with or without `0x` prefix.
    pub private_key: String,
    /// 0 = EOA, 1 = email/magic proxy, 2 = browser proxy.
    pub signature_type: u8,
    /// Fixed notional (USDC) spent on each copied bet.
    pub bet_amount: Decimal,
    /// Preview only when true; the order is never submitted.
    pub dry_run: bool,

    pub data_api_url: String,
    pub clob_api_url: String,
    pub gamma_api_url: String,
}

impl CopyConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        let signature_type: u8 = env::var("SIGNATURE_TYPE")
            .unwrap_or_else(|_| "1".into())
            .parse()
            .context("SIGNATURE_TYPE must be an integer")?;
        if signature_type > 2 {
            anyhow::bail!("SIGNATURE_TYPE must be 0, 1 or 2, got {signature_type}");
        }

        let bet_amount: Decimal = env::var("BET_AMOUNT")
            .unwrap_or_else(|_| "50".into())
            .parse()
            .context("BET_AMOUNT must be a decimal amount")?;

        Ok(Self {
            target_address: env::var("TARGET_ADDRESS").context("TARGET_ADDRESS must be set")?,
            funder_address: env::var("FUNDER_ADDRESS").context("FUNDER_ADDRESS must be set")?,
            private_key: env::var("PRIVATE_KEY").context("PRIVATE_KEY must be set")?,
            signature_type,
            bet_amount,
            dry_run: env::var("DRY_RUN")
                .unwrap_or_else(|_| "true".into())
                .parse()
                .unwrap_or(true),

            data_api_url: env::var("DATA_API_URL")
                .unwrap_or_else(|_| DEFAULT_DATA_API_URL.into()),
            clob_api_url: env::var("CLOB_API_URL")
                .unwrap_or_else(|_| DEFAULT_CLOB_API_URL.into()),
            gamma_api_url: env::var("GAMMA_API_URL")
                .unwrap_or_else(|_| DEFAULT_GAMMA_API_URL.into()),
        })
    }
}
