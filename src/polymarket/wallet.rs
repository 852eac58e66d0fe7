use std::str::FromStr;

use alloy::signers::local::PrivateKeySigner;
use polymarket_client_sdk::auth::state::Authenticated;
use polymarket_client_sdk::auth::Normal;
use polymarket_client_sdk::auth::Signer;
use polymarket_client_sdk::clob::client::{Client, Config};
use polymarket_client_sdk::clob::types::SignatureType;
use polymarket_client_sdk::POLYGON;

/// Wraps the authenticated Polymarket SDK client and signer.
///
/// The private key is used once during construction and never stored as a
/// string.
pub struct PolymarketWallet {
    signer: PrivateKeySigner,
    client: Client<Authenticated<Normal>>,
}

impl PolymarketWallet {
    /// Authenticate against the CLOB, deriving or creating API credentials
    /// as needed.
    ///
    /// * `private_key` — hex-encoded, with or without `0x` prefix.
    /// * `signature_type` — 0 = EOA wallet, 1 = email/magic proxy,
    ///   2 = browser proxy wallet.
    pub async fn connect(
        clob_url: &str,
        private_key: &str,
        signature_type: u8,
    ) -> anyhow::Result<Self> {
        let key = if private_key.starts_with("0x") {
            private_key.to_string()
        } else {
            format!("0x{private_key}")
        };
        let signer = PrivateKeySigner::from_str(&key)
            .map_err(|e| anyhow::anyhow!("invalid private key: {e}"))?
            .with_chain_id(Some(POLYGON));

        let signature_type = match signature_type {
            0 => SignatureType::Eoa,
            1 => SignatureType::Proxy,
            2 => SignatureType::GnosisSafe,
            other => anyhow::bail!("unsupported signature type {other}"),
        };

        let unauthenticated = Client::new(clob_url, Config::default())?;
        let client = unauthenticated
            .authentication_builder(&signer)
            .signature_type(signature_type)
            .authenticate()
            .await?;

        Ok(Self { signer, client })
    }

    /// The wallet's Ethereum address as a checksummed hex string.
    pub fn wallet_address(&self) -> String {
        format!("{}", self.client.address())
    }

    /// Borrow the authenticated SDK client.
    pub fn client(&self) -> &Client<Authenticated<Normal>> {
        &self.client
    }

    /// Borrow the local signer (needed for order signing).
    pub fn signer(&self) -> &PrivateKeySigner {
        &self.signer
    }
}
