use std::sync::Arc;

use polymarket_client_sdk::clob::types::{OrderType, Side as SdkSide};
use polymarket_client_sdk::types::U256;
use reqwest::Client;
use rust_decimal::Decimal;

use super::types::OrderBook;
use super::wallet::PolymarketWallet;

/// What was actually asked of the CLOB for a submitted order.
#[derive(Debug, Clone)]
pub struct OrderReceipt {
    pub price: Decimal,
    pub size: Decimal,
}

/// Simplified trading interface wrapping the Polymarket SDK client.
pub struct TradingClient {
    wallet: Arc<PolymarketWallet>,
    http: Client,
    base_url: String,
}

impl TradingClient {
    pub fn new(wallet: Arc<PolymarketWallet>, http: Client, base_url: String) -> Self {
        Self {
            wallet,
            http,
            base_url,
        }
    }

    /// Place a fill-or-kill market buy for a fixed notional.
    ///
    /// A market buy is expressed as a FOK limit at the current best ask,
    /// sized to spend `notional`: the order fills in full immediately or the
    /// venue cancels it.
    ///
    /// * `token_id` — CTF token ID (decimal string, e.g. from the feed's
    ///   `asset` field).
    /// * `notional` — USDC amount to spend.
    pub async fn place_market_buy(
        &self,
        token_id: &str,
        notional: Decimal,
    ) -> anyhow::Result<OrderReceipt> {
        let book = self.order_book(token_id).await?;
        let (price, depth) = book
            .best_ask()
            .ok_or_else(|| anyhow::anyhow!("order book has no asks for token {token_id}"))?;

        let size = order_size(notional, price);
        if size <= Decimal::ZERO {
            anyhow::bail!("notional {notional} too small to buy at {price}");
        }

        let token_id_u256 = U256::from_str_radix(token_id, 10)
            .or_else(|_| {
                // Try hex if decimal parse fails
                token_id
                    .strip_prefix("0x")
                    .map(|hex| U256::from_str_radix(hex, 16))
                    .unwrap_or_else(|| U256::from_str_radix(token_id, 16))
            })?;

        tracing::info!(
            token_id,
            size = %size,
            price = %price,
            ask_depth = %depth,
            "Placing FOK market buy on CLOB"
        );

        let client = self.wallet.client();
        let signer = self.wallet.signer();

        let signable_order = client
            .limit_order()
            .token_id(token_id_u256)
            .side(SdkSide::Buy)
            .price(price)
            .size(size)
            .order_type(OrderType::FOK)
            .build()
            .await?;

        let signed_order = client.sign(signer, signable_order).await?;
        let response = client.post_order(signed_order).await?;

        if let Some(msg) = response.error_msg.as_deref().filter(|m| !m.is_empty()) {
            anyhow::bail!("order rejected by CLOB: {msg}");
        }

        tracing::info!(
            order_id = ?response.order_id,
            status = ?response.status,
            "Order submitted to CLOB"
        );

        Ok(OrderReceipt { price, size })
    }

    /// Fetch the order book for a token. The book endpoint is public.
    async fn order_book(&self, token_id: &str) -> anyhow::Result<OrderBook> {
        let url = format!("{}/book", self.base_url);
        let resp = self
            .http
            .get(&url)
            .query(&[("token_id", token_id)])
            .send()
            .await?;

        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            anyhow::bail!("CLOB API returned {status}: {body}");
        }

        Ok(resp.json().await?)
    }
}

/// Shares bought when spending `notional` at `price`, rounded to the venue's
/// two-decimal share precision.
fn order_size(notional: Decimal, price: Decimal) -> Decimal {
    if price <= Decimal::ZERO {
        return Decimal::ZERO;
    }
    (notional / price).round_dp(2)
}
