use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Activity (Data API)
// ---------------------------------------------------------------------------

/// One record of the public activity feed, newest-first.
///
/// Every field is optional at the wire level; the feed mixes trades with
/// splits, merges and redemptions, and only TRADE rows carry the full set.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ActivityEntry {
    #[serde(default, rename = "type")]
    pub activity_type: Option<String>,
    #[serde(default)]
    pub side: Option<String>,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub outcome: Option<String>,
    #[serde(default, alias = "conditionId")]
    pub condition_id: Option<String>,
    #[serde(default, alias = "outcomeIndex")]
    pub outcome_index: Option<u32>,
    #[serde(default)]
    pub size: Option<Decimal>,
    #[serde(default)]
    pub price: Option<Decimal>,
    /// CTF token ID of the traded outcome.
    #[serde(default)]
    pub asset: Option<String>,
    /// Epoch timestamp; the API emits numbers or numeric strings.
    #[serde(default)]
    pub timestamp: Option<serde_json::Value>,
}

impl ActivityEntry {
    /// Trade time as UTC. Accepts epoch seconds, epoch milliseconds and
    /// numeric strings.
    pub fn traded_at(&self) -> Option<DateTime<Utc>> {
        let secs = match self.timestamp.as_ref()? {
            serde_json::Value::Number(n) => n.as_i64()?,
            serde_json::Value::String(s) => s.parse::<i64>().ok()?,
            _ => return None,
        };
        if secs > 1_000_000_000_000 {
            DateTime::from_timestamp(secs / 1000, ((secs % 1000) * 1_000_000) as u32)
        } else {
            DateTime::from_timestamp(secs, 0)
        }
    }
}

// ---------------------------------------------------------------------------
// Position (Data API)
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ApiPosition {
    #[serde(default, alias = "conditionId")]
    pub condition_id: Option<String>,
    #[serde(default, alias = "outcomeIndex")]
    pub outcome_index: Option<u32>,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub outcome: Option<String>,
    #[serde(default)]
    pub size: Option<Decimal>,
}

// ---------------------------------------------------------------------------
// Order book (CLOB API)
// ---------------------------------------------------------------------------

/// A single book level. The CLOB serves price and size as strings.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct BookLevel {
    pub price: String,
    pub size: String,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct OrderBook {
    #[serde(default)]
    pub market: Option<String>,
    #[serde(default)]
    pub asset_id: Option<String>,
    #[serde(default)]
    pub bids: Vec<BookLevel>,
    #[serde(default)]
    pub asks: Vec<BookLevel>,
}

impl OrderBook {
    /// Lowest ask as (price, size). Levels that fail to parse are ignored.
    pub fn best_ask(&self) -> Option<(Decimal, Decimal)> {
        self.asks
            .iter()
            .filter_map(|l| {
                let price: Decimal = l.price.parse().ok()?;
                let size: Decimal = l.size.parse().ok()?;
                Some((price, size))
            })
            .min_by_key(|(price, _)| *price)
    }
}
