use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

// ---------------------------------------------------------------------------
// Side
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Side {
    Buy,
    Sell,
}

impl Side {
    pub fn from_api_str(s: &str) -> Option<Self> {
        match s.to_uppercase().as_str() {
            "BUY" | "0" => Some(Side::Buy),
            "SELL" | "1" => Some(Side::Sell),
            _ => None,
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Side::Buy => write!(f, "BUY"),
            Side::Sell => write!(f, "SELL"),
        }
    }
}

// ---------------------------------------------------------------------------
// CopyOutcome — terminal state of a copy run
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CopyOutcome {
    /// No TRADE/BUY entry in the fetched activity page.
    NoRecentBuy,
    /// The funder already holds the target's market/outcome pair.
    AlreadyPositioned,
    /// Dry-run gate hit: the order was previewed, never submitted.
    DryRun { outcome: String, amount: Decimal },
    /// A fill-or-kill market buy was submitted.
    Placed { outcome: String, amount: Decimal },
}

impl fmt::Display for CopyOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CopyOutcome::NoRecentBuy => write!(f, "no recent bets found, nothing to copy"),
            CopyOutcome::AlreadyPositioned => write!(f, "already in this market, nothing to do"),
            CopyOutcome::DryRun { outcome, amount } => {
                write!(f, "dry run: would buy ${amount} of {outcome}")
            }
            CopyOutcome::Placed { outcome, amount } => {
                write!(f, "bought ${amount} of {outcome}")
            }
        }
    }
}
