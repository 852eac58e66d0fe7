use std::collections::HashSet;
use std::sync::Arc;

use anyhow::Context;

use crate::config::CopyConfig;
use crate::models::{CopyOutcome, Side};
use crate::polymarket::types::{ActivityEntry, ApiPosition};
use crate::polymarket::{DataClient, GammaClient, PolymarketWallet, TradingClient};

/// Activity records fetched per run. The decision only ever looks at the
/// newest page; older trades are out of scope.
const ACTIVITY_PAGE_SIZE: u32 = 20;

/// First entry in the feed page that is a buy trade, or `None`.
///
/// The page arrives newest-first, so the first match is the target's most
/// recent buy.
pub fn latest_buy(entries: &[ActivityEntry]) -> Option<&ActivityEntry> {
    entries.iter().find(|e| {
        e.activity_type.as_deref() == Some("TRADE")
            && e.side.as_deref().and_then(Side::from_api_str) == Some(Side::Buy)
    })
}

/// Whether any current position matches the target market/outcome pair.
///
/// Positions missing either key contribute nothing to the held set.
pub fn already_has_position(
    positions: &[ApiPosition],
    condition_id: &str,
    outcome_index: u32,
) -> bool {
    let key = |c: &str, o: u32| format!("{c}_{o}");
    let held: HashSet<String> = positions
        .iter()
        .filter_map(|p| Some(key(p.condition_id.as_deref()?, p.outcome_index?)))
        .collect();
    held.contains(&key(condition_id, outcome_index))
}

/// Run the copy pipeline once: resolve the target, find their latest buy,
/// skip if the funder already holds it, otherwise authenticate and place
/// (or preview) a fill-or-kill market buy.
pub async fn run_copy(
    config: &CopyConfig,
    data: &DataClient,
    gamma: &GammaClient,
) -> anyhow::Result<CopyOutcome> {
    let profile = gamma.get_public_profile(&config.target_address).await?;
    let target_name = profile.display_name(&config.target_address);
    tracing::info!(
        target = %target_name,
        bet_amount = %config.bet_amount,
        mode = if config.dry_run { "DRY RUN" } else { "LIVE" },
        "Copy run started"
    );

    tracing::info!("Fetching target's latest bet...");
    let activity = data
        .get_activity(&config.target_address, ACTIVITY_PAGE_SIZE)
        .await?;
    let Some(latest) = latest_buy(&activity) else {
        tracing::info!("No recent bets found. Nothing to copy");
        return Ok(CopyOutcome::NoRecentBuy);
    };

    let outcome = latest.outcome.clone().unwrap_or_default();
    tracing::info!(
        title = %truncated(latest.title.as_deref().unwrap_or("<untitled>"), 50),
        outcome = %outcome,
        size = %latest.size.unwrap_or_default(),
        price = %latest.price.unwrap_or_default(),
        traded_at = ?latest.traded_at(),
        "Found latest buy"
    );

    tracing::info!("Checking your positions...");
    let positions = data.get_positions(&config.funder_address).await?;
    if positions.is_empty() {
        tracing::info!("You have no open positions");
    }
    for pos in &positions {
        tracing::info!(
            title = %truncated(pos.title.as_deref().unwrap_or("<untitled>"), 40),
            outcome = %pos.outcome.as_deref().unwrap_or(""),
            "Open position"
        );
    }

    let condition_id = latest
        .condition_id
        .as_deref()
        .context("activity entry is missing conditionId")?;
    let outcome_index = latest
        .outcome_index
        .context("activity entry is missing outcomeIndex")?;
    if already_has_position(&positions, condition_id, outcome_index) {
        tracing::info!(condition_id, outcome_index, "Already in this market. Nothing to do");
        return Ok(CopyOutcome::AlreadyPositioned);
    }
    tracing::info!("Not in this market yet. Proceeding...");

    // Credentials are derived even in dry-run mode.
    let wallet = PolymarketWallet::connect(
        &config.clob_api_url,
        &config.private_key,
        config.signature_type,
    )
    .await?;
    tracing::info!(address = %wallet.wallet_address(), "Authenticated with the CLOB");

    if config.dry_run {
        tracing::info!(
            amount = %config.bet_amount,
            outcome = %outcome,
            "DRY RUN — would place market buy"
        );
        return Ok(CopyOutcome::DryRun {
            outcome,
            amount: config.bet_amount,
        });
    }

    let token_id = latest
        .asset
        .as_deref()
        .context("activity entry is missing asset")?;
    let trading = TradingClient::new(
        Arc::new(wallet),
        reqwest::Client::new(),
        config.clob_api_url.clone(),
    );
    let receipt = trading.place_market_buy(token_id, config.bet_amount).await?;
    tracing::info!(
        amount = %config.bet_amount,
        outcome = %outcome,
        price = %receipt.price,
        size = %receipt.size,
        "Copy order placed"
    );

    Ok(CopyOutcome::Placed {
        outcome,
        amount: config.bet_amount,
    })
}

fn truncated(s: &str, max_chars: usize) -> String {
    s.chars().take(max_chars).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(activity_type: &str, side: &str) -> ActivityEntry {
        serde_json::from_value(serde_json::json!({
            "type": activity_type,
            "side": side,
        }))
        .unwrap()
    }

    fn position(condition_id: &str, outcome_index: u32) -> ApiPosition {
        serde_json::from_value(serde_json::json!({
            "conditionId": condition_id,
            "outcomeIndex": outcome_index,
        }))
        .unwrap()
    }

    #[test]
    fn latest_buy_takes_first_trade_buy() {
        let entries = vec![
            entry("REDEEM", ""),
            entry("TRADE", "SELL"),
            entry("TRADE", "BUY"),
            entry("TRADE", "BUY"),
        ];
        let found = latest_buy(&entries).unwrap();
        assert!(std::ptr::eq(found, &entries[2]));
    }

    #[test]
    fn latest_buy_none_when_page_has_no_buys() {
        let entries = vec![entry("TRADE", "SELL"), entry("SPLIT", "")];
        assert!(latest_buy(&entries).is_none());
        assert!(latest_buy(&[]).is_none());
    }

    #[test]
    fn duplicate_check_matches_condition_and_outcome() {
        let positions = vec![position("0xabc", 0), position("0xdef", 1)];
        assert!(already_has_position(&positions, "0xabc", 0));
        assert!(!already_has_position(&positions, "0xabc", 1));
        assert!(!already_has_position(&positions, "0x999", 0));
    }

    #[test]
    fn duplicate_check_false_on_empty_positions() {
        assert!(!already_has_position(&[], "0xabc", 0));
    }

    #[test]
    fn duplicate_check_skips_positions_missing_keys() {
        let bare: ApiPosition = serde_json::from_value(serde_json::json!({
            "title": "Some market",
        }))
        .unwrap();
        assert!(!already_has_position(&[bare], "0xabc", 0));
    }
}
