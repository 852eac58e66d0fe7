use rust_decimal::Decimal;

use polycopy::execution::copy_engine::{already_has_position, latest_buy};
use polycopy::models::CopyOutcome;
use polycopy::polymarket::types::{ActivityEntry, ApiPosition, OrderBook};
use polycopy::polymarket::PublicProfile;

/// An activity page the way the Data API serves it: newest first, trades
/// mixed with redemptions, camelCase keys, numeric sizes and prices.
fn activity_fixture() -> Vec<ActivityEntry> {
    serde_json::from_value(serde_json::json!([
        {
            "type": "REDEEM",
            "title": "Will ETH close above $4k in August?",
            "conditionId": "0x1111",
            "outcomeIndex": 1,
            "timestamp": 1723000500
        },
        {
            "type": "TRADE",
            "side": "SELL",
            "title": "Fed rate cut announced by September?",
            "outcome": "No",
            "conditionId": "0x2222",
            "outcomeIndex": 1,
            "size": 310.0,
            "price": 0.22,
            "asset": "71321045679252212594626385532706912750332728571942532289631379312455583992563",
            "timestamp": 1723000400
        },
        {
            "type": "TRADE",
            "side": "BUY",
            "title": "Will the incumbent win the 2026 governor race in Ohio?",
            "outcome": "Yes",
            "conditionId": "0xabc",
            "outcomeIndex": 0,
            "size": 1450.5,
            "price": 0.63,
            "asset": "21742633143463906290569050155826241533067272736897614950488156847949938836455",
            "timestamp": 1723000300
        },
        {
            "type": "TRADE",
            "side": "BUY",
            "title": "An older buy that must not be selected",
            "outcome": "No",
            "conditionId": "0x3333",
            "outcomeIndex": 1,
            "size": 12.0,
            "price": 0.81,
            "asset": "555",
            "timestamp": 1722999000
        }
    ]))
    .unwrap()
}

fn positions_fixture() -> Vec<ApiPosition> {
    serde_json::from_value(serde_json::json!([
        {
            "conditionId": "0x2222",
            "outcomeIndex": 1,
            "title": "Fed rate cut announced by September?",
            "outcome": "No",
            "size": 310.0
        },
        {
            "conditionId": "0x9999",
            "outcomeIndex": 0,
            "title": "Dust position kept by the zero size threshold",
            "outcome": "Yes",
            "size": 0.002
        }
    ]))
    .unwrap()
}

#[test]
fn latest_buy_selects_newest_trade_buy_from_page() {
    let activity = activity_fixture();
    let latest = latest_buy(&activity).expect("fixture contains a buy");

    assert_eq!(latest.condition_id.as_deref(), Some("0xabc"));
    assert_eq!(latest.outcome_index, Some(0));
    assert_eq!(latest.outcome.as_deref(), Some("Yes"));
    assert_eq!(latest.size, Some(Decimal::new(14505, 1)));
    assert_eq!(latest.price, Some(Decimal::new(63, 2)));
    assert_eq!(latest.traded_at().unwrap().timestamp(), 1_723_000_300);
}

#[test]
fn latest_buy_sentinel_when_no_buy_in_page() {
    let activity: Vec<ActivityEntry> = serde_json::from_value(serde_json::json!([
        { "type": "REDEEM" },
        { "type": "TRADE", "side": "SELL", "conditionId": "0x2222" }
    ]))
    .unwrap();

    assert!(latest_buy(&activity).is_none());
}

#[test]
fn target_buy_not_held_yet_proceeds() {
    let activity = activity_fixture();
    let positions = positions_fixture();
    let latest = latest_buy(&activity).unwrap();

    assert!(!already_has_position(
        &positions,
        latest.condition_id.as_deref().unwrap(),
        latest.outcome_index.unwrap(),
    ));
}

#[test]
fn target_buy_already_held_is_skipped() {
    let positions = positions_fixture();

    // Same market/outcome pair as an open position.
    assert!(already_has_position(&positions, "0x2222", 1));
    // Same market, other outcome: not a duplicate.
    assert!(!already_has_position(&positions, "0x2222", 0));
}

#[test]
fn profile_fallback_chain_over_wire_shapes() {
    let named: PublicProfile =
        serde_json::from_value(serde_json::json!({ "name": "TopTrader", "pseudonym": "Quiet-Owl" }))
            .unwrap();
    assert_eq!(named.display_name("0xdeadbeef00"), "TopTrader");

    let pseudonymous: PublicProfile =
        serde_json::from_value(serde_json::json!({ "pseudonym": "Quiet-Owl" })).unwrap();
    assert_eq!(pseudonymous.display_name("0xdeadbeef00"), "Quiet-Owl");

    let empty: PublicProfile = serde_json::from_value(serde_json::json!({})).unwrap();
    assert_eq!(
        empty.display_name("0x388537259dc9e693c1c9b96fdf07a63f6b7aca77"),
        "0x38853725..."
    );
}

#[test]
fn clob_book_parses_string_levels() {
    let book: OrderBook = serde_json::from_value(serde_json::json!({
        "market": "0xabc",
        "asset_id": "21742633143463906290569050155826241533067272736897614950488156847949938836455",
        "bids": [
            { "price": "0.61", "size": "900.00" }
        ],
        "asks": [
            { "price": "0.66", "size": "150.00" },
            { "price": "0.64", "size": "420.50" }
        ]
    }))
    .unwrap();

    let (price, size) = book.best_ask().unwrap();
    assert_eq!(price, Decimal::new(64, 2));
    assert_eq!(size, Decimal::new(42050, 2));
}

#[test]
fn terminal_states_render_for_the_run_summary() {
    assert_eq!(
        CopyOutcome::NoRecentBuy.to_string(),
        "no recent bets found, nothing to copy"
    );
    assert_eq!(
        CopyOutcome::AlreadyPositioned.to_string(),
        "already in this market, nothing to do"
    );
}
