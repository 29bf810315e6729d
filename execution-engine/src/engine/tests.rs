use super::*;
use crate::risk_guard::{Policy, RiskDecision};
use trading::{OrderRejection, OrderTicket};

struct RejectPolicy;
impl Policy for RejectPolicy {
    fn name(&self) -> &str {
        "RejectAll"
    }
    fn check(&self, _: &OrderTicket) -> RiskDecision {
        RiskDecision::Rejected(OrderRejection::NonPositiveQuantity)
    }
}

fn init() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn instrument(name: &str, price: f64) -> Instrument {
    Instrument::new(name, price)
}

#[test]
fn test_buy_debits_and_records_price() {
    init();
    let mut executor = OrderExecutor::default();
    let mut account = Account::new(10_000.0).unwrap();
    let sap = instrument("SAP", 110.0);

    let fill = executor.buy(&mut account, Some(&sap), 5).unwrap();

    assert_eq!(fill.side, Side::Buy);
    assert_eq!(fill.quantity, 5);
    assert!((fill.notional - 550.0).abs() < 1e-6);
    assert!((account.balance() - 9_450.0).abs() < 1e-6);
    assert_eq!(executor.analyzer().history("SAP"), vec![110.0]);
}

#[test]
fn test_buy_without_funds_changes_nothing() {
    let mut executor = OrderExecutor::default();
    let mut account = Account::new(10.0).unwrap();
    let luxury = instrument("Luxury", 500.0);

    let err = executor.buy(&mut account, Some(&luxury), 1).unwrap_err();

    assert_eq!(
        err,
        TradingError::InsufficientFunds {
            required: 500.0,
            available: 10.0,
        }
    );
    assert_eq!(account.balance(), 10.0);
    assert!(executor.analyzer().history("Luxury").is_empty());
}

#[test]
fn test_buy_exactly_affordable() {
    let mut executor = OrderExecutor::default();
    let mut account = Account::new(300.0).unwrap();
    let bmw = instrument("BMW", 100.0);

    executor.buy(&mut account, Some(&bmw), 3).unwrap();
    assert_eq!(account.balance(), 0.0);
}

#[test]
fn test_buy_accepts_cost_equal_to_balance_despite_float_noise() {
    let mut executor = OrderExecutor::default();
    let mut account = Account::new(414.45).unwrap();
    let apple = instrument("Apple", 138.15);

    let fill = executor.buy(&mut account, Some(&apple), 3).unwrap();

    assert_eq!(fill.quantity, 3);
    assert_eq!(account.balance(), 0.0);
}

#[test]
fn test_invalid_orders_are_rejected_before_mutation() {
    let mut executor = OrderExecutor::default();
    let mut account = Account::new(1_000.0).unwrap();
    let sap = instrument("SAP", 110.0);

    assert_eq!(
        executor.buy(&mut account, None, 1).unwrap_err(),
        TradingError::InvalidOrder(OrderRejection::MissingInstrument)
    );
    assert_eq!(
        executor.buy(&mut account, Some(&sap), 0).unwrap_err(),
        TradingError::InvalidOrder(OrderRejection::NonPositiveQuantity)
    );
    assert_eq!(
        executor.sell(&mut account, None, 0).unwrap_err(),
        TradingError::InvalidOrder(OrderRejection::MissingInstrument)
    );

    assert_eq!(account.balance(), 1_000.0);
    assert_eq!(executor.analyzer().tracked_instruments(), 0);
}

#[test]
fn test_sell_credits_and_records_price() {
    let mut executor = OrderExecutor::default();
    let mut account = Account::new(0.0).unwrap();
    let apple = instrument("Apple", 150.0);

    let fill = executor.sell(&mut account, Some(&apple), 4).unwrap();

    assert_eq!(fill.side, Side::Sell);
    assert!((account.balance() - 600.0).abs() < 1e-6);
    assert_eq!(executor.analyzer().history("Apple"), vec![150.0]);
}

#[test]
fn test_zero_price_sell_fails_without_recording() {
    let mut executor = OrderExecutor::default();
    let mut account = Account::new(0.0).unwrap();
    let broken = instrument("Broken", 0.0);

    assert!(matches!(
        executor.sell(&mut account, Some(&broken), 1),
        Err(TradingError::InvalidAmount { .. })
    ));
    assert_eq!(account.balance(), 0.0);
    assert!(executor.analyzer().history("Broken").is_empty());
}

#[test]
fn test_custom_validator_blocks_execution() {
    let mut validator = OrderValidator::empty();
    validator.add_policy(Box::new(RejectPolicy));
    let mut executor = OrderExecutor::new(validator, HistoryAnalyzer::default());
    let mut account = Account::new(1_000.0).unwrap();
    let sap = instrument("SAP", 10.0);

    assert!(executor.buy(&mut account, Some(&sap), 1).is_err());
    assert_eq!(account.balance(), 1_000.0);
}

#[test]
fn test_fill_serialization() {
    let mut executor = OrderExecutor::default();
    let mut account = Account::new(1_000.0).unwrap();
    let sap = instrument("SAP", 10.0);

    let fill = executor.buy(&mut account, Some(&sap), 2).unwrap();
    let json = serde_json::to_string(&fill).unwrap();
    assert!(json.contains("\"side\":\"Buy\""));
    assert!(json.contains("\"instrument\":\"SAP\""));
}
