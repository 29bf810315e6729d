use super::*;

fn analyzer_with(name: &str, prices: &[f64]) -> HistoryAnalyzer {
    let mut analyzer = HistoryAnalyzer::default();
    let mut instrument = Instrument::new(name, 1.0);
    for &price in prices {
        instrument.set_price(price);
        analyzer.record_price(&instrument).unwrap();
    }
    analyzer
}

#[test]
fn test_history_is_bounded_fifo() {
    let prices: Vec<f64> = (1..=101).map(|p| p as f64).collect();
    let analyzer = analyzer_with("SAP", &prices);

    let history = analyzer.history("SAP");
    assert_eq!(history.len(), 100);
    assert_eq!(history.first(), Some(&2.0));
    assert_eq!(history.last(), Some(&101.0));
}

#[test]
fn test_average_over_full_history() {
    let analyzer = analyzer_with("SAP", &[100.0, 120.0, 140.0]);
    assert!((analyzer.average_price("SAP") - 120.0).abs() < 1e-9);
    assert_eq!(analyzer.average_price("BMW"), 0.0);
}

#[test]
fn test_record_rejects_non_positive_price() {
    let mut analyzer = HistoryAnalyzer::default();

    for price in [0.0, -3.0] {
        let err = analyzer
            .record_price(&Instrument::new("Broken", price))
            .unwrap_err();
        assert!(matches!(err, TradingError::InvalidPrice { .. }));
    }
    assert!(analyzer.history("Broken").is_empty());
    assert_eq!(analyzer.tracked_instruments(), 0);
}

#[test]
fn test_cheap_threshold_is_exclusive() {
    let analyzer = analyzer_with("SAP", &[100.0, 100.0]);

    let at_94 = Instrument::new("SAP", 94.0);
    assert!((analyzer.deviation_percent(&at_94) + 6.0).abs() < 1e-9);
    assert!(analyzer.is_cheap(&at_94));

    let at_96 = Instrument::new("SAP", 96.0);
    assert!((analyzer.deviation_percent(&at_96) + 4.0).abs() < 1e-9);
    assert!(!analyzer.is_cheap(&at_96));

    let at_95 = Instrument::new("SAP", 95.0);
    assert!(!analyzer.is_cheap(&at_95));
}

#[test]
fn test_expensive_threshold_is_exclusive() {
    let analyzer = analyzer_with("SAP", &[100.0]);

    assert!(analyzer.is_expensive(&Instrument::new("SAP", 106.0)));
    assert!(!analyzer.is_expensive(&Instrument::new("SAP", 105.0)));
    assert!(!analyzer.is_expensive(&Instrument::new("SAP", 104.0)));
}

#[test]
fn test_no_history_is_neutral() {
    let analyzer = HistoryAnalyzer::default();
    let instrument = Instrument::new("New", 42.0);

    assert_eq!(analyzer.deviation_percent(&instrument), 0.0);
    assert!(!analyzer.is_cheap(&instrument));
    assert!(!analyzer.is_expensive(&instrument));
    assert!(analyzer.history("New").is_empty());
}

#[test]
fn test_trend_windows() {
    let rising = [
        100.0, 100.0, 100.0, 100.0, 100.0, 120.0, 120.0, 120.0, 120.0, 120.0,
    ];
    let falling: Vec<f64> = rising.iter().rev().copied().collect();
    let stable = [
        100.0, 100.5, 99.8, 100.2, 100.9, 100.1, 99.9, 100.4, 100.6, 100.0,
    ];

    assert_eq!(analyzer_with("A", &rising).trend("A"), Trend::Rising);
    assert_eq!(analyzer_with("A", &falling).trend("A"), Trend::Falling);
    assert_eq!(analyzer_with("A", &stable).trend("A"), Trend::Stable);
    assert_eq!(analyzer_with("A", &rising[..9]).trend("A"), Trend::Unknown);
    assert_eq!(HistoryAnalyzer::default().trend("A"), Trend::Unknown);
}

#[test]
fn test_trend_ignores_older_entries() {
    // A huge spike long ago must not influence the last ten entries.
    let mut prices = vec![1000.0; 30];
    prices.extend([50.0; 10]);
    assert_eq!(analyzer_with("A", &prices).trend("A"), Trend::Stable);
}

#[test]
fn test_histories_are_independent() {
    let mut analyzer = analyzer_with("A", &[10.0, 20.0]);
    analyzer
        .record_price(&Instrument::new("B", 500.0))
        .unwrap();

    assert_eq!(analyzer.history("A"), vec![10.0, 20.0]);
    assert_eq!(analyzer.history("B"), vec![500.0]);
    assert_eq!(analyzer.tracked_instruments(), 2);
    assert_eq!(
        analyzer.summary(),
        vec![
            "A: 2 prices, mean 15.00".to_string(),
            "B: 1 prices, mean 500.00".to_string(),
        ]
    );
}

#[test]
fn test_custom_capacity() {
    let mut analyzer = HistoryAnalyzer::new(AnalyzerConfig::default().with_capacity(3));
    for price in [1.0, 2.0, 3.0, 4.0] {
        analyzer
            .record_price(&Instrument::new("A", price))
            .unwrap();
    }
    assert_eq!(analyzer.history("A"), vec![2.0, 3.0, 4.0]);
}

#[test]
fn test_trend_display() {
    assert_eq!(Trend::Rising.to_string(), "RISING");
    assert_eq!(Trend::Unknown.to_string(), "UNKNOWN");
}
