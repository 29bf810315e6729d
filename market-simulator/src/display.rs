use execution_engine::HistoryAnalyzer;
use trading::InstrumentRegistry;

/// Renders the current quotes with each instrument's trend as table rows.
pub fn price_table(registry: &InstrumentRegistry, analyzer: &HistoryAnalyzer) -> Vec<String> {
    let mut lines = Vec::with_capacity(registry.len() + 4);
    lines.push("+--------------------+------------+----------+".to_string());
    lines.push("| Instrument         |      Price | Trend    |".to_string());
    lines.push("+--------------------+------------+----------+".to_string());
    for instrument in registry.iter() {
        lines.push(format!(
            "| {:<18} | {:>10.2} | {:<8} |",
            instrument.name(),
            instrument.price(),
            analyzer.trend(instrument.name()).to_string()
        ));
    }
    lines.push("+--------------------+------------+----------+".to_string());
    lines
}
