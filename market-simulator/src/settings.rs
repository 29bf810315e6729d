use crate::args::Args;
use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;
use trading::{Instrument, InstrumentRegistry};
use trading_agent::AgentConfig;

const ENV_PREFIX: &str = "MARKET_SIM";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InstrumentSeed {
    pub name: String,
    pub price: f64,
}

impl InstrumentSeed {
    pub fn new(name: impl Into<String>, price: f64) -> Self {
        Self {
            name: name.into(),
            price,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulationConfig {
    pub agent_name: String,
    pub initial_capital: f64,
    pub round_interval_ms: u64,
    /// Maximum per-round price move, in percent, in either direction.
    pub volatility_pct: f64,
    pub instruments: Vec<InstrumentSeed>,
    pub agent: AgentConfig,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            agent_name: "MegaTrader3000".to_string(),
            initial_capital: 50_000.0,
            round_interval_ms: 3_000,
            volatility_pct: 5.0,
            instruments: vec![
                InstrumentSeed::new("Apple", 150.00),
                InstrumentSeed::new("BMW", 85.50),
                InstrumentSeed::new("SAP", 110.00),
                InstrumentSeed::new("Siemens", 95.75),
                InstrumentSeed::new("Deutsche Telekom", 28.30),
            ],
            agent: AgentConfig::default(),
        }
    }
}

impl SimulationConfig {
    /// Layers defaults, the optional file at `path` and `MARKET_SIM__*`
    /// environment variables, in that order.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let mut builder = config::Config::builder();
        if let Some(path) = path {
            builder = builder.add_source(config::File::from(path));
        }
        builder = builder.add_source(
            config::Environment::with_prefix(ENV_PREFIX)
                .separator("__")
                .try_parsing(true),
        );

        let settings = builder
            .build()
            .context("failed to read simulation configuration")?;
        let config: Self = settings
            .try_deserialize()
            .context("invalid simulation configuration")?;
        config.validate()?;
        Ok(config)
    }

    /// Command line flags win over every other source.
    pub fn apply_args(&mut self, args: &Args) {
        if let Some(interval) = args.interval_ms {
            self.round_interval_ms = interval;
        }
    }

    pub fn validate(&self) -> Result<()> {
        if self.instruments.is_empty() {
            bail!("at least one instrument must be configured");
        }
        if let Some(bad) = self.instruments.iter().find(|i| !(i.price > 0.0)) {
            bail!(
                "instrument '{}' has non-positive starting price {}",
                bad.name,
                bad.price
            );
        }
        if !(self.initial_capital >= 0.0) {
            bail!("initial capital must not be negative");
        }
        if !(0.0..100.0).contains(&self.volatility_pct) {
            bail!(
                "volatility must be within [0, 100) percent, got {}",
                self.volatility_pct
            );
        }
        Ok(())
    }

    pub fn registry(&self) -> InstrumentRegistry {
        self.instruments
            .iter()
            .map(|seed| Instrument::new(seed.name.clone(), seed.price))
            .collect()
    }
}
