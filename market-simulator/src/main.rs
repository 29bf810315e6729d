//! Console driver for the trading simulation.
//!
//! Each round the random-walk feed moves every quote, the agent trades on the
//! new prices, and the quotes and the agent's status are logged.

mod args;
mod display;
mod feed;
mod settings;
mod simulator;

use anyhow::Result;
use args::Args;
use clap::Parser;
use feed::RandomWalkFeed;
use log::info;
use settings::SimulationConfig;
use simulator::{spawn_stdin_reader, Pacing, Simulator};
use std::time::Duration;
use trading_agent::TradingAgent;

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();
    let mut config = SimulationConfig::load(args.config.as_deref())?;
    config.apply_args(&args);

    info!("=== Market Simulator ===");

    // 1. Market and agent
    let registry = config.registry();
    let agent = TradingAgent::with_config(
        config.agent_name.clone(),
        config.initial_capital,
        config.agent.clone(),
    )?;
    info!(
        "Agent {} trading {} instruments with {:.2} starting capital",
        agent.name(),
        registry.len(),
        config.initial_capital
    );

    // 2. Price feed
    let feed = RandomWalkFeed::new(config.volatility_pct, args.seed);

    // 3. Run
    let pacing = if args.step {
        Pacing::Step
    } else {
        Pacing::Timer(Duration::from_millis(config.round_interval_ms))
    };
    let mut simulator = Simulator::new(registry, agent, feed);
    simulator
        .run(spawn_stdin_reader(), pacing, args.rounds)
        .await?;

    info!(
        "{} finished after {} rounds on {} instruments",
        simulator.agent().name(),
        simulator.rounds(),
        simulator.registry().len()
    );
    Ok(())
}
