use crate::display;
use anyhow::Result;
use log::info;
use std::time::Duration;
use tokio::sync::mpsc;
use tokio::time::MissedTickBehavior;
use trading::{InstrumentRegistry, PriceFeed};
use trading_agent::{SessionSummary, TradingAgent};

/// How the loop waits between rounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pacing {
    Timer(Duration),
    /// Wait for the operator to press Enter.
    Step,
}

/// Owns the market, the feed and the agent, and plays rounds.
pub struct Simulator<F: PriceFeed> {
    registry: InstrumentRegistry,
    agent: TradingAgent,
    feed: F,
    rounds: u64,
}

impl<F: PriceFeed> Simulator<F> {
    pub fn new(registry: InstrumentRegistry, agent: TradingAgent, feed: F) -> Self {
        Self {
            registry,
            agent,
            feed,
            rounds: 0,
        }
    }

    pub fn registry(&self) -> &InstrumentRegistry {
        &self.registry
    }

    pub fn agent(&self) -> &TradingAgent {
        &self.agent
    }

    pub fn rounds(&self) -> u64 {
        self.rounds
    }

    /// Plays one round: move prices, show them, trade, record the quotes,
    /// report the agent's status.
    pub fn run_round(&mut self) -> SessionSummary {
        self.rounds += 1;
        self.feed.tick(&mut self.registry);

        info!(
            "Quotes at {} (round {})",
            chrono::Local::now().format("%H:%M:%S"),
            self.rounds
        );
        for line in display::price_table(&self.registry, self.agent.analyzer()) {
            info!("{}", line);
        }

        info!("Trading round {}:", self.rounds);
        let summary = self.agent.trade_session(self.registry.iter().map(Some));
        self.agent.observe_market(self.registry.iter());
        info!(
            "Round {} done: {} bought, {} sold, {} held, {} failed",
            self.rounds, summary.bought, summary.sold, summary.held, summary.failed
        );

        for line in self.agent.status_report(&self.registry).lines() {
            info!("{}", line);
        }
        summary
    }

    /// Plays rounds until `max_rounds` is reached, the operator types `q`,
    /// the input closes in step mode, or Ctrl-C arrives.
    pub async fn run(
        &mut self,
        mut input: mpsc::UnboundedReceiver<String>,
        pacing: Pacing,
        max_rounds: Option<u64>,
    ) -> Result<()> {
        let mut input_open = true;

        let period = match pacing {
            Pacing::Timer(period) => period.max(Duration::from_millis(1)),
            Pacing::Step => Duration::from_secs(3600),
        };
        let mut ticker = tokio::time::interval(period);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

        info!("Type 'q' + Enter or press Ctrl-C to stop.");
        loop {
            if max_rounds.is_some_and(|limit| self.rounds >= limit) {
                info!("Reached the configured {} rounds", self.rounds);
                break;
            }

            match pacing {
                Pacing::Step => {
                    info!("Press Enter for round {}", self.rounds + 1);
                    tokio::select! {
                        line = input.recv() => match line {
                            Some(line) if is_quit(&line) => break,
                            Some(_) => {}
                            None => break,
                        },
                        _ = tokio::signal::ctrl_c() => break,
                    }
                }
                Pacing::Timer(_) => {
                    tokio::select! {
                        _ = ticker.tick() => {}
                        line = input.recv(), if input_open => {
                            match line {
                                Some(line) if is_quit(&line) => break,
                                Some(_) => {}
                                None => input_open = false,
                            }
                            continue;
                        }
                        _ = tokio::signal::ctrl_c() => break,
                    }
                }
            }

            self.run_round();
        }

        info!("Stopping simulation");
        self.log_statistics();
        Ok(())
    }

    pub fn log_statistics(&self) {
        let status = self.agent.status(&self.registry);
        info!("Simulation statistics:");
        info!("  Rounds played:   {}", self.rounds);
        info!("  Agent:           {}", self.agent.name());
        info!("  Orders executed: {}", self.agent.fills().len());
        info!("  Total assets:    {:.2}", status.total_value);
        info!(
            "  Profit/Loss:     {:+.2} ({:+.2}%)",
            status.profit_loss,
            status.profit_loss_pct()
        );
        for line in self.agent.analyzer().summary() {
            info!("  {}", line);
        }
    }
}

fn is_quit(line: &str) -> bool {
    line.trim().eq_ignore_ascii_case("q")
}

/// Forwards stdin lines from a dedicated thread. A blocking read on a tokio
/// worker could not be cancelled and would stall runtime shutdown.
pub fn spawn_stdin_reader() -> mpsc::UnboundedReceiver<String> {
    let (tx, rx) = mpsc::unbounded_channel();
    std::thread::spawn(move || {
        for line in std::io::stdin().lines() {
            let Ok(line) = line else { break };
            if tx.send(line).is_err() {
                break;
            }
        }
    });
    rx
}
